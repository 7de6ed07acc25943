//! Header checkbox for selecting the visible table rows
//!
//! # Example
//!
//! ```rust,ignore
//! <TableHeaderCheckbox
//!     items=rows
//!     selected=selected
//!     get_id=Callback::new(|row: ProductRow| row.id.clone())
//!     on_change=Callback::new(move |check_all: bool| { ... })
//! />
//! ```

use crate::shared::datagrid::Selection;
use leptos::prelude::event_target_checked;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Tri-state checkbox in the table header
///
/// Shows unchecked, checked or indeterminate depending on how many of the
/// visible rows are in the selection. Checking selects the visible page,
/// unchecking clears the whole selection.
#[component]
pub fn TableHeaderCheckbox<T>(
    /// Rows of the visible page
    #[prop(into)]
    items: Signal<Vec<T>>,

    /// Current selection
    #[prop(into)]
    selected: Signal<Selection>,

    /// Extract the row id
    get_id: Callback<T, String>,

    /// Callback on change (true = select visible, false = clear all)
    on_change: Callback<bool>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let checkbox_state = Signal::derive(move || {
        let current_items = items.get();
        let sel = selected.get();

        if current_items.is_empty() {
            return CheckboxState::Unchecked;
        }

        let selected_count = current_items
            .iter()
            .filter(|&item| {
                let id = get_id.run(item.clone());
                sel.contains(&id)
            })
            .count();

        if selected_count == 0 {
            CheckboxState::Unchecked
        } else if selected_count == current_items.len() {
            CheckboxState::Checked
        } else {
            CheckboxState::Indeterminate
        }
    });

    // Indeterminate is only reachable through the DOM property
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            let state = checkbox_state.get();
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                let is_indeterminate = matches!(state, CheckboxState::Indeterminate);
                input_el.set_indeterminate(is_indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(checkbox_state.get(), CheckboxState::Checked)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </TableHeaderCell>
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}
