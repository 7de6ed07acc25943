//! Row checkbox for selecting a single table row
//!
//! # Example
//!
//! ```rust,ignore
//! <TableCellCheckbox
//!     item_id=row.id.clone()
//!     selected=selected
//!     on_change=Callback::new(move |(id, checked)| {
//!         grid.toggle_row(&id, checked);
//!     })
//! />
//! ```

use crate::shared::datagrid::Selection;
use leptos::prelude::*;
use thaw::*;

/// Checkbox cell bound to the grid selection
///
/// Stops click propagation so the row click handler does not fire twice
/// for the same gesture.
#[component]
pub fn TableCellCheckbox(
    /// Id of the row
    #[prop(into)]
    item_id: String,

    /// Current selection
    #[prop(into)]
    selected: Signal<Selection>,

    /// Callback on change (item_id, checked)
    on_change: Callback<(String, bool)>,
) -> impl IntoView {
    let item_id_for_checked = item_id.clone();
    let item_id_for_change = item_id.clone();

    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selected.get().contains(&item_id_for_checked)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run((item_id_for_change.clone(), checked));
                }
            />
        </TableCell>
    }
}
