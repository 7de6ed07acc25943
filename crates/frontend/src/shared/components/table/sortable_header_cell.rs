//! Sortable table header cell
//!
//! # Example
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Nama"
//!     sort_field="name"
//!     current_sort_by=Signal::derive(move || state.with(|s| s.sort_by.clone()))
//!     sort_desc=Signal::derive(move || state.with(|s| s.sort_desc))
//!     on_sort=Callback::new(move |field| grid.toggle_sort(&field))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

/// Header cell that renders the sort indicator and forwards clicks
///
/// The backend does the sorting; clicking only updates the sort keys on
/// the list query.
#[component]
pub fn SortableHeaderCell(
    /// Header text
    #[prop(into)]
    label: String,

    /// Column key sent as `sortBy`
    #[prop(into)]
    sort_field: String,

    /// Active sort column from the grid state
    #[prop(into)]
    current_sort_by: Signal<Option<String>>,

    /// Sort direction from the grid state
    #[prop(into)]
    sort_desc: Signal<bool>,

    /// Callback on header click
    on_sort: Callback<String>,

    /// Minimum column width
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Header alignment (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,

    /// Whether the column can be resized
    #[prop(optional, default = true)]
    resizable: bool,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field.clone();

    let handle_click = move |_| {
        on_sort.run(sort_field_for_click.clone());
    };

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px; max-width: calc(100% - 12px);"
    } else {
        "cursor: pointer; padding-right: 12px; max-width: calc(100% - 12px);"
    };

    view! {
        <TableHeaderCell
            resizable=resizable
            min_width=min_width
            class="resizable"
        >
            <div
                class="table__sortable-header"
                style=header_style
                on:click=handle_click
            >
                {label}
                <span class=move || {
                    get_sort_class(current_sort_by.get().as_deref(), &sort_field_for_class)
                }>
                    {move || {
                        get_sort_indicator(
                            current_sort_by.get().as_deref(),
                            &sort_field_for_indicator,
                            sort_desc.get(),
                        )
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
