//! Bulk action toolbar shown above a grid table.
//!
//! The left side summarizes the selection and offers widening it to the
//! whole filtered dataset. The right side carries the bulk buttons for the
//! current mode, active table or trash.

use leptos::prelude::*;
use thaw::*;

use crate::shared::components::export_dialog::ExportFilterDef;
use crate::shared::components::table::format_number_int;
use crate::shared::icons::icon;

use super::controller::GridController;
use super::source::GridSource;

#[component]
pub fn GridToolbar<S: GridSource>(
    controller: GridController<S>,
    #[prop(optional)] export_filters: Option<Vec<ExportFilterDef>>,
) -> impl IntoView {
    let export_filters = export_filters.unwrap_or_default();
    let busy = Signal::derive(move || controller.is_busy());
    let selected_count = Signal::derive(move || controller.selection.get().count());
    let filtered_count = Signal::derive(move || controller.filtered_row_count.get() as usize);
    let nothing_selected = Signal::derive(move || busy.get() || selected_count.get() == 0);

    let actions = if controller.is_trash() {
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| controller.begin_restore()
                disabled=nothing_selected
            >
                {icon("restore")}
                " Pulihkan"
            </Button>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| controller.begin_delete()
                disabled=nothing_selected
            >
                {icon("trash")}
                " Hapus permanen"
            </Button>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| controller.begin_empty_trash()
                disabled=busy
            >
                " Kosongkan sampah"
            </Button>
        }
        .into_any()
    } else {
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| controller.begin_delete()
                disabled=nothing_selected
            >
                {icon("trash")}
                " Hapus"
            </Button>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| controller.begin_export(export_filters.clone())
                disabled=busy
            >
                {icon("download")}
                {move || if controller.export_running() { " Mengekspor..." } else { " Ekspor" }}
            </Button>
        }
        .into_any()
    };

    view! {
        <div class="bulk-bar">
            <div class="bulk-bar__left">
                {move || {
                    let count = selected_count.get();
                    if count == 0 {
                        return view! { <></> }.into_any();
                    }
                    view! {
                        <span class="bulk-bar__count">{format!("{} dipilih", count)}</span>
                    }
                    .into_any()
                }}
                {move || {
                    let count = selected_count.get();
                    let total = filtered_count.get();
                    if count == 0 || count >= total {
                        return view! { <></> }.into_any();
                    }
                    view! {
                        <button
                            class="button button--ghost button--small"
                            on:click=move |_| controller.select_all_in_dataset()
                        >
                            {format!("Pilih semua {} data", format_number_int(total as f64))}
                        </button>
                    }
                    .into_any()
                }}
                {move || {
                    if selected_count.get() == 0 {
                        return view! { <></> }.into_any();
                    }
                    view! {
                        <button
                            class="button button--ghost button--small"
                            on:click=move |_| controller.clear_selection()
                        >
                            "Bersihkan"
                        </button>
                    }
                    .into_any()
                }}
            </div>
            <div class="bulk-bar__right">{actions}</div>
        </div>
    }
}
