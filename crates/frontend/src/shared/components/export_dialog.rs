use std::collections::BTreeMap;

use chrono::NaiveDate;
use leptos::prelude::*;

use contracts::shared::{ExportFormat, ExportRequest};

use crate::shared::components::date_input::DateInput;

/// An extra export filter rendered as a select.
///
/// Options are value and label pairs. An empty value means "no filtering",
/// it is dropped from the request.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFilterDef {
    pub key: &'static str,
    pub label: &'static str,
    pub options: Vec<(&'static str, &'static str)>,
}

/// Parameter step of an export: file format, optional date range and any
/// entity specific filters. Submitting hands a ready [`ExportRequest`] back,
/// row scoping is added by the caller.
#[component]
pub fn ExportDialog(
    title: String,
    filters: Vec<ExportFilterDef>,
    on_submit: Callback<ExportRequest>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let format = RwSignal::new("xlsx".to_string());
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());
    let filter_values = RwSignal::new(BTreeMap::<String, String>::new());
    let submitted = RwSignal::new(false);

    let handle_submit = move |_| {
        if submitted.get_untracked() {
            return;
        }
        submitted.set(true);
        let format = if format.get_untracked() == "csv" {
            ExportFormat::Csv
        } else {
            ExportFormat::Xlsx
        };
        let mut request = ExportRequest::new(format);
        request.date_from = NaiveDate::parse_from_str(&date_from.get_untracked(), "%Y-%m-%d").ok();
        request.date_to = NaiveDate::parse_from_str(&date_to.get_untracked(), "%Y-%m-%d").ok();
        for (key, value) in filter_values.get_untracked() {
            request.set_filter(&key, &value);
        }
        on_submit.run(request);
    };

    view! {
        <div class="modal-header">
            <h2 class="modal-title">{title}</h2>
        </div>
        <div class="modal-body">
            <div class="export-form">
                <div class="export-form__field">
                    <label>"Format file"</label>
                    <select
                        prop:value=move || format.get()
                        on:change=move |ev| format.set(event_target_value(&ev))
                    >
                        <option value="xlsx">"Excel (.xlsx)"</option>
                        <option value="csv">"CSV (.csv)"</option>
                    </select>
                </div>
                <div class="export-form__field">
                    <label>"Dari tanggal"</label>
                    <DateInput value=date_from on_change=move |v| date_from.set(v) />
                </div>
                <div class="export-form__field">
                    <label>"Sampai tanggal"</label>
                    <DateInput value=date_to on_change=move |v| date_to.set(v) />
                </div>
                {filters
                    .into_iter()
                    .map(|def| {
                        let key = def.key;
                        view! {
                            <div class="export-form__field">
                                <label>{def.label}</label>
                                <select on:change=move |ev| {
                                    filter_values
                                        .update(|values| {
                                            values.insert(key.to_string(), event_target_value(&ev));
                                        });
                                }>
                                    {def.options
                                        .into_iter()
                                        .map(|(value, label)| {
                                            view! { <option value=value>{label}</option> }
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="modal-actions">
                <button
                    class="button button--primary"
                    prop:disabled=move || submitted.get()
                    on:click=handle_submit
                >
                    "Ekspor"
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Batal"
                </button>
            </div>
        </div>
    }
}
