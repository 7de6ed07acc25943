//! Reactive list controller over a [`GridSource`].
//!
//! One controller instance backs one mounted list view. It owns the query
//! state (page, page size, filter, sort), the id-keyed selection, the bulk
//! dispatcher phase and the fetch bookkeeping. All decisions are made by the
//! pure helpers in this module's siblings, the controller only wires them to
//! signals and spawned requests.

use chrono::Local;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use contracts::shared::{BulkOutcome, ExportRequest, TableQuery, DEFAULT_PAGE_SIZE};

use crate::shared::api_error::ApiError;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::export_dialog::{ExportDialog, ExportFilterDef};
use crate::shared::export::{export_file_name, save_export};
use crate::shared::list_utils::next_sort;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::notify::NotifyService;

use super::dispatcher::{
    can_begin, confirm_copy, partial_failure_message, success_message, BulkAction, DispatchPhase,
    GridTask,
};
use super::filter::{plan, FilterPlan, DEBOUNCE_MS};
use super::pagination::clamped_page;
use super::selection::Selection;
use super::source::GridSource;

pub struct GridController<S: GridSource> {
    source: S,
    pub rows: RwSignal<Vec<S::Row>>,
    pub total_row_count: RwSignal<u64>,
    pub filtered_row_count: RwSignal<u64>,
    pub page_count: RwSignal<usize>,
    pub page: RwSignal<usize>,
    pub page_size: RwSignal<usize>,
    filter: RwSignal<String>,
    pub sort_by: RwSignal<Option<String>>,
    pub sort_desc: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub selection: RwSignal<Selection>,
    pub phase: RwSignal<DispatchPhase>,
    is_trash: bool,
    can_force: Signal<bool>,
    fetch_epoch: RwSignal<u64>,
    filter_gen: RwSignal<u64>,
    notify: NotifyService,
    modals: ModalStackService,
}

impl<S: GridSource> Clone for GridController<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: GridSource> Copy for GridController<S> {}

impl<S: GridSource> GridController<S> {
    pub fn new(source: S, is_trash: bool, can_force: Signal<bool>) -> Self {
        let modals = use_context::<ModalStackService>().expect("ModalStackService not provided");
        let notify = use_context::<NotifyService>().expect("NotifyService not provided");
        Self {
            source,
            rows: RwSignal::new(Vec::new()),
            total_row_count: RwSignal::new(0),
            filtered_row_count: RwSignal::new(0),
            page_count: RwSignal::new(0),
            page: RwSignal::new(0),
            page_size: RwSignal::new(DEFAULT_PAGE_SIZE),
            filter: RwSignal::new(String::new()),
            sort_by: RwSignal::new(None),
            sort_desc: RwSignal::new(false),
            loading: RwSignal::new(false),
            selection: RwSignal::new(Selection::new()),
            phase: RwSignal::new(DispatchPhase::Idle),
            is_trash,
            can_force,
            fetch_epoch: RwSignal::new(0),
            filter_gen: RwSignal::new(0),
            notify,
            modals,
        }
    }

    pub fn source(&self) -> S {
        self.source
    }

    pub fn is_trash(&self) -> bool {
        self.is_trash
    }

    pub fn can_force(&self) -> Signal<bool> {
        self.can_force
    }

    /// True while a confirmation or request occupies the dispatcher
    pub fn is_busy(&self) -> bool {
        !self.phase.get().is_idle()
    }

    pub fn export_running(&self) -> bool {
        self.phase.get().is_executing(GridTask::Export)
    }

    fn current_query(&self) -> TableQuery {
        TableQuery {
            page: self.page.get_untracked(),
            page_size: self.page_size.get_untracked(),
            q: self.filter.get_untracked(),
            trashed: self.is_trash,
            sort_by: self.sort_by.get_untracked(),
            sort_desc: self.sort_desc.get_untracked(),
        }
    }

    // ------------------------------------------------------------------------
    // Fetching
    // ------------------------------------------------------------------------

    pub fn load(&self) {
        self.spawn_fetch(true);
    }

    fn spawn_fetch(&self, clamp_retry: bool) {
        let this = *self;
        let epoch = self.fetch_epoch.get_untracked() + 1;
        self.fetch_epoch.set(epoch);
        self.loading.set(true);
        let query = self.current_query();
        spawn_local(async move {
            let result = this.source.fetch_page(&query).await;
            // Answers to an outdated request are dropped
            if this.fetch_epoch.get_untracked() != epoch {
                return;
            }
            match result {
                Ok(page) => {
                    let page_count = page.page_count as usize;
                    let current = this.page.get_untracked();
                    let clamped = clamped_page(current, page_count);
                    if clamped != current && clamp_retry {
                        this.page.set(clamped);
                        this.spawn_fetch(false);
                        return;
                    }
                    this.rows.set(page.rows);
                    this.total_row_count.set(page.total_row_count);
                    this.filtered_row_count.set(page.filtered_row_count);
                    this.page_count.set(page_count);
                    this.loading.set(false);
                }
                Err(e) => {
                    this.loading.set(false);
                    this.notify.error(e.to_string());
                }
            }
        });
    }

    // ------------------------------------------------------------------------
    // Paging, sorting, filtering
    // ------------------------------------------------------------------------

    pub fn set_page(&self, page: usize) {
        self.page.set(page);
        self.load();
    }

    pub fn set_page_size(&self, size: usize) {
        self.page_size.set(size);
        self.page.set(0);
        self.load();
    }

    pub fn sort(&self, field: String) {
        let (sort_by, sort_desc) = next_sort(
            self.sort_by.get_untracked().as_deref(),
            self.sort_desc.get_untracked(),
            &field,
        );
        self.sort_by.set(sort_by);
        self.sort_desc.set(sort_desc);
        self.page.set(0);
        self.load();
    }

    /// Feed a keystroke from the filter box, debounced by [`plan`]
    pub fn on_filter_input(&self, draft: String) {
        // Every keystroke supersedes a pending debounce window
        let gen = self.filter_gen.get_untracked() + 1;
        self.filter_gen.set(gen);
        match plan(&self.filter.get_untracked(), &draft) {
            FilterPlan::Ignore => self.loading.set(false),
            FilterPlan::ApplyNow(value) => self.apply_filter(value),
            FilterPlan::Debounce(value) => {
                let this = *self;
                self.loading.set(true);
                spawn_local(async move {
                    TimeoutFuture::new(DEBOUNCE_MS).await;
                    // A newer keystroke owns the debounce window now
                    if this.filter_gen.get_untracked() != gen {
                        return;
                    }
                    this.apply_filter(value);
                });
            }
        }
    }

    fn apply_filter(&self, value: String) {
        self.filter_gen.set(self.filter_gen.get_untracked() + 1);
        self.filter.set(value);
        self.page.set(0);
        self.load();
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    pub fn toggle_row(&self, id: String, checked: bool) {
        self.selection.update(|s| s.toggle(&id, checked));
    }

    pub fn select_page(&self, checked: bool) {
        if checked {
            let ids: Vec<String> = self.rows.get_untracked().iter().map(S::row_id).collect();
            self.selection.update(|s| s.extend(ids));
        } else {
            self.selection.update(|s| s.clear());
        }
    }

    pub fn clear_selection(&self) {
        self.selection.update(|s| s.clear());
    }

    /// Select every row matching the current filter, across all pages
    pub fn select_all_in_dataset(&self) {
        let this = *self;
        let mut query = self.current_query();
        query.page = 0;
        spawn_local(async move {
            match this.source.fetch_all_ids(&query).await {
                Ok(ids) => this.selection.update(|s| {
                    s.clear();
                    s.extend(ids);
                }),
                // The selection the user built stays untouched
                Err(e) => this.notify.error(e.to_string()),
            }
        });
    }

    // ------------------------------------------------------------------------
    // Bulk actions
    // ------------------------------------------------------------------------

    pub fn begin_delete(&self) {
        self.begin_bulk(BulkAction::Delete);
    }

    pub fn begin_restore(&self) {
        self.begin_bulk(BulkAction::Restore);
    }

    pub fn begin_empty_trash(&self) {
        self.begin_bulk(BulkAction::EmptyTrash);
    }

    fn begin_bulk(&self, action: BulkAction) {
        if !can_begin(self.phase.get_untracked()) {
            return;
        }
        let ids = self.selection.get_untracked().ids();
        if ids.is_empty() && action != BulkAction::EmptyTrash {
            return;
        }
        let single_label = self.single_label(&ids);
        let copy = confirm_copy(
            action,
            ids.len(),
            single_label.as_deref(),
            self.is_trash,
            self.can_force.get_untracked(),
        );
        self.confirm_then_execute(action, ids, single_label, copy);
    }

    /// Display name of the selection when it holds exactly one visible row
    fn single_label(&self, ids: &[String]) -> Option<String> {
        match ids {
            [id] => self
                .rows
                .get_untracked()
                .iter()
                .find(|row| S::row_id(row) == *id)
                .map(S::row_label),
            _ => None,
        }
    }

    fn confirm_then_execute(
        &self,
        action: BulkAction,
        ids: Vec<String>,
        single_label: Option<String>,
        copy: super::dispatcher::ConfirmCopy,
    ) {
        let this = *self;
        let task = GridTask::Bulk(action);
        self.phase.set(DispatchPhase::Confirming(task));
        self.modals.push(move |handle| {
            // Dismissal without a decision unlocks the dispatcher
            on_cleanup(move || {
                if this.phase.get_untracked() == DispatchPhase::Confirming(task) {
                    this.phase.set(DispatchPhase::Idle);
                }
            });
            let ids = ids.clone();
            let single_label = single_label.clone();
            view! {
                <ConfirmDialog
                    copy=copy.clone()
                    on_confirm=Callback::new(move |_| {
                        this.phase.set(DispatchPhase::Executing(task));
                        handle.close();
                        this.execute_bulk(action, ids.clone(), single_label.clone());
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    }

    fn execute_bulk(&self, action: BulkAction, ids: Vec<String>, single_label: Option<String>) {
        let this = *self;
        spawn_local(async move {
            let result = match action {
                BulkAction::Delete => this.source.delete_many(&ids, this.is_trash).await,
                BulkAction::Restore => this.source.restore_many(&ids).await,
                BulkAction::EmptyTrash => this.source.empty_trash().await,
                BulkAction::Deactivate => this.source.deactivate_many(&ids).await,
            };
            match result {
                Ok(outcome) => this.finish_bulk(action, ids, single_label, outcome),
                Err(e) => this.fail_bulk(action, ids, single_label, e),
            }
        });
    }

    fn finish_bulk(
        &self,
        action: BulkAction,
        ids: Vec<String>,
        single_label: Option<String>,
        outcome: BulkOutcome,
    ) {
        if outcome.is_clean() {
            match action {
                BulkAction::EmptyTrash => self.selection.update(|s| s.clear()),
                _ => self.selection.update(|s| s.remove_many(&ids)),
            }
            self.notify.success(success_message(
                action,
                ids.len(),
                single_label.as_deref(),
                self.is_trash,
            ));
        } else {
            let failed = outcome.failed_ids();
            self.selection.update(|s| s.remove_many(&outcome.successes));
            let message = partial_failure_message(failed.len(), outcome.total());
            let this = *self;
            self.notify.error_with_action(message, "Coba lagi", move || {
                this.retry_bulk(action, failed.clone());
            });
        }
        self.phase.set(DispatchPhase::Idle);
        self.load();
    }

    /// Re-run a bulk action on exactly the rows that failed
    fn retry_bulk(&self, action: BulkAction, ids: Vec<String>) {
        if !can_begin(self.phase.get_untracked()) {
            return;
        }
        self.phase
            .set(DispatchPhase::Executing(GridTask::Bulk(action)));
        self.execute_bulk(action, ids, None);
    }

    fn fail_bulk(
        &self,
        action: BulkAction,
        ids: Vec<String>,
        single_label: Option<String>,
        error: ApiError,
    ) {
        // A usage conflict on delete can degrade to deactivation where the
        // entity supports it, asked as a second question on the same rows.
        if error.is_conflict()
            && action == BulkAction::Delete
            && !self.is_trash
            && self.source.supports_deactivate()
        {
            let copy = confirm_copy(
                BulkAction::Deactivate,
                ids.len(),
                single_label.as_deref(),
                false,
                self.can_force.get_untracked(),
            );
            self.confirm_then_execute(BulkAction::Deactivate, ids, single_label, copy);
            return;
        }
        self.notify.error(error.to_string());
        self.phase.set(DispatchPhase::Idle);
    }

    // ------------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------------

    pub fn begin_export(&self, filters: Vec<ExportFilterDef>) {
        if !can_begin(self.phase.get_untracked()) {
            return;
        }
        let this = *self;
        self.phase.set(DispatchPhase::Confirming(GridTask::Export));
        self.modals.push(move |handle| {
            on_cleanup(move || {
                if this.phase.get_untracked() == DispatchPhase::Confirming(GridTask::Export) {
                    this.phase.set(DispatchPhase::Idle);
                }
            });
            let filters = filters.clone();
            view! {
                <ExportDialog
                    title=format!("Ekspor {}", this.source.list_label())
                    filters=filters
                    on_submit=Callback::new(move |request: ExportRequest| {
                        this.phase.set(DispatchPhase::Executing(GridTask::Export));
                        handle.close();
                        this.run_export(request);
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    }

    fn run_export(&self, mut request: ExportRequest) {
        let this = *self;
        let selection = self.selection.get_untracked();
        if !selection.is_empty() {
            request.ids = Some(selection.ids());
        }
        spawn_local(async move {
            match this.source.export(&request).await {
                Ok(bytes) => {
                    let stamp = Local::now().naive_local();
                    let file_name = export_file_name(this.source.list_label(), &request, stamp);
                    match save_export(&bytes, request.format.mime(), &file_name) {
                        Ok(()) => {
                            this.selection.update(|s| s.clear());
                            this.notify.success(format!("Ekspor selesai: {}", file_name));
                        }
                        Err(e) => this.notify.error(e),
                    }
                }
                Err(e) => this.notify.error(e.to_string()),
            }
            this.phase.set(DispatchPhase::Idle);
        });
    }
}
