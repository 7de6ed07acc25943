use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

use contracts::domain::a003_supplier::SupplierRow;
use contracts::shared::permissions;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::datagrid::trash::{trash_path, trash_redirect};
use crate::shared::datagrid::{GridController, GridToolbar};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::session::use_session;

use super::super::api::SupplierSource;

const LIST_PATH: &str = "/suppliers";

#[component]
pub fn SupplierList(#[prop(optional)] trashed: bool) -> impl IntoView {
    let session = use_session();
    let can_force = Signal::derive(move || session.can(permissions::SUPPLIER_FORCE_DELETE));
    let controller = GridController::new(SupplierSource, trashed, can_force);

    let navigate_back = use_navigate();
    Effect::new(move |_| {
        if trashed && session.is_loaded() {
            if let Some(target) = trash_redirect(&trash_path(LIST_PATH), can_force.get()) {
                navigate_back(&target, Default::default());
            }
        }
    });

    Effect::new(move |_| {
        controller.load();
    });

    let filter_input = RwSignal::new(String::new());
    let filter_first_run = StoredValue::new(true);
    Effect::new(move |_| {
        let value = filter_input.get();
        if filter_first_run.get_value() {
            filter_first_run.set_value(false);
            return;
        }
        controller.on_filter_input(value);
    });

    let rows = Signal::derive(move || controller.rows.get());
    let selected = Signal::derive(move || controller.selection.get());
    let loading = Signal::derive(move || controller.loading.get());
    let sort_by = Signal::derive(move || controller.sort_by.get());
    let sort_desc = Signal::derive(move || controller.sort_desc.get());
    let on_sort = Callback::new(move |field: String| controller.sort(field));

    let navigate_trash = use_navigate();
    let navigate_list = use_navigate();

    let page_id = if trashed {
        "a003_supplier--trash"
    } else {
        "a003_supplier--list"
    };

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon(if trashed { "trash" } else { "suppliers" })}
                    <h1 class="page__title">
                        {if trashed { "Sampah Pemasok" } else { "Daftar Pemasok" }}
                    </h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        <span>{move || controller.filtered_row_count.get().to_string()}</span>
                    </Badge>
                </div>
                <div class="page__header-right">
                    {if trashed {
                        view! {
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| navigate_list(LIST_PATH, Default::default())
                            >
                                {icon("chevron-left")}
                                " Kembali ke daftar"
                            </Button>
                        }
                        .into_any()
                    } else {
                        view! {
                            <Show when=move || can_force.get()>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click={
                                        let navigate_trash = navigate_trash.clone();
                                        move |_| {
                                            navigate_trash(&trash_path(LIST_PATH), Default::default())
                                        }
                                    }
                                >
                                    {icon("trash")}
                                    " Sampah"
                                </Button>
                            </Show>
                        }
                        .into_any()
                    }}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| controller.load()
                        disabled=loading
                    >
                        {move || if loading.get() { " Memuat..." } else { " Muat ulang" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("search")}
                            <span class="filter-panel__title">"Pencarian"</span>
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || controller.page.get())
                                total_pages=Signal::derive(move || controller.page_count.get())
                                total_count=Signal::derive(move || {
                                    controller.filtered_row_count.get() as usize
                                })
                                page_size=Signal::derive(move || controller.page_size.get())
                                on_page_change=Callback::new(move |page| controller.set_page(page))
                                on_page_size_change=Callback::new(move |size| {
                                    controller.set_page_size(size)
                                })
                            />
                        </div>
                        <div class="filter-panel-header__right">
                            <span class="text-muted">
                                {move || if loading.get() { "Memuat…" } else { "" }}
                            </span>
                        </div>
                    </div>
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <Input
                                    value=filter_input
                                    placeholder="Kode, nama atau kontak pemasok..."
                                />
                            </div>
                        </Flex>
                    </div>
                </div>

                <GridToolbar controller=controller />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    items=rows
                                    selected=selected
                                    get_id=Callback::new(|row: SupplierRow| row.id.clone())
                                    on_change=Callback::new(move |check| controller.select_page(check))
                                />
                                <SortableHeaderCell
                                    label="Kode"
                                    sort_field="code"
                                    current_sort_by=sort_by
                                    sort_desc=sort_desc
                                    on_sort=on_sort
                                    min_width=110.0
                                />
                                <SortableHeaderCell
                                    label="Nama"
                                    sort_field="name"
                                    current_sort_by=sort_by
                                    sort_desc=sort_desc
                                    on_sort=on_sort
                                    min_width=240.0
                                />
                                <SortableHeaderCell
                                    label="Kontak"
                                    sort_field="contactName"
                                    current_sort_by=sort_by
                                    sort_desc=sort_desc
                                    on_sort=on_sort
                                    min_width=160.0
                                />
                                <SortableHeaderCell
                                    label="Telepon"
                                    sort_field="phone"
                                    current_sort_by=sort_by
                                    sort_desc=sort_desc
                                    on_sort=on_sort
                                    min_width=140.0
                                />
                                <SortableHeaderCell
                                    label="Email"
                                    sort_field="email"
                                    current_sort_by=sort_by
                                    sort_desc=sort_desc
                                    on_sort=on_sort
                                    min_width=180.0
                                />
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || {
                                if loading.get() && rows.get().is_empty() {
                                    return vec![
                                        view! {
                                            <TableRow>
                                                <TableCell attr:colspan="6">
                                                    <TableCellLayout>
                                                        <span class="text-muted">"Memuat…"</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                            .into_view(),
                                    ];
                                }
                                let data = rows.get();
                                if data.is_empty() {
                                    let message = if controller.total_row_count.get() > 0 {
                                        "Tidak ada data yang cocok dengan pencarian"
                                    } else if trashed {
                                        "Sampah kosong"
                                    } else {
                                        "Belum ada data"
                                    };
                                    return vec![
                                        view! {
                                            <TableRow>
                                                <TableCell attr:colspan="6">
                                                    <TableCellLayout>
                                                        <span class="text-muted">{message}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                            .into_view(),
                                    ];
                                }
                                data.into_iter()
                                    .map(|row| {
                                        view! {
                                            <TableRow>
                                                <TableCellCheckbox
                                                    item_id=row.id.clone()
                                                    selected=selected
                                                    on_change=Callback::new(move |(id, checked)| {
                                                        controller.toggle_row(id, checked)
                                                    })
                                                />
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <span style="font-weight: 500;">
                                                            {row.code.clone()}
                                                        </span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {row.name.clone()}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {row.contact_name.clone()}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{row.phone.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {row.email.clone()}
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                        .into_view()
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
