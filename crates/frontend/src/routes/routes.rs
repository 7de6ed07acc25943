use crate::domain::a001_category::ui::CategoryList;
use crate::domain::a002_product::ui::ProductList;
use crate::domain::a003_supplier::ui::SupplierList;
use crate::layout::AppShell;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--system" category=PAGE_CAT_SYSTEM>
            <div class="page__content">
                <h1 class="page__title">"Halaman tidak ditemukan"</h1>
                <p class="text-muted">"Alamat yang Anda buka tidak dikenal."</p>
            </div>
        </PageFrame>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <AppShell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/products" /> } />
                    <Route path=path!("/categories") view=|| view! { <CategoryList /> } />
                    <Route
                        path=path!("/categories/trash")
                        view=|| view! { <CategoryList trashed=true /> }
                    />
                    <Route path=path!("/products") view=|| view! { <ProductList /> } />
                    <Route
                        path=path!("/products/trash")
                        view=|| view! { <ProductList trashed=true /> }
                    />
                    <Route path=path!("/suppliers") view=|| view! { <SupplierList /> } />
                    <Route
                        path=path!("/suppliers/trash")
                        view=|| view! { <SupplierList trashed=true /> }
                    />
                </Routes>
            </AppShell>
        </Router>
    }
}
