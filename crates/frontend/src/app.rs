use crate::routes::routes::AppRoutes;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::notify::{NotifyHost, NotifyService};
use crate::system::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide modal and toast services to the whole app via context.
    provide_context(ModalStackService::new());
    provide_context(NotifyService::new());

    view! {
        <SessionProvider>
            <AppRoutes />
            <ModalHost />
            <NotifyHost />
        </SessionProvider>
    }
}
