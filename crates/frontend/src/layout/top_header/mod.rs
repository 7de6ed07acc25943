//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the application title and the
//! signed-in user name.

use crate::shared::icons::icon;
use crate::system::use_session;
use leptos::prelude::*;

#[component]
pub fn TopHeader(
    #[prop(into)] sidebar_open: Signal<bool>,
    on_toggle_sidebar: Callback<()>,
) -> impl IntoView {
    let session = use_session();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| on_toggle_sidebar.run(())
                    title=move || {
                        if sidebar_open.get() {
                            "Sembunyikan navigasi"
                        } else {
                            "Tampilkan navigasi"
                        }
                    }
                >
                    {move || if sidebar_open.get() {
                        icon("chevrons-left")
                    } else {
                        icon("chevrons-right")
                    }}
                </button>
                <span class="top-header__title">"Gudangin"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("users")}
                    <span>
                        {move || session.user_name().unwrap_or_else(|| "Tamu".to_string())}
                    </span>
                </div>
            </div>
        </div>
    }
}
