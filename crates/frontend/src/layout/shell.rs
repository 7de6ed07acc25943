use leptos::prelude::*;

use crate::layout::sidebar::Sidebar;
use crate::layout::top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |     Routed content           |
/// +------------------------------------------+
/// ```
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let sidebar_open = RwSignal::new(true);

    view! {
        <div class="app-layout">
            <TopHeader
                sidebar_open=sidebar_open
                on_toggle_sidebar=Callback::new(move |_| {
                    sidebar_open.update(|open| *open = !*open)
                })
            />

            <div class="app-body">
                <aside
                    class="app-sidebar"
                    class:app-sidebar--hidden=move || !sidebar_open.get()
                >
                    <Sidebar />
                </aside>

                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}
