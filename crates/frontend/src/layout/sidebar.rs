use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (path, label, icon)
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![MenuGroup {
        label: "Referensi",
        items: vec![
            ("/categories", "Kategori", "categories"),
            ("/products", "Produk", "products"),
            ("/suppliers", "Pemasok", "suppliers"),
        ],
    }]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;

    let groups = menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                view! {
                    <div class="app-sidebar__group">
                        <div class="app-sidebar__group-label">{group.label}</div>
                        {group.items.into_iter().map(|(path, label, icon_name)| {
                            // The trash view keeps its list item highlighted
                            let is_active = move || {
                                let current = pathname.get();
                                current == path || current.starts_with(&format!("{path}/"))
                            };
                            view! {
                                <a
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=is_active
                                    href=path
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(icon_name)}
                                        <span>{label}</span>
                                    </div>
                                </a>
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
