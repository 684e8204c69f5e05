//! Навигация по экранам дашборда

use crate::layout::global_context::{use_app_context, AppView};
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, _) = use_auth();

    let items = move || {
        AppView::visible_for(auth_state.get().can_manage())
            .into_iter()
            .map(|item| {
                let class = move || {
                    if ctx.active.get() == item {
                        "sidebar__item sidebar__item--active"
                    } else {
                        "sidebar__item"
                    }
                };
                view! {
                    <li>
                        <button
                            class=class
                            on:click=move |_| ctx.activate(item)
                        >
                            {item.title()}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="sidebar">
            <ul class="sidebar__list">{items}</ul>
        </nav>
    }
}
