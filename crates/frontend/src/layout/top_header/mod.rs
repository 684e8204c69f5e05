//! Верхняя панель: переключатель меню, название, пользователь и выход

use crate::layout::global_context::use_app_context;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, set_auth_state) = use_auth();

    let user_label = move || {
        auth_state
            .get()
            .user_info
            .map(|u| {
                let name = u.display_name.clone().unwrap_or_else(|| u.username.clone());
                format!("{} ({})", name, u.role.code())
            })
            .unwrap_or_default()
    };

    view! {
        <header class="top-header">
            <button class="top-header__toggle" on:click=move |_| ctx.toggle_left()>
                "☰"
            </button>
            <div class="top-header__title">"Restaurant Dashboard"</div>
            <div class="top-header__user">
                <span>{user_label}</span>
                <button class="btn-secondary" on:click=move |_| do_logout(set_auth_state)>
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
