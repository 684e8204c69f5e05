use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires owner or manager role
/// Shows fallback for kitchen staff
#[component]
pub fn RequireManager(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().can_manage()
            fallback=|| view! { <div class="access-denied">"Access denied. Manager role required."</div> }
        >
            {children()}
        </Show>
    }
}
