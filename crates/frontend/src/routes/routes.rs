use crate::domain::a001_order::ui::kitchen::KitchenBoard;
use crate::domain::a001_order::ui::list::OrderList;
use crate::domain::a002_customer::ui::list::CustomerList;
use crate::domain::a003_inventory_item::ui::list::InventoryList;
use crate::layout::global_context::{use_app_context, AppView};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::shared::poll::PollingConfig;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireManager;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn ActiveView() -> impl IntoView {
    let ctx = use_app_context();
    move || match ctx.active.get() {
        AppView::Kitchen => view! { <KitchenBoard /> }.into_any(),
        AppView::Orders => view! { <OrderList /> }.into_any(),
        AppView::Customers => view! { <RequireManager><CustomerList /></RequireManager> }.into_any(),
        AppView::Inventory => view! { <RequireManager><InventoryList /></RequireManager> }.into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let (auth_state, _) = use_auth();

    // Клиент API создаётся один раз на сессию
    provide_context(auth_state.get_untracked().api_client());
    provide_context(PollingConfig::default());

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <ActiveView /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
