pub mod order_card;
pub mod view_model;

use chrono::Utc;
use contracts::domain::a001_order::aggregate::Order;
use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_order::api;
use crate::shared::api_utils::use_api;
use crate::shared::poll::{use_polling, PollingConfig, RequestSequencer};
use order_card::OrderCard;
use view_model::build_kitchen_board;

/// Кухонная доска: три колонки, опрос каждые `PollingConfig::kitchen_ms`
#[component]
pub fn KitchenBoard() -> impl IntoView {
    let api = use_api();
    let polling = use_context::<PollingConfig>().unwrap_or_default();

    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (now, set_now) = signal(Utc::now());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);
    let sequencer = RequestSequencer::new();

    let refresh = {
        let api = api.clone();
        move || {
            let api = api.clone();
            let sequencer = sequencer.clone();
            spawn_local(async move {
                let seq = sequencer.begin();
                let result = api::fetch_orders(&api).await;
                if !sequencer.try_apply(seq) {
                    return;
                }
                // при ошибке доска пустеет, ядро получает пустой список
                let fetched = match result {
                    Ok(v) => {
                        set_error.set(None);
                        v
                    }
                    Err(e) => {
                        log::warn!("Kitchen board refresh failed: {}", e);
                        set_error.set(Some(e));
                        Vec::new()
                    }
                };
                set_orders.set(fetched);
                set_now.set(Utc::now());
            });
        }
    };

    use_polling(polling.kitchen_ms, refresh.clone());

    let on_change = Callback::new(move |(id, target): (String, OrderStatus)| {
        let api = api.clone();
        let refresh = refresh.clone();
        set_busy.set(true);
        spawn_local(async move {
            match api::update_order_status(&api, &id, target).await {
                Ok(order) => {
                    log::info!("Order #{} -> {}", order.order_number, order.status);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_busy.set(false);
            refresh();
        });
    });

    let columns = move || {
        let now = now.get();
        build_kitchen_board(orders.get())
            .into_iter()
            .map(|column| {
                let header = column.header();
                let stage_class = format!(
                    "kitchen-column kitchen-column--{}",
                    column.stage.title().to_lowercase()
                );
                let cards = column
                    .orders
                    .into_iter()
                    .map(|order| {
                        view! { <OrderCard order=order now=now on_change=on_change busy=busy /> }
                    })
                    .collect_view();
                view! {
                    <section class=stage_class>
                        <h3 class="kitchen-column__header">{header}</h3>
                        <div class="kitchen-column__cards">{cards}</div>
                    </section>
                }
            })
            .collect_view()
    };

    view! {
        <div class="kitchen-board">
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
            <div class="kitchen-board__columns">{columns}</div>
        </div>
    }
}
