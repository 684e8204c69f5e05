pub mod view_model;

use chrono::Utc;
use contracts::domain::a001_order::aggregate::Order;
use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_order::api;
use crate::shared::api_utils::use_api;
use crate::shared::components::ui::badge::Badge;
use crate::shared::poll::{use_polling, PollingConfig, RequestSequencer};
use view_model::build_order_rows;

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let api = use_api();
    let polling = use_context::<PollingConfig>().unwrap_or_default();

    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (now, set_now) = signal(Utc::now());
    let (error, set_error) = signal::<Option<String>>(None);
    let (status_filter, set_status_filter) = signal::<Option<OrderStatus>>(None);
    let sequencer = RequestSequencer::new();

    let refresh = move || {
        let api = api.clone();
        let sequencer = sequencer.clone();
        spawn_local(async move {
            let seq = sequencer.begin();
            let result = api::fetch_orders(&api).await;
            if !sequencer.try_apply(seq) {
                return;
            }
            match result {
                Ok(v) => {
                    set_orders.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    set_orders.set(Vec::new());
                    set_error.set(Some(e));
                }
            }
            set_now.set(Utc::now());
        });
    };

    use_polling(polling.orders_ms, refresh);

    let rows = move || {
        orders.with(|list| build_order_rows(list, status_filter.get(), now.get()))
    };

    let status_options = OrderStatus::all()
        .into_iter()
        .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
        .collect_view();

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Orders"</h2>
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_status_filter.set(
                            if value.is_empty() { None } else { Some(OrderStatus::from_code(&value)) },
                        );
                    }
                >
                    <option value="">"All statuses"</option>
                    {status_options}
                </select>
            </div>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <table class="data-table">
                <thead>
                    <tr>
                        <th></th>
                        <th>"#"</th>
                        <th>"Status"</th>
                        <th>"Type"</th>
                        <th>"Customer"</th>
                        <th>"Items"</th>
                        <th>"Total"</th>
                        <th>"Created"</th>
                        <th>"Age"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|row| (row.id.clone(), row.status_label, row.age_label.clone())
                        children=move |row| {
                            view! {
                                <tr>
                                    <td><span class=row.urgency_class></span></td>
                                    <td>{row.order_number}</td>
                                    <td><Badge variant=row.status_variant>{row.status_label}</Badge></td>
                                    <td>{row.order_type}</td>
                                    <td>{row.customer_name}</td>
                                    <td class="num">{row.item_count}</td>
                                    <td class="num">{row.total_label}</td>
                                    <td>{row.created_label}</td>
                                    <td>{row.age_label}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
