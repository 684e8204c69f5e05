pub mod view_model;

use chrono::Utc;
use contracts::domain::a002_customer::aggregate::Customer;
use contracts::domain::a002_customer::tier::{summarize_customers, CustomerTier};
use contracts::shared::money::format_money;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_customer::api;
use crate::shared::api_utils::use_api;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::badge::{Badge, BadgeVariant};
use view_model::{activity_variant, build_customer_rows, tier_variant};

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let api = use_api();
    let (items, set_items) = signal(Vec::<Customer>::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (query, set_query) = signal(String::new());
    let (loaded_at, set_loaded_at) = signal(Utc::now());

    let fetch = move || {
        let api = api.clone();
        spawn_local(async move {
            match api::fetch_customers(&api).await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    set_items.set(Vec::new());
                    set_error.set(Some(e));
                }
            }
            set_loaded_at.set(Utc::now());
        });
    };

    fetch();

    let summary = Memo::new(move |_| items.with(|list| summarize_customers(list, loaded_at.get())));
    let rows = move || items.with(|list| build_customer_rows(list, &query.get(), loaded_at.get()));

    let tier_cards = CustomerTier::all()
        .into_iter()
        .map(|tier| {
            view! {
                <StatCard
                    label=tier.display_name()
                    value=Signal::derive(move || summary.get().count_for(tier).to_string())
                    variant=tier_variant(tier)
                />
            }
        })
        .collect_view();

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Customers"</h2>
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search by name, phone or email"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button class="btn-secondary" on:click=move |_| fetch()>"Refresh"</button>
            </div>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <div class="stat-cards">
                <StatCard
                    label="Customers"
                    value=Signal::derive(move || summary.get().total.to_string())
                />
                <StatCard
                    label="Active (30 days)"
                    value=Signal::derive(move || summary.get().engaged.to_string())
                    variant=BadgeVariant::Success
                />
                <StatCard
                    label="Revenue"
                    value=Signal::derive(move || format_money(summary.get().total_revenue))
                />
                {tier_cards}
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Contact"</th>
                        <th>"Tier"</th>
                        <th>"Activity"</th>
                        <th>"Orders"</th>
                        <th>"Spent"</th>
                        <th>"Avg. order"</th>
                        <th>"Points"</th>
                        <th>"Last order"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|row| row.id.clone()
                        children=move |row| {
                            view! {
                                <tr>
                                    <td>{row.name}</td>
                                    <td>{row.contact}</td>
                                    <td><Badge variant=tier_variant(row.tier)>{row.tier.display_name()}</Badge></td>
                                    <td><Badge variant=activity_variant(row.activity)>{row.activity.display_name()}</Badge></td>
                                    <td class="num">{row.total_orders}</td>
                                    <td class="num">{row.total_spent_label}</td>
                                    <td class="num">{row.average_label}</td>
                                    <td class="num">{row.loyalty_points}</td>
                                    <td>{row.last_order_label}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
