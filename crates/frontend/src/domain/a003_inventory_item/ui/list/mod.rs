pub mod view_model;

use contracts::domain::a003_inventory_item::aggregate::InventoryItem;
use contracts::domain::a003_inventory_item::stock::summarize_inventory;
use contracts::shared::money::format_money;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_inventory_item::api;
use crate::shared::api_utils::{use_api, ApiClient};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::badge::{Badge, BadgeVariant};
use view_model::{
    categories, filter_by_category, format_quantity, parse_stock_input, stock_value_label,
    stock_variant,
};

#[component]
#[allow(non_snake_case)]
pub fn InventoryList() -> impl IntoView {
    let api = use_api();
    let (items, set_items) = signal(Vec::<InventoryItem>::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (category, set_category) = signal(String::new());

    let fetch = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match api::fetch_inventory(&api).await {
                    Ok(v) => {
                        set_items.set(v);
                        set_error.set(None);
                    }
                    Err(e) => {
                        set_items.set(Vec::new());
                        set_error.set(Some(e));
                    }
                }
            });
        }
    };

    fetch();

    // Обновлённую позицию подменяем на месте, без повторной загрузки
    let on_saved = Callback::new(move |updated: InventoryItem| {
        set_items.update(|list| {
            if let Some(slot) = list.iter_mut().find(|i| i.id == updated.id) {
                *slot = updated;
            }
        });
    });

    let summary = Memo::new(move |_| items.with(|list| summarize_inventory(list)));
    let visible = move || items.with(|list| filter_by_category(list, &category.get()));

    let category_options = move || {
        items.with(|list| categories(list))
            .into_iter()
            .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
            .collect_view()
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Inventory"</h2>
                <select
                    class="filter-select"
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                >
                    <option value="">"All categories"</option>
                    {category_options}
                </select>
                <button class="btn-secondary" on:click=move |_| fetch()>"Refresh"</button>
            </div>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <div class="stat-cards">
                <StatCard
                    label="Items"
                    value=Signal::derive(move || summary.get().total.to_string())
                />
                <StatCard
                    label="Out of stock"
                    value=Signal::derive(move || summary.get().out.to_string())
                    variant=BadgeVariant::Error
                />
                <StatCard
                    label="Low stock"
                    value=Signal::derive(move || summary.get().low.to_string())
                    variant=BadgeVariant::Warning
                />
                <StatCard
                    label="Stock value"
                    value=Signal::derive(move || format_money(summary.get().total_value))
                />
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Item"</th>
                        <th>"Category"</th>
                        <th>"Status"</th>
                        <th>"In stock"</th>
                        <th>"Reorder at"</th>
                        <th>"Cost / unit"</th>
                        <th>"Value"</th>
                        <th>"Set stock"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=visible
                        key=|item| (item.id.to_string(), item.current_stock.to_bits())
                        children={
                            let api = api.clone();
                            move |item| {
                                view! { <InventoryRow item=item api=api.clone() on_saved=on_saved /> }
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

/// Строка склада с полем для нового остатка
#[component]
fn InventoryRow(
    item: InventoryItem,
    api: ApiClient,
    on_saved: Callback<InventoryItem>,
) -> impl IntoView {
    let status = item.stock_status();
    let id = item.id.to_string();
    let (draft, set_draft) = signal(String::new());
    let (row_error, set_row_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let save = move |_| {
        let value = match parse_stock_input(&draft.get()) {
            Ok(v) => v,
            Err(e) => {
                set_row_error.set(Some(e));
                return;
            }
        };
        let api = api.clone();
        let id = id.clone();
        set_saving.set(true);
        spawn_local(async move {
            match api::update_stock(&api, &id, value).await {
                Ok(updated) => {
                    set_row_error.set(None);
                    set_draft.set(String::new());
                    on_saved.run(updated);
                }
                Err(e) => set_row_error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <tr>
            <td>{item.name.clone()}</td>
            <td>{item.category.clone()}</td>
            <td><Badge variant=stock_variant(status)>{status.display_name()}</Badge></td>
            <td class="num">{format_quantity(item.current_stock, &item.unit)}</td>
            <td class="num">{format_quantity(item.reorder_point, &item.unit)}</td>
            <td class="num">{format_money(item.cost_per_unit)}</td>
            <td class="num">{stock_value_label(&item)}</td>
            <td class="stock-edit">
                <input
                    type="text"
                    inputmode="decimal"
                    class="stock-input"
                    placeholder=format_quantity(item.current_stock, "")
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    disabled=move || saving.get()
                />
                <button class="btn-primary" on:click=save disabled=move || saving.get()>
                    "Save"
                </button>
                {move || row_error.get().map(|e| view! { <div class="error-message">{e}</div> })}
            </td>
        </tr>
    }
}
