use chrono::{DateTime, Utc};
use contracts::domain::a001_order::aggregate::Order;
use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;

use super::view_model::OrderCardModel;
use crate::shared::components::ui::badge::Badge;

/// Карточка заказа на кухонной доске
#[component]
pub fn OrderCard(
    order: Order,
    now: DateTime<Utc>,
    /// (id заказа, целевой статус)
    on_change: Callback<(String, OrderStatus)>,
    /// Пока запрос в полёте, кнопки неактивны
    #[prop(into)]
    busy: Signal<bool>,
) -> impl IntoView {
    let model = OrderCardModel::build(&order, now);

    let items = model
        .items
        .into_iter()
        .map(|item| {
            let modifiers = (!item.modifiers.is_empty()).then(|| {
                view! { <div class="order-card__modifiers">{item.modifiers.join(", ")}</div> }
            });
            let note = item.special_instructions.map(|text| {
                view! { <div class="order-card__note">{text}</div> }
            });
            view! {
                <li class="order-card__item">
                    <span class="order-card__qty">{format!("{}×", item.quantity)}</span>
                    <span class="order-card__name">{item.name}</span>
                    {modifiers}
                    {note}
                </li>
            }
        })
        .collect_view();

    let next_button = model.next_action.map(|(target, label)| {
        let id = model.id.clone();
        view! {
            <button
                class="btn-primary"
                disabled=move || busy.get()
                on:click=move |_| on_change.run((id.clone(), target))
            >
                {label}
            </button>
        }
    });

    let cancel_button = model.can_cancel.then(|| {
        let id = model.id.clone();
        view! {
            <button
                class="btn-secondary"
                disabled=move || busy.get()
                on:click=move |_| on_change.run((id.clone(), OrderStatus::Cancelled))
            >
                "Cancel"
            </button>
        }
    });

    let customer = (!model.customer_name.is_empty()).then(|| {
        view! { <div class="order-card__customer">{model.customer_name.clone()}</div> }
    });

    view! {
        <div class=model.border_class>
            <div class="order-card__header">
                <span class="order-card__number">{format!("#{}", model.order_number)}</span>
                <span class="order-card__type">{model.order_type}</span>
                <span class="order-card__time">{model.placed_at}</span>
                <Badge variant=model.age_variant>{model.age_label}</Badge>
            </div>
            {customer}
            <ul class="order-card__items">{items}</ul>
            <div class="order-card__footer">
                <span class="order-card__total">{model.total_label}</span>
                <div class="order-card__actions">
                    {next_button}
                    {cancel_button}
                </div>
            </div>
        </div>
    }
}
