use super::repository;
use chrono::{Duration, Utc};
use contracts::domain::a001_order::aggregate::{CustomerRef, Order, OrderItem};
use contracts::domain::a001_order::status::StatusTransitionError;
use contracts::enums::order_status::OrderStatus;
use contracts::enums::order_type::OrderType;
use thiserror::Error;
use uuid::Uuid;

/// Ошибки смены статуса, которые HTTP-слой различает
#[derive(Debug, Error)]
pub enum OrderServiceError {
    #[error("order {0} not found")]
    NotFound(Uuid),
    #[error(transparent)]
    Transition(#[from] StatusTransitionError),
    #[error("order {0} was modified concurrently")]
    Stale(Uuid),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Получение списка заказов
pub async fn list_all(status: Option<OrderStatus>) -> anyhow::Result<Vec<Order>> {
    repository::list_all(status).await
}

/// Получение заказа по ID
pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Order>> {
    repository::get_by_id(id).await
}

/// Смена статуса заказа по правилам жизненного цикла
///
/// Недопустимый переход отклоняется здесь, до записи в БД.
pub async fn change_status(id: Uuid, target: OrderStatus) -> Result<Order, OrderServiceError> {
    let mut order = repository::get_by_id(id)
        .await?
        .ok_or(OrderServiceError::NotFound(id))?;

    let from = order.status;
    order.status = from.transition_to(target)?;

    if !repository::update_status(id, from, order.status).await? {
        return Err(OrderServiceError::Stale(id));
    }
    tracing::info!(
        "Order {} ({}): {} -> {}",
        order.order_number,
        id,
        from,
        order.status
    );
    Ok(order)
}

/// Создание заказа (используется для тестовых данных)
pub async fn create(order: Order) -> anyhow::Result<Uuid> {
    order
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    repository::insert(&order).await
}

fn item(name: &str, quantity: u32, price: f64, modifiers: &[&str], note: Option<&str>) -> OrderItem {
    OrderItem {
        name: name.to_string(),
        quantity,
        price,
        modifiers: modifiers.iter().map(|m| m.to_string()).collect(),
        special_instructions: note.map(str::to_string),
    }
}

/// Вставка тестовых заказов во всех статусах и с разным возрастом
pub async fn insert_test_data() -> anyhow::Result<()> {
    let now = Utc::now();
    let walk_in = None;
    let ann = Some(CustomerRef {
        id: None,
        name: "Ann Parker".into(),
        phone: Some("+1 555 0101".into()),
    });
    let leo = Some(CustomerRef {
        id: None,
        name: "Leo Grant".into(),
        phone: Some("+1 555 0177".into()),
    });

    let data: Vec<(&str, OrderType, OrderStatus, i64, Vec<OrderItem>, Option<CustomerRef>)> = vec![
        (
            "1001",
            OrderType::DineIn,
            OrderStatus::Pending,
            3,
            vec![
                item("Margherita Pizza", 1, 12.5, &[], None),
                item("Lemonade", 2, 3.0, &["no ice"], None),
            ],
            walk_in.clone(),
        ),
        (
            "1002",
            OrderType::Delivery,
            OrderStatus::Confirmed,
            14,
            vec![item("Chicken Burger", 2, 9.75, &["extra cheese"], Some("Sauce on the side"))],
            ann.clone(),
        ),
        (
            "1003",
            OrderType::Takeout,
            OrderStatus::Preparing,
            24,
            vec![
                item("Caesar Salad", 1, 8.9, &[], None),
                item("Tomato Soup", 1, 6.4, &[], Some("Nut allergy")),
            ],
            leo.clone(),
        ),
        (
            "1004",
            OrderType::DineIn,
            OrderStatus::Preparing,
            35,
            vec![item("Ribeye Steak", 1, 27.0, &["medium rare"], None)],
            walk_in.clone(),
        ),
        (
            "1005",
            OrderType::Delivery,
            OrderStatus::Ready,
            8,
            vec![item("Pad Thai", 2, 11.2, &["mild"], None)],
            ann,
        ),
        (
            "1006",
            OrderType::Takeout,
            OrderStatus::Completed,
            90,
            vec![item("Espresso", 3, 2.5, &[], None)],
            leo,
        ),
        (
            "1007",
            OrderType::DineIn,
            OrderStatus::Cancelled,
            50,
            vec![item("Fish Tacos", 2, 7.8, &[], None)],
            walk_in,
        ),
    ];

    for (number, order_type, status, minutes_ago, items, customer) in data {
        let mut order = Order::new_pending(
            number.to_string(),
            order_type,
            items,
            customer,
            now - Duration::minutes(minutes_ago),
        );
        order.status = status;
        if matches!(status, OrderStatus::Preparing | OrderStatus::Confirmed) {
            order.estimated_ready_time = Some(now + Duration::minutes(15));
        }
        create(order).await?;
    }

    tracing::info!("Inserted demo orders");
    Ok(())
}
