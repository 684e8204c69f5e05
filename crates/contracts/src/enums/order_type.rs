use serde::{Deserialize, Serialize};

/// Канал обслуживания заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OrderType {
    #[default]
    #[serde(rename = "dine-in")]
    DineIn,
    #[serde(rename = "delivery")]
    Delivery,
    #[serde(rename = "takeout")]
    Takeout,
    #[serde(other, rename = "unknown")]
    Unknown,
}

impl OrderType {
    pub fn code(&self) -> &'static str {
        match self {
            OrderType::DineIn => "dine-in",
            OrderType::Delivery => "delivery",
            OrderType::Takeout => "takeout",
            OrderType::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderType::DineIn => "Dine-in",
            OrderType::Delivery => "Delivery",
            OrderType::Takeout => "Takeout",
            OrderType::Unknown => "—",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "dine-in" => OrderType::DineIn,
            "delivery" => OrderType::Delivery,
            "takeout" => OrderType::Takeout,
            _ => OrderType::Unknown,
        }
    }
}
