use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для идентификаторов агрегатов (заказ, клиент, позиция склада)
///
/// В URL и в БД идентификатор хранится строкой.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Объявляет newtype-идентификатор поверх UUID с реализацией `AggregateId`
#[macro_export]
macro_rules! uuid_aggregate_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub uuid::Uuid);

        impl $name {
            pub fn new(value: uuid::Uuid) -> Self {
                Self(value)
            }

            pub fn new_v4() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            pub fn value(&self) -> uuid::Uuid {
                self.0
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                uuid::Uuid::parse_str(s)
                    .map($name::new)
                    .map_err(|e| format!("Invalid UUID: {}", e))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::AggregateId;
    use crate::domain::a001_order::aggregate::OrderId;

    #[test]
    fn test_string_round_trip() {
        let id = OrderId::new_v4();
        let parsed = OrderId::from_string(&id.as_string()).unwrap();
        assert_eq!(parsed, id);
        assert_eq!(id.to_string(), id.as_string());
    }

    #[test]
    fn test_invalid_string() {
        let err = OrderId::from_string("order-42").unwrap_err();
        assert!(err.starts_with("Invalid UUID"));
    }
}
