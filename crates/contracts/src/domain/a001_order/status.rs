//! Жизненный цикл заказа
//!
//! ```text
//! pending -> confirmed -> preparing -> ready -> completed
//!    \           \            \          \
//!     +-----------+------------+----------+--> cancelled
//! ```
//!
//! `completed` и `cancelled` терминальные. UI запрашивает только следующий шаг
//! цепочки или отмену; всё остальное отклоняется на стороне API.

use thiserror::Error;

use crate::enums::order_status::OrderStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatusTransitionError {
    #[error("order is already {0} and cannot change status")]
    Terminal(OrderStatus),
    #[error("transition {from} -> {to} is not allowed")]
    NotAllowed { from: OrderStatus, to: OrderStatus },
}

/// Колонка кухонной доски, в которую попадает заказ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KitchenStage {
    New,
    Preparing,
    Ready,
}

impl KitchenStage {
    pub fn all() -> [KitchenStage; 3] {
        [KitchenStage::New, KitchenStage::Preparing, KitchenStage::Ready]
    }

    pub fn title(&self) -> &'static str {
        match self {
            KitchenStage::New => "New",
            KitchenStage::Preparing => "Preparing",
            KitchenStage::Ready => "Ready",
        }
    }
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Статусы, в которые можно перейти из текущего
    pub fn allowed_transitions(&self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::Pending => &[OrderStatus::Confirmed, OrderStatus::Cancelled],
            OrderStatus::Confirmed => &[OrderStatus::Preparing, OrderStatus::Cancelled],
            OrderStatus::Preparing => &[OrderStatus::Ready, OrderStatus::Cancelled],
            OrderStatus::Ready => &[OrderStatus::Completed, OrderStatus::Cancelled],
            OrderStatus::Completed | OrderStatus::Cancelled | OrderStatus::Unknown => &[],
        }
    }

    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        self.allowed_transitions().contains(&target)
    }

    /// Проверенный переход. Возвращает новый статус или причину отказа.
    pub fn transition_to(self, target: OrderStatus) -> Result<OrderStatus, StatusTransitionError> {
        if self.is_terminal() {
            return Err(StatusTransitionError::Terminal(self));
        }
        if !self.can_transition_to(target) {
            return Err(StatusTransitionError::NotAllowed {
                from: self,
                to: target,
            });
        }
        Ok(target)
    }

    /// Следующий шаг по основной цепочке (без отмены)
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Confirmed),
            OrderStatus::Confirmed => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Completed),
            _ => None,
        }
    }

    /// Подпись кнопки для следующего шага
    pub fn next_action_label(&self) -> Option<&'static str> {
        match self {
            OrderStatus::Pending => Some("Confirm"),
            OrderStatus::Confirmed => Some("Start Cooking"),
            OrderStatus::Preparing => Some("Mark Ready"),
            OrderStatus::Ready => Some("Complete"),
            _ => None,
        }
    }

    pub fn can_cancel(&self) -> bool {
        self.can_transition_to(OrderStatus::Cancelled)
    }

    /// Колонка кухонной доски; `None` для завершённых, отменённых и нераспознанных
    pub fn stage(&self) -> Option<KitchenStage> {
        match self {
            OrderStatus::Pending | OrderStatus::Confirmed => Some(KitchenStage::New),
            OrderStatus::Preparing => Some(KitchenStage::Preparing),
            OrderStatus::Ready => Some(KitchenStage::Ready),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_chain() {
        let mut status = OrderStatus::Pending;
        let mut visited = vec![status];
        while let Some(next) = status.next() {
            status = status.transition_to(next).unwrap();
            visited.push(status);
        }
        assert_eq!(
            visited,
            vec![
                OrderStatus::Pending,
                OrderStatus::Confirmed,
                OrderStatus::Preparing,
                OrderStatus::Ready,
                OrderStatus::Completed,
            ]
        );
        assert!(status.is_terminal());
    }

    #[test]
    fn test_cancel_from_every_non_terminal_state() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Preparing,
            OrderStatus::Ready,
        ] {
            assert!(status.can_cancel());
            assert_eq!(
                status.transition_to(OrderStatus::Cancelled),
                Ok(OrderStatus::Cancelled)
            );
        }
    }

    #[test]
    fn test_terminal_states_reject_everything() {
        for terminal in [OrderStatus::Completed, OrderStatus::Cancelled] {
            for target in OrderStatus::all() {
                assert_eq!(
                    terminal.transition_to(target),
                    Err(StatusTransitionError::Terminal(terminal))
                );
            }
            assert!(terminal.next().is_none());
            assert!(terminal.next_action_label().is_none());
        }
    }

    #[test]
    fn test_skipping_and_going_back_is_rejected() {
        assert_eq!(
            OrderStatus::Pending.transition_to(OrderStatus::Ready),
            Err(StatusTransitionError::NotAllowed {
                from: OrderStatus::Pending,
                to: OrderStatus::Ready,
            })
        );
        assert!(OrderStatus::Ready
            .transition_to(OrderStatus::Preparing)
            .is_err());
        assert!(OrderStatus::Preparing
            .transition_to(OrderStatus::Preparing)
            .is_err());
    }

    #[test]
    fn test_unknown_status_has_no_transitions() {
        assert!(OrderStatus::Unknown.allowed_transitions().is_empty());
        assert!(OrderStatus::Unknown
            .transition_to(OrderStatus::Cancelled)
            .is_err());
        assert_eq!(OrderStatus::Unknown.stage(), None);
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(OrderStatus::Confirmed.next_action_label(), Some("Start Cooking"));
        assert_eq!(OrderStatus::Preparing.next_action_label(), Some("Mark Ready"));
        assert_eq!(OrderStatus::Ready.next_action_label(), Some("Complete"));
    }

    #[test]
    fn test_error_messages() {
        let err = OrderStatus::Pending
            .transition_to(OrderStatus::Completed)
            .unwrap_err();
        assert_eq!(err.to_string(), "transition pending -> completed is not allowed");
    }
}
