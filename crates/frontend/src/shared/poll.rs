//! Периодический опрос бэкенда

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Интервалы опроса по экранам (мс)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PollingConfig {
    pub kitchen_ms: u32,
    pub orders_ms: u32,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            kitchen_ms: 5_000,
            orders_ms: 10_000,
        }
    }
}

/// Номера запросов одного экрана.
///
/// Ответ применяется, только если он новее последнего применённого:
/// медленный старый ответ не перезапишет свежие данные.
#[derive(Clone, Debug, Default)]
pub struct RequestSequencer {
    issued: Arc<AtomicU64>,
    applied: Arc<AtomicU64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Номер для нового запроса
    pub fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// `true`, если ответ на запрос `seq` нужно применить
    pub fn try_apply(&self, seq: u64) -> bool {
        self.applied.fetch_max(seq, Ordering::SeqCst) < seq
    }

    pub fn last_applied(&self) -> u64 {
        self.applied.load(Ordering::SeqCst)
    }
}

/// Вызывает `tick` сразу и затем каждые `interval_ms`, пока компонент жив.
///
/// Таймер останавливается в `on_cleanup` владельца.
pub fn use_polling<F>(interval_ms: u32, tick: F)
where
    F: Fn() + 'static,
{
    let cancelled = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancelled);

    tick();
    spawn_local(async move {
        loop {
            TimeoutFuture::new(interval_ms).await;
            if flag.load(Ordering::Relaxed) {
                break;
            }
            tick();
        }
    });

    on_cleanup(move || cancelled.store(true, Ordering::Relaxed));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order_responses_apply() {
        let seq = RequestSequencer::new();
        let a = seq.begin();
        assert!(seq.try_apply(a));
        let b = seq.begin();
        assert!(seq.try_apply(b));
        assert_eq!(seq.last_applied(), 2);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let seq = RequestSequencer::new();
        let first = seq.begin();
        let second = seq.begin();
        // второй ответ пришёл раньше первого
        assert!(seq.try_apply(second));
        assert!(!seq.try_apply(first));
        assert_eq!(seq.last_applied(), second);
    }

    #[test]
    fn test_same_response_applies_once() {
        let seq = RequestSequencer::new();
        let n = seq.begin();
        assert!(seq.try_apply(n));
        assert!(!seq.try_apply(n));
    }

    #[test]
    fn test_clones_share_counters() {
        let seq = RequestSequencer::new();
        let other = seq.clone();
        let n = other.begin();
        assert_eq!(seq.begin(), n + 1);
    }

    #[test]
    fn test_default_intervals() {
        let cfg = PollingConfig::default();
        assert_eq!(cfg.kitchen_ms, 5_000);
        assert_eq!(cfg.orders_ms, 10_000);
    }
}
