//! Срочность заказа по времени ожидания
//!
//! Есть две шкалы с разными порогами, и они не взаимозаменяемы:
//! - бейдж на карточке кухни: Urgent при > 20 мин, Warning при > 10 мин;
//! - точка срочности в строке и цвет рамки карточки: Urgent при > 30 мин, Warning при > 20 мин.
//!
//! Сравнение идёт по точной длительности, а не по целым минутам.

use chrono::{DateTime, Duration, Utc};

use crate::shared::elapsed::{elapsed_label, elapsed_short, elapsed_since};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgeBucket {
    Normal,
    Warning,
    Urgent,
}

impl AgeBucket {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            AgeBucket::Normal => "normal",
            AgeBucket::Warning => "warning",
            AgeBucket::Urgent => "urgent",
        }
    }
}

/// Результат классификации: корзина и подпись "сколько прошло"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeClassification {
    pub bucket: AgeBucket,
    pub elapsed_label: String,
}

/// Пороги одной шкалы срочности (строгое "больше")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeThresholds {
    pub warning_after: Duration,
    pub urgent_after: Duration,
}

impl AgeThresholds {
    /// Шкала бейджа на карточке кухни
    pub fn badge() -> Self {
        Self {
            warning_after: Duration::minutes(10),
            urgent_after: Duration::minutes(20),
        }
    }

    /// Шкала точки в строке списка и рамки карточки
    pub fn row() -> Self {
        Self {
            warning_after: Duration::minutes(20),
            urgent_after: Duration::minutes(30),
        }
    }

    pub fn bucket_for(&self, elapsed: Duration) -> AgeBucket {
        if elapsed > self.urgent_after {
            AgeBucket::Urgent
        } else if elapsed > self.warning_after {
            AgeBucket::Warning
        } else {
            AgeBucket::Normal
        }
    }

    fn classify(&self, created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> AgeBucket {
        match created_at {
            Some(ts) => self.bucket_for(elapsed_since(ts, now)),
            None => AgeBucket::Normal,
        }
    }
}

/// Бейдж кухни (пороги 20/10) с длинной подписью `"<n> <unit> ago"`.
/// Без времени создания: `Normal` и пустая подпись.
pub fn classify_age(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> AgeClassification {
    AgeClassification {
        bucket: AgeThresholds::badge().classify(created_at, now),
        elapsed_label: created_at
            .map(|ts| elapsed_label(ts, now))
            .unwrap_or_default(),
    }
}

/// То же, что [`classify_age`], но с короткой подписью для карточки: `"12m"`, `"2h"`
pub fn classify_age_short(
    created_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> AgeClassification {
    AgeClassification {
        bucket: AgeThresholds::badge().classify(created_at, now),
        elapsed_label: created_at
            .map(|ts| elapsed_short(ts, now))
            .unwrap_or_default(),
    }
}

/// Срочность строки и рамки карточки (пороги 30/20)
pub fn classify_row_urgency(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> AgeBucket {
    AgeThresholds::row().classify(created_at, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn ago(minutes: i64, seconds: i64) -> Option<DateTime<Utc>> {
        Some(now() - Duration::minutes(minutes) - Duration::seconds(seconds))
    }

    #[test]
    fn test_badge_boundaries() {
        let now = now();
        assert_eq!(classify_age(ago(20, 1), now).bucket, AgeBucket::Urgent);
        assert_eq!(classify_age(ago(19, 59), now).bucket, AgeBucket::Warning);
        assert_eq!(classify_age(ago(20, 0), now).bucket, AgeBucket::Warning);
        assert_eq!(classify_age(ago(10, 1), now).bucket, AgeBucket::Warning);
        assert_eq!(classify_age(ago(10, 0), now).bucket, AgeBucket::Normal);
        assert_eq!(classify_age(ago(0, 5), now).bucket, AgeBucket::Normal);
    }

    #[test]
    fn test_row_urgency_boundaries() {
        let now = now();
        assert_eq!(classify_row_urgency(ago(30, 1), now), AgeBucket::Urgent);
        assert_eq!(classify_row_urgency(ago(30, 0), now), AgeBucket::Warning);
        assert_eq!(classify_row_urgency(ago(20, 1), now), AgeBucket::Warning);
        assert_eq!(classify_row_urgency(ago(20, 0), now), AgeBucket::Normal);
    }

    #[test]
    fn test_scales_disagree_between_20_and_30_minutes() {
        let now = now();
        let created = ago(25, 0);
        assert_eq!(classify_age(created, now).bucket, AgeBucket::Urgent);
        assert_eq!(classify_row_urgency(created, now), AgeBucket::Warning);
    }

    #[test]
    fn test_missing_timestamp_is_normal_with_empty_label() {
        let classification = classify_age(None, now());
        assert_eq!(classification.bucket, AgeBucket::Normal);
        assert_eq!(classification.elapsed_label, "");
        assert_eq!(classify_age_short(None, now()).elapsed_label, "");
        assert_eq!(classify_row_urgency(None, now()), AgeBucket::Normal);
    }

    #[test]
    fn test_same_inputs_same_result() {
        let now = now();
        let created = ago(14, 30);
        assert_eq!(classify_age(created, now), classify_age(created, now));
    }

    #[test]
    fn test_labels() {
        let now = now();
        assert_eq!(classify_age(ago(25, 0), now).elapsed_label, "25 minutes ago");
        assert_eq!(classify_age_short(ago(25, 0), now).elapsed_label, "25m");
        assert_eq!(classify_age_short(ago(125, 0), now).elapsed_label, "2h");
    }

    #[test]
    fn test_future_timestamp_is_normal() {
        let now = now();
        let created = Some(now + Duration::minutes(40));
        assert_eq!(classify_age(created, now).bucket, AgeBucket::Normal);
    }
}
