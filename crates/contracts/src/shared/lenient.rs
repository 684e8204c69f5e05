//! Терпимая десериализация полей, пришедших из REST API
//!
//! `#[serde(default)]` закрывает только отсутствующее поле. Функции ниже
//! дополнительно превращают `null`, число строкой и значение не того типа
//! в значение по умолчанию, а битые элементы списков пропускают.
//! Использование: `#[serde(default, deserialize_with = "lenient::number")]`.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Float(f64),
    String(String),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MaybeValid<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListOrOther<T> {
    List(Vec<MaybeValid<T>>),
    Other(IgnoredAny),
}

fn raw_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(NumberOrString::Float(f)) => Some(f),
        Some(NumberOrString::String(s)) => s.trim().parse::<f64>().ok(),
        Some(NumberOrString::Other(_)) | None => None,
    })
}

/// Число из числа или строки; всё остальное даёт 0
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(raw_number(deserializer)?.unwrap_or(0.0))
}

/// Неотрицательное целое: дробная часть отбрасывается, отрицательные и NaN дают 0
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    // `as` насыщает: NaN -> 0, за пределами диапазона -> граница
    Ok(raw_number(deserializer)?.map_or(0, |v| v.trunc() as u32))
}

/// Целое со знаком, дробная часть отбрасывается
pub fn integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(raw_number(deserializer)?.map_or(0, |v| v.trunc() as i64))
}

/// Строка; число превращается в свой текст, прочее даёт пустую строку
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(NumberOrString::String(s)) => s,
        Some(NumberOrString::Float(f)) => f.to_string(),
        Some(NumberOrString::Other(_)) | None => String::new(),
    })
}

/// Значение типа `T` или `T::default()` для `null` и нечитаемых значений
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(match Option::<MaybeValid<T>>::deserialize(deserializer)? {
        Some(MaybeValid::Valid(value)) => value,
        Some(MaybeValid::Invalid(_)) | None => T::default(),
    })
}

/// Необязательное значение: нечитаемое считается отсутствующим
pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<MaybeValid<T>>::deserialize(deserializer)? {
        Some(MaybeValid::Valid(value)) => Some(value),
        Some(MaybeValid::Invalid(_)) | None => None,
    })
}

/// Список, из которого выброшены нечитаемые элементы
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<ListOrOther<T>>::deserialize(deserializer)? {
        Some(ListOrOther::List(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                MaybeValid::Valid(value) => Some(value),
                MaybeValid::Invalid(_) => None,
            })
            .collect(),
        Some(ListOrOther::Other(_)) | None => Vec::new(),
    })
}

/// Ответ-список, в котором битые записи пропускаются, а не валят весь ответ
#[derive(Debug, Clone, PartialEq)]
pub struct SkipInvalid<T>(pub Vec<T>);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SkipInvalid<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        list(deserializer).map(SkipInvalid)
    }
}

impl<T> SkipInvalid<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}
