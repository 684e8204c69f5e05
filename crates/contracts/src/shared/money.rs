//! Денежные суммы приходят из API как `f64`. Суммирование идёт в целых центах,
//! чтобы итоги по колонкам совпадали с суммой строк без хвостов округления.

/// Сумма в центах. NaN и бесконечности считаются нулём.
pub fn to_cents(amount: f64) -> i64 {
    if !amount.is_finite() {
        return 0;
    }
    (amount * 100.0).round() as i64
}

pub fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Сумма значений с точностью до цента
pub fn sum_money<I>(amounts: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    from_cents(amounts.into_iter().map(to_cents).sum())
}

/// Форматирование суммы для UI: "1 234.50"
pub fn format_money(amount: f64) -> String {
    let cents = to_cents(amount);
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let int_part = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    format!("{}{}.{:02}", sign, grouped, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_money_is_exact_to_the_cent() {
        assert_eq!(sum_money([0.1, 0.2]), 0.3);
        assert_eq!(sum_money([10.0, 20.0, 0.0]), 30.0);
        assert_eq!(sum_money(std::iter::empty()), 0.0);
    }

    #[test]
    fn test_non_finite_amounts_count_as_zero() {
        assert_eq!(sum_money([f64::NAN, 5.5, f64::INFINITY]), 5.5);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(1234.5), "1 234.50");
        assert_eq!(format_money(1234567.891), "1 234 567.89");
        assert_eq!(format_money(-12.3), "-12.30");
    }
}
