use contracts::domain::a003_inventory_item::aggregate::{InventoryItem, UpdateStockDto};
use contracts::domain::a003_inventory_item::stock::StockStatus;
use contracts::shared::money::format_money;

use crate::shared::components::ui::badge::BadgeVariant;

pub fn stock_variant(status: StockStatus) -> BadgeVariant {
    match status {
        StockStatus::Out => BadgeVariant::Error,
        StockStatus::Low => BadgeVariant::Warning,
        StockStatus::Good => BadgeVariant::Success,
    }
}

/// Отсортированный список категорий без повторов
pub fn categories(items: &[InventoryItem]) -> Vec<String> {
    let mut list: Vec<String> = items
        .iter()
        .map(|i| i.category.clone())
        .filter(|c| !c.is_empty())
        .collect();
    list.sort();
    list.dedup();
    list
}

/// Фильтр по категории; пустая строка означает все позиции
pub fn filter_by_category(items: &[InventoryItem], category: &str) -> Vec<InventoryItem> {
    items
        .iter()
        .filter(|i| category.is_empty() || i.category == category)
        .cloned()
        .collect()
}

/// Разбор введённого остатка; ошибка содержит текст для пользователя
pub fn parse_stock_input(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| "Stock must be a number".to_string())?;
    UpdateStockDto {
        current_stock: value,
    }
    .validate()?;
    Ok(value)
}

pub fn format_quantity(value: f64, unit: &str) -> String {
    let number = if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    };
    if unit.is_empty() {
        number
    } else {
        format!("{} {}", number, unit)
    }
}

pub fn stock_value_label(item: &InventoryItem) -> String {
    format_money(item.stock_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_inventory_item::aggregate::InventoryItemId;

    fn item(name: &str, category: &str) -> InventoryItem {
        InventoryItem {
            id: InventoryItemId::new_v4(),
            name: name.into(),
            category: category.into(),
            current_stock: 3.0,
            reorder_point: 5.0,
            cost_per_unit: 2.5,
            unit: "kg".into(),
        }
    }

    #[test]
    fn test_categories_are_unique_and_sorted() {
        let items = vec![item("a", "Meat"), item("b", "Dairy"), item("c", "Meat"), item("d", "")];
        assert_eq!(categories(&items), vec!["Dairy".to_string(), "Meat".to_string()]);
        assert_eq!(filter_by_category(&items, "Meat").len(), 2);
        assert_eq!(filter_by_category(&items, "").len(), 4);
    }

    #[test]
    fn test_parse_stock_input() {
        assert_eq!(parse_stock_input(" 12,5 "), Ok(12.5));
        assert_eq!(parse_stock_input("0"), Ok(0.0));
        assert!(parse_stock_input("-1").is_err());
        assert!(parse_stock_input("abc").is_err());
        assert!(parse_stock_input("NaN").is_err());
    }

    #[test]
    fn test_quantity_and_value_labels() {
        assert_eq!(format_quantity(3.0, "kg"), "3 kg");
        assert_eq!(format_quantity(2.25, ""), "2.25");
        assert_eq!(stock_value_label(&item("x", "Meat")), "7.50");
        assert_eq!(stock_variant(StockStatus::Low), BadgeVariant::Warning);
    }
}
