use leptos::prelude::*;

/// Визуальный вариант бейджа
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    Primary,
    Success,
    Warning,
    Error,
    #[default]
    Neutral,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge--primary",
            BadgeVariant::Success => "badge--success",
            BadgeVariant::Warning => "badge--warning",
            BadgeVariant::Error => "badge--error",
            BadgeVariant::Neutral => "badge--neutral",
        }
    }
}

/// Badge component with different variants
#[component]
pub fn Badge(
    #[prop(optional, into)] variant: Signal<BadgeVariant>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant.get().class(), additional_class())>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_classes() {
        assert_eq!(BadgeVariant::default(), BadgeVariant::Neutral);
        assert_eq!(BadgeVariant::Error.class(), "badge--error");
        assert_eq!(BadgeVariant::Success.class(), "badge--success");
    }
}
