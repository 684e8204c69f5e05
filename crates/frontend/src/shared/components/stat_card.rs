use crate::shared::components::ui::badge::BadgeVariant;
use leptos::prelude::*;

/// Карточка сводки: подпись, значение и необязательная подсказка
#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] variant: Signal<BadgeVariant>,
    #[prop(into, optional)] subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let status_class = move || match variant.get() {
        BadgeVariant::Success => "stat-card stat-card--success",
        BadgeVariant::Error => "stat-card stat-card--error",
        BadgeVariant::Warning => "stat-card stat-card--warning",
        BadgeVariant::Primary | BadgeVariant::Neutral => "stat-card",
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=status_class>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
