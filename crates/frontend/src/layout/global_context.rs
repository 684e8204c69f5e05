use leptos::prelude::*;

/// Экраны дашборда
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppView {
    Kitchen,
    Orders,
    Customers,
    Inventory,
}

impl AppView {
    pub fn all() -> [AppView; 4] {
        [
            AppView::Kitchen,
            AppView::Orders,
            AppView::Customers,
            AppView::Inventory,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppView::Kitchen => "Kitchen",
            AppView::Orders => "Orders",
            AppView::Customers => "Customers",
            AppView::Inventory => "Inventory",
        }
    }

    /// Клиенты и склад доступны только owner / manager
    pub fn requires_manager(&self) -> bool {
        matches!(self, AppView::Customers | AppView::Inventory)
    }

    /// Экраны, видимые сотруднику
    pub fn visible_for(can_manage: bool) -> Vec<AppView> {
        Self::all()
            .into_iter()
            .filter(|v| can_manage || !v.requires_manager())
            .collect()
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<AppView>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(AppView::Kitchen),
            left_open: RwSignal::new(true),
        }
    }

    pub fn activate(&self, view: AppView) {
        self.active.set(view);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
