use serde::{Deserialize, Serialize};

/// Роль сотрудника ресторана в админке
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Owner,
    Manager,
    Kitchen,
}

impl StaffRole {
    pub fn code(&self) -> &'static str {
        match self {
            StaffRole::Owner => "owner",
            StaffRole::Manager => "manager",
            StaffRole::Kitchen => "kitchen",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "owner" => Some(StaffRole::Owner),
            "manager" => Some(StaffRole::Manager),
            "kitchen" => Some(StaffRole::Kitchen),
            _ => None,
        }
    }

    /// Доступ к клиентам и складу
    pub fn can_manage(&self) -> bool {
        matches!(self, StaffRole::Owner | StaffRole::Manager)
    }
}
