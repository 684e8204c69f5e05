use serde::{Deserialize, Serialize};

use crate::enums::staff_role::StaffRole;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserInfo,
}

/// Сотрудник, от имени которого работает сессия
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub role: StaffRole,
}

impl UserInfo {
    pub fn can_manage(&self) -> bool {
        self.role.can_manage()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // user_id
    pub username: String,
    pub role: StaffRole,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at
}
