use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api_utils::ApiClient;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn signed_in(token: String, user: UserInfo) -> Self {
        Self {
            access_token: Some(token),
            user_info: Some(user),
        }
    }

    pub fn can_manage(&self) -> bool {
        self.user_info
            .as_ref()
            .map(|u| u.can_manage())
            .unwrap_or(false)
    }

    /// Единственное место, где токен сессии превращается в клиента API
    pub fn api_client(&self) -> ApiClient {
        ApiClient::for_session(self.access_token.clone())
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // localStorage читается только здесь, при старте
    let restored = storage::load_session()
        .map(|(token, user)| AuthState::signed_in(token, user))
        .unwrap_or_default();
    let (auth_state, set_auth_state) = signal(restored.clone());

    if restored.access_token.is_some() {
        // Проверяем сохранённый токен; выходим только если бэкенд его отверг
        spawn_local(async move {
            let api = restored.api_client();
            match api::get_current_user(&api).await {
                Ok(user) => set_auth_state.update(|s| s.user_info = Some(user)),
                Err(e) if e.should_clear_session() => {
                    log::warn!("Saved session rejected: {}", e);
                    storage::clear_session();
                    set_auth_state.set(AuthState::default());
                }
                Err(e) => log::warn!("Could not verify saved session, keeping it: {}", e),
            }
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::staff_role::StaffRole;

    fn user(role: StaffRole) -> UserInfo {
        UserInfo {
            id: "1".into(),
            username: "u".into(),
            display_name: None,
            role,
        }
    }

    #[test]
    fn test_can_manage_by_role() {
        assert!(!AuthState::default().can_manage());
        assert!(AuthState::signed_in("t".into(), user(StaffRole::Manager)).can_manage());
        assert!(!AuthState::signed_in("t".into(), user(StaffRole::Kitchen)).can_manage());
    }
}
