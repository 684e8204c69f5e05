use contracts::system::auth::UserInfo;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const USER_INFO_KEY: &str = "auth_user_info";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save session (token + user) to localStorage
pub fn save_session(token: &str, user: &UserInfo) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_INFO_KEY, &json);
        }
    }
}

/// Restore saved session, if both parts are present and readable
pub fn load_session() -> Option<(String, UserInfo)> {
    let storage = get_local_storage()?;
    let token = storage.get_item(ACCESS_TOKEN_KEY).ok()??;
    let user_json = storage.get_item(USER_INFO_KEY).ok()??;
    let user = serde_json::from_str::<UserInfo>(&user_json).ok()?;
    Some((token, user))
}

/// Clear all authentication data
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(USER_INFO_KEY);
    }
}
