use web_sys::{Storage, Window};

pub const TOKEN_KEY: &str = "token";

pub fn window() -> Result<Window, String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }
    // web_sys imports panic when called off wasm32
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err("No window object".to_string())
    }
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Stored bearer token, if any. Blank values count as absent.
pub fn load_token() -> Option<String> {
    local_storage()
        .ok()?
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.trim().is_empty())
}

pub fn save_token(token: &str) -> Result<(), String> {
    local_storage()?
        .set_item(TOKEN_KEY, token)
        .map_err(|_| "Failed to store token".to_string())
}

pub fn clear_token() {
    if let Ok(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
