use web_sys::{Storage, Window};

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Reads one key; storage errors and missing keys both come back as `None`.
pub fn read_item(key: &str) -> Option<String> {
    match local_storage().and_then(|storage| {
        storage
            .get_item(key)
            .map_err(|_| format!("Failed to read '{}'", key))
    }) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("{}", err);
            None
        }
    }
}
