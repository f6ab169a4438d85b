//! Browser `localStorage` helpers for string values.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth collaborator keeps its session token here. Reads are synchronous
//! so session checks can run during store construction.
//!
//! Outside the browser build there is no storage: reads return `None` and
//! writes report an error.

/// Read the string stored under `key`, if any.
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = local_storage().ok()?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` under `key`.
///
/// # Errors
///
/// Returns an error string if storage is unavailable or the write is refused
/// (quota, private mode).
pub fn save_string(key: &str, value: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| format!("write {key} failed: {e:?}"))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
        Err(unavailable_message())
    }
}

/// Remove `key` from storage. Removing a missing key is not an error.
///
/// # Errors
///
/// Returns an error string if storage is unavailable or the removal fails.
pub fn remove(key: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        local_storage()?
            .remove_item(key)
            .map_err(|e| format!("remove {key} failed: {e:?}"))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        Err(unavailable_message())
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(unavailable_message)
}

fn unavailable_message() -> String {
    "localStorage unavailable".to_owned()
}
