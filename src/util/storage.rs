//! Browser localStorage glue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes web-sys storage access so state modules can stay pure and
//! testable off the browser. All operations are best-effort: a missing
//! window or a storage error reads as "nothing stored".

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the raw string stored under `key`, if any.
pub fn read(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

/// Store `value` under `key`.
pub fn write(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Delete whatever is stored under `key`.
pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}
