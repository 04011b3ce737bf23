//! Browser local-storage backend for the session store. Failures degrade to a
//! signed-out session rather than surfacing errors; private browsing modes can
//! reject writes at any time.

use crate::features::auth::store::KeyValueStorage;

pub struct BrowserStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match local_storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    leptos::logging::warn!("local storage write failed for {key}");
                }
            }
            None => leptos::logging::warn!("local storage is unavailable"),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
