//! Language preference persisted in `localStorage`.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};

use crate::core::ports::PreferenceStore;

/// Preference store over the browser's local storage.
///
/// Values are stored as raw strings so static pages reading the same key see
/// `zh`, not `"zh"`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferenceStore;

impl PreferenceStore for LocalPreferenceStore {
    fn load(&self, key: &str) -> Option<String> {
        match LocalStorage::raw().get_item(key) {
            Ok(value) => value,
            Err(err) => {
                console::error!("storage operation failed", "get", key, err);
                None
            }
        }
    }

    fn store(&self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            console::error!("storage operation failed", "set", key, err);
        }
    }
}
