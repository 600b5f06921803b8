use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use portfolio::storage::PreferenceStore;

// LocalStore
//
// browser localStorage behind the PreferenceStore contract.  values are stored
// as plain text through the raw storage object, not gloo's JSON encoding.  gloo
// panics if the
// storage object is missing entirely (some privacy modes), so check for it first
// and report that as an ordinary error instead
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

fn storage_available() -> bool {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .is_some()
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        if !storage_available() {
            return Err(anyhow::Error::msg("local storage unavailable"));
        }

        LocalStorage::raw().get_item(key).map_err(|err| {
            console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        if !storage_available() {
            return Err(anyhow::Error::msg("local storage unavailable"));
        }

        LocalStorage::raw().set_item(key, value).map_err(|err| {
            console_error!(format!("Failed to set local storage {key}: {err:?}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }
}
