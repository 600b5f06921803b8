use std::collections::HashMap;

use anyhow::Result;
use tracing::{debug, warn};

// PreferenceStore
//
// the durable key-value capability the page persists into.  implementations are
// allowed to fail (quota, privacy mode, no window at all); callers go through
// Preferences below, which never lets those failures escape
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

// Preferences
//
// wraps a store with a key prefix and a session overlay.  every write lands in the
// overlay, and the overlay answers reads before the store does, so a write the
// store rejected is still what the rest of the session sees
#[derive(Debug)]
pub struct Preferences<S: PreferenceStore> {
    store: S,
    prefix: String,
    session: HashMap<String, String>,
}

impl<S: PreferenceStore> Preferences<S> {
    pub fn new(store: S, prefix: &str) -> Self {
        Preferences {
            store,
            prefix: prefix.to_owned(),
            session: HashMap::new(),
        }
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let full_key = self.full_key(key);

        if let Some(value) = self.session.get(&full_key) {
            return Some(value.clone());
        }

        match self.store.get(&full_key) {
            Ok(value) => value,
            Err(err) => {
                debug!("preference read for {full_key} failed: {err}");
                None
            }
        }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        let full_key = self.full_key(key);

        if let Err(err) = self.store.set(&full_key, value) {
            warn!("preference write for {full_key} failed, keeping it for this session: {err}");
        }

        self.session.insert(full_key, value.to_owned());
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }
}

// MemoryStore
//
// plain in-memory store for host tests; can be told to fail so the fallback path
// gets exercised
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryStore {
    values: HashMap<String, String>,
    unavailable: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub(crate) fn new() -> Self {
        MemoryStore::default()
    }

    pub(crate) fn unavailable() -> Self {
        MemoryStore {
            values: HashMap::new(),
            unavailable: true,
        }
    }

    pub(crate) fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_owned(), value.to_owned());
        self
    }

    pub(crate) fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.unavailable {
            return Err(anyhow::Error::msg("storage unavailable"));
        }

        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.unavailable {
            return Err(anyhow::Error::msg("storage unavailable"));
        }

        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_prefixed() {
        let mut prefs = Preferences::new(MemoryStore::new(), "portfolio_");

        prefs.set("theme", "dark");

        assert_eq!(prefs.store().raw("portfolio_theme"), Some("dark"));
        assert_eq!(prefs.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn missing_key_reads_as_none() {
        let prefs = Preferences::new(MemoryStore::new(), "portfolio_");

        assert_eq!(prefs.get("theme"), None);
    }

    #[test]
    fn unavailable_storage_falls_back_to_session() {
        let mut prefs = Preferences::new(MemoryStore::unavailable(), "portfolio_");

        assert_eq!(prefs.get("theme"), None);

        prefs.set("theme", "light");

        assert_eq!(prefs.get("theme").as_deref(), Some("light"));
        assert_eq!(prefs.store().raw("portfolio_theme"), None);
    }

    // reads work, writes are rejected (a full quota)
    struct FullStore(MemoryStore);

    impl PreferenceStore for FullStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(anyhow::Error::msg("quota exceeded"))
        }
    }

    #[test]
    fn rejected_write_shadows_stored_value() {
        let store = FullStore(MemoryStore::new().with_value("p_theme", "dark"));
        let mut prefs = Preferences::new(store, "p_");

        assert_eq!(prefs.get("theme").as_deref(), Some("dark"));

        prefs.set("theme", "light");

        assert_eq!(prefs.get("theme").as_deref(), Some("light"));
        assert_eq!(prefs.store().0.raw("p_theme"), Some("dark"));
    }
}
