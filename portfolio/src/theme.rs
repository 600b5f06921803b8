use std::{fmt, str::FromStr};

use tracing::debug;

use crate::storage::{PreferenceStore, Preferences};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn opposite(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(anyhow::Error::msg(format!("unknown theme {other}"))),
        }
    }
}

// ThemeRoot
//
// the document-level attribute the stylesheet keys off of
pub trait ThemeRoot {
    fn theme(&self) -> Option<Theme>;

    fn set_theme(&mut self, theme: Theme);
}

// ThemeController
//
// keeps the root attribute and the stored preference equal: every operation that
// changes one writes the other before returning
pub struct ThemeController<S: PreferenceStore, R: ThemeRoot> {
    prefs: Preferences<S>,
    root: R,
    key: String,
}

impl<S: PreferenceStore, R: ThemeRoot> ThemeController<S, R> {
    pub fn new(prefs: Preferences<S>, root: R, key: &str) -> Self {
        ThemeController {
            prefs,
            root,
            key: key.to_owned(),
        }
    }

    // a stored value wins if it names a real theme; anything else (absent, garbage,
    // unreadable storage) defers to the environment
    pub fn resolve_initial_theme(&self, prefers_dark: bool) -> Theme {
        let stored = self.prefs.get(&self.key).and_then(|v| match v.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(err) => {
                debug!("ignoring stored theme: {err}");
                None
            }
        });

        match stored {
            Some(theme) => theme,
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    pub fn init(&mut self, prefers_dark: bool) -> Theme {
        let theme = self.resolve_initial_theme(prefers_dark);
        self.apply(theme);
        theme
    }

    pub fn apply(&mut self, theme: Theme) {
        self.root.set_theme(theme);
        self.prefs.set(&self.key, theme.as_str());
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current().opposite();
        self.apply(next);
        next
    }

    // the root attribute is the source of truth; if something stripped it, the
    // stored value is the next best guess
    pub fn current(&self) -> Theme {
        self.root
            .theme()
            .or_else(|| self.prefs.get(&self.key).and_then(|v| v.parse().ok()))
            .unwrap_or(Theme::Light)
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &R {
        &self.root
    }

    #[cfg(test)]
    pub(crate) fn prefs(&self) -> &Preferences<S> {
        &self.prefs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[derive(Default)]
    struct FakeRoot(Option<Theme>);

    impl ThemeRoot for FakeRoot {
        fn theme(&self) -> Option<Theme> {
            self.0
        }

        fn set_theme(&mut self, theme: Theme) {
            self.0 = Some(theme);
        }
    }

    fn controller(store: MemoryStore) -> ThemeController<MemoryStore, FakeRoot> {
        ThemeController::new(Preferences::new(store, "p_"), FakeRoot::default(), "theme")
    }

    #[test]
    fn stored_preference_beats_environment() {
        let ctl = controller(MemoryStore::new().with_value("p_theme", "light"));

        assert_eq!(ctl.resolve_initial_theme(true), Theme::Light);
    }

    #[test]
    fn environment_decides_without_preference() {
        let ctl = controller(MemoryStore::new());

        assert_eq!(ctl.resolve_initial_theme(true), Theme::Dark);
        assert_eq!(ctl.resolve_initial_theme(false), Theme::Light);
    }

    #[test]
    fn invalid_stored_value_is_ignored() {
        let ctl = controller(MemoryStore::new().with_value("p_theme", "sepia"));

        assert_eq!(ctl.resolve_initial_theme(true), Theme::Dark);
    }

    #[test]
    fn init_applies_and_persists() {
        let mut ctl = controller(MemoryStore::new());

        let theme = ctl.init(true);

        assert_eq!(theme, Theme::Dark);
        assert_eq!(ctl.root().theme(), Some(Theme::Dark));
        assert_eq!(ctl.prefs().store().raw("p_theme"), Some("dark"));
    }

    #[test]
    fn root_and_store_agree_after_every_operation() {
        let mut ctl = controller(MemoryStore::new());

        ctl.init(false);
        for _ in 0..3 {
            ctl.toggle();
            let stored = ctl.prefs().store().raw("p_theme").map(str::to_owned);
            assert_eq!(ctl.root().theme().map(|t| t.to_string()), stored);
        }
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut ctl = controller(MemoryStore::new());
        ctl.init(true);

        assert_eq!(ctl.toggle(), Theme::Light);
        assert_eq!(ctl.toggle(), Theme::Dark);
        assert_eq!(ctl.root().theme(), Some(Theme::Dark));
        assert_eq!(ctl.prefs().store().raw("p_theme"), Some("dark"));
    }

    #[test]
    fn toggle_works_without_storage() {
        let mut ctl = controller(MemoryStore::unavailable());
        ctl.init(false);

        assert_eq!(ctl.toggle(), Theme::Dark);
        assert_eq!(ctl.prefs().get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn theme_parses_only_known_names() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("Dark".parse::<Theme>().is_err());
    }
}
