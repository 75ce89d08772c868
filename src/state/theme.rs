use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::Reducible;

use crate::config::{THEME_COLOR_DARK, THEME_COLOR_LIGHT};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Used when nothing is stored and the system preference can't be read.
pub const FALLBACK_THEME: Theme = Theme::Light;

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value for the mobile browser `theme-color` meta tag.
    pub fn meta_color(self) -> &'static str {
        match self {
            Theme::Light => THEME_COLOR_LIGHT,
            Theme::Dark => THEME_COLOR_DARK,
        }
    }

    pub fn from_system(prefers_dark: bool) -> Theme {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Somewhere a single theme preference can be kept. Implementations swallow
/// their own failures: an unreadable store behaves like an empty one.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

pub fn initial_theme(stored: Option<&str>, system_dark: Option<bool>) -> Theme {
    if let Some(theme) = stored.and_then(Theme::parse) {
        return theme;
    }
    match system_dark {
        Some(prefers_dark) => Theme::from_system(prefers_dark),
        None => FALLBACK_THEME,
    }
}

pub enum ThemeAction {
    Toggle,
    Set(Theme),
    SystemChanged { prefers_dark: bool },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeState {
    pub theme: Theme,
    /// True once the user has made a choice that is (or will be) persisted.
    pub explicit: bool,
}

impl ThemeState {
    pub fn load(store: &dyn PreferenceStore, system_dark: Option<bool>) -> Self {
        let stored = store.load();
        let explicit = stored.as_deref().and_then(Theme::parse).is_some();
        Self {
            theme: initial_theme(stored.as_deref(), system_dark),
            explicit,
        }
    }

    /// Writes the theme to the store if the user chose it. Skips the write
    /// when the store already holds the same value.
    pub fn persist(&self, store: &dyn PreferenceStore) {
        if !self.explicit {
            return;
        }
        if store.load().as_deref() == Some(self.theme.as_str()) {
            return;
        }
        store.save(self.theme.as_str());
    }
}

impl Reducible for ThemeState {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            ThemeAction::Toggle => ThemeState {
                theme: self.theme.toggled(),
                explicit: true,
            },
            ThemeAction::Set(theme) => ThemeState {
                theme,
                explicit: true,
            },
            ThemeAction::SystemChanged { prefers_dark } => {
                if self.explicit {
                    return self;
                }
                ThemeState {
                    theme: Theme::from_system(prefers_dark),
                    explicit: false,
                }
            }
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore {
        value: RefCell<Option<String>>,
        writes: RefCell<usize>,
    }

    impl MemoryStore {
        fn with(value: &str) -> Self {
            Self {
                value: RefCell::new(Some(value.to_string())),
                writes: RefCell::new(0),
            }
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.value.borrow().clone()
        }

        fn save(&self, value: &str) {
            *self.value.borrow_mut() = Some(value.to_string());
            *self.writes.borrow_mut() += 1;
        }
    }

    fn dispatch(state: ThemeState, action: ThemeAction) -> ThemeState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn system_dark_used_when_nothing_stored() {
        assert_eq!(initial_theme(None, Some(true)), Theme::Dark);
        assert_eq!(initial_theme(None, Some(false)), Theme::Light);
    }

    #[test]
    fn stored_value_wins_over_system() {
        assert_eq!(initial_theme(Some("light"), Some(true)), Theme::Light);
        assert_eq!(initial_theme(Some("dark"), Some(false)), Theme::Dark);
    }

    #[test]
    fn garbage_in_storage_falls_through() {
        assert_eq!(initial_theme(Some("purple"), Some(true)), Theme::Dark);
        assert_eq!(initial_theme(Some(""), None), FALLBACK_THEME);
    }

    #[test]
    fn load_marks_valid_stored_value_explicit() {
        let state = ThemeState::load(&MemoryStore::with("dark"), Some(false));
        assert_eq!(state.theme, Theme::Dark);
        assert!(state.explicit);

        let state = ThemeState::load(&MemoryStore::with("nope"), Some(false));
        assert_eq!(state.theme, Theme::Light);
        assert!(!state.explicit);
    }

    #[test]
    fn toggle_parity() {
        let start = ThemeState {
            theme: Theme::Dark,
            explicit: false,
        };
        let mut state = start;
        for n in 1..=7 {
            state = dispatch(state, ThemeAction::Toggle);
            let expected = if n % 2 == 0 { start.theme } else { start.theme.toggled() };
            assert_eq!(state.theme, expected, "after {} toggles", n);
        }
    }

    #[test]
    fn system_change_applies_until_user_chooses() {
        let state = ThemeState {
            theme: Theme::Light,
            explicit: false,
        };
        let state = dispatch(state, ThemeAction::SystemChanged { prefers_dark: true });
        assert_eq!(state.theme, Theme::Dark);
        assert!(!state.explicit);

        let state = dispatch(state, ThemeAction::Toggle);
        assert_eq!(state.theme, Theme::Light);
        let state = dispatch(state, ThemeAction::SystemChanged { prefers_dark: true });
        assert_eq!(state.theme, Theme::Light);
    }

    #[test]
    fn persist_only_writes_explicit_choices_once() {
        let store = MemoryStore::default();
        let implicit = ThemeState {
            theme: Theme::Dark,
            explicit: false,
        };
        implicit.persist(&store);
        assert_eq!(store.load(), None);

        let chosen = dispatch(implicit, ThemeAction::Set(Theme::Light));
        chosen.persist(&store);
        chosen.persist(&store);
        assert_eq!(store.load().as_deref(), Some("light"));
        assert_eq!(*store.writes.borrow(), 1);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, Theme::Light);
    }
}
