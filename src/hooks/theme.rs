use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MediaQueryList, MediaQueryListEvent};
use yew::prelude::*;

use crate::config::THEME_STORAGE_KEY;
use crate::state::theme::{PreferenceStore, Theme, ThemeAction, ThemeState};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Browser local storage under a fixed key. Blocked or missing storage reads
/// as empty and drops writes.
pub struct LocalStore {
    key: &'static str,
}

pub const THEME_STORE: LocalStore = LocalStore {
    key: THEME_STORAGE_KEY,
};

impl PreferenceStore for LocalStore {
    fn load(&self) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(self.key).ok())
            .flatten()
    }

    fn save(&self, value: &str) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
            let _ = storage.set_item(self.key, value);
        }
    }
}

fn dark_scheme_query() -> Option<MediaQueryList> {
    window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok())
        .flatten()
}

pub fn system_prefers_dark() -> Option<bool> {
    dark_scheme_query().map(|query| query.matches())
}

/// Reflects the theme onto the document root and the mobile theme-color tag.
pub fn apply_theme(theme: Theme) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(root) = document.document_element() {
        let classes = root.class_list();
        let _ = classes.remove_1(theme.toggled().as_str());
        let _ = classes.add_1(theme.as_str());
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Ok(Some(meta)) = document.query_selector("meta[name=\"theme-color\"]") {
        let _ = meta.set_attribute("content", theme.meta_color());
    }
}

pub type ThemeContext = UseReducerHandle<ThemeState>;

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let state = use_reducer(|| ThemeState::load(&THEME_STORE, system_prefers_dark()));

    {
        let current = *state;
        use_effect_with_deps(
            move |current: &ThemeState| {
                apply_theme(current.theme);
                current.persist(&THEME_STORE);
                info!("Theme set to {} (explicit: {})", current.theme, current.explicit);
                || ()
            },
            current,
        );
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let query = dark_scheme_query();
                let listener = Closure::<dyn Fn(MediaQueryListEvent)>::new(
                    move |event: MediaQueryListEvent| {
                        // A stored value means the user picked a theme at some point.
                        if THEME_STORE.load().is_some() {
                            debug!("Ignoring system theme change, user choice is stored");
                            return;
                        }
                        dispatcher.dispatch(ThemeAction::SystemChanged {
                            prefers_dark: event.matches(),
                        });
                    },
                );
                if let Some(query) = &query {
                    let _ = query.add_event_listener_with_callback(
                        "change",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(query) = query {
                        let _ = query.remove_event_listener_with_callback(
                            "change",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<ThemeContext> context={state}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> Option<ThemeContext> {
    use_context::<ThemeContext>()
}
