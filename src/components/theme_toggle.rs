use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::theme::use_theme;
use crate::state::theme::{Theme, ThemeAction};

fn toggle_label(current: Theme) -> String {
    format!("Switch to {} mode", current.toggled())
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_theme();
    let theme = match theme {
        Some(theme) => theme,
        None => return html! {},
    };

    let current = theme.theme;
    let onclick = {
        let theme = theme.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            theme.dispatch(ThemeAction::Toggle);
        })
    };

    html! {
        <button
            class={classes!("theme-toggle", current.as_str())}
            aria-label={toggle_label(current)}
            {onclick}
        >
            <span class="theme-icon">{if current == Theme::Light { "☀" } else { "☾" }}</span>
            <style>
                {r#"
                    .theme-toggle {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        border: 1px solid var(--border);
                        background: var(--bg-alt);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        cursor: pointer;
                        transition: transform 0.2s ease-in-out;
                    }
                    .theme-toggle:hover {
                        transform: scale(1.05);
                    }
                    .theme-toggle.light .theme-icon { color: #eab308; }
                    .theme-toggle.dark .theme-icon { color: #60a5fa; }
                "#}
            </style>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_names_the_other_theme() {
        assert_eq!(toggle_label(Theme::Light), "Switch to dark mode");
        assert_eq!(toggle_label(Theme::Dark), "Switch to light mode");
    }
}
