use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config::{whatsapp_link, COMPACT_HEADER_THRESHOLD, WHATSAPP_MESSAGE, WHATSAPP_PHONE};
use crate::hooks::navigation::use_navigation;
use crate::state::navigation::{Section, NAV_SECTIONS};

#[function_component(Header)]
pub fn header() -> Html {
    let nav = use_navigation(COMPACT_HEADER_THRESHOLD);
    let compact = nav.is_compact();
    let menu_open = nav.is_menu_open();
    let chat_link = whatsapp_link(WHATSAPP_PHONE, WHATSAPP_MESSAGE);

    let go_to = |section: Section| {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.navigate_to(section.id());
        })
    };

    let toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.toggle();
        })
    };

    let close_menu = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.close())
    };

    let links = |class: &'static str| {
        NAV_SECTIONS
            .iter()
            .map(|section| {
                html! {
                    <a key={section.id()} href={section.href()} {class} onclick={go_to(*section)}>
                        {section.label()}
                    </a>
                }
            })
            .collect::<Html>()
    };

    html! {
        <header class={classes!("site-header", compact.then_some("compact"))}>
            <div class="header-inner">
                <a href={Section::Home.href()} class="logo" onclick={go_to(Section::Home)}>
                    <span class="logo-mark">{"</>"}</span>
                    {
                        if compact {
                            html! { <span class="logo-text gradient-text">{"PS"}</span> }
                        } else {
                            html! { <span class="logo-text">{"Pacific"}<span class="accent">{"Softwares"}</span></span> }
                        }
                    }
                </a>

                <nav class="desktop-nav">
                    { links("nav-link") }
                </nav>

                <div class="desktop-actions">
                    <ThemeToggle />
                    <a href={chat_link.clone()} target="_blank" rel="noopener noreferrer" class="chat-button" aria-label="Chat on WhatsApp">
                        {"Chat Now"}
                    </a>
                </div>

                <div class="mobile-actions">
                    <ThemeToggle />
                    <button
                        class="burger-menu"
                        onclick={toggle_menu}
                        aria-label="Toggle mobile menu"
                        aria-expanded={menu_open.to_string()}
                    >
                        {if menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            {
                if menu_open {
                    html! {
                        <div class="mobile-menu">
                            { links("mobile-nav-link") }
                            <a href={chat_link} target="_blank" rel="noopener noreferrer" class="chat-button mobile" onclick={close_menu}>
                                {"Chat Now"}
                            </a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1rem 1.5rem;
                        background: transparent;
                        transition: all 0.3s ease-in-out;
                    }
                    .site-header.compact {
                        padding: 0.75rem 1.5rem;
                        background: var(--bg);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        border-bottom: 1px solid var(--border);
                    }
                    .header-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .logo {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        text-decoration: none;
                        color: var(--text);
                        font-weight: 700;
                        font-size: 1.5rem;
                    }
                    .site-header.compact .logo {
                        font-size: 1.25rem;
                    }
                    .logo-mark {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.5rem;
                        background: linear-gradient(90deg, #f97316, #ea580c);
                        color: #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.9rem;
                    }
                    .logo .accent {
                        color: #f97316;
                    }
                    .desktop-nav {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: var(--muted);
                        text-decoration: none;
                        font-weight: 500;
                    }
                    .nav-link:hover {
                        color: #f97316;
                    }
                    .desktop-actions, .mobile-actions {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .chat-button {
                        padding: 0.6rem 1.5rem;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #f97316, #ea580c);
                        color: #fff;
                        text-decoration: none;
                        font-weight: 500;
                    }
                    .burger-menu {
                        background: none;
                        border: none;
                        font-size: 1.5rem;
                        color: var(--text);
                        cursor: pointer;
                    }
                    .mobile-actions {
                        display: none;
                    }
                    .mobile-menu {
                        margin-top: 1rem;
                        padding: 1rem 0;
                        background: var(--bg);
                        border: 1px solid var(--border);
                        border-radius: 0.75rem;
                        display: flex;
                        flex-direction: column;
                    }
                    .mobile-nav-link {
                        padding: 0.75rem 1rem;
                        color: var(--text);
                        text-decoration: none;
                    }
                    .chat-button.mobile {
                        margin: 0.5rem 1rem;
                        text-align: center;
                    }
                    @media (max-width: 1024px) {
                        .desktop-nav, .desktop-actions {
                            display: none;
                        }
                        .mobile-actions {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </header>
    }
}
