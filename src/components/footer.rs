use chrono::Datelike;
use log::info;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::config::CONTACT_EMAIL;
use crate::data::{CONTACT_INFO, SOCIAL_LINKS};
use crate::hooks::navigation::scroll_to_anchor;
use crate::state::navigation::Section;

const COMPANY_LINKS: &[(&str, &str)] = &[
    ("About Us", "#about"),
    ("Our Team", "#team"),
    ("Careers", "#careers"),
    ("Blog", "#blog"),
];

const SERVICE_LINKS: &[(&str, &str)] = &[
    ("Web Development", "#services"),
    ("Mobile Apps", "#services"),
    ("E-commerce", "#services"),
    ("SEO Services", "#services"),
];

fn footer_link(name: &'static str, href: &'static str) -> Html {
    // Links to rendered sections scroll smoothly, the rest keep browser behavior.
    let onclick = Section::from_anchor(href).map(|section| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_anchor(section.id());
        })
    });
    html! {
        <li><a {href} {onclick} class="footer-link">{name}</a></li>
    }
}

/// Trimmed address if it looks like an email, else `None`.
fn newsletter_address(input: &str) -> Option<String> {
    let address = input.trim();
    match address.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => Some(address.to_string()),
        _ => None,
    }
}

#[function_component(Newsletter)]
fn newsletter() -> Html {
    let email = use_state(String::new);
    let subscribed = use_state(|| false);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    // No mailing list backend; accepted addresses are only acknowledged.
    let onsubmit = {
        let email = email.clone();
        let subscribed = subscribed.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(address) = newsletter_address(&email) {
                info!("Newsletter signup for {}", address);
                email.set(String::new());
                subscribed.set(true);
            }
        })
    };

    html! {
        <div class="newsletter">
            <h4>{"Stay Updated"}</h4>
            <p>{"Subscribe to our newsletter for the latest web development insights and project updates."}</p>
            {
                if *subscribed {
                    html! { <p class="newsletter-thanks">{"Thanks for subscribing!"}</p> }
                } else {
                    html! {
                        <form class="newsletter-form" {onsubmit}>
                            <input
                                type="email"
                                placeholder="Enter your email"
                                aria-label="Email address"
                                value={(*email).clone()}
                                {oninput}
                            />
                            <button type="submit">{"Subscribe"}</button>
                        </form>
                    }
                }
            }
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    let scroll_to_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor(Section::Home.id());
    });

    let phone = CONTACT_INFO.get(1).map(|info| info.content).unwrap_or_default();
    let city = CONTACT_INFO.get(2).map(|info| info.description).unwrap_or_default();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <div class="footer-logo">
                        {"Pacific"}<span class="accent">{"Softwares"}</span>
                    </div>
                    <p>
                        {"We don't just build websites, we build market leaders. Transform your digital presence with our cutting-edge solutions."}
                    </p>
                    <ul class="footer-contact">
                        <li>{"✉ "}{CONTACT_EMAIL}</li>
                        <li>{"☎ "}{phone}</li>
                        <li>{"⌂ "}{city}</li>
                    </ul>
                </div>
                <div>
                    <h4>{"Company"}</h4>
                    <ul class="footer-links">
                        { for COMPANY_LINKS.iter().map(|(name, href)| footer_link(*name, *href)) }
                    </ul>
                </div>
                <div>
                    <h4>{"Services"}</h4>
                    <ul class="footer-links">
                        { for SERVICE_LINKS.iter().map(|(name, href)| footer_link(*name, *href)) }
                    </ul>
                </div>
                <Newsletter />
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} Pacific Softwares. All rights reserved.", year)}</p>
                <div class="footer-social">
                    { for SOCIAL_LINKS.iter().map(|(name, href)| html! {
                        <a key={*name} href={*href} aria-label={*name}>{*name}</a>
                    }) }
                </div>
                <button class="back-to-top" onclick={scroll_to_top} aria-label="Back to top">{"↑"}</button>
            </div>
            <style>
                {r#"
                    .site-footer {
                        background: var(--bg-alt);
                        border-top: 1px solid var(--border);
                        padding: 4rem 1.5rem 2rem 1.5rem;
                    }
                    .footer-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr 2fr;
                        gap: 2rem;
                    }
                    .footer-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .footer-logo .accent {
                        color: var(--accent);
                    }
                    .footer-brand p, .footer-contact li {
                        color: var(--muted);
                    }
                    .footer-contact, .footer-links {
                        list-style: none;
                        padding: 0;
                    }
                    .newsletter p {
                        color: var(--muted);
                        font-size: 0.875rem;
                    }
                    .newsletter-form {
                        display: flex;
                    }
                    .newsletter-form input {
                        flex: 1;
                        padding: 0.75rem 1rem;
                        border: 1px solid var(--border);
                        border-radius: 0.5rem 0 0 0.5rem;
                        background: var(--bg);
                        color: var(--text);
                    }
                    .newsletter-form button {
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 0 0.5rem 0.5rem 0;
                        background: linear-gradient(90deg, #FF6B2B, #FF8A4A);
                        color: #fff;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .newsletter-thanks {
                        color: var(--accent) !important;
                    }
                    .footer-links li {
                        margin-bottom: 0.75rem;
                    }
                    .footer-link {
                        color: var(--muted);
                        text-decoration: none;
                    }
                    .footer-link:hover {
                        color: var(--accent);
                    }
                    .footer-bottom {
                        max-width: 80rem;
                        margin: 3rem auto 0 auto;
                        padding-top: 2rem;
                        border-top: 1px solid var(--border);
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        color: var(--muted);
                    }
                    .footer-social {
                        display: flex;
                        gap: 1rem;
                    }
                    .footer-social a {
                        color: var(--muted);
                        text-decoration: none;
                    }
                    .back-to-top {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        border: none;
                        background: var(--accent);
                        color: #fff;
                        cursor: pointer;
                    }
                    @media (max-width: 768px) {
                        .footer-inner {
                            grid-template-columns: 1fr;
                        }
                        .footer-bottom {
                            flex-direction: column;
                            gap: 1rem;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newsletter_accepts_trimmed_address() {
        assert_eq!(
            newsletter_address("  ana@example.com "),
            Some("ana@example.com".to_string())
        );
    }

    #[test]
    fn newsletter_rejects_non_addresses() {
        assert_eq!(newsletter_address(""), None);
        assert_eq!(newsletter_address("ana"), None);
        assert_eq!(newsletter_address("@example.com"), None);
        assert_eq!(newsletter_address("ana@localhost"), None);
    }
}
