use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod data;
mod models;
mod state {
    pub mod accordion;
    pub mod contact_form;
    pub mod filter;
    pub mod navigation;
    pub mod reveal;
    pub mod rotation;
    pub mod theme;
}
mod hooks {
    pub mod contact_form;
    pub mod navigation;
    pub mod reveal;
    pub mod rotation;
    pub mod theme;
}
mod components {
    pub mod footer;
    pub mod header;
    pub mod theme_toggle;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod faq;
    pub mod hero;
    pub mod home;
    pub mod portfolio;
    pub mod process;
    pub mod services;
    pub mod testimonials;
}

use components::{footer::Footer, header::Header};
use hooks::theme::ThemeProvider;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            // Single page site: unknown paths get the same page.
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <ThemeProvider>
            <BrowserRouter>
                <a href="#main-content" class="skip-link">{"Skip to main content"}</a>
                <Header />
                <Switch<Route> render={switch} />
                <Footer />
            </BrowserRouter>
            <style>
                {r#"
                    :root {
                        --bg: #ffffff;
                        --bg-alt: #f9fafb;
                        --card: #ffffff;
                        --border: rgba(0, 0, 0, 0.08);
                        --text: #111827;
                        --muted: #4b5563;
                        --accent: #FF6B2B;
                        --accent-2: #FF8A4A;
                    }
                    :root.dark {
                        --bg: #0A0F1C;
                        --bg-alt: #1A1F2E;
                        --card: rgba(255, 255, 255, 0.05);
                        --border: rgba(255, 255, 255, 0.1);
                        --text: #ffffff;
                        --muted: #d1d5db;
                    }
                    body {
                        margin: 0;
                        background: var(--bg);
                        color: var(--text);
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        transition: background-color 0.3s, color 0.3s;
                    }
                    section {
                        position: relative;
                        padding: 6rem 1.5rem;
                        overflow: hidden;
                    }
                    .section-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .section-badge {
                        display: inline-block;
                        padding: 0.5rem 1rem;
                        border: 1px solid rgba(255, 107, 43, 0.3);
                        border-radius: 9999px;
                        color: var(--accent);
                        font-size: 0.875rem;
                        margin-bottom: 1.5rem;
                    }
                    .section-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-header h2 {
                        font-size: 2.5rem;
                        margin: 0 0 1.5rem 0;
                    }
                    .section-header p {
                        color: var(--muted);
                        max-width: 48rem;
                        margin: 0 auto;
                        font-size: 1.15rem;
                        line-height: 1.6;
                    }
                    .gradient-text {
                        background: linear-gradient(90deg, #FF6B2B, #FF8A4A, #FFB366);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .card {
                        background: var(--card);
                        border: 1px solid var(--border);
                        border-radius: 1rem;
                    }
                    .cta-button {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.9rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #FF6B2B, #FF8A4A);
                        color: #fff;
                        font-weight: 600;
                        text-decoration: none;
                        cursor: pointer;
                    }
                    .link-button {
                        background: none;
                        border: none;
                        color: var(--accent);
                        cursor: pointer;
                        font-size: 1rem;
                        text-decoration: none;
                    }
                    [data-reveal] {
                        opacity: 0;
                        transform: translateY(24px);
                    }
                    [data-reveal].animate-in {
                        animation: revealUp 0.6s ease-out forwards;
                    }
                    @keyframes revealUp {
                        from { opacity: 0; transform: translateY(24px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .skip-link {
                        position: absolute;
                        left: -999px;
                    }
                    .skip-link:focus {
                        left: 1rem;
                        top: 1rem;
                        z-index: 100;
                    }
                "#}
            </style>
        </ThemeProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
