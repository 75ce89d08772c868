use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::{HERO_ROTATION_MS, SCHEDULING_URL};
use crate::data::{CLIENT_LOGOS, HERO_SERVICES};
use crate::hooks::navigation::scroll_to_anchor;
use crate::hooks::reveal::use_reveal;
use crate::hooks::rotation::use_rotation;
use crate::state::navigation::Section;

#[function_component(Hero)]
pub fn hero() -> Html {
    let section_ref = use_node_ref();
    let reveal = use_reveal(section_ref.clone(), ());
    let rotation = use_rotation(HERO_SERVICES.len(), HERO_ROTATION_MS, true);

    let view_work = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor(Section::Portfolio.id());
    });

    // Logos are listed twice so the marquee loops without a gap.
    let logos = CLIENT_LOGOS
        .iter()
        .chain(CLIENT_LOGOS.iter())
        .enumerate()
        .map(|(i, (name, mark))| {
            html! {
                <div key={i} class="client-logo" title={*name}>
                    <span class="client-mark">{*mark}</span>
                    <span class="client-name">{*name}</span>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section id={Section::Home.id()} ref={section_ref} data-reveal="hero" class={classes!("hero", reveal.class("hero"))}>
            <div class="hero-orb orb-1"></div>
            <div class="hero-orb orb-2"></div>
            <div class="section-inner hero-content">
                <div class="section-badge">{"Pacific Softwares - Your Website Partner"}</div>
                <h1>
                    <span class="hero-line">{"We Don't Just Build Websites"}</span>
                    <span class="hero-line gradient-text">{"We Build Market Leaders."}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Your website is your first impression. We make sure it's unforgettable, high-converting, and built to dominate."}
                </p>
                <div class="hero-cta-group">
                    <a href={SCHEDULING_URL} target="_blank" rel="noopener noreferrer" class="cta-button">
                        {"Schedule a Free Consultation"}
                    </a>
                    <a href={Section::Portfolio.href()} class="secondary-link" onclick={view_work}>
                        {"View Our Work"}
                    </a>
                </div>

                <div class="trusted-by">
                    <p>{"Trusted by Industry Leaders"}</p>
                    <div class="logo-track">{ logos }</div>
                </div>

                <div class="service-rotator">
                    <span>{"We specialize in "}</span>
                    <div class="rotator-window">
                        <div
                            class="rotator-track"
                            style={format!("transform: translateY(-{}em);", rotation.index() as f64 * 1.5)}
                        >
                            { for HERO_SERVICES.iter().enumerate().map(|(i, service)| html! {
                                <div class={classes!("rotator-item", (i == rotation.index()).then_some("active"))}>
                                    {*service}
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding-top: 8rem;
                        background: linear-gradient(135deg, var(--bg-alt), var(--bg));
                        text-align: center;
                    }
                    .hero-orb {
                        position: absolute;
                        border-radius: 9999px;
                        filter: blur(48px);
                        animation: float 6s ease-in-out infinite;
                    }
                    .orb-1 {
                        top: 25%;
                        left: 2.5rem;
                        width: 8rem;
                        height: 8rem;
                        background: rgba(249, 115, 22, 0.3);
                    }
                    .orb-2 {
                        bottom: 25%;
                        right: 5rem;
                        width: 6rem;
                        height: 6rem;
                        background: rgba(59, 130, 246, 0.3);
                        animation-delay: 2s;
                    }
                    @keyframes float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-20px); }
                    }
                    .hero h1 {
                        font-size: clamp(2rem, 6vw, 4.5rem);
                        line-height: 1.15;
                        margin: 0 0 1.5rem 0;
                    }
                    .hero-line {
                        display: block;
                    }
                    .hero-subtitle {
                        color: var(--muted);
                        font-size: 1.25rem;
                        max-width: 56rem;
                        margin: 0 auto 2rem auto;
                        line-height: 1.6;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1.5rem;
                        justify-content: center;
                        align-items: center;
                        margin-bottom: 4rem;
                    }
                    .secondary-link {
                        color: var(--text);
                        font-weight: 600;
                    }
                    .trusted-by p {
                        color: var(--muted);
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }
                    .logo-track {
                        display: flex;
                        gap: 2rem;
                        overflow: hidden;
                        animation: scroll-logos 30s linear infinite;
                    }
                    @keyframes scroll-logos {
                        from { transform: translateX(0); }
                        to { transform: translateX(-50%); }
                    }
                    .client-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: var(--muted);
                        white-space: nowrap;
                    }
                    .client-mark {
                        font-weight: 700;
                        color: var(--accent);
                    }
                    .service-rotator {
                        margin-top: 3rem;
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                        color: var(--muted);
                    }
                    .rotator-window {
                        height: 1.5em;
                        overflow: hidden;
                    }
                    .rotator-track {
                        transition: transform 0.5s ease-in-out;
                    }
                    .rotator-item {
                        height: 1.5em;
                        line-height: 1.5em;
                        font-weight: 600;
                        color: var(--accent);
                    }
                "#}
            </style>
        </section>
    }
}
