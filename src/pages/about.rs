use yew::prelude::*;

use crate::data::SOCIAL_LINKS;
use crate::hooks::reveal::use_reveal;
use crate::state::navigation::Section;

const HIGHLIGHTS: &[(&str, &str)] = &[
    ("50+", "Projects delivered"),
    ("30+", "Happy clients"),
    ("5+", "Years of experience"),
    ("24/7", "Support"),
];

#[function_component(About)]
pub fn about() -> Html {
    let section_ref = use_node_ref();
    let reveal = use_reveal(section_ref.clone(), ());

    html! {
        <section id={Section::About.id()} ref={section_ref} class="about">
            <div class="section-inner about-grid">
                <div data-reveal="about-image" class={classes!("about-image", reveal.class("about-image"))}>
                    <img
                        src="https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=800"
                        alt="The Pacific Softwares team at work"
                        loading="lazy"
                    />
                </div>
                <div data-reveal="about-text" class={classes!("about-text", reveal.class("about-text"))}>
                    <div class="section-badge">{"About Us"}</div>
                    <h2>{"We Turn Ideas Into "}<span class="gradient-text">{"Digital Products"}</span></h2>
                    <p>
                        {"Pacific Softwares is a team of designers and engineers who build web, mobile and enterprise software for startups and established businesses. We keep teams small, communication direct and releases frequent."}
                    </p>
                    <p>
                        {"From the first discovery call to long after launch, you work with the same people who write your code."}
                    </p>
                    <div class="about-highlights">
                        {
                            for HIGHLIGHTS.iter().map(|(value, label)| html! {
                                <div class="highlight">
                                    <span class="highlight-value gradient-text">{*value}</span>
                                    <span class="highlight-label">{*label}</span>
                                </div>
                            })
                        }
                    </div>
                    <div class="about-social">
                        {
                            for SOCIAL_LINKS.iter().map(|(name, href)| html! {
                                <a href={*href} target="_blank" rel="noopener noreferrer" aria-label={*name}>{*name}</a>
                            })
                        }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .about-image img {
                        width: 100%;
                        border-radius: 1rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .about-text p {
                        color: var(--muted);
                        line-height: 1.7;
                    }
                    .about-highlights {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1rem;
                        margin: 2rem 0;
                    }
                    .highlight {
                        display: flex;
                        flex-direction: column;
                    }
                    .highlight-value {
                        font-size: 1.75rem;
                        font-weight: 700;
                    }
                    .highlight-label {
                        font-size: 0.8rem;
                        color: var(--muted);
                    }
                    .about-social {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .about-social a {
                        color: var(--muted);
                        text-decoration: none;
                    }
                    .about-social a:hover {
                        color: var(--accent);
                    }
                    @media (max-width: 768px) {
                        .about-grid {
                            grid-template-columns: 1fr;
                            gap: 2rem;
                        }
                        .about-highlights {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                "#}
            </style>
        </section>
    }
}
