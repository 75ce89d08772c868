use yew::prelude::*;

use crate::config::SCHEDULING_URL;
use crate::data::SERVICES;
use crate::hooks::reveal::use_reveal;
use crate::state::navigation::Section;
use crate::state::reveal::stagger_delay;

#[function_component(Services)]
pub fn services() -> Html {
    let section_ref = use_node_ref();
    let reveal = use_reveal(section_ref.clone(), ());

    let cards = SERVICES
        .iter()
        .enumerate()
        .map(|(index, service)| {
            let key = format!("service-{}", index);
            html! {
                <div
                    key={service.title}
                    data-reveal={key.clone()}
                    class={classes!("service-card", "card", reveal.class(&key))}
                    style={stagger_delay(index)}
                >
                    <h3>{service.title}</h3>
                    <p>{service.description}</p>
                    <ul class="service-features">
                        { for service.features.iter().map(|feature| html! { <li>{"✓ "}{*feature}</li> }) }
                    </ul>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section id={Section::Services.id()} ref={section_ref} class="services">
            <div class="section-inner">
                <div data-reveal="services-banner" class={classes!("services-banner", reveal.class("services-banner"))}>
                    <h3>{"All Your Website Needs, "}<span class="gradient-text">{"Expertly Handled"}</span></h3>
                    <p>{"End-to-end website solutions that ensure your website looks great, functions flawlessly, and drives results."}</p>
                    <a href={SCHEDULING_URL} target="_blank" rel="noopener noreferrer" class="cta-button">
                        {"Book a Strategy Call"}
                    </a>
                </div>

                <div class="section-header">
                    <div class="section-badge">{"Our Services"}</div>
                    <h2>{"What We "}<span class="gradient-text">{"Do Best"}</span></h2>
                    <p>{"From concept to launch, we offer comprehensive digital solutions that help your business thrive online."}</p>
                </div>

                <div class="service-grid">{ cards }</div>
            </div>
            <style>
                {r#"
                    .services {
                        background: var(--bg);
                    }
                    .services-banner {
                        max-width: 56rem;
                        margin: 0 auto 5rem auto;
                        padding: 3rem;
                        text-align: center;
                        border: 1px solid rgba(255, 107, 43, 0.3);
                        border-radius: 1.5rem;
                        background: linear-gradient(135deg, rgba(255, 107, 43, 0.1), rgba(168, 85, 247, 0.1));
                    }
                    .services-banner h3 {
                        font-size: 2rem;
                        margin-top: 0;
                    }
                    .services-banner p {
                        color: var(--muted);
                        margin-bottom: 2rem;
                    }
                    .service-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                        gap: 2rem;
                    }
                    .service-card {
                        padding: 2rem;
                        transition: transform 0.3s;
                    }
                    .service-card:hover {
                        transform: translateY(-6px);
                    }
                    .service-card p {
                        color: var(--muted);
                        line-height: 1.6;
                    }
                    .service-features {
                        list-style: none;
                        padding: 0;
                    }
                    .service-features li {
                        margin-bottom: 0.5rem;
                        color: var(--muted);
                    }
                "#}
            </style>
        </section>
    }
}
