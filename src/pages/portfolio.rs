use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::data::{PORTFOLIO_CATEGORIES, PROJECTS};
use crate::hooks::reveal::use_reveal;
use crate::models::Project;
use crate::state::filter::{FilterableList, ALL_CATEGORY};
use crate::state::navigation::Section;
use crate::state::reveal::stagger_delay;

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let section_ref = use_node_ref();
    let active_category = use_state(|| ALL_CATEGORY.to_string());
    // Rebuild the observer whenever a different set of cards is rendered.
    let reveal = use_reveal(section_ref.clone(), (*active_category).clone());

    let mut list = FilterableList::new(PROJECTS, Project::search_fields);
    list.set_category((*active_category).clone());
    let view = list.results();

    let filter_buttons = PORTFOLIO_CATEGORIES
        .iter()
        .map(|category| {
            let onclick = {
                let active_category = active_category.clone();
                let category = category.to_string();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    debug!("Portfolio filter set to {}", category);
                    active_category.set(category.clone());
                })
            };
            let active = *active_category == *category;
            html! {
                <button key={*category} class={classes!("filter-button", active.then_some("active"))} {onclick}>
                    {*category}
                </button>
            }
        })
        .collect::<Html>();

    let cards = view
        .items()
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let key = format!("project-{}", project.id);
            html! {
                <article
                    key={project.id}
                    data-reveal={key.clone()}
                    class={classes!("project-card", "card", reveal.class(&key))}
                    style={stagger_delay(index)}
                >
                    <div class="project-image">
                        <img src={project.image} alt={project.title} loading="lazy" />
                        <span class="project-category">{project.category}</span>
                    </div>
                    <div class="project-body">
                        <h3>{project.title}</h3>
                        <p>{project.description}</p>
                        <div class="tech-stack">
                            { for project.tech_stack.iter().map(|tech| html! { <span class="tech-tag">{*tech}</span> }) }
                        </div>
                        <div class="project-links">
                            {
                                if let Some(url) = project.live_url {
                                    html! { <a href={url} target="_blank" rel="noopener noreferrer">{"Live Demo"}</a> }
                                } else {
                                    html! {}
                                }
                            }
                            {
                                if let Some(url) = project.repo_url {
                                    html! { <a href={url} target="_blank" rel="noopener noreferrer">{"Source"}</a> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    </div>
                </article>
            }
        })
        .collect::<Html>();

    let show_all = {
        let active_category = active_category.clone();
        Callback::from(move |_: MouseEvent| active_category.set(ALL_CATEGORY.to_string()))
    };

    html! {
        <section id={Section::Portfolio.id()} ref={section_ref} class="portfolio">
            <div class="section-inner">
                <div data-reveal="portfolio-header" class={classes!("section-header", reveal.class("portfolio-header"))}>
                    <div class="section-badge">{"Our Portfolio"}</div>
                    <h2>{"Featured "}<span class="gradient-text">{"Projects"}</span></h2>
                    <p>{"Explore our latest work and see how we've helped businesses transform their digital presence."}</p>
                </div>

                <div class="filter-bar">{ filter_buttons }</div>

                <div class="project-grid">{ cards }</div>

                {
                    if view.no_matches() {
                        html! {
                            <div class="no-results">
                                <p>{"No projects in this category yet."}</p>
                                <button class="link-button" onclick={show_all}>{"Show all projects"}</button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <style>
                {r#"
                    .portfolio {
                        background: var(--bg);
                    }
                    .filter-bar {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                        margin-bottom: 3rem;
                    }
                    .filter-button {
                        padding: 0.6rem 1.5rem;
                        border-radius: 9999px;
                        border: 1px solid var(--border);
                        background: var(--card);
                        color: var(--text);
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .filter-button.active {
                        background: linear-gradient(90deg, #FF6B2B, #FF8A4A);
                        color: #fff;
                        border-color: transparent;
                    }
                    .project-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                        gap: 2rem;
                    }
                    .project-card {
                        overflow: hidden;
                        transition: transform 0.3s;
                    }
                    .project-card:hover {
                        transform: translateY(-6px);
                    }
                    .project-image {
                        position: relative;
                        height: 12rem;
                        overflow: hidden;
                    }
                    .project-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .project-category {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: rgba(255, 107, 43, 0.9);
                        color: #fff;
                        font-size: 0.75rem;
                    }
                    .project-body {
                        padding: 1.5rem;
                    }
                    .project-body p {
                        color: var(--muted);
                    }
                    .tech-stack {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin: 1rem 0;
                    }
                    .tech-tag {
                        padding: 0.2rem 0.6rem;
                        border-radius: 0.375rem;
                        background: var(--bg-alt);
                        font-size: 0.75rem;
                    }
                    .project-links {
                        display: flex;
                        gap: 1rem;
                    }
                    .project-links a {
                        color: var(--accent);
                    }
                    .no-results {
                        text-align: center;
                        padding: 3rem 0;
                        color: var(--muted);
                    }
                "#}
            </style>
        </section>
    }
}
