use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::PROCESS_ROTATION_MS;
use crate::data::PROCESS_STEPS;
use crate::hooks::reveal::use_reveal;
use crate::hooks::rotation::use_rotation;
use crate::state::navigation::Section;

#[function_component(Process)]
pub fn process() -> Html {
    let section_ref = use_node_ref();
    let reveal = use_reveal(section_ref.clone(), ());
    let rotation = use_rotation(PROCESS_STEPS.len(), PROCESS_ROTATION_MS, true);
    let active = rotation.index();

    let steps = PROCESS_STEPS
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let onclick = {
                let rotation = rotation.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    rotation.select(index);
                })
            };
            html! {
                <button
                    key={step.id}
                    class={classes!("step-tab", (index == active).then_some("active"), (index < active).then_some("done"))}
                    {onclick}
                >
                    <span class="step-number">{step.id}</span>
                    <span class="step-title">{step.title}</span>
                    <span class="step-duration">{step.duration}</span>
                </button>
            }
        })
        .collect::<Html>();

    let detail = PROCESS_STEPS.get(active).map(|step| {
        html! {
            <div class="step-detail card" key={step.id}>
                <h3>{step.title}</h3>
                <p>{step.description}</p>
                <div class="step-columns">
                    <div>
                        <h4>{"What we do"}</h4>
                        <ul>
                            { for step.details.iter().map(|d| html! { <li>{*d}</li> }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Deliverables"}</h4>
                        <ul>
                            { for step.deliverables.iter().map(|d| html! { <li>{*d}</li> }) }
                        </ul>
                    </div>
                </div>
                <span class="step-duration-badge">{"Timeline: "}{step.duration}</span>
            </div>
        }
    });

    let progress = (active + 1) as f64 / PROCESS_STEPS.len().max(1) as f64 * 100.0;

    html! {
        <section id={Section::Process.id()} ref={section_ref} data-reveal="process" class={classes!("process", reveal.class("process"))}>
            <div class="section-inner">
                <div class="section-header">
                    <div class="section-badge">{"Our Process"}</div>
                    <h2>{"How We "}<span class="gradient-text">{"Work"}</span></h2>
                    <p>{"A proven, transparent process that takes your project from idea to launch and beyond."}</p>
                </div>

                <div class="step-progress">
                    <div class="step-progress-bar" style={format!("width: {:.0}%;", progress)}></div>
                </div>
                <div class="step-tabs">{ steps }</div>
                { detail.unwrap_or_default() }
                {
                    if rotation.is_autoplaying() {
                        html! { <p class="autoplay-hint">{"Click any step to explore it at your own pace."}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <style>
                {r#"
                    .process {
                        background: var(--bg-alt);
                    }
                    .step-progress {
                        height: 4px;
                        background: var(--border);
                        border-radius: 9999px;
                        margin-bottom: 2rem;
                    }
                    .step-progress-bar {
                        height: 100%;
                        background: linear-gradient(90deg, #FF6B2B, #FF8A4A);
                        border-radius: 9999px;
                        transition: width 0.5s ease-in-out;
                    }
                    .step-tabs {
                        display: grid;
                        grid-template-columns: repeat(5, 1fr);
                        gap: 1rem;
                        margin-bottom: 2rem;
                    }
                    .step-tab {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 1rem;
                        border: 1px solid var(--border);
                        border-radius: 1rem;
                        background: var(--card);
                        color: var(--text);
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .step-tab.active {
                        border-color: var(--accent);
                        box-shadow: 0 10px 25px rgba(255, 107, 43, 0.2);
                    }
                    .step-tab.done .step-number {
                        background: var(--accent);
                        color: #fff;
                    }
                    .step-number {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: var(--bg-alt);
                        font-weight: 700;
                    }
                    .step-duration {
                        font-size: 0.75rem;
                        color: var(--muted);
                    }
                    .step-detail {
                        padding: 2rem;
                        animation: revealUp 0.4s ease-out;
                    }
                    .step-detail p, .step-detail li {
                        color: var(--muted);
                        line-height: 1.6;
                    }
                    .step-columns {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                    }
                    .step-duration-badge {
                        display: inline-block;
                        margin-top: 1rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: rgba(255, 107, 43, 0.15);
                        color: var(--accent);
                        font-size: 0.875rem;
                    }
                    .autoplay-hint {
                        text-align: center;
                        color: var(--muted);
                        font-size: 0.875rem;
                    }
                    @media (max-width: 768px) {
                        .step-tabs {
                            grid-template-columns: 1fr;
                        }
                        .step-columns {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
