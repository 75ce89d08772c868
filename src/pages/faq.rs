use log::debug;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::config::SCHEDULING_URL;
use crate::data::FAQS;
use crate::hooks::navigation::scroll_to_anchor;
use crate::hooks::reveal::use_reveal;
use crate::models::FaqEntry;
use crate::state::accordion::Accordion;
use crate::state::filter::FilterableList;
use crate::state::navigation::Section;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: &'static FaqEntry,
    open: bool,
    on_toggle: Callback<u32>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = props.entry.id;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id);
        })
    };

    html! {
        <div class={classes!("faq-item", "card", props.open.then_some("open"))}>
            <button class="faq-question" aria-expanded={props.open.to_string()} onclick={toggle}>
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <span class="faq-category">{props.entry.category}</span>
                <p>{props.entry.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let section_ref = use_node_ref();
    let search_term = use_state(String::new);
    let accordion = use_state(Accordion::<u32>::default);
    let reveal = use_reveal(section_ref.clone(), ());

    let mut list = FilterableList::new(FAQS, FaqEntry::search_fields);
    list.set_search_term((*search_term).clone());
    let view = list.results();

    // An open item that the search hides is closed.
    {
        let accordion = accordion.clone();
        let visible: Vec<u32> = view.items().iter().map(|entry| entry.id).collect();
        use_effect_with_deps(
            move |visible| {
                if let Some(open) = accordion.open_id() {
                    if !visible.contains(&open) {
                        let mut next = *accordion;
                        next.close();
                        accordion.set(next);
                    }
                }
                || ()
            },
            visible,
        );
    }

    let oninput = {
        let search_term = search_term.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            debug!("FAQ search: {:?}", input.value());
            search_term.set(input.value());
        })
    };

    let clear_search = {
        let search_term = search_term.clone();
        Callback::from(move |_: MouseEvent| search_term.set(String::new()))
    };

    let on_toggle = {
        let accordion = accordion.clone();
        Callback::from(move |id: u32| {
            let mut next = *accordion;
            next.toggle(id);
            accordion.set(next);
        })
    };

    let to_contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor(Section::Contact.id());
    });

    let items = if view.no_matches() {
        html! {
            <div class="faq-empty">
                <p>{"No FAQs found matching your search."}</p>
                <button class="link-button" onclick={clear_search}>{"Clear search"}</button>
            </div>
        }
    } else {
        view.items()
            .iter()
            .map(|entry| {
                html! {
                    <FaqItem
                        key={entry.id}
                        entry={*entry}
                        open={accordion.is_open(entry.id)}
                        on_toggle={on_toggle.clone()}
                    />
                }
            })
            .collect::<Html>()
    };

    html! {
        <section id="faq" ref={section_ref} data-reveal="faq" class={classes!("faq", reveal.class("faq"))}>
            <div class="section-inner faq-inner">
                <div class="section-header">
                    <div class="section-badge">{"FAQ"}</div>
                    <h2>{"Frequently Asked "}<span class="gradient-text">{"Questions"}</span></h2>
                    <p>{"Everything you need to know about working with us."}</p>
                </div>

                <input
                    class="faq-search"
                    type="search"
                    placeholder="Search questions..."
                    aria-label="Search FAQs"
                    value={(*search_term).clone()}
                    {oninput}
                />

                <div class="faq-list">{ items }</div>

                <div class="faq-cta card">
                    <h3>{"Still have questions?"}</h3>
                    <p>{"Can't find the answer you're looking for? Our team is happy to help."}</p>
                    <div class="faq-cta-buttons">
                        <a class="cta-button" href={SCHEDULING_URL} target="_blank" rel="noopener noreferrer">{"Schedule a Call"}</a>
                        <a class="link-button" href={Section::Contact.href()} onclick={to_contact}>{"Contact Us"}</a>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .faq-inner {
                        max-width: 48rem;
                    }
                    .faq-search {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.875rem 1.25rem;
                        margin-bottom: 2rem;
                        border: 1px solid var(--border);
                        border-radius: 9999px;
                        background: var(--card);
                        color: var(--text);
                        font-size: 1rem;
                    }
                    .faq-search:focus {
                        outline: none;
                        border-color: var(--accent);
                    }
                    .faq-item {
                        margin-bottom: 1rem;
                        overflow: hidden;
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.25rem 1.5rem;
                        background: none;
                        border: none;
                        color: var(--text);
                        font-size: 1.05rem;
                        font-weight: 600;
                        text-align: left;
                        cursor: pointer;
                    }
                    .toggle-icon {
                        color: var(--accent);
                        font-size: 1.5rem;
                    }
                    .faq-answer {
                        max-height: 0;
                        padding: 0 1.5rem;
                        transition: max-height 0.3s ease-out, padding 0.3s ease-out;
                    }
                    .faq-item.open .faq-answer {
                        max-height: 30rem;
                        padding: 0 1.5rem 1.25rem;
                    }
                    .faq-answer p {
                        color: var(--muted);
                        line-height: 1.6;
                    }
                    .faq-category {
                        font-size: 0.75rem;
                        color: var(--accent);
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                    }
                    .faq-empty {
                        text-align: center;
                        color: var(--muted);
                        padding: 2rem 0;
                    }
                    .faq-cta {
                        margin-top: 3rem;
                        padding: 2rem;
                        text-align: center;
                    }
                    .faq-cta-buttons {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }
                "#}
            </style>
        </section>
    }
}
