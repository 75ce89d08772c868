use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::SCHEDULING_URL;
use crate::data::{BUDGET_RANGES, CONTACT_INFO};
use crate::hooks::contact_form::use_contact_form;
use crate::hooks::reveal::use_reveal;
use crate::state::contact_form::{Field, FormStatus};
use crate::state::navigation::Section;
use crate::state::reveal::stagger_delay;

/// Reads `(name, value)` from whichever form control fired the event.
fn control_value(target: Option<EventTarget>) -> Option<(String, String)> {
    let target = target?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some((area.name(), area.value()));
    }
    target
        .dyn_ref::<HtmlSelectElement>()
        .map(|select| (select.name(), select.value()))
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let section_ref = use_node_ref();
    let reveal = use_reveal(section_ref.clone(), ());
    let contact = use_contact_form();
    let error = use_state(|| None::<String>);

    let onchange = {
        let contact = contact.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            if let Some((name, value)) = control_value(e.target()) {
                if let Some(field) = Field::from_name(&name) {
                    contact.set_field(field, value);
                    error.set(None);
                }
            }
        })
    };
    let oninput = {
        let onchange = onchange.clone();
        Callback::from(move |e: InputEvent| onchange.emit(e.into()))
    };

    let onsubmit = {
        let contact = contact.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match contact.submit() {
                Ok(()) => error.set(None),
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    let form = contact.form();
    let state = form.state();

    let text_input = |field: Field, kind: &'static str, placeholder: &'static str| {
        html! {
            <div class="form-field">
                <label for={field.name()}>
                    {field.label()}
                    { if field.is_required() { html! { <span class="required">{" *"}</span> } } else { html! {} } }
                </label>
                <input
                    id={field.name()}
                    name={field.name()}
                    type={kind}
                    placeholder={placeholder}
                    value={state.get(field).to_string()}
                    required={field.is_required()}
                    oninput={oninput.clone()}
                />
            </div>
        }
    };

    let body = if form.is_submitted() {
        html! {
            <div class="form-success">
                <div class="success-icon">{"✓"}</div>
                <h3>{"Thank you!"}</h3>
                <p>{"Your message has been received. We'll get back to you within 24 hours."}</p>
            </div>
        }
    } else {
        let failure = match form.status() {
            FormStatus::Failed(message) => Some(message.clone()),
            _ => (*error).clone(),
        };
        html! {
            <form class="contact-form" {onsubmit} novalidate=true>
                <div class="form-row">
                    { text_input(Field::Name, "text", "John Doe") }
                    { text_input(Field::Email, "email", "john@example.com") }
                </div>
                <div class="form-row">
                    { text_input(Field::Phone, "tel", "+1 (555) 000-0000") }
                    { text_input(Field::Company, "text", "Your company") }
                </div>
                <div class="form-field">
                    <label for={Field::Budget.name()}>{Field::Budget.label()}</label>
                    <select id={Field::Budget.name()} name={Field::Budget.name()} onchange={onchange.clone()}>
                        <option value="" selected={state.budget.is_empty()}>{"Select a budget range"}</option>
                        {
                            for BUDGET_RANGES.iter().map(|range| html! {
                                <option value={*range} selected={state.budget == *range}>{*range}</option>
                            })
                        }
                    </select>
                </div>
                <div class="form-field">
                    <label for={Field::ProjectDescription.name()}>
                        {Field::ProjectDescription.label()}<span class="required">{" *"}</span>
                    </label>
                    <textarea
                        id={Field::ProjectDescription.name()}
                        name={Field::ProjectDescription.name()}
                        rows="5"
                        placeholder="Tell us about your project..."
                        value={state.project_description.clone()}
                        oninput={oninput.clone()}
                    />
                </div>
                {
                    match failure {
                        Some(message) => html! { <p class="form-error" role="alert">{message}</p> },
                        None => html! {},
                    }
                }
                <button type="submit" class="cta-button submit-button">{"Send Message"}</button>
            </form>
        }
    };

    let info_cards = CONTACT_INFO
        .iter()
        .enumerate()
        .map(|(index, info)| {
            let key = format!("contact-info-{}", index);
            html! {
                <div
                    key={info.title}
                    data-reveal={key.clone()}
                    class={classes!("contact-info-card", "card", reveal.class(&key))}
                    style={stagger_delay(index)}
                >
                    <span class="contact-icon">{info.icon}</span>
                    <div>
                        <h4>{info.title}</h4>
                        <p class="contact-content">{info.content}</p>
                        <p class="contact-description">{info.description}</p>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section id={Section::Contact.id()} ref={section_ref} class="contact">
            <div class="section-inner">
                <div data-reveal="contact-header" class={classes!("section-header", reveal.class("contact-header"))}>
                    <div class="section-badge">{"Get In Touch"}</div>
                    <h2>{"Let's Build Something "}<span class="gradient-text">{"Amazing"}</span></h2>
                    <p>{"Ready to start your project? Tell us about it and we'll get back to you within 24 hours."}</p>
                </div>
                <div class="contact-grid">
                    <div data-reveal="contact-form" class={classes!("contact-form-card", "card", reveal.class("contact-form"))}>
                        { body }
                    </div>
                    <div class="contact-side">
                        { info_cards }
                        <div class="schedule-card card">
                            <h4>{"Prefer to talk?"}</h4>
                            <p>{"Book a free 30-minute consultation with our team."}</p>
                            <a class="cta-button" href={SCHEDULING_URL} target="_blank" rel="noopener noreferrer">{"Schedule a Call"}</a>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .contact {
                        background: var(--bg-alt);
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr;
                        gap: 2rem;
                    }
                    .contact-form-card {
                        padding: 2rem;
                    }
                    .form-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .form-field {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        margin-bottom: 1.25rem;
                    }
                    .form-field label {
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .required {
                        color: var(--accent);
                    }
                    .form-field input, .form-field select, .form-field textarea {
                        padding: 0.75rem 1rem;
                        border: 1px solid var(--border);
                        border-radius: 0.5rem;
                        background: var(--bg);
                        color: var(--text);
                        font: inherit;
                    }
                    .form-field input:focus, .form-field select:focus, .form-field textarea:focus {
                        outline: none;
                        border-color: var(--accent);
                    }
                    .form-error {
                        color: #ef4444;
                        font-size: 0.875rem;
                    }
                    .submit-button {
                        width: 100%;
                        border: none;
                        cursor: pointer;
                    }
                    .form-success {
                        text-align: center;
                        padding: 3rem 1rem;
                    }
                    .success-icon {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1rem;
                        border-radius: 9999px;
                        background: rgba(34, 197, 94, 0.15);
                        color: #22c55e;
                        font-size: 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .contact-side {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .contact-info-card {
                        display: flex;
                        gap: 1rem;
                        padding: 1.25rem;
                    }
                    .contact-icon {
                        font-size: 1.5rem;
                        color: var(--accent);
                    }
                    .contact-info-card h4 {
                        margin: 0 0 0.25rem 0;
                    }
                    .contact-content {
                        margin: 0;
                        font-weight: 500;
                    }
                    .contact-description {
                        margin: 0;
                        color: var(--muted);
                        font-size: 0.875rem;
                    }
                    .schedule-card {
                        padding: 1.5rem;
                    }
                    @media (max-width: 768px) {
                        .contact-grid, .form-row {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
