use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::TESTIMONIAL_ROTATION_MS;
use crate::data::TESTIMONIALS;
use crate::hooks::reveal::use_reveal;
use crate::hooks::rotation::use_rotation;

/// Filled stars for a 0-5 rating.
fn star_rating(rating: u8) -> String {
    "★".repeat(rating.min(5) as usize)
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let section_ref = use_node_ref();
    let reveal = use_reveal(section_ref.clone(), ());
    let rotation = use_rotation(TESTIMONIALS.len(), TESTIMONIAL_ROTATION_MS, true);
    let current = rotation.index();

    let previous = {
        let rotation = rotation.clone();
        Callback::from(move |_: MouseEvent| rotation.previous())
    };
    let next = {
        let rotation = rotation.clone();
        Callback::from(move |_: MouseEvent| rotation.next())
    };

    let slides = TESTIMONIALS
        .iter()
        .map(|t| {
            let stars = star_rating(t.rating);
            html! {
                <div key={t.id} class="testimonial-slide">
                    <div class="testimonial-card card">
                        <div class="stars" aria-label={format!("{} out of 5 stars", t.rating)}>{ stars }</div>
                        <blockquote>{format!("\u{201c}{}\u{201d}", t.content)}</blockquote>
                        <div class="testimonial-author">
                            <img src={t.avatar} alt={t.name} loading="lazy" />
                            <div>
                                <div class="author-name">{t.name}</div>
                                <div class="author-role">{format!("{}, {}", t.position, t.company)}</div>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    let dots = (0..TESTIMONIALS.len())
        .map(|index| {
            let onclick = {
                let rotation = rotation.clone();
                Callback::from(move |_: MouseEvent| rotation.select(index))
            };
            html! {
                <button
                    key={index}
                    class={classes!("dot", (index == current).then_some("active"))}
                    aria-label={format!("Go to testimonial {}", index + 1)}
                    {onclick}
                />
            }
        })
        .collect::<Html>();

    html! {
        <section ref={section_ref} data-reveal="testimonials" class={classes!("testimonials", reveal.class("testimonials"))}>
            <div class="section-inner">
                <div class="section-header">
                    <div class="section-badge">{"Client Testimonials"}</div>
                    <h2>{"What Our "}<span class="gradient-text">{"Clients Say"}</span></h2>
                    <p>{"Don't just take our word for it. Here's what our clients say about their experience working with Pacific Softwares."}</p>
                </div>

                <div class="slider">
                    <div class="slider-window">
                        <div class="slider-track" style={format!("transform: translateX(-{}%);", current * 100)}>
                            { slides }
                        </div>
                    </div>
                    <button class="slider-arrow prev" aria-label="Previous testimonial" onclick={previous}>{"‹"}</button>
                    <button class="slider-arrow next" aria-label="Next testimonial" onclick={next}>{"›"}</button>
                </div>
                <div class="slider-dots">{ dots }</div>
            </div>
            <style>
                {r#"
                    .testimonials {
                        background: var(--bg);
                    }
                    .slider {
                        position: relative;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .slider-window {
                        overflow: hidden;
                        border-radius: 1rem;
                    }
                    .slider-track {
                        display: flex;
                        transition: transform 0.5s ease-in-out;
                    }
                    .testimonial-slide {
                        flex: 0 0 100%;
                        padding: 0 1rem;
                        box-sizing: border-box;
                    }
                    .testimonial-card {
                        padding: 2.5rem;
                        text-align: center;
                    }
                    .stars {
                        color: #facc15;
                        font-size: 1.25rem;
                        margin-bottom: 1.5rem;
                    }
                    .testimonial-card blockquote {
                        margin: 0 0 2rem 0;
                        font-size: 1.2rem;
                        line-height: 1.7;
                        color: var(--muted);
                    }
                    .testimonial-author {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        text-align: left;
                    }
                    .testimonial-author img {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 9999px;
                        object-fit: cover;
                    }
                    .author-name {
                        font-weight: 600;
                    }
                    .author-role {
                        color: var(--muted);
                        font-size: 0.875rem;
                    }
                    .slider-arrow {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        border: 1px solid var(--border);
                        background: var(--card);
                        color: var(--text);
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .slider-arrow.prev { left: -1.5rem; }
                    .slider-arrow.next { right: -1.5rem; }
                    .slider-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.75rem;
                        margin-top: 2rem;
                    }
                    .dot {
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 9999px;
                        border: none;
                        background: var(--border);
                        cursor: pointer;
                    }
                    .dot.active {
                        width: 2rem;
                        background: var(--accent);
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_match_rating() {
        assert_eq!(star_rating(5), "★★★★★");
        assert_eq!(star_rating(3).chars().count(), 3);
        assert_eq!(star_rating(0), "");
    }

    #[test]
    fn stars_are_capped_at_five() {
        assert_eq!(star_rating(9).chars().count(), 5);
    }

    #[test]
    fn every_testimonial_renders_its_rating() {
        for testimonial in TESTIMONIALS {
            assert_eq!(
                star_rating(testimonial.rating).chars().count(),
                testimonial.rating as usize
            );
        }
    }
}
