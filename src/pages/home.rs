use yew::prelude::*;

use crate::pages::{
    about::About, contact::Contact, faq::Faq, hero::Hero, portfolio::Portfolio, process::Process,
    services::Services, testimonials::Testimonials,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main id="main-content">
            <Hero />
            <Portfolio />
            <Services />
            <Process />
            <About />
            <Contact />
            <Testimonials />
            <Faq />
        </main>
    }
}
