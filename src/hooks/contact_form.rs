use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::config::CONTACT_RESET_DELAY_MS;
use crate::state::contact_form::{ContactForm, Field, FormAction, FormError};

#[derive(Clone)]
pub struct ContactFormHandle {
    form: UseReducerHandle<ContactForm>,
    reset: Rc<RefCell<Option<Timeout>>>,
}

impl ContactFormHandle {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn set_field(&self, field: Field, value: String) {
        self.form.dispatch(FormAction::SetField(field, value));
    }

    /// Simulated submission: validates, shows the acknowledgement, and
    /// clears the form once the delay has passed. Nothing is sent.
    pub fn submit(&self) -> Result<(), FormError> {
        let mut probe = (*self.form).clone();
        probe.submit()?;
        info!("Contact form accepted: {}", probe.payload());
        self.form.dispatch(FormAction::Submit);

        let dispatcher = self.form.dispatcher();
        let timeout = Timeout::new(CONTACT_RESET_DELAY_MS, move || {
            dispatcher.dispatch(FormAction::Finish);
        });
        *self.reset.borrow_mut() = Some(timeout);
        Ok(())
    }
}

#[hook]
pub fn use_contact_form() -> ContactFormHandle {
    let form = use_reducer(ContactForm::default);
    let reset = use_mut_ref(|| None::<Timeout>);

    {
        let reset = reset.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    reset.borrow_mut().take();
                }
            },
            (),
        );
    }

    ContactFormHandle { form, reset }
}
