use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::state::rotation::{Rotation, RotationAction};

#[derive(Clone)]
pub struct RotationHandle {
    state: UseReducerHandle<Rotation>,
    interval: Rc<RefCell<Option<Interval>>>,
}

impl RotationHandle {
    pub fn index(&self) -> usize {
        self.state.index()
    }

    pub fn is_autoplaying(&self) -> bool {
        self.state.is_autoplaying()
    }

    /// Drops the running interval. Called before any manual dispatch so a
    /// pending tick can't land after the user's choice.
    fn stop(&self) {
        if let Some(interval) = self.interval.borrow_mut().take() {
            drop(interval);
            debug!("Rotation autoplay stopped by manual selection");
        }
    }

    pub fn select(&self, index: usize) {
        self.stop();
        self.state.dispatch(RotationAction::Select(index));
    }

    pub fn next(&self) {
        self.stop();
        self.state.dispatch(RotationAction::Next);
    }

    pub fn previous(&self) {
        self.stop();
        self.state.dispatch(RotationAction::Previous);
    }
}

#[hook]
pub fn use_rotation(len: usize, interval_ms: u32, autoplay: bool) -> RotationHandle {
    let state = use_reducer(|| Rotation::new(len, autoplay));
    let interval = use_mut_ref(|| None::<Interval>);

    {
        let dispatcher = state.dispatcher();
        let interval = interval.clone();
        use_effect_with_deps(
            move |autoplaying: &bool| {
                if *autoplaying {
                    let timer = Interval::new(interval_ms, move || {
                        dispatcher.dispatch(RotationAction::Tick);
                    });
                    *interval.borrow_mut() = Some(timer);
                }
                move || {
                    interval.borrow_mut().take();
                }
            },
            state.is_autoplaying(),
        );
    }

    RotationHandle { state, interval }
}
