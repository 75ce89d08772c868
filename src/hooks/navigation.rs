use log::debug;
use web_sys::{window, HashChangeEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_hooks::prelude::{use_event_with_window, use_window_scroll};
use yew_router::prelude::use_location;

use crate::state::navigation::NavState;

/// Smooth-scrolls to the element with `id`. Returns false if there is none.
pub fn scroll_to_anchor(id: &str) -> bool {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        debug!("No element with id #{}, skipping scroll", id);
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

fn set_body_overflow(value: &str) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", value);
    }
}

#[derive(Clone)]
pub struct NavigationHandle {
    menu_open: UseStateHandle<bool>,
    scroll_offset: f64,
    threshold: f64,
}

impl NavigationHandle {
    fn snapshot(&self) -> NavState {
        NavState {
            scroll_offset: self.scroll_offset,
            menu_open: *self.menu_open,
        }
    }

    fn commit(&self, nav: NavState) {
        self.menu_open.set(nav.menu_open);
    }

    pub fn is_compact(&self) -> bool {
        self.snapshot().is_compact(self.threshold)
    }

    pub fn is_menu_open(&self) -> bool {
        *self.menu_open
    }

    #[allow(dead_code)]
    pub fn open(&self) {
        let mut nav = self.snapshot();
        nav.open();
        self.commit(nav);
    }

    pub fn close(&self) {
        let mut nav = self.snapshot();
        nav.close();
        self.commit(nav);
    }

    pub fn toggle(&self) {
        let mut nav = self.snapshot();
        nav.toggle();
        self.commit(nav);
    }

    pub fn navigate_to(&self, anchor: &str) {
        let mut nav = self.snapshot();
        let id = nav.navigate_to(anchor);
        self.commit(nav);
        scroll_to_anchor(&id);
    }
}

#[hook]
pub fn use_navigation(threshold: f64) -> NavigationHandle {
    let (_, scroll_y) = use_window_scroll();
    let menu_open = use_state(|| false);
    let location = use_location();

    // Lock page scroll while the mobile menu covers it.
    use_effect_with_deps(
        move |open: &bool| {
            set_body_overflow(if *open { "hidden" } else { "unset" });
            || set_body_overflow("unset")
        },
        *menu_open,
    );

    {
        let menu_open = menu_open.clone();
        use_event_with_window("hashchange", move |_: HashChangeEvent| {
            menu_open.set(false);
        });
    }

    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            location.map(|l| l.path().to_string()),
        );
    }

    NavigationHandle {
        menu_open,
        scroll_offset: scroll_y,
        threshold,
    }
}
