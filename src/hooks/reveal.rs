use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::DEFAULT_REVEAL;
use crate::state::reveal::{Reveal, RevealOptions, RevealSet};

const REVEAL_ATTR: &str = "data-reveal";
pub const REVEALED_CLASS: &str = "animate-in";

#[derive(Clone)]
pub struct RevealHandle {
    revealed: UseReducerHandle<RevealSet>,
}

impl RevealHandle {
    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.is_revealed(key)
    }

    /// Class to add to the element tagged `data-reveal={key}`.
    pub fn class(&self, key: &str) -> Option<&'static str> {
        self.is_revealed(key).then_some(REVEALED_CLASS)
    }
}

/// The container (if tagged) plus every tagged descendant.
fn reveal_targets(container: &Element) -> Vec<Element> {
    let mut targets = Vec::new();
    if container.has_attribute(REVEAL_ATTR) {
        targets.push(container.clone());
    }
    if let Ok(nodes) = container.query_selector_all(&format!("[{}]", REVEAL_ATTR)) {
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                targets.push(element);
            }
        }
    }
    targets
}

fn build_observer(
    options: RevealOptions,
    callback: &Closure<dyn FnMut(Array, IntersectionObserver)>,
) -> Option<IntersectionObserver> {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);
    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()
}

#[hook]
pub fn use_reveal<D>(container: NodeRef, deps: D) -> RevealHandle
where
    D: PartialEq + 'static,
{
    use_reveal_with(container, DEFAULT_REVEAL, deps)
}

/// Watches every `data-reveal` element under `container` and marks it
/// revealed the first time it intersects the viewport. Whenever `deps`
/// changes the observer is rebuilt for the elements currently rendered.
#[hook]
pub fn use_reveal_with<D>(container: NodeRef, options: RevealOptions, deps: D) -> RevealHandle
where
    D: PartialEq + 'static,
{
    let revealed = use_reducer(RevealSet::default);

    {
        let dispatcher = revealed.dispatcher();
        use_effect_with_deps(
            move |_| {
                let on_intersect = {
                    let dispatcher = dispatcher.clone();
                    Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if !entry.is_intersecting() {
                                    continue;
                                }
                                let target = entry.target();
                                if let Some(key) = target.get_attribute(REVEAL_ATTR) {
                                    dispatcher.dispatch(Reveal(key));
                                }
                                observer.unobserve(&target);
                            }
                        },
                    )
                };

                let observer = build_observer(options, &on_intersect);
                let targets = container
                    .cast::<Element>()
                    .map(|element| reveal_targets(&element))
                    .unwrap_or_default();

                match &observer {
                    Some(observer) => {
                        for target in &targets {
                            observer.observe(target);
                        }
                    }
                    None => {
                        warn!("IntersectionObserver unavailable, revealing {} elements", targets.len());
                        for target in &targets {
                            if let Some(key) = target.get_attribute(REVEAL_ATTR) {
                                dispatcher.dispatch(Reveal(key));
                            }
                        }
                    }
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(on_intersect);
                }
            },
            deps,
        );
    }

    RevealHandle { revealed }
}
