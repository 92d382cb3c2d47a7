use js_sys::Array;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use super::{dom, Widget};
use crate::widgets::reveal::{Reveal, RevealAction, REVEAL_SELECTOR, VISIBLE_CLASS};

pub struct RevealAnimator {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Widget for RevealAnimator {
    fn name(&self) -> &'static str {
        "reveal"
    }
}

impl Drop for RevealAnimator {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn mount(document: &Document, threshold: f64) -> Option<RevealAnimator> {
    let elements = dom::query_all(document, REVEAL_SELECTOR);
    if elements.is_empty() {
        return None;
    }

    let tracked: Rc<RefCell<Vec<(Element, Reveal)>>> = Rc::new(RefCell::new(
        elements
            .iter()
            .map(|element| (element.clone(), Reveal::new()))
            .collect(),
    ));

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let mut tracked = tracked.borrow_mut();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some((_, reveal)) = tracked.iter_mut().find(|(element, _)| *element == target)
                else {
                    continue;
                };

                if reveal.observe(entry.is_intersecting()) == RevealAction::Reveal {
                    dom::set_class(&target, VISIBLE_CLASS, true);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    for element in &elements {
        observer.observe(element);
    }

    Some(RevealAnimator {
        observer,
        _callback: callback,
    })
}
