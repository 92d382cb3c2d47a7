use gloo_render::{request_animation_frame, AnimationFrame};
use js_sys::Array;
use serde_json::json;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use super::{dom, Widget};
use crate::log::Logger;
use crate::widgets::counter::{parse_target, CounterAnimation};

pub struct StatsCounter {
    observer: IntersectionObserver,
    runs: Rc<RefCell<Vec<Rc<CounterRun>>>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Widget for StatsCounter {
    fn name(&self) -> &'static str {
        "stats"
    }
}

impl Drop for StatsCounter {
    fn drop(&mut self) {
        self.observer.disconnect();
        for run in self.runs.borrow().iter() {
            run.frame.borrow_mut().take();
        }
    }
}

struct CounterRun {
    element: Element,
    animation: RefCell<CounterAnimation>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl CounterRun {
    fn start(self: &Rc<Self>) {
        dom::set_text(&self.element, "0");
        self.schedule();
    }

    fn schedule(self: &Rc<Self>) {
        let run = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            run.frame.borrow_mut().take();
            let frame = run.animation.borrow_mut().step();
            dom::set_text(&run.element, &frame.display.to_string());
            if !frame.done {
                run.schedule();
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }
}

fn counter_runs(section: &Element, steps: u32, logger: &Logger) -> Vec<Rc<CounterRun>> {
    dom::query_all_in(section, ".stat-number")
        .into_iter()
        .filter_map(|element| {
            let raw = element.get_attribute("data-target").unwrap_or_default();
            let Some(target) = parse_target(&raw) else {
                logger.debug("stats_counter_invalid_target", json!({ "target": raw }));
                return None;
            };
            Some(Rc::new(CounterRun {
                element,
                animation: RefCell::new(CounterAnimation::new(target, steps)),
                frame: RefCell::new(None),
            }))
        })
        .collect()
}

pub fn mount(document: &Document, threshold: f64, steps: u32, logger: Logger) -> Option<StatsCounter> {
    let section = dom::query(document, ".stats-section")?;
    let pending = counter_runs(&section, steps, &logger);
    if pending.is_empty() {
        return None;
    }

    let runs: Rc<RefCell<Vec<Rc<CounterRun>>>> = Rc::new(RefCell::new(Vec::new()));
    let started = Rc::clone(&runs);
    let mut pending = Some(pending);

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let triggered = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });
            if !triggered {
                return;
            }
            let Some(batch) = pending.take() else {
                return;
            };

            observer.disconnect();
            for run in &batch {
                run.start();
            }
            started.borrow_mut().extend(batch);
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(&section);

    Some(StatsCounter {
        observer,
        runs,
        _callback: callback,
    })
}
