use gloo_events::EventListener;
use gloo_timers::callback::Interval;
use std::{cell::RefCell, rc::Rc};
use web_sys::{Document, Element};

use super::{dom, Widget};
use crate::widgets::carousel::{Carousel, ACTIVE_DOT_CLASS};

pub struct TestimonialCarousel {
    inner: Rc<CarouselInner>,
    _listeners: Vec<EventListener>,
}

impl Widget for TestimonialCarousel {
    fn name(&self) -> &'static str {
        "carousel"
    }
}

impl Drop for TestimonialCarousel {
    fn drop(&mut self) {
        self.inner.stop();
    }
}

struct CarouselInner {
    state: RefCell<Carousel>,
    track: Element,
    dots: Vec<Element>,
    timer: RefCell<Option<Interval>>,
    interval_ms: u32,
}

impl CarouselInner {
    fn render(&self) {
        let state = self.state.borrow();
        dom::set_style(&self.track, "transform", &state.track_transform());
        for (index, dot) in self.dots.iter().enumerate() {
            dom::set_class(dot, ACTIVE_DOT_CLASS, state.is_active_dot(index));
        }
    }

    // Replaces any running timer; no partial periods.
    fn start(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let interval = Interval::new(self.interval_ms, move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let advanced = inner.state.borrow_mut().tick();
            if advanced.is_some() {
                inner.render();
            }
        });
        *self.timer.borrow_mut() = Some(interval);
    }

    fn stop(&self) {
        self.timer.borrow_mut().take();
    }

    fn pause(&self) {
        self.state.borrow_mut().pause();
        self.stop();
    }

    fn resume(self: &Rc<Self>) {
        self.state.borrow_mut().resume();
        self.start();
    }

    fn jump_to(&self, index: usize) {
        let moved = self.state.borrow_mut().jump_to(index);
        if moved.is_some() {
            self.render();
        }
    }
}

fn create_dots(document: &Document, container: &Element, count: usize) -> Vec<Element> {
    container.set_inner_html("");

    (0..count)
        .filter_map(|index| {
            let dot = document.create_element("button").ok()?;
            let _ = dot.set_attribute("type", "button");
            let _ = dot.set_attribute("data-index", &index.to_string());
            dot.set_class_name("testimonial-dot");
            container.append_child(&dot).ok()?;
            Some(dot)
        })
        .collect()
}

pub fn mount(document: &Document, interval_ms: u32) -> Option<TestimonialCarousel> {
    let wrapper = dom::query(document, ".testimonial-carousel-wrapper")?;
    let track = dom::query_in(&wrapper, ".testimonial-carousel")?;
    let slides = dom::query_all_in(&wrapper, ".testimonial-item");
    let state = Carousel::new(slides.len())?;

    let dots = dom::query_in(&wrapper, ".testimonial-dots")
        .map(|container| create_dots(document, &container, state.len()))
        .unwrap_or_default();

    let inner = Rc::new(CarouselInner {
        state: RefCell::new(state),
        track,
        dots,
        timer: RefCell::new(None),
        interval_ms,
    });

    let mut listeners: Vec<EventListener> = inner
        .dots
        .iter()
        .enumerate()
        .map(|(index, dot)| {
            let inner = Rc::clone(&inner);
            EventListener::new(dot, "click", move |_| inner.jump_to(index))
        })
        .collect();

    let entering = Rc::clone(&inner);
    listeners.push(EventListener::new(&wrapper, "mouseenter", move |_| {
        entering.pause();
    }));
    let leaving = Rc::clone(&inner);
    listeners.push(EventListener::new(&wrapper, "mouseleave", move |_| {
        leaving.resume();
    }));

    inner.render();
    inner.start();

    Some(TestimonialCarousel {
        inner,
        _listeners: listeners,
    })
}
