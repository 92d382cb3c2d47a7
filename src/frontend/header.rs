use gloo_events::EventListener;
use web_sys::{Document, Element, Window};

use super::{dom, Widget};
use crate::widgets::header::{is_scrolled, SCROLLED_CLASS};

pub struct HeaderStyle {
    _listener: EventListener,
}

impl Widget for HeaderStyle {
    fn name(&self) -> &'static str {
        "header"
    }
}

fn sync(window: &Window, header: &Element, threshold_px: f64) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    dom::set_class(header, SCROLLED_CLASS, is_scrolled(scroll_y, threshold_px));
}

pub fn mount(window: &Window, document: &Document, threshold_px: f64) -> Option<HeaderStyle> {
    let header = dom::query(document, ".main-nav").or_else(|| dom::query(document, "header"))?;
    sync(window, &header, threshold_px);

    let scroll_window = window.clone();
    let listener = EventListener::new(window, "scroll", move |_| {
        sync(&scroll_window, &header, threshold_px);
    });

    Some(HeaderStyle { _listener: listener })
}
