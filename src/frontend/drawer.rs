use gloo_events::EventListener;
use web_sys::{Document, Element};

use super::{dom, Widget};

const OPEN_CLASS: &str = "mobile-menu-is-open";

pub struct MobileDrawer {
    _listeners: Vec<EventListener>,
}

impl Widget for MobileDrawer {
    fn name(&self) -> &'static str {
        "drawer"
    }
}

fn set_open(body: &Element, open: bool) -> impl Fn(&web_sys::Event) {
    let body = body.clone();
    move |_| dom::set_class(&body, OPEN_CLASS, open)
}

pub fn mount(document: &Document) -> Option<MobileDrawer> {
    let body: Element = document.body()?.into();
    let toggle = dom::query(document, ".mobile-menu-toggle")?;
    dom::query(document, ".mobile-nav-drawer")?;

    let mut listeners = vec![EventListener::new(&toggle, "click", set_open(&body, true))];

    for selector in [".mobile-menu-close", ".nav-overlay"] {
        if let Some(closer) = dom::query(document, selector) {
            listeners.push(EventListener::new(&closer, "click", set_open(&body, false)));
        }
    }

    Some(MobileDrawer {
        _listeners: listeners,
    })
}
