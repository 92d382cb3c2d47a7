use gloo_events::{EventListener, EventListenerOptions};
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions};

use super::{dom, Widget};
use crate::widgets::anchor::{fragment_id, ANCHOR_SELECTOR};

pub struct AnchorScroll {
    _listeners: Vec<EventListener>,
}

impl Widget for AnchorScroll {
    fn name(&self) -> &'static str {
        "anchors"
    }
}

fn scroll_target(document: &Document, anchor: &Element) -> Option<Element> {
    let href = anchor.get_attribute("href")?;
    document.get_element_by_id(fragment_id(&href)?)
}

pub fn mount(document: &Document) -> Option<AnchorScroll> {
    let anchors = dom::query_all(document, ANCHOR_SELECTOR);
    if anchors.is_empty() {
        return None;
    }

    let listeners = anchors
        .into_iter()
        .map(|anchor| {
            let document = document.clone();
            let target = anchor.clone();
            EventListener::new_with_options(
                &target,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event: &Event| {
                    let Some(destination) = scroll_target(&document, &anchor) else {
                        return;
                    };
                    event.prevent_default();

                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    destination.scroll_into_view_with_scroll_into_view_options(&options);
                },
            )
        })
        .collect();

    Some(AnchorScroll {
        _listeners: listeners,
    })
}
