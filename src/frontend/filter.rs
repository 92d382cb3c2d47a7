use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use std::{cell::RefCell, rc::Rc};
use web_sys::{Document, Element};

use super::{dom, Widget};
use crate::widgets::filter::{plan_item, FilterBar, ACTIVE_CLASS, HIDDEN_CLASS};

pub struct ProjectFilter {
    _listeners: Vec<EventListener>,
}

impl Widget for ProjectFilter {
    fn name(&self) -> &'static str {
        "filter"
    }
}

struct GalleryItem {
    item: Element,
    // The item's wrapper, or the item when it sits directly in the gallery.
    container: Element,
    category: String,
}

struct Gallery {
    buttons: Vec<Element>,
    items: Vec<GalleryItem>,
    bar: RefCell<FilterBar>,
    fade_ms: u32,
    settle_ms: u32,
}

impl Gallery {
    fn mark_active(&self) {
        let bar = self.bar.borrow();
        for (position, button) in self.buttons.iter().enumerate() {
            dom::set_class(button, ACTIVE_CLASS, bar.is_active(position));
        }
    }

    fn select(&self, index: usize) {
        let Some(filter) = self.bar.borrow_mut().select(index).map(str::to_string) else {
            return;
        };

        self.mark_active();

        for entry in &self.items {
            dom::set_class(&entry.item, HIDDEN_CLASS, true);

            let plan = plan_item(&filter, &entry.category);
            let item = entry.item.clone();
            let container = entry.container.clone();
            let settle_ms = self.settle_ms;

            Timeout::new(self.fade_ms, move || {
                dom::set_style(&container, "display", plan.display.as_str());

                Timeout::new(settle_ms, move || {
                    if plan.fade_in {
                        dom::set_class(&item, HIDDEN_CLASS, false);
                    }
                })
                .forget();
            })
            .forget();
        }
    }
}

fn gallery_item(gallery: &Element, item: Element) -> GalleryItem {
    let container = item
        .parent_element()
        .filter(|parent| parent != gallery)
        .unwrap_or_else(|| item.clone());
    let category = item.get_attribute("data-category").unwrap_or_default();

    GalleryItem {
        item,
        container,
        category,
    }
}

pub fn mount(document: &Document, fade_ms: u32, settle_ms: u32) -> Option<ProjectFilter> {
    let filters = dom::query(document, "#project-filters")?;
    let projects = dom::query(document, "#projects-container")?;

    let buttons = dom::query_all_in(&filters, ".filter-btn");
    if buttons.is_empty() {
        return None;
    }

    let values: Vec<String> = buttons
        .iter()
        .map(|button| button.get_attribute("data-filter").unwrap_or_default())
        .collect();
    let initially_active = buttons
        .iter()
        .position(|button| button.class_list().contains(ACTIVE_CLASS));

    let items = dom::query_all_in(&projects, ".filterable-item")
        .into_iter()
        .map(|item| gallery_item(&projects, item))
        .collect();

    let gallery = Rc::new(Gallery {
        buttons: buttons.clone(),
        items,
        bar: RefCell::new(FilterBar::new(values, initially_active)),
        fade_ms,
        settle_ms,
    });
    gallery.mark_active();

    let listeners = buttons
        .iter()
        .enumerate()
        .map(|(index, button)| {
            let gallery = Rc::clone(&gallery);
            EventListener::new(button, "click", move |_| gallery.select(index))
        })
        .collect();

    Some(ProjectFilter {
        _listeners: listeners,
    })
}
