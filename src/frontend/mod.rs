mod anchors;
mod carousel;
mod contact;
mod dom;
mod drawer;
mod filter;
mod header;
mod reveal;
mod stats;

use serde_json::json;
use std::cell::RefCell;
use web_sys::{window, Document};

use crate::config::WidgetConfig;
use crate::log::Logger;

pub trait Widget {
    fn name(&self) -> &'static str;
}

thread_local! {
    static MOUNTED: RefCell<Vec<Box<dyn Widget>>> = const { RefCell::new(Vec::new()) };
}

fn read_config(document: &Document) -> WidgetConfig {
    let body = document.body();
    WidgetConfig::from_lookup(|name| body.as_ref().and_then(|body| body.get_attribute(name)))
}

fn push<W: Widget + 'static>(
    mounted: &mut Vec<Box<dyn Widget>>,
    logger: &Logger,
    name: &'static str,
    widget: Option<W>,
) {
    match widget {
        Some(widget) => mounted.push(Box::new(widget)),
        None => logger.debug("widget_skipped", json!({ "widget": name })),
    }
}

pub fn run() {
    let Some(win) = window() else {
        return;
    };
    let Some(document) = win.document() else {
        return;
    };

    let config = read_config(&document);
    let logger = Logger::new(config.log_level);
    let mut mounted: Vec<Box<dyn Widget>> = Vec::new();

    push(&mut mounted, &logger, "anchors", anchors::mount(&document));
    push(&mut mounted, &logger, "drawer", drawer::mount(&document));
    push(
        &mut mounted,
        &logger,
        "header",
        header::mount(&win, &document, config.header_scroll_threshold_px),
    );
    push(
        &mut mounted,
        &logger,
        "contact",
        contact::mount(&document, &config.contact_endpoint, logger),
    );
    push(
        &mut mounted,
        &logger,
        "filter",
        filter::mount(&document, config.filter_fade_ms, config.filter_settle_ms),
    );
    push(
        &mut mounted,
        &logger,
        "reveal",
        reveal::mount(&document, config.reveal_threshold),
    );
    push(
        &mut mounted,
        &logger,
        "stats",
        stats::mount(&document, config.stats_threshold, config.counter_steps, logger),
    );
    push(
        &mut mounted,
        &logger,
        "carousel",
        carousel::mount(&document, config.carousel_interval_ms),
    );

    let names: Vec<&'static str> = mounted.iter().map(|widget| widget.name()).collect();
    logger.info("widgets_mounted", json!({ "widgets": names }));

    MOUNTED.with(|slot| slot.borrow_mut().extend(mounted));
}
