use gloo_events::{EventListener, EventListenerOptions};
use gloo_net::http::Request;
use serde_json::json;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, FormData, HtmlButtonElement, HtmlFormElement, UrlSearchParams};

use super::{dom, Widget};
use crate::log::Logger;
use crate::widgets::contact::{
    classify, ContactForm, ContactResponse, FormView, SubmitFailure, SubmitLabel,
};

pub struct ContactFormSubmitter {
    _listener: EventListener,
}

impl Widget for ContactFormSubmitter {
    fn name(&self) -> &'static str {
        "contact"
    }
}

struct FormElements {
    form: HtmlFormElement,
    submit: HtmlButtonElement,
    status: Option<Element>,
}

impl FormElements {
    fn render(&self, document: &Document, view: &FormView) {
        self.submit.set_disabled(view.submit_disabled);
        match &view.submit_label {
            SubmitLabel::Text(label) => dom::set_text(&self.submit, label),
            SubmitLabel::Markup(html) => self.submit.set_inner_html(html),
        }

        if view.reset_fields {
            self.form.reset();
        }

        let Some(status) = self.status.as_ref() else {
            return;
        };
        status.set_inner_html("");

        if let Some((kind, message)) = view.status.as_ref() {
            if let Ok(node) = document.create_element("div") {
                node.set_class_name(&format!("form-message {}", kind.class_name()));
                dom::set_text(&node, message);
                let _ = status.append_child(&node);
            }
        }
    }
}

async fn post_contact(endpoint: &str, form_data: &FormData) -> Result<String, SubmitFailure> {
    let body = UrlSearchParams::new_with_str_sequence_sequence(form_data.as_ref())
        .map_err(|_| SubmitFailure::Transport)?;
    let request = Request::post(endpoint)
        .header("Accept", "application/json")
        .body(body)
        .map_err(|_| SubmitFailure::Transport)?;

    let response = request.send().await.map_err(|_| SubmitFailure::Transport)?;
    let payload = response
        .json::<ContactResponse>()
        .await
        .map_err(|_| SubmitFailure::Decode)?;

    classify(&payload)
}

fn log_outcome(logger: &Logger, endpoint: &str, outcome: &Result<String, SubmitFailure>) {
    match outcome {
        Ok(_) => logger.info("contact_submit_succeeded", json!({ "endpoint": endpoint })),
        Err(SubmitFailure::Rejected) => logger.info(
            "contact_submit_failed",
            json!({ "endpoint": endpoint, "reason": SubmitFailure::Rejected.as_str() }),
        ),
        Err(failure) => logger.error(
            "contact_submit_failed",
            json!({ "endpoint": endpoint, "reason": failure.as_str() }),
        ),
    }
}

pub fn mount(document: &Document, endpoint: &str, logger: Logger) -> Option<ContactFormSubmitter> {
    let form = dom::query(document, "#contact-form")?
        .dyn_into::<HtmlFormElement>()
        .ok()?;
    let submit = dom::query_in(&form, "button[type=\"submit\"]")
        .or_else(|| dom::query_in(&form, "button"))?
        .dyn_into::<HtmlButtonElement>()
        .ok()?;
    let status = dom::query(document, "#form-status");

    let elements = Rc::new(FormElements {
        form: form.clone(),
        submit,
        status,
    });
    let state = Rc::new(RefCell::new(ContactForm::new()));
    let document = document.clone();
    let endpoint = endpoint.to_string();

    let listener = EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            event.prevent_default();

            let label = elements.submit.inner_html();
            let Some(view) = state.borrow_mut().begin(&label) else {
                return;
            };
            elements.render(&document, &view);

            let form_data = FormData::new_with_form(&elements.form);
            let elements = Rc::clone(&elements);
            let state = Rc::clone(&state);
            let document = document.clone();
            let endpoint = endpoint.clone();
            logger.debug("contact_submit_started", json!({ "endpoint": endpoint }));

            spawn_local(async move {
                let outcome = match form_data {
                    Ok(form_data) => post_contact(&endpoint, &form_data).await,
                    Err(_) => Err(SubmitFailure::Transport),
                };
                log_outcome(&logger, &endpoint, &outcome);

                let view = state.borrow_mut().finish(outcome);
                elements.render(&document, &view);
            });
        },
    );

    Some(ContactFormSubmitter {
        _listener: listener,
    })
}
