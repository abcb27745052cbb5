//! DOM-backed trigger registry

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element};

use super::router::{Trigger, TriggerRegistry};

pub struct DomTrigger {
    element: Element,
}

impl Trigger for DomTrigger {
    fn on_activate(&self, handler: Box<dyn Fn()>) {
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            handler();
        }) as Box<dyn FnMut(_)>);

        if let Err(e) = self
            .element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            log::error!("Failed to attach click handler to #{}: {:?}", self.element.id(), e);
        }
        closure.forget(); // lives as long as the page
    }
}

/// Looks triggers up by element id in the current document
pub struct DomTriggerRegistry {
    document: Document,
}

impl DomTriggerRegistry {
    pub fn from_window() -> Option<Self> {
        Some(Self {
            document: window()?.document()?,
        })
    }
}

impl TriggerRegistry for DomTriggerRegistry {
    type Trigger = DomTrigger;

    fn find(&self, trigger_id: &str) -> Option<DomTrigger> {
        self.document
            .get_element_by_id(trigger_id)
            .map(|element| DomTrigger { element })
    }
}

/// `document.readyState` is "loading" until parsing finishes, then
/// "interactive" and "complete"
fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// Run `f` once the document is parsed: immediately if it already is,
/// otherwise on `DOMContentLoaded`
pub fn on_dom_ready(f: impl FnOnce() + 'static) {
    let Some(document) = window().and_then(|w| w.document()) else {
        log::error!("No document available");
        return;
    };

    if is_parsed(&document.ready_state()) {
        f();
        return;
    }

    let callback = Closure::once_into_js(f);
    if let Err(e) =
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
    {
        log::error!("Failed to wait for DOMContentLoaded: {:?}", e);
    }
}
