//! Document-level listener wiring for the data API.

use std::cell::RefCell;
use std::rc::Rc;

use behavior_runtime::BehaviorEngine;
use dom_host::{EventKind, InputEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::document::WebDocument;

/// Installs the single document-level click listener feeding the engine.
///
/// The listener lives for the page lifetime (the closure is forgotten after
/// registration, matching how other long-lived runtime registrations are
/// kept alive). On each click the target and its ancestor chain are adopted,
/// the event is routed through the dispatch table, and a handler-side
/// `prevent_default` is mirrored back onto the browser event.
///
/// # Errors
///
/// Returns the browser error when listener registration is rejected.
pub fn install_click_listener(
    document: &web_sys::Document,
    engine: Rc<RefCell<BehaviorEngine>>,
    web_doc: Rc<RefCell<WebDocument>>,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |event: web_sys::MouseEvent| {
        let Some(target) = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let target_id = web_doc.borrow_mut().adopt_with_ancestors(&target);
        let mut input = InputEvent::click(target_id);
        {
            let mut doc = web_doc.borrow_mut();
            engine.borrow_mut().dispatch(&mut *doc, &mut input);
        }
        if input.default_prevented() {
            event.prevent_default();
        }
    });
    document.add_event_listener_with_callback(
        EventKind::Click.dom_name(),
        closure.as_ref().unchecked_ref(),
    )?;
    closure.forget();
    Ok(())
}
