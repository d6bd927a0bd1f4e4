//! Thin glue over `web_sys` for the handful of browser effects the page
//! needs: smooth-scrolling to a section anchor, reading the scroll offset,
//! opening external links, and (de)registering the window scroll listener.
//!
//! Every function here absorbs failure: a missing window, a missing anchor,
//! or a blocked popup is logged and otherwise ignored.

use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::error::DomError;

fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::WindowUnavailable)
}

fn document() -> Result<web_sys::Document, DomError> {
    window()?.document().ok_or(DomError::DocumentUnavailable)
}

/// Smooth-scroll the viewport to the element with the given id.
///
/// Returns whether the anchor was found. A missing anchor is a silent no-op;
/// callers use the return value to decide whether navigation state changes.
pub fn scroll_to_anchor(id: &str) -> bool {
    let doc = match document() {
        Ok(doc) => doc,
        Err(err) => {
            warn!(%err, "cannot scroll to anchor");
            return false;
        }
    };

    match doc.get_element_by_id(id) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            debug!(id, "no anchor for section, ignoring navigation");
            false
        }
    }
}

/// Current vertical scroll offset of the window, in CSS pixels.
pub fn scroll_offset() -> f64 {
    window()
        .ok()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Open a URL in a new browsing context with no opener reference back to
/// this page. Fire-and-forget: a blocked popup is logged, nothing more.
pub fn open_external(url: &str) {
    let win = match window() {
        Ok(win) => win,
        Err(err) => {
            warn!(%err, url, "cannot open external link");
            return;
        }
    };

    match win.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer") {
        Ok(Some(_)) => {}
        Ok(None) => warn!(url, "browser refused to open a new tab"),
        Err(err) => warn!(?err, url, "window.open failed"),
    }
}

/// Attach `callback` to the window "scroll" event.
pub fn add_scroll_listener(callback: &Closure<dyn FnMut()>) {
    let win = match window() {
        Ok(win) => win,
        Err(err) => {
            warn!(%err, "cannot attach scroll listener");
            return;
        }
    };

    if let Err(err) =
        win.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
    {
        warn!(?err, "failed to attach scroll listener");
    }
}

/// Detach a listener previously attached with [`add_scroll_listener`].
pub fn remove_scroll_listener(callback: &Closure<dyn FnMut()>) {
    if let Ok(win) = window() {
        let _ = win.remove_event_listener_with_callback(
            "scroll",
            callback.as_ref().unchecked_ref(),
        );
    }
}
