use std::rc::Rc;

use dioxus::prelude::*;
use wasm_bindgen::closure::Closure;

use crate::dom;
use crate::hooks::use_nav_state::Nav;

/// Subscribe `nav` to window scroll events for the lifetime of the calling
/// component. The listener is attached once on mount and removed on unmount,
/// so it cannot outlive the page layout.
pub fn use_scroll_listener(mut nav: Nav) {
    let callback = use_hook(|| {
        let callback = Closure::<dyn FnMut()>::new(move || {
            nav.record_scroll(dom::scroll_offset());
        });
        dom::add_scroll_listener(&callback);
        Rc::new(callback)
    });

    use_drop(move || {
        dom::remove_scroll_listener(&callback);
    });
}
