//! Page Glue
//!
//! The few places that touch the hosting document directly.

use trip_sync::{Bootstrap, Navigation};

/// Element holding the server-rendered JSON state
const BOOTSTRAP_ELEMENT_ID: &str = "bootstrap";

pub fn read_bootstrap() -> Bootstrap {
    let json = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(BOOTSTRAP_ELEMENT_ID))
        .and_then(|el| el.text_content());
    Bootstrap::parse_or_default(json.as_deref())
}

pub fn origin() -> String {
    web_sys::window()
        .and_then(|win| win.location().origin().ok())
        .unwrap_or_default()
}

/// Full page load of another trip
pub fn navigate(nav: &Navigation) {
    let Some(win) = web_sys::window() else {
        return;
    };
    if let Err(e) = win.location().set_href(&nav.url) {
        log::error!("[page] navigation to {} failed: {:?}", nav.url, e);
    }
}
