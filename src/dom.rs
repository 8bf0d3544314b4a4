//! Browser Helpers
//!
//! Native dialogs, navigation and image-load waits. All of them degrade to
//! no-ops when the window or element is missing.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AddEventListenerOptions, HtmlImageElement};

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// `window.confirm`; anything but an explicit OK counts as cancel
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Go to `home_url`, or reload the page when there is none
pub fn navigate_home(home_url: Option<&str>) {
    let Some(window) = web_sys::window() else { return };
    let location = window.location();
    let _ = match home_url {
        Some(url) => location.set_href(url),
        None => location.reload(),
    };
}

/// Resolve once the face image of board card `idx` has loaded or failed.
/// Returns immediately when the card shows no image or it is already complete.
pub async fn wait_for_card_image(idx: usize) {
    let selector = format!(".memory-card[data-idx=\"{}\"] img", idx);
    let image = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.query_selector(&selector).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok());

    let Some(image) = image else { return };
    if image.complete() {
        return;
    }

    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        for event in ["load", "error"] {
            let _ = image.add_event_listener_with_callback_and_add_event_listener_options(
                event, &resolve, &options,
            );
        }
    });
    let _ = JsFuture::from(promise).await;
}
