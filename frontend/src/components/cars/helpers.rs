//! Browser-side helpers for the car manager: blocking alerts, failure
//! reporting and transient toasts.

use gloo_console::error;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::ErrorReporting;

/// Shows a blocking `window.alert` with `message`.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Logs a failed request to the console and, in `Toast` mode, also shows it
/// to the user.
pub fn report_failure(mode: ErrorReporting, message: &str) {
    error!(message.to_string());
    if mode == ErrorReporting::Toast {
        show_toast(message);
    }
}

/// Displays `message` at the bottom of the screen for three seconds.
///
/// Only reached in `ErrorReporting::Toast` mode. Looks come from the
/// `.toast` rule in `styles.css`, so the element carries just a class.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                html_toast.set_class_name("toast");

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
