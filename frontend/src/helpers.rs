//! Small DOM utilities shared by the pages.

use common::submit::SubmitError;
use log::error;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Displays a temporary notification at the bottom of the screen.
///
/// The toast removes itself after three seconds.
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

pub fn input_value(e: &InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

pub fn textarea_value(e: &InputEvent) -> String {
    let textarea: HtmlTextAreaElement = e.target_unchecked_into();
    textarea.value()
}

pub fn select_value(e: &Event) -> String {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value()
}

/// Toast text for a failed submission. Form errors are already user-facing.
pub fn submit_error_message(e: &SubmitError) -> String {
    match e {
        SubmitError::Form(form) => form.to_string(),
        other => {
            error!("Submission failed: {other}");
            "오류가 발생했습니다. 잠시 후 다시 시도해주세요.".to_string()
        }
    }
}
