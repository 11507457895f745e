// Accessibility and overlay side-effect helpers

/// Update the live region status for screen readers.
///
/// Updates the text content of the #status-helper element if present, which
/// announces cart changes and copy feedback to assistive technology users.
pub fn set_status(msg: &str) {
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id("status-helper"))
    {
        node.set_text_content(Some(msg));
    }
}

/// Lock or unlock page scrolling while an overlay is open.
///
/// Toggles the `overlay-open` class on the HTML element; the stylesheet maps
/// it to `overflow: hidden`.
pub fn set_scroll_lock(locked: bool) {
    let Some(html) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };
    let _ = if locked {
        html.class_list().add_1("overlay-open")
    } else {
        html.class_list().remove_1("overlay-open")
    };
}

/// Move keyboard focus to the element with the given id, if present.
pub fn focus_element(id: &str) {
    use wasm_bindgen::JsCast;
    if let Some(el) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

/// Restore focus after the overlay close transition has played out.
///
/// Falls back silently when the element no longer exists.
pub fn focus_after_transition(id: String) {
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            gloo::timers::future::TimeoutFuture::new(FOCUS_RESTORE_DELAY_MS).await;
            focus_element(&id);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        focus_element(&id);
    }
}

/// Visual transition time of the sidebars and modals.
#[cfg(target_arch = "wasm32")]
const FOCUS_RESTORE_DELAY_MS: u32 = 150;

/// Id of the element that currently holds keyboard focus, if any.
#[must_use]
pub fn active_element_id() -> Option<String> {
    let id = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.active_element())
        .map(|el| el.id())?;
    if id.is_empty() { None } else { Some(id) }
}
