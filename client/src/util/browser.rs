//! Browser side effects used by notice actions.
//!
//! Both helpers are best-effort: outside the browser (SSR, tests) they no-op.

/// Reload the current document.
pub fn reload_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

/// Move keyboard focus to the element with this DOM id.
pub fn focus_element(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(element) = element {
            let _ = element.focus();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
