//! Scroll-triggered reveal of `.fade-in` sections.
//!
//! One `IntersectionObserver` marks each element `visible` the first time a
//! tenth of it enters the viewport. The mark is never removed, so sections
//! stay revealed once seen.

/// Fraction of an element that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Observe every `.fade-in` element currently in the document. Call once
/// after the page content is mounted.
pub fn observe_fade_ins() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let _ = entry.target().class_list().add_1("visible");
                    }
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
        let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) else {
            return;
        };

        let Ok(targets) = document.query_selector_all(".fade-in") else {
            return;
        };
        for index in 0..targets.length() {
            if let Some(node) = targets.get(index)
                && let Ok(element) = node.dyn_into::<web_sys::Element>()
            {
                observer.observe(&element);
            }
        }

        // Observer and callback live for the page session.
        callback.forget();
    }
}
