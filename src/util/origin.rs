//! Execution-context probes and navigation.
//!
//! Detects whether the page was opened straight from disk (no network
//! origin) and wraps the handful of `window.location` reads the form
//! controller needs. Requires a browser environment; server renders get
//! inert fallbacks.

/// True when the page was loaded over `file:` rather than a server origin.
#[must_use]
pub fn is_local_file() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().protocol().ok())
            .is_some_and(|protocol| protocol == "file:")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Current page href, forwarded to the relay as the originating URL.
#[must_use]
pub fn page_href() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Point the browser at `url`; used to open the mailto draft.
pub fn navigate_to(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
