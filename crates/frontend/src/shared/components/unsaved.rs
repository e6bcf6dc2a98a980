//! Guard against navigating away from a form with unsaved edits.
//!
//! Two channels can lose edits: a full navigation (tab close, reload,
//! external link) and a client-side route change (sidebar, header, any
//! router link). The first is covered by a beforeunload handler, the
//! second by a capture-phase click handler that stops the event before
//! the router sees it.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{BeforeUnloadEvent, MouseEvent};

/// Whether a clicked link must go through the discard prompt. Router links
/// carry root-relative hrefs; absolute and protocol-relative URLs cause a
/// full navigation, which the beforeunload handler covers instead.
pub fn intercepts_router_link(dirty: bool, href: Option<&str>) -> bool {
    match href {
        Some(href) => dirty && href.starts_with('/') && !href.starts_with("//"),
        None => false,
    }
}

/// Register the two handlers for the lifetime of the page. Both read
/// `dirty` through `try_get_untracked`, so handlers left over from a
/// disposed form are no-ops. The form's own Back/Cancel buttons call
/// [`confirm_discard`] directly.
pub fn use_unsaved_guard(dirty: Signal<bool>) {
    Effect::new(move |registered: Option<bool>| {
        if registered.unwrap_or(false) {
            return true;
        }
        let Some(window) = web_sys::window() else {
            return false;
        };

        let unload = Closure::wrap(Box::new(move |event: BeforeUnloadEvent| {
            if dirty.try_get_untracked().unwrap_or(false) {
                event.prevent_default();
                // Legacy browsers need a non-empty return value to prompt.
                event.set_return_value("Unsaved changes");
            }
        }) as Box<dyn FnMut(_)>);
        let _ = window
            .add_event_listener_with_callback("beforeunload", unload.as_ref().unchecked_ref());
        unload.forget();

        let click = Closure::wrap(Box::new(move |event: MouseEvent| {
            let is_dirty = dirty.try_get_untracked().unwrap_or(false);
            let href = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest("a[href]").ok().flatten())
                .and_then(|a| a.get_attribute("href"));
            if intercepts_router_link(is_dirty, href.as_deref()) && !confirm_discard(true) {
                event.prevent_default();
                event.stop_propagation();
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(document) = window.document() {
            let _ = document.add_event_listener_with_callback_and_bool(
                "click",
                click.as_ref().unchecked_ref(),
                true,
            );
        }
        click.forget();
        true
    });
}

/// Same-thread confirmation for in-app navigation: returns true when the
/// form is clean or the user agrees to discard the edits.
pub fn confirm_discard(dirty: bool) -> bool {
    if !dirty {
        return true;
    }
    web_sys::window()
        .and_then(|w| w.confirm_with_message("Discard unsaved changes?").ok())
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_form_never_intercepts() {
        assert!(!intercepts_router_link(false, Some("/admin/events")));
        assert!(!intercepts_router_link(false, None));
    }

    #[test]
    fn dirty_form_intercepts_router_links() {
        assert!(intercepts_router_link(true, Some("/admin/events")));
        assert!(intercepts_router_link(true, Some("/blog")));
        assert!(intercepts_router_link(true, Some("/")));
    }

    #[test]
    fn full_navigations_are_left_to_beforeunload() {
        assert!(!intercepts_router_link(true, Some("https://example.org")));
        assert!(!intercepts_router_link(true, Some("//example.org/x")));
        assert!(!intercepts_router_link(true, Some("mailto:board@example.org")));
        assert!(!intercepts_router_link(true, None));
    }
}
