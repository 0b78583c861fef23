//! Fullscreen toggling for the native window and the browser page.
//!
//! Browsers disagree on the entry points, so the web path tries each known
//! name in order and calls the first one the page actually exposes.

use crate::error::DrawingResult;

/// Element methods that enter fullscreen, most standard first
pub const REQUEST_METHODS: [&str; 3] = [
    "requestFullscreen",
    "webkitRequestFullscreen",
    "msRequestFullscreen",
];

/// Document methods that leave fullscreen, same order
pub const EXIT_METHODS: [&str; 3] = ["exitFullscreen", "webkitExitFullscreen", "msExitFullscreen"];

/// Document properties holding the current fullscreen element
pub const ELEMENT_PROPERTIES: [&str; 3] = [
    "fullscreenElement",
    "webkitFullscreenElement",
    "msFullscreenElement",
];

pub fn button_label(is_fullscreen: bool) -> &'static str {
    if is_fullscreen { "Exit Fullscreen" } else { "Fullscreen" }
}

/// First candidate for which `is_supported` holds
pub fn first_supported<'a>(
    candidates: &[&'a str],
    is_supported: impl Fn(&str) -> bool,
) -> Option<&'a str> {
    candidates.iter().copied().find(|name| is_supported(name))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn is_fullscreen(ctx: &egui::Context) -> bool {
    ctx.input(|i| i.viewport().fullscreen).unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_fullscreen(ctx: &egui::Context, fullscreen: bool) -> DrawingResult<()> {
    ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(fullscreen));
    Ok(())
}

#[cfg(target_arch = "wasm32")]
mod web {
    use js_sys::{Function, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    use super::first_supported;
    use crate::error::{DrawingError, DrawingResult};

    fn property(target: &JsValue, name: &str) -> Option<JsValue> {
        Reflect::get(target, &JsValue::from_str(name))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
    }

    fn has_method(target: &JsValue, name: &str) -> bool {
        property(target, name).is_some_and(|value| value.is_function())
    }

    /// Call the first method of `candidates` that `target` exposes
    pub fn call_first(target: &JsValue, candidates: &[&str]) -> DrawingResult<()> {
        let name = first_supported(candidates, |name| has_method(target, name))
            .ok_or_else(|| DrawingError::Fullscreen(format!("none of {candidates:?} supported")))?;
        let method = property(target, name)
            .and_then(|value| value.dyn_into::<Function>().ok())
            .ok_or_else(|| DrawingError::Fullscreen(format!("{name} is not callable")))?;

        log::debug!("Calling {name}");
        method
            .call0(target)
            .map(|_| ())
            .map_err(|err| DrawingError::Fullscreen(format!("{name}: {err:?}")))
    }

    pub fn document() -> DrawingResult<web_sys::Document> {
        web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| DrawingError::Fullscreen("no document".into()))
    }

    pub fn has_property(target: &JsValue, candidates: &[&str]) -> bool {
        first_supported(candidates, |name| property(target, name).is_some()).is_some()
    }
}

#[cfg(target_arch = "wasm32")]
pub fn is_fullscreen(_ctx: &egui::Context) -> bool {
    web::document().is_ok_and(|document| web::has_property(&document, &ELEMENT_PROPERTIES))
}

#[cfg(target_arch = "wasm32")]
pub fn set_fullscreen(_ctx: &egui::Context, fullscreen: bool) -> DrawingResult<()> {
    use crate::error::DrawingError;

    let document = web::document()?;
    if fullscreen {
        let root = document
            .document_element()
            .ok_or_else(|| DrawingError::Fullscreen("no root element".into()))?;
        web::call_first(&root, &REQUEST_METHODS)
    } else {
        web::call_first(&document, &EXIT_METHODS)
    }
}

/// Flip the current state, logging instead of failing
pub fn toggle(ctx: &egui::Context) {
    let target = !is_fullscreen(ctx);
    if let Err(err) = set_fullscreen(ctx, target) {
        log::error!("Fullscreen error: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_follows_state() {
        assert_eq!(button_label(false), "Fullscreen");
        assert_eq!(button_label(true), "Exit Fullscreen");
    }

    #[test]
    fn test_standard_name_is_tried_first() {
        assert_eq!(REQUEST_METHODS[0], "requestFullscreen");
        assert_eq!(EXIT_METHODS[0], "exitFullscreen");
        assert_eq!(first_supported(&REQUEST_METHODS, |_| true), Some("requestFullscreen"));
    }

    #[test]
    fn test_falls_back_to_prefixed_names_in_order() {
        let webkit_only = |name: &str| name.starts_with("webkit");
        assert_eq!(
            first_supported(&REQUEST_METHODS, webkit_only),
            Some("webkitRequestFullscreen")
        );
        assert_eq!(
            first_supported(&EXIT_METHODS, |name| name.starts_with("ms")),
            Some("msExitFullscreen")
        );
    }

    #[test]
    fn test_nothing_supported_yields_none() {
        assert_eq!(first_supported(&REQUEST_METHODS, |_| false), None);
    }
}
