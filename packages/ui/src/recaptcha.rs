//! reCAPTCHA v3 widget bindings.
//!
//! The widget arrives as an external script keyed by the site key; once
//! loaded it exposes `grecaptcha.execute(siteKey, {action})` returning a
//! promise of a single-use token. Every failure maps to
//! [`ApiError::Attestation`], which aborts the sign-in attempt before any
//! backend call.

use api::{ApiError, Attestor};

#[cfg(target_arch = "wasm32")]
const SCRIPT_ID: &str = "recaptcha-script";

/// [`Attestor`] backed by the live widget.
#[derive(Clone, Debug)]
pub struct RecaptchaAttestor {
    site_key: String,
}

impl RecaptchaAttestor {
    pub fn new(site_key: impl Into<String>) -> Self {
        Self {
            site_key: site_key.into(),
        }
    }
}

impl Attestor for RecaptchaAttestor {
    async fn attest(&self, action: &str) -> Result<String, ApiError> {
        execute(&self.site_key, action).await
    }
}

/// Inject the widget's script tag once per page load. Safe to call again;
/// an already-present tag is left alone.
#[cfg(target_arch = "wasm32")]
pub fn install_widget(site_key: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id(SCRIPT_ID).is_some() {
        return;
    }
    let Ok(script) = document.create_element("script") else {
        return;
    };
    let _ = script.set_attribute("id", SCRIPT_ID);
    let _ = script.set_attribute(
        "src",
        &format!("https://www.google.com/recaptcha/api.js?render={site_key}"),
    );
    let _ = script.set_attribute("async", "");
    let _ = script.set_attribute("defer", "");
    if let Some(head) = document.head() {
        let _ = head.append_child(&script);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn install_widget(_site_key: &str) {}

/// Run the challenge for `action` and return the attestation token.
#[cfg(target_arch = "wasm32")]
pub async fn execute(site_key: &str, action: &str) -> Result<String, ApiError> {
    use wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window()
        .ok_or_else(|| ApiError::Attestation("no window".into()))?;
    let grecaptcha = js_sys::Reflect::get(&window, &JsValue::from_str("grecaptcha"))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .ok_or_else(|| ApiError::Attestation("widget not loaded".into()))?;
    let execute = js_sys::Reflect::get(&grecaptcha, &JsValue::from_str("execute"))
        .ok()
        .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
        .ok_or_else(|| ApiError::Attestation("widget has no execute".into()))?;

    let options = js_sys::Object::new();
    js_sys::Reflect::set(
        &options,
        &JsValue::from_str("action"),
        &JsValue::from_str(action),
    )
    .map_err(js_error)?;

    let promise = execute
        .call2(&grecaptcha, &JsValue::from_str(site_key), &options)
        .map_err(js_error)?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| ApiError::Attestation("execute did not return a promise".into()))?;

    let token = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(js_error)?;
    token
        .as_string()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Attestation("widget returned no token".into()))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn execute(_site_key: &str, _action: &str) -> Result<String, ApiError> {
    Err(ApiError::Attestation(
        "attestation widget requires a browser".into(),
    ))
}

#[cfg(target_arch = "wasm32")]
fn js_error(value: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Attestation(format!("{value:?}"))
}
