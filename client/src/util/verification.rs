//! Bridge to the reCAPTCHA v2 widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget is third-party JavaScript. It is rendered explicitly into a
//! container element and reports back through two global callbacks named by
//! string. Those callbacks are the only way tokens reach the wizard; this
//! module turns them into `VerificationEvent`s and never inspects a token.
//!
//! TRADE-OFFS
//! ==========
//! The site key is a build-time setting (`RECAPTCHA_SITE_KEY`), matching how
//! the bundle is produced once and served statically. Without it the public
//! test key is used, which always verifies.

use mission::VerificationEvent;

#[cfg(test)]
#[path = "verification_test.rs"]
mod verification_test;

/// Google's published always-pass key for development.
pub const TEST_SITE_KEY: &str = "6LeIxAcTAAAAAJcZVRqyHh71UMIEGNQ_MXjiZKhI";
pub const SCRIPT_URL: &str = "https://www.google.com/recaptcha/api.js?render=explicit";
pub const VERIFIED_CALLBACK: &str = "voyagerRecaptchaVerified";
pub const EXPIRED_CALLBACK: &str = "voyagerRecaptchaExpired";
#[cfg(feature = "hydrate")]
const RENDER_RETRY_MS: u64 = 500;

pub fn site_key() -> &'static str {
    resolve_site_key(option_env!("RECAPTCHA_SITE_KEY"))
}

fn resolve_site_key(configured: Option<&'static str>) -> &'static str {
    configured.map(str::trim).filter(|k| !k.is_empty()).unwrap_or(TEST_SITE_KEY)
}

/// Map a widget token (possibly absent or empty) to a wizard event.
pub fn event_from_token(token: Option<String>) -> VerificationEvent {
    match token {
        Some(t) if !t.is_empty() => VerificationEvent::Verified(t),
        _ => VerificationEvent::Expired,
    }
}

/// Window callbacks installed for one mounted widget.
///
/// Dropping the guard detaches the callbacks from `window` (unless a newer
/// widget has replaced them) and frees the closures.
#[cfg(feature = "hydrate")]
pub struct CallbackGuard {
    verified: wasm_bindgen::prelude::Closure<dyn Fn(wasm_bindgen::JsValue)>,
    expired: wasm_bindgen::prelude::Closure<dyn Fn()>,
}

/// Expose the two widget callbacks on `window`, forwarding to `on_event`.
#[cfg(feature = "hydrate")]
pub fn install_callbacks(on_event: impl Fn(VerificationEvent) + Clone + 'static) -> Option<CallbackGuard> {
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::prelude::Closure;

    let window = web_sys::window()?;

    let verified_handler = on_event.clone();
    let verified = Closure::<dyn Fn(wasm_bindgen::JsValue)>::new(move |token: wasm_bindgen::JsValue| {
        verified_handler(event_from_token(token.as_string()));
    });
    let expired = Closure::<dyn Fn()>::new(move || on_event(VerificationEvent::Expired));

    let _ = js_sys::Reflect::set(&window, &VERIFIED_CALLBACK.into(), verified.as_ref().unchecked_ref());
    let _ = js_sys::Reflect::set(&window, &EXPIRED_CALLBACK.into(), expired.as_ref().unchecked_ref());
    Some(CallbackGuard { verified, expired })
}

#[cfg(feature = "hydrate")]
impl Drop for CallbackGuard {
    fn drop(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        for (name, own) in [(VERIFIED_CALLBACK, self.verified.as_ref()), (EXPIRED_CALLBACK, self.expired.as_ref())] {
            let installed = js_sys::Reflect::get(&window, &name.into()).unwrap_or_default();
            if js_sys::Object::is(&installed, own) {
                let _ = js_sys::Reflect::delete_property(&window, &name.into());
            }
        }
    }
}

/// Render the widget into `container` via `grecaptcha.render`.
///
/// Returns `false` when the widget script has not loaded yet or rendering
/// failed.
#[cfg(feature = "hydrate")]
pub fn render_widget(container: &web_sys::HtmlElement) -> bool {
    use wasm_bindgen::JsCast as _;

    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(grecaptcha) = js_sys::Reflect::get(&window, &"grecaptcha".into()) else {
        return false;
    };
    let Ok(render) = js_sys::Reflect::get(&grecaptcha, &"render".into()) else {
        return false;
    };
    let Some(render) = render.dyn_ref::<js_sys::Function>() else {
        return false;
    };

    let params = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&params, &"sitekey".into(), &site_key().into());
    let _ = js_sys::Reflect::set(&params, &"theme".into(), &"dark".into());
    let _ = js_sys::Reflect::set(&params, &"callback".into(), &VERIFIED_CALLBACK.into());
    let _ = js_sys::Reflect::set(&params, &"expired-callback".into(), &EXPIRED_CALLBACK.into());

    match render.call2(&grecaptcha, container, &params) {
        Ok(_) => true,
        Err(e) => {
            log::warn!("recaptcha render failed: {e:?}");
            false
        }
    }
}

/// Render the widget, polling until the async script has loaded.
#[cfg(feature = "hydrate")]
pub fn render_when_ready(container: web_sys::HtmlElement, attempts_left: u8) {
    if render_widget(&container) {
        return;
    }
    if attempts_left == 0 {
        log::warn!("recaptcha script unavailable; verification widget not rendered");
        return;
    }
    leptos::prelude::set_timeout(
        move || render_when_ready(container, attempts_left - 1),
        std::time::Duration::from_millis(RENDER_RETRY_MS),
    );
}
