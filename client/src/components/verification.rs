//! Container for the reCAPTCHA widget on the review step.
//!
//! Every mount renders a fresh, unsolved widget, so unmounting reports
//! `Expired`: the wizard never keeps a token the visible widget does not show.

#[cfg(test)]
#[path = "verification_test.rs"]
mod verification_test;

use leptos::prelude::*;
use mission::VerificationEvent;

use crate::util::verification::site_key;

#[cfg(feature = "hydrate")]
const RENDER_ATTEMPTS: u8 = 20;

/// Event sent to the wizard when the widget goes away.
pub(crate) const UNMOUNT_EVENT: VerificationEvent = VerificationEvent::Expired;

/// Hosts the widget and forwards its set/clear events to `on_event`.
#[component]
pub fn VerificationWidget(on_event: Callback<VerificationEvent>) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::verification;

        let guard = StoredValue::new_local(verification::install_callbacks(move |event| on_event.run(event)));
        Effect::new(move || {
            if let Some(el) = container.get() {
                verification::render_when_ready(el.into(), RENDER_ATTEMPTS);
            }
        });
        on_cleanup(move || guard.dispose());
    }

    on_cleanup(move || {
        let _ = on_event.try_run(UNMOUNT_EVENT);
    });

    view! { <div class="verification" node_ref=container data-sitekey=site_key()></div> }
}
