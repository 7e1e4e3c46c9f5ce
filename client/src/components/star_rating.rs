//! Clickable 1..=N star input.

use leptos::prelude::*;

use crate::state::rating::RatingState;

#[component]
pub fn StarRating(
    #[prop(into)] value: Signal<u8>,
    on_change: Callback<u8>,
    #[prop(default = 5)] max: u8,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] label: &'static str,
) -> impl IntoView {
    let rating = RwSignal::new(RatingState::new(value.get_untracked(), max).disabled(disabled));

    // Follow external changes such as a form reset.
    Effect::new(move || {
        let v = value.get();
        rating.update(|r| r.sync(v));
    });

    let stars = (1..=rating.get_untracked().max())
        .map(|star| {
            let on_click = move |_| {
                let committed = rating.try_update(|r| r.click(star)).flatten();
                if let Some(v) = committed {
                    on_change.run(v);
                }
            };
            view! {
                <button
                    type="button"
                    class="star-rating__star"
                    class:star-rating__star--filled=move || rating.get().is_filled(star)
                    aria-label=format!("{star} z {max}")
                    disabled=move || rating.with(RatingState::is_disabled)
                    on:click=on_click
                    on:mouseenter=move |_| rating.update(|r| r.hover(star))
                >
                    "★"
                </button>
            }
        })
        .collect_view();

    view! {
        <div
            class="star-rating"
            class:star-rating--disabled=move || rating.with(RatingState::is_disabled)
            class:star-rating--previewing=move || rating.with(|r| r.preview().is_some())
            role="group"
            data-value=move || rating.with(RatingState::value)
            aria-label=label
            on:mouseleave=move |_| rating.update(RatingState::leave)
        >
            <div class="star-rating__stars">{stars}</div>
            <span class="star-rating__caption">{move || rating.get().caption()}</span>
        </div>
    }
}
