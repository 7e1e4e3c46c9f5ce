//! Generic keyed list with an empty-state message.

#[cfg(test)]
#[path = "data_list_test.rs"]
mod data_list_test;

use std::fmt::Display;

use leptos::prelude::*;

pub const DEFAULT_EMPTY_MESSAGE: &str = "Brak elementów do wyświetlenia.";

/// Renders `items` through `render`, or `empty_message` when there are none.
///
/// Catalog lists are static, so items render once; `key` only tags each row.
#[component]
pub fn DataList<T, K, KF, RF, V>(
    items: Vec<T>,
    key: KF,
    render: RF,
    #[prop(default = DEFAULT_EMPTY_MESSAGE)] empty_message: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView
where
    T: 'static,
    K: Display,
    KF: Fn(&T) -> K,
    RF: Fn(T) -> V,
    V: IntoView + 'static,
{
    if items.is_empty() {
        return view! { <p class="data-list__empty">{empty_message}</p> }.into_any();
    }

    let rows = items
        .into_iter()
        .map(|item| {
            let row_key = key(&item).to_string();
            view! { <li class="data-list__item" data-key=row_key>{render(item)}</li> }
        })
        .collect_view();

    view! { <ul class=format!("data-list {class}")>{rows}</ul> }.into_any()
}
