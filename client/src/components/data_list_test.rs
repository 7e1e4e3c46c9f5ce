use super::*;
use mission::catalog::{Mission, RECENT_MISSIONS};

use crate::components::recent_missions::RecentMissions;

fn render(view: impl FnOnce() -> String) -> String {
    Owner::new().with(view)
}

fn numbers(items: Vec<u32>) -> String {
    render(|| {
        view! { <DataList items=items key=|n: &u32| *n render=|n: u32| view! { <span>{n}</span> } /> }.to_html()
    })
}

#[test]
fn empty_list_shows_default_message() {
    let html = numbers(Vec::new());
    assert!(html.contains("data-list__empty"));
    assert!(html.contains(DEFAULT_EMPTY_MESSAGE));
    assert!(!html.contains("<ul"));
}

#[test]
fn empty_list_shows_custom_message() {
    let html = render(|| {
        view! {
            <DataList
                items={Vec::<u32>::new()}
                key=|n: &u32| *n
                render=|n: u32| view! { <span>{n}</span> }
                empty_message="Brak misji."
            />
        }
        .to_html()
    });
    assert!(html.contains("Brak misji."));
    assert!(!html.contains(DEFAULT_EMPTY_MESSAGE));
}

#[test]
fn items_render_one_keyed_row_each() {
    let html = numbers(vec![3, 1, 4]);
    assert!(!html.contains("data-list__empty"));
    assert_eq!(html.matches("data-list__item").count(), 3);
    assert!(html.contains(r#"data-key="3""#));
    assert!(html.contains(r#"data-key="4""#));
}

#[test]
fn recent_missions_render_every_mission_or_the_empty_message() {
    let html = render(|| view! { <RecentMissions missions=RECENT_MISSIONS /> }.to_html());
    assert_eq!(html.matches("data-key=").count(), RECENT_MISSIONS.len());
    assert!(html.contains("recent-missions"));

    let none: &'static [Mission] = &[];
    let html = render(|| view! { <RecentMissions missions=none /> }.to_html());
    assert!(html.contains(DEFAULT_EMPTY_MESSAGE));
}
