//! List of the latest missions.

use leptos::prelude::*;
use mission::catalog::Mission;

use crate::components::data_list::DataList;
use crate::components::status_badge::StatusBadge;
use crate::util::format::mission_tooltip;

#[component]
pub fn RecentMissions(missions: &'static [Mission]) -> impl IntoView {
    view! {
        <DataList
            items=missions.to_vec()
            key=|m: &Mission| m.id
            render=|m: Mission| {
                view! {
                    <div class="mission-row" title=mission_tooltip(&m)>
                        <div class="mission-row__main">
                            <span class="mission-row__name">{m.name}</span>
                            <span class="mission-row__destination">{m.destination}</span>
                        </div>
                        <span class="mission-row__date">{m.start_date}</span>
                        <StatusBadge status=m.status />
                    </div>
                }
            }
            class="recent-missions"
        />
    }
}
