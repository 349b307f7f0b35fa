use yew::prelude::*;

use crate::models::TaskStats;

#[derive(Properties, PartialEq)]
pub struct StatsBarProps {
    pub stats: TaskStats,
}

#[function_component(StatsBar)]
pub fn stats_bar(props: &StatsBarProps) -> Html {
    let stats = props.stats;

    html! {
        <div class="stats-bar">
            <h3>{"📊 Progress Overview"}</h3>
            <div class="stats-tiles">
                <div class="stat-tile">
                    <div class="stat-emoji">{"📋"}</div>
                    <div>{ format!("Planned: {}", stats.planned) }</div>
                </div>
                <div class="stat-tile">
                    <div class="stat-emoji">{"⏳"}</div>
                    <div>{ format!("In Progress: {}", stats.in_progress) }</div>
                </div>
                <div class="stat-tile">
                    <div class="stat-emoji">{"✅"}</div>
                    <div>{ format!("Completed: {}", stats.done) }</div>
                </div>
                <div class="stat-tile">
                    <div class="stat-emoji">{"🎯"}</div>
                    <div>{ format!("Total Progress: {}%", stats.percent()) }</div>
                </div>
            </div>
        </div>
    }
}
