use yew::prelude::*;

use crate::components::task_card::TaskCard;
use crate::models::{Task, TaskPayload};

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
    pub tasks: Vec<Task>,
    pub on_toggle: Callback<i64>,
    pub on_update: Callback<(i64, TaskPayload)>,
    pub on_delete: Callback<i64>,
}

#[function_component(TaskList)]
pub fn task_list(props: &TaskListProps) -> Html {
    html! {
        <div class="task-list">
            <h3>{ format!("📌 Your Tasks ({}):", props.tasks.len()) }</h3>
            if props.tasks.is_empty() {
                <p class="empty-hint">{"No tasks yet! Add one above. 👆"}</p>
            } else {
                { for props.tasks.iter().map(|task| html! {
                    <TaskCard
                        key={task.task_id}
                        task={task.clone()}
                        on_toggle={props.on_toggle.clone()}
                        on_update={props.on_update.clone()}
                        on_delete={props.on_delete.clone()}
                    />
                }) }
            }
        </div>
    }
}
