use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::models::{Progress, Task, TaskPayload};

#[derive(Properties, PartialEq)]
pub struct TaskCardProps {
    pub task: Task,
    pub on_toggle: Callback<i64>,
    pub on_update: Callback<(i64, TaskPayload)>,
    pub on_delete: Callback<i64>,
}

#[function_component(TaskCard)]
pub fn task_card(props: &TaskCardProps) -> Html {
    let editing = use_state(|| false);
    let title_ref = use_node_ref();
    let content_ref = use_node_ref();
    let progress_ref = use_node_ref();

    let task = &props.task;

    let start_editing = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(true))
    };

    let cancel_editing = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(false))
    };

    let save = {
        let editing = editing.clone();
        let title_ref = title_ref.clone();
        let content_ref = content_ref.clone();
        let progress_ref = progress_ref.clone();
        let on_update = props.on_update.clone();
        let task_id = task.task_id;

        Callback::from(move |_: MouseEvent| {
            if let (Some(title_input), Some(content_input), Some(progress_select)) = (
                title_ref.cast::<HtmlInputElement>(),
                content_ref.cast::<HtmlTextAreaElement>(),
                progress_ref.cast::<HtmlSelectElement>(),
            ) {
                let payload = TaskPayload {
                    title: title_input.value(),
                    content: content_input.value(),
                    progress: Progress::from_value(&progress_select.value()),
                };
                on_update.emit((task_id, payload));
                editing.set(false);
            }
        })
    };

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let task_id = task.task_id;
        Callback::from(move |_: MouseEvent| on_toggle.emit(task_id))
    };

    // Destructive; gated behind an explicit confirmation
    let delete = {
        let on_delete = props.on_delete.clone();
        let task_id = task.task_id;
        Callback::from(move |_: MouseEvent| {
            let confirmed = window()
                .and_then(|w| {
                    w.confirm_with_message("Are you sure you want to delete this task?")
                        .ok()
                })
                .unwrap_or(false);
            if confirmed {
                on_delete.emit(task_id);
            }
        })
    };

    let card_class = match task.progress {
        Progress::Planned => "task-card planned",
        Progress::InProgress => "task-card in-progress",
        Progress::Done => "task-card done",
    };

    if *editing {
        return html! {
            <div class={card_class}>
                <div class="task-form-row">
                    <input type="text" value={task.title.clone()} ref={title_ref} />
                    <select ref={progress_ref}>
                        { for Progress::ALL.iter().map(|p| html! {
                            <option value={p.as_str()} selected={*p == task.progress}>
                                { format!("{} {}", p.emoji(), p.label()) }
                            </option>
                        }) }
                    </select>
                </div>
                <textarea rows="3" value={task.content.clone()} ref={content_ref} />
                <div class="task-actions">
                    <button class="btn-save" onclick={save}>{"💾 Save"}</button>
                    <button class="btn-cancel" onclick={cancel_editing}>{"❌ Cancel"}</button>
                </div>
            </div>
        };
    }

    html! {
        <div class={card_class}>
            <div class="task-body">
                <h4 class={if task.progress == Progress::Done { "task-title struck" } else { "task-title" }}>
                    { format!("{} {}", task.progress.emoji(), task.title) }
                </h4>
                <p class="task-content">{ task.content.clone() }</p>
                <small class="task-date">
                    { format!("Created: {}", task.created_at.format("%b %d, %Y")) }
                </small>
            </div>
            <div class="task-actions">
                <button class="btn-toggle" onclick={toggle}>
                    { if task.progress == Progress::Done { "↶ Undo" } else { "✓ Complete" } }
                </button>
                <button class="btn-edit" onclick={start_editing}>{"✏️ Edit"}</button>
                <button class="btn-delete" onclick={delete}>{"🗑️ Delete"}</button>
            </div>
        </div>
    }
}
