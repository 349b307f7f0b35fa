use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::draft_is_valid;
use crate::models::{Progress, TaskPayload};

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
    pub on_create: Callback<TaskPayload>,
}

#[function_component(TaskForm)]
pub fn task_form(props: &TaskFormProps) -> Html {
    let title_ref = use_node_ref();
    let content_ref = use_node_ref();
    let progress_ref = use_node_ref();

    let on_submit = {
        let title_ref = title_ref.clone();
        let content_ref = content_ref.clone();
        let progress_ref = progress_ref.clone();
        let on_create = props.on_create.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(title_input), Some(content_input), Some(progress_select)) = (
                title_ref.cast::<HtmlInputElement>(),
                content_ref.cast::<HtmlTextAreaElement>(),
                progress_ref.cast::<HtmlSelectElement>(),
            ) {
                let title = title_input.value();
                let content = content_input.value();
                let progress = Progress::from_value(&progress_select.value());

                let valid = draft_is_valid(&title, &content);
                on_create.emit(TaskPayload {
                    title,
                    content,
                    progress,
                });

                // Reset the form for the next draft; an incomplete draft
                // stays put so the user can finish it.
                if valid {
                    title_input.set_value("");
                    content_input.set_value("");
                    progress_select.set_value(Progress::Planned.as_str());
                }
            }
        })
    };

    html! {
        <div class="task-form">
            <h3>{"➕ Add New Task"}</h3>
            <form onsubmit={on_submit}>
                <div class="task-form-row">
                    <input
                        type="text"
                        placeholder="Task title..."
                        ref={title_ref}
                    />
                    <select ref={progress_ref}>
                        { for Progress::ALL.iter().map(|p| html! {
                            <option value={p.as_str()} selected={*p == Progress::Planned}>
                                { format!("{} {}", p.emoji(), p.label()) }
                            </option>
                        }) }
                    </select>
                </div>
                <textarea
                    placeholder="Task description/content..."
                    rows="3"
                    ref={content_ref}
                />
                <button type="submit" class="btn-primary">{"Add Task"}</button>
            </form>
        </div>
    }
}
