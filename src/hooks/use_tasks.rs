use yew::prelude::*;

use crate::models::{Task, TaskPayload};
use crate::services::{create_task, delete_task, fetch_tasks, update_task};

#[derive(Clone, PartialEq)]
pub struct TasksState {
    pub tasks: Vec<Task>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TasksState {
    fn empty() -> Self {
        Self {
            tasks: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

pub struct UseTasksHandle {
    pub state: UseStateHandle<TasksState>,
    pub load: Callback<()>,
    pub create: Callback<TaskPayload>,
    pub update: Callback<(i64, TaskPayload)>,
    pub toggle: Callback<i64>,
    pub remove: Callback<i64>,
    pub clear: Callback<()>,
}

/// A draft is sendable only when both fields survive trimming.
pub fn draft_is_valid(title: &str, content: &str) -> bool {
    !title.trim().is_empty() && !content.trim().is_empty()
}

/// Replace the entry matching the server representation's id, leaving
/// everything else untouched.
fn replace_task(tasks: &[Task], updated: Task) -> Vec<Task> {
    tasks
        .iter()
        .map(|t| {
            if t.task_id == updated.task_id {
                updated.clone()
            } else {
                t.clone()
            }
        })
        .collect()
}

fn remove_task(tasks: &[Task], task_id: i64) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.task_id != task_id)
        .cloned()
        .collect()
}

/// Task list store for the current session. Every operation is a single
/// request/response exchange with no retry; local state is reconciled only
/// from the server's confirmed response.
#[hook]
pub fn use_tasks(token: Option<String>) -> UseTasksHandle {
    let state = use_state(TasksState::empty);

    let load = {
        let state = state.clone();
        let token = token.clone();
        Callback::from(move |_| {
            if let Some(token) = token.clone() {
                let state = state.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let mut current_state = (*state).clone();
                    current_state.loading = true;
                    current_state.error = None;
                    state.set(current_state.clone());

                    match fetch_tasks(&token).await {
                        Ok(tasks) => {
                            log::info!("📋 Tasks loaded: {}", tasks.len());
                            current_state.tasks = tasks;
                        }
                        Err(e) => {
                            log::error!("❌ Error loading tasks: {}", e);
                            current_state.error = Some("Failed to load tasks".to_string());
                        }
                    }
                    current_state.loading = false;
                    state.set(current_state);
                });
            } else {
                log::error!("❌ No active session, cannot load tasks");
            }
        })
    };

    let create = {
        let state = state.clone();
        let token = token.clone();
        Callback::from(move |payload: TaskPayload| {
            // Local validation; an incomplete draft never reaches the network
            if !draft_is_valid(&payload.title, &payload.content) {
                let mut current_state = (*state).clone();
                current_state.error =
                    Some("Please fill in both title and content".to_string());
                state.set(current_state);
                return;
            }

            if let Some(token) = token.clone() {
                let state = state.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let mut current_state = (*state).clone();
                    current_state.error = None;
                    state.set(current_state.clone());

                    match create_task(&token, &payload).await {
                        Ok(task) => {
                            log::info!("➕ Task created: #{}", task.task_id);
                            current_state.tasks.push(task);
                            state.set(current_state);
                        }
                        Err(e) => {
                            log::error!("❌ Error adding task: {}", e);
                            current_state.error = Some("Failed to add task".to_string());
                            state.set(current_state);
                        }
                    }
                });
            } else {
                log::error!("❌ No active session, cannot add task");
            }
        })
    };

    let update = {
        let state = state.clone();
        let token = token.clone();
        Callback::from(move |(task_id, payload): (i64, TaskPayload)| {
            if let Some(token) = token.clone() {
                let state = state.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let mut current_state = (*state).clone();
                    current_state.error = None;
                    state.set(current_state.clone());

                    match update_task(&token, task_id, &payload).await {
                        Ok(task) => {
                            log::info!("💾 Task updated: #{}", task.task_id);
                            current_state.tasks = replace_task(&current_state.tasks, task);
                            state.set(current_state);
                        }
                        Err(e) => {
                            log::error!("❌ Error updating task: {}", e);
                            current_state.error = Some("Failed to update task".to_string());
                            state.set(current_state);
                        }
                    }
                });
            } else {
                log::error!("❌ No active session, cannot update task");
            }
        })
    };

    // Quick toggle built on update: keeps the current local title/content
    let toggle = {
        let state = state.clone();
        let update = update.clone();
        Callback::from(move |task_id: i64| {
            if let Some(task) = state.tasks.iter().find(|t| t.task_id == task_id) {
                let payload = TaskPayload {
                    title: task.title.clone(),
                    content: task.content.clone(),
                    progress: task.progress.toggled(),
                };
                update.emit((task_id, payload));
            }
        })
    };

    let remove = {
        let state = state.clone();
        let token = token.clone();
        Callback::from(move |task_id: i64| {
            if let Some(token) = token.clone() {
                let state = state.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let mut current_state = (*state).clone();
                    current_state.error = None;
                    state.set(current_state.clone());

                    match delete_task(&token, task_id).await {
                        Ok(()) => {
                            log::info!("🗑️ Task deleted: #{}", task_id);
                            current_state.tasks = remove_task(&current_state.tasks, task_id);
                            state.set(current_state);
                        }
                        Err(e) => {
                            log::error!("❌ Error deleting task: {}", e);
                            current_state.error = Some("Failed to delete task".to_string());
                            state.set(current_state);
                        }
                    }
                });
            } else {
                log::error!("❌ No active session, cannot delete task");
            }
        })
    };

    let clear = {
        let state = state.clone();
        Callback::from(move |_| {
            state.set(TasksState::empty());
        })
    };

    UseTasksHandle {
        state,
        load,
        create,
        update,
        toggle,
        remove,
        clear,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Progress;

    fn task(id: i64, title: &str) -> Task {
        Task {
            task_id: id,
            title: title.to_string(),
            content: "content".to_string(),
            progress: Progress::Planned,
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn replace_swaps_only_the_matching_entry() {
        let tasks = vec![task(1, "one"), task(2, "two")];
        let mut updated = task(2, "two, edited");
        updated.progress = Progress::Done;

        let result = replace_task(&tasks, updated.clone());
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], tasks[0]);
        assert_eq!(result[1], updated);
    }

    #[test]
    fn replace_is_idempotent() {
        let tasks = vec![task(1, "one"), task(2, "two")];
        let updated = task(2, "edited");

        let once = replace_task(&tasks, updated.clone());
        let twice = replace_task(&once, updated);
        assert_eq!(once, twice);
    }

    #[test]
    fn replace_with_unknown_id_changes_nothing() {
        let tasks = vec![task(1, "one")];
        let result = replace_task(&tasks, task(99, "ghost"));
        assert_eq!(result, tasks);
    }

    #[test]
    fn remove_drops_exactly_the_matching_id() {
        let tasks = vec![task(1, "one"), task(2, "two"), task(3, "three")];
        let result = remove_task(&tasks, 2);
        assert_eq!(
            result.iter().map(|t| t.task_id).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn draft_validation_trims_whitespace() {
        assert!(draft_is_valid("Buy milk", "2%"));
        assert!(!draft_is_valid("   ", "2%"));
        assert!(!draft_is_valid("Buy milk", "\t\n"));
        assert!(!draft_is_valid("", ""));
    }
}
