use yew::prelude::*;

use super::{LoginScreen, StatsBar, TaskForm, TaskList};
use crate::hooks::{use_auth, use_tasks};
use crate::models::TaskStats;

#[function_component(App)]
pub fn app() -> Html {
    let auth = use_auth();
    let tasks = use_tasks(auth.state.token.clone());

    // Initial full fetch on login (including a restored session), full
    // clear of task state on logout
    {
        let is_logged_in = auth.state.is_logged_in;
        let load = tasks.load.clone();
        let clear = tasks.clear.clone();

        use_effect_with(is_logged_in, move |logged_in| {
            if *logged_in {
                load.emit(());
            } else {
                clear.emit(());
            }
            || ()
        });
    }

    if !auth.state.is_logged_in {
        return html! {
            <LoginScreen
                show_register={auth.state.show_register}
                loading={auth.state.loading}
                error={auth.state.error.clone()}
                notice={auth.state.notice.clone()}
                on_login={auth.login.clone()}
                on_register={auth.register.clone()}
                on_show_register={auth.show_register.clone()}
                on_back_to_login={auth.back_to_login.clone()}
            />
        };
    }

    let stats = TaskStats::from_tasks(&tasks.state.tasks);

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{"📋 Your Task Manager"}</h1>
                <button class="btn-logout" onclick={auth.logout.reform(|_: MouseEvent| ())}>
                    {"Logout"}
                </button>
            </header>

            if let Some(error) = &tasks.state.error {
                <div class="banner banner-error">{ error.clone() }</div>
            }

            if tasks.state.loading {
                <div class="loading-hint">{"Loading your tasks... ⏳"}</div>
            } else {
                <>
                    <TaskForm on_create={tasks.create.clone()} />
                    <StatsBar stats={stats} />
                    <TaskList
                        tasks={tasks.state.tasks.clone()}
                        on_toggle={tasks.toggle.clone()}
                        on_update={tasks.update.clone()}
                        on_delete={tasks.remove.clone()}
                    />
                    if stats.all_done() {
                        <div class="celebration">
                            <h2>{"🎉 Congratulations! All tasks completed! 🎉"}</h2>
                        </div>
                    }
                </>
            }
        </div>
    }
}
