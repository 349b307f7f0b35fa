use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub show_register: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub on_login: Callback<(String, String)>,
    pub on_register: Callback<(String, String)>,
    pub on_show_register: Callback<()>,
    pub on_back_to_login: Callback<()>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let on_login = props.on_login.clone();
        let on_register = props.on_register.clone();
        let is_register = props.show_register;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let email = email_input.value();
                let password = password_input.value();

                if email.is_empty() || password.is_empty() {
                    return;
                }

                if is_register {
                    on_register.emit((email, password));
                } else {
                    on_login.emit((email, password));
                }
            }
        })
    };

    let toggle_mode = {
        let on_show_register = props.on_show_register.clone();
        let on_back_to_login = props.on_back_to_login.clone();
        let is_register = props.show_register;

        Callback::from(move |_: MouseEvent| {
            if is_register {
                on_back_to_login.emit(());
            } else {
                on_show_register.emit(());
            }
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <h1>{"📋 Task Manager"}</h1>
                <h2>{ if props.show_register { "Register" } else { "Login" } }</h2>

                if let Some(error) = &props.error {
                    <div class="banner banner-error">{ error.clone() }</div>
                }
                if let Some(notice) = &props.notice {
                    <div class="banner banner-notice">{ notice.clone() }</div>
                }

                <form class="login-form" onsubmit={on_submit}>
                    <input
                        type="email"
                        placeholder="Email"
                        ref={email_ref}
                        required=true
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        ref={password_ref}
                        required=true
                    />
                    <button type="submit" class="btn-primary" disabled={props.loading}>
                        { if props.loading {
                            "Loading..."
                        } else if props.show_register {
                            "Register"
                        } else {
                            "Login"
                        } }
                    </button>
                </form>

                <button type="button" class="btn-link" onclick={toggle_mode}>
                    { if props.show_register {
                        "Have an account? Login"
                    } else {
                        "Need an account? Register"
                    } }
                </button>
            </div>
        </div>
    }
}
