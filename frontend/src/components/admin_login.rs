use yew::prelude::*;
use web_sys::{HtmlInputElement, SubmitEvent};

#[derive(Properties, PartialEq)]
pub struct AdminLoginProps {
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub loading: bool,
    /// (email, password) as entered
    pub on_submit: Callback<(String, String)>,
}

/// Administrator login card. Credentials are checked by the session
/// service; this component only collects them.
#[function_component(AdminLogin)]
pub fn admin_login(props: &AdminLoginProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            password.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_form_submit = {
        let email = email.clone();
        let password = password.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(((*email).clone(), (*password).clone()));
        })
    };

    html! {
        <div class="login-container">
            <div class="login-card">
                <div class="header">
                    <div class="header-content">
                        <h1 class="header-title">{"ABC Clinics"}</h1>
                        <p class="header-subtitle">{"Admin Portal"}</p>
                    </div>
                </div>

                <div class="card-body">
                    <form class="login-form" onsubmit={on_form_submit}>
                        { if let Some(error) = &props.error {
                            html! { <div class="error-message">{ error }</div> }
                        } else {
                            html! {}
                        }}

                        <div class="form-group">
                            <label for="email" class="label">{"Email Address"}</label>
                            <input
                                id="email"
                                type="email"
                                class="input"
                                placeholder="Enter your email"
                                value={(*email).clone()}
                                onchange={on_email_change}
                                disabled={props.loading}
                                required=true
                            />
                        </div>

                        <div class="form-group">
                            <label for="password" class="label">{"Password"}</label>
                            <input
                                id="password"
                                type="password"
                                class="input"
                                placeholder="Enter your password"
                                value={(*password).clone()}
                                onchange={on_password_change}
                                disabled={props.loading}
                                required=true
                            />
                        </div>

                        <button type="submit" class="login-button" disabled={props.loading}>
                            { if props.loading { "Signing in..." } else { "Login" } }
                        </button>
                    </form>

                    <div class="login-info">
                        <p>{"Contact admin if having trouble logging in."}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
