mod components;
mod hooks;
mod services;

use yew::prelude::*;
use components::{AdminDashboard, AdminLogin};
use hooks::use_session;
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let session = use_session();
    let api_client = ApiClient::new();

    match &session.state.session {
        Some(active) => html! {
            <AdminDashboard
                api_client={api_client}
                session={active.clone()}
                on_logout={session.actions.logout.clone()}
            />
        },
        None => html! {
            <AdminLogin
                error={session.state.login_error.clone()}
                loading={session.state.logging_in}
                on_submit={session.actions.login.clone()}
            />
        },
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
