use yew::prelude::*;

use crate::hooks::use_session_context;
use crate::router::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let ctx = use_session_context();
    let session = ctx.session();
    let current = ctx.route();

    let link = |route: Route, label: &'static str| {
        let ctx = ctx.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            ctx.navigate(route);
        });
        let class = if current == route { "nav-link active" } else { "nav-link" };
        html! {
            <a href={route.path()} {class} {onclick}>{label}</a>
        }
    };

    let on_logout = {
        let ctx = ctx.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("🚪 Logout requested");
            ctx.logout();
        })
    };

    html! {
        <nav class="navbar">
            <div class="navbar-brand">{"📧 Email Scheduler"}</div>
            <div class="navbar-links">
                if session.is_active() {
                    {link(Route::Schedule, "Schedule")}
                    {link(Route::Dashboard, "Dashboard")}
                    <span class="navbar-user">{session.username().unwrap_or_default()}</span>
                    <button class="btn-logout" onclick={on_logout}>{"Logout"}</button>
                } else {
                    {link(Route::Login, "Login")}
                    {link(Route::Register, "Register")}
                }
            </div>
        </nav>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let ctx = use_session_context();
    let onclick = Callback::from(move |_: MouseEvent| ctx.navigate(Route::Schedule));

    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"Page not found"}</p>
            <button class="btn-primary" {onclick}>{"Back to scheduling"}</button>
        </div>
    }
}
