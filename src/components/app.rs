use yew::prelude::*;

use super::{AdminPage, Dashboard, LoginForm, Navbar, NotFound, RegistrationForm, ScheduleForm};
use crate::hooks::{use_session_context, SessionProvider};
use crate::router::{resolve, Route, RouteDecision};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <Shell />
        </SessionProvider>
    }
}

/// Applies the route guards, then renders navbar + view
#[function_component(Shell)]
fn shell() -> Html {
    let ctx = use_session_context();
    let route = ctx.route();
    let decision = resolve(route, &ctx.session());

    {
        let ctx = ctx.clone();
        use_effect_with(decision, move |decision| {
            if let RouteDecision::Redirect(target) = decision {
                ctx.redirect(*target);
            }
        });
    }

    if let RouteDecision::Redirect(_) = decision {
        return html! {};
    }

    let view = match route {
        Route::Schedule => html! { <ScheduleForm /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::Admin => html! { <AdminPage /> },
        Route::Register => html! { <RegistrationForm /> },
        Route::Login => html! { <LoginForm /> },
        Route::Root | Route::NotFound => html! { <NotFound /> },
    };

    html! {
        <div class="app">
            if route.shows_navbar() {
                <Navbar />
            }
            <main class="app-content">{view}</main>
        </div>
    }
}
