use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_session_context;
use crate::models::LoginRequest;
use crate::router::Route;
use crate::services::{perform_login, ApiClient};
use crate::utils::alert;

#[function_component(LoginForm)]
pub fn login_form() -> Html {
    let ctx = use_session_context();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_submit = {
        let ctx = ctx.clone();
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let loading = loading.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }

            let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let request = LoginRequest {
                username: username_input.value().trim().to_string(),
                password: password_input.value(),
            };

            let ctx = ctx.clone();
            let loading = loading.clone();
            let error = error.clone();
            loading.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let result = perform_login(&ApiClient::new(), &request).await;
                loading.set(false);

                let outcome = result
                    .map_err(|e| e.to_string())
                    .and_then(|response| response.into_token());
                match outcome {
                    Ok(token) => {
                        log::info!("✅ Login successful for {}", request.username);
                        if let Err(e) = ctx.login(&token, &request.username) {
                            log::error!("❌ Could not store session: {}", e);
                            alert(&e.to_string());
                        }
                    }
                    Err(message) => {
                        log::warn!("⚠️ Login failed: {}", message);
                        alert(&message);
                        error.set(Some(message));
                    }
                }
            });
        })
    };

    let to_register = Callback::from(move |_: MouseEvent| ctx.navigate(Route::Register));

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="logo-icon">{"📧"}</div>
                    <h1>{"Email Scheduler"}</h1>
                    <p>{"Sign in to schedule invitations and follow-ups"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{"Email"}</label>
                        <input
                            type="email"
                            id="username"
                            placeholder="you@example.com"
                            ref={username_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    if let Some(message) = (*error).clone() {
                        <p class="form-error">{message}</p>
                    }

                    <button type="submit" class="btn-login" disabled={*loading}>
                        { if *loading { "Signing in..." } else { "Login" } }
                    </button>

                    <div class="login-footer">
                        <button type="button" class="btn-register-link" onclick={to_register}>
                            {"No account yet? Register"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
