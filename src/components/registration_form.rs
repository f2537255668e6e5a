use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_session_context;
use crate::models::RegisterRequest;
use crate::router::Route;
use crate::services::{register_user, ApiClient};
use crate::utils::alert;

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value().trim().to_string())
        .unwrap_or_default()
}

#[function_component(RegistrationForm)]
pub fn registration_form() -> Html {
    let ctx = use_session_context();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let name_ref = use_node_ref();
    let designation_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_submit = {
        let ctx = ctx.clone();
        let refs = (
            username_ref.clone(),
            password_ref.clone(),
            name_ref.clone(),
            designation_ref.clone(),
            phone_ref.clone(),
        );
        let loading = loading.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }

            let (username, password, name, designation, phone) = &refs;
            let phone = input_value(phone);
            let phone_number = match phone.parse::<u64>() {
                Ok(number) => Some(number),
                Err(_) if phone.is_empty() => None,
                Err(_) => {
                    error.set(Some("Phone number must contain digits only".to_string()));
                    return;
                }
            };
            let request = RegisterRequest {
                username: input_value(username),
                password: password
                    .cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default(),
                name: input_value(name),
                designation: input_value(designation),
                phone_number,
            };

            let ctx = ctx.clone();
            let loading = loading.clone();
            let error = error.clone();
            loading.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let result = register_user(&ApiClient::new(), &request).await;
                loading.set(false);
                match result {
                    Ok(()) => {
                        alert("Registration successful! You can log in once an admin approves your account.");
                        ctx.navigate(Route::Login);
                    }
                    Err(e) => {
                        log::error!("❌ Registration failed: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    let to_login = Callback::from(move |_: MouseEvent| ctx.navigate(Route::Login));

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <h1>{"Create an account"}</h1>
                    <p>{"Accounts are activated after admin approval"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="reg-name">{"Full name"}</label>
                        <input type="text" id="reg-name" ref={name_ref} required=true />
                    </div>
                    <div class="form-group">
                        <label for="reg-email">{"Email"}</label>
                        <input type="email" id="reg-email" ref={username_ref} required=true />
                    </div>
                    <div class="form-group">
                        <label for="reg-password">{"Password"}</label>
                        <input type="password" id="reg-password" ref={password_ref} required=true />
                    </div>
                    <div class="form-group">
                        <label for="reg-designation">{"Designation"}</label>
                        <input type="text" id="reg-designation" ref={designation_ref} required=true />
                    </div>
                    <div class="form-group">
                        <label for="reg-phone">{"Phone number"}</label>
                        <input type="tel" id="reg-phone" ref={phone_ref} required=true />
                    </div>

                    if let Some(message) = (*error).clone() {
                        <p class="form-error">{message}</p>
                    }

                    <button type="submit" class="btn-login" disabled={*loading}>
                        { if *loading { "Registering..." } else { "Register" } }
                    </button>

                    <div class="login-footer">
                        <button type="button" class="btn-register-link" onclick={to_login}>
                            {"Already registered? Login"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
