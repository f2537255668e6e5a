use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::EmailRecord;
use crate::policy::EmailAction;
use crate::utils::{now_local_input, parse_local_datetime};

#[derive(Properties, PartialEq)]
pub struct EmailActionModalProps {
    pub email: EmailRecord,
    pub action: EmailAction,
    /// Chosen datetime-local value
    pub on_confirm: Callback<String>,
    pub on_close: Callback<()>,
}

/// Date picker for reschedule / follow-up, defaulting to now
#[function_component(EmailActionModal)]
pub fn email_action_modal(props: &EmailActionModalProps) -> Html {
    let value = use_state(now_local_input);
    let invalid = use_state(|| false);

    let oninput = {
        let value = value.clone();
        let invalid = invalid.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            invalid.set(false);
            value.set(input.value());
        })
    };

    let on_confirm = {
        let value = value.clone();
        let invalid = invalid.clone();
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| {
            if parse_local_datetime(&value).is_none() {
                invalid.set(true);
                return;
            }
            on_confirm.emit((*value).clone());
        })
    };

    let title = props.action.label(props.email.email_type);

    html! {
        <div class="modal-overlay">
            <div class="modal">
                <div class="modal-header">
                    <h3>{title}</h3>
                    <button class="btn-close" onclick={props.on_close.reform(|_| ())}>{"✕"}</button>
                </div>
                <div class="modal-body">
                    <p>{format!("Recipient: {}", props.email.recipient)}</p>
                    <label for="action-time">{"Scheduled time"}</label>
                    <input
                        type="datetime-local"
                        id="action-time"
                        value={(*value).clone()}
                        {oninput}
                    />
                    if *invalid {
                        <p class="form-error">{"Please pick a valid date and time"}</p>
                    }
                </div>
                <div class="modal-footer">
                    <button class="btn-secondary" onclick={props.on_close.reform(|_| ())}>{"Cancel"}</button>
                    <button class="btn-primary" onclick={on_confirm}>{title}</button>
                </div>
            </div>
        </div>
    }
}
