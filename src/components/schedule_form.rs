use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_session_context;
use crate::models::{ScheduleKind, ScheduleRequest};
use crate::services::ApiClient;
use crate::utils::{alert, now_local_input};

type FieldMut = fn(&mut ScheduleRequest) -> &mut String;

fn empty_request() -> ScheduleRequest {
    ScheduleRequest {
        scheduled_time: now_local_input(),
        ..ScheduleRequest::default()
    }
}

#[function_component(ScheduleForm)]
pub fn schedule_form() -> Html {
    let ctx = use_session_context();
    let kind = use_state(ScheduleKind::default);
    let draft = use_state(empty_request);
    let loading = use_state(|| false);
    let file_ref = use_node_ref();

    // Expired token: back to login before anything is sent
    {
        let ctx = ctx.clone();
        use_effect_with((), move |_| {
            ctx.expire_if_stale();
        });
    }

    let on_toggle = {
        let kind = kind.clone();
        Callback::from(move |_: MouseEvent| kind.set(kind.toggled()))
    };

    let field = |label: &'static str, input_type: &'static str, get: FieldMut| {
        let mut current = (*draft).clone();
        let value = get(&mut current).clone();
        let draft = draft.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            *get(&mut next) = input.value();
            draft.set(next);
        });
        html! {
            <div class="form-group">
                <label>{label}</label>
                <input type={input_type} {value} {oninput} />
            </div>
        }
    };

    let on_submit = {
        let ctx = ctx.clone();
        let kind = kind.clone();
        let draft = draft.clone();
        let loading = loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading || ctx.expire_if_stale() {
                return;
            }
            let request = (*draft).clone();
            let kind = *kind;
            if let Err(e) = request.validate(kind) {
                alert(&e.to_string());
                return;
            }

            let session = ctx.current_session();
            let generation = ctx.generation();
            let ctx = ctx.clone();
            let draft = draft.clone();
            let loading = loading.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::new().schedule_email(&session, kind, request).await;
                loading.set(false);
                if !ctx.is_current(generation) {
                    return;
                }
                match result {
                    Ok(message) => {
                        log::info!("✅ {} scheduled: {}", kind.label(), message);
                        alert(&message);
                        draft.set(empty_request());
                    }
                    Err(e) => {
                        log::error!("❌ Scheduling failed: {}", e);
                        if !ctx.handle_error(&e) {
                            alert(&e.to_string());
                        }
                    }
                }
            });
        })
    };

    let on_upload = {
        let ctx = ctx.clone();
        let kind = kind.clone();
        let loading = loading.clone();
        let file_ref = file_ref.clone();

        Callback::from(move |_: MouseEvent| {
            if *loading || ctx.expire_if_stale() {
                return;
            }
            let input = file_ref.cast::<HtmlInputElement>();
            let file = input.as_ref().and_then(|i| i.files()).and_then(|files| files.get(0));

            let session = ctx.current_session();
            let generation = ctx.generation();
            let kind = *kind;
            let ctx = ctx.clone();
            let loading = loading.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::new().schedule_bulk(&session, kind, file.as_ref()).await;
                loading.set(false);
                if !ctx.is_current(generation) {
                    return;
                }
                match result {
                    Ok(message) => {
                        alert(&message);
                        if let Some(input) = input {
                            input.set_value("");
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Bulk upload failed: {}", e);
                        if !ctx.handle_error(&e) {
                            alert(&e.to_string());
                        }
                    }
                }
            });
        })
    };

    let toggle_label = match kind.toggled() {
        ScheduleKind::Invitation => "Switch to invitations",
        ScheduleKind::FollowUp => "Switch to follow-ups",
    };

    html! {
        <div class="schedule-page">
            <div class="schedule-header">
                <h2>{format!("Schedule {}", kind.label())}</h2>
                <button type="button" class="btn-secondary" onclick={on_toggle}>{toggle_label}</button>
            </div>

            <form class="schedule-form" onsubmit={on_submit}>
                {field("Recipient", "email", |r| &mut r.recipient)}
                {field("Scheduled time", "datetime-local", |r| &mut r.scheduled_time)}
                {field("Salutation", "text", |r| &mut r.salutation)}
                {field("Name", "text", |r| &mut r.name)}
                {field("Designation", "text", |r| &mut r.designation)}
                {field("Company", "text", |r| &mut r.company)}
                {field("Phone number", "tel", |r| &mut r.phone_number)}
                if kind.collects_ranking() {
                    {field("Rank", "text", |r| &mut r.rank)}
                    {field("NIRF year", "text", |r| &mut r.nirf_year)}
                }
                {field("Academic year (YYYY-YY)", "text", |r| &mut r.year)}

                <button type="submit" class="btn-primary" disabled={*loading}>
                    { if *loading { "Scheduling..." } else { "Schedule" } }
                </button>
            </form>

            <div class="bulk-upload">
                <h3>{format!("Bulk {} upload", kind.label())}</h3>
                <input type="file" accept=".xlsx,.xls" ref={file_ref} />
                <button type="button" class="btn-secondary" onclick={on_upload} disabled={*loading}>
                    {"Upload spreadsheet"}
                </button>
            </div>
        </div>
    }
}
