use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_admin_session;
use crate::models::{filter_pending_users, showing_label, PendingUser};
use crate::stores::AdminStage;
use crate::utils::{confirm, format_countdown};

/// Two-factor gate, then the list of registrations awaiting approval
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let admin = use_admin_session();
    let loading = *admin.loading;

    let body = match admin.state.session.stage() {
        AdminStage::Unauthenticated => html! {
            <CodeStep
                key="password"
                label="Admin password"
                input_type="password"
                submit_label="Continue"
                {loading}
                on_submit={admin.submit_password.clone()}
            />
        },
        AdminStage::OtpPending => html! {
            <CodeStep
                key="otp"
                label="Security code"
                input_type="text"
                submit_label="Verify"
                hint="A security code has been sent. Enter it below."
                {loading}
                on_submit={admin.submit_otp.clone()}
                on_back={admin.cancel_otp.clone()}
            />
        },
        AdminStage::Authorized => {
            let on_deny = admin.deny.clone();
            let deny = Callback::from(move |user: PendingUser| {
                if confirm(&format!("Deny registration of {}?", user.username)) {
                    on_deny.emit(user.id);
                }
            });
            let bulk_approve = {
                let bulk = admin.bulk_approve.clone();
                Callback::from(move |count: usize| {
                    if confirm(&format!("Approve all {} pending users?", count)) {
                        bulk.emit(());
                    }
                })
            };
            let logout = {
                let logout = admin.logout.clone();
                Callback::from(move |_: MouseEvent| {
                    if confirm("Log out of the admin session?") {
                        logout.emit(());
                    }
                })
            };
            html! {
                <>
                    <div class="admin-session-bar">
                        <span class="countdown">
                            {format!("Session expires in {}", format_countdown(admin.state.session.remaining_secs()))}
                        </span>
                        <button class="btn-secondary" onclick={admin.refresh_users.reform(|_| ())}>{"Refresh"}</button>
                        <button class="btn-logout" onclick={logout}>{"Logout"}</button>
                    </div>
                    <PendingUsers
                        users={admin.state.session.pending_users().to_vec()}
                        {loading}
                        on_approve={admin.approve.clone()}
                        on_deny={deny}
                        on_bulk_approve={bulk_approve}
                    />
                </>
            }
        }
    };

    html! {
        <div class="admin-page">
            <h2>{"🛡️ Admin"}</h2>
            if let Some(error) = (*admin.error).clone() {
                <p class="form-error">{error}</p>
            }
            {body}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CodeStepProps {
    label: &'static str,
    input_type: &'static str,
    submit_label: &'static str,
    #[prop_or_default]
    hint: Option<&'static str>,
    loading: bool,
    on_submit: Callback<String>,
    #[prop_or_default]
    on_back: Option<Callback<()>>,
}

/// Single secret input (password or OTP)
#[function_component(CodeStep)]
fn code_step(props: &CodeStepProps) -> Html {
    let input_ref = use_node_ref();

    let onsubmit = {
        let input_ref = input_ref.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value = input_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            on_submit.emit(value);
        })
    };

    html! {
        <form class="admin-form" {onsubmit}>
            if let Some(hint) = props.hint {
                <p>{hint}</p>
            }
            <label for="admin-code">{props.label}</label>
            <input type={props.input_type} id="admin-code" ref={input_ref} />
            <button type="submit" class="btn-primary" disabled={props.loading}>
                { if props.loading { "Checking..." } else { props.submit_label } }
            </button>
            if let Some(on_back) = props.on_back.clone() {
                <button type="button" class="btn-secondary" onclick={on_back.reform(|_| ())}>
                    {"Back"}
                </button>
            }
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct PendingUsersProps {
    users: Vec<PendingUser>,
    loading: bool,
    on_approve: Callback<i64>,
    on_deny: Callback<PendingUser>,
    /// Receives the number of users shown in the confirmation
    on_bulk_approve: Callback<usize>,
}

#[function_component(PendingUsers)]
fn pending_users(props: &PendingUsersProps) -> Html {
    let search = use_state(String::new);

    let oninput = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let visible = filter_pending_users(&props.users, search.trim());
    let total = props.users.len();
    let showing = showing_label(visible.len(), total, "users");

    html! {
        <div class="pending-users">
            <div class="pending-users-header">
                <h3>{format!("Pending registrations ({})", total)}</h3>
                <input type="search" placeholder="Search by email or id" value={(*search).clone()} {oninput} />
                <button
                    class="btn-primary"
                    disabled={props.loading || total == 0}
                    onclick={props.on_bulk_approve.reform(move |_: MouseEvent| total)}
                >
                    {"Approve all"}
                </button>
            </div>
            <p class="result-count">{showing}</p>

            if visible.is_empty() {
                <p class="empty">{"No pending users"}</p>
            } else {
                <table class="users-table">
                    <thead>
                        <tr>
                            <th>{"Id"}</th>
                            <th>{"Email"}</th>
                            <th>{"Registered"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for visible.into_iter().map(|user| {
                            let id = user.id;
                            let denied = user.clone();
                            html! {
                                <tr key={id.to_string()}>
                                    <td>{id.to_string()}</td>
                                    <td>{user.username.clone()}</td>
                                    <td>{user.registration_label().to_string()}</td>
                                    <td class="row-actions">
                                        <button
                                            class="btn-primary"
                                            disabled={props.loading}
                                            onclick={props.on_approve.reform(move |_: MouseEvent| id)}
                                        >
                                            {"Approve"}
                                        </button>
                                        <button
                                            class="btn-danger"
                                            disabled={props.loading}
                                            onclick={props.on_deny.reform(move |_: MouseEvent| denied.clone())}
                                        >
                                            {"Deny"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            }
        </div>
    }
}
