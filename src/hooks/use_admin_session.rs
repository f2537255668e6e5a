// ============================================================================
// USE ADMIN SESSION - two-factor flow, countdown and approvals
// ============================================================================
// Transitions live in stores::admin_store; this hook wires them to the
// network, a 1 s Interval and window activity listeners.
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::services::{admin_service, ApiClient};
use crate::stores::{AdminAction, AdminSession, AdminState};
use crate::utils::{alert, WindowListener, ADMIN_ACTIVITY_EVENTS, ADMIN_TICK_MS};

impl Reducible for AdminState {
    type Action = AdminAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

pub struct UseAdminSessionHandle {
    pub state: UseReducerHandle<AdminState>,
    pub loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
    pub submit_password: Callback<String>,
    pub submit_otp: Callback<String>,
    pub cancel_otp: Callback<()>,
    pub refresh_users: Callback<()>,
    pub approve: Callback<i64>,
    pub deny: Callback<i64>,
    pub bulk_approve: Callback<()>,
    pub logout: Callback<()>,
}

#[derive(Debug, Clone, Copy)]
enum Decision {
    Approve(i64),
    Deny(i64),
    ApproveAll,
}

/// 401/403 on the admin gate means a wrong code
fn admin_error_message(error: &ApiError, rejected: &str) -> String {
    match error {
        ApiError::Unauthorized(_) => rejected.to_string(),
        other => other.to_string(),
    }
}

fn load_users(
    dispatcher: UseReducerDispatcher<AdminState>,
    error: UseStateHandle<Option<String>>,
    password: String,
    epoch: u64,
) {
    wasm_bindgen_futures::spawn_local(async move {
        match admin_service::fetch_unapproved_users(&ApiClient::new(), &password).await {
            Ok(users) => dispatcher.dispatch(AdminAction::UsersLoaded { epoch, users }),
            Err(e) => {
                log::error!("❌ [ADMIN] Could not load pending users: {}", e);
                error.set(Some(admin_error_message(&e, "Could not load pending users")));
            }
        }
    });
}

#[hook]
pub fn use_admin_session() -> UseAdminSessionHandle {
    let state = use_reducer(|| AdminState::new(CONFIG.admin_session_timeout_secs));
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let timer = use_mut_ref(|| None::<Interval>);
    let listeners = use_mut_ref(Vec::<WindowListener>::new);

    let authorized = state.session.is_authorized();

    // Countdown + activity listeners only while authorized
    {
        let dispatcher = state.dispatcher();
        let timer = timer.clone();
        let listeners = listeners.clone();
        use_effect_with(authorized, move |authorized| {
            if *authorized {
                let tick = dispatcher.clone();
                *timer.borrow_mut() = Some(Interval::new(ADMIN_TICK_MS, move || {
                    tick.dispatch(AdminAction::Tick)
                }));
                *listeners.borrow_mut() = ADMIN_ACTIVITY_EVENTS
                    .iter()
                    .filter_map(|event| {
                        let dispatcher = dispatcher.clone();
                        WindowListener::new(*event, move |_| dispatcher.dispatch(AdminAction::Activity))
                    })
                    .collect();
                log::info!("⏱️ [ADMIN] Countdown started");
            }
            move || {
                *timer.borrow_mut() = None;
                listeners.borrow_mut().clear();
            }
        });
    }

    // Blocking notice once per timeout
    use_effect_with(state.expirations, |expirations| {
        if *expirations > 0 {
            alert("Admin session expired due to inactivity. Please log in again.");
        }
    });

    let submit_password = {
        let dispatcher = state.dispatcher();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |input: String| {
            let password = match AdminSession::check_password_input(&input) {
                Ok(password) => password,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            let dispatcher = dispatcher.clone();
            let loading = loading.clone();
            let error = error.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = admin_service::validate_password(&ApiClient::new(), &password).await;
                loading.set(false);
                match result {
                    Ok(()) => {
                        error.set(None);
                        dispatcher.dispatch(AdminAction::PasswordValidated(password));
                    }
                    Err(e) => {
                        log::warn!("⚠️ [ADMIN] Password rejected: {}", e);
                        error.set(Some(admin_error_message(&e, "Invalid password")));
                    }
                }
            });
        })
    };

    let submit_otp = {
        let dispatcher = state.dispatcher();
        let password = state.session.validated_password().map(str::to_string);
        let epoch = state.epoch;
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |input: String| {
            let otp = match AdminSession::check_otp_input(&input) {
                Ok(otp) => otp,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            let Some(password) = password.clone() else {
                error.set(Some("Please validate the password first".to_string()));
                return;
            };
            let dispatcher = dispatcher.clone();
            let loading = loading.clone();
            let error = error.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = admin_service::validate_otp(&ApiClient::new(), &otp).await;
                loading.set(false);
                match result {
                    Ok(()) => {
                        error.set(None);
                        dispatcher.dispatch(AdminAction::OtpValidated);
                        load_users(dispatcher, error, password, epoch);
                    }
                    Err(e) => {
                        log::warn!("⚠️ [ADMIN] OTP rejected: {}", e);
                        error.set(Some(admin_error_message(&e, "Invalid security code")));
                    }
                }
            });
        })
    };

    let cancel_otp = {
        let dispatcher = state.dispatcher();
        let error = error.clone();
        Callback::from(move |_: ()| {
            error.set(None);
            dispatcher.dispatch(AdminAction::CancelOtp);
        })
    };

    let refresh_users = {
        let dispatcher = state.dispatcher();
        let credential = state.session.credential().map(str::to_string);
        let epoch = state.epoch;
        let error = error.clone();
        Callback::from(move |_: ()| match &credential {
            Ok(password) => load_users(dispatcher.clone(), error.clone(), password.clone(), epoch),
            Err(e) => error.set(Some(e.to_string())),
        })
    };

    let decide = {
        let credential = state.session.credential().map(str::to_string);
        let loading = loading.clone();
        let error = error.clone();
        let refresh_users = refresh_users.clone();
        Callback::from(move |decision: Decision| {
            let password = match &credential {
                Ok(password) => password.clone(),
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            let loading = loading.clone();
            let error = error.clone();
            let refresh_users = refresh_users.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::new();
                let result = match decision {
                    Decision::Approve(id) => admin_service::approve_user(&client, id, &password).await,
                    Decision::Deny(id) => admin_service::deny_user(&client, id, &password).await,
                    Decision::ApproveAll => admin_service::bulk_approve(&client, &password).await,
                };
                loading.set(false);
                match result {
                    Ok(()) => {
                        error.set(None);
                        refresh_users.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ [ADMIN] {:?} failed: {}", decision, e);
                        let message = admin_error_message(&e, "Admin credentials rejected");
                        alert(&message);
                        error.set(Some(message));
                    }
                }
            });
        })
    };

    let approve = decide.reform(Decision::Approve);
    let deny = decide.reform(Decision::Deny);
    let bulk_approve = decide.reform(|_: ()| Decision::ApproveAll);

    let logout = {
        let dispatcher = state.dispatcher();
        let error = error.clone();
        Callback::from(move |_: ()| {
            error.set(None);
            dispatcher.dispatch(AdminAction::Logout);
        })
    };

    UseAdminSessionHandle {
        state,
        loading,
        error,
        submit_password,
        submit_otp,
        cancel_otp,
        refresh_users,
        approve,
        deny,
        bulk_approve,
        logout,
    }
}
