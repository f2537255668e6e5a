use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::hooks::use_session_context;
use crate::models::{DashboardSummary, EmailRecord};
use crate::policy::EmailAction;
use crate::services::ApiClient;
use crate::stores::InFlight;
use crate::utils::alert;

pub struct UseDashboardHandle {
    pub summary: UseStateHandle<Option<DashboardSummary>>,
    pub loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
    pub refresh: Callback<()>,
    /// True while an email action is running; row buttons are disabled
    pub action_in_flight: UseStateHandle<bool>,
    /// (row, action, datetime-local value for reschedule/follow-up)
    pub run_action: Callback<(EmailRecord, EmailAction, Option<String>)>,
}

/// Log text with the HTTP status in front when the message lacks it
fn describe(error: &ApiError) -> String {
    let message = error.to_string();
    match error.status() {
        Some(status) if !message.contains(&status.to_string()) => format!("HTTP {}: {}", status, message),
        _ => message,
    }
}

#[hook]
pub fn use_dashboard() -> UseDashboardHandle {
    let ctx = use_session_context();
    let summary = use_state(|| None::<DashboardSummary>);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let action_in_flight = use_state(|| false);
    let fetch_guard = (*use_state(InFlight::default)).clone();
    let action_guard = (*use_state(InFlight::default)).clone();
    let interval_handle = use_mut_ref(|| None::<Interval>);

    let refresh = {
        let ctx = ctx.clone();
        let summary = summary.clone();
        let loading = loading.clone();
        let error = error.clone();
        let fetch_guard = fetch_guard.clone();

        Callback::from(move |_: ()| {
            if fetch_guard.is_busy() {
                log::info!("🔄 Dashboard fetch already running, skipping");
                return;
            }
            if ctx.expire_if_stale() || !fetch_guard.try_begin() {
                return;
            }

            let session = ctx.current_session();
            let generation = ctx.generation();
            let ctx = ctx.clone();
            let summary = summary.clone();
            let loading = loading.clone();
            let error = error.clone();
            let fetch_guard = fetch_guard.clone();

            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::new().dashboard(&session).await;
                fetch_guard.finish();
                loading.set(false);

                if !ctx.is_current(generation) {
                    log::warn!("⚠️ Dropping dashboard response from a previous session");
                    return;
                }
                match result {
                    Ok(data) => {
                        error.set(None);
                        summary.set(Some(data));
                    }
                    Err(e) => {
                        log::error!("❌ Dashboard fetch failed: {}", describe(&e));
                        if !ctx.handle_error(&e) {
                            error.set(Some(e.to_string()));
                        }
                    }
                }
            });
        })
    };

    // Initial load + periodic refresh while mounted
    {
        let refresh = refresh.clone();
        let interval_handle = interval_handle.clone();
        use_effect_with((), move |_| {
            refresh.emit(());

            let every_ms = CONFIG.dashboard_refresh_ms();
            log::info!("⏰ Dashboard refresh every {} seconds", every_ms / 1000);
            let tick = refresh.clone();
            *interval_handle.borrow_mut() = Some(Interval::new(every_ms, move || tick.emit(())));

            move || {
                *interval_handle.borrow_mut() = None;
            }
        });
    }

    let run_action = {
        let ctx = ctx.clone();
        let refresh = refresh.clone();
        let action_guard = action_guard.clone();
        let action_in_flight = action_in_flight.clone();

        Callback::from(move |(email, action, scheduled_time): (EmailRecord, EmailAction, Option<String>)| {
            if action_guard.is_busy() {
                log::warn!("⚠️ {} on email {} ignored, another action is running", action, email.id);
                return;
            }
            if ctx.expire_if_stale() || !action_guard.try_begin() {
                return;
            }
            let session = ctx.current_session();
            let generation = ctx.generation();
            let ctx = ctx.clone();
            let refresh = refresh.clone();
            let action_guard = action_guard.clone();
            let action_in_flight = action_in_flight.clone();

            action_in_flight.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::new()
                    .email_action(&session, &email, action, scheduled_time.as_deref())
                    .await;
                action_guard.finish();
                action_in_flight.set(false);
                if !ctx.is_current(generation) {
                    return;
                }
                match result {
                    Ok(message) => {
                        log::info!("✅ {} on email {}: {}", action, email.id, message);
                        alert(&message);
                        refresh.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ {} on email {} failed: {}", action, email.id, describe(&e));
                        if !ctx.handle_error(&e) {
                            alert(&e.to_string());
                        }
                    }
                }
            });
        })
    };

    UseDashboardHandle {
        summary,
        loading,
        error,
        refresh,
        action_in_flight,
        run_action,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_prefixes_missing_status() {
        let business = ApiError::Business {
            status: 409,
            message: "Email already sent".to_string(),
        };
        assert_eq!(describe(&business), "HTTP 409: Email already sent");
        assert_eq!(describe(&ApiError::Unauthorized(403)), ApiError::Unauthorized(403).to_string());

        let network = ApiError::Network("offline".to_string());
        assert_eq!(describe(&network), network.to_string());
    }
}
