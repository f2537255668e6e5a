use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::{EmailActionModal, TrendChart};
use crate::hooks::use_dashboard;
use crate::models::{showing_label, EmailFilter, EmailRecord};
use crate::policy::EmailAction;
use crate::utils::{confirm, format_display};

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let dashboard = use_dashboard();
    let filter = use_state(EmailFilter::default);
    let pending_action = use_state(|| None::<(EmailRecord, EmailAction)>);

    let on_query = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            filter.set(EmailFilter {
                query: input.value(),
                ..(*filter).clone()
            });
        })
    };

    let on_company = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            filter.set(EmailFilter {
                company: (!value.is_empty()).then_some(value),
                ..(*filter).clone()
            });
        })
    };

    let on_clear = {
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| filter.set(EmailFilter::default()))
    };

    let on_row_action = {
        let run_action = dashboard.run_action.clone();
        let pending_action = pending_action.clone();
        let action_in_flight = dashboard.action_in_flight.clone();
        Callback::from(move |(email, action): (EmailRecord, EmailAction)| {
            if *action_in_flight {
                return;
            }
            if action.needs_scheduled_time() {
                pending_action.set(Some((email, action)));
            } else if confirm(&format!("Delete the email to {}?", email.recipient)) {
                run_action.emit((email, action, None));
            }
        })
    };

    let modal = (*pending_action).clone().map(|(email, action)| {
        let on_close = {
            let pending_action = pending_action.clone();
            Callback::from(move |_: ()| pending_action.set(None))
        };
        let on_confirm = {
            let pending_action = pending_action.clone();
            let run_action = dashboard.run_action.clone();
            let action_in_flight = dashboard.action_in_flight.clone();
            let email = email.clone();
            Callback::from(move |scheduled_time: String| {
                if *action_in_flight {
                    return;
                }
                pending_action.set(None);
                run_action.emit((email.clone(), action, Some(scheduled_time)));
            })
        };
        html! {
            <EmailActionModal {email} {action} {on_confirm} {on_close} />
        }
    });

    let Some(summary) = (*dashboard.summary).clone() else {
        return html! {
            <div class="dashboard">
                if let Some(error) = (*dashboard.error).clone() {
                    <p class="form-error">{error}</p>
                } else {
                    <p class="loading">{"Loading dashboard..."}</p>
                }
            </div>
        };
    };

    let rows = filter.apply(&summary.combined_emails);
    let showing = showing_label(rows.len(), summary.combined_emails.len(), "emails");
    let busy = *dashboard.action_in_flight;

    html! {
        <div class="dashboard">
            <div class="dashboard-header">
                <h2>{"Dashboard"}</h2>
                <button
                    class="btn-secondary"
                    onclick={dashboard.refresh.reform(|_| ())}
                    disabled={*dashboard.loading}
                >
                    { if *dashboard.loading { "Refreshing..." } else { "Refresh" } }
                </button>
            </div>

            if let Some(error) = (*dashboard.error).clone() {
                <p class="form-error">{error}</p>
            }

            <div class="stat-cards">
                { for summary.stat_cards().iter().map(|card| html! {
                    <div class="stat-card">
                        <h4>{card.label}</h4>
                        <p class="stat-total">{card.total.to_string()}</p>
                        <p class="stat-detail">
                            {format!("Yesterday: {} · Today: {}", card.yesterday, card.today)}
                        </p>
                    </div>
                }) }
            </div>

            <TrendChart cards={summary.stat_cards()} />

            <div class="filters">
                <input
                    type="search"
                    placeholder="Search recipient"
                    value={filter.query.clone()}
                    oninput={on_query}
                />
                <select onchange={on_company}>
                    <option value="" selected={filter.company.is_none()}>{"All companies"}</option>
                    { for summary.companies().into_iter().map(|company| {
                        let selected = filter.company.as_deref() == Some(company.as_str());
                        html! { <option value={company.clone()} {selected}>{company}</option> }
                    }) }
                </select>
                if filter.is_active() {
                    <button class="btn-secondary" onclick={on_clear}>{"Clear filters"}</button>
                }
            </div>
            <p class="result-count">{showing}</p>

            <table class="email-table">
                <thead>
                    <tr>
                        <th>{"Recipient"}</th>
                        <th>{"Company"}</th>
                        <th>{"Type"}</th>
                        <th>{"Scheduled"}</th>
                        <th>{"Status"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for rows.into_iter().map(|email| email_row(email, &on_row_action, busy)) }
                </tbody>
            </table>

            { modal.unwrap_or_default() }
        </div>
    }
}

fn email_row(email: &EmailRecord, on_action: &Callback<(EmailRecord, EmailAction)>, busy: bool) -> Html {
    html! {
        <tr key={email.row_key()}>
            <td>{email.recipient.clone()}</td>
            <td>{email.company_label()}</td>
            <td>{email.email_type.to_string()}</td>
            <td>{format_display(email.scheduled_time.as_deref())}</td>
            <td><span class={email.status.badge_class()}>{email.status.to_string()}</span></td>
            <td class="row-actions">
                { for email.allowed_actions().into_iter().map(|action| {
                    let email_for_click = email.clone();
                    let onclick = on_action.reform(move |_: MouseEvent| (email_for_click.clone(), action));
                    let class = if action == EmailAction::Delete { "btn-danger" } else { "btn-primary" };
                    html! {
                        <button {class} {onclick} disabled={busy}>{action.label(email.email_type)}</button>
                    }
                }) }
            </td>
        </tr>
    }
}
