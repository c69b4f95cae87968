use yew::prelude::*;
use shared::{ClinicId, RosterScope, StaffRecord, StaffRole, StaffStatus};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use crate::components::active_staff::{clinic_badge, role_badge, value_or_na};
use crate::components::confirm_dialog::{ConfirmDialog, ConfirmTone};
use crate::hooks::use_roster;
use crate::services::api::ApiClient;
use crate::services::date_utils::format_timestamp_for_display;
use crate::services::roster::{ClinicFilter, RoleFilter};

#[derive(Properties, PartialEq)]
pub struct InactiveStaffProps {
    pub api_client: ApiClient,
    pub scope: RosterScope,
    /// Fired after every successful restoration so the dashboard can
    /// refresh its statistics
    pub on_staff_updated: Callback<()>,
}

/// Deactivated staff: searchable roster sorted by name, with the
/// restore flow. Restored staff regain system access.
#[function_component(InactiveStaff)]
pub fn inactive_staff(props: &InactiveStaffProps) -> Html {
    let roster = use_roster(
        &props.api_client,
        props.scope,
        StaffStatus::Inactive,
        props.on_staff_updated.clone(),
    );
    let state = roster.state;
    let actions = roster.actions;

    let combined = props.scope == RosterScope::Combined;

    let on_search_input = {
        let set_search_term = actions.set_search_term.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            set_search_term.emit(value);
        })
    };

    let on_clinic_filter_change = {
        let set_clinic_filter = actions.set_clinic_filter.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            set_clinic_filter.emit(ClinicFilter::from_value(&value));
        })
    };

    let on_role_filter_change = {
        let set_role_filter = actions.set_role_filter.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            set_role_filter.emit(RoleFilter::from_value(&value));
        })
    };

    let on_clear_filters = {
        let clear_filters = actions.clear_filters.clone();
        Callback::from(move |_: MouseEvent| {
            clear_filters.emit(());
        })
    };

    let on_confirm_restore = {
        let confirm_target = state.confirm_target.clone();
        let restore_staff = actions.restore_staff.clone();
        Callback::from(move |_: ()| {
            if let Some(record) = &confirm_target {
                restore_staff.emit(record.clone());
            }
        })
    };

    let on_cancel_confirm = {
        let cancel_confirm = actions.cancel_confirm.clone();
        Callback::from(move |_: ()| {
            cancel_confirm.emit(());
        })
    };

    if state.loading {
        return html! {
            <div class="loading-container">
                <div class="loading-spinner"></div>
                <p class="loading-text">{"Loading inactive staff..."}</p>
            </div>
        };
    }

    let count = state.filtered.len();
    let count_line = format!(
        "{} inactive staff member{} found{}{}",
        count,
        if count == 1 { "" } else { "s" },
        if combined { " across both clinics" } else { "" },
        if state.filters.is_filtering() { " (filtered)" } else { "" },
    );

    let description = match props.scope {
        RosterScope::Combined => {
            "View and restore deactivated staff members from both Manila and CDO clinics."
                .to_string()
        }
        RosterScope::Single(clinic) => format!(
            "View and restore deactivated staff members in {} clinic.",
            clinic.display_name()
        ),
    };

    html! {
        <>
            { if let Some(message) = &state.success {
                html! { <div class="snackbar success">{ message }</div> }
            } else {
                html! {}
            }}
            { if let Some(message) = &state.error {
                html! { <div class="snackbar error">{ message }</div> }
            } else {
                html! {}
            }}

            <div class="section-header roster-header">
                <div class="roster-summary">
                    <p class="section-description">
                        { description }
                        {" Restored staff will regain system access."}
                    </p>
                    <p class="result-count inactive-count">{ count_line }</p>
                </div>
            </div>

            <div class="filter-bar">
                <input
                    type="text"
                    class="filter-search"
                    placeholder="Search by name, email, ID, department, specialization, or reason..."
                    value={state.filters.search_term.clone()}
                    oninput={on_search_input}
                />

                { if combined {
                    html! {
                        <select class="filter-select" onchange={on_clinic_filter_change}>
                            <option value="all" selected={state.filters.clinic_filter == ClinicFilter::All}>{"All Clinics"}</option>
                            <option value="MNL" selected={state.filters.clinic_filter == ClinicFilter::Only(ClinicId::Mnl)}>{"Manila Only"}</option>
                            <option value="CDO" selected={state.filters.clinic_filter == ClinicFilter::Only(ClinicId::Cdo)}>{"CDO Only"}</option>
                        </select>
                    }
                } else {
                    html! {}
                }}

                <select class="filter-select" onchange={on_role_filter_change}>
                    <option value="all" selected={state.filters.role_filter == RoleFilter::All}>{"All Roles"}</option>
                    <option value="Doctor" selected={state.filters.role_filter == RoleFilter::Only(StaffRole::Doctor)}>{"Doctors Only"}</option>
                    <option value="Secretary" selected={state.filters.role_filter == RoleFilter::Only(StaffRole::Secretary)}>{"Secretaries Only"}</option>
                </select>

                { if state.filters.is_filtering() {
                    html! {
                        <button class="action-button secondary-button" onclick={on_clear_filters.clone()}>
                            {"Clear Filters"}
                        </button>
                    }
                } else {
                    html! {}
                }}
            </div>

            { if state.filtered.is_empty() {
                let filtering = state.filters.is_filtering();
                html! {
                    <div class="empty-state">
                        <div class="empty-state-icon">{"\u{2705}"}</div>
                        <p class="empty-state-text">
                            { if filtering {
                                "No inactive staff members match your search criteria"
                            } else {
                                "No inactive staff members"
                            }}
                        </p>
                        <p class="empty-state-subtext">
                            { if filtering {
                                "Try adjusting your search or filters"
                            } else {
                                "All staff are currently active"
                            }}
                        </p>
                        { if filtering {
                            html! {
                                <button class="action-button secondary-button" onclick={on_clear_filters}>
                                    {"Clear All Filters"}
                                </button>
                            }
                        } else {
                            html! {}
                        }}
                    </div>
                }
            } else {
                html! {
                    <div class="staff-grid">
                        { for state.filtered.iter().map(|record| {
                            inactive_card(record, &actions.request_confirm)
                        })}
                    </div>
                }
            }}

            { if let Some(record) = &state.confirm_target {
                let clinic_line = match record.clinic {
                    Some(clinic) => format!("Clinic: {}", clinic.display_name()),
                    None => "Clinic: unknown".to_string(),
                };

                html! {
                    <ConfirmDialog
                        title="Confirm Restoration"
                        confirm_label={if state.saving { "Restoring..." } else { "Restore" }}
                        tone={ConfirmTone::Success}
                        on_confirm={on_confirm_restore}
                        on_cancel={on_cancel_confirm}
                    >
                        <p>
                            {"Are you sure you want to restore "}
                            <strong>{ &record.full_name }</strong>
                            {"?"}
                        </p>
                        <p class="confirmation-popup-note">
                            {"This will grant them access to the system again."}
                            <br />
                            <strong>{ clinic_line }</strong>
                            <br />
                            <strong>{ format!("Role: {}", record.role) }</strong>
                        </p>
                    </ConfirmDialog>
                }
            } else {
                html! {}
            }}
        </>
    }
}

fn inactive_card(record: &StaffRecord, request_confirm: &Callback<StaffRecord>) -> Html {
    let on_restore = {
        let request_confirm = request_confirm.clone();
        let record = record.clone();
        Callback::from(move |_: MouseEvent| {
            request_confirm.emit(record.clone());
        })
    };

    let clinic_name = match record.clinic {
        Some(clinic) => format!("{} Clinic", clinic.display_name()),
        None => "N/A".to_string(),
    };

    html! {
        <div class="staff-card inactive-card" key={record.record_key()}>
            <div class="staff-card-header">
                <div class="staff-identity">
                    <div class="staff-name-row">
                        <h3 class="staff-name">{ &record.full_name }</h3>
                        { clinic_badge(record.clinic) }
                    </div>
                    <span class="staff-id">{ &record.staff_id }</span>
                </div>
                <div class="staff-badges">
                    { role_badge(record) }
                    <span class="inactive-badge">{"Inactive"}</span>
                </div>
            </div>

            <div class="staff-info-grid">
                <div class="info-item">
                    <span class="info-label">{"Email"}</span>
                    <span class="info-value">{ value_or_na(&record.email) }</span>
                </div>
                <div class="info-item">
                    <span class="info-label">{"Clinic"}</span>
                    <span class="info-value">{ clinic_name }</span>
                </div>
                <div class="info-item">
                    <span class="info-label">{"Deactivated On"}</span>
                    <span class="info-value">{ format_optional_date(&record.deactivated_at) }</span>
                </div>
                <div class="info-item">
                    <span class="info-label">{"Reason"}</span>
                    <span class="info-value">
                        { record.deactivation_reason.clone().unwrap_or_else(|| "Not specified".to_string()) }
                    </span>
                </div>
                { if let Some(specialization) = &record.specialization {
                    html! {
                        <div class="info-item">
                            <span class="info-label">{"Specialization"}</span>
                            <span class="info-value">{ specialization }</span>
                        </div>
                    }
                } else {
                    html! {}
                }}
                <div class="info-item">
                    <span class="info-label">{"Last Active"}</span>
                    <span class="info-value">{ format_optional_date(&record.updated_at) }</span>
                </div>
            </div>

            <div class="staff-actions">
                <button class="action-button restore-button" onclick={on_restore}>
                    {"Restore"}
                </button>
            </div>
        </div>
    }
}

fn format_optional_date(value: &Option<String>) -> String {
    match value {
        Some(timestamp) => format_timestamp_for_display(timestamp),
        None => "N/A".to_string(),
    }
}
