use yew::prelude::*;
use shared::{
    ClinicId, CreateStaffRequest, RosterScope, StaffRecord, StaffRole, StaffStatus,
    UpdateStaffRequest,
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use crate::components::confirm_dialog::{ConfirmDialog, ConfirmTone};
use crate::components::staff_form::StaffForm;
use crate::hooks::use_roster;
use crate::services::api::ApiClient;
use crate::services::date_utils::format_timestamp_for_display;
use crate::services::roster::{ClinicFilter, RoleFilter};
use crate::services::validation::{normalize_optional, StaffFormInput};

#[derive(Properties, PartialEq)]
pub struct ActiveStaffProps {
    pub api_client: ApiClient,
    pub scope: RosterScope,
    /// Fired after every successful mutation so the dashboard can
    /// refresh its statistics
    pub on_staff_updated: Callback<()>,
}

/// Active staff management: merged roster grid, search/filter bar,
/// create/edit popup and the deactivation flow.
#[function_component(ActiveStaff)]
pub fn active_staff(props: &ActiveStaffProps) -> Html {
    let roster = use_roster(
        &props.api_client,
        props.scope,
        StaffStatus::Active,
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

    let on_add_click = {
        let open_create_form = actions.open_create_form.clone();
        Callback::from(move |_: MouseEvent| {
            open_create_form.emit(());
        })
    };

    let on_form_cancel = {
        let close_form = actions.close_form.clone();
        Callback::from(move |_: ()| {
            close_form.emit(());
        })
    };

    let on_form_submit = {
        let editing = state.editing.clone();
        let create_staff = actions.create_staff.clone();
        let update_staff = actions.update_staff.clone();
        let scope = props.scope;
        Callback::from(move |input: StaffFormInput| {
            match &editing {
                Some(record) => {
                    update_staff.emit((record.clone(), update_request(&input)));
                }
                None => {
                    create_staff.emit(create_request(&input, scope));
                }
            }
        })
    };

    let on_reason_change = {
        let set_deactivation_reason = actions.set_deactivation_reason.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            set_deactivation_reason.emit(value);
        })
    };

    let on_confirm_deactivate = {
        let confirm_target = state.confirm_target.clone();
        let reason = state.deactivation_reason.clone();
        let deactivate_staff = actions.deactivate_staff.clone();
        Callback::from(move |_: ()| {
            if let Some(record) = &confirm_target {
                deactivate_staff.emit((record.clone(), reason.clone()));
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
                <p class="loading-text">{"Loading active staff..."}</p>
            </div>
        };
    }

    let count = state.filtered.len();
    let count_line = format!(
        "{} active staff member{} found{}{}",
        count,
        if count == 1 { "" } else { "s" },
        if combined { " across both clinics" } else { "" },
        if state.filters.is_filtering() { " (filtered)" } else { "" },
    );

    let description = match props.scope {
        RosterScope::Combined => {
            "Manage active staff members from both Manila and CDO clinics.".to_string()
        }
        RosterScope::Single(clinic) => format!(
            "Manage active staff members in {} clinic.",
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
                        {" Click edit to modify details or deactivate to remove access."}
                    </p>
                    <p class="result-count">{ count_line }</p>
                </div>

                <button class="action-button primary-button" onclick={on_add_click}>
                    {"Add New Staff"}
                </button>
            </div>

            <div class="filter-bar">
                <input
                    type="text"
                    class="filter-search"
                    placeholder="Search by name, email, ID, department, or specialization..."
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

            { if state.show_form {
                let title = if state.editing.is_some() {
                    "Edit Staff Member"
                } else {
                    "Add New Staff Member"
                };
                let on_close = {
                    let close_form = actions.close_form.clone();
                    Callback::from(move |_: MouseEvent| close_form.emit(()))
                };

                html! {
                    <div class="form-popup-overlay">
                        <div class="form-popup-card">
                            <div class="form-popup-header">
                                <h3 class="form-popup-title">{ title }</h3>
                                <button class="form-popup-close" onclick={on_close}>{"\u{d7}"}</button>
                            </div>
                            <div class="form-popup-content">
                                <StaffForm
                                    api_client={props.api_client.clone()}
                                    initial={state.editing.clone()}
                                    clinic={form_clinic(&state.editing, props.scope)}
                                    combined_view={combined}
                                    busy={state.saving}
                                    on_submit={on_form_submit}
                                    on_cancel={on_form_cancel}
                                />
                            </div>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}

            { if state.filtered.is_empty() {
                let filtering = state.filters.is_filtering();
                html! {
                    <div class="empty-state">
                        <div class="empty-state-icon">{"\u{1F464}"}</div>
                        <p class="empty-state-text">
                            { if filtering {
                                "No staff members match your search criteria"
                            } else {
                                "No active staff members found"
                            }}
                        </p>
                        <p class="empty-state-subtext">
                            { if filtering {
                                "Try adjusting your search or filters"
                            } else {
                                "Click \"Add New Staff\" to create your first staff member"
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
                            staff_card(record, &actions.open_edit_form, &actions.request_confirm)
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
                        title="Confirm Deactivation"
                        confirm_label={if state.saving { "Deactivating..." } else { "Deactivate" }}
                        tone={ConfirmTone::Danger}
                        on_confirm={on_confirm_deactivate}
                        on_cancel={on_cancel_confirm}
                    >
                        <p>
                            {"Are you sure you want to deactivate "}
                            <strong>{ &record.full_name }</strong>
                            {"?"}
                        </p>
                        <p class="confirmation-popup-note">
                            {"This will prevent them from accessing the system but keep their records."}
                            <br />
                            <strong>{ clinic_line }</strong>
                            <br />
                            <strong>{ format!("Role: {}", record.role) }</strong>
                        </p>
                        <div class="form-group">
                            <label class="form-label">{"Reason (optional)"}</label>
                            <textarea
                                class="form-input"
                                placeholder="e.g., Resigned, End of contract"
                                value={state.deactivation_reason.clone()}
                                onchange={on_reason_change}
                            />
                        </div>
                    </ConfirmDialog>
                }
            } else {
                html! {}
            }}
        </>
    }
}

fn staff_card(
    record: &StaffRecord,
    open_edit_form: &Callback<StaffRecord>,
    request_confirm: &Callback<StaffRecord>,
) -> Html {
    let on_edit = {
        let open_edit_form = open_edit_form.clone();
        let record = record.clone();
        Callback::from(move |_: MouseEvent| {
            open_edit_form.emit(record.clone());
        })
    };

    let on_deactivate = {
        let request_confirm = request_confirm.clone();
        let record = record.clone();
        Callback::from(move |_: MouseEvent| {
            request_confirm.emit(record.clone());
        })
    };

    html! {
        <div class="staff-card" key={record.record_key()}>
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
                </div>
            </div>

            <div class="staff-info-grid">
                <div class="info-item">
                    <span class="info-label">{"Email"}</span>
                    <span class="info-value">{ value_or_na(&record.email) }</span>
                </div>
                <div class="info-item">
                    <span class="info-label">{"Contact"}</span>
                    <span class="info-value">{ value_or_na(&record.contact_no) }</span>
                </div>
                <div class="info-item">
                    <span class="info-label">{"Department"}</span>
                    <span class="info-value">
                        { record.department.clone().unwrap_or_else(|| "Not specified".to_string()) }
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
                { if let Some(license_no) = &record.license_no {
                    html! {
                        <div class="info-item">
                            <span class="info-label">{"License No."}</span>
                            <span class="info-value">{ license_no }</span>
                        </div>
                    }
                } else {
                    html! {}
                }}
                { if let Some(assigned_doctor_id) = &record.assigned_doctor_id {
                    html! {
                        <div class="info-item">
                            <span class="info-label">{"Assigned Doctor"}</span>
                            <span class="info-value">{ assigned_doctor_id }</span>
                        </div>
                    }
                } else {
                    html! {}
                }}
                <div class="info-item">
                    <span class="info-label">{"Hired On"}</span>
                    <span class="info-value">{ format_timestamp_for_display(&record.created_at) }</span>
                </div>
            </div>

            <div class="staff-actions">
                <button class="action-button edit-button" onclick={on_edit}>
                    {"Edit"}
                </button>
                <button class="action-button deactivate-button" onclick={on_deactivate}>
                    {"Deactivate"}
                </button>
            </div>
        </div>
    }
}

pub(crate) fn value_or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        "N/A"
    } else {
        value
    }
}

pub(crate) fn clinic_badge(clinic: Option<ClinicId>) -> Html {
    match clinic {
        Some(clinic) => {
            let class = match clinic {
                ClinicId::Mnl => "clinic-badge manila",
                ClinicId::Cdo => "clinic-badge cdo",
            };
            html! { <span class={class}>{ clinic.as_str() }</span> }
        }
        None => html! {},
    }
}

pub(crate) fn role_badge(record: &StaffRecord) -> Html {
    let class = if record.is_doctor() {
        "role-badge role-doctor"
    } else {
        "role-badge role-secretary"
    };
    html! { <span class={class}>{ record.role.as_str() }</span> }
}

/// Clinic to preselect in the form: the edited record's own clinic, or
/// the view's clinic outside the combined scope.
fn form_clinic(editing: &Option<StaffRecord>, scope: RosterScope) -> Option<ClinicId> {
    match editing {
        Some(record) => record.clinic.or(match scope {
            RosterScope::Single(clinic) => Some(clinic),
            RosterScope::Combined => Some(ClinicId::Mnl),
        }),
        None => match scope {
            RosterScope::Single(clinic) => Some(clinic),
            RosterScope::Combined => None,
        },
    }
}

fn create_request(input: &StaffFormInput, scope: RosterScope) -> CreateStaffRequest {
    let clinic_id = input.clinic.unwrap_or(match scope {
        RosterScope::Single(clinic) => clinic,
        RosterScope::Combined => ClinicId::Mnl,
    });

    CreateStaffRequest {
        clinic_id,
        full_name: input.full_name.trim().to_string(),
        email: input.email.trim().to_string(),
        contact_no: input.contact_no.trim().to_string(),
        role: input.role,
        specialization: normalize_optional(&input.specialization),
        license_no: normalize_optional(&input.license_no),
        department: normalize_optional(&input.department),
        assigned_doctor_id: normalize_optional(&input.assigned_doctor_id),
    }
}

fn update_request(input: &StaffFormInput) -> UpdateStaffRequest {
    UpdateStaffRequest {
        full_name: Some(input.full_name.trim().to_string()),
        email: Some(input.email.trim().to_string()),
        contact_no: Some(input.contact_no.trim().to_string()),
        specialization: normalize_optional(&input.specialization),
        license_no: normalize_optional(&input.license_no),
        department: normalize_optional(&input.department),
        assigned_doctor_id: normalize_optional(&input.assigned_doctor_id),
    }
}
