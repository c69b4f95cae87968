use yew::prelude::*;
use std::str::FromStr;
use shared::{ClinicId, StaffRecord, StaffRole};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::validation::{validate_staff_form, StaffFormErrors, StaffFormInput};

const COMPONENT: &str = "staff_form";

#[derive(Properties, PartialEq)]
pub struct StaffFormProps {
    pub api_client: ApiClient,
    /// Record being edited; `None` creates a new one
    #[prop_or_default]
    pub initial: Option<StaffRecord>,
    /// Clinic implied by a single-clinic view; `None` in the combined
    /// view, where the administrator picks one
    #[prop_or_default]
    pub clinic: Option<ClinicId>,
    pub combined_view: bool,
    /// Disables every input while the parent mutation is in flight
    #[prop_or_default]
    pub busy: bool,
    /// Validated form input; the parent turns it into a create or
    /// update request
    pub on_submit: Callback<StaffFormInput>,
    pub on_cancel: Callback<()>,
}

/// Create/edit form for a staff record. Validation is local and
/// field-scoped; a failed submit never leaves this component. The
/// secretary view loads the clinic's active doctors for the assignment
/// dropdown.
#[function_component(StaffForm)]
pub fn staff_form(props: &StaffFormProps) -> Html {
    let input = use_state({
        let initial = props.initial.clone();
        let clinic = props.clinic;
        move || match initial {
            Some(record) => input_from_record(&record, clinic),
            None => StaffFormInput {
                clinic,
                ..Default::default()
            },
        }
    });
    let errors = use_state(StaffFormErrors::default);
    let doctors = use_state(Vec::<StaffRecord>::new);

    let is_editing = props.initial.is_some();
    let is_doctor = input.role == StaffRole::Doctor;
    let needs_clinic = props.combined_view && !is_editing;

    // Load the assignment dropdown whenever a secretary's clinic is known
    {
        let api_client = props.api_client.clone();
        let doctors = doctors.clone();

        use_effect_with((input.role, input.clinic), move |(role, clinic)| {
            if *role == StaffRole::Secretary {
                if let Some(clinic) = *clinic {
                    let api_client = api_client.clone();
                    let doctors = doctors.clone();

                    spawn_local(async move {
                        match api_client.get_doctors(clinic).await {
                            Ok(response) => doctors.set(response.staff),
                            Err(e) => {
                                Logger::error_with_component(
                                    COMPONENT,
                                    &format!("Failed to fetch doctors: {}", e),
                                );
                            }
                        }
                    });
                }
            }
            || ()
        });
    }

    let on_clinic_change = {
        let input = input.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let mut next = (*input).clone();
            next.clinic = ClinicId::from_str(&value).ok();
            input.set(next);

            let mut next_errors = (*errors).clone();
            next_errors.clinic = None;
            errors.set(next_errors);
        })
    };

    let on_role_change = {
        let input = input.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let mut next = (*input).clone();
            next.role = StaffRole::from_str(&value).unwrap_or(StaffRole::Doctor);
            input.set(next);
        })
    };

    let on_full_name_change = {
        let input = input.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*input).clone();
            next.full_name = value;
            input.set(next);

            let mut next_errors = (*errors).clone();
            next_errors.full_name = None;
            errors.set(next_errors);
        })
    };

    let on_email_change = {
        let input = input.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*input).clone();
            next.email = value;
            input.set(next);

            let mut next_errors = (*errors).clone();
            next_errors.email = None;
            errors.set(next_errors);
        })
    };

    let on_contact_change = {
        let input = input.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*input).clone();
            next.contact_no = value;
            input.set(next);

            let mut next_errors = (*errors).clone();
            next_errors.contact_no = None;
            errors.set(next_errors);
        })
    };

    let on_specialization_change = {
        let input = input.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*input).clone();
            next.specialization = value;
            input.set(next);

            let mut next_errors = (*errors).clone();
            next_errors.specialization = None;
            errors.set(next_errors);
        })
    };

    let on_license_change = {
        let input = input.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*input).clone();
            next.license_no = value;
            input.set(next);

            let mut next_errors = (*errors).clone();
            next_errors.license_no = None;
            errors.set(next_errors);
        })
    };

    let on_assigned_doctor_change = {
        let input = input.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let mut next = (*input).clone();
            next.assigned_doctor_id = value;
            input.set(next);
        })
    };

    let on_department_change = {
        let input = input.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*input).clone();
            next.department = value;
            input.set(next);
        })
    };

    let on_form_submit = {
        let input = input.clone();
        let errors = errors.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let current = (*input).clone();
            let validation = validate_staff_form(&current, needs_clinic);
            if !validation.is_empty() {
                errors.set(validation);
                return;
            }
            on_submit.emit(current);
        })
    };

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| {
            on_cancel.emit(());
        })
    };

    let clinic_value = input
        .clinic
        .map(|clinic| clinic.as_str())
        .unwrap_or("");

    html! {
        <form class="form-grid" onsubmit={on_form_submit}>
            { if props.combined_view {
                html! {
                    <div class="form-group">
                        <label class="form-label required">{"Clinic"}</label>
                        <select
                            class={classes!("form-select", errors.clinic.is_some().then_some("error"))}
                            value={clinic_value.to_string()}
                            onchange={on_clinic_change}
                            disabled={props.busy || is_editing}
                        >
                            <option value="" selected={input.clinic.is_none()}>{"Select a clinic"}</option>
                            <option value="MNL" selected={input.clinic == Some(ClinicId::Mnl)}>{"Manila Clinic (MNL)"}</option>
                            <option value="CDO" selected={input.clinic == Some(ClinicId::Cdo)}>{"Cagayan de Oro Clinic (CDO)"}</option>
                        </select>
                        { if let Some(message) = &errors.clinic {
                            html! { <span class="form-error">{ message }</span> }
                        } else {
                            html! {}
                        }}
                        { if is_editing {
                            html! { <small class="form-hint">{"Clinic cannot be changed after creation"}</small> }
                        } else {
                            html! {}
                        }}
                    </div>
                }
            } else {
                html! {}
            }}

            <div class="form-group">
                <label class="form-label required">{"Role"}</label>
                <select
                    class="form-select"
                    value={input.role.as_str().to_string()}
                    onchange={on_role_change}
                    disabled={is_editing}
                >
                    <option value="Doctor" selected={is_doctor}>{"Doctor"}</option>
                    <option value="Secretary" selected={!is_doctor}>{"Secretary"}</option>
                </select>
                <small class="form-hint">
                    { if is_doctor {
                        "Doctors require specialization and license number"
                    } else {
                        "Secretaries can be assigned to doctors"
                    }}
                </small>
            </div>

            <div class="form-group">
                <label class="form-label required">{"Full Name"}</label>
                <input
                    type="text"
                    class={classes!("form-input", errors.full_name.is_some().then_some("error"))}
                    placeholder="Enter full name"
                    value={input.full_name.clone()}
                    onchange={on_full_name_change}
                    disabled={props.busy}
                />
                { if let Some(message) = &errors.full_name {
                    html! { <span class="form-error">{ message }</span> }
                } else {
                    html! {}
                }}
            </div>

            <div class="form-group">
                <label class="form-label required">{"Email Address"}</label>
                <input
                    type="email"
                    class={classes!("form-input", errors.email.is_some().then_some("error"))}
                    placeholder="staff@abcclinics.ph"
                    value={input.email.clone()}
                    onchange={on_email_change}
                    disabled={props.busy}
                />
                { if let Some(message) = &errors.email {
                    html! { <span class="form-error">{ message }</span> }
                } else {
                    html! {}
                }}
            </div>

            <div class="form-group">
                <label class="form-label required">{"Contact Number"}</label>
                <input
                    type="tel"
                    class={classes!("form-input", errors.contact_no.is_some().then_some("error"))}
                    placeholder="+63-XXX-XXX-XXXX"
                    value={input.contact_no.clone()}
                    onchange={on_contact_change}
                    disabled={props.busy}
                />
                { if let Some(message) = &errors.contact_no {
                    html! { <span class="form-error">{ message }</span> }
                } else {
                    html! {}
                }}
                <small class="form-hint">{"Philippines format: +63-XXX-XXX-XXXX"}</small>
            </div>

            { if is_doctor {
                html! {
                    <>
                        <div class="form-group">
                            <label class="form-label required">{"Specialization"}</label>
                            <input
                                type="text"
                                class={classes!("form-input", errors.specialization.is_some().then_some("error"))}
                                placeholder="e.g., Cardiology, Pediatrics"
                                value={input.specialization.clone()}
                                onchange={on_specialization_change}
                                disabled={props.busy}
                            />
                            { if let Some(message) = &errors.specialization {
                                html! { <span class="form-error">{ message }</span> }
                            } else {
                                html! {}
                            }}
                        </div>

                        <div class="form-group">
                            <label class="form-label required">{"License Number"}</label>
                            <input
                                type="text"
                                class={classes!("form-input", errors.license_no.is_some().then_some("error"))}
                                placeholder="e.g., PH-CRD-2024-001"
                                value={input.license_no.clone()}
                                onchange={on_license_change}
                                disabled={props.busy}
                            />
                            { if let Some(message) = &errors.license_no {
                                html! { <span class="form-error">{ message }</span> }
                            } else {
                                html! {}
                            }}
                        </div>
                    </>
                }
            } else {
                html! {
                    <div class="form-group">
                        <label class="form-label">{"Assigned Doctor"}</label>
                        <select
                            class="form-select"
                            value={input.assigned_doctor_id.clone()}
                            onchange={on_assigned_doctor_change}
                            disabled={props.busy || doctors.is_empty()}
                        >
                            <option value="" selected={input.assigned_doctor_id.is_empty()}>
                                {"Select a doctor (optional)"}
                            </option>
                            { for doctors.iter().map(|doctor| {
                                let label = match &doctor.specialization {
                                    Some(specialization) => {
                                        format!("{} ({})", doctor.full_name, specialization)
                                    }
                                    None => doctor.full_name.clone(),
                                };
                                html! {
                                    <option
                                        value={doctor.staff_id.clone()}
                                        selected={input.assigned_doctor_id == doctor.staff_id}
                                    >
                                        { label }
                                    </option>
                                }
                            })}
                        </select>
                        <small class="form-hint">
                            { match (input.clinic, doctors.is_empty()) {
                                (None, _) => "Select a clinic to load doctors".to_string(),
                                (Some(clinic), true) => format!(
                                    "No doctors available in {} clinic",
                                    clinic.display_name()
                                ),
                                (Some(_), false) => {
                                    "Optional: Assign secretary to specific doctor".to_string()
                                }
                            }}
                        </small>
                    </div>
                }
            }}

            <div class="form-group form-group-wide">
                <label class="form-label">{"Department"}</label>
                <input
                    type="text"
                    class="form-input"
                    placeholder={if is_doctor { "e.g., Cardiology Department" } else { "e.g., Administration" }}
                    value={input.department.clone()}
                    onchange={on_department_change}
                    disabled={props.busy}
                />
                <small class="form-hint">{"Optional department or unit assignment"}</small>
            </div>

            <div class="form-group form-group-wide form-actions">
                <button
                    type="button"
                    class="action-button secondary-button"
                    onclick={on_cancel_click}
                    disabled={props.busy}
                >
                    {"Cancel"}
                </button>
                <button
                    type="submit"
                    class="action-button primary-button"
                    disabled={props.busy}
                >
                    { match (props.busy, is_editing) {
                        (true, true) => "Updating...",
                        (true, false) => "Creating...",
                        (false, true) => "Update Staff",
                        (false, false) => "Create Staff",
                    }}
                </button>
            </div>
        </form>
    }
}

fn input_from_record(record: &StaffRecord, fallback_clinic: Option<ClinicId>) -> StaffFormInput {
    StaffFormInput {
        full_name: record.full_name.clone(),
        email: record.email.clone(),
        contact_no: record.contact_no.clone(),
        role: record.role,
        specialization: record.specialization.clone().unwrap_or_default(),
        license_no: record.license_no.clone().unwrap_or_default(),
        department: record.department.clone().unwrap_or_default(),
        assigned_doctor_id: record.assigned_doctor_id.clone().unwrap_or_default(),
        clinic: record.clinic.or(fallback_clinic),
    }
}
