use yew::prelude::*;
use futures::future::join;
use shared::{
    ClinicId, CreateStaffRequest, RosterScope, StaffRecord, StaffStatus, UpdateStaffRequest,
};
use wasm_bindgen_futures::spawn_local;
use crate::services::api::{ApiClient, ApiError};
use crate::services::logging::Logger;
use crate::services::roster::{
    apply_filters, merge_rosters, sort_by_full_name, ClinicFilter, FilterState, RoleFilter,
};

const COMPONENT: &str = "use_roster";

/// Snapshot of one roster view: the merged records, the filtered
/// display list derived from them, the popup state and the
/// banner/loading flags. Popup state lives here because only the
/// mutation outcome decides when a popup closes.
#[derive(Clone)]
pub struct RosterViewState {
    pub records: Vec<StaffRecord>,
    pub filtered: Vec<StaffRecord>,
    pub filters: FilterState,
    pub loading: bool,
    /// A mutation is in flight; popups disable their buttons
    pub saving: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    /// Create/edit form popup
    pub show_form: bool,
    /// Record being edited; `None` while creating
    pub editing: Option<StaffRecord>,
    /// Record awaiting deactivate (active view) or restore (inactive
    /// view) confirmation
    pub confirm_target: Option<StaffRecord>,
    /// Reason typed into the deactivation dialog
    pub deactivation_reason: String,
}

#[derive(Clone)]
pub struct UseRosterActions {
    pub reload: Callback<()>,
    pub set_search_term: Callback<String>,
    pub set_clinic_filter: Callback<ClinicFilter>,
    pub set_role_filter: Callback<RoleFilter>,
    pub clear_filters: Callback<()>,
    pub open_create_form: Callback<()>,
    pub open_edit_form: Callback<StaffRecord>,
    pub close_form: Callback<()>,
    pub request_confirm: Callback<StaffRecord>,
    pub cancel_confirm: Callback<()>,
    pub set_deactivation_reason: Callback<String>,
    pub create_staff: Callback<CreateStaffRequest>,
    /// The record being edited plus the update payload
    pub update_staff: Callback<(StaffRecord, UpdateStaffRequest)>,
    /// The record plus the reason typed into the confirmation dialog
    pub deactivate_staff: Callback<(StaffRecord, String)>,
    pub restore_staff: Callback<StaffRecord>,
}

pub struct UseRosterResult {
    pub state: RosterViewState,
    pub actions: UseRosterActions,
}

/// Roster state and mutations for one staff view (active or inactive).
///
/// Every successful mutation triggers a full reload of the current
/// scope rather than patching local state; the service owns record
/// shape and ordering, the console only displays it. Failed mutations
/// leave the triggering popup open so the input can be corrected.
/// `on_mutated` fires after each successful mutation so the dashboard
/// can refresh its statistics.
#[hook]
pub fn use_roster(
    api_client: &ApiClient,
    scope: RosterScope,
    status: StaffStatus,
    on_mutated: Callback<()>,
) -> UseRosterResult {
    let records = use_state(Vec::<StaffRecord>::new);
    let filters = use_state(FilterState::default);
    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);
    let show_form = use_state(|| false);
    let editing = use_state(|| None::<StaffRecord>);
    let confirm_target = use_state(|| None::<StaffRecord>);
    let deactivation_reason = use_state(String::new);

    let reload = {
        let api_client = api_client.clone();
        let records = records.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback(scope, move |_: (), scope| {
            let api_client = api_client.clone();
            let records = records.clone();
            let loading = loading.clone();
            let error = error.clone();
            let scope = *scope;

            spawn_local(async move {
                loading.set(true);

                match load_rosters(&api_client, scope, status).await {
                    Ok(loaded) => {
                        Logger::debug_with_component(
                            COMPONENT,
                            &format!("Loaded {} {} staff records", loaded.len(), status.as_str()),
                        );
                        records.set(loaded);
                        error.set(None);
                    }
                    Err(e) => {
                        let prefix = match status {
                            StaffStatus::Active => "Failed to load staff data",
                            StaffStatus::Inactive => "Failed to load inactive staff",
                        };
                        Logger::error_with_component(COMPONENT, &format!("{}: {}", prefix, e));
                        // Keep whatever was on screen; only the banner changes
                        error.set(Some(format!("{}: {}", prefix, e)));
                    }
                }

                loading.set(false);
            });
        })
    };

    let set_search_term = {
        let filters = filters.clone();
        use_callback((), move |term: String, _| {
            let mut next = (*filters).clone();
            next.search_term = term;
            filters.set(next);
        })
    };

    let set_clinic_filter = {
        let filters = filters.clone();
        use_callback((), move |clinic_filter: ClinicFilter, _| {
            let mut next = (*filters).clone();
            next.clinic_filter = clinic_filter;
            filters.set(next);
        })
    };

    let set_role_filter = {
        let filters = filters.clone();
        use_callback((), move |role_filter: RoleFilter, _| {
            let mut next = (*filters).clone();
            next.role_filter = role_filter;
            filters.set(next);
        })
    };

    let clear_filters = {
        let filters = filters.clone();
        use_callback((), move |_: (), _| {
            filters.set(FilterState::default());
        })
    };

    let open_create_form = {
        let show_form = show_form.clone();
        let editing = editing.clone();
        use_callback((), move |_: (), _| {
            editing.set(None);
            show_form.set(true);
        })
    };

    let open_edit_form = {
        let show_form = show_form.clone();
        let editing = editing.clone();
        use_callback((), move |record: StaffRecord, _| {
            editing.set(Some(record));
            show_form.set(true);
        })
    };

    let close_form = {
        let show_form = show_form.clone();
        let editing = editing.clone();
        use_callback((), move |_: (), _| {
            show_form.set(false);
            editing.set(None);
        })
    };

    let request_confirm = {
        let confirm_target = confirm_target.clone();
        let deactivation_reason = deactivation_reason.clone();
        use_callback((), move |record: StaffRecord, _| {
            deactivation_reason.set(String::new());
            confirm_target.set(Some(record));
        })
    };

    let cancel_confirm = {
        let confirm_target = confirm_target.clone();
        use_callback((), move |_: (), _| {
            confirm_target.set(None);
        })
    };

    let set_deactivation_reason = {
        let deactivation_reason = deactivation_reason.clone();
        use_callback((), move |reason: String, _| {
            deactivation_reason.set(reason);
        })
    };

    let create_staff = {
        let api_client = api_client.clone();
        let saving = saving.clone();
        let error = error.clone();
        let success = success.clone();
        let show_form = show_form.clone();
        let editing = editing.clone();
        let reload = reload.clone();

        use_callback(on_mutated.clone(), move |request: CreateStaffRequest, on_mutated| {
            let api_client = api_client.clone();
            let saving = saving.clone();
            let error = error.clone();
            let success = success.clone();
            let show_form = show_form.clone();
            let editing = editing.clone();
            let reload = reload.clone();
            let on_mutated = on_mutated.clone();

            spawn_local(async move {
                saving.set(true);
                match api_client.create_staff(&request).await {
                    Ok(response) => {
                        let password = response
                            .initial_password
                            .unwrap_or_else(|| "generated".to_string());
                        flash_success(
                            &success,
                            format!(
                                "Staff created successfully in {} clinic. Initial password: {}",
                                request.clinic_id.display_name(),
                                password
                            ),
                        );
                        show_form.set(false);
                        editing.set(None);
                        reload.emit(());
                        on_mutated.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Error creating staff: {}", e),
                        );
                        error.set(Some(e.to_string()));
                    }
                }
                saving.set(false);
            });
        })
    };

    let update_staff = {
        let api_client = api_client.clone();
        let saving = saving.clone();
        let error = error.clone();
        let success = success.clone();
        let show_form = show_form.clone();
        let editing = editing.clone();
        let reload = reload.clone();

        use_callback(
            (scope, on_mutated.clone()),
            move |(record, request): (StaffRecord, UpdateStaffRequest), (scope, on_mutated)| {
                let api_client = api_client.clone();
                let saving = saving.clone();
                let error = error.clone();
                let success = success.clone();
                let show_form = show_form.clone();
                let editing = editing.clone();
                let reload = reload.clone();
                let on_mutated = on_mutated.clone();
                let clinic = target_clinic(&record, *scope);

                spawn_local(async move {
                    saving.set(true);
                    match api_client.update_staff(clinic, &record.staff_id, &request).await {
                        Ok(_) => {
                            flash_success(&success, "Staff updated successfully".to_string());
                            show_form.set(false);
                            editing.set(None);
                            reload.emit(());
                            on_mutated.emit(());
                        }
                        Err(e) => {
                            Logger::error_with_component(
                                COMPONENT,
                                &format!("Error updating staff: {}", e),
                            );
                            error.set(Some(e.to_string()));
                        }
                    }
                    saving.set(false);
                });
            },
        )
    };

    let deactivate_staff = {
        let api_client = api_client.clone();
        let saving = saving.clone();
        let error = error.clone();
        let success = success.clone();
        let confirm_target = confirm_target.clone();
        let deactivation_reason = deactivation_reason.clone();
        let reload = reload.clone();

        use_callback(
            (scope, on_mutated.clone()),
            move |(record, reason): (StaffRecord, String), (scope, on_mutated)| {
                let api_client = api_client.clone();
                let saving = saving.clone();
                let error = error.clone();
                let success = success.clone();
                let confirm_target = confirm_target.clone();
                let deactivation_reason = deactivation_reason.clone();
                let reload = reload.clone();
                let on_mutated = on_mutated.clone();
                let clinic = target_clinic(&record, *scope);

                spawn_local(async move {
                    saving.set(true);
                    match api_client.deactivate_staff(clinic, &record.staff_id, &reason).await {
                        Ok(_) => {
                            flash_success(
                                &success,
                                format!(
                                    "{} deactivated successfully from {} clinic",
                                    record.full_name,
                                    clinic.display_name()
                                ),
                            );
                            confirm_target.set(None);
                            deactivation_reason.set(String::new());
                            reload.emit(());
                            on_mutated.emit(());
                        }
                        Err(e) => {
                            Logger::error_with_component(
                                COMPONENT,
                                &format!("Error deactivating staff: {}", e),
                            );
                            error.set(Some(e.to_string()));
                        }
                    }
                    saving.set(false);
                });
            },
        )
    };

    let restore_staff = {
        let api_client = api_client.clone();
        let saving = saving.clone();
        let error = error.clone();
        let success = success.clone();
        let confirm_target = confirm_target.clone();
        let reload = reload.clone();

        use_callback(
            (scope, on_mutated.clone()),
            move |record: StaffRecord, (scope, on_mutated)| {
                let api_client = api_client.clone();
                let saving = saving.clone();
                let error = error.clone();
                let success = success.clone();
                let confirm_target = confirm_target.clone();
                let reload = reload.clone();
                let on_mutated = on_mutated.clone();
                let clinic = target_clinic(&record, *scope);

                spawn_local(async move {
                    saving.set(true);
                    match api_client.restore_staff(clinic, &record.staff_id).await {
                        Ok(_) => {
                            flash_success(
                                &success,
                                format!(
                                    "{} restored successfully to {} clinic",
                                    record.full_name,
                                    clinic.display_name()
                                ),
                            );
                            confirm_target.set(None);
                            reload.emit(());
                            on_mutated.emit(());
                        }
                        Err(e) => {
                            Logger::error_with_component(
                                COMPONENT,
                                &format!("Error restoring staff: {}", e),
                            );
                            error.set(Some(e.to_string()));
                        }
                    }
                    saving.set(false);
                });
            },
        )
    };

    // Load on mount and whenever the scope changes
    {
        let reload = reload.clone();
        use_effect_with(scope, move |_| {
            reload.emit(());
            || ()
        });
    }

    let filtered = apply_filters(&records, &filters, status);
    let state = RosterViewState {
        records: (*records).clone(),
        filtered,
        filters: (*filters).clone(),
        loading: *loading,
        saving: *saving,
        error: (*error).clone(),
        success: (*success).clone(),
        show_form: *show_form,
        editing: (*editing).clone(),
        confirm_target: (*confirm_target).clone(),
        deactivation_reason: (*deactivation_reason).clone(),
    };

    let actions = UseRosterActions {
        reload,
        set_search_term,
        set_clinic_filter,
        set_role_filter,
        clear_filters,
        open_create_form,
        open_edit_form,
        close_form,
        request_confirm,
        cancel_confirm,
        set_deactivation_reason,
        create_staff,
        update_staff,
        deactivate_staff,
        restore_staff,
    };

    UseRosterResult { state, actions }
}

/// Fetch and merge the rosters for a scope. The combined fetch is
/// all-or-nothing: both requests run concurrently and either failure
/// fails the whole load. The inactive roster is kept sorted by name.
async fn load_rosters(
    api_client: &ApiClient,
    scope: RosterScope,
    status: StaffStatus,
) -> Result<Vec<StaffRecord>, ApiError> {
    let mut merged = match scope {
        RosterScope::Combined => {
            let (mnl, cdo) = join(
                api_client.list_staff(ClinicId::Mnl, status, None),
                api_client.list_staff(ClinicId::Cdo, status, None),
            )
            .await;
            merge_rosters(vec![
                (ClinicId::Mnl, mnl?.staff),
                (ClinicId::Cdo, cdo?.staff),
            ])
        }
        RosterScope::Single(clinic) => {
            let response = api_client.list_staff(clinic, status, None).await?;
            merge_rosters(vec![(clinic, response.staff)])
        }
    };

    if status == StaffStatus::Inactive {
        sort_by_full_name(&mut merged);
    }
    Ok(merged)
}

/// Clinic a mutation should target: the record's own tag, or the
/// scope's clinic when the tag is somehow missing.
fn target_clinic(record: &StaffRecord, scope: RosterScope) -> ClinicId {
    record.clinic.unwrap_or(match scope {
        RosterScope::Single(clinic) => clinic,
        RosterScope::Combined => ClinicId::Mnl,
    })
}

/// Show a success banner and schedule its dismissal
fn flash_success(success: &UseStateHandle<Option<String>>, message: String) {
    success.set(Some(message));

    let success = success.clone();
    spawn_local(async move {
        gloo::timers::future::TimeoutFuture::new(3000).await;
        success.set(None);
    });
}
