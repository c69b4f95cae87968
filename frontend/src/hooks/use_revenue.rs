use yew::prelude::*;
use shared::{ClinicId, RevenueQuery, RevenueReport};
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;
use crate::services::csv_export::{build_revenue_csv, download_csv, REVENUE_CSV_FILENAME};
use crate::services::date_utils::{last_n_days_range, month_to_date_range, today};
use crate::services::logging::Logger;

const COMPONENT: &str = "use_revenue";

/// Quick-filter buttons above the date inputs
#[derive(Clone, Copy, PartialEq)]
pub enum DatePreset {
    Last7Days,
    Last30Days,
    ThisMonth,
}

#[derive(Clone)]
pub struct RevenueState {
    pub query: RevenueQuery,
    pub report: Option<RevenueReport>,
    /// Filters view vs. generated report view
    pub show_report: bool,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct UseRevenueActions {
    pub set_start_date: Callback<String>,
    pub set_end_date: Callback<String>,
    /// `None` queries all clinics
    pub set_clinic_selection: Callback<Option<ClinicId>>,
    pub apply_preset: Callback<DatePreset>,
    pub generate: Callback<()>,
    pub back_to_filters: Callback<()>,
    pub export_csv: Callback<()>,
}

pub struct UseRevenueResult {
    pub state: RevenueState,
    pub actions: UseRevenueActions,
}

/// Revenue report generation for the revenue tab. The query defaults
/// to the last 30 days across all clinics; nothing is fetched until
/// the administrator generates a report.
#[hook]
pub fn use_revenue(api_client: &ApiClient) -> UseRevenueResult {
    let query = use_state(RevenueQuery::default);
    let report = use_state(|| None::<RevenueReport>);
    let show_report = use_state(|| false);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let set_start_date = {
        let query = query.clone();
        use_callback((), move |start_date: String, _| {
            let mut next = (*query).clone();
            next.start_date = start_date;
            query.set(next);
        })
    };

    let set_end_date = {
        let query = query.clone();
        use_callback((), move |end_date: String, _| {
            let mut next = (*query).clone();
            next.end_date = end_date;
            query.set(next);
        })
    };

    let set_clinic_selection = {
        let query = query.clone();
        use_callback((), move |selection: Option<ClinicId>, _| {
            let mut next = (*query).clone();
            next.clinic_ids = match selection {
                Some(clinic) => vec![clinic],
                None => Vec::new(),
            };
            query.set(next);
        })
    };

    let apply_preset = {
        let query = query.clone();
        use_callback((), move |preset: DatePreset, _| {
            let (start_date, end_date) = match preset {
                DatePreset::Last7Days => last_n_days_range(today(), 7),
                DatePreset::Last30Days => last_n_days_range(today(), 30),
                DatePreset::ThisMonth => month_to_date_range(today()),
            };
            let mut next = (*query).clone();
            next.start_date = start_date;
            next.end_date = end_date;
            query.set(next);
        })
    };

    let generate = {
        let api_client = api_client.clone();
        let query = query.clone();
        let report = report.clone();
        let show_report = show_report.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |_: (), _| {
            let api_client = api_client.clone();
            let query = (*query).clone();
            let report = report.clone();
            let show_report = show_report.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.fetch_revenue(&query).await {
                    Ok(fetched) => {
                        Logger::debug_with_component(
                            COMPONENT,
                            &format!(
                                "Generated revenue report {} to {}",
                                fetched.date_range.start_date, fetched.date_range.end_date
                            ),
                        );
                        report.set(Some(fetched));
                        show_report.set(true);
                        error.set(None);
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Failed to load revenue report: {}", e),
                        );
                        error.set(Some("Failed to load revenue report".to_string()));
                    }
                }

                loading.set(false);
            });
        })
    };

    let back_to_filters = {
        let show_report = show_report.clone();
        use_callback((), move |_: (), _| {
            show_report.set(false);
        })
    };

    let export_csv = {
        let report = report.clone();
        use_callback((), move |_: (), _| {
            if let Some(current) = &*report {
                download_csv(REVENUE_CSV_FILENAME, &build_revenue_csv(current));
                Logger::info_with_component(COMPONENT, "Exported revenue report CSV");
            }
        })
    };

    let state = RevenueState {
        query: (*query).clone(),
        report: (*report).clone(),
        show_report: *show_report,
        loading: *loading,
        error: (*error).clone(),
    };

    let actions = UseRevenueActions {
        set_start_date,
        set_end_date,
        set_clinic_selection,
        apply_preset,
        generate,
        back_to_filters,
        export_csv,
    };

    UseRevenueResult { state, actions }
}
