use yew::prelude::*;
use futures::future::join;
use shared::ClinicId;
use wasm_bindgen_futures::spawn_local;
use crate::services::api::{ApiClient, ApiError};
use crate::services::logging::Logger;
use crate::services::stats::{ClinicStatistics, StatisticsOverview};

const COMPONENT: &str = "use_statistics";

#[derive(Clone)]
pub struct StatisticsState {
    pub overview: StatisticsOverview,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct UseStatisticsActions {
    pub refresh: Callback<()>,
}

pub struct UseStatisticsResult {
    pub state: StatisticsState,
    pub actions: UseStatisticsActions,
}

/// Staff statistics for the dashboard tab, derived from the four
/// roster fetches (active and inactive, per clinic). If any fetch
/// fails the whole overview is zeroed; an empty-but-consistent
/// dashboard beats skewed partial totals.
#[hook]
pub fn use_statistics(api_client: &ApiClient) -> UseStatisticsResult {
    let overview = use_state(StatisticsOverview::zeroed);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    let refresh = {
        let api_client = api_client.clone();
        let overview = overview.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |_: (), _| {
            let api_client = api_client.clone();
            let overview = overview.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);

                match load_overview(&api_client).await {
                    Ok(fresh) => {
                        overview.set(fresh);
                        error.set(None);
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Failed to load statistics: {}", e),
                        );
                        overview.set(StatisticsOverview::zeroed());
                        error.set(Some("Failed to load statistics".to_string()));
                    }
                }

                loading.set(false);
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let state = StatisticsState {
        overview: (*overview).clone(),
        loading: *loading,
        error: (*error).clone(),
    };

    UseStatisticsResult {
        state,
        actions: UseStatisticsActions { refresh },
    }
}

async fn load_overview(api_client: &ApiClient) -> Result<StatisticsOverview, ApiError> {
    let (mnl, cdo) = join(
        load_clinic_statistics(api_client, ClinicId::Mnl),
        load_clinic_statistics(api_client, ClinicId::Cdo),
    )
    .await;
    Ok(StatisticsOverview::new(mnl?, cdo?))
}

async fn load_clinic_statistics(
    api_client: &ApiClient,
    clinic: ClinicId,
) -> Result<ClinicStatistics, ApiError> {
    let (active, inactive) = join(
        api_client.get_active_staff(clinic),
        api_client.get_inactive_staff(clinic),
    )
    .await;
    Ok(ClinicStatistics::from_rosters(&active?.staff, &inactive?.staff))
}
