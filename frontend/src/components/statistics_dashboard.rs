use yew::prelude::*;
use shared::{ClinicId, RevenueReport};
use crate::services::format::format_peso;
use crate::services::stats::{rank_doctors, ClinicStatistics, StatisticsOverview};

#[derive(Properties, PartialEq)]
pub struct StatisticsDashboardProps {
    pub overview: StatisticsOverview,
    /// Last generated revenue report, if any. Feeds the top-doctors
    /// ranking; the section is hidden until a report exists.
    #[prop_or_default]
    pub revenue_report: Option<RevenueReport>,
    pub on_refresh: Callback<()>,
}

/// Visual overview of both clinics: staff distribution bar chart, the
/// active-staff-by-clinic pie, summary counts, per-clinic cards and the
/// top-doctors ranking.
#[function_component(StatisticsDashboard)]
pub fn statistics_dashboard(props: &StatisticsDashboardProps) -> Html {
    let combined = props.overview.combined;

    let on_refresh_click = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| {
            on_refresh.emit(());
        })
    };

    html! {
        <div class="statistics-dashboard">
            <div class="stats-section combined-stats">
                <div class="graph-header">
                    <h3 class="section-title">{"Clinics Overview"}</h3>
                    <p class="graph-subtitle">{"Staff distribution across Manila and CDO clinics"}</p>
                </div>

                <div class="graphs-grid">
                    <div class="graph-card bar-chart-card">
                        <div class="graph-card-header">
                            <h4 class="graph-title">{"Staff Distribution"}</h4>
                            <p class="graph-description">{"Number of staff members by category"}</p>
                        </div>
                        { distribution_chart(&combined) }
                    </div>

                    <div class="graph-card pie-chart-card">
                        <div class="graph-card-header">
                            <h4 class="graph-title">{"Active Staff by Clinic"}</h4>
                            <p class="graph-description">{"Comparison between Manila and CDO clinics"}</p>
                        </div>
                        { comparison_chart(&props.overview) }
                    </div>
                </div>

                <div class="stats-summary">
                    { summary_item("Total Active Staff", combined.total_active) }
                    { summary_item("Active Doctors", combined.doctors) }
                    { summary_item("Active Secretaries", combined.secretaries) }
                    { summary_item("Inactive Staff", combined.inactive) }
                    { summary_item("Total All Staff", combined.total) }
                </div>
            </div>

            <div class="clinic-stats-grid">
                { clinic_section(ClinicId::Mnl, &props.overview.mnl) }
                { clinic_section(ClinicId::Cdo, &props.overview.cdo) }
            </div>

            { if let Some(report) = &props.revenue_report {
                top_doctors_section(report)
            } else {
                html! {}
            }}

            <div class="statistics-actions">
                <button class="action-button primary-button" onclick={on_refresh_click}>
                    {"Refresh Statistics"}
                </button>
            </div>
        </div>
    }
}

fn distribution_chart(stats: &ClinicStatistics) -> Html {
    let max = [
        stats.total_active,
        stats.doctors,
        stats.secretaries,
        stats.inactive,
        stats.total,
    ]
    .into_iter()
    .max()
    .unwrap_or(0);

    html! {
        <div class="chart-container">
            <div class="chart-bar-group">
                { bar_row("Active Staff", stats.total_active, max, "active-bar",
                    format!("{:.1}%", stats.active_percent())) }
                { bar_row("Doctors", stats.doctors, max, "doctor-bar",
                    format!("{:.1}% of active", stats.doctor_percent())) }
                { bar_row("Secretaries", stats.secretaries, max, "secretary-bar",
                    format!("{:.1}% of active", stats.secretary_percent())) }
                { bar_row("Inactive", stats.inactive, max, "inactive-bar",
                    format!("{:.1}%", stats.inactive_percent())) }
                { bar_row("Total Staff", stats.total, max, "total-bar", "100%".to_string()) }
            </div>
        </div>
    }
}

fn bar_row(label: &str, value: u32, max: u32, bar_class: &str, percentage: String) -> Html {
    let width = if max == 0 {
        0.0
    } else {
        value as f64 / max as f64 * 100.0
    };

    html! {
        <div class="chart-bar-item">
            <div class="chart-bar-label">{ label }</div>
            <div class="chart-bar-container">
                <div
                    class={classes!("chart-bar", bar_class.to_string())}
                    style={format!("width: {width}%")}
                >
                    <span class="chart-bar-value">{ value }</span>
                </div>
            </div>
            <div class="chart-bar-percentage">{ percentage }</div>
        </div>
    }
}

const MANILA_COLOR: &str = "#3498db";
const CDO_COLOR: &str = "#9b59b6";

fn comparison_chart(overview: &StatisticsOverview) -> Html {
    let manila_total = overview.mnl.total_active;
    let cdo_total = overview.cdo.total_active;
    let total = manila_total + cdo_total;

    let manila_percentage = if total == 0 {
        0.0
    } else {
        manila_total as f64 / total as f64 * 100.0
    };
    let cdo_percentage = if total == 0 { 0.0 } else { 100.0 - manila_percentage };

    let manila_degrees = manila_percentage / 100.0 * 360.0;
    let circle_style = format!(
        "background: conic-gradient({MANILA_COLOR} 0deg {manila_degrees}deg, {CDO_COLOR} {manila_degrees}deg 360deg)"
    );

    html! {
        <div class="pie-chart-container">
            <div class="pie-chart">
                <div class="pie-chart-visual">
                    <div class="pie-chart-circle" style={circle_style}>
                        <div class="pie-chart-center">
                            <div class="pie-center-value">{ total }</div>
                            <div class="pie-center-label">{"Total Active"}</div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="pie-chart-legend">
                <div class="legend-item">
                    <div class="legend-color manila-color" style={format!("background: {MANILA_COLOR}")}></div>
                    <div class="legend-text">
                        <span class="legend-label">{"Manila Clinic"}</span>
                        <span class="legend-value">
                            { format!("{} ({:.1}%)", manila_total, manila_percentage) }
                        </span>
                    </div>
                </div>
                <div class="legend-item">
                    <div class="legend-color cdo-color" style={format!("background: {CDO_COLOR}")}></div>
                    <div class="legend-text">
                        <span class="legend-label">{"CDO Clinic"}</span>
                        <span class="legend-value">
                            { format!("{} ({:.1}%)", cdo_total, cdo_percentage) }
                        </span>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn summary_item(label: &str, value: u32) -> Html {
    html! {
        <div class="summary-item">
            <div class="summary-label">{ label }</div>
            <div class="summary-value">{ value }</div>
        </div>
    }
}

fn clinic_section(clinic: ClinicId, stats: &ClinicStatistics) -> Html {
    let section_class = match clinic {
        ClinicId::Mnl => "clinic-section manila",
        ClinicId::Cdo => "clinic-section cdo",
    };

    html! {
        <div class={section_class}>
            <div class="clinic-header">
                <h3 class="clinic-title">
                    <span class="clinic-badge">{ clinic.as_str() }</span>
                    { format!("{} Clinic", clinic.display_name()) }
                </h3>
            </div>
            <div class="clinic-cards">
                <div class="clinic-card">
                    <div class="card-number">{ stats.total_active }</div>
                    <div class="card-label">{"Active Staff"}</div>
                </div>
                <div class="clinic-card">
                    <div class="card-number">{ stats.doctors }</div>
                    <div class="card-label">{"Doctors"}</div>
                </div>
                <div class="clinic-card">
                    <div class="card-number">{ stats.secretaries }</div>
                    <div class="card-label">{"Secretaries"}</div>
                </div>
                <div class="clinic-card">
                    <div class="card-number">{ stats.inactive }</div>
                    <div class="card-label">{"Inactive"}</div>
                </div>
            </div>
        </div>
    }
}

/// Top five earners per clinic, ranked from the last generated report's
/// daily rows.
fn top_doctors_section(report: &RevenueReport) -> Html {
    html! {
        <div class="stats-section top-doctors-section">
            <div class="graph-header">
                <h3 class="section-title">{"Top Doctors by Revenue"}</h3>
                <p class="graph-subtitle">
                    { format!(
                        "Highest earners per clinic from {} to {}",
                        report.date_range.start_date, report.date_range.end_date
                    )}
                </p>
            </div>

            <div class="top-doctors-grid">
                { for report.clinics.values().map(top_doctors_card) }
            </div>
        </div>
    }
}

fn top_doctors_card(clinic: &shared::ClinicRevenue) -> Html {
    let rankings = rank_doctors(clinic);

    html! {
        <div class="graph-card top-doctors-card">
            <div class="graph-card-header">
                <h4 class="graph-title">{ format!("Clinic {}", clinic.clinic_id) }</h4>
            </div>
            { if rankings.is_empty() {
                html! { <p class="empty-state-subtext">{"No revenue recorded for this range"}</p> }
            } else {
                html! {
                    <ol class="top-doctors-list">
                        { for rankings.iter().map(|ranking| html! {
                            <li class="top-doctor-item" key={ranking.doctor_id.clone()}>
                                <span class="top-doctor-name">{ &ranking.doctor_name }</span>
                                <span class="top-doctor-revenue">{ format_peso(ranking.total_revenue) }</span>
                            </li>
                        })}
                    </ol>
                }
            }}
        </div>
    }
}
