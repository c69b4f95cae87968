use yew::prelude::*;
use shared::{AdminSession, ClinicId, RosterScope};
use std::str::FromStr;
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use crate::components::active_staff::ActiveStaff;
use crate::components::inactive_staff::InactiveStaff;
use crate::components::revenue_report::RevenueReportView;
use crate::components::statistics_dashboard::StatisticsDashboard;
use crate::hooks::use_revenue::{use_revenue, DatePreset, RevenueState, UseRevenueActions};
use crate::hooks::use_statistics::use_statistics;
use crate::services::api::ApiClient;

#[derive(Clone, Copy, PartialEq)]
enum DashboardTab {
    Statistics,
    Active,
    Inactive,
    Revenue,
}

#[derive(Properties, PartialEq)]
pub struct AdminDashboardProps {
    pub api_client: ApiClient,
    pub session: AdminSession,
    pub on_logout: Callback<()>,
}

/// The administration console shell: header with the signed-in admin,
/// logout confirmation, tab bar and the per-tab content. Staff views
/// run in the combined scope and report mutations back so statistics
/// stay current.
#[function_component(AdminDashboard)]
pub fn admin_dashboard(props: &AdminDashboardProps) -> Html {
    let active_tab = use_state(|| DashboardTab::Statistics);
    let show_logout_confirm = use_state(|| false);

    let statistics = use_statistics(&props.api_client);
    let revenue = use_revenue(&props.api_client);

    let on_tab_select = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: DashboardTab| {
            active_tab.set(tab);
        })
    };

    let open_logout_confirm = {
        let show_logout_confirm = show_logout_confirm.clone();
        Callback::from(move |_: MouseEvent| {
            show_logout_confirm.set(true);
        })
    };

    let close_logout_confirm = {
        let show_logout_confirm = show_logout_confirm.clone();
        Callback::from(move |_: MouseEvent| {
            show_logout_confirm.set(false);
        })
    };

    let stop_propagation = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_logout_confirmed = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| {
            on_logout.emit(());
        })
    };

    let on_refresh_all = {
        let refresh = statistics.actions.refresh.clone();
        Callback::from(move |_: MouseEvent| {
            refresh.emit(());
        })
    };

    let on_back_to_filters = {
        let back_to_filters = revenue.actions.back_to_filters.clone();
        Callback::from(move |_: MouseEvent| {
            back_to_filters.emit(());
        })
    };

    let on_export_csv = {
        let export_csv = revenue.actions.export_csv.clone();
        Callback::from(move |_: ()| {
            export_csv.emit(());
        })
    };

    let (section_title, section_subtitle) = match *active_tab {
        DashboardTab::Statistics => ("Dashboard", "Visual overview of clinic data"),
        DashboardTab::Active => (
            "Active Staff Management",
            "All Staff - Manila & Cagayan de Oro Clinics",
        ),
        DashboardTab::Inactive => (
            "Inactive Staff",
            "All Staff - Manila & Cagayan de Oro Clinics",
        ),
        DashboardTab::Revenue => ("Revenue Report", "Generate and view revenue reports"),
    };

    html! {
        <div class="admin-dashboard-container">
            <header class="admin-header">
                <div class="header-left">
                    <div>
                        <h1 class="admin-header-title">{"ABC Clinics - Administration Dashboard"}</h1>
                        <p class="admin-header-subtitle">{"Comprehensive management system for clinics"}</p>
                    </div>
                </div>

                <div class="header-right">
                    <div class="admin-user-info">
                        <div class="admin-user-details">
                            <span class="admin-user-name">{ &props.session.profile.full_name }</span>
                            <span class="admin-user-role">{ &props.session.profile.role }</span>
                        </div>
                    </div>
                    <button class="logout-button" title="Logout" onclick={open_logout_confirm}>
                        {"Logout"}
                    </button>
                </div>
            </header>

            { if *show_logout_confirm {
                html! {
                    <div class="logout-confirm-overlay" onclick={close_logout_confirm.clone()}>
                        <div class="logout-confirm-card" onclick={stop_propagation}>
                            <div class="logout-confirm-header">
                                <h3 class="logout-confirm-title">{"Confirm Logout"}</h3>
                                <button class="logout-confirm-close" onclick={close_logout_confirm.clone()}>
                                    {"\u{d7}"}
                                </button>
                            </div>

                            <div class="logout-confirm-content">
                                <p>{"Are you sure you want to logout?"}</p>
                                <p class="logout-user-info">
                                    {"Logging out as: "}
                                    <strong>{ &props.session.profile.full_name }</strong>
                                </p>
                            </div>

                            <div class="logout-confirm-actions">
                                <button class="logout-cancel-button" onclick={close_logout_confirm}>
                                    {"Cancel"}
                                </button>
                                <button class="logout-confirm-button" onclick={on_logout_confirmed}>
                                    {"Yes, Logout"}
                                </button>
                            </div>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}

            <div class="admin-tabs">
                { tab_button("Dashboard", DashboardTab::Statistics, *active_tab, &on_tab_select) }
                { tab_button("Active Staff", DashboardTab::Active, *active_tab, &on_tab_select) }
                { tab_button("Inactive Staff", DashboardTab::Inactive, *active_tab, &on_tab_select) }
                { tab_button("Revenue Report", DashboardTab::Revenue, *active_tab, &on_tab_select) }
            </div>

            <div class="admin-content">
                { if let Some(error) = &statistics.state.error {
                    html! { <div class="snackbar error">{ error }</div> }
                } else {
                    html! {}
                }}
                { if let Some(error) = &revenue.state.error {
                    html! { <div class="snackbar error">{ error }</div> }
                } else {
                    html! {}
                }}

                <div class="admin-section">
                    <div class="section-header">
                        <h2 class="section-title">
                            { section_title }
                            <small class="section-subtitle">{ section_subtitle }</small>
                        </h2>
                        { if *active_tab == DashboardTab::Active {
                            html! {
                                <button class="action-button primary-button" onclick={on_refresh_all}>
                                    {"Refresh All"}
                                </button>
                            }
                        } else {
                            html! {}
                        }}
                        { if *active_tab == DashboardTab::Revenue && revenue.state.show_report {
                            html! {
                                <button class="action-button secondary-button" onclick={on_back_to_filters}>
                                    {"Back to Filters"}
                                </button>
                            }
                        } else {
                            html! {}
                        }}
                    </div>

                    { if statistics.state.loading {
                        html! {
                            <div class="loading-container">
                                <div class="loading-spinner"></div>
                                <p class="loading-text">{"Loading all data..."}</p>
                            </div>
                        }
                    } else {
                        match *active_tab {
                            DashboardTab::Statistics => html! {
                                <StatisticsDashboard
                                    overview={statistics.state.overview}
                                    revenue_report={revenue.state.report.clone()}
                                    on_refresh={statistics.actions.refresh.clone()}
                                />
                            },
                            DashboardTab::Active => html! {
                                <ActiveStaff
                                    api_client={props.api_client.clone()}
                                    scope={RosterScope::Combined}
                                    on_staff_updated={statistics.actions.refresh.clone()}
                                />
                            },
                            DashboardTab::Inactive => html! {
                                <InactiveStaff
                                    api_client={props.api_client.clone()}
                                    scope={RosterScope::Combined}
                                    on_staff_updated={statistics.actions.refresh.clone()}
                                />
                            },
                            DashboardTab::Revenue => {
                                if revenue.state.show_report {
                                    if revenue.state.loading {
                                        html! {
                                            <div class="loading-container">
                                                <div class="loading-spinner"></div>
                                                <p class="loading-text">{"Generating revenue report..."}</p>
                                            </div>
                                        }
                                    } else if let Some(report) = &revenue.state.report {
                                        html! {
                                            <RevenueReportView
                                                report={report.clone()}
                                                on_export={on_export_csv}
                                            />
                                        }
                                    } else {
                                        html! {
                                            <div class="empty-state">
                                                <div class="empty-state-icon">{"\u{1F4CA}"}</div>
                                                <p class="empty-state-text">{"No revenue data available"}</p>
                                                <p class="empty-state-subtext">{"Try generating a report with different filters"}</p>
                                            </div>
                                        }
                                    }
                                } else {
                                    revenue_filters(&revenue.state, &revenue.actions)
                                }
                            }
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

fn tab_button(
    label: &str,
    tab: DashboardTab,
    current: DashboardTab,
    on_select: &Callback<DashboardTab>,
) -> Html {
    let onclick = {
        let on_select = on_select.clone();
        Callback::from(move |_: MouseEvent| {
            on_select.emit(tab);
        })
    };

    html! {
        <button class={classes!("admin-tab", (tab == current).then_some("active"))} onclick={onclick}>
            { label }
        </button>
    }
}

fn revenue_filters(state: &RevenueState, actions: &UseRevenueActions) -> Html {
    let on_start_date_change = {
        let set_start_date = actions.set_start_date.clone();
        Callback::from(move |e: Event| {
            set_start_date.emit(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_end_date_change = {
        let set_end_date = actions.set_end_date.clone();
        Callback::from(move |e: Event| {
            set_end_date.emit(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_clinic_change = {
        let set_clinic_selection = actions.set_clinic_selection.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            set_clinic_selection.emit(ClinicId::from_str(&value).ok());
        })
    };

    let preset_button = |label: &'static str, preset: DatePreset| {
        let apply_preset = actions.apply_preset.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            apply_preset.emit(preset);
        });
        html! {
            <button type="button" class="preset-button" onclick={onclick}>{ label }</button>
        }
    };

    let on_generate = {
        let generate = actions.generate.clone();
        Callback::from(move |_: MouseEvent| {
            generate.emit(());
        })
    };

    let selected_clinic = state.query.clinic_ids.first().copied();

    html! {
        <div class="revenue-filters-section">
            <div class="revenue-filters-card">
                <div class="revenue-header">
                    <h3 class="revenue-title">{"Revenue Report Generator"}</h3>
                    <p class="revenue-description">
                        {"Generate detailed revenue reports for selected date range and clinics"}
                    </p>
                </div>

                <div class="revenue-filters-grid">
                    <div class="filter-group">
                        <div class="preset-row">
                            <span class="preset-label">{"Quick Filter:"}</span>
                            { preset_button("Last 7 Days", DatePreset::Last7Days) }
                            { preset_button("Last 30 Days", DatePreset::Last30Days) }
                            { preset_button("This Month", DatePreset::ThisMonth) }
                        </div>

                        <div class="filter-item">
                            <label class="filter-label">{"Start Date"}</label>
                            <input
                                type="date"
                                class="filter-input"
                                value={state.query.start_date.clone()}
                                onchange={on_start_date_change}
                            />
                        </div>

                        <div class="filter-item">
                            <label class="filter-label">{"End Date"}</label>
                            <input
                                type="date"
                                class="filter-input"
                                value={state.query.end_date.clone()}
                                onchange={on_end_date_change}
                            />
                        </div>

                        <div class="filter-item">
                            <label class="filter-label">{"Clinic Selection"}</label>
                            <select class="filter-select" onchange={on_clinic_change}>
                                <option value="" selected={selected_clinic.is_none()}>
                                    {"All Clinics (Manila + CDO)"}
                                </option>
                                <option value="MNL" selected={selected_clinic == Some(ClinicId::Mnl)}>
                                    {"Manila Clinic Only"}
                                </option>
                                <option value="CDO" selected={selected_clinic == Some(ClinicId::Cdo)}>
                                    {"Cagayan de Oro Clinic Only"}
                                </option>
                            </select>
                        </div>
                    </div>

                    <div class="filter-info">
                        <div class="info-card">
                            <div class="info-content">
                                <h4 class="info-title">{"Report Details"}</h4>
                                <p class="info-text">
                                    {"Select a date range to generate revenue report. Reports include:"}
                                </p>
                                <ul class="info-list">
                                    <li>{"Daily revenue per doctor"}</li>
                                    <li>{"Total appointments count"}</li>
                                    <li>{"Clinic-wise breakdown"}</li>
                                    <li>{"CSV export functionality"}</li>
                                </ul>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="filter-actions">
                    <button
                        class="filter-button generate-button"
                        onclick={on_generate}
                        disabled={state.loading}
                    >
                        { if state.loading { "Generating Report..." } else { "Generate Revenue Report" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
