use yew::prelude::*;
use shared::{ClinicRevenue, RevenueReport};
use crate::services::format::format_peso;

#[derive(Properties, PartialEq)]
pub struct RevenueReportViewProps {
    pub report: RevenueReport,
    pub on_export: Callback<()>,
}

/// Generated revenue report: one table per clinic with daily rows and
/// clinic totals, the overall totals table and the CSV export button.
#[function_component(RevenueReportView)]
pub fn revenue_report_view(props: &RevenueReportViewProps) -> Html {
    let report = &props.report;

    let on_download_click = {
        let on_export = props.on_export.clone();
        Callback::from(move |_: MouseEvent| {
            on_export.emit(());
        })
    };

    html! {
        <div class="report-container">
            <h2>{"ABC Clinics Revenue Report"}</h2>
            <p>
                { format!(
                    "This document summarizes revenue from {} to {}.",
                    report.date_range.start_date, report.date_range.end_date
                )}
            </p>

            { for report.clinics.values().map(clinic_table) }

            <div class="overall-total">
                <h3>{"All Clinics Total"}</h3>
                <table>
                    <thead>
                        <tr>
                            <th>{"Total Revenue"}</th>
                            <th>{"Total Appointments"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        <tr>
                            <td>{ format_peso(report.totals.overall_revenue) }</td>
                            <td>{ report.totals.total_appointments }</td>
                        </tr>
                    </tbody>
                </table>
            </div>

            <button class="download-btn" onclick={on_download_click}>
                {"Download CSV"}
            </button>
        </div>
    }
}

fn clinic_table(clinic: &ClinicRevenue) -> Html {
    html! {
        <div class="clinic-table" key={clinic.clinic_id.clone()}>
            <h3>{ format!("Clinic {}", clinic.clinic_id) }</h3>
            <table>
                <thead>
                    <tr>
                        <th>{"Doctor"}</th>
                        <th>{"Date"}</th>
                        <th>{"Revenue"}</th>
                        <th>{"Appointments"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for clinic.doctors.iter().flat_map(|doctor| {
                        doctor.daily_revenue.iter().enumerate().map(move |(i, day)| html! {
                            <tr key={format!("{}-{}", doctor.doctor_id, i)}>
                                <td>{ &doctor.doctor_name }</td>
                                <td>{ &day.date }</td>
                                <td>{ format_peso(day.revenue) }</td>
                                <td>{ day.appointment_count }</td>
                            </tr>
                        })
                    })}
                    <tr class="clinic-total">
                        <td colspan="2">{"Total"}</td>
                        <td>{ format_peso(clinic.total_revenue) }</td>
                        <td>{ clinic.total_appointments }</td>
                    </tr>
                </tbody>
            </table>
        </div>
    }
}
