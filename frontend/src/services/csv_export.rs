//! CSV export of the revenue report. Building the text is pure; only
//! the actual download touches the browser.

use shared::RevenueReport;
use wasm_bindgen::{JsCast, JsValue};

pub const REVENUE_CSV_FILENAME: &str = "RevenueReport.csv";

/// Render a revenue report as CSV: a header, one row per
/// clinic/doctor/day, and a trailing synthetic total row. Clinics are
/// grouped in report order, doctors and days in the order the service
/// returned them.
pub fn build_revenue_csv(report: &RevenueReport) -> String {
    let mut csv = String::from("Clinic,Doctor,Date,Revenue,Appointments\n");

    for clinic in report.clinics.values() {
        for doctor in &clinic.doctors {
            for day in &doctor.daily_revenue {
                csv.push_str(&format!(
                    "{},{},{},{},{}\n",
                    clinic.clinic_id,
                    doctor.doctor_name,
                    day.date,
                    day.revenue,
                    day.appointment_count
                ));
            }
        }
    }

    csv.push_str(&format!(
        "Total,,,{},{}\n",
        report.totals.overall_revenue, report.totals.total_appointments
    ));
    csv
}

/// Offer CSV text as a browser download via a Blob object URL and a
/// synthetic anchor click.
pub fn download_csv(filename: &str, csv: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(csv));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");

    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };

    if let Ok(anchor) = document
        .create_element("a")
        .and_then(|element| element.dyn_into::<web_sys::HtmlAnchorElement>().map_err(Into::into))
    {
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();
    }

    let _ = web_sys::Url::revoke_object_url(&url);
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ClinicRevenue, DailyRevenue, DoctorRevenue, ReportDateRange, RevenueTotals};
    use std::collections::BTreeMap;

    fn sample_report() -> RevenueReport {
        let mut clinics = BTreeMap::new();
        clinics.insert(
            "MNL".to_string(),
            ClinicRevenue {
                clinic_id: "MNL".to_string(),
                doctors: vec![DoctorRevenue {
                    doctor_id: "D-001".to_string(),
                    doctor_name: "Jane Cruz".to_string(),
                    daily_revenue: vec![
                        DailyRevenue {
                            date: "2025-01-05".to_string(),
                            revenue: 4500.0,
                            appointment_count: 9,
                        },
                        DailyRevenue {
                            date: "2025-01-06".to_string(),
                            revenue: 750.5,
                            appointment_count: 2,
                        },
                    ],
                    total_revenue: 5250.5,
                    total_appointments: 11,
                }],
                total_revenue: 5250.5,
                total_appointments: 11,
            },
        );
        clinics.insert(
            "CDO".to_string(),
            ClinicRevenue {
                clinic_id: "CDO".to_string(),
                doctors: vec![DoctorRevenue {
                    doctor_id: "D-002".to_string(),
                    doctor_name: "Ana Reyes".to_string(),
                    daily_revenue: vec![DailyRevenue {
                        date: "2025-01-05".to_string(),
                        revenue: 2000.0,
                        appointment_count: 4,
                    }],
                    total_revenue: 2000.0,
                    total_appointments: 4,
                }],
                total_revenue: 2000.0,
                total_appointments: 4,
            },
        );

        RevenueReport {
            date_range: ReportDateRange {
                start_date: "2025-01-01".to_string(),
                end_date: "2025-01-31".to_string(),
            },
            clinics,
            totals: RevenueTotals {
                overall_revenue: 7250.5,
                total_appointments: 15,
            },
        }
    }

    #[test]
    fn test_csv_header_and_total_row() {
        let csv = build_revenue_csv(&sample_report());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Clinic,Doctor,Date,Revenue,Appointments");
        assert_eq!(*lines.last().unwrap(), "Total,,,7250.5,15");
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn test_csv_rows_grouped_by_clinic() {
        let csv = build_revenue_csv(&sample_report());
        let lines: Vec<&str> = csv.lines().collect();

        // Report order (clinic code ascending), then doctor, then day
        assert_eq!(lines[1], "CDO,Ana Reyes,2025-01-05,2000,4");
        assert_eq!(lines[2], "MNL,Jane Cruz,2025-01-05,4500,9");
        assert_eq!(lines[3], "MNL,Jane Cruz,2025-01-06,750.5,2");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_csv_for_empty_report() {
        let report = RevenueReport {
            date_range: ReportDateRange {
                start_date: "2025-01-01".to_string(),
                end_date: "2025-01-31".to_string(),
            },
            clinics: BTreeMap::new(),
            totals: RevenueTotals {
                overall_revenue: 0.0,
                total_appointments: 0,
            },
        };

        let csv = build_revenue_csv(&report);
        assert_eq!(csv, "Clinic,Doctor,Date,Revenue,Appointments\nTotal,,,0,0\n");
    }
}
