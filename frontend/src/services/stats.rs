//! Staff statistics derived from fetched rosters, plus the per-doctor
//! revenue ranking shown on the dashboard. All derivations are pure;
//! the hooks decide when to recompute.

use shared::{ClinicRevenue, StaffRecord, StaffRole};
use std::cmp::Ordering;

/// Summary counts for one clinic (or for both combined)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClinicStatistics {
    pub total_active: u32,
    pub doctors: u32,
    pub secretaries: u32,
    pub inactive: u32,
    pub total: u32,
}

impl ClinicStatistics {
    /// Derive counts from the two fetched collections of one clinic
    pub fn from_rosters(active: &[StaffRecord], inactive: &[StaffRecord]) -> Self {
        let doctors = active.iter().filter(|r| r.role == StaffRole::Doctor).count() as u32;
        let secretaries = active
            .iter()
            .filter(|r| r.role == StaffRole::Secretary)
            .count() as u32;
        let total_active = active.len() as u32;
        let inactive = inactive.len() as u32;

        Self {
            total_active,
            doctors,
            secretaries,
            inactive,
            total: total_active + inactive,
        }
    }

    /// Pairwise sum of every field, for the combined view
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            total_active: self.total_active + other.total_active,
            doctors: self.doctors + other.doctors,
            secretaries: self.secretaries + other.secretaries,
            inactive: self.inactive + other.inactive,
            total: self.total + other.total,
        }
    }

    /// Share of records that are active, as a percentage of `total`
    pub fn active_percent(&self) -> f64 {
        percent(self.total_active, self.total)
    }

    /// Share of active staff that are doctors
    pub fn doctor_percent(&self) -> f64 {
        percent(self.doctors, self.total_active)
    }

    /// Share of active staff that are secretaries
    pub fn secretary_percent(&self) -> f64 {
        percent(self.secretaries, self.total_active)
    }

    pub fn inactive_percent(&self) -> f64 {
        percent(self.inactive, self.total)
    }
}

/// Percentage of `part` in `whole`, defined as 0 when `whole` is 0
fn percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// The dashboard's statistics state: both clinics plus the combined
/// totals. Built whole or not at all. If either clinic's fetch fails
/// the entire view falls back to [`StatisticsOverview::zeroed`] so the
/// dashboard never shows skewed partial totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatisticsOverview {
    pub mnl: ClinicStatistics,
    pub cdo: ClinicStatistics,
    pub combined: ClinicStatistics,
}

impl StatisticsOverview {
    pub fn new(mnl: ClinicStatistics, cdo: ClinicStatistics) -> Self {
        Self {
            mnl,
            cdo,
            combined: mnl.combine(&cdo),
        }
    }

    /// All-zero statistics, the fallback when a clinic fetch fails
    pub fn zeroed() -> Self {
        Self::default()
    }
}

/// One row of the top-doctors list
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorRanking {
    pub doctor_id: String,
    pub doctor_name: String,
    pub total_revenue: f64,
}

/// Rank one clinic's doctors by revenue over the reported range.
///
/// Totals are summed from the daily rows rather than read from the
/// report's own total fields, so the ranking stays right even if the
/// service's precomputed totals drift. Descending, top five; ties keep
/// their encounter order (stable sort).
pub fn rank_doctors(clinic: &ClinicRevenue) -> Vec<DoctorRanking> {
    let mut rankings: Vec<DoctorRanking> = clinic
        .doctors
        .iter()
        .map(|doctor| DoctorRanking {
            doctor_id: doctor.doctor_id.clone(),
            doctor_name: doctor.doctor_name.clone(),
            total_revenue: doctor.daily_revenue.iter().map(|day| day.revenue).sum(),
        })
        .collect();

    rankings.sort_by(|a, b| {
        b.total_revenue
            .partial_cmp(&a.total_revenue)
            .unwrap_or(Ordering::Equal)
    });
    rankings.truncate(5);
    rankings
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ClinicId, DailyRevenue, DoctorRevenue};

    fn staff(role: StaffRole) -> StaffRecord {
        StaffRecord {
            staff_id: "X-000".to_string(),
            full_name: "Test Staff".to_string(),
            email: "x@abcclinics.ph".to_string(),
            contact_no: "09170000000".to_string(),
            role,
            specialization: None,
            license_no: None,
            department: None,
            assigned_doctor_id: None,
            clinic: Some(ClinicId::Mnl),
            created_at: "2025-01-05T08:00:00+08:00".to_string(),
            updated_at: None,
            deactivated_at: None,
            deactivation_reason: None,
        }
    }

    fn doctor_revenue(id: &str, name: &str, days: &[f64]) -> DoctorRevenue {
        DoctorRevenue {
            doctor_id: id.to_string(),
            doctor_name: name.to_string(),
            daily_revenue: days
                .iter()
                .enumerate()
                .map(|(i, revenue)| DailyRevenue {
                    date: format!("2025-01-{:02}", i + 1),
                    revenue: *revenue,
                    appointment_count: 1,
                })
                .collect(),
            total_revenue: days.iter().sum(),
            total_appointments: days.len() as u32,
        }
    }

    #[test]
    fn test_counts_from_rosters() {
        let active = vec![
            staff(StaffRole::Doctor),
            staff(StaffRole::Doctor),
            staff(StaffRole::Doctor),
            staff(StaffRole::Secretary),
            staff(StaffRole::Secretary),
        ];
        let inactive = vec![staff(StaffRole::Doctor)];

        let stats = ClinicStatistics::from_rosters(&active, &inactive);
        assert_eq!(stats.total_active, 5);
        assert_eq!(stats.doctors, 3);
        assert_eq!(stats.secretaries, 2);
        assert_eq!(stats.inactive, 1);
        assert_eq!(stats.total, 6);
    }

    #[test]
    fn test_combined_is_pairwise_sum() {
        let mnl = ClinicStatistics {
            total_active: 5,
            doctors: 3,
            secretaries: 2,
            inactive: 1,
            total: 6,
        };
        let cdo = ClinicStatistics {
            total_active: 4,
            doctors: 2,
            secretaries: 2,
            inactive: 0,
            total: 4,
        };

        let combined = mnl.combine(&cdo);
        assert_eq!(combined.total_active, 9);
        assert_eq!(combined.doctors, 5);
        assert_eq!(combined.secretaries, 4);
        assert_eq!(combined.inactive, 1);
        assert_eq!(combined.total, 10);

        // Totals stay internally consistent after combining
        assert_eq!(combined.total, combined.total_active + combined.inactive);
    }

    #[test]
    fn test_percentages_are_zero_safe() {
        let empty = ClinicStatistics::default();
        assert_eq!(empty.active_percent(), 0.0);
        assert_eq!(empty.doctor_percent(), 0.0);
        assert_eq!(empty.secretary_percent(), 0.0);
        assert_eq!(empty.inactive_percent(), 0.0);

        let stats = ClinicStatistics {
            total_active: 4,
            doctors: 3,
            secretaries: 1,
            inactive: 1,
            total: 5,
        };
        assert_eq!(stats.active_percent(), 80.0);
        assert_eq!(stats.doctor_percent(), 75.0);
        assert_eq!(stats.secretary_percent(), 25.0);
        assert_eq!(stats.inactive_percent(), 20.0);
    }

    #[test]
    fn test_overview_combines_and_zeroes() {
        let mnl = ClinicStatistics {
            total_active: 2,
            doctors: 1,
            secretaries: 1,
            inactive: 0,
            total: 2,
        };
        let cdo = ClinicStatistics {
            total_active: 1,
            doctors: 1,
            secretaries: 0,
            inactive: 2,
            total: 3,
        };

        let overview = StatisticsOverview::new(mnl, cdo);
        assert_eq!(overview.combined.total, 5);
        assert_eq!(overview.mnl.total_active, 2);

        let zeroed = StatisticsOverview::zeroed();
        assert_eq!(zeroed.combined.total, 0);
        assert_eq!(zeroed.mnl, ClinicStatistics::default());
    }

    #[test]
    fn test_rank_doctors_orders_and_truncates() {
        let clinic = ClinicRevenue {
            clinic_id: "MNL".to_string(),
            doctors: vec![
                doctor_revenue("D-001", "Jane Cruz", &[1000.0, 500.0]),
                doctor_revenue("D-002", "Ana Reyes", &[3000.0]),
                doctor_revenue("D-003", "Luis Tan", &[200.0, 200.0]),
                doctor_revenue("D-004", "Carlos Uy", &[2000.0, 500.0]),
                doctor_revenue("D-005", "Rosa Lim", &[900.0]),
                doctor_revenue("D-006", "Ben Sy", &[100.0]),
            ],
            total_revenue: 0.0,
            total_appointments: 0,
        };

        let ranked = rank_doctors(&clinic);
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].doctor_name, "Ana Reyes");
        assert_eq!(ranked[0].total_revenue, 3000.0);
        assert_eq!(ranked[1].doctor_name, "Carlos Uy");
        assert_eq!(ranked[2].doctor_name, "Jane Cruz");
        // Lowest earner falls off the top five
        assert!(ranked.iter().all(|r| r.doctor_name != "Ben Sy"));
    }

    #[test]
    fn test_rank_doctors_ties_keep_encounter_order() {
        let clinic = ClinicRevenue {
            clinic_id: "CDO".to_string(),
            doctors: vec![
                doctor_revenue("D-010", "First Tie", &[500.0]),
                doctor_revenue("D-011", "Second Tie", &[250.0, 250.0]),
                doctor_revenue("D-012", "Leader", &[800.0]),
            ],
            total_revenue: 0.0,
            total_appointments: 0,
        };

        let ranked = rank_doctors(&clinic);
        assert_eq!(ranked[0].doctor_name, "Leader");
        assert_eq!(ranked[1].doctor_name, "First Tie");
        assert_eq!(ranked[2].doctor_name, "Second Tie");
    }

    #[test]
    fn test_rank_doctors_sums_daily_rows_not_reported_totals() {
        // The report's own total field disagrees with the daily rows;
        // the ranking trusts the rows
        let mut doctor = doctor_revenue("D-001", "Jane Cruz", &[100.0, 100.0]);
        doctor.total_revenue = 9999.0;
        let clinic = ClinicRevenue {
            clinic_id: "MNL".to_string(),
            doctors: vec![doctor],
            total_revenue: 9999.0,
            total_appointments: 2,
        };

        let ranked = rank_doctors(&clinic);
        assert_eq!(ranked[0].total_revenue, 200.0);
    }
}
