//! Pure roster logic: clinic tagging, merging, sorting and filtering.
//!
//! Everything here is synchronous and free of browser bindings so the
//! behavior is testable on the host. The hooks own fetching and state;
//! this module owns what the fetched collections mean.

use shared::{ClinicId, StaffRecord, StaffRole, StaffStatus};
use std::str::FromStr;

/// Clinic restriction applied on top of the loaded roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClinicFilter {
    #[default]
    All,
    Only(ClinicId),
}

impl ClinicFilter {
    /// Parse a filter dropdown value; anything unrecognized means no filter
    pub fn from_value(value: &str) -> Self {
        match ClinicId::from_str(value) {
            Ok(clinic) => ClinicFilter::Only(clinic),
            Err(_) => ClinicFilter::All,
        }
    }
}

/// Role restriction applied on top of the loaded roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Only(StaffRole),
}

impl RoleFilter {
    pub fn from_value(value: &str) -> Self {
        match StaffRole::from_str(value) {
            Ok(role) => RoleFilter::Only(role),
            Err(_) => RoleFilter::All,
        }
    }
}

/// Ephemeral view state for a roster list. Never persisted; resetting
/// to `Default` is the "Clear Filters" action.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub search_term: String,
    pub clinic_filter: ClinicFilter,
    pub role_filter: RoleFilter,
}

impl FilterState {
    /// True when any filter deviates from the default view
    pub fn is_filtering(&self) -> bool {
        !self.search_term.is_empty()
            || self.clinic_filter != ClinicFilter::All
            || self.role_filter != RoleFilter::All
    }
}

/// Tag every record in a fetched collection with its source clinic.
/// Raw payloads do not carry the clinic; after merging it is the only
/// way to tell the two rosters apart.
pub fn tag_with_clinic(mut records: Vec<StaffRecord>, clinic: ClinicId) -> Vec<StaffRecord> {
    for record in &mut records {
        record.clinic = Some(clinic);
    }
    records
}

/// Merge per-clinic rosters into one collection, tagging each record
/// with its source clinic first. Order within a clinic is preserved and
/// clinics appear in the order given.
pub fn merge_rosters(per_clinic: Vec<(ClinicId, Vec<StaffRecord>)>) -> Vec<StaffRecord> {
    let mut merged = Vec::new();
    for (clinic, records) in per_clinic {
        merged.extend(tag_with_clinic(records, clinic));
    }
    merged
}

/// Sort a roster by full name, ascending. Case-sensitive, stable: ties
/// keep their fetch order.
pub fn sort_by_full_name(records: &mut [StaffRecord]) {
    records.sort_by(|a, b| a.full_name.cmp(&b.full_name));
}

/// Filter a roster for display. A record stays when every filter
/// matches: the search term appears (case-insensitively) in at least
/// one searchable field, the clinic filter matches the record's tag and
/// the role filter matches its role. The deactivation reason is only
/// searchable on the inactive view. Pure: the input is never mutated
/// and record order is preserved.
pub fn apply_filters(
    records: &[StaffRecord],
    filters: &FilterState,
    status: StaffStatus,
) -> Vec<StaffRecord> {
    let term = filters.search_term.to_lowercase();

    records
        .iter()
        .filter(|record| {
            let matches_search = term.is_empty()
                || record.full_name.to_lowercase().contains(&term)
                || record.email.to_lowercase().contains(&term)
                || record.staff_id.to_lowercase().contains(&term)
                || contains_term(&record.department, &term)
                || contains_term(&record.specialization, &term)
                || (status == StaffStatus::Inactive
                    && contains_term(&record.deactivation_reason, &term));

            let matches_clinic = match filters.clinic_filter {
                ClinicFilter::All => true,
                ClinicFilter::Only(clinic) => record.clinic == Some(clinic),
            };

            let matches_role = match filters.role_filter {
                RoleFilter::All => true,
                RoleFilter::Only(role) => record.role == role,
            };

            matches_search && matches_clinic && matches_role
        })
        .cloned()
        .collect()
}

fn contains_term(field: &Option<String>, term: &str) -> bool {
    field
        .as_deref()
        .map(|value| value.to_lowercase().contains(term))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(staff_id: &str, name: &str, role: StaffRole, clinic: ClinicId) -> StaffRecord {
        StaffRecord {
            staff_id: staff_id.to_string(),
            full_name: name.to_string(),
            email: format!("{}@abcclinics.ph", staff_id.to_lowercase()),
            contact_no: "09171234567".to_string(),
            role,
            specialization: match role {
                StaffRole::Doctor => Some("Cardiology".to_string()),
                StaffRole::Secretary => None,
            },
            license_no: match role {
                StaffRole::Doctor => Some("PRC-10001".to_string()),
                StaffRole::Secretary => None,
            },
            department: None,
            assigned_doctor_id: None,
            clinic: Some(clinic),
            created_at: "2025-01-05T08:00:00+08:00".to_string(),
            updated_at: None,
            deactivated_at: None,
            deactivation_reason: None,
        }
    }

    #[test]
    fn test_merge_tags_and_preserves_order() {
        let mnl = vec![
            {
                let mut r = record("D-001", "Jane Cruz", StaffRole::Doctor, ClinicId::Mnl);
                r.clinic = None;
                r
            },
            {
                let mut r = record("S-001", "Maria Santos", StaffRole::Secretary, ClinicId::Mnl);
                r.clinic = None;
                r
            },
        ];
        let cdo = vec![{
            let mut r = record("D-002", "Ana Reyes", StaffRole::Doctor, ClinicId::Cdo);
            r.clinic = None;
            r
        }];

        let merged = merge_rosters(vec![(ClinicId::Mnl, mnl), (ClinicId::Cdo, cdo)]);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].staff_id, "D-001");
        assert_eq!(merged[0].clinic, Some(ClinicId::Mnl));
        assert_eq!(merged[1].clinic, Some(ClinicId::Mnl));
        assert_eq!(merged[2].staff_id, "D-002");
        assert_eq!(merged[2].clinic, Some(ClinicId::Cdo));
    }

    #[test]
    fn test_sort_is_case_sensitive_and_stable() {
        let mut roster = vec![
            record("1", "delaCruz", StaffRole::Doctor, ClinicId::Mnl),
            record("2", "abad", StaffRole::Doctor, ClinicId::Mnl),
            record("3", "Abad", StaffRole::Doctor, ClinicId::Cdo),
            record("4", "Abad", StaffRole::Secretary, ClinicId::Mnl),
        ];

        sort_by_full_name(&mut roster);

        // Uppercase sorts before lowercase; equal names keep input order
        assert_eq!(roster[0].staff_id, "3");
        assert_eq!(roster[1].staff_id, "4");
        assert_eq!(roster[2].staff_id, "2");
        assert_eq!(roster[3].staff_id, "1");
    }

    #[test]
    fn test_search_matches_across_fields() {
        let mut records = vec![
            record("D-001", "Jane Cruz", StaffRole::Doctor, ClinicId::Mnl),
            record("S-001", "Maria Santos", StaffRole::Secretary, ClinicId::Cdo),
        ];
        records[1].department = Some("Front Desk".to_string());

        let by_name = FilterState {
            search_term: "jane".to_string(),
            ..Default::default()
        };
        let hits = apply_filters(&records, &by_name, StaffStatus::Active);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].staff_id, "D-001");

        let by_email = FilterState {
            search_term: "s-001@abcclinics".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&records, &by_email, StaffStatus::Active).len(), 1);

        let by_department = FilterState {
            search_term: "front desk".to_string(),
            ..Default::default()
        };
        assert_eq!(
            apply_filters(&records, &by_department, StaffStatus::Active)[0].staff_id,
            "S-001"
        );

        let by_specialization = FilterState {
            search_term: "CARDIO".to_string(),
            ..Default::default()
        };
        assert_eq!(
            apply_filters(&records, &by_specialization, StaffStatus::Active).len(),
            1
        );

        let no_match = FilterState {
            search_term: "Dermatology".to_string(),
            ..Default::default()
        };
        assert!(apply_filters(&records, &no_match, StaffStatus::Active).is_empty());
    }

    #[test]
    fn test_deactivation_reason_searchable_on_inactive_view_only() {
        let mut inactive = record("D-003", "Luis Tan", StaffRole::Doctor, ClinicId::Mnl);
        inactive.deactivation_reason = Some("Resigned".to_string());
        let records = vec![inactive];

        let filters = FilterState {
            search_term: "resigned".to_string(),
            ..Default::default()
        };

        assert_eq!(apply_filters(&records, &filters, StaffStatus::Inactive).len(), 1);
        assert!(apply_filters(&records, &filters, StaffStatus::Active).is_empty());
    }

    #[test]
    fn test_clinic_and_role_filters_combine_with_search() {
        let records = vec![
            record("D-001", "Jane Cruz", StaffRole::Doctor, ClinicId::Mnl),
            record("D-002", "Jane Uy", StaffRole::Doctor, ClinicId::Cdo),
            record("S-001", "Jane Lim", StaffRole::Secretary, ClinicId::Cdo),
        ];

        let filters = FilterState {
            search_term: "jane".to_string(),
            clinic_filter: ClinicFilter::Only(ClinicId::Cdo),
            role_filter: RoleFilter::Only(StaffRole::Doctor),
        };

        let hits = apply_filters(&records, &filters, StaffStatus::Active);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].staff_id, "D-002");
    }

    #[test]
    fn test_default_filters_are_a_no_op() {
        let records = vec![
            record("D-001", "Jane Cruz", StaffRole::Doctor, ClinicId::Mnl),
            record("S-001", "Maria Santos", StaffRole::Secretary, ClinicId::Cdo),
        ];

        let filters = FilterState::default();
        assert!(!filters.is_filtering());
        assert_eq!(apply_filters(&records, &filters, StaffStatus::Active), records);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let records = vec![
            record("D-001", "Jane Cruz", StaffRole::Doctor, ClinicId::Mnl),
            record("D-002", "Ana Reyes", StaffRole::Doctor, ClinicId::Cdo),
            record("S-001", "Maria Santos", StaffRole::Secretary, ClinicId::Mnl),
        ];

        let filters = FilterState {
            search_term: "a".to_string(),
            clinic_filter: ClinicFilter::All,
            role_filter: RoleFilter::Only(StaffRole::Doctor),
        };

        let once = apply_filters(&records, &filters, StaffStatus::Active);
        let twice = apply_filters(&once, &filters, StaffStatus::Active);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_deactivate_then_restore_moves_record_between_rosters() {
        let mut active = vec![
            record("D-001", "Jane Cruz", StaffRole::Doctor, ClinicId::Mnl),
            record("S-001", "Maria Santos", StaffRole::Secretary, ClinicId::Mnl),
        ];
        let mut inactive: Vec<StaffRecord> = Vec::new();

        // Deactivation: the record leaves the active roster and shows up
        // inactive with its reason and timestamp
        let mut deactivated = active.remove(0);
        deactivated.deactivated_at = Some("2025-03-01T10:00:00+08:00".to_string());
        deactivated.deactivation_reason = Some("Extended leave".to_string());
        inactive.push(deactivated);
        sort_by_full_name(&mut inactive);

        let keys: Vec<String> = active.iter().map(StaffRecord::record_key).collect();
        assert!(!keys.contains(&"MNL-D-001".to_string()));
        assert_eq!(inactive[0].record_key(), "MNL-D-001");
        assert_eq!(inactive[0].deactivation_reason.as_deref(), Some("Extended leave"));

        // Restore: back to the active roster with doctor fields intact
        let mut restored = inactive.remove(0);
        restored.deactivated_at = None;
        restored.deactivation_reason = None;
        active.push(restored);

        let keys: Vec<String> = active.iter().map(StaffRecord::record_key).collect();
        assert!(keys.contains(&"MNL-D-001".to_string()));
        assert!(inactive.is_empty());

        let restored = active.iter().find(|r| r.staff_id == "D-001").unwrap();
        assert_eq!(restored.specialization.as_deref(), Some("Cardiology"));
        assert_eq!(restored.license_no.as_deref(), Some("PRC-10001"));
        assert_eq!(restored.deactivated_at, None);
    }

    #[test]
    fn test_filter_values_parse() {
        assert_eq!(ClinicFilter::from_value("MNL"), ClinicFilter::Only(ClinicId::Mnl));
        assert_eq!(ClinicFilter::from_value("CDO"), ClinicFilter::Only(ClinicId::Cdo));
        assert_eq!(ClinicFilter::from_value("all"), ClinicFilter::All);

        assert_eq!(RoleFilter::from_value("Secretary"), RoleFilter::Only(StaffRole::Secretary));
        assert_eq!(RoleFilter::from_value("Doctor"), RoleFilter::Only(StaffRole::Doctor));
        assert_eq!(RoleFilter::from_value("all"), RoleFilter::All);
    }
}
