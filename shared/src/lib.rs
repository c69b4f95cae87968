use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier for one of the two clinic locations.
///
/// Serialized as the short code ("MNL" / "CDO") everywhere on the wire:
/// path segments, query parameters and record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClinicId {
    #[serde(rename = "MNL")]
    Mnl,
    #[serde(rename = "CDO")]
    Cdo,
}

impl ClinicId {
    /// Both clinics, in the order the combined roster merges them
    pub const ALL: [ClinicId; 2] = [ClinicId::Mnl, ClinicId::Cdo];

    /// Short code used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ClinicId::Mnl => "MNL",
            ClinicId::Cdo => "CDO",
        }
    }

    /// Human-readable clinic name for banners and badges
    pub fn display_name(&self) -> &'static str {
        match self {
            ClinicId::Mnl => "Manila",
            ClinicId::Cdo => "Cagayan de Oro",
        }
    }
}

impl fmt::Display for ClinicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ClinicId {
    type Err = ClinicIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MNL" => Ok(ClinicId::Mnl),
            "CDO" => Ok(ClinicId::Cdo),
            other => Err(ClinicIdError::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClinicIdError {
    Unknown(String),
}

impl fmt::Display for ClinicIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClinicIdError::Unknown(code) => write!(f, "Unknown clinic id: {}", code),
        }
    }
}

impl std::error::Error for ClinicIdError {}

/// Staff role as stored by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaffRole {
    Doctor,
    Secretary,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Doctor => "Doctor",
            StaffRole::Secretary => "Secretary",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StaffRole {
    type Err = StaffRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Doctor" => Ok(StaffRole::Doctor),
            "Secretary" => Ok(StaffRole::Secretary),
            other => Err(StaffRoleError::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StaffRoleError {
    Unknown(String),
}

impl fmt::Display for StaffRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaffRoleError::Unknown(role) => write!(f, "Unknown staff role: {}", role),
        }
    }
}

impl std::error::Error for StaffRoleError {}

/// Lifecycle state of a staff record. Deactivation is reversible; the
/// console never deletes records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffStatus {
    Active,
    Inactive,
}

impl StaffStatus {
    /// Query-parameter value ("active" / "inactive")
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffStatus::Active => "active",
            StaffStatus::Inactive => "inactive",
        }
    }
}

/// Which clinic(s) a roster view covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterScope {
    Single(ClinicId),
    Combined,
}

impl RosterScope {
    pub fn clinics(&self) -> Vec<ClinicId> {
        match self {
            RosterScope::Single(clinic) => vec![*clinic],
            RosterScope::Combined => ClinicId::ALL.to_vec(),
        }
    }
}

/// One staff member at one clinic.
///
/// `staff_id` is unique within a clinic only; once rosters are merged a
/// record is identified by the `(clinic, staff_id)` pair. The `clinic`
/// field is tagged client-side after each fetch and is not required in
/// the raw payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffRecord {
    pub staff_id: String,
    pub full_name: String,
    pub email: String,
    pub contact_no: String,
    pub role: StaffRole,
    /// Required for doctors once created
    pub specialization: Option<String>,
    /// Required for doctors once created
    pub license_no: Option<String>,
    pub department: Option<String>,
    /// Secretaries may reference an active doctor's staff_id
    pub assigned_doctor_id: Option<String>,
    /// Source clinic, tagged client-side before rosters are merged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinic: Option<ClinicId>,
    /// RFC 3339 timestamp
    pub created_at: String,
    pub updated_at: Option<String>,
    /// Set while the record is inactive
    pub deactivated_at: Option<String>,
    /// Set while the record is inactive
    pub deactivation_reason: Option<String>,
}

impl StaffRecord {
    /// Stable identity of a merged record, e.g. "MNL-D-001"
    pub fn record_key(&self) -> String {
        match self.clinic {
            Some(clinic) => format!("{}-{}", clinic.as_str(), self.staff_id),
            None => self.staff_id.clone(),
        }
    }

    pub fn is_doctor(&self) -> bool {
        self.role == StaffRole::Doctor
    }
}

/// Request to create a staff record. Optional fields are omitted from
/// the JSON body entirely rather than sent as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateStaffRequest {
    pub clinic_id: ClinicId,
    pub full_name: String,
    pub email: String,
    pub contact_no: String,
    pub role: StaffRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_doctor_id: Option<String>,
}

/// Response after creating a staff record. The service generates an
/// initial credential for the new account and returns it exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateStaffResponse {
    pub staff: StaffRecord,
    pub initial_password: Option<String>,
}

/// Request to update a staff record. Clinic and role are immutable once
/// a record exists and are never part of the update payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateStaffRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_doctor_id: Option<String>,
}

/// Body for the deactivate endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeactivateStaffRequest {
    pub deactivation_reason: String,
}

/// Reason recorded when the administrator leaves the reason field empty
pub const DEFAULT_DEACTIVATION_REASON: &str = "Administrative deactivation";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffListResponse {
    pub staff: Vec<StaffRecord>,
}

/// Revenue report for a date range, as returned by the service.
///
/// The revenue endpoints use camelCase keys, unlike the staff
/// endpoints; the report is read-only on the console side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReport {
    pub date_range: ReportDateRange,
    /// Keyed by clinic code ("MNL" / "CDO")
    pub clinics: BTreeMap<String, ClinicRevenue>,
    pub totals: RevenueTotals,
}

/// Inclusive date range, YYYY-MM-DD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDateRange {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicRevenue {
    pub clinic_id: String,
    pub doctors: Vec<DoctorRevenue>,
    pub total_revenue: f64,
    pub total_appointments: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRevenue {
    pub doctor_id: String,
    pub doctor_name: String,
    pub daily_revenue: Vec<DailyRevenue>,
    pub total_revenue: f64,
    pub total_appointments: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRevenue {
    /// YYYY-MM-DD
    pub date: String,
    pub revenue: f64,
    pub appointment_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueTotals {
    pub overall_revenue: f64,
    pub total_appointments: u32,
}

/// Parameters for a revenue report fetch. An empty clinic list asks the
/// service for all clinics.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueQuery {
    pub start_date: String,
    pub end_date: String,
    pub clinic_ids: Vec<ClinicId>,
}

impl Default for RevenueQuery {
    /// The last 30 days across all clinics, matching what the report
    /// screen shows before any filter is touched.
    fn default() -> Self {
        let end = chrono::Local::now().date_naive();
        let start = end - chrono::Duration::days(30);
        Self {
            start_date: start.format("%Y-%m-%d").to_string(),
            end_date: end.format("%Y-%m-%d").to_string(),
            clinic_ids: Vec::new(),
        }
    }
}

/// Administrator profile as stored alongside the session token.
///
/// The stored JSON may carry more fields than these (permission maps,
/// flags); unknown keys are ignored. Only `role` is load-bearing for
/// the session guard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminProfile {
    #[serde(default)]
    pub admin_id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    pub role: String,
    pub contact_no: Option<String>,
    /// RFC 3339 timestamp of the previous login, if the service tracks it
    pub last_login: Option<String>,
}

/// Administrative role, parsed exactly once from the stored profile's
/// raw role string when a session is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminRole {
    SuperAdmin,
    Admin,
}

/// Things an administrative role may be allowed to do. Authorization
/// checks go through [`AdminRole::has_capability`] rather than matching
/// on role strings at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ViewAdminDashboard,
    ManageStaff,
    ViewRevenue,
    ManageAdministrators,
}

impl AdminRole {
    /// Parse the raw role string from a stored profile.
    ///
    /// "SuperAdmin" maps to the super-administrator role; any other
    /// string containing "Admin" (e.g. "ClinicAdmin") is a regular
    /// administrator. Everything else is not an administrative role.
    pub fn parse(raw: &str) -> Result<AdminRole, AdminRoleError> {
        if raw == "SuperAdmin" {
            Ok(AdminRole::SuperAdmin)
        } else if raw.contains("Admin") {
            Ok(AdminRole::Admin)
        } else {
            Err(AdminRoleError::NotAdministrative(raw.to_string()))
        }
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        match (self, capability) {
            (AdminRole::SuperAdmin, _) => true,
            (AdminRole::Admin, Capability::ManageAdministrators) => false,
            (AdminRole::Admin, _) => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::SuperAdmin => "SuperAdmin",
            AdminRole::Admin => "Admin",
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdminRoleError {
    NotAdministrative(String),
}

impl fmt::Display for AdminRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminRoleError::NotAdministrative(role) => {
                write!(f, "Role \"{}\" is not an administrative role", role)
            }
        }
    }
}

impl std::error::Error for AdminRoleError {}

/// A validated session: the stored token, the decoded profile and the
/// role parsed from it. Built by the session guard, threaded down
/// through component props.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSession {
    pub token: String,
    pub profile: AdminProfile,
    pub role: AdminRole,
}
