//! Local validation for the staff form. Failures are field-scoped,
//! block submission and never reach the API client.

use shared::{ClinicId, StaffRole};

/// Raw form state, exactly as typed. Optional fields stay empty
/// strings until submit, when [`normalize_optional`] strips them.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffFormInput {
    pub full_name: String,
    pub email: String,
    pub contact_no: String,
    pub role: StaffRole,
    pub specialization: String,
    pub license_no: String,
    pub department: String,
    pub assigned_doctor_id: String,
    /// Chosen clinic; `None` until the administrator picks one in the
    /// combined view
    pub clinic: Option<ClinicId>,
}

impl Default for StaffFormInput {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            contact_no: String::new(),
            role: StaffRole::Doctor,
            specialization: String::new(),
            license_no: String::new(),
            department: String::new(),
            assigned_doctor_id: String::new(),
            clinic: None,
        }
    }
}

/// Per-field validation messages; `None` means the field is fine
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StaffFormErrors {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub contact_no: Option<String>,
    pub specialization: Option<String>,
    pub license_no: Option<String>,
    pub clinic: Option<String>,
}

impl StaffFormErrors {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.contact_no.is_none()
            && self.specialization.is_none()
            && self.license_no.is_none()
            && self.clinic.is_none()
    }
}

/// Validate the form. `needs_clinic` is true only when creating a
/// record from the combined view, where no clinic is implied; editing
/// never re-selects a clinic.
pub fn validate_staff_form(input: &StaffFormInput, needs_clinic: bool) -> StaffFormErrors {
    let mut errors = StaffFormErrors::default();

    if input.full_name.trim().is_empty() {
        errors.full_name = Some("Full name is required".to_string());
    }

    if input.email.trim().is_empty() {
        errors.email = Some("Email is required".to_string());
    } else if !is_valid_email(&input.email) {
        errors.email = Some("Invalid email format".to_string());
    }

    if input.contact_no.trim().is_empty() {
        errors.contact_no = Some("Contact number is required".to_string());
    }

    if input.role == StaffRole::Doctor {
        if input.specialization.trim().is_empty() {
            errors.specialization = Some("Specialization is required for doctors".to_string());
        }
        if input.license_no.trim().is_empty() {
            errors.license_no = Some("License number is required for doctors".to_string());
        }
    }

    if needs_clinic && input.clinic.is_none() {
        errors.clinic = Some("Please select a clinic".to_string());
    }

    errors
}

/// Basic `local@domain.tld` shape: no whitespace, exactly one `@`,
/// non-empty local part, and a domain with a non-empty segment on each
/// side of its last dot.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(|c| c.is_whitespace()) {
        return false;
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Trim an optional form field; empty means the field is omitted from
/// the request body entirely.
pub fn normalize_optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor_input() -> StaffFormInput {
        StaffFormInput {
            full_name: "Jane Cruz".to_string(),
            email: "jane.cruz@abcclinics.ph".to_string(),
            contact_no: "09171234567".to_string(),
            role: StaffRole::Doctor,
            specialization: "Cardiology".to_string(),
            license_no: "PRC-10001".to_string(),
            department: String::new(),
            assigned_doctor_id: String::new(),
            clinic: Some(ClinicId::Mnl),
        }
    }

    #[test]
    fn test_complete_doctor_form_passes() {
        let errors = validate_staff_form(&doctor_input(), false);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_new_doctor_from_combined_view_passes() {
        // Creating from the combined view, where the clinic is picked in
        // the form rather than implied
        let input = StaffFormInput {
            full_name: "Dr. Jane Cruz".to_string(),
            email: "jane@x.ph".to_string(),
            contact_no: "+63-900-1111".to_string(),
            role: StaffRole::Doctor,
            specialization: "Pediatrics".to_string(),
            license_no: "PH-PED-001".to_string(),
            clinic: Some(ClinicId::Mnl),
            ..Default::default()
        };

        let errors = validate_staff_form(&input, true);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_doctor_without_specialization_is_blocked() {
        let mut input = doctor_input();
        input.specialization = String::new();

        let errors = validate_staff_form(&input, false);
        assert!(!errors.is_empty());
        assert_eq!(
            errors.specialization.as_deref(),
            Some("Specialization is required for doctors")
        );
    }

    #[test]
    fn test_doctor_without_license_is_blocked() {
        let mut input = doctor_input();
        input.license_no = "   ".to_string();

        let errors = validate_staff_form(&input, false);
        assert_eq!(
            errors.license_no.as_deref(),
            Some("License number is required for doctors")
        );
    }

    #[test]
    fn test_secretary_skips_doctor_requirements() {
        let input = StaffFormInput {
            full_name: "Maria Santos".to_string(),
            email: "maria@abcclinics.ph".to_string(),
            contact_no: "09181234567".to_string(),
            role: StaffRole::Secretary,
            clinic: Some(ClinicId::Cdo),
            ..Default::default()
        };

        let errors = validate_staff_form(&input, false);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_required_field_messages() {
        let input = StaffFormInput::default();
        let errors = validate_staff_form(&input, false);

        assert_eq!(errors.full_name.as_deref(), Some("Full name is required"));
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert_eq!(
            errors.contact_no.as_deref(),
            Some("Contact number is required")
        );
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("jane.cruz@abcclinics.ph"));
        assert!(is_valid_email("a@b.co"));
        // Dots in the host segment are fine
        assert!(is_valid_email("jane@mail.abcclinics.ph"));

        assert!(!is_valid_email("janeabcclinics.ph"));
        assert!(!is_valid_email("jane@abcclinics"));
        assert!(!is_valid_email("jane@.ph"));
        assert!(!is_valid_email("jane@abcclinics."));
        assert!(!is_valid_email("@abcclinics.ph"));
        assert!(!is_valid_email("jane cruz@abcclinics.ph"));
        assert!(!is_valid_email("jane@abc@clinics.ph"));
    }

    #[test]
    fn test_invalid_email_message() {
        let mut input = doctor_input();
        input.email = "jane@invalid".to_string();

        let errors = validate_staff_form(&input, false);
        assert_eq!(errors.email.as_deref(), Some("Invalid email format"));
    }

    #[test]
    fn test_clinic_required_only_in_combined_create() {
        let mut input = doctor_input();
        input.clinic = None;

        let errors = validate_staff_form(&input, true);
        assert_eq!(errors.clinic.as_deref(), Some("Please select a clinic"));

        // Single-clinic views imply the clinic; editing never re-selects
        let errors = validate_staff_form(&input, false);
        assert!(errors.clinic.is_none());
    }

    #[test]
    fn test_normalize_optional_strips_empty() {
        assert_eq!(normalize_optional("  Cardiology "), Some("Cardiology".to_string()));
        assert_eq!(normalize_optional(""), None);
        assert_eq!(normalize_optional("   "), None);
    }
}
