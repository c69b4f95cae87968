use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use shared::{
    ClinicId, CreateStaffRequest, CreateStaffResponse, DeactivateStaffRequest, RevenueQuery,
    RevenueReport, StaffListResponse, StaffRecord, StaffRole, StaffStatus, UpdateStaffRequest,
    DEFAULT_DEACTIVATION_REASON,
};
use thiserror::Error;

/// Errors surfaced by the staffing/revenue API client.
///
/// Every call is a single attempt: no retries, no timeouts. Form
/// validation failures are field-scoped and raised before any request
/// exists, so they never appear here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("Network error: {0}")]
    Network(String),
    /// The service answered with a non-2xx status or a non-JSON body.
    /// The message prefers the service's own `error` field.
    #[error("{message}")]
    Server { status: u16, message: String },
}

/// Error payload shape used by the staffing service
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// API client for the remote staffing and revenue service
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    #[allow(dead_code)]
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Create a staff record at the clinic named in the request
    pub async fn create_staff(
        &self,
        request: &CreateStaffRequest,
    ) -> Result<CreateStaffResponse, ApiError> {
        let url = format!("{}/staff", self.base_url);

        match Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
        {
            Ok(response) => decode(response).await,
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// Update an existing staff record. Clinic and role are immutable
    /// and not part of the payload.
    pub async fn update_staff(
        &self,
        clinic: ClinicId,
        staff_id: &str,
        request: &UpdateStaffRequest,
    ) -> Result<StaffRecord, ApiError> {
        let url = format!("{}/staff/{}/{}", self.base_url, clinic, staff_id);

        match Request::put(&url)
            .json(request)
            .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
        {
            Ok(response) => decode(response).await,
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// Fetch a single staff record
    #[allow(dead_code)]
    pub async fn get_staff(
        &self,
        clinic: ClinicId,
        staff_id: &str,
    ) -> Result<StaffRecord, ApiError> {
        let url = format!("{}/staff/{}/{}", self.base_url, clinic, staff_id);

        match Request::get(&url).send().await {
            Ok(response) => decode(response).await,
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// List staff for one clinic, filtered by status and optionally by role
    pub async fn list_staff(
        &self,
        clinic: ClinicId,
        status: StaffStatus,
        role: Option<StaffRole>,
    ) -> Result<StaffListResponse, ApiError> {
        let url = format!(
            "{}/staff{}",
            self.base_url,
            staff_list_query(clinic, status, role)
        );

        match Request::get(&url).send().await {
            Ok(response) => decode(response).await,
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// Active roster for one clinic
    pub async fn get_active_staff(&self, clinic: ClinicId) -> Result<StaffListResponse, ApiError> {
        self.list_staff(clinic, StaffStatus::Active, None).await
    }

    /// Inactive roster for one clinic
    pub async fn get_inactive_staff(
        &self,
        clinic: ClinicId,
    ) -> Result<StaffListResponse, ApiError> {
        self.list_staff(clinic, StaffStatus::Inactive, None).await
    }

    /// Active doctors for one clinic, for the secretary assignment dropdown
    pub async fn get_doctors(&self, clinic: ClinicId) -> Result<StaffListResponse, ApiError> {
        self.list_staff(clinic, StaffStatus::Active, Some(StaffRole::Doctor))
            .await
    }

    /// Deactivate a staff record. An empty reason falls back to the
    /// administrative default.
    pub async fn deactivate_staff(
        &self,
        clinic: ClinicId,
        staff_id: &str,
        reason: &str,
    ) -> Result<StaffRecord, ApiError> {
        let url = format!(
            "{}/staff/{}/{}/deactivate",
            self.base_url, clinic, staff_id
        );
        let body = DeactivateStaffRequest {
            deactivation_reason: if reason.trim().is_empty() {
                DEFAULT_DEACTIVATION_REASON.to_string()
            } else {
                reason.trim().to_string()
            },
        };

        match Request::patch(&url)
            .json(&body)
            .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
        {
            Ok(response) => decode(response).await,
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// Restore a previously deactivated staff record
    pub async fn restore_staff(
        &self,
        clinic: ClinicId,
        staff_id: &str,
    ) -> Result<StaffRecord, ApiError> {
        let url = format!("{}/staff/{}/{}/restore", self.base_url, clinic, staff_id);

        match Request::put(&url).send().await {
            Ok(response) => decode(response).await,
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// Fetch the revenue report for a date range. An empty clinic list
    /// asks the service for all clinics.
    pub async fn fetch_revenue(&self, query: &RevenueQuery) -> Result<RevenueReport, ApiError> {
        let url = format!("{}/revenue{}", self.base_url, revenue_query(query));

        match Request::get(&url).send().await {
            Ok(response) => decode(response).await,
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a response into the decoded body or an [`ApiError`].
///
/// The service always answers JSON; anything else (proxy error pages,
/// HTML 404s) is reported as a server error with the raw status line.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let status_text = response.status_text();

    let content_type = response
        .headers()
        .get("content-type")
        .unwrap_or_default();
    if !content_type.contains("application/json") {
        return Err(ApiError::Server {
            status,
            message: format!(
                "Server returned non-JSON response: {} {}",
                status, status_text
            ),
        });
    }

    if !response.ok() {
        let fallback = format!("HTTP {}: {}", status, status_text);
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error.unwrap_or(fallback),
            Err(_) => fallback,
        };
        return Err(ApiError::Server { status, message });
    }

    response.json::<T>().await.map_err(|e| ApiError::Server {
        status,
        message: format!("Failed to parse response: {}", e),
    })
}

/// Query string for the staff list endpoint
fn staff_list_query(clinic: ClinicId, status: StaffStatus, role: Option<StaffRole>) -> String {
    let mut query = format!("?clinic_id={}&status={}", clinic.as_str(), status.as_str());
    if let Some(role) = role {
        query.push_str(&format!("&role={}", role.as_str()));
    }
    query
}

/// Query string for the revenue endpoint. Clinic codes are joined with
/// commas; the parameter is omitted entirely when the list is empty.
fn revenue_query(query: &RevenueQuery) -> String {
    let mut params = format!(
        "?startDate={}&endDate={}",
        query.start_date, query.end_date
    );
    if !query.clinic_ids.is_empty() {
        let codes: Vec<&str> = query.clinic_ids.iter().map(|c| c.as_str()).collect();
        params.push_str(&format!("&clinicIds={}", codes.join(",")));
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_list_query_without_role() {
        assert_eq!(
            staff_list_query(ClinicId::Mnl, StaffStatus::Active, None),
            "?clinic_id=MNL&status=active"
        );
        assert_eq!(
            staff_list_query(ClinicId::Cdo, StaffStatus::Inactive, None),
            "?clinic_id=CDO&status=inactive"
        );
    }

    #[test]
    fn test_staff_list_query_with_role() {
        assert_eq!(
            staff_list_query(ClinicId::Mnl, StaffStatus::Active, Some(StaffRole::Doctor)),
            "?clinic_id=MNL&status=active&role=Doctor"
        );
    }

    #[test]
    fn test_revenue_query_joins_clinics() {
        let query = RevenueQuery {
            start_date: "2025-01-01".to_string(),
            end_date: "2025-01-31".to_string(),
            clinic_ids: vec![ClinicId::Mnl, ClinicId::Cdo],
        };
        assert_eq!(
            revenue_query(&query),
            "?startDate=2025-01-01&endDate=2025-01-31&clinicIds=MNL,CDO"
        );
    }

    #[test]
    fn test_revenue_query_omits_empty_clinic_list() {
        let query = RevenueQuery {
            start_date: "2025-01-01".to_string(),
            end_date: "2025-01-31".to_string(),
            clinic_ids: vec![],
        };
        assert_eq!(
            revenue_query(&query),
            "?startDate=2025-01-01&endDate=2025-01-31"
        );
    }

    #[test]
    fn test_api_error_display_prefers_server_message() {
        let err = ApiError::Server {
            status: 409,
            message: "Email already in use".to_string(),
        };
        assert_eq!(err.to_string(), "Email already in use");

        let err = ApiError::Network("Failed to fetch".to_string());
        assert_eq!(err.to_string(), "Network error: Failed to fetch");
    }
}
