use crate::config::FrontendConfig;
use crate::error::ApiError;
use futures::future::{Either, select};
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::models::{
    Appointment, AppointmentStatus, AppointmentStatusUpdate, AssignEmployeeRequest, AuthResponse,
    CheckoutRequest, CheckoutSession, CheckoutStatus, Employee, Invoice, LoginRequest,
    NewAppointment, NewEmployee, NewServiceOffering, NewVehicle, NewWorkLogEntry, RegisterRequest,
    ServiceOffering, Vehicle, WorkLogEntry,
};
use std::future::Future;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

thread_local! {
    static SHARED_CLIENT: OnceCell<ServiceCenterClient> = OnceCell::new();
}

/// Lightweight REST client for the service-center API.
///
/// Clones share the bearer-token slot, so a login through one handle is seen
/// by every page.
#[derive(Clone, Debug)]
pub struct ServiceCenterClient {
    base_url: String,
    client: Client,
    token: Arc<Mutex<Option<String>>>,
    checkout_timeout_ms: u32,
}

impl ServiceCenterClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str, checkout_timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            token: Arc::new(Mutex::new(None)),
            checkout_timeout_ms,
        }
    }

    pub fn from_config(config: &FrontendConfig) -> Self {
        Self::new(config.api_base_url(), config.checkout_timeout_ms)
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::from_config(&FrontendConfig::new()))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = token;
        }
    }

    pub fn current_token(&self) -> Option<String> {
        self.token.lock().ok().and_then(|guard| guard.clone())
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.current_token() {
            request.bearer_auth(token)
        } else {
            request
        }
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_response(status, &body);
        log::warn!("request failed: {error}");
        Err(error)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.apply_auth(request).send().await?;
        let response = Self::check(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn send_empty(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = self.apply_auth(request).send().await?;
        Self::check(response).await.map(drop)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        log::debug!("GET {path}");
        self.client.get(self.api_url(path))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        log::debug!("POST {path}");
        self.client.post(self.api_url(path))
    }

    fn patch(&self, path: &str) -> RequestBuilder {
        log::debug!("PATCH {path}");
        self.client.patch(self.api_url(path))
    }

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let body: AuthResponse = self.send(self.post("auth/login").json(payload)).await?;
        self.set_token(Some(body.token.clone()));
        Ok(body)
    }

    /// Create a customer account and sign it in.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let body: AuthResponse = self.send(self.post("auth/register").json(payload)).await?;
        self.set_token(Some(body.token.clone()));
        Ok(body)
    }

    /// Vehicles owned by the signed-in customer.
    pub async fn list_vehicles(&self) -> Result<Vec<Vehicle>, ApiError> {
        self.send(self.get("vehicles")).await
    }

    pub async fn create_vehicle(&self, payload: &NewVehicle) -> Result<Vehicle, ApiError> {
        self.send(self.post("vehicles").json(payload)).await
    }

    pub async fn delete_vehicle(&self, id: &Uuid) -> Result<(), ApiError> {
        let path = format!("vehicles/{id}");
        log::debug!("DELETE {path}");
        self.send_empty(self.client.delete(self.api_url(&path)))
            .await
    }

    pub async fn list_services(&self) -> Result<Vec<ServiceOffering>, ApiError> {
        self.send(self.get("services")).await
    }

    pub async fn create_service(
        &self,
        payload: &NewServiceOffering,
    ) -> Result<ServiceOffering, ApiError> {
        self.send(self.post("services").json(payload)).await
    }

    /// Appointments visible to the caller; the API scopes the list by role.
    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        self.send(self.get("appointments")).await
    }

    pub async fn create_appointment(
        &self,
        payload: &NewAppointment,
    ) -> Result<Appointment, ApiError> {
        self.send(self.post("appointments").json(payload)).await
    }

    pub async fn update_appointment_status(
        &self,
        id: &Uuid,
        status: AppointmentStatus,
    ) -> Result<Appointment, ApiError> {
        let payload = AppointmentStatusUpdate { status };
        self.send(self.patch(&format!("appointments/{id}/status")).json(&payload))
            .await
    }

    pub async fn assign_employee(
        &self,
        id: &Uuid,
        employee_id: Uuid,
    ) -> Result<Appointment, ApiError> {
        let payload = AssignEmployeeRequest { employee_id };
        self.send(self.patch(&format!("appointments/{id}/assign")).json(&payload))
            .await
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.send(self.get("employees")).await
    }

    pub async fn create_employee(&self, payload: &NewEmployee) -> Result<Employee, ApiError> {
        self.send(self.post("employees").json(payload)).await
    }

    /// Work-log entries of the signed-in employee.
    pub async fn list_work_logs(&self) -> Result<Vec<WorkLogEntry>, ApiError> {
        self.send(self.get("worklogs")).await
    }

    pub async fn create_work_log(
        &self,
        payload: &NewWorkLogEntry,
    ) -> Result<WorkLogEntry, ApiError> {
        self.send(self.post("worklogs").json(payload)).await
    }

    pub async fn list_invoices(&self) -> Result<Vec<Invoice>, ApiError> {
        self.send(self.get("invoices")).await
    }

    pub async fn get_invoice(&self, id: &Uuid) -> Result<Invoice, ApiError> {
        self.send(self.get(&format!("invoices/{id}"))).await
    }

    /// Ask the API to open a hosted checkout session for an invoice.
    ///
    /// This is the one call with a deadline: if the provider round-trip takes
    /// longer than the configured timeout the request is dropped, which aborts
    /// the underlying fetch.
    pub async fn create_checkout_session(
        &self,
        payload: &CheckoutRequest,
    ) -> Result<CheckoutSession, ApiError> {
        let request = self.send(self.post("payments/checkout-session").json(payload));
        with_timeout(request, self.checkout_timeout_ms).await
    }

    pub async fn checkout_status(&self, session_id: &str) -> Result<CheckoutStatus, ApiError> {
        self.send(self.get(&format!("payments/checkout-session/{session_id}")))
            .await
    }
}

/// Race `request` against a timer; the loser is dropped.
pub(crate) async fn with_timeout<T, F>(request: F, timeout_ms: u32) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let timer = gloo_timers::future::TimeoutFuture::new(timeout_ms);
    futures::pin_mut!(request);
    futures::pin_mut!(timer);
    match select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            log::warn!("request abandoned after {timeout_ms} ms");
            Err(ApiError::Timeout(timeout_ms))
        }
    }
}
