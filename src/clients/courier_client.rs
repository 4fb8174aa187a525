//! # Courier Client
//!
//! Drives the courier lifecycle: create → log in to learn the internal id → delete.
//!
//! Creation does not return an id, so the login/password pair is the key. A login that
//! does not come back `200` leaves the courier unresolved; nothing is deleted then.
use crate::framework::{
    ApiRequest, ApiResponse, CreateResult, Gateway, HarnessError, InternalId, ResolvedId,
    ResourceLifecycleClient,
};
use crate::model::{Credentials, LoginResponse, NewCourier};
use tracing::{debug, instrument, warn};

const COURIER: &str = "/api/v1/courier";
const COURIER_LOGIN: &str = "/api/v1/courier/login";

/// Client for the courier endpoints.
#[derive(Clone)]
pub struct CourierClient<G> {
    gateway: G,
}

impl<G: Gateway> CourierClient<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Raw `POST /api/v1/courier/login`.
    ///
    /// Negative scenarios (missing fields, unknown login) assert on the status and
    /// `message` of this response directly.
    #[instrument(skip(self, credentials), fields(login = ?credentials.login))]
    pub fn login(&self, credentials: &Credentials) -> Result<ApiResponse, HarnessError> {
        debug!("Sending request");
        self.gateway
            .invoke(&ApiRequest::post(COURIER_LOGIN).json(credentials)?)
    }
}

impl<G: Gateway> ResourceLifecycleClient for CourierClient<G> {
    type Spec = NewCourier;
    type Key = Credentials;
    const RESOURCE: &'static str = "courier";

    #[instrument(skip(self, spec), fields(login = ?spec.login))]
    fn create(&self, spec: &NewCourier) -> Result<CreateResult<Credentials>, HarnessError> {
        debug!("create courier called");
        let response = self.gateway.invoke(&ApiRequest::post(COURIER).json(spec)?)?;
        if response.status != 201 {
            warn!(status = response.status, body = %response.raw, "Courier creation rejected");
            return Err(HarnessError::CreationRejected {
                resource: Self::RESOURCE,
                status: response.status,
                message: response.message().map(str::to_owned),
                body: response.raw,
            });
        }

        Ok(CreateResult {
            status: response.status,
            key: spec.credentials(),
            ok: response.ok_flag() == Some(true),
            response,
        })
    }

    #[instrument(skip(self, key), fields(login = ?key.login))]
    fn resolve(&self, key: &Credentials) -> Result<ResolvedId, HarnessError> {
        let response = self.login(key)?;
        if response.status != 200 {
            warn!(status = response.status, body = %response.raw, "Courier login failed");
            return Ok(ResolvedId::Unresolved);
        }

        let login: LoginResponse = response.json("resolve courier")?;
        let raw = login.id.ok_or_else(|| {
            HarnessError::contract("resolve courier", format!("no `id` in {}", response.raw))
        })?;
        Ok(ResolvedId::Resolved(InternalId::from_backend(
            raw,
            "resolve courier",
        )?))
    }

    /// `DELETE /api/v1/courier/{id}`, expecting `200`.
    #[instrument(skip(self))]
    fn cleanup(&self, id: InternalId) -> Result<ApiResponse, HarnessError> {
        debug!("Sending request");
        let response = self
            .gateway
            .invoke(&ApiRequest::delete(format!("{COURIER}/{id}")))?;
        if response.status != 200 {
            return Err(HarnessError::CleanupFailed {
                resource: Self::RESOURCE,
                id: id.get(),
                status: response.status,
                body: response.raw,
            });
        }
        Ok(response)
    }
}
