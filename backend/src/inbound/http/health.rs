//! Health endpoints: liveness and readiness probes for orchestration and
//! load balancers.
//!
//! Probe replies use the standard envelope with a `null` payload.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::StatusCode, http::header, web};

use crate::inbound::http::envelope::Envelope;

/// Shared health state for readiness and liveness checks.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Create a new health state starting as not ready but live.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the service as unhealthy so liveness checks fail fast during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Return readiness state.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Return liveness state. When false, liveness probes emit 503 to trigger restarts.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool, failure: &str) -> HttpResponse {
        let (status, body) = if probe_ok {
            (StatusCode::OK, Envelope::<()>::success(StatusCode::OK, None))
        } else {
            let status = StatusCode::SERVICE_UNAVAILABLE;
            (status, Envelope::failure(status, failure))
        };

        HttpResponse::build(status)
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .json(body)
    }
}

/// Readiness probe. Return 200 once state is built and the listener is bound; 503 otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic", body = crate::inbound::http::schemas::EmptyEnvelopeSchema),
        (status = 503, description = "Server is not ready", body = crate::inbound::http::schemas::EmptyEnvelopeSchema)
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready(), "service not ready")
}

/// Liveness probe. Return 200 while the process is marked alive and 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive", body = crate::inbound::http::schemas::EmptyEnvelopeSchema),
        (status = 503, description = "Server is shutting down", body = crate::inbound::http::schemas::EmptyEnvelopeSchema)
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive(), "service shutting down")
}
