use actix_web::{HttpResponse, Responder};
use tracing;
use uuid::Uuid;

/// Liveness probe. Empty 200 body, one span per probe.
pub async fn health_check() -> impl Responder {
    let request_id = Uuid::new_v4();
    let probe_span = tracing::info_span!(
        "Answering liveness probe",
        %request_id,
    );

    let _probe_span_guard = probe_span.enter();
    tracing::info!("Service is up");
    HttpResponse::Ok()
}
