use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::error::InternalError;
use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::mail::send_email::EmailClient;
use crate::routes::contact::send_contact_email;
use crate::routes::health::health_check;

pub fn run(listener: TcpListener, email_client: EmailClient) -> Result<Server, std::io::Error> {
    let email_client = web::Data::new(email_client);
    Ok(HttpServer::new(move || {
        // Keep the wire contract JSON in every branch: a body that does not
        // deserialize gets the same `{ "error": ... }` shape as a rejected one.
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            let body = HttpResponse::BadRequest()
                .json(serde_json::json!({ "error": err.to_string() }));
            InternalError::from_response(err, body).into()
        });

        App::new()
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(health_check))
            .route("/api/send-email", web::post().to(send_contact_email))
            .app_data(json_config)
            .app_data(email_client.clone())
    })
    .listen(listener)?
    .run())
}
