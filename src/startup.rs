use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::error::InternalError;
use actix_web::http::{header, Method};
use actix_web::web::Data;
use actix_web::{web, App, HttpResponse, HttpServer, Resource};
use tracing_actix_web::TracingLogger;

use crate::configuration::CorsSettings;
use crate::domain::{ContactForm, OutageReport, SignupRequest, SupportForm, VoipSupport};
use crate::routes::health_check::health_check;
use crate::routes::support_forms::{method_not_allowed, submit_form, SubmissionResponse};
use crate::ticket_client::TicketClient;

const MAX_FORM_BYTES: usize = 64 * 1024;

pub fn run(
    listener: TcpListener,
    ticket_client: TicketClient,
    cors: CorsSettings,
) -> Result<Server, std::io::Error> {
    let ticket_client = Data::new(ticket_client);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&cors))
            .wrap(TracingLogger::default())
            .app_data(json_config())
            .route("/health", web::get().to(health_check))
            .service(
                web::scope("/api/v1")
                    .service(form_resource::<ContactForm>("/contact-us"))
                    .service(form_resource::<OutageReport>("/report-an-outage"))
                    .service(form_resource::<SignupRequest>("/sign-up"))
                    .service(form_resource::<VoipSupport>("/voip-support")),
            )
            .app_data(ticket_client.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

fn form_resource<F: SupportForm>(path: &str) -> Resource {
    web::resource(path)
        .route(web::post().to(submit_form::<F>))
        .route(web::method(Method::OPTIONS).to(|| async { HttpResponse::Ok().finish() }))
        .default_service(web::route().to(method_not_allowed))
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_FORM_BYTES)
        .content_type_required(false)
        .error_handler(|err, _req| {
            tracing::warn!(error.message = %err, "Rejected an undecodable form body");
            let response =
                HttpResponse::BadRequest().json(SubmissionResponse::failure("Invalid request body"));
            InternalError::from_response(err, response).into()
        })
}

fn build_cors(settings: &CorsSettings) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(3600);

    if settings.allows_any_origin() {
        return cors.allow_any_origin();
    }
    settings
        .allowed_origins()
        .into_iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
