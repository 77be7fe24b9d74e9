use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::http::{Method, header};
use actix_web::{HttpResponse, Responder, guard, web};

use crate::repository::{ContactReader, ContactWriter};

pub mod contacts;

/// The only origin allowed to call the API from a browser.
pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";
pub const ALLOWED_METHODS: &str = "GET, POST, PUT, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// CORS policy applied to every actual request.
///
/// Preflight handling is left to [`preflight`] so that every `OPTIONS` request
/// gets the same answer whether or not it carries an `Origin`.
pub fn cors() -> Cors {
    Cors::default()
        .allowed_origin(ALLOWED_ORIGIN)
        .allowed_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allowed_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .disable_preflight()
}

/// Answers `OPTIONS` on any path with the fixed allow-list and no body.
pub async fn preflight() -> impl Responder {
    HttpResponse::Ok()
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOWED_ORIGIN))
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS))
        .finish()
}

fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest()
        .content_type("text/plain; charset=utf-8")
        .body(message.into())
}

/// Register the contact endpoints, the catch-all `OPTIONS` handler and the
/// extractor error handlers for a repository of type `R`.
pub fn configure<R>(cfg: &mut web::ServiceConfig)
where
    R: ContactReader + ContactWriter + Send + Sync + 'static,
{
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected path parameters: {err}");
        InternalError::from_response(err, bad_request(contacts::INVALID_CONTACT_ID)).into()
    }))
    .app_data(web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected JSON body: {err}");
        let message = format!("Invalid JSON body: {err}");
        InternalError::from_response(err, bad_request(message)).into()
    }))
    // Registered first: resources that match the path but not the method
    // would otherwise answer OPTIONS with 405.
    .service(
        web::resource("/{tail:.*}")
            .guard(guard::Options())
            .to(preflight),
    )
    .service(
        web::resource("/contacts")
            .route(web::get().to(contacts::list_contacts::<R>))
            .route(web::post().to(contacts::add_contact::<R>)),
    )
    .service(
        web::resource("/contacts/{id}/reminder")
            .route(web::put().to(contacts::update_reminder_date::<R>)),
    );
}
