use actix_web::{HttpResponse, Responder, web};

use crate::domain::types::ContactId;
use crate::forms::contacts::{AddContactForm, AddContactFormPayload, UpdateReminderForm};
use crate::repository::{ContactReader, ContactWriter};
use crate::services::ServiceError;
use crate::services::contacts::{
    add_contact as add_contact_service, list_contacts as list_contacts_service,
    update_reminder_date as update_reminder_date_service,
};

pub const INVALID_CONTACT_ID: &str = "Invalid contact id";

/// Turn a service failure into a plain-text response.
///
/// Client mistakes carry their validation message; everything else gets the
/// fixed `internal_message`.
fn error_response(err: ServiceError, internal_message: &'static str) -> HttpResponse {
    match err {
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            HttpResponse::BadRequest()
                .content_type("text/plain; charset=utf-8")
                .body(message)
        }
        ServiceError::Internal => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(internal_message),
    }
}

fn blocking_failed(e: actix_web::error::BlockingError) -> ServiceError {
    log::error!("Blocking task failed: {e}");
    ServiceError::Internal
}

pub async fn list_contacts<R>(repo: web::Data<R>) -> impl Responder
where
    R: ContactReader + Send + Sync + 'static,
{
    let result = web::block(move || list_contacts_service(repo.get_ref()))
        .await
        .map_err(blocking_failed)
        .and_then(|result| result);

    match result {
        Ok(contacts) => HttpResponse::Ok().json(contacts),
        Err(err) => error_response(err, "Error fetching contacts"),
    }
}

pub async fn add_contact<R>(
    repo: web::Data<R>,
    web::Json(form): web::Json<AddContactForm>,
) -> impl Responder
where
    R: ContactWriter + Send + Sync + 'static,
{
    let payload: AddContactFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e), "Error adding contact"),
    };

    let result = web::block(move || add_contact_service(payload, repo.get_ref()))
        .await
        .map_err(blocking_failed)
        .and_then(|result| result);

    match result {
        Ok(()) => HttpResponse::Created()
            .content_type("text/plain; charset=utf-8")
            .body("Contact added successfully!"),
        Err(err) => error_response(err, "Error adding contact"),
    }
}

/// Read the reminder body regardless of `Content-Type`.
///
/// An empty body means no `reminderDate`, which clears the reminder.
fn parse_reminder_body(body: &[u8]) -> Result<UpdateReminderForm, HttpResponse> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(UpdateReminderForm::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        HttpResponse::BadRequest()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Invalid JSON body: {e}"))
    })
}

pub async fn update_reminder_date<R>(
    contact_id: web::Path<i32>,
    repo: web::Data<R>,
    body: web::Bytes,
) -> impl Responder
where
    R: ContactWriter + Send + Sync + 'static,
{
    let contact_id = match ContactId::new(contact_id.into_inner()) {
        Ok(id) => id,
        Err(_) => {
            return HttpResponse::BadRequest()
                .content_type("text/plain; charset=utf-8")
                .body(INVALID_CONTACT_ID);
        }
    };

    let form = match parse_reminder_body(&body) {
        Ok(form) => form,
        Err(response) => return response,
    };

    let payload = match form.into_payload(contact_id) {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e), "Error updating reminder date"),
    };

    let result = web::block(move || update_reminder_date_service(payload, repo.get_ref()))
        .await
        .map_err(blocking_failed)
        .and_then(|result| result);

    match result {
        Ok(()) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body("Reminder date updated successfully"),
        Err(err) => error_response(err, "Error updating reminder date"),
    }
}
