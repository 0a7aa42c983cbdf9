//! Customer dashboard endpoints. All calls require a signed-in account.

use super::api::{self, ApiError, Method};
use super::endpoints;
use super::types::{Appointment, Message, NewAppointment, NewOrder, Order, Quotation};
use super::upload::{self, PickedFile, UploadForm, UploadProgress};

/// # Errors
///
/// See [`api::request`].
pub async fn my_appointments() -> Result<Vec<Appointment>, ApiError> {
    api::get(endpoints::APPOINTMENTS).await
}

/// # Errors
///
/// `Validation` when the slot is unavailable.
pub async fn book_appointment(request: &NewAppointment) -> Result<Appointment, ApiError> {
    api::send_json(Method::Post, endpoints::APPOINTMENTS, request).await
}

/// # Errors
///
/// See [`api::request`].
pub async fn cancel_appointment(id: &str) -> Result<Appointment, ApiError> {
    api::send_json(Method::Post, &endpoints::appointment_cancel(id), &serde_json::json!({})).await
}

/// # Errors
///
/// See [`api::request`].
pub async fn my_quotations() -> Result<Vec<Quotation>, ApiError> {
    api::get(endpoints::QUOTATIONS).await
}

/// Fields of a quotation request; drawings travel as multipart attachments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuotationDraft {
    pub title: String,
    pub description: String,
    pub material: Option<String>,
    pub quantity: Option<u32>,
    pub deadline: Option<String>,
}

impl QuotationDraft {
    /// Multipart form carrying the draft plus `attachments`.
    #[must_use]
    pub fn into_form(self, attachments: Vec<PickedFile>) -> UploadForm {
        UploadForm::new()
            .text("title", self.title)
            .text("description", self.description)
            .optional_text("material", self.material)
            .optional_text("quantity", self.quantity.map(|q| q.to_string()))
            .optional_text("deadline", self.deadline)
            .files("attachments", attachments)
    }
}

/// `POST /api/quotations` as multipart with upload progress.
///
/// # Errors
///
/// See [`upload::send_multipart`].
pub async fn request_quotation<F>(
    draft: QuotationDraft,
    attachments: Vec<PickedFile>,
    on_progress: F,
) -> Result<Quotation, ApiError>
where
    F: Fn(UploadProgress) + 'static,
{
    let form = draft.into_form(attachments);
    upload::send_multipart(Method::Post, endpoints::QUOTATIONS, form, on_progress).await
}

/// Accept or reject a quoted price.
///
/// # Errors
///
/// `Validation` when the quotation is no longer awaiting an answer.
pub async fn respond_quotation(id: &str, accept: bool) -> Result<Quotation, ApiError> {
    let body = serde_json::json!({ "accept": accept });
    api::send_json(Method::Post, &endpoints::quotation_response(id), &body).await
}

/// # Errors
///
/// See [`api::request`].
pub async fn my_orders() -> Result<Vec<Order>, ApiError> {
    api::get(endpoints::ORDERS).await
}

/// # Errors
///
/// `Validation` when stock changed since the cart was filled.
pub async fn place_order(order: &NewOrder) -> Result<Order, ApiError> {
    api::send_json(Method::Post, endpoints::ORDERS, order).await
}

/// # Errors
///
/// See [`api::request`].
pub async fn my_messages() -> Result<Vec<Message>, ApiError> {
    api::get(endpoints::MESSAGES).await
}

/// # Errors
///
/// See [`api::request`].
pub async fn send_message(body: &str) -> Result<Message, ApiError> {
    api::send_json(Method::Post, endpoints::MESSAGES, &serde_json::json!({ "body": body })).await
}
