//! Back-office endpoints. The backend enforces roles; the UI only hides
//! screens a role cannot use.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use serde::Serialize;

use super::api::{self, ApiError, Method};
use super::endpoints;
use super::types::{
    AnalyticsSummary, Appointment, AppointmentStatus, BlogPost, Employee, Order, OrderStatus, Product, Quotation,
    QuotationStatus, Role, Task, TaskStatus, User,
};
use super::upload::{self, PickedFile, UploadForm, UploadProgress};

#[derive(Serialize)]
struct StatusBody<S: Serialize> {
    status: S,
}

// =============================================================================
// USERS + EMPLOYEES
// =============================================================================

/// # Errors
///
/// See [`api::request`].
pub async fn list_users() -> Result<Vec<User>, ApiError> {
    api::get(endpoints::ADMIN_USERS).await
}

/// Change a user's role and active flag.
///
/// # Errors
///
/// See [`api::request`].
pub async fn update_user(id: &str, role: Role, active: bool) -> Result<User, ApiError> {
    let body = serde_json::json!({ "role": role, "active": active });
    api::send_json(Method::Patch, &endpoints::item(endpoints::ADMIN_USERS, id), &body).await
}

/// # Errors
///
/// See [`api::request`].
pub async fn delete_user(id: &str) -> Result<(), ApiError> {
    api::delete(&endpoints::item(endpoints::ADMIN_USERS, id)).await
}

/// # Errors
///
/// See [`api::request`].
pub async fn list_employees() -> Result<Vec<Employee>, ApiError> {
    api::get(endpoints::ADMIN_EMPLOYEES).await
}

/// Create (empty id) or update an employee.
///
/// # Errors
///
/// See [`api::request`].
pub async fn save_employee(employee: &Employee) -> Result<Employee, ApiError> {
    let (method, path) = save_route(endpoints::ADMIN_EMPLOYEES, &employee.id);
    api::send_json(method, &path, employee).await
}

/// # Errors
///
/// See [`api::request`].
pub async fn delete_employee(id: &str) -> Result<(), ApiError> {
    api::delete(&endpoints::item(endpoints::ADMIN_EMPLOYEES, id)).await
}

// =============================================================================
// APPOINTMENTS + QUOTATIONS
// =============================================================================

/// # Errors
///
/// See [`api::request`].
pub async fn all_appointments() -> Result<Vec<Appointment>, ApiError> {
    api::get(endpoints::ADMIN_APPOINTMENTS).await
}

/// # Errors
///
/// See [`api::request`].
pub async fn set_appointment_status(id: &str, status: AppointmentStatus) -> Result<Appointment, ApiError> {
    let path = endpoints::action(endpoints::ADMIN_APPOINTMENTS, id, "status");
    api::send_json(Method::Patch, &path, &StatusBody { status }).await
}

/// # Errors
///
/// See [`api::request`].
pub async fn all_quotations() -> Result<Vec<Quotation>, ApiError> {
    api::get(endpoints::ADMIN_QUOTATIONS).await
}

/// Send a price to the customer; moves the quotation to `quoted`.
///
/// # Errors
///
/// See [`api::request`].
pub async fn quote(id: &str, price_cents: i64, notes: Option<String>) -> Result<Quotation, ApiError> {
    let body = serde_json::json!({
        "price_cents": price_cents,
        "admin_notes": notes,
        "status": QuotationStatus::Quoted,
    });
    api::send_json(Method::Patch, &endpoints::item(endpoints::ADMIN_QUOTATIONS, id), &body).await
}

/// # Errors
///
/// See [`api::request`].
pub async fn set_quotation_status(id: &str, status: QuotationStatus) -> Result<Quotation, ApiError> {
    let path = endpoints::action(endpoints::ADMIN_QUOTATIONS, id, "status");
    api::send_json(Method::Patch, &path, &StatusBody { status }).await
}

// =============================================================================
// TASKS
// =============================================================================

/// # Errors
///
/// See [`api::request`].
pub async fn list_tasks() -> Result<Vec<Task>, ApiError> {
    api::get(endpoints::ADMIN_TASKS).await
}

/// Create (empty id) or update a task.
///
/// # Errors
///
/// See [`api::request`].
pub async fn save_task(task: &Task) -> Result<Task, ApiError> {
    let (method, path) = save_route(endpoints::ADMIN_TASKS, &task.id);
    api::send_json(method, &path, task).await
}

/// # Errors
///
/// See [`api::request`].
pub async fn set_task_status(id: &str, status: TaskStatus) -> Result<Task, ApiError> {
    let path = endpoints::action(endpoints::ADMIN_TASKS, id, "status");
    api::send_json(Method::Patch, &path, &StatusBody { status }).await
}

/// # Errors
///
/// See [`api::request`].
pub async fn delete_task(id: &str) -> Result<(), ApiError> {
    api::delete(&endpoints::item(endpoints::ADMIN_TASKS, id)).await
}

// =============================================================================
// PRODUCTS + ORDERS
// =============================================================================

/// Admin catalog, inactive products included.
///
/// # Errors
///
/// See [`api::request`].
pub async fn all_products() -> Result<Vec<Product>, ApiError> {
    api::get(endpoints::ADMIN_PRODUCTS).await
}

/// Multipart form for a product, with an optional replacement image.
#[must_use]
pub fn product_form(product: &Product, image: Option<PickedFile>) -> UploadForm {
    let form = UploadForm::new()
        .text("name", product.name.clone())
        .text("description", product.description.clone())
        .text("category", product.category.clone())
        .text("price_cents", product.price_cents.to_string())
        .text("stock", product.stock.to_string())
        .text("active", product.active.to_string());
    match image {
        Some(image) => form.file("image", image),
        None => form,
    }
}

/// Create (empty id) or update a product.
///
/// # Errors
///
/// See [`upload::send_multipart`].
pub async fn save_product<F>(product: &Product, image: Option<PickedFile>, on_progress: F) -> Result<Product, ApiError>
where
    F: Fn(UploadProgress) + 'static,
{
    let (method, path) = save_route(endpoints::ADMIN_PRODUCTS, &product.id);
    upload::send_multipart(method, &path, product_form(product, image), on_progress).await
}

/// # Errors
///
/// See [`api::request`].
pub async fn delete_product(id: &str) -> Result<(), ApiError> {
    api::delete(&endpoints::item(endpoints::ADMIN_PRODUCTS, id)).await
}

/// # Errors
///
/// See [`api::request`].
pub async fn all_orders() -> Result<Vec<Order>, ApiError> {
    api::get(endpoints::ADMIN_ORDERS).await
}

/// # Errors
///
/// See [`api::request`].
pub async fn set_order_status(id: &str, status: OrderStatus) -> Result<Order, ApiError> {
    let path = endpoints::action(endpoints::ADMIN_ORDERS, id, "status");
    api::send_json(Method::Patch, &path, &StatusBody { status }).await
}

// =============================================================================
// BLOG + ANALYTICS
// =============================================================================

/// Multipart form for a blog post, with an optional replacement cover.
#[must_use]
pub fn post_form(post: &BlogPost, cover: Option<PickedFile>) -> UploadForm {
    let form = UploadForm::new()
        .text("title", post.title.clone())
        .text("slug", post.slug.clone())
        .text("excerpt", post.excerpt.clone())
        .text("body", post.body.clone())
        .text("published", post.published.to_string());
    match cover {
        Some(cover) => form.file("cover", cover),
        None => form,
    }
}

/// Create (empty id) or update a post.
///
/// # Errors
///
/// See [`upload::send_multipart`].
pub async fn save_post<F>(post: &BlogPost, cover: Option<PickedFile>, on_progress: F) -> Result<BlogPost, ApiError>
where
    F: Fn(UploadProgress) + 'static,
{
    let (method, path) = save_route(endpoints::ADMIN_POSTS, &post.id);
    upload::send_multipart(method, &path, post_form(post, cover), on_progress).await
}

/// # Errors
///
/// See [`api::request`].
pub async fn delete_post(id: &str) -> Result<(), ApiError> {
    api::delete(&endpoints::item(endpoints::ADMIN_POSTS, id)).await
}

/// Admin list of every post, drafts included.
///
/// # Errors
///
/// See [`api::request`].
pub async fn all_posts() -> Result<Vec<BlogPost>, ApiError> {
    api::get(endpoints::ADMIN_POSTS).await
}

/// # Errors
///
/// See [`api::request`].
pub async fn analytics() -> Result<AnalyticsSummary, ApiError> {
    api::get(endpoints::ADMIN_ANALYTICS).await
}

/// `POST` to the collection for new records, `PUT` to the item otherwise.
fn save_route(base: &str, id: &str) -> (Method, String) {
    let method = if id.trim().is_empty() { Method::Post } else { Method::Put };
    (method, endpoints::save_target(base, id))
}
