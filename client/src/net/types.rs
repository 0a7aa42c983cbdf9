//! Shared DTOs for the client/backend REST boundary.
//!
//! DESIGN
//! ======
//! These records mirror the backend JSON one-to-one. Money is carried as
//! integer cents and timestamps stay as RFC 3339 strings; the UI formats them
//! at render time through `util::format`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// USERS + AUTH
// =============================================================================

/// Account role. Staff (employees and admins) reach the back-office.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Employee,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Customer, Role::Employee, Role::Admin];

    #[must_use]
    pub fn is_staff(self) -> bool {
        matches!(self, Role::Employee | Role::Admin)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Employee => "employee",
            Role::Admin => "admin",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == raw)
    }

    /// i18n key for the role label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Role::Customer => "role.customer",
            Role::Employee => "role.employee",
            Role::Admin => "role.admin",
        }
    }
}

/// An account as returned by `/api/auth/me` and the admin user list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Token + account returned by login and registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
}

// =============================================================================
// MARKETING CONTENT
// =============================================================================

/// A fabrication service shown on the services page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A completed project in the portfolio gallery.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub completed_on: Option<String>,
}

/// A blog article. `body` is markdown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default = "default_true")]
    pub published: bool,
}

/// One page of a paginated listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
}

impl<T> Page<T> {
    /// Number of pages implied by `total` and `per_page`, at least one.
    #[must_use]
    pub fn page_count(&self) -> u32 {
        if self.per_page == 0 {
            return 1;
        }
        self.total.div_ceil(self.per_page).max(1)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

// =============================================================================
// SHOP
// =============================================================================

/// A catalog product. Prices are integer cents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub price_cents: i64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

/// Shop listing filters sent as query parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl ProductFilter {
    /// Non-empty filter values as `(name, value)` query pairs.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            pairs.push(("category", category.to_owned()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_owned()));
        }
        pairs
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// i18n key for the status label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            OrderStatus::Pending => "order_status.pending",
            OrderStatus::Processing => "order_status.processing",
            OrderStatus::Shipped => "order_status.shipped",
            OrderStatus::Delivered => "order_status.delivered",
            OrderStatus::Cancelled => "order_status.cancelled",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: String,
    pub name: String,
    pub unit_price_cents: i64,
    pub quantity: u32,
}

impl OrderLine {
    #[must_use]
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * i64::from(self.quantity)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub items: Vec<OrderLine>,
    pub subtotal_cents: i64,
    #[serde(default)]
    pub tax_cents: i64,
    #[serde(default)]
    pub shipping_cents: i64,
    pub total_cents: i64,
    #[serde(default)]
    pub status: OrderStatus,
    pub shipping: ShippingAddress,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Checkout payload. The backend recomputes totals; ours are for display parity.
///
/// `client_ref` is generated once per checkout attempt so a double submit
/// resolves to the same order server-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub client_ref: String,
    pub items: Vec<OrderLine>,
    pub shipping: ShippingAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// =============================================================================
// CUSTOMER DASHBOARD
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    /// i18n key for the status label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "appointment_status.pending",
            AppointmentStatus::Confirmed => "appointment_status.confirmed",
            AppointmentStatus::Completed => "appointment_status.completed",
            AppointmentStatus::Cancelled => "appointment_status.cancelled",
        }
    }

    /// Customers may cancel only before the visit is settled.
    #[must_use]
    pub fn is_cancellable(self) -> bool {
        matches!(self, AppointmentStatus::Pending | AppointmentStatus::Confirmed)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub service: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: AppointmentStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub service: String,
    pub date: String,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotationStatus {
    #[default]
    Pending,
    Quoted,
    Accepted,
    Rejected,
}

impl QuotationStatus {
    pub const ALL: [QuotationStatus; 4] = [
        QuotationStatus::Pending,
        QuotationStatus::Quoted,
        QuotationStatus::Accepted,
        QuotationStatus::Rejected,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QuotationStatus::Pending => "pending",
            QuotationStatus::Quoted => "quoted",
            QuotationStatus::Accepted => "accepted",
            QuotationStatus::Rejected => "rejected",
        }
    }

    /// i18n key for the status label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            QuotationStatus::Pending => "quotation_status.pending",
            QuotationStatus::Quoted => "quotation_status.quoted",
            QuotationStatus::Accepted => "quotation_status.accepted",
            QuotationStatus::Rejected => "quotation_status.rejected",
        }
    }

    /// A customer can answer a quotation once a price has been sent.
    #[must_use]
    pub fn awaits_customer(self) -> bool {
        self == QuotationStatus::Quoted
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    pub id: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub status: QuotationStatus,
    #[serde(default)]
    pub price_cents: Option<i64>,
    #[serde(default)]
    pub admin_notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    #[serde(default)]
    pub sender_id: Option<String>,
    pub sender_name: String,
    pub body: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub from_staff: bool,
}

// =============================================================================
// BACK-OFFICE
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub position: String,
    #[serde(default = "default_true")]
    pub active: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }

    /// i18n key for the status label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            TaskStatus::Todo => "task_status.todo",
            TaskStatus::InProgress => "task_status.in_progress",
            TaskStatus::Done => "task_status.done",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }

    /// i18n key for the status label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            TaskPriority::Low => "priority.low",
            TaskPriority::Medium => "priority.medium",
            TaskPriority::High => "priority.high",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub assignee_name: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub revenue_cents: i64,
    pub orders: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub revenue_cents: i64,
    pub orders: u32,
    pub customers: u32,
    pub pending_quotations: u32,
    pub upcoming_appointments: u32,
    #[serde(default)]
    pub monthly_revenue: Vec<MonthlyPoint>,
}

fn default_true() -> bool {
    true
}
