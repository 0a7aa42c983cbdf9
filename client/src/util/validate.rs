//! Form input validation.
//!
//! Validators trim their input and return either the cleaned value or an
//! i18n key naming the first problem (`validation.*`). Form-level helpers
//! build the request DTOs the `net` layer sends.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::customer::QuotationDraft;
use crate::net::types::{
    BlogPost, ContactRequest, Employee, NewAppointment, Product, RegisterRequest, ShippingAddress, Task, TaskPriority,
    TaskStatus,
};

pub type Checked<T> = Result<T, &'static str>;

pub const MIN_PASSWORD_LEN: usize = 8;

// =============================================================================
// FIELDS
// =============================================================================

/// Trimmed, non-empty text.
///
/// # Errors
///
/// `validation.required` when blank.
pub fn required(raw: &str) -> Checked<String> {
    let value = raw.trim();
    if value.is_empty() { Err("validation.required") } else { Ok(value.to_owned()) }
}

/// Trimmed text or `None` when blank.
#[must_use]
pub fn optional(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// # Errors
///
/// `validation.required` or `validation.email`.
pub fn email(raw: &str) -> Checked<String> {
    let value = required(raw)?;
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if valid { Ok(value) } else { Err("validation.email") }
}

/// Optional phone: digits plus `+ - ( )` and spaces, 7 to 20 digits.
///
/// # Errors
///
/// `validation.phone`.
pub fn phone(raw: &str) -> Checked<Option<String>> {
    let Some(value) = optional(raw) else {
        return Ok(None);
    };
    let allowed = value.chars().all(|c| c.is_ascii_digit() || "+-() ".contains(c));
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if allowed && (7..=20).contains(&digits) { Ok(Some(value)) } else { Err("validation.phone") }
}

/// # Errors
///
/// `validation.password_short`.
pub fn password(raw: &str) -> Checked<String> {
    if raw.chars().count() < MIN_PASSWORD_LEN { Err("validation.password_short") } else { Ok(raw.to_owned()) }
}

/// `YYYY-MM-DD` with a plausible month and day.
///
/// # Errors
///
/// `validation.date`.
pub fn date(raw: &str) -> Checked<String> {
    let value = raw.trim();
    if !super::format::is_iso_date(value) {
        return Err("validation.date");
    }
    let month: u32 = value[5..7].parse().map_err(|_| "validation.date")?;
    let day: u32 = value[8..10].parse().map_err(|_| "validation.date")?;
    if (1..=12).contains(&month) && (1..=31).contains(&day) { Ok(value.to_owned()) } else { Err("validation.date") }
}

/// 24-hour `HH:MM`.
///
/// # Errors
///
/// `validation.time`.
pub fn time(raw: &str) -> Checked<String> {
    let value = raw.trim();
    let Some((h, m)) = value.split_once(':') else {
        return Err("validation.time");
    };
    let ok = h.len() == 2
        && m.len() == 2
        && h.parse::<u32>().is_ok_and(|h| h < 24)
        && m.parse::<u32>().is_ok_and(|m| m < 60);
    if ok { Ok(value.to_owned()) } else { Err("validation.time") }
}

/// Decimal price (`"12"`, `"12.5"`, `"12.50"`, `"1,200.00"`) to cents.
#[must_use]
pub fn parse_price(raw: &str) -> Option<i64> {
    let cleaned: String = raw.trim().trim_start_matches('$').chars().filter(|c| *c != ',').collect();
    let (whole, frac) = match cleaned.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (cleaned.as_str(), ""),
    };
    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let whole: i64 = whole.parse().ok()?;
    let frac_cents: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };
    whole.checked_mul(100)?.checked_add(frac_cents)
}

/// # Errors
///
/// `validation.price` when unparseable or zero.
pub fn price(raw: &str) -> Checked<i64> {
    parse_price(raw).filter(|c| *c > 0).ok_or("validation.price")
}

/// # Errors
///
/// `validation.stock`.
pub fn stock(raw: &str) -> Checked<u32> {
    raw.trim().parse().map_err(|_| "validation.stock")
}

/// Optional positive quantity.
///
/// # Errors
///
/// `validation.quantity`.
pub fn quantity(raw: &str) -> Checked<Option<u32>> {
    match optional(raw) {
        None => Ok(None),
        Some(v) => v.parse::<u32>().ok().filter(|q| *q > 0).map(Some).ok_or("validation.quantity"),
    }
}

/// URL slug derived from a title: lowercase ASCII words joined by `-`.
#[must_use]
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// # Errors
///
/// `validation.slug` unless lowercase ASCII words joined by single `-`.
pub fn slug(raw: &str) -> Checked<String> {
    let value = raw.trim();
    let ok = !value.is_empty()
        && value.split('-').all(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    if ok { Ok(value.to_owned()) } else { Err("validation.slug") }
}

// =============================================================================
// FORMS
// =============================================================================

/// # Errors
///
/// First failing field key.
pub fn login(email_raw: &str, password_raw: &str) -> Checked<(String, String)> {
    let email = email(email_raw)?;
    if password_raw.is_empty() {
        return Err("validation.required");
    }
    Ok((email, password_raw.to_owned()))
}

/// Raw registration form fields.
#[derive(Clone, Debug, Default)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm: String,
}

/// # Errors
///
/// First failing field key; `validation.password_mismatch` when the
/// confirmation differs.
pub fn register(input: &RegisterInput) -> Checked<RegisterRequest> {
    let name = required(&input.name)?;
    let email = email(&input.email)?;
    let phone = phone(&input.phone)?;
    let password = password(&input.password)?;
    if input.password != input.confirm {
        return Err("validation.password_mismatch");
    }
    Ok(RegisterRequest { name, email, phone, password })
}

/// # Errors
///
/// First failing field key.
pub fn contact(input: &ContactRequest) -> Checked<ContactRequest> {
    Ok(ContactRequest {
        name: required(&input.name)?,
        email: email(&input.email)?,
        phone: phone(input.phone.as_deref().unwrap_or_default())?,
        subject: required(&input.subject)?,
        message: required(&input.message)?,
    })
}

/// # Errors
///
/// First failing field key.
pub fn appointment(input: &NewAppointment) -> Checked<NewAppointment> {
    Ok(NewAppointment {
        service: required(&input.service)?,
        date: date(&input.date)?,
        time: time(&input.time)?,
        notes: input.notes.as_deref().and_then(optional),
    })
}

/// Raw quotation request fields.
#[derive(Clone, Debug, Default)]
pub struct QuotationInput {
    pub title: String,
    pub description: String,
    pub material: String,
    pub quantity: String,
    pub deadline: String,
}

/// # Errors
///
/// First failing field key.
pub fn quotation(input: &QuotationInput) -> Checked<QuotationDraft> {
    let deadline = match optional(&input.deadline) {
        Some(raw) => Some(date(&raw)?),
        None => None,
    };
    Ok(QuotationDraft {
        title: required(&input.title)?,
        description: required(&input.description)?,
        material: optional(&input.material),
        quantity: quantity(&input.quantity)?,
        deadline,
    })
}

/// # Errors
///
/// First failing field key. Phone is mandatory for deliveries.
pub fn shipping(input: &ShippingAddress) -> Checked<ShippingAddress> {
    let phone = phone(&input.phone)?.ok_or("validation.required")?;
    Ok(ShippingAddress {
        full_name: required(&input.full_name)?,
        phone,
        address: required(&input.address)?,
        city: required(&input.city)?,
        postal_code: required(&input.postal_code)?,
        country: required(&input.country)?,
    })
}

/// Raw product editor fields.
#[derive(Clone, Debug, Default)]
pub struct ProductInput {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub stock: String,
    pub active: bool,
    pub image_url: Option<String>,
}

impl ProductInput {
    /// Prefill the editor from an existing product.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            price: super::format::decimal(product.price_cents),
            stock: product.stock.to_string(),
            active: product.active,
            image_url: product.image_url.clone(),
        }
    }
}

/// # Errors
///
/// First failing field key.
pub fn product(input: &ProductInput) -> Checked<Product> {
    Ok(Product {
        id: input.id.clone(),
        name: required(&input.name)?,
        description: input.description.trim().to_owned(),
        category: required(&input.category)?,
        price_cents: price(&input.price)?,
        stock: stock(&input.stock)?,
        image_url: input.image_url.clone(),
        active: input.active,
    })
}

/// # Errors
///
/// First failing field key.
pub fn employee(input: &Employee) -> Checked<Employee> {
    Ok(Employee {
        id: input.id.clone(),
        name: required(&input.name)?,
        email: email(&input.email)?,
        phone: phone(input.phone.as_deref().unwrap_or_default())?,
        position: required(&input.position)?,
        active: input.active,
    })
}

/// Raw task editor fields.
#[derive(Clone, Debug, Default)]
pub struct TaskInput {
    pub id: String,
    pub title: String,
    pub description: String,
    pub assignee_id: String,
    pub due_date: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
}

impl TaskInput {
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            assignee_id: task.assignee_id.clone().unwrap_or_default(),
            due_date: task.due_date.clone().unwrap_or_default(),
            status: task.status,
            priority: task.priority,
        }
    }
}

/// # Errors
///
/// First failing field key.
pub fn task(input: &TaskInput) -> Checked<Task> {
    let due_date = match optional(&input.due_date) {
        Some(raw) => Some(date(&raw)?),
        None => None,
    };
    Ok(Task {
        id: input.id.clone(),
        title: required(&input.title)?,
        description: optional(&input.description),
        assignee_id: optional(&input.assignee_id),
        assignee_name: None,
        due_date,
        status: input.status,
        priority: input.priority,
    })
}

/// # Errors
///
/// First failing field key. A blank slug is derived from the title.
pub fn post(input: &BlogPost) -> Checked<BlogPost> {
    let title = required(&input.title)?;
    let slug = match optional(&input.slug) {
        Some(raw) => slug(&raw)?,
        None => slug(&slugify(&title))?,
    };
    Ok(BlogPost {
        id: input.id.clone(),
        slug,
        title,
        excerpt: input.excerpt.trim().to_owned(),
        body: required(&input.body)?,
        cover_url: input.cover_url.clone(),
        author: input.author.clone(),
        published_at: input.published_at.clone(),
        published: input.published,
    })
}
