//! Colored status pill for orders, appointments, quotations and tasks.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

use crate::i18n::use_i18n;
use crate::net::types::{AppointmentStatus, OrderStatus, QuotationStatus, Role, TaskPriority, TaskStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Info,
    Warning,
    Success,
    Danger,
}

impl Tone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Tone::Neutral => "badge badge--neutral",
            Tone::Info => "badge badge--info",
            Tone::Warning => "badge badge--warning",
            Tone::Success => "badge badge--success",
            Tone::Danger => "badge badge--danger",
        }
    }
}

/// Label key plus tone; every status enum converts into one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Badge {
    pub key: &'static str,
    pub tone: Tone,
}

impl From<OrderStatus> for Badge {
    fn from(status: OrderStatus) -> Self {
        let tone = match status {
            OrderStatus::Pending => Tone::Warning,
            OrderStatus::Processing | OrderStatus::Shipped => Tone::Info,
            OrderStatus::Delivered => Tone::Success,
            OrderStatus::Cancelled => Tone::Danger,
        };
        Badge { key: status.label_key(), tone }
    }
}

impl From<AppointmentStatus> for Badge {
    fn from(status: AppointmentStatus) -> Self {
        let tone = match status {
            AppointmentStatus::Pending => Tone::Warning,
            AppointmentStatus::Confirmed => Tone::Info,
            AppointmentStatus::Completed => Tone::Success,
            AppointmentStatus::Cancelled => Tone::Danger,
        };
        Badge { key: status.label_key(), tone }
    }
}

impl From<QuotationStatus> for Badge {
    fn from(status: QuotationStatus) -> Self {
        let tone = match status {
            QuotationStatus::Pending => Tone::Warning,
            QuotationStatus::Quoted => Tone::Info,
            QuotationStatus::Accepted => Tone::Success,
            QuotationStatus::Rejected => Tone::Danger,
        };
        Badge { key: status.label_key(), tone }
    }
}

impl From<TaskStatus> for Badge {
    fn from(status: TaskStatus) -> Self {
        let tone = match status {
            TaskStatus::Todo => Tone::Neutral,
            TaskStatus::InProgress => Tone::Info,
            TaskStatus::Done => Tone::Success,
        };
        Badge { key: status.label_key(), tone }
    }
}

impl From<TaskPriority> for Badge {
    fn from(priority: TaskPriority) -> Self {
        let tone = match priority {
            TaskPriority::Low => Tone::Neutral,
            TaskPriority::Medium => Tone::Warning,
            TaskPriority::High => Tone::Danger,
        };
        Badge { key: priority.label_key(), tone }
    }
}

impl From<Role> for Badge {
    fn from(role: Role) -> Self {
        let tone = match role {
            Role::Customer => Tone::Neutral,
            Role::Employee => Tone::Info,
            Role::Admin => Tone::Success,
        };
        Badge { key: role.label_key(), tone }
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] badge: Badge) -> impl IntoView {
    let i18n = use_i18n();
    view! { <span class=badge.tone.class()>{move || i18n.t(badge.key)}</span> }
}
