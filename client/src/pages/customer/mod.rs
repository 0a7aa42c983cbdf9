//! Customer dashboard pages, nested under `/dashboard`.

pub mod appointments;
pub mod messages;
pub mod orders;
pub mod overview;
pub mod quotations;
