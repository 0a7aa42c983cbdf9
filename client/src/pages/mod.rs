//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form state, toasts)
//! and delegates rendering details to `components`. Public marketing and
//! shop pages sit at the top level; `customer` and `admin` hold the nested
//! dashboard screens rendered inside `DashboardLayout`.

pub mod about;
pub mod admin;
pub mod blog;
pub mod cart;
pub mod checkout;
pub mod contact;
pub mod customer;
pub mod home;
pub mod login;
pub mod not_found;
pub mod portfolio;
pub mod services;
pub mod shop;
