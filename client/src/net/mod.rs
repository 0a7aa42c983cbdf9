//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns request plumbing (bearer header, 401 interception, error
//! mapping) and `upload` its multipart twin. `auth`, `catalog`, `customer`
//! and `admin` expose one async function per backend operation, grouped by
//! who may call them. `types` defines the shared wire schema.

pub mod admin;
pub mod api;
pub mod auth;
pub mod catalog;
pub mod customer;
pub mod endpoints;
pub mod types;
pub mod upload;
