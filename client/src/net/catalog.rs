//! Public catalog endpoints backing the marketing site and the shop.

use super::api::{self, ApiError, Method};
use super::endpoints;
use super::types::{BlogPost, ContactRequest, Page, PortfolioItem, Product, ProductFilter, ServiceOffering};

/// Posts per blog page.
pub const POSTS_PER_PAGE: u32 = 6;

/// # Errors
///
/// See [`api::request`].
pub async fn list_services() -> Result<Vec<ServiceOffering>, ApiError> {
    api::get(endpoints::SERVICES).await
}

/// # Errors
///
/// See [`api::request`].
pub async fn list_portfolio() -> Result<Vec<PortfolioItem>, ApiError> {
    api::get(endpoints::PORTFOLIO).await
}

/// One page of published posts, 1-based.
///
/// # Errors
///
/// See [`api::request`].
pub async fn list_posts(page: u32) -> Result<Page<BlogPost>, ApiError> {
    let query = [("page", page.max(1).to_string()), ("per_page", POSTS_PER_PAGE.to_string())];
    api::get_with_query(endpoints::POSTS, &query).await
}

/// # Errors
///
/// `NotFound` for unknown slugs.
pub async fn fetch_post(slug: &str) -> Result<BlogPost, ApiError> {
    api::get(&endpoints::post(slug)).await
}

/// # Errors
///
/// See [`api::request`].
pub async fn list_products(filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
    api::get_with_query(endpoints::PRODUCTS, &filter.query_pairs()).await
}

/// # Errors
///
/// `NotFound` for unknown ids.
pub async fn fetch_product(id: &str) -> Result<Product, ApiError> {
    api::get(&endpoints::product(id)).await
}

/// # Errors
///
/// See [`api::request`].
pub async fn send_contact(request: &ContactRequest) -> Result<(), ApiError> {
    api::send_json(Method::Post, endpoints::CONTACT, request).await
}
