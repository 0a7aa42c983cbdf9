//! Shopping cart state.
//!
//! DESIGN
//! ======
//! Lines are keyed by product id and capped at the stock seen when the
//! product was added. Totals are integer cents. The cart survives reloads
//! through `localStorage`; checkout sends the lines and clears it.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{OrderLine, Product};
use crate::util::storage;

/// `localStorage` key for the serialized cart.
pub const CART_KEY: &str = "forgeline_cart";

/// Sales tax in basis points (8.25%).
pub const TAX_BASIS_POINTS: i64 = 825;
/// Flat shipping charge below the free-shipping threshold.
pub const FLAT_SHIPPING_CENTS: i64 = 2_500;
/// Subtotal from which shipping is free.
pub const FREE_SHIPPING_FROM_CENTS: i64 = 50_000;

/// Quantity typed into a cart row. Blank or garbled input is `None` so the
/// line keeps its quantity; an explicit `0` still removes it.
#[must_use]
pub fn parse_quantity(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub unit_price_cents: i64,
    pub quantity: u32,
    pub stock: u32,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CartLine {
    #[must_use]
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * i64::from(self.quantity)
    }
}

/// Result of adding a product to the cart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// Quantity was limited by stock.
    Capped,
    OutOfStock,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub shipping_cents: i64,
    pub total_cents: i64,
}

/// Cart contents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    pub lines: Vec<CartLine>,
}

impl CartState {
    /// Add `quantity` of `product`, merging with an existing line.
    pub fn add(&mut self, product: &Product, quantity: u32) -> AddOutcome {
        if product.stock == 0 || quantity == 0 {
            return AddOutcome::OutOfStock;
        }
        let idx = match self.lines.iter().position(|l| l.product_id == product.id) {
            Some(idx) => idx,
            None => {
                self.lines.push(CartLine {
                    product_id: product.id.clone(),
                    name: product.name.clone(),
                    unit_price_cents: product.price_cents,
                    quantity: 0,
                    stock: product.stock,
                    image_url: product.image_url.clone(),
                });
                self.lines.len() - 1
            }
        };
        let line = &mut self.lines[idx];
        line.stock = product.stock;
        line.unit_price_cents = product.price_cents;
        let wanted = line.quantity.saturating_add(quantity);
        line.quantity = wanted.min(line.stock);
        if wanted > line.stock { AddOutcome::Capped } else { AddOutcome::Added }
    }

    /// Set a line's quantity; zero removes it. Quantities are capped at stock.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity.min(line.stock.max(1));
        }
    }

    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines (header badge).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    #[must_use]
    pub fn totals(&self) -> Totals {
        let subtotal_cents: i64 = self.lines.iter().map(CartLine::line_total_cents).sum();
        if subtotal_cents <= 0 {
            return Totals::default();
        }
        let tax_cents = (subtotal_cents * TAX_BASIS_POINTS + 5_000) / 10_000;
        let shipping_cents = if subtotal_cents >= FREE_SHIPPING_FROM_CENTS { 0 } else { FLAT_SHIPPING_CENTS };
        Totals { subtotal_cents, tax_cents, shipping_cents, total_cents: subtotal_cents + tax_cents + shipping_cents }
    }

    /// Lines in checkout wire form.
    #[must_use]
    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.lines
            .iter()
            .map(|l| OrderLine {
                product_id: l.product_id.clone(),
                name: l.name.clone(),
                unit_price_cents: l.unit_price_cents,
                quantity: l.quantity,
            })
            .collect()
    }

    /// Cart saved in this browser, or empty.
    #[must_use]
    pub fn load() -> Self {
        storage::get_json::<Self>(CART_KEY).unwrap_or_default()
    }

    pub fn save(&self) {
        if self.is_empty() {
            storage::remove(CART_KEY);
        } else {
            storage::set_json(CART_KEY, self);
        }
    }
}
