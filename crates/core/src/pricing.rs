use thiserror::Error;

use crate::types::{CartItem, Tier};

/// Flat reduction applied to premium carts.
const PREMIUM_DISCOUNT_RATE: f64 = 0.10;

/// Errors that can occur while pricing a cart.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    #[error("qty must be positive for sku '{sku}' (got {qty})")]
    NonPositiveQuantity { sku: String, qty: i64 },
    #[error("unit_price must be non-negative for sku '{sku}' (got {unit_price})")]
    NegativeUnitPrice { sku: String, unit_price: f64 },
    #[error("subtotal must be non-negative (got {0})")]
    NegativeSubtotal(f64),
}

/// Sums `qty * unit_price` across the cart, rounded to two decimals.
///
/// An empty cart prices to `0.0`. The first invalid line item aborts the
/// computation with the offending sku in the error.
pub fn compute_subtotal(items: &[CartItem]) -> Result<f64, PricingError> {
    let mut subtotal = 0.0;
    for item in items {
        if item.qty <= 0 {
            return Err(PricingError::NonPositiveQuantity {
                sku: item.sku.clone(),
                qty: item.qty,
            });
        }
        if item.unit_price < 0.0 {
            return Err(PricingError::NegativeUnitPrice {
                sku: item.sku.clone(),
                unit_price: item.unit_price,
            });
        }
        subtotal += item.qty as f64 * item.unit_price;
    }
    Ok(round_to_cents(subtotal))
}

/// Applies the tier discount to a subtotal.
///
/// Premium carts get a flat 10% off; every other tier pays the subtotal
/// unchanged. Both paths round to two decimals.
pub fn apply_discount(subtotal: f64, tier: Tier) -> Result<f64, PricingError> {
    if subtotal < 0.0 {
        return Err(PricingError::NegativeSubtotal(subtotal));
    }

    let total = match tier {
        Tier::Premium => subtotal * (1.0 - PREMIUM_DISCOUNT_RATE),
        Tier::Regular => subtotal,
    };
    Ok(round_to_cents(total))
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
