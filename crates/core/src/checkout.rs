use crate::auth::{extract_bearer_token, validate_token};
use crate::pricing::{apply_discount, compute_subtotal, PricingError};
use crate::types::{CartItem, CheckoutOutcome, Tier};

/// Runs the checkout pipeline: auth gate, subtotal, tier discount.
///
/// A failed auth gate short-circuits to an unauthorized outcome without
/// inspecting the cart. Pricing failures propagate as errors so the caller
/// can map them to client responses.
pub fn checkout(
    authorization_header: Option<&str>,
    items: &[CartItem],
    tier: Tier,
) -> Result<CheckoutOutcome, PricingError> {
    let token = extract_bearer_token(authorization_header);
    if !validate_token(token) {
        return Ok(CheckoutOutcome::unauthorized());
    }

    let subtotal = compute_subtotal(items)?;
    let total = apply_discount(subtotal, tier)?;

    Ok(CheckoutOutcome::authorized(subtotal, total))
}
