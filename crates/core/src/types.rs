use serde::{Deserialize, Deserializer, Serialize};

/// A single cart line item submitted with a checkout request.
///
/// Quantity and unit price are validated when the subtotal is computed so
/// that out-of-range values surface as domain errors rather than
/// deserialization failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub sku: String,
    pub qty: i64,
    pub unit_price: f64,
}

/// User classification driving discount eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Premium,
    Regular,
}

impl Tier {
    /// Maps a raw tier string to a tier. Unknown values are regular.
    pub fn from_raw(value: &str) -> Self {
        match value {
            "premium" => Self::Premium,
            _ => Self::Regular,
        }
    }

    /// Returns the canonical name used for logging/metrics labels.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Premium => "premium",
            Self::Regular => "regular",
        }
    }
}

impl Default for Tier {
    fn default() -> Self {
        Self::Regular
    }
}

impl<'de> Deserialize<'de> for Tier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Tier::from_raw(&value))
    }
}

/// Result of running the checkout pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutOutcome {
    pub authorized: bool,
    pub subtotal: f64,
    pub total: f64,
    pub message: &'static str,
}

impl CheckoutOutcome {
    /// Builds the outcome for an authorized checkout.
    pub fn authorized(subtotal: f64, total: f64) -> Self {
        Self {
            authorized: true,
            subtotal,
            total,
            message: "ok",
        }
    }

    /// Builds the outcome for a rejected auth gate. The cart is never
    /// inspected on this path.
    pub fn unauthorized() -> Self {
        Self {
            authorized: false,
            subtotal: 0.0,
            total: 0.0,
            message: "unauthorized",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn premium_string_maps_to_premium() {
        assert_eq!(Tier::from_raw("premium"), Tier::Premium);
    }

    #[test]
    fn unknown_strings_map_to_regular() {
        assert_eq!(Tier::from_raw("regular"), Tier::Regular);
        assert_eq!(Tier::from_raw("gold"), Tier::Regular);
        assert_eq!(Tier::from_raw(""), Tier::Regular);
        assert_eq!(Tier::from_raw("PREMIUM"), Tier::Regular);
    }

    #[test]
    fn tier_deserialization_never_fails_on_unknown_values() {
        let tier: Tier = serde_json::from_value(json!("vip")).expect("tier should deserialize");
        assert_eq!(tier, Tier::Regular);

        let tier: Tier = serde_json::from_value(json!("premium")).expect("tier should deserialize");
        assert_eq!(tier, Tier::Premium);
    }

    #[test]
    fn default_tier_is_regular() {
        assert_eq!(Tier::default(), Tier::Regular);
    }

    #[test]
    fn outcome_serializes_wire_fields() {
        let value = serde_json::to_value(CheckoutOutcome::authorized(20.0, 18.0))
            .expect("outcome should serialize");
        assert_eq!(
            value,
            json!({
                "authorized": true,
                "subtotal": 20.0,
                "total": 18.0,
                "message": "ok",
            })
        );
    }
}
