//! # License Tiers
//!
//! Every font is sold under one of three licenses. The catalog price is the
//! personal price; the other tiers are fixed multiples of it.
//!
//! ```text
//! ┌──────────────┬────────────────────┬──────────────────────────────┐
//! │ License      │ Unit price         │ Base $29.00 →                │
//! ├──────────────┼────────────────────┼──────────────────────────────┤
//! │ personal     │ base × 1           │ $29.00                       │
//! │ commercial   │ base × 2           │ $58.00                       │
//! │ extended     │ base × 5           │ $145.00                      │
//! └──────────────┴────────────────────┴──────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

/// License tier selected for a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum LicenseTier {
    /// Non-commercial use.
    Personal,
    /// Commercial projects.
    Commercial,
    /// Commercial use plus redistribution in products.
    Extended,
}

impl LicenseTier {
    /// All tiers, cheapest first.
    pub const ALL: [LicenseTier; 3] = [
        LicenseTier::Personal,
        LicenseTier::Commercial,
        LicenseTier::Extended,
    ];

    /// Price multiplier applied to the base (personal) price.
    #[inline]
    pub const fn multiplier(&self) -> i64 {
        match self {
            LicenseTier::Personal => 1,
            LicenseTier::Commercial => 2,
            LicenseTier::Extended => 5,
        }
    }

    /// Unit price of a font under this license.
    ///
    /// ## Example
    /// ```rust
    /// use fontstore_core::{LicenseTier, Money};
    ///
    /// let base = Money::from_cents(1000);
    /// assert_eq!(LicenseTier::Commercial.unit_price(base).cents(), 2000);
    /// assert_eq!(LicenseTier::Extended.unit_price(base).cents(), 5000);
    /// ```
    #[inline]
    pub fn unit_price(&self, base: Money) -> Money {
        base * self.multiplier()
    }

    /// Wire name (`"personal"`, `"commercial"`, `"extended"`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            LicenseTier::Personal => "personal",
            LicenseTier::Commercial => "commercial",
            LicenseTier::Extended => "extended",
        }
    }
}

impl Default for LicenseTier {
    fn default() -> Self {
        LicenseTier::Personal
    }
}

impl fmt::Display for LicenseTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LicenseTier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "personal" => Ok(LicenseTier::Personal),
            "commercial" => Ok(LicenseTier::Commercial),
            "extended" => Ok(LicenseTier::Extended),
            _ => Err(ValidationError::NotAllowed {
                field: "license".to_string(),
                allowed: LicenseTier::ALL.iter().map(|l| l.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers() {
        let base = Money::from_cents(2900);
        assert_eq!(LicenseTier::Personal.unit_price(base).cents(), 2900);
        assert_eq!(LicenseTier::Commercial.unit_price(base).cents(), 5800);
        assert_eq!(LicenseTier::Extended.unit_price(base).cents(), 14500);
    }

    #[test]
    fn test_parse_license() {
        assert_eq!("personal".parse::<LicenseTier>().unwrap(), LicenseTier::Personal);
        assert_eq!(" Extended ".parse::<LicenseTier>().unwrap(), LicenseTier::Extended);

        let err = "enterprise".parse::<LicenseTier>().unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"license must be one of: ["personal", "commercial", "extended"]"#
        );
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&LicenseTier::Commercial).unwrap();
        assert_eq!(json, r#""commercial""#);

        let tier: LicenseTier = serde_json::from_str(r#""extended""#).unwrap();
        assert_eq!(tier, LicenseTier::Extended);
        assert!(serde_json::from_str::<LicenseTier>(r#""Extended""#).is_err());
    }
}
