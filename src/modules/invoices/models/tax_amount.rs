use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax rate as reported on a provider tax amount (expanded object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Percentage, e.g. 7.5 for 7.5%
    pub percentage: Decimal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inclusive: Option<bool>,
}

impl TaxRate {
    pub fn new(percentage: Decimal) -> Self {
        Self {
            id: None,
            percentage,
            display_name: None,
            jurisdiction: None,
            inclusive: None,
        }
    }
}

/// Tax charged at one rate on a line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxAmount {
    /// Tax in minor units
    #[serde(default)]
    pub amount: i64,

    /// Whether the tax is already folded into the line amount
    pub inclusive: bool,

    pub tax_rate: TaxRate,
}

impl TaxAmount {
    pub fn new(amount: i64, inclusive: bool, percentage: Decimal) -> Self {
        Self {
            amount,
            inclusive,
            tax_rate: TaxRate::new(percentage),
        }
    }
}
