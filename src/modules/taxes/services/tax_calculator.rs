use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::modules::invoices::models::TaxAmount;

/// Aggregates per-rate tax amounts into a single display percentage
pub struct TaxPercentageCalculator;

impl TaxPercentageCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Sum `tax_rate.percentage` over the amounts whose `inclusive` flag
    /// matches, truncated toward zero.
    ///
    /// An empty slice sums to 0. Sums beyond the `i64` range saturate.
    pub fn sum_percentages(&self, tax_amounts: &[TaxAmount], inclusive: bool) -> i64 {
        let percentages = tax_amounts
            .iter()
            .filter(|tax_amount| tax_amount.inclusive == inclusive)
            .map(|tax_amount| tax_amount.tax_rate.percentage);

        let mut sum = Decimal::ZERO;
        for percentage in percentages {
            match sum.checked_add(percentage) {
                Some(next) => sum = next,
                None => {
                    tracing::warn!(%sum, %percentage, inclusive, "tax percentage sum overflowed");
                    return saturate(percentage.is_sign_negative());
                }
            }
        }

        let truncated = sum.trunc();
        tracing::debug!(%sum, inclusive, "summed tax percentages");

        truncated
            .to_i64()
            .unwrap_or_else(|| saturate(truncated.is_sign_negative()))
    }
}

fn saturate(negative: bool) -> i64 {
    if negative {
        i64::MIN
    } else {
        i64::MAX
    }
}

impl Default for TaxPercentageCalculator {
    fn default() -> Self {
        Self::new()
    }
}
