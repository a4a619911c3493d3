use crate::core::{AppError, CurrencyStyle, MinorUnitFormatter, Result};
use crate::core::timezone::DEFAULT_DATE_FORMAT;

/// Presentation settings for rendered line items
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub date_format: String,
    pub currency_style: CurrencyStyle,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            currency_style: CurrencyStyle::default(),
        }
    }
}

impl DisplayConfig {
    pub fn from_vars<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(DisplayConfig {
            date_format: lookup("LINE_ITEM_DATE_FORMAT")
                .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string()),
            currency_style: lookup("CURRENCY_STYLE")
                .unwrap_or_else(|| "symbol".to_string())
                .parse()
                .map_err(|_| AppError::configuration("Invalid CURRENCY_STYLE"))?,
        })
    }

    /// Formatter matching the configured currency style
    pub fn formatter(&self) -> MinorUnitFormatter {
        MinorUnitFormatter::new(self.currency_style)
    }
}
