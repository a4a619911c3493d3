use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies the default formatter knows the minor-unit precision of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar (2 decimal places)
    USD,
    /// Euro (2 decimal places)
    EUR,
    /// Pound Sterling (2 decimal places)
    GBP,
    /// Australian Dollar (2 decimal places)
    AUD,
    /// Canadian Dollar (2 decimal places)
    CAD,
    /// Malaysian Ringgit (2 decimal places)
    MYR,
    /// Japanese Yen (no decimal places)
    JPY,
    /// Indonesian Rupiah (no decimal places)
    IDR,
}

impl Currency {
    /// Returns the decimal scale for this currency
    /// - JPY/IDR: 0 (no decimals)
    /// - everything else: 2
    pub fn scale(&self) -> u32 {
        match self {
            Currency::JPY | Currency::IDR => 0,
            _ => 2,
        }
    }

    /// Display symbol used by [`CurrencyStyle::Symbol`]
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::AUD => "A$",
            Currency::CAD => "CA$",
            Currency::MYR => "RM",
            Currency::JPY => "¥",
            Currency::IDR => "Rp",
        }
    }

    /// Converts an amount in minor units (cents) into its major-unit value
    pub fn minor_to_major(&self, amount: i64) -> Decimal {
        Decimal::new(amount, self.scale())
    }

    /// Formats an amount for display with the correct decimal places
    pub fn format_amount(&self, amount: Decimal) -> String {
        let scale = self.scale();
        if scale == 0 {
            format!("{} {}", self, amount.round_dp(0))
        } else {
            format!("{} {:.width$}", self, amount, width = scale as usize)
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
            Currency::MYR => "MYR",
            Currency::JPY => "JPY",
            Currency::IDR => "IDR",
        };
        f.write_str(code)
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "AUD" => Ok(Currency::AUD),
            "CAD" => Ok(Currency::CAD),
            "MYR" => Ok(Currency::MYR),
            "JPY" => Ok(Currency::JPY),
            "IDR" => Ok(Currency::IDR),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}

impl TryFrom<&str> for Currency {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Formats a provider amount (minor units) for the given currency code.
///
/// Line item views never do their own arithmetic on amounts; they hand the
/// raw integer and the provider's currency code to a formatter and return
/// its output unchanged.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: i64, currency: &str) -> String;
}

impl<F> CurrencyFormatter for F
where
    F: Fn(i64, &str) -> String + Send + Sync,
{
    fn format_amount(&self, amount: i64, currency: &str) -> String {
        self(amount, currency)
    }
}

/// How [`MinorUnitFormatter`] labels an amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyStyle {
    /// `$1,099.00`
    #[default]
    Symbol,
    /// `USD 1099.00`
    Code,
}

impl std::str::FromStr for CurrencyStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "symbol" => Ok(CurrencyStyle::Symbol),
            "code" => Ok(CurrencyStyle::Code),
            _ => Err(format!("Invalid currency style: {}", s)),
        }
    }
}

/// Default formatter: places the decimal point by currency scale.
///
/// Unknown currency codes are rendered with two decimals and the upper-cased
/// code as label, whatever the style.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinorUnitFormatter {
    style: CurrencyStyle,
}

impl MinorUnitFormatter {
    pub fn new(style: CurrencyStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> CurrencyStyle {
        self.style
    }
}

impl CurrencyFormatter for MinorUnitFormatter {
    fn format_amount(&self, amount: i64, currency: &str) -> String {
        let currency = match currency.parse::<Currency>() {
            Ok(currency) => currency,
            Err(_) => {
                tracing::warn!(currency, "unknown currency code, assuming 2 decimal places");
                return format!("{} {:.2}", currency.to_uppercase(), Decimal::new(amount, 2));
            }
        };

        let value = currency.minor_to_major(amount);
        match self.style {
            CurrencyStyle::Code => currency.format_amount(value),
            CurrencyStyle::Symbol => {
                let sign = if value.is_sign_negative() && !value.is_zero() {
                    "-"
                } else {
                    ""
                };
                let digits = format!("{:.width$}", value.abs(), width = currency.scale() as usize);
                format!("{}{}{}", sign, currency.symbol(), group_thousands(&digits))
            }
        }
    }
}

/// Inserts `,` separators into the integer part of a plain decimal string
fn group_thousands(digits: &str) -> String {
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(digits.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}
