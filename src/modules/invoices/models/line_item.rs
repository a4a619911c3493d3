// Provider line item record.
//
// Mirrors the JSON the billing provider returns for one entry of an invoice's
// `lines` list. Only the fields this crate reads are typed; everything else is
// kept verbatim in `extra` so callers can still reach it through `field`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

use super::tax_amount::TaxAmount;
use crate::core::{AppError, Result};

/// Kind of line item as tagged by the provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LineItemType {
    /// Charge for one subscription period
    Subscription,
    /// One-off invoice item
    InvoiceItem,
    /// Any other provider tag, preserved as-is
    Other(String),
}

impl fmt::Display for LineItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineItemType::Subscription => write!(f, "subscription"),
            LineItemType::InvoiceItem => write!(f, "invoiceitem"),
            LineItemType::Other(tag) => write!(f, "{}", tag),
        }
    }
}

impl From<String> for LineItemType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "subscription" => LineItemType::Subscription,
            "invoiceitem" => LineItemType::InvoiceItem,
            _ => LineItemType::Other(tag),
        }
    }
}

impl From<&str> for LineItemType {
    fn from(tag: &str) -> Self {
        LineItemType::from(tag.to_string())
    }
}

impl From<LineItemType> for String {
    fn from(kind: LineItemType) -> Self {
        kind.to_string()
    }
}

/// Billing period covered by a subscription line item (UNIX seconds, UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: i64,
    pub end: i64,
}

impl Period {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

/// One billable entry within a provider invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Amount in minor currency units
    pub amount: i64,

    /// Provider currency code, usually lowercase (`usd`)
    pub currency: String,

    #[serde(rename = "type")]
    pub kind: LineItemType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,

    /// Present only on subscription line items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// `None` when the provider sent no tax information at all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_amounts: Option<Vec<TaxAmount>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proration: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discountable: Option<bool>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,

    /// Provider fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LineItem {
    /// Create a bare line item; optional fields start out absent
    pub fn new(amount: i64, currency: impl Into<String>, kind: impl Into<LineItemType>) -> Self {
        Self {
            id: None,
            amount,
            currency: currency.into(),
            kind: kind.into(),
            description: None,
            quantity: None,
            period: None,
            tax_amounts: None,
            subscription: None,
            proration: None,
            discountable: None,
            metadata: BTreeMap::new(),
            extra: Map::new(),
        }
    }

    pub fn with_period(mut self, start: i64, end: i64) -> Self {
        self.period = Some(Period::new(start, end));
        self
    }

    pub fn with_tax_amounts(mut self, tax_amounts: Vec<TaxAmount>) -> Self {
        self.tax_amounts = Some(tax_amounts);
        self
    }

    /// Parse a provider JSON payload and check it
    pub fn from_json(payload: &str) -> Result<Self> {
        let item: LineItem = serde_json::from_str(payload)?;
        item.validate()?;
        Ok(item)
    }

    /// Build from an already-decoded provider value
    pub fn from_value(value: Value) -> Result<Self> {
        let item: LineItem = serde_json::from_value(value)?;
        item.validate()?;
        Ok(item)
    }

    /// Reject records whose period runs backwards or whose currency is blank
    pub fn validate(&self) -> Result<()> {
        if self.currency.trim().is_empty() {
            return Err(AppError::validation("Line item currency cannot be empty"));
        }

        if let Some(period) = self.period {
            if period.end < period.start {
                return Err(AppError::validation(format!(
                    "Line item period ends before it starts: {} < {}",
                    period.end, period.start
                )));
            }
        }

        Ok(())
    }

    /// Look up any provider field by its wire name.
    ///
    /// Absent and `null` fields both come back as `None`.
    pub fn field(&self, name: &str) -> Option<Value> {
        let value = match name {
            "id" => to_field(&self.id),
            "amount" => Some(Value::from(self.amount)),
            "currency" => Some(Value::from(self.currency.as_str())),
            "type" => Some(Value::from(self.kind.to_string())),
            "description" => to_field(&self.description),
            "quantity" => to_field(&self.quantity),
            "period" => to_field(&self.period),
            "tax_amounts" => to_field(&self.tax_amounts),
            "subscription" => to_field(&self.subscription),
            "proration" => to_field(&self.proration),
            "discountable" => to_field(&self.discountable),
            "metadata" if self.metadata.is_empty() => None,
            "metadata" => to_field(&self.metadata),
            _ => self.extra.get(name).cloned(),
        };
        value.filter(|v| !v.is_null())
    }
}

fn to_field<T: Serialize>(value: &T) -> Option<Value> {
    serde_json::to_value(value).ok()
}
