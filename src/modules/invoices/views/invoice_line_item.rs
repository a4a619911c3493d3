// Read-only presentation of a single provider line item.
//
// The view borrows the owner, the record and the currency formatter for one
// rendering pass. Every accessor is a pure function of those borrows, so a
// view can be shared across threads and queried any number of times.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::core::timezone::{self, DEFAULT_DATE_FORMAT};
use crate::core::{CurrencyFormatter, Result};
use crate::modules::invoices::models::{LineItem, LineItemType, Period};
use crate::modules::taxes::TaxPercentageCalculator;

/// Presentation wrapper over one invoice line item
pub struct InvoiceLineItem<'a, O: ?Sized> {
    owner: &'a O,
    item: &'a LineItem,
    formatter: &'a dyn CurrencyFormatter,
    date_format: Cow<'a, str>,
}

impl<'a, O: ?Sized> InvoiceLineItem<'a, O> {
    pub fn new(owner: &'a O, item: &'a LineItem, formatter: &'a dyn CurrencyFormatter) -> Self {
        tracing::debug!(
            line_item = ?item.id,
            kind = %item.kind,
            "building invoice line item view"
        );

        Self {
            owner,
            item,
            formatter,
            date_format: Cow::Borrowed(DEFAULT_DATE_FORMAT),
        }
    }

    /// Override the strftime pattern used by `start_date` / `end_date`
    pub fn with_date_format(mut self, date_format: impl Into<Cow<'a, str>>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Formatted total, exactly as the currency formatter renders it
    pub fn total(&self) -> String {
        self.formatter
            .format_amount(self.item.amount, &self.item.currency)
    }

    /// Whole-number sum of the inclusive tax rates.
    ///
    /// `None` when the provider sent no tax amounts; `Some(0)` for an empty list.
    pub fn inclusive_tax_percentage(&self) -> Option<i64> {
        self.tax_percentage(true)
    }

    /// Whole-number sum of the exclusive tax rates, see `inclusive_tax_percentage`.
    pub fn exclusive_tax_percentage(&self) -> Option<i64> {
        self.tax_percentage(false)
    }

    pub fn has_tax_rates(&self) -> bool {
        self.item
            .tax_amounts
            .as_ref()
            .is_some_and(|tax_amounts| !tax_amounts.is_empty())
    }

    pub fn has_both_inclusive_and_exclusive_tax(&self) -> bool {
        matches!(
            (self.inclusive_tax_percentage(), self.exclusive_tax_percentage()),
            (Some(inclusive), Some(exclusive)) if inclusive != 0 && exclusive != 0
        )
    }

    fn tax_percentage(&self, inclusive: bool) -> Option<i64> {
        let tax_amounts = self.item.tax_amounts.as_deref()?;
        Some(TaxPercentageCalculator::new().sum_percentages(tax_amounts, inclusive))
    }

    pub fn is_subscription(&self) -> bool {
        self.item.kind == LineItemType::Subscription
    }

    /// Long-form start date of the subscription period, e.g. "Jan 1, 2024".
    ///
    /// `None` also when the date format has an unknown specifier.
    pub fn start_date(&self) -> Option<String> {
        self.start_date_as_datetime()
            .and_then(|start| timezone::format_date(start, &self.date_format))
    }

    /// Long-form end date of the subscription period
    pub fn end_date(&self) -> Option<String> {
        self.end_date_as_datetime()
            .and_then(|end| timezone::format_date(end, &self.date_format))
    }

    pub fn start_date_as_datetime(&self) -> Option<DateTime<Utc>> {
        let period = self.subscription_period()?;
        timezone::from_unix_seconds(period.start)
    }

    pub fn end_date_as_datetime(&self) -> Option<DateTime<Utc>> {
        let period = self.subscription_period()?;
        timezone::from_unix_seconds(period.end)
    }

    fn subscription_period(&self) -> Option<Period> {
        if !self.is_subscription() {
            return None;
        }
        self.item.period
    }

    pub fn owner(&self) -> &'a O {
        self.owner
    }

    /// The raw provider record
    pub fn underlying_record(&self) -> &'a LineItem {
        self.item
    }

    /// Provider field pass-through; missing fields follow `LineItem::field`.
    pub fn field(&self, name: &str) -> Option<Value> {
        self.item.field(name)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<O: ?Sized> Serialize for InvoiceLineItem<'_, O> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.item.serialize(serializer)
    }
}

impl<O: ?Sized> fmt::Debug for InvoiceLineItem<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvoiceLineItem")
            .field("item", self.item)
            .field("date_format", &self.date_format)
            .finish_non_exhaustive()
    }
}
