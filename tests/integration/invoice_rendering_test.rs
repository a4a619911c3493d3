//! Integration tests for rendering a provider invoice's lines
//!
//! Drives the public surface end to end: configuration picks the formatter
//! and date pattern, provider JSON becomes `LineItem`s, and views render them.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use invoice_lines::config::Config;
use invoice_lines::{InvoiceLineItem, LineItem};
use serde_json::json;

fn provider_invoice_lines() -> Vec<LineItem> {
    let payload = json!({
        "object": "list",
        "data": [
            TestDataFactory::subscription_with_taxes(&[(false, 19.0)]),
            TestDataFactory::invoice_item_payload(),
        ]
    });

    payload["data"]
        .as_array()
        .unwrap()
        .iter()
        .cloned()
        .map(TestDataFactory::line_item)
        .collect()
}

#[test]
fn test_render_lines_with_default_config() {
    let config = Config::from_vars(|_| None).unwrap();
    config.validate().unwrap();
    // Another test in this binary may have installed the subscriber first
    let _ = config.init_tracing();

    let customer = TestCustomer::new("cus_1");
    let formatter = config.display.formatter();
    let lines = provider_invoice_lines();

    let rendered: Vec<_> = lines
        .iter()
        .map(|item| {
            let view = InvoiceLineItem::new(&customer, item, &formatter)
                .with_date_format(config.display.date_format.as_str());
            (
                view.total(),
                view.start_date(),
                view.end_date(),
                view.exclusive_tax_percentage(),
            )
        })
        .collect();

    assert_eq!(
        rendered,
        vec![
            (
                "$10.99".to_string(),
                Some("Jan 1, 2024".to_string()),
                Some("Feb 1, 2024".to_string()),
                Some(19),
            ),
            ("€25.00".to_string(), None, None, None),
        ]
    );
}

#[test]
fn test_render_lines_with_code_style_and_iso_dates() {
    let config = Config::from_vars(|key| match key {
        "CURRENCY_STYLE" => Some("code".to_string()),
        "LINE_ITEM_DATE_FORMAT" => Some("%Y-%m-%d".to_string()),
        _ => None,
    })
    .unwrap();

    let customer = TestCustomer::new("cus_1");
    let formatter = config.display.formatter();
    let lines = provider_invoice_lines();
    let view = InvoiceLineItem::new(&customer, &lines[0], &formatter)
        .with_date_format(config.display.date_format.clone());

    assert_eq!(view.total(), "USD 10.99");
    assert_eq!(view.start_date().as_deref(), Some("2024-01-01"));
    assert_eq!(view.end_date().as_deref(), Some("2024-02-01"));
}

#[test]
fn test_views_share_a_record_across_threads() {
    let customer = TestCustomer::new("cus_1");
    let item = TestDataFactory::line_item(TestDataFactory::subscription_with_taxes(&[
        (true, 7.5),
        (false, 3.2),
        (true, 2.0),
    ]));
    let formatter = invoice_lines::MinorUnitFormatter::default();

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    let view = InvoiceLineItem::new(&customer, &item, &formatter);
                    (view.inclusive_tax_percentage(), view.exclusive_tax_percentage())
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(results.iter().all(|r| *r == (Some(9), Some(3))));
}

#[test]
fn test_view_serializes_like_provider_record() {
    let customer = TestCustomer::new("cus_1");
    let payload = TestDataFactory::subscription_payload();
    let item = TestDataFactory::line_item(payload.clone());
    let formatter = invoice_lines::MinorUnitFormatter::default();
    let view = InvoiceLineItem::new(&customer, &item, &formatter);

    let round_tripped: serde_json::Value = serde_json::from_str(&view.to_json().unwrap()).unwrap();
    assert_eq!(round_tripped, payload);
}
