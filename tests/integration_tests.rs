//! Integration tests for coop-accounting-core

use chrono::{Datelike, NaiveDate, Weekday};
use coop_accounting_core::{
    reference_date, AccountingTransaction, BusinessCalendar, Clock, DateForecastEngine,
    FieldExtractor, FixedClock, IntegrationConfig, IntegrationError, TransactionFieldExtractor,
    WeekendCalendar,
};

#[test]
fn test_monthly_report_workflow() {
    let config =
        IntegrationConfig::from_json_str(r#"{"frra": {"grace_business_days": 5}}"#).unwrap();
    let engine = DateForecastEngine::new();
    let clock = FixedClock(reference_date(2023, 11, 1).unwrap());

    // Forecast the FRRA payment for this month's report
    let payment = engine.forecast_with_config(clock.today(), &config.frra);
    assert_eq!(payment, reference_date(2023, 12, 8).unwrap());
    assert_eq!(engine.forecast_today(&clock, config.frra.grace_business_days), payment);

    // Pull structured fields out of the platform's transaction description
    let mut transaction = AccountingTransaction::new(
        "pay-2023-11".to_string(),
        reference_date(2023, 11, 1).unwrap(),
        "Repasse de produção\n  NFSe:   8812  \nTransação do mês: 11/2023".to_string(),
        None,
    );
    transaction.validate().unwrap();

    let extractor = TransactionFieldExtractor::new();
    let fields = extractor.annotate(&mut transaction);

    assert_eq!(fields.len(), 2);
    assert_eq!(transaction.reference.as_deref(), Some("8812"));
    assert_eq!(
        transaction.metadata.get("transaction_of_month").map(String::as_str),
        Some("11/2023")
    );
}

#[test]
fn test_forecast_spec_table() {
    let engine = DateForecastEngine::new();
    let cases = [
        ((2023, 1, 1), 5, (2023, 12, 8)),
        ((2023, 11, 1), 5, (2023, 12, 8)),
        ((2023, 12, 1), 5, (2024, 12, 6)),
        ((2023, 11, 30), 0, (2023, 12, 1)),
        ((2023, 12, 31), 0, (2024, 12, 1)),
    ];

    for ((y, m, d), offset, (ey, em, ed)) in cases {
        let reference = reference_date(y, m, d).unwrap();
        assert_eq!(
            engine.forecast(reference, offset),
            reference_date(ey, em, ed).unwrap(),
            "forecast({reference}, {offset})"
        );
    }
}

#[test]
fn test_forecast_never_lands_on_weekend() {
    let engine = DateForecastEngine::new();
    let mut reference = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();

    while reference < end {
        for offset in 1..=10 {
            let payment = engine.forecast(reference, offset);
            assert!(!matches!(payment.weekday(), Weekday::Sat | Weekday::Sun));
            let base = engine.base_date(reference);
            assert_eq!(WeekendCalendar.add_business_days(base, offset), payment);
            assert!(base > reference);
        }
        reference = reference + chrono::Duration::days(17);
    }
}

#[test]
fn test_extraction_spec_table() {
    let extractor = TransactionFieldExtractor::new();
    let cases: [(&str, &[(&str, &str)]); 9] = [
        ("", &[]),
        ("a", &[]),
        ("a:b", &[]),
        ("NFSe:b", &[]),
        ("nfse: b", &[]),
        ("NFSe: b", &[("nfse", "b")]),
        ("Transação do mês: a", &[("transaction_of_month", "a")]),
        (
            "NFSe: a\nTransação do mês: a",
            &[("nfse", "a"), ("transaction_of_month", "a")],
        ),
        (
            "NFSe: a\n\naaa\n\nTransação do mês: a",
            &[("nfse", "a"), ("transaction_of_month", "a")],
        ),
    ];

    for (text, expected) in cases {
        let fields = extractor.extract(text);
        let actual: Vec<(&str, &str)> = fields.iter().collect();
        assert_eq!(actual, expected.to_vec(), "extract({text:?})");
    }
}

#[test]
fn test_extractor_through_trait_object() {
    let extractor: Box<dyn FieldExtractor> = Box::new(TransactionFieldExtractor::new());
    let fields = extractor.extract("NFSe:a\nTransação do mês: a");
    assert_eq!(fields.get("nfse"), None);
    assert_eq!(fields.get("transaction_of_month"), Some("a"));
    assert_eq!(
        serde_json::to_string(&fields).unwrap(),
        r#"{"transaction_of_month":"a"}"#
    );
}

#[test]
fn test_invalid_reference_date_rejected_at_boundary() {
    let err = reference_date(2023, 13, 1).unwrap_err();
    assert!(matches!(err, IntegrationError::InvalidDate(_)));
}

#[test]
fn test_forecast_explanation_serializes() {
    let engine = DateForecastEngine::new();
    let forecast = engine.explain(reference_date(2023, 12, 1).unwrap(), 5);
    let json = serde_json::to_value(forecast).unwrap();
    assert_eq!(json["base_date"], "2024-12-01");
    assert_eq!(json["payment_date"], "2024-12-06");
    assert_eq!(json["grace_business_days"], 5);
}
