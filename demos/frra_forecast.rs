//! FRRA forecast and description extraction example

use coop_accounting_core::{
    reference_date, AccountingTransaction, DateForecastEngine, IntegrationConfig,
    TransactionFieldExtractor,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Coop Accounting Core - FRRA Forecast Example\n");

    let config = IntegrationConfig::from_json_str(r#"{"frra": {"grace_business_days": 5}}"#)?;
    let engine = DateForecastEngine::new();

    // 1. Forecast the reserve fund payment for a few report dates
    println!("📅 FRRA payment forecasts ({} business days grace):", config.frra.grace_business_days);
    for (year, month, day) in [(2023, 1, 1), (2023, 11, 1), (2023, 12, 1)] {
        let today = reference_date(year, month, day)?;
        let forecast = engine.explain(today, config.frra.grace_business_days);
        println!(
            "  {} → anchor {} → pay on {}",
            forecast.reference_date, forecast.base_date, forecast.payment_date
        );
    }
    println!();

    // 2. Recover structured fields from a platform transaction
    println!("🔎 Transaction description fields:");
    let mut transaction = AccountingTransaction::new(
        "txn001".to_string(),
        reference_date(2024, 3, 10)?,
        "Repasse de produção\nNFSe: 4521\nTransação do mês: 03/2024".to_string(),
        None,
    );
    transaction.validate()?;

    let fields = TransactionFieldExtractor::new().annotate(&mut transaction);
    for (key, value) in fields.iter() {
        println!("  {key}: {value}");
    }
    println!("  reference: {:?}", transaction.reference);
    println!("  as JSON: {}", serde_json::to_string(&fields)?);

    Ok(())
}
