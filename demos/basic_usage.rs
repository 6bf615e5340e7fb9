// ============================================================================
// Basic Usage Example
// ============================================================================

use marketplace_money::prelude::*;

fn main() -> Result<(), MoneyError> {
    println!("=== Marketplace Money Example ===\n");

    let config = MoneyConfig::from_env()?;
    config.validate()?;
    println!(
        "Using {} / {} / {:?}\n",
        config.currency, config.locale, config.rounding_mode
    );

    // Settlement lines arrive as decimal strings
    println!("Settlement lines...");
    let lines = ["129.99", "15.00", "0.99", "-12.50"]
        .iter()
        .map(|wire| config.parse(wire))
        .collect::<MoneyResult<Vec<_>>>()?;
    for line in &lines {
        println!("  {:>10}  {}", line.to_string(), line.to_currency_string());
    }

    let gross = Money::sum(&lines)?;
    let fee = gross.times(0.15)?;
    let net = gross.minus(&fee)?;

    println!("\nGross:  {}", gross.to_currency_string());
    println!("Fee:    {}", fee.to_currency_string());
    println!("Net:    {}", net.to_currency_string());
    println!("Stored: {} minor units", net.as_db_integer()?);
    println!("Fee rate: {}", fee.div_money(&gross)?.to_percent_string()?);

    // Mixing currencies is rejected
    let euros = Money::parse("10.00", Currency::Eur)?;
    if let Err(e) = net.plus(&euros) {
        println!("\nRejected: {}", e);
    }

    // Column statistics over the same lines
    let stats: StatsAccumulator = lines
        .iter()
        .map(|line| line.int_value().map(|v| v as f64))
        .collect::<MoneyResult<Vec<_>>>()?
        .into_iter()
        .collect();

    println!("\n=== Line Statistics ===");
    println!("Count:  {}", stats.size());
    println!("Mean:   {:.2}", stats.mean());
    println!("Stdev:  {:.2}", stats.stdev());

    Ok(())
}
