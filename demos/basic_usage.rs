// ============================================================================
// Basic Usage Example
// ============================================================================

use exact_money::prelude::*;

fn main() -> MoneyResult<()> {
    println!("=== Exact Money Example ===\n");

    let usd = Currency::from_code("USD")?;
    let formatter = MoneyFormatter::default();
    let display = FormatOptions {
        rounding: Some(RoundingMode::HalfEven),
        ..FormatOptions::default()
    };

    // Exact arithmetic: no floating-point drift.
    let subtotal = Money::new(1249.99, usd.clone())?;
    let tax = subtotal.multiply(0.0875)?;
    let total = subtotal.add(&tax)?;
    println!("Subtotal: {}", formatter.format(&subtotal, &display));
    println!("Tax:      {}", formatter.format(&tax, &display));
    println!("Total:    {}\n", formatter.format(&total, &display));

    // Allocation conserves every last unit.
    println!("Splitting the total 3 ways:");
    let shares = total.allocate(&[1.0, 1.0, 1.0])?;
    let table = formatter.format_money_table(&shares, &display);
    println!("{}\n", table);

    // Currency conversion through a base-anchored rate table.
    let provider = ExchangeRateProvider::new(
        "USD",
        [
            ("EUR".to_string(), 0.9),
            ("GBP".to_string(), 0.8),
            ("JPY".to_string(), 150.0),
        ],
    )?;
    let converter = CurrencyConverter::new(provider);
    println!("Total in every supported currency:");
    for (code, converted) in converter.convert_to_all_supported(&total)? {
        println!("  {}: {}", code, formatter.format(&converted, &display));
    }

    // Accounting and financial sign conventions.
    let refund = total.negate();
    println!("\nRefund (accounting): {}", formatter.format_accounting(&refund, &display));
    println!("Refund (financial):  {}", formatter.format_financial(&refund, &display));

    Ok(())
}
