// ============================================================================
// Basic Usage Example
// ============================================================================

use num::Complex;
use numeric_utils::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    #[cfg(feature = "logging")]
    numeric_utils::utils::init_logging("numeric_utils=debug")?;

    println!("=== Numeric Utils Example ===\n");

    // Limits, as they would arrive from a command line or a config file
    println!("Applying limits to 100...");
    for text in [None, Some("5"), Some("250"), Some("%70")] {
        let limit = Limit::parse_optional(text)?;
        println!("  {:>5} -> {}", limit.to_string(), calc_limit(&limit, 100)?);
    }

    match "%150".parse::<Limit>() {
        Ok(limit) => println!("  unexpected: {}", limit),
        Err(e) => println!("  %150 rejected: {}", e),
    }

    // Distances
    println!("\nDistances...");
    let a = [0.0, 0.0, 10.0];
    let b = [3.0, 4.0, -10.0];
    println!("  full:       {}", euclidean_distance(&a, &b, None)?);
    println!("  first 2:    {}", euclidean_distance(&a, &b, Some(2))?);
    println!("  squared(2): {}", euclidean_distance_squared(&a, &b, Some(2))?);

    let za = [Complex::new(1.0, 1.0), Complex::new(0.0, 2.0)];
    let zb = [Complex::new(1.0, -2.0), Complex::new(4.0, 2.0)];
    println!("  complex:    {}", euclidean_distance(&za, &zb, None)?);

    if let Err(e) = euclidean_distance(&a, &b[..2], None) {
        println!("  mismatch:   {}", e);
    }

    // Timing (records show up with the `logging` feature and RUST_LOG=debug)
    println!("\nTiming...");
    let total = time_it("sum_of_squares", || (0..1_000_000u64).map(|i| i * i % 7).sum::<u64>());
    println!("  sum_of_squares = {}", total);

    let scaled = TimedCall::new("scale", |(x, factor): (f64, f64)| x * factor);
    println!("  {}(2.5, 4.0) = {}", scaled.name(), scaled.call((2.5, 4.0)));

    println!("\n=== Example Complete ===");
    Ok(())
}
