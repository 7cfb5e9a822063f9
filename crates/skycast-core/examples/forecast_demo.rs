//! Example: Short-Horizon Forecast
//!
//! Generates an air-quality forecast from a mock reading and prints the
//! series as a table. Pass a horizon in hours (default 24) and a seed to
//! make the run reproducible.
//!
//! Run with: `cargo run --example forecast_demo -- 48 42`

use std::env;

use skycast_core::{
    generate_forecast_seeded, Coordinates, MockStation, ReadingSource, DEFAULT_STEP_HOURS,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let horizon: u32 = if args.len() > 1 { args[1].parse()? } else { 24 };
    let seed: u64 = if args.len() > 2 { args[2].parse()? } else { 42 };

    let location = Coordinates::new(45.52, -122.68)?;
    let mut station = MockStation::new(seed);
    let base = station.current(location)?;

    println!("Base AQI at {}:", location);
    let current = skycast_core::compute_aqi(&base)?;
    println!("  {}", current);
    println!();

    let series = generate_forecast_seeded(&base, horizon, DEFAULT_STEP_HOURS, seed)?;

    println!(
        "{} h forecast in {} h steps ({} points):",
        series.horizon_hours,
        series.step_hours,
        series.len()
    );
    println!();
    println!("  offset   AQI  category");
    for point in series.iter() {
        println!(
            "  +{:>4} h  {:>3}  {}",
            point.offset_hours, point.aqi.value, point.aqi.category
        );
    }

    if let Some(peak) = series.peak() {
        println!();
        println!(
            "Peak: AQI {} at +{} h ({})",
            peak.aqi.value, peak.offset_hours, peak.aqi.category
        );
    }

    Ok(())
}
