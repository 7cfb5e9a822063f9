//! Example: Current Air-Quality Conditions
//!
//! This example demonstrates how to take a pollutant reading for a
//! location and compute its AQI, the way a request handler would for a
//! current-conditions endpoint. Without arguments it uses a mock
//! station; pass a latitude and longitude to change the location.
//!
//! Run with: `cargo run --example current_conditions -- 45.52 -122.68`

use std::env;

use skycast_core::{compute_aqi, Coordinates, MockStation, ReadingSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let location = if args.len() > 2 {
        Coordinates::new(args[1].parse()?, args[2].parse()?)?
    } else {
        Coordinates::new(45.52, -122.68)?
    };

    println!("Fetching reading for {}...", location);
    let mut station = MockStation::new(rand::random());
    let reading = station.current(location)?;

    println!();
    println!("Measured Concentrations:");
    for (pollutant, concentration) in reading.present() {
        println!("  {:<6} {:>8.1} {}", pollutant.to_string(), concentration, pollutant.unit());
    }

    let result = compute_aqi(&reading)?;

    println!();
    println!("Air Quality Index:");
    println!("  AQI:       {}", result.value);
    println!("  Primary:   {}", result.primary_pollutant);
    println!("  Category:  {}", result.category);
    println!("  Guidance:  {}", result.category.description());
    println!("  Color:     {}", result.color());

    Ok(())
}
