//! Runs the three candidate divisors over the full horizon and compares
//! their overall quality.
//!
//! Run with: `cargo run --example compare_divisors`

use hue_spread::prelude::*;

fn main() {
    println!(
        "=== Divisor comparison, k = {} through {} ===",
        FIRST_STEP,
        STEP_LIMIT - 1
    );
    println!();

    for rule in [
        SplitRule::halves(),
        SplitRule::golden(),
        SplitRule::seven_fourths(),
    ] {
        let label = rule.label().to_string();
        let divisor = rule.divisor();
        let report = Simulation::new(rule).run();
        println!(
            "{:<18} divisor = {:<14} W = {:.6}  A = {:.6}",
            label,
            divisor,
            report.worst_ratio(),
            report.average_ratio()
        );
    }
}
