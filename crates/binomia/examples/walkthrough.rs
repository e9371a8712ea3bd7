//! A guided tour of the Binomia engine.
//!
//! Run with: cargo run --example walkthrough
//! Set RUST_LOG=binomia_expand=debug to see the engine's events.

use std::error::Error;

use binomia::expand::GENERAL_FORMULA;
use binomia::prelude::*;
use tracing_subscriber::EnvFilter;

fn banner(title: &str) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{title}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║          Binomia: The Binomial Theorem, Term by Term       ║");
    println!("╚════════════════════════════════════════════════════════════╝\n");

    example_1_pascal_triangle()?;
    example_2_step_by_step()?;
    example_3_substitution()?;
    example_4_errors();
    example_5_payloads()?;
    Ok(())
}

/// Example 1: Pascal's triangle next to an expansion of order 4
fn example_1_pascal_triangle() -> Result<(), BinomialError> {
    banner("Example 1: Pascal's Triangle");

    let view = TriangleView::for_order(4, &EngineLimits::default())?;
    for row in view.triangle() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(j, c)| {
                if view.is_highlighted(row.index(), j) {
                    format!("[{c}]")
                } else {
                    c.to_string()
                }
            })
            .collect();
        println!("  {:>2}: {}", row.index(), cells.join(" "));
    }
    println!();
    Ok(())
}

/// Example 2: The step-by-step breakdown of (2a - b)³
fn example_2_step_by_step() -> Result<(), BinomialError> {
    banner("Example 2: Step-by-Step Expansion");

    let expansion = expand_binomial(2.0, -1.0, 3, None)?;
    println!("  General:  {GENERAL_FORMULA}");
    println!("  Expand:   {}", expansion.header());
    println!("  Result:   {}", expansion.expanded_form());
    println!("            {}\n", expansion.numeric_result());

    for term in &expansion {
        println!(
            "    Term {}: C({}, {}) = {:<3} {:<28} {:>9.3}",
            term.k + 1,
            expansion.order(),
            term.k,
            term.coefficient.to_string(),
            term.display_expression,
            term.numeric_value
        );
    }
    println!();
    Ok(())
}

/// Example 3: Substituting x into both bases
fn example_3_substitution() -> Result<(), BinomialError> {
    banner("Example 3: Evaluating at x");

    let (a, b, n) = (1.0, 2.0, 4);
    println!("  {}", binomia::expand::binomial_expression(a, b, 4));
    for x in [0.5, 1.0, 1.5] {
        let expansion = expand_binomial(a, b, n, Some(x))?;
        println!("  {} at x = {x}: {}", expansion.header(), expansion.numeric_result());
    }
    println!();
    Ok(())
}

/// Example 4: Inputs the engine refuses
fn example_4_errors() {
    banner("Example 4: Error Handling");

    let limits = EngineLimits::default();
    for n in [171, -1] {
        match expand_binomial(1.0, 1.0, n, None) {
            Ok(_) => println!("  n = {n}: ok"),
            Err(e) if e.is_precision_overflow() => {
                let clamped = limits.clamp_order(n);
                println!("  n = {n}: {e}; clamped to {clamped}");
            }
            Err(e) => println!("  n = {n}: {e}"),
        }
    }
    println!("  C(170, 1) = {:?}", binomial_coefficient(170, 1).map(|c| c.to_string()));
    println!("  C(5, 9)   = {:?}\n", binomial_coefficient(5, 9).map(|c| c.to_string()));
}

/// Example 5: JSON payloads for the chart and the 3D surface
fn example_5_payloads() -> Result<(), Box<dyn Error>> {
    banner("Example 5: Presentation Payloads");

    let expansion = expand_binomial(1.0, 1.0, 5, None)?;
    let chart = ChartSeries::from(&expansion);
    println!("  chart:   {}", serde_json::to_string(&chart)?);

    let markers = surface_markers(&expansion);
    println!("  markers: {}", serde_json::to_string(&markers)?);

    let limits = EngineLimits::default();
    let surface = CoefficientSurface::build(&limits)?;
    let labels = coefficient_labels(&limits)?;
    println!(
        "  surface: order {}, peak height {:.3}, {} labels",
        surface.order(),
        surface.heights().iter().copied().fold(0.0, f64::max),
        labels.len()
    );
    if let Some(label) = labels.last() {
        println!("  label:   {}\n", serde_json::to_string(label)?);
    }
    Ok(())
}
