//! Run a keystroke script through a calculator session.
//!
//! ```text
//! cargo run --example keypad -- "5 + 2 ^ 3 ="
//! RUST_LOG=keycalc=debug cargo run --example keypad -- "9 × 3 Escape 2 ="
//! ```

use keycalc::Calculator;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let script = if args.is_empty() {
        "5 + 2 ^ 3 =".to_string()
    } else {
        args.join(" ")
    };

    let mut calculator = Calculator::new();
    if let Err(err) = calculator.run_script(&script) {
        eprintln!("{err}");
        std::process::exit(1);
    }

    println!("=== Keypad ===\n");
    println!("Script:  {script}");
    println!("Display: {}", calculator.display());

    println!("\nTape:");
    for transition in calculator.history().transitions() {
        println!(
            "  {:<8} {:>16} -> {:<16} [{}]",
            transition.action.label(),
            transition.from.display_value,
            transition.to.display_value,
            transition.to.phase().name(),
        );
    }

    let results = calculator.history().results();
    if !results.is_empty() {
        println!("\nResults: {}", results.join(", "));
    }
}
