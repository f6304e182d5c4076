//! List command - show registered cases without running them

use crate::testing::list_json;
use crate::tour;
use anyhow::Result;
use colored::*;

/// Arguments for the list command
#[derive(Debug, Default)]
pub struct ListArgs {
    /// Filter cases by label pattern
    pub pattern: Option<String>,
    /// Output in JSON format
    pub json: bool,
}

/// Run the list command
pub fn run(args: ListArgs) -> Result<()> {
    let mut registry = tour::suite();
    if let Some(pattern) = &args.pattern {
        registry = registry.filter(pattern);
    }

    if args.json {
        println!("{}", list_json(&registry));
        return Ok(());
    }

    for case in registry.cases() {
        if case.is_pending() {
            println!("{} {}", case.label(), "(pending)".yellow());
        } else {
            println!("{}", case.label());
        }
    }

    println!();
    println!(
        "{} test{}",
        registry.len().to_string().bold(),
        if registry.len() == 1 { "" } else { "s" }
    );
    Ok(())
}
