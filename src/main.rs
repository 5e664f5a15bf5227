//! RuleForge: Frequent itemset and association rule mining CLI
//!
//! This is the main entrypoint that orchestrates transaction loading,
//! frequent itemset mining, rule generation and table output.

use anyhow::Result;
use clap::Parser;
use ruleforge::{generate_rules, itemset_table, load_transactions, mine, rule_table, Args};
use std::time::Instant;

fn main() -> Result<()> {
    // Parse and validate command-line arguments
    let args = Args::parse();
    args.validate()?;

    if args.verbose {
        println!("RuleForge - Apriori frequent itemset mining");
        println!("===========================================\n");
    }

    // Supplying a confidence threshold selects rule-generation mode
    if let Some(confidence) = args.confidence {
        run_rule_mode(&args, confidence)?;
    } else {
        run_itemset_mode(&args)?;
    }

    Ok(())
}

/// Mine frequent itemsets and print the itemset table
fn run_itemset_mode(args: &Args) -> Result<()> {
    let start_time = Instant::now();

    let data = load_transactions(&args.file)?;
    if args.verbose {
        println!("✓ Loaded {} transactions over {} attributes from {}",
            data.transactions.len(),
            data.attributes.len(),
            args.file
        );
        println!("\nMining with support threshold {}...", args.support);
    }

    let mining = mine(&data.transactions, &data.attributes, args.support)?;

    if args.verbose {
        println!(
            "✓ Found {} frequent itemsets across {} levels",
            mining.itemsets.len(),
            mining.levels()
        );
        println!("  Processing time: {:.2}s\n", start_time.elapsed().as_secs_f64());
    }

    print!("{}", itemset_table(&mining.itemsets)?);
    Ok(())
}

/// Mine frequent itemsets, derive association rules and print the rule table
fn run_rule_mode(args: &Args, confidence: f64) -> Result<()> {
    let start_time = Instant::now();

    let data = load_transactions(&args.file)?;
    if args.verbose {
        println!(
            "✓ Loaded {} transactions over {} attributes from {}",
            data.transactions.len(),
            data.attributes.len(),
            args.file
        );
        println!(
            "\nMining with support threshold {}, confidence threshold {}...",
            args.support, confidence
        );
    }

    let mining = mine(&data.transactions, &data.attributes, args.support)?;
    let rules = generate_rules(&mining, &data.transactions, confidence)?;

    if args.verbose {
        println!(
            "✓ Derived {} rules from {} frequent itemsets",
            rules.len(),
            mining.itemsets.len()
        );
        println!("  Processing time: {:.2}s\n", start_time.elapsed().as_secs_f64());
    }

    print!("{}", rule_table(&rules)?);
    Ok(())
}
