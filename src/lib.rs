//! RuleForge: A Rust CLI application for frequent itemset mining and
//! association rule generation using the Apriori algorithm
//!
//! This library provides level-wise (Apriori) mining of frequent itemsets
//! over a boolean transaction database, and derivation of association rules
//! from the mined itemsets.

pub mod cli;
pub mod data;
pub mod miner;
pub mod output;
pub mod rules;

// Re-export public items for easier access
pub use cli::Args;
pub use data::{load_transactions, Itemset, TransactionData};
pub use miner::{mine, FrequentItemset, MiningResult};
pub use output::{itemset_table, rule_table};
pub use rules::{generate_rules, AssociationRule};

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
