//! Command-line interface definitions and argument parsing

use clap::Parser;

/// Frequent itemset and association rule mining CLI using the Apriori algorithm
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input ARFF file with transactions
    #[arg(short, long)]
    pub file: String,

    /// Minimum support threshold in [0,1]
    #[arg(short, long)]
    pub support: f64,

    /// Minimum confidence threshold in [0,1].
    /// Supplying it selects rule-generation mode; omitting it lists frequent itemsets
    #[arg(short, long)]
    pub confidence: Option<f64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Validate threshold ranges before any work is done
    pub fn validate(&self) -> crate::Result<()> {
        if !(0.0..=1.0).contains(&self.support) {
            anyhow::bail!("Support threshold must be in [0,1], got {}", self.support);
        }

        if let Some(confidence) = self.confidence {
            if !(0.0..=1.0).contains(&confidence) {
                anyhow::bail!("Confidence threshold must be in [0,1], got {}", confidence);
            }
        }

        Ok(())
    }
}
