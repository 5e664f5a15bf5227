//! Semicolon-CSV rendering of itemset and rule tables

use crate::miner::FrequentItemset;
use crate::rules::AssociationRule;
use csv::WriterBuilder;

/// Render the frequent itemset table
///
/// Columns are semicolon-separated, items comma-separated within a column:
/// `size;items`, one row per itemset in the order given. An empty slice
/// renders the header only.
pub fn itemset_table(itemsets: &[FrequentItemset]) -> crate::Result<String> {
    let mut writer = WriterBuilder::new().delimiter(b';').from_writer(vec![]);

    writer.write_record(["size", "items"])?;
    for frequent in itemsets {
        writer.write_record([frequent.size().to_string(), join(&frequent.items)])?;
    }

    finish(writer)
}

/// Render the association rule table
///
/// Columns: `antecedent;consequent;confidence;support`, one row per rule in
/// the order given.
pub fn rule_table(rules: &[AssociationRule]) -> crate::Result<String> {
    let mut writer = WriterBuilder::new().delimiter(b';').from_writer(vec![]);

    writer.write_record(["antecedent", "consequent", "confidence", "support"])?;
    for rule in rules {
        writer.write_record([
            join(&rule.antecedent),
            join(&rule.consequent),
            format_ratio(rule.confidence),
            format_ratio(rule.support),
        ])?;
    }

    finish(writer)
}

fn join(items: &crate::data::Itemset) -> String {
    items.iter().map(String::as_str).collect::<Vec<_>>().join(",")
}

/// Shortest decimal form, but integral ratios keep one decimal place so that
/// a certain rule prints as `1.0`
fn format_ratio(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

fn finish(writer: csv::Writer<Vec<u8>>) -> crate::Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush output table: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}
