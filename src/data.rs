//! Transaction loading from ARFF-style input files

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// A set of distinct items in canonical (lexicographic) order
pub type Itemset = BTreeSet<String>;

/// Parsed transaction database and its attribute universe
#[derive(Debug)]
pub struct TransactionData {
    /// Transactions in file order, each a set of attribute names
    pub transactions: Vec<Itemset>,
    /// All declared attribute names
    pub attributes: BTreeSet<String>,
}

/// Load transactions from an ARFF file
///
/// The file declares attributes as `@attribute 'name' ...` lines and encodes
/// each transaction as a comma-separated row of `t`/`f` flags positionally
/// aligned with the declared attributes. Comment lines (`#` or `%`) and the
/// `@relation`/`@data` directives are skipped.
///
/// # Arguments
/// * `file_path` - Path to the ARFF file
///
/// # Returns
/// * `TransactionData` with the transaction list and attribute universe
pub fn load_transactions(file_path: &str) -> crate::Result<TransactionData> {
    let file = File::open(file_path)
        .map_err(|e| anyhow::anyhow!("Cannot open input file {}: {}", file_path, e))?;
    let reader = BufReader::new(file);

    let mut attribute_names: Vec<String> = Vec::new();
    let mut transactions: Vec<Itemset> = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.len() < 2 || trimmed.contains('#') || trimmed.starts_with('%') {
            continue;
        }

        let lower = trimmed.to_lowercase();
        if lower.starts_with("@attribute") {
            if let Some(name) = quoted_name(trimmed) {
                attribute_names.push(name.to_string());
            }
            continue;
        }
        if lower.starts_with("@relation") || lower.starts_with("@data") {
            continue;
        }

        transactions.push(parse_row(trimmed, &attribute_names, line_no + 1)?);
    }

    Ok(TransactionData {
        transactions,
        attributes: attribute_names.into_iter().collect(),
    })
}

/// Extract the text between the first pair of single quotes, if any
fn quoted_name(line: &str) -> Option<&str> {
    let start = line.find('\'')?;
    let rest = &line[start + 1..];
    let end = rest.find('\'')?;
    Some(&rest[..end])
}

/// Parse one `t`/`f` flag row into the set of present attributes
fn parse_row(line: &str, attribute_names: &[String], line_no: usize) -> crate::Result<Itemset> {
    let mut items = Itemset::new();

    for (position, token) in line.split(',').enumerate() {
        if !token.trim().eq_ignore_ascii_case("t") {
            continue;
        }
        match attribute_names.get(position) {
            Some(name) => {
                items.insert(name.clone());
            }
            None => anyhow::bail!(
                "Malformed input at line {}: flag in column {} but only {} attributes are declared",
                line_no,
                position + 1,
                attribute_names.len()
            ),
        }
    }

    Ok(items)
}
