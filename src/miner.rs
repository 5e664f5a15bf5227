//! Level-wise (Apriori) frequent itemset mining

use crate::data::Itemset;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// An itemset together with its support over the mined database
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentItemset {
    /// Items in canonical (lexicographic) order
    pub items: Itemset,
    /// Fraction of transactions containing the itemset, in [0,1]
    pub support: f64,
}

impl FrequentItemset {
    /// Number of items in the set
    pub fn size(&self) -> usize {
        self.items.len()
    }
}

/// Mining output: frequent itemsets in level-major order plus the raw
/// containment counts needed for exact confidence computation downstream
#[derive(Debug)]
pub struct MiningResult {
    /// Frequent itemsets, smallest size first, canonical order within a level
    pub itemsets: Vec<FrequentItemset>,
    /// Containment count per frequent itemset
    counts: HashMap<Itemset, usize>,
    /// Total number of transactions in the mined database
    total: usize,
}

impl MiningResult {
    /// Containment count of a frequent itemset, if it was retained
    pub fn count(&self, items: &Itemset) -> Option<usize> {
        self.counts.get(items).copied()
    }

    /// Support of a frequent itemset, if it was retained
    pub fn support(&self, items: &Itemset) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        self.count(items).map(|c| c as f64 / self.total as f64)
    }

    /// Total number of transactions the supports are relative to
    pub fn total_transactions(&self) -> usize {
        self.total
    }

    /// Number of mined levels (largest frequent itemset size)
    pub fn levels(&self) -> usize {
        self.itemsets.last().map_or(0, FrequentItemset::size)
    }
}

/// Mine all frequent itemsets from a transaction database
///
/// Runs the Apriori level-wise loop: frequent 1-itemsets are seeded from the
/// attribute universe, and each further level joins frequent (k-1)-itemsets
/// sharing a (k-2)-item prefix. Candidates generated that way have all their
/// (k-1)-subsets frequent, so no separate subset prune is needed.
///
/// # Arguments
/// * `transactions` - The transaction database
/// * `universe` - All attribute names items are drawn from
/// * `minsup` - Minimum support threshold in [0,1], boundary inclusive
///
/// # Returns
/// * `MiningResult` with itemsets in level-major, canonical order
pub fn mine(
    transactions: &[Itemset],
    universe: &BTreeSet<String>,
    minsup: f64,
) -> crate::Result<MiningResult> {
    if !(0.0..=1.0).contains(&minsup) {
        anyhow::bail!("Support threshold must be in [0,1], got {}", minsup);
    }

    let total = transactions.len();
    let mut itemsets = Vec::new();
    let mut counts = HashMap::new();

    if total == 0 || universe.is_empty() {
        return Ok(MiningResult {
            itemsets,
            counts,
            total,
        });
    }

    // Seed level: one candidate per universe item, in canonical order
    let mut level: Vec<Itemset> = Vec::new();
    for item in universe {
        let candidate: Itemset = std::iter::once(item.clone()).collect();
        let count = containment_count(transactions, &candidate);
        if count as f64 / total as f64 >= minsup {
            counts.insert(candidate.clone(), count);
            level.push(candidate);
        }
    }

    while !level.is_empty() {
        for items in &level {
            itemsets.push(FrequentItemset {
                items: items.clone(),
                support: counts[items] as f64 / total as f64,
            });
        }
        if level.len() < 2 {
            break;
        }

        let mut next_level: BTreeSet<Itemset> = BTreeSet::new();
        for group in prefix_groups(&level).values() {
            for (i, first) in group.iter().enumerate() {
                for second in &group[i + 1..] {
                    let candidate: Itemset = first.union(second).cloned().collect();
                    let count = containment_count(transactions, &candidate);
                    if count as f64 / total as f64 >= minsup {
                        counts.insert(candidate.clone(), count);
                        next_level.insert(candidate);
                    }
                }
            }
        }

        level = next_level.into_iter().collect();
    }

    Ok(MiningResult {
        itemsets,
        counts,
        total,
    })
}

/// Number of transactions containing `items` as a subset
pub(crate) fn containment_count(transactions: &[Itemset], items: &Itemset) -> usize {
    transactions.iter().filter(|t| items.is_subset(t)).count()
}

/// Group k-itemsets by their (k-1)-item prefix; any two sets in one group
/// differ only in their last item and join into a valid (k+1)-candidate
fn prefix_groups(level: &[Itemset]) -> BTreeMap<Vec<&String>, Vec<&Itemset>> {
    let mut groups: BTreeMap<Vec<&String>, Vec<&Itemset>> = BTreeMap::new();
    for items in level {
        let prefix: Vec<&String> = items.iter().take(items.len() - 1).collect();
        groups.entry(prefix).or_default().push(items);
    }
    groups
}
