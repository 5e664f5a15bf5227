//! Association rule derivation from mined frequent itemsets

use crate::data::Itemset;
use crate::miner::{containment_count, MiningResult};

/// An implication antecedent ⇒ consequent with its derived metrics
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationRule {
    /// Left-hand side, non-empty, disjoint from the consequent
    pub antecedent: Itemset,
    /// Right-hand side, non-empty
    pub consequent: Itemset,
    /// Support(antecedent ∪ consequent) / Support(antecedent), in (0,1]
    pub confidence: f64,
    /// Support of the full itemset antecedent ∪ consequent
    pub support: f64,
}

/// Derive all association rules meeting a confidence threshold
///
/// Every frequent itemset F with |F| >= 2 contributes one candidate rule per
/// non-empty proper subset A of F, with consequent F \ A, for 2^|F| - 2
/// candidates. Confidence is computed as the exact containment-count ratio
/// count(F) / count(A) rather than a quotient of rounded supports, so rules
/// sitting exactly on the threshold are kept.
///
/// Antecedent counts come from the mining result; every antecedent of a
/// frequent itemset is itself frequent under the same threshold, so the
/// direct rescan of the database is a fallback only.
///
/// # Arguments
/// * `mining` - Output of [`crate::miner::mine`] over the same database
/// * `transactions` - The transaction database, for the fallback rescan
/// * `minconf` - Minimum confidence threshold in [0,1], boundary inclusive
pub fn generate_rules(
    mining: &MiningResult,
    transactions: &[Itemset],
    minconf: f64,
) -> crate::Result<Vec<AssociationRule>> {
    if !(0.0..=1.0).contains(&minconf) {
        anyhow::bail!("Confidence threshold must be in [0,1], got {}", minconf);
    }

    let total = mining.total_transactions();
    let mut rules = Vec::new();

    for frequent in mining.itemsets.iter().filter(|f| f.size() >= 2) {
        let items: Vec<&String> = frequent.items.iter().collect();
        let full_count = match mining.count(&frequent.items) {
            Some(count) => count,
            None => containment_count(transactions, &frequent.items),
        };

        // Bitmask over the sorted items enumerates every non-empty proper
        // subset as the antecedent; ascending mask order keeps output stable
        for mask in 1..(1u32 << items.len()) - 1 {
            let mut antecedent = Itemset::new();
            let mut consequent = Itemset::new();
            for (position, item) in items.iter().enumerate() {
                if mask & (1 << position) != 0 {
                    antecedent.insert((*item).clone());
                } else {
                    consequent.insert((*item).clone());
                }
            }

            let antecedent_count = match mining.count(&antecedent) {
                Some(count) => count,
                None => containment_count(transactions, &antecedent),
            };
            if antecedent_count == 0 {
                continue;
            }

            let confidence = full_count as f64 / antecedent_count as f64;
            if confidence >= minconf {
                rules.push(AssociationRule {
                    antecedent,
                    consequent,
                    confidence,
                    support: full_count as f64 / total as f64,
                });
            }
        }
    }

    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::miner::mine;
    use std::collections::BTreeSet;

    fn itemset(items: &[&str]) -> Itemset {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn market_basket() -> (Vec<Itemset>, BTreeSet<String>) {
        let transactions = vec![
            itemset(&["bread", "milk"]),
            itemset(&["bread", "diapers", "beer"]),
            itemset(&["milk", "diapers", "beer"]),
            itemset(&["bread", "milk", "diapers", "beer"]),
            itemset(&["bread", "milk", "diapers"]),
        ];
        let universe = itemset(&["bread", "milk", "diapers", "beer"]);
        (transactions, universe)
    }

    #[test]
    fn test_rules_market_basket() {
        let (transactions, universe) = market_basket();
        let mining = mine(&transactions, &universe, 0.5).unwrap();
        let rules = generate_rules(&mining, &transactions, 0.75).unwrap();

        // Each of the four frequent pairs yields both directions at >= 0.75
        assert_eq!(rules.len(), 8);

        let beer_diapers = rules
            .iter()
            .find(|r| r.antecedent == itemset(&["beer"]) && r.consequent == itemset(&["diapers"]))
            .unwrap();
        assert_eq!(beer_diapers.confidence, 1.0);
        assert_eq!(beer_diapers.support, 0.6);

        // 3/4 exactly on the threshold, must be kept
        let bread_milk = rules
            .iter()
            .find(|r| r.antecedent == itemset(&["bread"]) && r.consequent == itemset(&["milk"]))
            .unwrap();
        assert_eq!(bread_milk.confidence, 0.75);

        let milk_bread = rules
            .iter()
            .find(|r| r.antecedent == itemset(&["milk"]) && r.consequent == itemset(&["bread"]))
            .unwrap();
        assert_eq!(milk_bread.confidence, 0.75);
    }

    #[test]
    fn test_rule_invariants() {
        let (transactions, universe) = market_basket();
        let mining = mine(&transactions, &universe, 0.4).unwrap();
        let rules = generate_rules(&mining, &transactions, 0.0).unwrap();

        for rule in &rules {
            assert!(!rule.antecedent.is_empty());
            assert!(!rule.consequent.is_empty());
            assert!(rule.antecedent.is_disjoint(&rule.consequent));
            assert!(rule.confidence > 0.0 && rule.confidence <= 1.0);
            assert!(rule.support > 0.0 && rule.support <= 1.0);

            let full: Itemset = rule.antecedent.union(&rule.consequent).cloned().collect();
            let expected = mining.count(&full).unwrap() as f64
                / mining.count(&rule.antecedent).unwrap() as f64;
            assert_eq!(rule.confidence, expected);
        }
    }

    #[test]
    fn test_candidate_count_per_itemset() {
        // A single 3-transaction makes {a,b,c} frequent with every subset at
        // support 1.0, so minconf 0 keeps all 2^k - 2 candidates per itemset
        let transactions = vec![itemset(&["a", "b", "c"])];
        let universe = itemset(&["a", "b", "c"]);
        let mining = mine(&transactions, &universe, 1.0).unwrap();
        let rules = generate_rules(&mining, &transactions, 0.0).unwrap();

        // Three pairs contribute 2 rules each, the triple contributes 6
        assert_eq!(rules.len(), 3 * 2 + 6);
    }

    #[test]
    fn test_singletons_yield_no_rules() {
        let (transactions, universe) = market_basket();
        // 0.7 keeps only the three 0.8-support singletons
        let mining = mine(&transactions, &universe, 0.7).unwrap();
        assert!(mining.itemsets.iter().all(|f| f.size() == 1));

        let rules = generate_rules(&mining, &transactions, 0.0).unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_confidence_filter() {
        let (transactions, universe) = market_basket();
        let mining = mine(&transactions, &universe, 0.5).unwrap();

        // Only the two confidence-1.0 rules survive a threshold just above 0.75
        let rules = generate_rules(&mining, &transactions, 0.8).unwrap();
        assert!(rules.iter().all(|r| r.confidence >= 0.8));
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].antecedent, itemset(&["beer"]));
        assert_eq!(rules[0].consequent, itemset(&["diapers"]));
    }

    #[test]
    fn test_invalid_threshold() {
        let (transactions, universe) = market_basket();
        let mining = mine(&transactions, &universe, 0.5).unwrap();

        assert!(generate_rules(&mining, &transactions, -0.5).is_err());
        assert!(generate_rules(&mining, &transactions, 1.5).is_err());
    }
}
