use std::collections::HashMap;

use rayon::prelude::*;
use tracing::debug;

use crate::classify::rules::{DecisionRule, HitRule, DECISION_RULES, FALLBACK, HIT_RULES, OVERRIDE};
use crate::core::hit::{AlignmentHit, HitSet, HitSetError};
use crate::core::types::{Classification, ClassificationCounts, ClassificationResult};

/// Turns per-contig hit lists into classification results
#[derive(Clone)]
pub struct HitClassifier {
    hit_rules: Vec<HitRule>,
    decision_rules: Vec<DecisionRule>,
    fallback: Classification,
    override_rule: Option<DecisionRule>,
}

impl Default for HitClassifier {
    fn default() -> Self {
        Self {
            hit_rules: HIT_RULES.to_vec(),
            decision_rules: DECISION_RULES.to_vec(),
            fallback: FALLBACK,
            override_rule: Some(OVERRIDE),
        }
    }
}

impl HitClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier with custom tables
    #[must_use]
    pub fn with_rules(
        hit_rules: Vec<HitRule>,
        decision_rules: Vec<DecisionRule>,
        fallback: Classification,
        override_rule: Option<DecisionRule>,
    ) -> Self {
        Self {
            hit_rules,
            decision_rules,
            fallback,
            override_rule,
        }
    }

    /// Aggregate hits into counters.
    ///
    /// An empty hit list counts as a single no-hit marker. The counters are
    /// independent of hit order.
    #[must_use]
    pub fn aggregate(&self, hits: &[AlignmentHit]) -> ClassificationCounts {
        let mut counts = ClassificationCounts::default();

        if hits.is_empty() {
            counts.notfound_hits = 1;
            return counts;
        }

        for hit in hits {
            for rule in &self.hit_rules {
                if (rule.applies)(hit) {
                    rule.counter.increment(&mut counts);
                    if rule.stop {
                        break;
                    }
                }
            }
        }

        counts
    }

    /// Pick the label for a set of counters
    #[must_use]
    pub fn decide(&self, counts: &ClassificationCounts) -> Classification {
        let label = self
            .decision_rules
            .iter()
            .find(|rule| (rule.applies)(counts))
            .map_or(self.fallback, |rule| rule.label);

        match &self.override_rule {
            Some(rule) if (rule.applies)(counts) => rule.label,
            _ => label,
        }
    }

    /// Classify one contig from its hits. Never fails.
    #[must_use]
    pub fn classify_hits(&self, contig: &str, hits: &[AlignmentHit]) -> ClassificationResult {
        let counts = self.aggregate(hits);
        let classification = self.decide(&counts);

        debug!(
            "{contig}: {classification} (chromosome={}, plasmid={}, undetermined={}, human={}, not_found={})",
            counts.chromosome_hits,
            counts.plasmid_hits,
            counts.undetermined_hits,
            counts.contamination_hits,
            counts.notfound_hits,
        );

        ClassificationResult {
            contig: contig.to_string(),
            classification,
            is_contaminated: counts.contamination_hits > 0,
            counts,
        }
    }

    #[must_use]
    pub fn classify(&self, hit_set: &HitSet) -> ClassificationResult {
        self.classify_hits(hit_set.contig(), hit_set.hits())
    }

    /// Classify many contigs in parallel; results keep the input order.
    #[must_use]
    pub fn classify_all(&self, hit_sets: &[HitSet]) -> Vec<ClassificationResult> {
        hit_sets.par_iter().map(|set| self.classify(set)).collect()
    }
}

/// Group a flat hit list by contig, in order of first appearance.
///
/// # Errors
///
/// Returns `HitSetError::MixedSentinel` if any contig has a no-hit marker
/// alongside real hits.
pub fn group_hits(hits: Vec<AlignmentHit>) -> Result<Vec<HitSet>, HitSetError> {
    let mut order: Vec<String> = Vec::new();
    let mut grouped: HashMap<String, Vec<AlignmentHit>> = HashMap::new();

    for hit in hits {
        if !grouped.contains_key(&hit.contig) {
            order.push(hit.contig.clone());
        }
        grouped.entry(hit.contig.clone()).or_default().push(hit);
    }

    order
        .into_iter()
        .map(|contig| {
            let hits = grouped.remove(&contig).unwrap_or_default();
            HitSet::new(contig, hits)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hit::TaxonomyId;

    fn hit(tax: &str, desc: &str) -> AlignmentHit {
        AlignmentHit::new("c1", TaxonomyId::parse(tax), desc)
    }

    fn classify(hits: &[AlignmentHit]) -> ClassificationResult {
        HitClassifier::new().classify_hits("c1", hits)
    }

    #[test]
    fn test_majority_chromosome() {
        let result = classify(&[
            hit("100", "plasmid pXYZ"),
            hit("200", "chromosome 1"),
            hit("300", "chromosome 2"),
        ]);

        assert_eq!(result.counts.chromosome_hits, 2);
        assert_eq!(result.counts.plasmid_hits, 1);
        assert_eq!(result.counts.undetermined_hits, 0);
        assert_eq!(result.classification, Classification::Chromosome);
        assert!(!result.is_contaminated);
    }

    #[test]
    fn test_majority_plasmid() {
        let result = classify(&[
            hit("562", "Escherichia coli strain K-12 plasmid F"),
            hit("562", "Escherichia coli plasmid pO157"),
            hit("573", "Klebsiella pneumoniae chromosome"),
        ]);
        assert_eq!(result.classification, Classification::Plasmid);
    }

    #[test]
    fn test_all_human_is_contamination() {
        let human = hit("9606", "Homo sapiens");
        let result = classify(&[human.clone(), human.clone(), human]);

        assert_eq!(result.counts.contamination_hits, 3);
        assert_eq!(result.counts.replicon_hits(), 0);
        assert_eq!(result.classification, Classification::Contamination);
        assert!(result.is_contaminated);
    }

    #[test]
    fn test_minor_contamination_flags_without_override() {
        let result = classify(&[
            hit("9606", "Homo sapiens chromosome 7"),
            hit("562", "E. coli chromosome"),
            hit("562", "E. coli chromosome"),
        ]);

        assert_eq!(result.counts.contamination_hits, 1);
        assert_eq!(result.counts.chromosome_hits, 2);
        assert_eq!(result.classification, Classification::Chromosome);
        assert!(result.is_contaminated);
    }

    #[test]
    fn test_not_found_only() {
        let result = classify(&[AlignmentHit::not_found("c1")]);

        assert_eq!(result.classification, Classification::NoSignificantHits);
        assert!(!result.is_contaminated);
        assert_eq!(
            result.counts,
            ClassificationCounts {
                notfound_hits: 1,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_empty_hits_match_not_found() {
        let empty = classify(&[]);
        let not_found = classify(&[AlignmentHit::not_found("c1")]);
        assert_eq!(empty, not_found);
    }

    #[test]
    fn test_tie_goes_to_undetermined() {
        let result = classify(&[hit("1", "plasmid pA"), hit("2", "chromosome I")]);

        assert_eq!(result.counts.chromosome_hits, result.counts.plasmid_hits);
        assert_eq!(result.classification, Classification::Undetermined);
    }

    #[test]
    fn test_undetermined_titles() {
        let result = classify(&[
            hit("1", "Salmonella enterica strain LT2 complete genome"),
            hit("2", "Salmonella enterica strain SL1344 complete genome"),
        ]);
        assert_eq!(result.counts.undetermined_hits, 2);
        assert_eq!(result.classification, Classification::Undetermined);
    }

    #[test]
    fn test_title_with_both_terms_counts_twice() {
        let result = classify(&[hit("1", "chromosome and plasmid sequence")]);

        assert_eq!(result.counts.plasmid_hits, 1);
        assert_eq!(result.counts.chromosome_hits, 1);
        assert_eq!(result.counts.undetermined_hits, 0);
        assert_eq!(result.classification, Classification::Undetermined);
    }

    #[test]
    fn test_human_hit_never_counts_as_replicon() {
        let result = classify(&[hit("9606", "Homo sapiens chromosome 1 plasmid-like")]);
        assert_eq!(result.counts.contamination_hits, 1);
        assert_eq!(result.counts.replicon_hits(), 0);
    }

    #[test]
    fn test_contamination_tie_does_not_override() {
        let result = classify(&[hit("9606", "Homo sapiens"), hit("1", "plasmid pA")]);
        assert_eq!(result.classification, Classification::Plasmid);
        assert!(result.is_contaminated);
    }

    #[test]
    fn test_no_contamination_never_labels_contamination() {
        let titles = [
            "plasmid pA",
            "chromosome",
            "complete genome",
            "plasmid chromosome",
        ];
        // Every multiset of up to three titles
        for a in titles {
            for b in titles {
                for c in titles {
                    let result = classify(&[hit("1", a), hit("2", b), hit("3", c)]);
                    assert_ne!(result.classification, Classification::Contamination);
                    assert!(!result.is_contaminated);
                }
            }
        }
    }

    #[test]
    fn test_order_independent() {
        let hits = vec![
            hit("9606", "Homo sapiens"),
            hit("1", "plasmid pA"),
            hit("2", "chromosome"),
            hit("3", "chromosome"),
            hit("4", "genome"),
        ];
        let expected = classify(&hits);

        let mut reversed = hits.clone();
        reversed.reverse();
        assert_eq!(classify(&reversed), expected);

        let mut rotated = hits;
        rotated.rotate_left(2);
        assert_eq!(classify(&rotated), expected);
    }

    #[test]
    fn test_no_significant_hits_wins_over_replicon_rules() {
        // Only reachable without boundary checks: the classifier stays total
        let result = classify(&[AlignmentHit::not_found("c1"), AlignmentHit::not_found("c1")]);
        assert_eq!(result.classification, Classification::NoSignificantHits);
    }

    #[test]
    fn test_classify_all_keeps_input_order() {
        let ids: Vec<String> = (0..64).map(|i| format!("contig_{i}")).collect();
        let sets: Vec<HitSet> = ids.iter().map(|id| HitSet::not_found(id.clone())).collect();

        let results = HitClassifier::new().classify_all(&sets);
        let result_ids: Vec<&str> = results.iter().map(|r| r.contig.as_str()).collect();
        assert_eq!(result_ids, ids.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_group_hits_by_first_appearance() {
        let hits = vec![
            AlignmentHit::new("b", TaxonomyId::parse("1"), "plasmid"),
            AlignmentHit::new("a", TaxonomyId::parse("2"), "chromosome"),
            AlignmentHit::new("b", TaxonomyId::parse("3"), "plasmid"),
            AlignmentHit::not_found("c"),
        ];

        let sets = group_hits(hits).unwrap();
        let contigs: Vec<&str> = sets.iter().map(HitSet::contig).collect();
        assert_eq!(contigs, vec!["b", "a", "c"]);
        assert_eq!(sets[0].hits().len(), 2);
    }

    #[test]
    fn test_group_hits_rejects_mixed_sentinel() {
        let hits = vec![
            AlignmentHit::new("a", TaxonomyId::parse("1"), "plasmid"),
            AlignmentHit::not_found("a"),
        ];
        assert!(matches!(
            group_hits(hits),
            Err(HitSetError::MixedSentinel { .. })
        ));
    }

    #[test]
    fn test_custom_rule_table() {
        fn is_phage(hit: &AlignmentHit) -> bool {
            hit.description.contains("phage")
        }

        let mut rules = HIT_RULES.to_vec();
        rules.insert(
            2,
            HitRule {
                name: "phage in title",
                applies: is_phage,
                counter: crate::classify::rules::Counter::Undetermined,
                stop: true,
            },
        );
        let classifier =
            HitClassifier::with_rules(rules, DECISION_RULES.to_vec(), FALLBACK, Some(OVERRIDE));

        let result = classifier.classify_hits("c1", &[hit("1", "phage P1 plasmid")]);
        assert_eq!(result.counts.undetermined_hits, 1);
        assert_eq!(result.counts.plasmid_hits, 0);
    }
}
