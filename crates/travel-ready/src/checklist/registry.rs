use std::collections::{BTreeMap, HashMap};

use super::domain::{ChecklistItem, Priority, TripParameters};
use super::rules::RuleItem;

/// Mergeable working entry for one canonical item name.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Candidate {
    pub key: String,
    pub category: String,
    pub score: f64,
    pub rationale: Vec<String>,
}

impl Candidate {
    fn merge(&mut self, score: f64, rationale: &[&str]) {
        self.score = self.score.max(score);
        for note in rationale {
            if !self.rationale.iter().any(|existing| existing == note) {
                self.rationale.push((*note).to_string());
            }
        }
    }
}

/// Per-run accumulator keyed by lowercase item name.
///
/// Candidates are kept in registration order; `index` maps canonical names to
/// their slot so merges stay O(1).
pub(crate) struct CandidateRegistry<'a> {
    params: &'a TripParameters,
    candidates: Vec<Candidate>,
    index: HashMap<String, usize>,
    category_counts: BTreeMap<String, usize>,
}

impl<'a> CandidateRegistry<'a> {
    pub fn new(params: &'a TripParameters) -> Self {
        Self {
            params,
            candidates: Vec::new(),
            index: HashMap::new(),
            category_counts: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn category_counts(&self) -> &BTreeMap<String, usize> {
        &self.category_counts
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Candidate> {
        self.index
            .get(&name.to_lowercase())
            .map(|slot| &self.candidates[*slot])
    }

    /// Trip-wide bonus applied to every registration.
    pub fn adjustment(&self) -> f64 {
        let mut bonus = 0.0;
        if self.params.destination_climate == self.params.origin_climate {
            bonus -= 0.1;
        }
        if self.params.duration_days >= 10 {
            bonus += 0.2;
        }
        if self.params.duration_days >= 21 {
            bonus += 0.4;
        }
        bonus
    }

    pub fn register(&mut self, item: &RuleItem) {
        self.add_item(item.name, item.category, item.score, item.rationale);
    }

    pub fn register_all(&mut self, items: &[RuleItem]) {
        for item in items {
            self.register(item);
        }
    }

    pub fn add_item(&mut self, name: &str, category: &str, base_score: f64, rationale: &[&str]) {
        let key = name.to_lowercase();
        let score = base_score + self.adjustment();

        if let Some(slot) = self.index.get(&key) {
            self.candidates[*slot].merge(score, rationale);
            return;
        }

        let mut candidate = Candidate {
            key: key.clone(),
            category: category.to_string(),
            score,
            rationale: Vec::with_capacity(rationale.len()),
        };
        candidate.merge(score, rationale);

        *self
            .category_counts
            .entry(category.to_string())
            .or_insert(0) += 1;
        self.index.insert(key, self.candidates.len());
        self.candidates.push(candidate);
    }

    /// Ranks candidates by descending score and maps them to output items.
    ///
    /// The sort is stable, so equal scores keep registration order.
    pub fn into_prioritized(self) -> Vec<ChecklistItem> {
        let mut ranked = self.candidates;
        ranked.sort_by(|left, right| right.score.total_cmp(&left.score));

        ranked
            .into_iter()
            .map(|candidate| {
                let score = round_to_cents(candidate.score);
                ChecklistItem {
                    name: title_case(&candidate.key),
                    category: candidate.category,
                    score,
                    rationale: candidate.rationale,
                    priority: Priority::from_score(score),
                }
            })
            .collect()
    }
}

fn round_to_cents(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Uppercases every letter that follows a non-letter and lowercases the rest,
/// so "tsa-compliant liquids bag" becomes "Tsa-Compliant Liquids Bag".
pub(crate) fn title_case(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    let mut previous_is_letter = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                output.extend(ch.to_lowercase());
            } else {
                output.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            output.push(ch);
            previous_is_letter = false;
        }
    }
    output
}
