use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::domains::{
    DomainId, LIFE_ITEMS, MOOD_ITEMS, SLEEP_ITEMS, STRESS_ITEMS, WORRY_ITEMS, all_domains, domain,
};

/// Severity of a single domain score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Severity {
    Low,
    Mild,
    Moderate,
    High,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::High => "High",
        }
    }

    /// Moderate and High call for the coping advice.
    pub fn is_elevated(self) -> bool {
        matches!(self, Severity::Moderate | Severity::High)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw item answers for one questionnaire, one array per domain.
///
/// Items are expected to lie in `0..=3` but nothing here enforces it.
/// See [`crate::validation::validate_responses`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainResponses {
    pub mood: [i32; MOOD_ITEMS],
    pub worry: [i32; WORRY_ITEMS],
    pub stress: [i32; STRESS_ITEMS],
    pub sleep: [i32; SLEEP_ITEMS],
    pub life: [i32; LIFE_ITEMS],
}

impl DomainResponses {
    /// Build responses by asking `item` for every (domain, 1-based position).
    pub fn from_items(mut item: impl FnMut(DomainId, usize) -> i32) -> Self {
        fn fill<const N: usize>(
            id: DomainId,
            item: &mut impl FnMut(DomainId, usize) -> i32,
        ) -> [i32; N] {
            std::array::from_fn(|i| item(id, i + 1))
        }

        Self {
            mood: fill(DomainId::Mood, &mut item),
            worry: fill(DomainId::Worry, &mut item),
            stress: fill(DomainId::Stress, &mut item),
            sleep: fill(DomainId::Sleep, &mut item),
            life: fill(DomainId::Life, &mut item),
        }
    }

    pub fn items(&self, id: DomainId) -> &[i32] {
        match id {
            DomainId::Mood => &self.mood,
            DomainId::Worry => &self.worry,
            DomainId::Stress => &self.stress,
            DomainId::Sleep => &self.sleep,
            DomainId::Life => &self.life,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainResult {
    pub domain: DomainId,
    #[ts(type = "number")]
    pub score: i64,
    pub label: Severity,
}

/// Overall descriptor for the wellness index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WellnessBand {
    NeedsAttention,
    Struggling,
    Fair,
    Good,
}

impl WellnessBand {
    /// Lower bounds are inclusive. NaN falls through to `NeedsAttention`.
    pub fn from_index(wellness: f64) -> Self {
        if wellness >= 0.75 {
            WellnessBand::Good
        } else if wellness >= 0.5 {
            WellnessBand::Fair
        } else if wellness >= 0.3 {
            WellnessBand::Struggling
        } else {
            WellnessBand::NeedsAttention
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WellnessBand::Good => "Good",
            WellnessBand::Fair => "Fair",
            WellnessBand::Struggling => "Struggling",
            WellnessBand::NeedsAttention => "Needs attention",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            WellnessBand::Good => "You're doing well overall.",
            WellnessBand::Fair => "Some small steps could help.",
            WellnessBand::Struggling => "Consider adopting coping strategies.",
            WellnessBand::NeedsAttention => "Please consider professional support.",
        }
    }

    pub fn summary(self) -> String {
        format!("{} — {}", self.label(), self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdviceEntry {
    pub domain: DomainId,
    pub title: String,
    pub advice: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    /// One entry per domain, in [`DomainId::ALL`] order.
    pub domains: Vec<DomainResult>,
    /// `1 - mean(score / max)`. Unclamped: out-of-range answers can push it
    /// below 0 or above 1.
    pub wellness: f64,
    pub wellness_band: WellnessBand,
    pub wellness_text: String,
    pub advice: Vec<AdviceEntry>,
    /// Show crisis resources.
    pub urgent: bool,
}

impl AssessmentResult {
    pub fn domain(&self, id: DomainId) -> Option<&DomainResult> {
        self.domains.iter().find(|r| r.domain == id)
    }
}

/// Score a complete questionnaire.
pub fn evaluate(responses: &DomainResponses) -> AssessmentResult {
    let domains: Vec<DomainResult> = all_domains()
        .iter()
        .map(|spec| {
            let score = domain_score(responses.items(spec.id));
            DomainResult {
                domain: spec.id,
                score,
                label: spec.bands.classify(score),
            }
        })
        .collect();

    let wellness = wellness_index(&domains);
    let wellness_band = WellnessBand::from_index(wellness);

    let advice = domains
        .iter()
        .map(|r| {
            let chosen = domain(r.domain).advice_for(r.label);
            AdviceEntry {
                domain: r.domain,
                title: chosen.title.to_string(),
                advice: chosen.text.to_string(),
            }
        })
        .collect();

    let urgent = domains.iter().any(|r| domain(r.domain).is_urgent(r.score));

    AssessmentResult {
        domains,
        wellness,
        wellness_band,
        wellness_text: wellness_band.summary(),
        advice,
        urgent,
    }
}

/// Sum of item values. Accumulates in `i64`, so no `i32` input can overflow.
pub fn domain_score(items: &[i32]) -> i64 {
    items.iter().map(|&v| i64::from(v)).sum()
}

/// `1 - mean(score / max_score)` over `results`, in slice order.
pub fn wellness_index(results: &[DomainResult]) -> f64 {
    let total: f64 = results
        .iter()
        .map(|r| r.score as f64 / domain(r.domain).max_score as f64)
        .sum();
    1.0 - total / results.len() as f64
}
