use serde::{Deserialize, Serialize};

use wellcheck_instruments::domains::{RESPONSE_OPTIONS, all_domains, domain};
use wellcheck_instruments::scoring::AssessmentResult;

/// Crisis contacts shown on every result page. `local` is region-specific,
/// `global` is the fallback for everyone else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrisisResources {
    pub local: String,
    pub global: String,
}

impl Default for CrisisResources {
    fn default() -> Self {
        Self {
            local: "AASRA helpline: +91 9820466726 (24x7)".to_string(),
            global: "If you're outside India, search for your local crisis line or call emergency services."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireView {
    pub groups: Vec<QuestionGroup>,
    pub options: Vec<OptionView>,
    pub total_questions: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionGroup {
    pub id: String,
    pub name: String,
    pub questions: Vec<QuestionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    /// Form field name, e.g. `worry3`.
    pub field: String,
    /// Position across the whole questionnaire, starting at 1.
    pub number: usize,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionView {
    pub value: i32,
    pub label: String,
}

impl QuestionnaireView {
    pub fn new() -> Self {
        let mut number = 0;
        let groups = all_domains()
            .iter()
            .map(|spec| QuestionGroup {
                id: spec.id.to_string(),
                name: spec.name.to_string(),
                questions: spec
                    .questions
                    .iter()
                    .enumerate()
                    .map(|(i, text)| {
                        number += 1;
                        QuestionView {
                            field: spec.field_name(i + 1),
                            number,
                            text: text.to_string(),
                        }
                    })
                    .collect(),
            })
            .collect();

        Self {
            groups,
            options: RESPONSE_OPTIONS
                .iter()
                .map(|o| OptionView {
                    value: o.value,
                    label: o.label.to_string(),
                })
                .collect(),
            total_questions: number,
        }
    }
}

impl Default for QuestionnaireView {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultView {
    pub domains: Vec<DomainRow>,
    pub wellness_text: String,
    /// Wellness index as a whole percentage. Can fall outside 0..=100.
    pub wellness_percent: String,
    pub advice: Vec<AdviceView>,
    pub urgent: bool,
    pub resources: CrisisResources,
    pub assessed_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainRow {
    pub id: String,
    pub name: String,
    pub score: i64,
    pub max_score: i64,
    pub label: String,
    pub elevated: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdviceView {
    pub title: String,
    pub advice: String,
}

impl ResultView {
    pub fn new(
        result: &AssessmentResult,
        resources: &CrisisResources,
        assessed_at: jiff::Timestamp,
    ) -> Self {
        let domains = result
            .domains
            .iter()
            .map(|r| {
                let spec = domain(r.domain);
                DomainRow {
                    id: r.domain.to_string(),
                    name: spec.name.to_string(),
                    score: r.score,
                    max_score: spec.max_score,
                    label: r.label.to_string(),
                    elevated: r.label.is_elevated(),
                }
            })
            .collect();

        Self {
            domains,
            wellness_text: result.wellness_text.clone(),
            wellness_percent: format!("{:.0}%", result.wellness * 100.0),
            advice: result
                .advice
                .iter()
                .map(|a| AdviceView {
                    title: a.title.clone(),
                    advice: a.advice.clone(),
                })
                .collect(),
            urgent: result.urgent,
            resources: resources.clone(),
            assessed_at: assessed_at.strftime("%Y-%m-%d %H:%M UTC").to_string(),
        }
    }
}
