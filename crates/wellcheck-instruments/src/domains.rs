use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;
use crate::scoring::Severity;

pub const MOOD_ITEMS: usize = 9;
pub const WORRY_ITEMS: usize = 7;
pub const STRESS_ITEMS: usize = 6;
pub const SLEEP_ITEMS: usize = 4;
pub const LIFE_ITEMS: usize = 5;

/// Highest value a single item is expected to take.
pub const MAX_ITEM_VALUE: i32 = 3;

/// Answer choices shared by every question, lowest first.
pub const RESPONSE_OPTIONS: [ResponseOption; 4] = [
    ResponseOption { value: 0, label: "Not at all" },
    ResponseOption { value: 1, label: "Several days" },
    ResponseOption { value: 2, label: "More than half the days" },
    ResponseOption { value: 3, label: "Nearly every day" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseOption {
    pub value: i32,
    pub label: &'static str,
}

/// The five wellness domains, in scoring and display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DomainId {
    Mood,
    Worry,
    Stress,
    Sleep,
    Life,
}

impl DomainId {
    pub const ALL: [DomainId; 5] = [
        DomainId::Mood,
        DomainId::Worry,
        DomainId::Stress,
        DomainId::Sleep,
        DomainId::Life,
    ];

    /// Stable id, also used as the form-field prefix (`mood1`, `mood2`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            DomainId::Mood => "mood",
            DomainId::Worry => "worry",
            DomainId::Stress => "stress",
            DomainId::Sleep => "sleep",
            DomainId::Life => "life",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainId {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DomainId::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| InstrumentError::UnknownDomain(s.to_string()))
    }
}

/// Upper bounds of the Low, Mild and Moderate bands. Anything above
/// `moderate` is High.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityBands {
    pub low: i64,
    pub mild: i64,
    pub moderate: i64,
}

impl SeverityBands {
    /// Band bounds are inclusive: a score equal to `low` is still Low.
    pub fn classify(&self, score: i64) -> Severity {
        if score <= self.low {
            Severity::Low
        } else if score <= self.mild {
            Severity::Mild
        } else if score <= self.moderate {
            Severity::Moderate
        } else {
            Severity::High
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advice {
    pub title: &'static str,
    pub text: &'static str,
}

/// One row of the domain table.
#[derive(Debug)]
pub struct DomainSpec {
    pub id: DomainId,
    pub name: &'static str,
    pub questions: &'static [&'static str],
    pub bands: SeverityBands,
    pub max_score: i64,
    /// Raw score at or above which crisis resources are shown.
    pub urgent_at: Option<i64>,
    /// Shown for Low and Mild.
    pub steady: Advice,
    /// Shown for Moderate and High.
    pub coping: Advice,
}

impl DomainSpec {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn advice_for(&self, label: Severity) -> &Advice {
        if label.is_elevated() {
            &self.coping
        } else {
            &self.steady
        }
    }

    pub fn is_urgent(&self, score: i64) -> bool {
        self.urgent_at.is_some_and(|threshold| score >= threshold)
    }

    /// Form field name for the 1-based `item`.
    pub fn field_name(&self, item: usize) -> String {
        format!("{}{item}", self.id.as_str())
    }
}

const MOOD_QUESTIONS: [&str; MOOD_ITEMS] = [
    "Lately, have you lost interest in doing things you usually enjoy?",
    "Have you been feeling down or sad more often?",
    "Do you feel tired or low on energy?",
    "Have you noticed changes in appetite or weight?",
    "Do you find it hard to feel pleasure in small things?",
    "Have you been feeling bad about yourself or like you're failing?",
    "Do you find it hard to concentrate on tasks?",
    "Have others noticed you moving or speaking more slowly (or more fidgety)?",
    "Have you had thoughts that you'd be better off not alive?",
];

const WORRY_QUESTIONS: [&str; WORRY_ITEMS] = [
    "Have you felt nervous or on edge lately?",
    "Do you find it hard to control your worrying?",
    "Do you worry too much about different things?",
    "Have you had trouble relaxing?",
    "Do you feel restless or unable to sit still?",
    "Have you been more easily annoyed or irritable?",
    "Do you feel fearful that something awful might happen?",
];

const STRESS_QUESTIONS: [&str; STRESS_ITEMS] = [
    "Have you felt overwhelmed by small daily tasks?",
    "Have you had trouble coping with unexpected problems?",
    "Do you feel things have been piling up and it's hard to keep up?",
    "Have you felt tense or wound up frequently?",
    "Do you find it hard to find time to rest?",
    "Have you noticed feeling more short-tempered under pressure?",
];

const SLEEP_QUESTIONS: [&str; SLEEP_ITEMS] = [
    "Have you had trouble falling asleep?",
    "Do you wake up during the night and find it hard to fall back asleep?",
    "Do you feel rested when you wake up?",
    "Has your sleep quality changed compared to before?",
];

const LIFE_QUESTIONS: [&str; LIFE_ITEMS] = [
    "Have you been too busy to take short breaks during the day?",
    "Do you often skip meals or forget to eat due to tasks?",
    "Have you been less active or moving less than usual?",
    "Do you feel drained even after a short rest?",
    "Do you feel disconnected from people around you?",
];

static DOMAINS: [DomainSpec; 5] = [
    DomainSpec {
        id: DomainId::Mood,
        name: "Mood & Interest",
        questions: &MOOD_QUESTIONS,
        bands: SeverityBands { low: 4, mild: 9, moderate: 14 },
        max_score: 27,
        urgent_at: Some(20),
        steady: Advice {
            title: "Mood is stable",
            text: "Keep your routines, and check-in with yourself weekly. Small self-care habits sustain mood over time.",
        },
        coping: Advice {
            title: "Feeling low or losing interest",
            text: "Try small daily activities you used to enjoy. Even 10 minutes of a hobby or a short walk can help. Share how you feel with a friend or family member.",
        },
    },
    DomainSpec {
        id: DomainId::Worry,
        name: "Worry & Restlessness",
        questions: &WORRY_QUESTIONS,
        bands: SeverityBands { low: 3, mild: 7, moderate: 11 },
        max_score: 21,
        urgent_at: Some(15),
        steady: Advice {
            title: "Worry is low",
            text: "Continue with relaxation routines and short breaks during the day.",
        },
        coping: Advice {
            title: "Worry & restlessness",
            text: "Try brief grounding exercises (5-7 minutes), focused breathing, or writing down what worries you and one small next step.",
        },
    },
    DomainSpec {
        id: DomainId::Stress,
        name: "Stress Levels",
        questions: &STRESS_QUESTIONS,
        bands: SeverityBands { low: 4, mild: 8, moderate: 12 },
        max_score: 18,
        urgent_at: None,
        steady: Advice {
            title: "Stress under control",
            text: "Maintain your coping routines and build tiny pauses into your day.",
        },
        coping: Advice {
            title: "Stress levels",
            text: "Prioritize one task at a time, set small boundaries, and take short 'reset' breaks. Gentle movement helps reduce stress.",
        },
    },
    DomainSpec {
        id: DomainId::Sleep,
        name: "Sleep Quality",
        questions: &SLEEP_QUESTIONS,
        bands: SeverityBands { low: 2, mild: 5, moderate: 8 },
        max_score: 12,
        urgent_at: Some(10),
        steady: Advice {
            title: "Sleeping okay",
            text: "Keep the routine and sleep-friendly habits you've built.",
        },
        coping: Advice {
            title: "Sleep quality",
            text: "Try a consistent sleep routine: wind down 30–60 minutes before bed, limit screens, and avoid caffeine late in the day.",
        },
    },
    DomainSpec {
        id: DomainId::Life,
        name: "Daily Lifestyle & Burnout",
        questions: &LIFE_QUESTIONS,
        bands: SeverityBands { low: 3, mild: 7, moderate: 10 },
        max_score: 15,
        urgent_at: None,
        steady: Advice {
            title: "Daily balance",
            text: "Good balance — keep an eye on workload and rest.",
        },
        coping: Advice {
            title: "Daily habits & burnout",
            text: "Check for small ways to rest during the day — short walks, stretching, or a 5-minute breathing break. Ask someone for help when tasks pile up.",
        },
    },
];

/// All domains in display order.
pub fn all_domains() -> &'static [DomainSpec] {
    &DOMAINS
}

pub fn domain(id: DomainId) -> &'static DomainSpec {
    &DOMAINS[id.index()]
}
