use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::domains::{DomainId, MAX_ITEM_VALUE, all_domains};
use crate::scoring::DomainResponses;

/// Range every item answer is expected to fall in.
pub const ITEM_RANGE: RangeInclusive<i32> = 0..=MAX_ITEM_VALUE;

/// An item answer outside [`ITEM_RANGE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationIssue {
    pub domain: DomainId,
    /// 1-based position within the domain.
    pub item: usize,
    pub value: i32,
    pub expected_min: i32,
    pub expected_max: i32,
    pub message: String,
}

/// Report every out-of-range item. Advisory only: scoring accepts the
/// values unchanged.
pub fn validate_responses(responses: &DomainResponses) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for spec in all_domains() {
        for (i, &value) in responses.items(spec.id).iter().enumerate() {
            if !ITEM_RANGE.contains(&value) {
                let item = i + 1;
                issues.push(ValidationIssue {
                    domain: spec.id,
                    item,
                    value,
                    expected_min: *ITEM_RANGE.start(),
                    expected_max: *ITEM_RANGE.end(),
                    message: format!(
                        "{}: answer {} is {value}, outside range [{}, {}]",
                        spec.name,
                        spec.field_name(item),
                        ITEM_RANGE.start(),
                        ITEM_RANGE.end(),
                    ),
                });
            }
        }
    }
    issues
}
