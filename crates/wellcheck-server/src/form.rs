use std::collections::HashMap;

use wellcheck_instruments::domains::domain;
use wellcheck_instruments::scoring::DomainResponses;

/// Read `mood1..mood9`, `worry1..worry7`, and so on out of submitted form
/// fields. Missing, blank or non-integer values count as 0; unknown keys
/// are ignored. Values are not range-checked here.
pub fn responses_from_form(fields: &HashMap<String, String>) -> DomainResponses {
    DomainResponses::from_items(|id, item| {
        fields
            .get(&domain(id).field_name(item))
            .map_or(0, |raw| parse_item(raw))
    })
}

/// Parse one answer. Anything that is not an `i32` becomes 0.
pub fn parse_item(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(0)
}
