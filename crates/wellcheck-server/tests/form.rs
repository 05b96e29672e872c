use std::collections::HashMap;

use wellcheck_instruments::domains::DomainId;
use wellcheck_server::form::{parse_item, responses_from_form};

fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn empty_form_is_all_zero() {
    let responses = responses_from_form(&HashMap::new());
    for id in DomainId::ALL {
        assert!(responses.items(id).iter().all(|&v| v == 0), "{id}");
    }
}

#[test]
fn reads_prefixed_one_based_keys() {
    let responses = responses_from_form(&fields(&[
        ("mood1", "3"),
        ("mood9", "2"),
        ("worry7", "1"),
        ("stress2", "2"),
        ("sleep4", "3"),
        ("life1", "1"),
    ]));

    assert_eq!(responses.mood, [3, 0, 0, 0, 0, 0, 0, 0, 2]);
    assert_eq!(responses.worry, [0, 0, 0, 0, 0, 0, 1]);
    assert_eq!(responses.stress, [0, 2, 0, 0, 0, 0]);
    assert_eq!(responses.sleep, [0, 0, 0, 3]);
    assert_eq!(responses.life, [1, 0, 0, 0, 0]);
}

#[test]
fn garbage_values_become_zero() {
    let responses = responses_from_form(&fields(&[
        ("mood1", "abc"),
        ("mood2", ""),
        ("mood3", "2.5"),
        ("mood4", " 2 "),
        ("mood5", "99999999999"),
    ]));
    assert_eq!(responses.mood, [0, 0, 0, 2, 0, 0, 0, 0, 0]);
}

#[test]
fn extra_and_out_of_bounds_keys_are_ignored() {
    let responses = responses_from_form(&fields(&[
        ("mood0", "3"),
        ("mood10", "3"),
        ("sleep5", "3"),
        ("name", "Alex"),
    ]));
    assert_eq!(responses, Default::default());
}

#[test]
fn out_of_range_numbers_pass_through() {
    let responses = responses_from_form(&fields(&[("worry1", "7"), ("worry2", "-2")]));
    assert_eq!(responses.worry[0], 7);
    assert_eq!(responses.worry[1], -2);
}

#[test]
fn parse_item_cases() {
    assert_eq!(parse_item("3"), 3);
    assert_eq!(parse_item("+1"), 1);
    assert_eq!(parse_item("-1"), -1);
    assert_eq!(parse_item("three"), 0);
}
