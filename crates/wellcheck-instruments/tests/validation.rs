use wellcheck_instruments::domains::DomainId;
use wellcheck_instruments::scoring::{DomainResponses, evaluate};
use wellcheck_instruments::validation::validate_responses;

#[test]
fn in_range_answers_have_no_issues() {
    let responses = DomainResponses::from_items(|_, item| (item % 4) as i32);
    assert!(validate_responses(&responses).is_empty());
}

#[test]
fn reports_each_out_of_range_item() {
    let mut responses = DomainResponses::default();
    responses.mood[2] = 4;
    responses.sleep[0] = -1;
    responses.life[4] = 99;

    let issues = validate_responses(&responses);
    assert_eq!(issues.len(), 3);

    assert_eq!(issues[0].domain, DomainId::Mood);
    assert_eq!(issues[0].item, 3);
    assert_eq!(issues[0].value, 4);
    assert_eq!(issues[0].expected_min, 0);
    assert_eq!(issues[0].expected_max, 3);
    assert!(issues[0].message.contains("mood3"));

    assert_eq!(issues[1].domain, DomainId::Sleep);
    assert_eq!(issues[1].item, 1);
    assert_eq!(issues[2].domain, DomainId::Life);
    assert_eq!(issues[2].item, 5);
    assert_eq!(issues[2].to_string(), issues[2].message);
}

#[test]
fn validation_does_not_change_scoring() {
    let mut responses = DomainResponses::default();
    responses.worry = [5; 7];

    assert_eq!(validate_responses(&responses).len(), 7);
    let result = evaluate(&responses);
    assert_eq!(result.domain(DomainId::Worry).unwrap().score, 35);
    assert!(result.urgent);
}
