use projdash::engine::validate::{Rule, Validatable, Value, validate};

fn assert_fails_with(input: &Validatable, rule: Rule) {
    let failures = input.failures();
    assert!(
        failures.contains(&rule),
        "expected {:?} to fail for {:?} but got {:?}",
        rule,
        input.value,
        failures
    );
}

#[test]
fn required_rejects_blank_text() {
    for blank in ["", " ", "\t\n", "   "] {
        let input = Validatable::new(blank).required();
        assert!(!validate(&input));
        assert_fails_with(&input, Rule::Required);
    }
}

#[test]
fn description_rules_match_form() {
    let rules = |s: &str| Validatable::new(s).required().min_length(5);
    assert!(validate(&rules("Design and implement")));
    assert!(validate(&rules("short")));
    assert_fails_with(&rules("shrt"), Rule::MinLength(5));
}

#[test]
fn max_length_is_inclusive() {
    assert!(validate(&Validatable::new("abc").max_length(3)));
    assert_fails_with(&Validatable::new("abcd").max_length(3), Rule::MaxLength(3));
}

#[test]
fn people_rules_match_form() {
    let rules = |n: f64| Validatable::new(n).required().min(1.0).max(11.0);
    assert!(validate(&rules(3.0)));
    assert_fails_with(&rules(12.0), Rule::Max(11.0));
    assert_fails_with(&rules(0.0), Rule::Min(1.0));
}

#[test]
fn rules_only_apply_to_their_kind() {
    let text = Validatable::new(Value::Text("hello".into())).min(10.0).max(0.0);
    assert!(validate(&text));

    let number = Validatable::new(Value::Number(7.0)).min_length(50);
    assert!(validate(&number));
}
