use search_pattern_rs::compile;

const DEPTH: usize = 10_000;

#[test]
fn match_when_pattern_has_ten_thousand_segments_then_completes() {
    let components: Vec<String> = (0..DEPTH).map(|i| format!("d{i}")).collect();
    let pattern = compile(&components.join("/")).expect("deep pattern should compile");
    assert_eq!(pattern.segments().len(), DEPTH);

    assert!(pattern.is_match(&components));

    let mut other = components.clone();
    other[DEPTH - 1] = "elsewhere".to_string();
    assert!(!pattern.is_match(&other));
}

#[test]
fn match_when_deep_pattern_captures_every_segment_then_all_bound() {
    let text = (0..DEPTH)
        .map(|i| format!("${{v{i}}}"))
        .collect::<Vec<_>>()
        .join("/");
    let pattern = compile(&text).expect("deep pattern should compile");
    let components: Vec<String> = (0..DEPTH).map(|i| i.to_string()).collect();

    let result = pattern.matches(&components);
    assert!(result.matched);
    assert_eq!(result.bindings.len(), DEPTH);
    assert_eq!(result.get("v9999"), Some("9999"));
}

#[test]
fn match_when_traverses_interleave_deep_literals_then_completes() {
    let text = vec!["**/x"; 2_000].join("/");
    let pattern = compile(&text).expect("pattern should compile");

    let hit = vec!["x"; 2_000];
    assert!(pattern.is_match(&hit));

    let mut miss = vec!["x"; 1_999];
    miss.push("y");
    assert!(!pattern.is_match(&miss));
}

#[test]
fn match_when_segment_has_twenty_thousand_elements_then_completes() {
    let pattern = compile(&"a{b|c}".repeat(DEPTH)).expect("long segment should compile");
    assert_eq!(pattern.segments()[0].elements().len(), 2 * DEPTH);

    assert!(pattern.is_match(&["ab".repeat(DEPTH)]));
    assert!(pattern.is_match(&["ac".repeat(DEPTH)]));

    let mut near_miss = "ab".repeat(DEPTH);
    near_miss.push('a');
    assert!(!pattern.is_match(&[near_miss]));
}

#[test]
fn match_when_segment_alternates_variables_and_tokens_then_binds_the_last() {
    let text = (0..DEPTH).map(|i| format!("${{v{i}}}.")).collect::<String>();
    let pattern = compile(&text).expect("long segment should compile");
    let component = (0..DEPTH).map(|i| format!("{i}.")).collect::<String>();

    let result = pattern.matches(&[component]);
    assert!(result.matched);
    assert_eq!(result.get("v0"), Some("0"));
    assert_eq!(result.get("v9999"), Some("9999"));
}
