use search_pattern_rs::{
    MatchOptions, compile, join_components, match_components, split_components,
};

#[test]
fn match_when_literal_only_then_exact_component_equality() {
    let pattern = compile("alpha/beta.csv").expect("pattern should compile");
    assert!(match_components(&pattern, &["alpha", "beta.csv"]).matched);
    assert!(!match_components(&pattern, &["alpha", "Beta.csv"]).matched);
    assert!(!match_components(&pattern, &["alpha", "beta.csv", ""]).matched);
    assert!(!match_components(&pattern, &["alpha/beta.csv"]).matched);
}

#[test]
fn match_when_traverse_then_zero_or_more_components() {
    let pattern = compile("a/**/b").expect("pattern should compile");
    assert!(pattern.is_match(&["a", "b"]));
    assert!(pattern.is_match(&["a", "x", "y", "b"]));
    assert!(!pattern.is_match(&["a", "b", "c"]));
    assert!(!pattern.is_match(&["b"]));
}

#[test]
fn match_when_variables_split_by_token_then_bound() {
    let pattern = compile("${y}-${m}.csv").expect("pattern should compile");
    let result = match_components(&pattern, &["2024-01.csv"]);
    assert!(result.matched);
    assert_eq!(result.get("y"), Some("2024"));
    assert_eq!(result.get("m"), Some("01"));
    assert_eq!(result.bindings.len(), 2);
}

#[test]
fn match_when_variable_is_empty_then_binds_empty_string() {
    let pattern = compile("data${suffix}.csv").expect("pattern should compile");
    let result = pattern.matches(&["data.csv"]);
    assert!(result.matched);
    assert_eq!(result.get("suffix"), Some(""));
}

#[test]
fn match_when_selection_then_only_listed_alternatives() {
    let pattern = compile("{beta|gamma}/*.csv").expect("pattern should compile");
    assert!(pattern.is_match(&["beta", "x.csv"]));
    assert!(pattern.is_match(&["gamma", ".csv"]));
    assert!(!pattern.is_match(&["delta", "x.csv"]));

    let pattern = compile("report{|-final}.txt").expect("pattern should compile");
    assert!(pattern.is_match(&["report.txt"]));
    assert!(pattern.is_match(&["report-final.txt"]));
    assert!(!pattern.is_match(&["report-draft.txt"]));
}

#[test]
fn match_when_full_grammar_then_binds_date() {
    let pattern = compile("alpha/**/{beta|gamma}/${date}-*.csv").expect("pattern should compile");
    let result = pattern.matches(&["alpha", "x", "gamma", "2024-01-01-part0.csv"]);
    assert!(result.matched);
    assert_eq!(result.get("date"), Some("2024"));

    assert!(!pattern.is_match(&["alpha", "gamma", "x", "2024-a.csv"]));
}

#[test]
fn match_when_wildcard_never_crosses_components() {
    let pattern = compile("a/*").expect("pattern should compile");
    assert!(!pattern.is_match(&["a", "b", "c"]));
    assert!(pattern.is_match(&["a", ""]));
}

#[test]
fn match_when_anonymous_variable_then_input_consumed_without_binding() {
    let pattern = compile("${}_${id}.dat").expect("pattern should compile");
    let result = pattern.matches(&["batch_42.dat"]);
    assert!(result.matched);
    assert_eq!(result.get("id"), Some("42"));
    assert_eq!(result.bindings.len(), 1);
}

#[test]
fn match_when_name_repeats_across_segments_then_last_wins() {
    let pattern = compile("${part}/**/${part}").expect("pattern should compile");
    let result = pattern.matches(&["first", "middle", "last"]);
    assert_eq!(result.get("part"), Some("last"));
}

#[test]
fn match_when_case_insensitive_then_tokens_ignore_ascii_case() {
    let pattern = compile("Logs/{INFO|WARN}-${day}.LOG").expect("pattern should compile");
    let options = MatchOptions::builder().case_sensitive(false).build();

    let result = pattern.matches_with(&["logs", "warn-Mon.log"], &options);
    assert!(result.matched);
    assert_eq!(result.get("day"), Some("Mon"));

    assert!(!pattern.is_match(&["logs", "warn-Mon.log"]));
}

#[test]
fn match_when_candidate_from_path_then_same_as_components() {
    let pattern = compile("a/**/${name}.csv").expect("pattern should compile");
    let path = "a/b/c/report.csv";
    assert_eq!(
        pattern.match_path(path),
        pattern.matches(&split_components(path))
    );
    assert_eq!(pattern.match_path(path).get("name"), Some("report"));
}

#[test]
fn match_when_owned_candidate_then_accepted() {
    let pattern = compile("${a}/${b}").expect("pattern should compile");
    let candidate = vec!["x".to_string(), "y".to_string()];
    let result = pattern.matches(&candidate);
    assert_eq!(result.get("a"), Some("x"));
    assert_eq!(result.get("b"), Some("y"));
}

#[test]
fn match_when_literal_pattern_then_its_own_path_matches() {
    for text in ["", "a", "a/b/c", "/a//b/", "データ/2024.csv", "x y/z"] {
        let pattern = compile(text).expect("pattern should compile");
        assert!(pattern.match_path(text).matched, "{text}");
    }
}

#[test]
fn match_when_empty_candidate_then_only_traverses_match() {
    let empty: [&str; 0] = [];
    assert!(compile("**/**").expect("compile").is_match(&empty));
    assert!(!compile("**/a").expect("compile").is_match(&empty));
    assert!(!compile("").expect("compile").is_match(&empty));
}

#[test]
fn match_when_components_joined_then_path_matches_the_same() {
    let pattern = compile("**/${table}/part-*.csv").expect("pattern should compile");
    let components = ["warehouse", "orders", "part-0001.csv"];
    let path = join_components(&components);
    assert_eq!(path, "warehouse/orders/part-0001.csv");
    assert_eq!(pattern.match_path(&path), pattern.matches(&components));
    assert_eq!(pattern.match_path(&path).get("table"), Some("orders"));
}
