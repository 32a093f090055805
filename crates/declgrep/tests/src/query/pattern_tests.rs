use super::*;

#[test]
fn matching_is_case_insensitive() {
    let pattern = CompiledPattern::new("foo").expect("pattern compiles");
    assert_eq!(
        pattern.find("FooBar"),
        Some(MatchSpan {
            start: 0,
            end: 3
        })
    );
}

#[test]
fn reports_first_unanchored_match_within_the_name() {
    let pattern = CompiledPattern::new("oo").expect("pattern compiles");
    assert_eq!(
        pattern.find("FooBarFoo"),
        Some(MatchSpan {
            start: 1,
            end: 3
        })
    );
}

#[test]
fn regex_syntax_is_supported() {
    let pattern = CompiledPattern::new("^render_[a-z]+$").expect("pattern compiles");
    assert!(pattern.find("render_frame").is_some());
    assert!(pattern.find("render_Frame2").is_none());
}

#[test]
fn no_match_yields_none() {
    let pattern = CompiledPattern::new("quux").expect("pattern compiles");
    assert_eq!(pattern.find("FooBar"), None);
}

#[test]
fn malformed_pattern_is_a_hard_error() {
    let err = CompiledPattern::new("(unbalanced").expect_err("pattern must not compile");
    assert_eq!(err.pattern, "(unbalanced");
}
