use assert_matches::assert_matches;
use rstest::rstest;

use super::*;

use StepKind::{End, Literal, Many, Single};

fn compile(s: &str) -> Result<Vec<Step>> {
    Compiler::new().compile(s)
}

fn layout(s: &str) -> Vec<(StepKind, String)> {
    compile(s)
        .unwrap()
        .into_iter()
        .map(|step| (step.kind, step.tail))
        .collect()
}

fn steps<const N: usize>(items: [(StepKind, &str); N]) -> Vec<(StepKind, String)> {
    items.into_iter().map(|(kind, tail)| (kind, tail.to_owned())).collect()
}

#[test]
fn test_compile_empty() {
    assert_eq!(layout(""), steps([(End, "")]));
}

#[test]
fn test_compile_literal() {
    assert_eq!(layout("hello"), steps([(Literal, "hello"), (End, "")]));
}

#[test]
fn test_compile_single_asterisk() {
    assert_eq!(layout("*"), steps([(Many, ""), (End, "")]));
}

#[test]
fn test_compile_leading_asterisk() {
    assert_eq!(layout("*.txt"), steps([(Many, ".txt"), (End, "")]));
}

#[test]
fn test_compile_trailing_asterisk() {
    assert_eq!(layout("PLAN9*"), steps([(Literal, "PLAN9"), (Many, ""), (End, "")]));
}

#[test]
fn test_compile_path() {
    assert_eq!(
        layout("foo/bar/*/baz"),
        steps([(Literal, "foo/bar/"), (Many, "/baz"), (End, "")])
    );
}

#[test]
fn test_compile_question_marks() {
    assert_eq!(layout("??"), steps([(Single, ""), (Single, ""), (End, "")]));
    assert_eq!(
        layout("test?.log"),
        steps([(Literal, "test"), (Single, ".log"), (End, "")])
    );
}

#[test]
fn test_compile_question_before_asterisk() {
    assert_eq!(layout("?*"), steps([(Single, ""), (Many, ""), (End, "")]));
}

#[test]
fn test_compile_mixed() {
    assert_eq!(
        layout("a*b?c*"),
        steps([(Literal, "a"), (Many, "b"), (Single, "c"), (Many, ""), (End, "")])
    );
}

#[rstest]
#[case(r"\*", "*")]
#[case(r"\?", "?")]
#[case(r"\\", r"\")]
#[case(r"\a", "a")]
#[case(r"foo\*bar", "foo*bar")]
#[case(r"foo\", r"foo\")]
#[case(r"\", r"\")]
fn test_compile_escapes(#[case] pattern: &str, #[case] literal: &str) {
    assert_eq!(layout(pattern), steps([(Literal, literal), (End, "")]));
}

#[test]
fn test_compile_escaped_text_after_wildcard() {
    assert_eq!(layout(r"*\*"), steps([(Many, "*"), (End, "")]));
    assert_eq!(layout(r"*\?*"), steps([(Many, "?"), (Many, ""), (End, "")]));
    assert_eq!(layout(r"a*\"), steps([(Literal, "a"), (Many, r"\"), (End, "")]));
}

#[rstest]
#[case("a**b", 2)]
#[case("a*?b", 2)]
#[case("**", 1)]
#[case("*?", 1)]
#[case("x*y**", 4)]
#[case("ä**", 3)]
fn test_compile_invalid_sequence(#[case] pattern: &str, #[case] position: usize) {
    assert_eq!(compile(pattern), Err(Error::InvalidGlobSequence { position }));
}

#[test]
fn test_compile_always_ends_with_end() {
    for pattern in ["", "a", "*", "?", "a*b", r"\", "??*x"] {
        let steps = compile(pattern).unwrap();
        assert!(!steps.is_empty());
        assert_matches!(steps.last(), Some(Step { kind: End, .. }));
        assert_eq!(steps.iter().filter(|s| s.kind == End).count(), 1);
    }
}

#[test]
fn test_compile_is_deterministic() {
    for pattern in ["foo/bar/*/baz", "a?b*c", r"\*x*"] {
        assert_eq!(compile(pattern), compile(pattern));
    }
}
