use readable_regex_rs::{
    AnchorKind, ClassKind, Flags, Fragment, FragmentError, Quantifier, ReadableRegexResult,
    Repeat, Term,
};

#[test]
fn root_fragment_is_empty_and_has_no_target() {
    let root = Fragment::new();
    assert!(root.is_empty());
    assert_eq!(root.pattern(), "");
    assert_eq!(root.flags(), Flags::empty());
    assert_eq!(root.capture_count(), 0);
    assert!(root.last_term().is_none());
}

#[test]
fn append_when_called_then_source_fragment_is_unchanged() {
    let base = Fragment::new().digit();
    let before = (base.pattern(), base.flags());

    let extended = base.then("x");
    let flagged = base.ignore_case();
    let quantified = base.exactly(2).expect("digit is quantifiable");

    assert_eq!((base.pattern(), base.flags()), before);
    assert_eq!(extended.pattern(), r"\dx");
    assert_eq!(flagged.pattern(), r"\d");
    assert_eq!(flagged.flags(), Flags::IGNORE_CASE);
    assert_eq!(quantified.pattern(), r"\d{2}");
}

#[test]
fn branches_from_shared_base_do_not_observe_each_other() {
    let base = Fragment::new().starts_with("LOG-");
    let error = base.then("ERROR");
    let warn = base.then("WARN");

    assert_eq!(base.pattern(), r"^LOG\-");
    assert_eq!(error.pattern(), r"^LOG\-ERROR");
    assert_eq!(warn.pattern(), r"^LOG\-WARN");
    assert_ne!(error.pattern(), warn.pattern());
}

#[test]
fn append_literal_when_empty_then_identity() {
    let base = Fragment::new().digit();
    let same = base.append_literal("");
    assert_eq!(same, base);
    assert_eq!(same.last_term(), base.last_term());
}

#[test]
fn append_literal_escapes_metacharacters() {
    let fragment = Fragment::new().append_literal("a.b*c");
    assert_eq!(fragment.pattern(), r"a\.b\*c");
    assert_eq!(fragment.last_term(), Some(&Term::Literal("a.b*c".into())));
}

#[test]
fn append_class_with_repeat_adds_one_or_more() {
    let once = Fragment::new().append_class(ClassKind::Whitespace, Repeat::Once);
    let many = Fragment::new().append_class(ClassKind::Whitespace, Repeat::OneOrMore);
    assert_eq!(once.pattern(), r"\s");
    assert_eq!(many.pattern(), r"\s+");
}

#[test]
fn quantifier_applies_only_to_last_term() -> ReadableRegexResult<()> {
    let fragment = Fragment::new().then("ab").digit().exactly(3)?;
    assert_eq!(fragment.pattern(), r"ab\d{3}");

    let literal = Fragment::new().digit().then("ab").optional()?;
    assert_eq!(literal.pattern(), r"\d(?:ab)?");
    Ok(())
}

#[test]
fn quantifier_when_term_already_quantified_then_replaces() -> ReadableRegexResult<()> {
    let fragment = Fragment::new().digits().exactly(3)?;
    assert_eq!(fragment.pattern(), r"\d{3}");

    let twice = Fragment::new().word().optional()?.between(2, 5)?;
    assert_eq!(twice.pattern(), r"\w{2,5}");
    Ok(())
}

#[test]
fn quantifier_on_group_does_not_add_wrapper() -> ReadableRegexResult<()> {
    let fragment = Fragment::new()
        .capture(&Fragment::new().digit().then("-"))
        .one_or_more()?;
    assert_eq!(fragment.pattern(), r"(\d\-)+");
    Ok(())
}

#[test]
fn modifier_when_fragment_empty_then_no_target_term() {
    let err = Fragment::new()
        .optional()
        .expect_err("nothing to quantify");
    assert_eq!(err, FragmentError::NoTargetTerm { operation: "optional" });
}

#[test]
fn modifier_when_previous_call_set_flag_then_no_target_term() {
    let err = Fragment::new()
        .digit()
        .ignore_case()
        .exactly(2)
        .expect_err("flag change leaves no target");
    assert_eq!(err, FragmentError::NoTargetTerm { operation: "exactly" });
}

#[test]
fn modifier_when_previous_call_was_bare_anchor_then_no_target_term() {
    let err = Fragment::new()
        .digits()
        .ends_with(None)
        .one_or_more()
        .expect_err("bare anchor leaves no target");
    assert_eq!(
        err,
        FragmentError::NoTargetTerm {
            operation: "one_or_more"
        }
    );
}

#[test]
fn between_when_min_exceeds_max_then_invalid_range() {
    let err = Fragment::new()
        .digit()
        .between(5, 2)
        .expect_err("5 > 2");
    assert_eq!(err, FragmentError::InvalidRange { min: 5, max: 2 });
}

#[test]
fn apply_quantifier_accepts_zero_bounds() -> ReadableRegexResult<()> {
    let fragment = Fragment::new()
        .letter()
        .apply_quantifier(Quantifier::Between { min: 0, max: 0 })?;
    assert_eq!(fragment.pattern(), "[a-zA-Z]{0,0}");

    let exact = Fragment::new().letter().apply_quantifier(Quantifier::Exactly(0))?;
    assert_eq!(exact.pattern(), "[a-zA-Z]{0}");
    Ok(())
}

#[test]
fn any_of_when_no_alternatives_then_empty_alternatives() {
    let err = Fragment::new()
        .any_of(Vec::<&str>::new())
        .expect_err("zero alternatives");
    assert_eq!(err, FragmentError::EmptyAlternatives);
}

#[test]
fn start_anchor_goes_in_front_of_whole_pattern() {
    let fragment = Fragment::new().then("b").starts_with("a");
    assert_eq!(fragment.pattern(), "^ab");

    let bare = Fragment::new().digits().starts_with(None);
    assert_eq!(bare.pattern(), r"^\d+");
}

#[test]
fn end_anchor_goes_after_whole_pattern() {
    let fragment = Fragment::new().digits().ends_with("px");
    assert_eq!(fragment.pattern(), r"\d+px$");
}

#[test]
fn anchor_literal_becomes_modifier_target() -> ReadableRegexResult<()> {
    let start = Fragment::new().starts_with("ab").optional()?;
    assert_eq!(start.pattern(), "^(?:ab)?");

    let end = Fragment::new().digit().ends_with("x").optional()?;
    assert_eq!(end.pattern(), r"\dx?$");
    Ok(())
}

#[test]
fn repeated_anchors_accumulate() {
    let starts = Fragment::new().starts_with("a").starts_with("b");
    assert_eq!(starts.pattern(), "^b^a");

    let ends = Fragment::new().ends_with("x").ends_with("y");
    assert_eq!(ends.pattern(), "x$y$");
}

#[test]
fn apply_anchor_with_empty_literal_is_bare_anchor() {
    let fragment = Fragment::new()
        .digit()
        .apply_anchor(AnchorKind::Start, Some(""));
    assert_eq!(fragment.pattern(), r"^\d");
    assert!(fragment.last_term().is_none());
}

#[test]
fn capture_count_tracks_nested_groups() {
    let inner = Fragment::new().capture(&Fragment::new().digits());
    assert_eq!(inner.capture_count(), 1);

    let outer = Fragment::new()
        .capture(&inner)
        .then("=")
        .capture(&Fragment::new().words());
    assert_eq!(outer.capture_count(), 3);
    assert_eq!(outer.pattern(), r"((\d+))=(\w+)");
}

#[test]
fn capture_ignores_flags_of_inner_fragment() {
    let inner = Fragment::new().then("abc").ignore_case();
    let outer = Fragment::new().capture(&inner);
    assert_eq!(outer.flags(), Flags::empty());
    assert_eq!(outer.pattern(), "(abc)");
}

#[test]
fn set_flag_has_set_semantics() {
    let once = Fragment::new().digit().ignore_case();
    let twice = once.ignore_case();
    assert_eq!(twice.flags(), Flags::IGNORE_CASE);

    let both = twice.multiline();
    assert!(both.flags().ignore_case());
    assert!(both.flags().multiline());
    assert_eq!(both.pattern(), r"\d");
}

#[test]
fn equivalent_chains_compare_equal() -> ReadableRegexResult<()> {
    let plural = Fragment::new().digits();
    let explicit = Fragment::new().digit().one_or_more()?;
    assert_eq!(plural, explicit);
    assert_eq!(plural.to_string(), explicit.pattern());
    Ok(())
}
