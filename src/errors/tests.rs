use super::*;
use pretty_assertions::assert_eq;

fn parser_error() -> Error {
    Error::grammar(Code::Parser).with_span(Span::new(10, 0))
}

#[test]
fn test_zero_error_renders_unknown_location() {
    assert_eq!(
        Error::default().render(),
        "unknown location, category 0 (nil), code 0 (nil)"
    );
}

#[test]
fn test_offset_without_length() {
    assert_eq!(
        parser_error().render(),
        "offset 10, category 2 (grammar), code 2 (parser error)"
    );
}

#[test]
fn test_offset_with_length() {
    let err = Error::grammar(Code::IntegerOutOfRange).with_span(Span::new(10, 5));
    assert_eq!(
        err.render(),
        "offset 10, length 5, category 2 (grammar), code 5 (integer out of range)"
    );
}

#[test]
fn test_length_alone_is_a_location() {
    let err = Error::grammar(Code::Parser).with_span(Span::new(0, 3));
    assert!(err.render().starts_with("offset 0, length 3, "));
}

#[test]
fn test_all_debug_fields() {
    let err = Error::grammar(Code::InvalidIntSize)
        .with_span(Span::new(7, 6))
        .with_token("int257")
        .with_prefix("int")
        .with_message("size must be a multiple of 8 between 8 and 256");
    insta::assert_snapshot!(
        err.render(),
        @r#"offset 7, length 6, category 2 (grammar), code 12 (invalid int size), token "int257", hint "int", message: size must be a multiple of 8 between 8 and 256"#
    );
}

#[test]
fn test_token_quoting_escapes_quotes_and_controls() {
    let err = Error::grammar(Code::UnknownEscapeSequence).with_token("a\"b\\c\n\t");
    assert_eq!(
        err.render(),
        r#"unknown location, category 2 (grammar), code 10 (unknown escape sequence), token "a\"b\\c\n\t""#
    );
}

#[test]
fn test_message_is_not_quoted() {
    let err = Error::runtime(Code::DividedByZero).with_message("x / 0");
    assert!(err.render().ends_with(", message: x / 0"));
}

#[test]
fn test_empty_debug_fields_are_omitted() {
    let rendered = Error::runtime(Code::Overflow).render();
    assert!(!rendered.contains("token"));
    assert!(!rendered.contains("hint"));
    assert!(!rendered.contains("message"));
}

#[test]
fn test_render_is_idempotent() {
    let err = parser_error().with_token("SELEC").with_message("syntax");
    assert_eq!(err.render(), err.render());
    assert_eq!(err.to_string(), err.render());
}

#[test]
fn test_validity() {
    assert!(!Error::default().is_valid());
    assert!(!Error::new(Category::Runtime, Code::Nil).is_valid());
    assert!(Error::limit(Code::DepthLimitReached).is_valid());
}

#[test]
fn test_builders_keep_abi_fields() {
    let err = Error::semantic(Code::InvalidDataType)
        .with_span(Span::from_offsets(4, 9))
        .with_token("bytes");
    assert_eq!(err.position(), 4);
    assert_eq!(err.length(), 5);
    assert_eq!(err.category(), Category::Semantic);
    assert_eq!(err.code(), Code::InvalidDataType);
    assert_eq!(err.token(), "bytes");
    assert_eq!(err.prefix(), "");
}

#[test]
fn test_span_from_offsets_saturates() {
    let span = Span::from_offsets(10, 4);
    assert_eq!(span, Span::new(10, 0));
    assert!(Span::new(0, 1).is_known());
    assert!(!Span::UNKNOWN.is_known());
}

#[test]
fn test_error_json_skips_empty_debug_fields() {
    let json = parser_error().to_json();
    assert_eq!(json, r#"{"position":10,"length":0,"category":2,"code":2}"#);

    let parsed: Error = serde_json::from_str(r#"{"category":4,"code":23,"message":"x"}"#).unwrap();
    assert_eq!(parsed, Error::runtime(Code::DividedByZero).with_message("x"));
}

#[test]
fn test_empty_list_renders_empty() {
    let list = ErrorList::new();
    assert!(list.is_empty());
    assert_eq!(list.render(), "");
}

#[test]
fn test_list_joins_with_newline() {
    let first = parser_error();
    let second = Error::grammar(Code::InvalidNumberSyntax)
        .with_span(Span::new(20, 3))
        .with_token("1.e");

    let mut list = ErrorList::new();
    list.push(first.clone());
    list.push(second.clone());

    assert_eq!(list.len(), 2);
    assert_eq!(list.render(), format!("{}\n{}", first.render(), second.render()));
    assert_eq!(list.render(), list.render());
}

#[test]
fn test_list_iteration_is_ordered_and_repeatable() {
    let list: ErrorList = Code::ALL
        .iter()
        .take(3)
        .map(|&code| Error::grammar(code))
        .collect();

    let first_pass: Vec<Code> = list.iter().map(Error::code).collect();
    let second_pass: Vec<Code> = (&list).into_iter().map(Error::code).collect();
    assert_eq!(first_pass, second_pass);
    assert_eq!(
        first_pass,
        vec![Code::DepthLimitReached, Code::Parser, Code::InvalidIntegerSyntax]
    );
    assert_eq!(list.first().map(Error::code), Some(Code::DepthLimitReached));
}

#[test]
fn test_concat_keeps_unit_order() {
    let unit_a: ErrorList = vec![
        Error::grammar(Code::Parser).with_span(Span::new(1, 0)),
        Error::grammar(Code::Parser).with_span(Span::new(2, 0)),
    ]
    .into();
    let unit_b = ErrorList::from(Error::grammar(Code::Parser).with_span(Span::new(3, 0)));

    let combined = ErrorList::concat([unit_a, unit_b]);
    let positions: Vec<u32> = combined.iter().map(Error::position).collect();
    assert_eq!(positions, vec![1, 2, 3]);
}

#[test]
fn test_into_result() {
    assert_eq!(ErrorList::new().into_result(7), Ok(7));

    let list = ErrorList::from(parser_error());
    let result: PassResult<()> = list.clone().into_result(());
    assert_eq!(result, Err(list));
}

#[test]
fn test_list_json_is_array() {
    let list = ErrorList::from(Error::runtime(Code::Underflow));
    assert_eq!(list.to_json(), r#"[{"position":0,"length":0,"category":4,"code":20}]"#);
    let back: ErrorList = serde_json::from_str(&list.to_json()).unwrap();
    assert_eq!(back, list);
}

#[test]
fn test_from_json_accepts_object_or_array() {
    let one = ErrorList::from_json(r#"{"position":3,"length":2,"category":2,"code":3,"token":"1x"}"#)
        .unwrap();
    assert_eq!(
        one,
        ErrorList::from(
            Error::grammar(Code::InvalidIntegerSyntax)
                .with_span(Span::new(3, 2))
                .with_token("1x")
        )
    );

    let many = ErrorList::from_json(r#"[{"category":4,"code":19},{"category":4,"code":20}]"#).unwrap();
    let codes: Vec<Code> = many.iter().map(Error::code).collect();
    assert_eq!(codes, vec![Code::Overflow, Code::Underflow]);
}

#[test]
fn test_from_json_rejects_undefined_values() {
    assert!(ErrorList::from_json(r#"{"category":4,"code":99}"#).is_err());
    assert!(ErrorList::from_json(r#"[{"category":5,"code":1}]"#).is_err());
}

#[test]
fn test_from_json_rejects_unset_values() {
    let err = ErrorList::from_json(r#"{"category":0,"code":0}"#).unwrap_err();
    assert!(err.to_string().contains("error record 0"), "{}", err);

    let err = ErrorList::from_json(r#"[{"category":4,"code":19},{"category":4,"code":0}]"#)
        .unwrap_err();
    assert!(err.to_string().contains("error record 1"), "{}", err);

    assert!(ErrorList::from_json(r#"{"category":0,"code":2}"#).is_err());
    assert!(ErrorList::from_json("[]").unwrap().is_empty());
}
