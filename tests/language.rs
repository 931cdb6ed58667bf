use std::fs;

use deftoml::{Document, Error, EvalError, Session, SyntaxError, Value, parse_str, to_toml};
use pretty_assertions::assert_eq;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                                     .with_test_writer()
                                     .try_init();
}

#[test]
fn fixtures_render_expected_toml() {
    init_tracing();
    let mut count = 0;

    for entry in
        WalkDir::new("tests/fixtures").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "conf"))
    {
        let path = entry.path();
        let expected_path = path.with_extension("toml");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        let doc = deftoml::parse_file(path).unwrap_or_else(|e| panic!("{path:?} failed: {e}"));
        let rendered = to_toml(&doc).unwrap_or_else(|e| panic!("{path:?} did not render: {e}"));

        assert_eq!(rendered, expected, "unexpected output for {path:?}");
        count += 1;
    }

    assert!(count > 0, "No fixtures found in tests/fixtures");
}

fn assert_success(src: &str) -> Document {
    init_tracing();
    parse_str(src).unwrap_or_else(|e| panic!("Config failed: {e}"))
}

fn assert_failure(src: &str) -> Error {
    init_tracing();
    match parse_str(src) {
        Ok(doc) => panic!("Config succeeded but was expected to fail: {doc:?}"),
        Err(e) => e,
    }
}

fn assert_eval_failure(src: &str) -> EvalError {
    match assert_failure(src) {
        Error::Eval { source, .. } => source,
        other => panic!("Expected an evaluation error, found: {other}"),
    }
}

fn array_of(doc: &Document) -> Vec<Value> {
    doc.array().expect("document has no array").to_vec()
}

#[test]
fn constants_and_embedded_expression() {
    let doc = assert_success("def X = 5\narray([[a]], X, $X + 1$)");
    assert_eq!(array_of(&doc), vec![Value::from("a"), Value::Integer(5), Value::Integer(6)]);
}

#[test]
fn single_integer_array() {
    let doc = assert_success("array(99)");
    assert_eq!(array_of(&doc), vec![Value::Integer(99)]);
    assert_eq!(to_toml(&doc).unwrap(), "array = [99]\n");
}

#[test]
fn unrecognized_line_is_syntax_error() {
    let err = assert_failure("foo");
    assert!(matches!(&err,
                     Error::Syntax(SyntaxError::UnrecognizedLine { text, line: 1 }) if text == "foo"));
    assert!(err.to_string().contains("foo"));
}

#[test]
fn undefined_constant_is_evaluation_error() {
    let err = assert_failure("def Y = Z");
    assert!(matches!(&err,
                     Error::Eval { line: 1, source: EvalError::UnknownConstant { name } } if name == "Z"));
    assert!(err.to_string().contains('Z'));
}

#[test]
fn constant_visible_on_later_lines() {
    let doc = assert_success("def A = [[x]]\n\ndef B = A\narray(B, A)");
    assert_eq!(array_of(&doc), vec![Value::from("x"), Value::from("x")]);
}

#[test]
fn redefinition_overwrites() {
    let doc = assert_success("def A = 1\ndef A = 2\narray(A)");
    assert_eq!(array_of(&doc), vec![Value::Integer(2)]);
}

#[test]
fn session_environment_tracks_bindings() {
    let mut session = Session::new();
    assert!(session.environment().is_empty());

    for line in ["def A = 1", "def B = [[b]]", "def A = 3"] {
        session.feed_line(line).unwrap();
    }
    assert_eq!(session.environment().len(), 2);
    assert_eq!(session.environment().get("A"), Some(&Value::Integer(3)));
    assert!(session.finish().unwrap().is_empty());
}

#[test]
fn forward_reference_fails() {
    let err = assert_eval_failure("def A = B\ndef B = 1");
    assert_eq!(err, EvalError::UnknownConstant { name: "B".to_string() });
}

#[test]
fn block_comments_are_skipped() {
    let doc = assert_success("{- start\nfoo\ndef X = nonsense\nend -}\narray(1)");
    assert_eq!(array_of(&doc), vec![Value::Integer(1)]);

    let doc = assert_success("{- one line -}\narray(2)");
    assert_eq!(array_of(&doc), vec![Value::Integer(2)]);
}

#[test]
fn closing_line_of_block_comment_is_not_a_directive() {
    let doc = assert_success("{-\narray(1) -}\narray(2)");
    assert_eq!(array_of(&doc), vec![Value::Integer(2)]);
}

#[test]
fn unterminated_block_comment_is_error() {
    let err = assert_failure("array(1)\n{- never closed\narray(2)");
    assert!(matches!(err, Error::Syntax(SyntaxError::UnterminatedBlockComment { line: 2 })));
}

#[test]
fn line_comments_and_blank_lines() {
    let doc = assert_success("# heading\n\n   \n  # indented\narray(3)");
    assert_eq!(array_of(&doc), vec![Value::Integer(3)]);
}

#[test]
fn empty_input_gives_empty_document() {
    let doc = assert_success("");
    assert!(doc.is_empty());
    assert_eq!(to_toml(&doc).unwrap(), "");
}

#[test]
fn empty_array_literal() {
    let doc = assert_success("array(   )");
    assert_eq!(array_of(&doc), Vec::<Value>::new());
    assert_eq!(to_toml(&doc).unwrap(), "array = []\n");
}

#[test]
fn empty_array_element_is_error() {
    assert_eq!(assert_eval_failure("array(1, , 2)"), EvalError::EmptyExpression);
    assert_eq!(assert_eval_failure("array(1,)"), EvalError::EmptyExpression);
}

#[test]
fn signed_integer_literal_is_rejected() {
    assert!(matches!(assert_eval_failure("array(-1)"), EvalError::InvalidExpression { .. }));
    assert!(matches!(assert_eval_failure("array(+1)"), EvalError::InvalidExpression { .. }));
    assert!(matches!(assert_eval_failure("array(0x10)"), EvalError::InvalidExpression { .. }));
}

#[test]
fn integer_literal_too_large() {
    assert!(matches!(assert_eval_failure("array(99999999999999999999)"),
                     EvalError::LiteralTooLarge { .. }));
    assert!(matches!(assert_eval_failure("array($99999999999999999999 + 1$)"),
                     EvalError::LiteralTooLarge { .. }));
}

#[test]
fn leading_zeros_are_decimal() {
    let doc = assert_success("array(007)");
    assert_eq!(array_of(&doc), vec![Value::Integer(7)]);
}

#[test]
fn string_literals_pass_text_through() {
    let doc = assert_success("array([[]], [[ spaced  out ]], [[a]b]], [[$1 + 1$]])");
    assert_eq!(array_of(&doc),
               vec![Value::from(""),
                    Value::from(" spaced  out "),
                    Value::from("a]b"),
                    Value::from("$1 + 1$")]);
}

#[test]
fn embedded_arithmetic() {
    let doc = assert_success("def W = 7\narray($W * 3 - 1$, $W / 2$, $W % 4$, $-W$, $(W + 1) * 2$)");
    assert_eq!(array_of(&doc),
               vec![Value::Integer(20),
                    Value::Integer(3),
                    Value::Integer(3),
                    Value::Integer(-7),
                    Value::Integer(16)]);
}

#[test]
fn embedded_precedence_and_associativity() {
    let doc = assert_success("array($2 + 3 * 4$, $20 - 5 - 3$, $100 / 10 / 5$, $--4$)");
    assert_eq!(array_of(&doc),
               vec![Value::Integer(14), Value::Integer(12), Value::Integer(2), Value::Integer(4)]);
}

#[test]
fn embedded_string_concatenation() {
    let doc = assert_success("def HOST = [[example]]\ndef URL = $[[https://]] + HOST + [[.org]]$\narray(URL)");
    assert_eq!(array_of(&doc), vec![Value::from("https://example.org")]);
}

#[test]
fn embedded_string_literals_close_like_top_level_ones() {
    let doc = assert_success("def A = $[[a]]]$
array(A, [[a]]], $[[a]]] + [[b]]$, $[[]]$)");
    assert_eq!(array_of(&doc),
               vec![Value::from("a]"), Value::from("a]"), Value::from("a]b"), Value::from("")]);
    assert!(matches!(assert_eval_failure("def X = $[[open$"), EvalError::UnexpectedCharacter { .. }));
}

#[test]
fn embedded_type_errors() {
    assert!(matches!(assert_eval_failure("array($[[a]] * 2$)"), EvalError::TypeError { .. }));
    assert!(matches!(assert_eval_failure("array($[[a]] + 2$)"), EvalError::TypeError { .. }));
    assert!(matches!(assert_eval_failure("array($-[[a]]$)"), EvalError::TypeError { .. }));
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(assert_eval_failure("def X = $1 / 0$"), EvalError::DivisionByZero);
    assert_eq!(assert_eval_failure("def Z = 0\ndef X = $5 % Z$"), EvalError::DivisionByZero);
}

#[test]
fn overflow_is_error() {
    assert!(matches!(assert_eval_failure("def X = $9223372036854775807 + 1$"),
                     EvalError::Overflow { .. }));
    assert!(matches!(assert_eval_failure("def X = $9223372036854775807 * 2$"),
                     EvalError::Overflow { .. }));
}

#[test]
fn embedded_unknown_name_is_error() {
    assert_eq!(assert_eval_failure("def X = $Y + 1$"),
               EvalError::UnknownConstant { name: "Y".to_string() });
}

#[test]
fn embedded_expression_has_no_host_capabilities() {
    assert!(matches!(assert_eval_failure("def X = $open([[/etc/passwd]])$"),
                     EvalError::UnexpectedToken { .. }));
    assert!(matches!(assert_eval_failure("def X = $__import__.os$"),
                     EvalError::UnexpectedCharacter { .. }));
    assert!(matches!(assert_eval_failure("def X = $2 ** 3$"), EvalError::UnexpectedToken { .. }));
}

#[test]
fn malformed_embedded_expressions() {
    assert_eq!(assert_eval_failure("def X = $$"), EvalError::EmptyExpression);
    assert_eq!(assert_eval_failure("def X = $   $"), EvalError::EmptyExpression);
    assert_eq!(assert_eval_failure("def X = $1 +$"), EvalError::UnexpectedEndOfInput);
    assert_eq!(assert_eval_failure("def X = $(1 + 2$"), EvalError::ExpectedClosingParen { offset: 0 });
    assert!(matches!(assert_eval_failure("def X = $1 2$"), EvalError::UnexpectedToken { .. }));
}

#[test]
fn deep_nesting_is_bounded() {
    let nested = format!("def X = ${}1{}$", "(".repeat(500), ")".repeat(500));
    assert!(matches!(assert_eval_failure(&nested), EvalError::NestingTooDeep { .. }));

    let negations = format!("def X = ${}1$", "-".repeat(500));
    assert!(matches!(assert_eval_failure(&negations), EvalError::NestingTooDeep { .. }));

    let shallow = format!("def X = ${}1{}$\narray(X)", "(".repeat(10), ")".repeat(10));
    assert_eq!(array_of(&assert_success(&shallow)), vec![Value::Integer(1)]);
}

#[test]
fn long_expressions_are_bounded() {
    let sum = format!("def X = ${}$", vec!["1"; 2000].join(" + "));
    assert!(matches!(assert_eval_failure(&sum), EvalError::TooManyTokens { .. }));
}

#[test]
fn definition_requires_value() {
    assert!(matches!(assert_failure("def X ="), Error::Syntax(SyntaxError::UnrecognizedLine { .. })));
    assert!(matches!(assert_failure("def 1X = 2"),
                     Error::Syntax(SyntaxError::UnrecognizedLine { .. })));
}

#[test]
fn trailing_text_after_array_is_syntax_error() {
    let err = assert_failure("def A = 1\narray(1) # comment");
    assert_eq!(err.line(), Some(2));
    assert!(matches!(err, Error::Syntax(SyntaxError::UnrecognizedLine { .. })));
}

#[test]
fn error_reports_line_of_failing_directive() {
    let err = assert_failure("# one\ndef A = 1\n\narray(A, B)");
    assert_eq!(err.line(), Some(4));
    assert_eq!(err.to_string(), "line 4: unknown constant 'B'");
}

#[test]
fn reparsing_is_idempotent() {
    let source = "def X = 5\n{- c -}\ndef Y = $X * X$\narray(X, Y, [[z]])";
    assert_eq!(parse_str(source).unwrap(), parse_str(source).unwrap());
}

#[test]
fn windows_line_endings() {
    let doc = assert_success("def X = 1\r\narray(X)\r\n");
    assert_eq!(array_of(&doc), vec![Value::Integer(1)]);
}

#[test]
fn missing_file_is_resource_error() {
    let err = deftoml::parse_file("tests/fixtures/does-not-exist.conf").unwrap_err();
    assert!(matches!(err, Error::Resource { .. }));
    assert_eq!(err.line(), None);
}
