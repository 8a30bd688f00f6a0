use indoc::indoc;

use super::reducer::rewrite_reducers;
use super::{PassOutcome, RuntimeSymbol};
use crate::Config;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::test_utils::{apply, parse_ts};

fn run_with(config: &Config, source: &str) -> (String, PassOutcome, Diagnostics) {
    let tree = parse_ts(source);
    let (outcome, diagnostics) = rewrite_reducers(&tree, config);
    (apply(source, &outcome), outcome, diagnostics)
}

fn run(source: &str) -> (String, PassOutcome, Diagnostics) {
    run_with(&Config::default(), source)
}

fn assert_left_alone(source: &str) -> Diagnostics {
    let (code, outcome, diagnostics) = run(source);
    assert_eq!(outcome, PassOutcome::Unchanged, "{source}");
    assert_eq!(code, source);
    diagnostics
}

#[test]
fn typed_arrow_gains_types_array() {
    let (code, outcome, diagnostics) = run(r#"useReducer("add", (a: u32, b: u32) => { return a + b; });"#);

    insta::assert_snapshot!(code, @r#"registerReducer("add", [type.u32, type.u32], (a, b) => { return a + b; });"#);
    assert!(diagnostics.is_empty());

    let PassOutcome::Rewritten { required, .. } = outcome else {
        panic!("expected rewrite");
    };
    assert!(required.contains(RuntimeSymbol::RegisterReducer));
    assert!(required.contains(RuntimeSymbol::TypeNamespace));
    assert!(!required.contains(RuntimeSymbol::RegisterType));
}

#[test]
fn body_bytes_are_preserved() {
    let source = indoc! {r#"
        useReducer("move", (id: u64, to: Point) => {
            // keep   this   spacing
            const   moved = move(id,to);
        });
    "#};
    let (code, ..) = run(source);
    assert_eq!(
        code,
        indoc! {r#"
            registerReducer("move", [type.u64, Point], (id, to) => {
                // keep   this   spacing
                const   moved = move(id,to);
            });
        "#}
    );
}

#[test]
fn async_arrow_drops_return_type() {
    let (code, ..) = run(r#"useReducer("x", async (p: Point): Promise<void> => {});"#);
    insta::assert_snapshot!(code, @r#"registerReducer("x", [Point], async (p) => {});"#);
}

#[test]
fn arrow_type_parameters_are_dropped() {
    let (code, ..) = run(r#"useReducer("x", <T>(p: u8) => {});"#);
    insta::assert_snapshot!(code, @r#"registerReducer("x", [type.u8], (p) => {});"#);
}

#[test]
fn expression_body() {
    let (code, ..) = run(r#"useReducer("len", (xs: f32[]) => xs.length);"#);
    insta::assert_snapshot!(code, @r#"registerReducer("len", [type.array(type.f32)], (xs) => xs.length);"#);
}

#[test]
fn function_expression_keeps_name() {
    let (code, ..) = run(r#"useReducer("f", function named(flag: bool): void { flag; });"#);
    insta::assert_snapshot!(code, @r#"registerReducer("f", [type.bool], function named(flag) { flag; });"#);
}

#[test]
fn async_generator_function() {
    let (code, ..) = run(r#"useReducer("g", async function* (s: str) {});"#);
    insta::assert_snapshot!(code, @r#"registerReducer("g", [type.string], async function*(s) {});"#);
}

#[test]
fn no_parameters() {
    let (code, _, diagnostics) = run(r#"useReducer("tick", () => {});"#);
    insta::assert_snapshot!(code, @r#"registerReducer("tick", [], () => {});"#);
    assert!(diagnostics.is_empty());
}

#[test]
fn comments_between_arguments_survive() {
    let (code, ..) = run(r#"useReducer("a", /* handler */ (n: i64) => {});"#);
    insta::assert_snapshot!(code, @r#"registerReducer("a", /* handler */ [type.i64], (n) => {});"#);
}

#[test]
fn name_argument_is_opaque() {
    let (code, ..) = run(r#"useReducer(`reducer_${kind}`, (n: u8) => {});"#);
    insta::assert_snapshot!(code, @r#"registerReducer(`reducer_${kind}`, [type.u8], (n) => {});"#);
}

#[test]
fn nested_registrations() {
    let source = r#"useReducer("outer", (a: u8) => { useReducer("inner", (b: u16) => {}); });"#;
    let (code, ..) = run(source);
    insta::assert_snapshot!(code, @r#"registerReducer("outer", [type.u8], (a) => { registerReducer("inner", [type.u16], (b) => {}); });"#);
}

#[test]
fn partially_typed_handlers_are_left_alone() {
    for source in [
        r#"useReducer("m", (a: u32, b) => {});"#,
        r#"useReducer("m", (a: u32 = 1) => {});"#,
        r#"useReducer("m", (a?: u32) => {});"#,
        r#"useReducer("m", ({ x }: Point) => {});"#,
        r#"useReducer("m", (...rest: u32[]) => {});"#,
        r#"useReducer("m", ([a]: u32[], b: u8) => {});"#,
    ] {
        let diagnostics = assert_left_alone(source);
        assert!(diagnostics.is_empty(), "{source}");
    }
}

#[test]
fn other_call_shapes_are_left_alone() {
    for source in [
        r#"useReducer("x", [type.u32], (a) => {});"#,
        r#"useReducer("x", handler);"#,
        r#"useReducer("x");"#,
        r#"useReducer((a: u8) => {});"#,
        r#"register("x", (a: u8) => {});"#,
        r#"runtime.useReducer("x", (a: u8) => {});"#,
    ] {
        let diagnostics = assert_left_alone(source);
        assert!(diagnostics.is_empty(), "{source}");
    }
}

#[test]
fn untyped_handler_warns() {
    for source in [r#"useReducer("u", (a, b) => {});"#, r#"useReducer("u", a => {});"#] {
        let diagnostics = assert_left_alone(source);
        assert_eq!(diagnostics.len(), 1, "{source}");

        let warning = diagnostics.iter().next().unwrap();
        assert_eq!(warning.kind(), DiagnosticKind::UntypedReducer);
        assert!(warning.message().contains("`useReducer`"));
    }
}

#[test]
fn untyped_warning_can_be_disabled() {
    let config = Config::default().with_untyped_warnings(false);
    let (_, outcome, diagnostics) = run_with(&config, r#"useReducer("u", (a) => {});"#);
    assert_eq!(outcome, PassOutcome::Unchanged);
    assert!(diagnostics.is_empty());
}

#[test]
fn unsupported_annotation_skips_only_that_call() {
    let source = indoc! {r#"
        useReducer("x", (a: u8 | str) => {});
        useReducer("y", (b: u8) => {});
    "#};
    let (code, _, diagnostics) = run(source);

    assert_eq!(
        code,
        "useReducer(\"x\", (a: u8 | str) => {});\nregisterReducer(\"y\", [type.u8], (b) => {});\n"
    );
    assert_eq!(diagnostics.len(), 1);

    let warning = diagnostics.iter().next().unwrap();
    assert_eq!(warning.kind(), DiagnosticKind::UnsupportedTypeNode);
    assert_eq!(&source[warning.range()], "u8 | str");
}

#[test]
fn configured_names() {
    let config = Config::default()
        .with_source_entry_point("reducer")
        .with_register_reducer("defineReducer")
        .with_type_namespace("t");
    let (code, ..) = run_with(&config, r#"reducer("r", (a: bool) => {}); useReducer("s", (b: u8) => {});"#);
    insta::assert_snapshot!(code, @r#"defineReducer("r", [t.bool], (a) => {}); useReducer("s", (b: u8) => {});"#);
}
