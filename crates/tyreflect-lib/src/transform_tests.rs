use indoc::indoc;

use crate::diagnostics::DiagnosticKind;
use crate::test_utils::{assert_unchanged, rewrite, rewrite_with};
use crate::{Config, Error, Transformed, Transformer, transform};

#[test]
fn file_without_trigger_tokens_is_untouched() {
    let source = "export const answer = 42;\n";
    let result = transform(source, "src/a.ts").unwrap();

    assert_eq!(result, Transformed::Unchanged { diagnostics: Default::default() });
    assert_eq!(result.code_or(source), source);
    assert!(result.source_map().is_none());
}

#[test]
fn pre_check_does_not_parse() {
    // Invalid syntax, but no trigger token: the parser never runs.
    assert!(transform("let = ;\n", "src/a.ts").unwrap().diagnostics().is_empty());
}

#[test]
fn pre_check() {
    let transformer = Transformer::default();
    assert!(transformer.might_rewrite("useReducer"));
    assert!(transformer.might_rewrite("const type = 1;"));
    assert!(!transformer.might_rewrite("const x = 1;"));

    let custom = Transformer::new(Config::default().with_source_entry_point("reducer"));
    assert!(custom.might_rewrite("reducer(a, b)"));
}

#[test]
fn trigger_token_without_rewrites_is_unchanged() {
    assert_unchanged("// prototype\nconst x: number = 1;\n");
}

#[test]
fn composable_module_example() {
    let source = indoc! {r#"
        import { useReducer, f32, bool, str, i64 } from 'spacetimedb/composable';

        type Foo = {
            bar: f32,
            baz: str,
            count: i64,
        }

        useReducer('beepboop', (x: f32[], y: bool, z: Foo) => {
            const sum = x.reduce((acc, val) => acc + val, 0);
            console.log(`Sum: ${sum}, IsActive: ${y}`);
        });
    "#};

    insta::assert_snapshot!(rewrite(source), @r#"
    import { registerReducer, registerType, type } from "spacetimedb";

    const Foo = registerType("Foo", type.product({ bar: type.f32, baz: type.string, count: type.i64 }));

    registerReducer('beepboop', [type.array(type.f32), type.bool, Foo], (x, y, z) => {
        const sum = x.reduce((acc, val) => acc + val, 0);
        console.log(`Sum: ${sum}, IsActive: ${y}`);
    });
    "#);
}

#[test]
fn keyword_annotations() {
    let source = "useReducer(\"beepboop\", (x: number[], y: boolean) => { go(x, y); });\n";
    assert_eq!(
        rewrite(source),
        "import { registerReducer, type } from \"spacetimedb\";\n\
         registerReducer(\"beepboop\", [type.array(type.f64), type.bool], (x, y) => { go(x, y); });\n"
    );
}

#[test]
fn alias_only_file_imports_register_type() {
    let source = "type Foo = { bar: number, baz: boolean };\n";
    assert_eq!(
        rewrite(source),
        "import { registerType, type } from \"spacetimedb\";\n\
         const Foo = registerType(\"Foo\", type.product({ bar: type.f64, baz: type.bool }));\n"
    );
}

#[test]
fn array_forms_agree() {
    let suffix = rewrite("useReducer(\"a\", (x: string[][]) => {});\n");
    let generic = rewrite("useReducer(\"a\", (x: Array<Array<string>>) => {});\n");
    assert_eq!(suffix, generic);
    assert!(suffix.contains("[type.array(type.array(type.string))]"));
}

#[test]
fn mixed_parameters_leave_file_unchanged() {
    let diagnostics = assert_unchanged("useReducer(\"m\", (x: u32, y) => {});\n");
    assert!(diagnostics.is_empty());
}

#[test]
fn rewritten_output_is_stable() {
    let source = indoc! {r#"
        import { u8 } from "spacetimedb/composable";
        type P = { x: u8 };
        useReducer("p", (p: P) => {});
    "#};
    let once = rewrite(source);
    let diagnostics = assert_unchanged(&once);
    assert!(diagnostics.is_empty());
}

#[test]
fn import_hygiene() {
    let source = indoc! {r#"
        import { useReducer, u32 } from "spacetimedb/composable";
        import { Identity, registerReducer } from "spacetimedb";
        import { helper } from "./helper";
        useReducer("a", (n: u32) => helper(n));
    "#};
    let code = rewrite(source);

    assert_eq!(code.matches("from \"spacetimedb\"").count(), 1);
    assert!(!code.contains("spacetimedb/composable"));
    assert!(code.contains("import { helper } from \"./helper\";"));
    assert!(code.starts_with("import { registerReducer, type } from \"spacetimedb\";\n"));
}

#[test]
fn untyped_handler_warns_without_rewriting() {
    let diagnostics = assert_unchanged("useReducer(\"u\", (a) => {});\n");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics.iter().next().map(|d| d.kind()),
        Some(DiagnosticKind::UntypedReducer)
    );
}

#[test]
fn unsupported_annotation_is_local() {
    let source = indoc! {r#"
        type Bad = { v: u8 | str };
        type Good = { v: u8 };
        useReducer("bad", (x: Bad | null) => {});
        useReducer("good", (x: Good) => {});
    "#};
    let Transformed::Rewritten {
        code, diagnostics, ..
    } = transform(source, "src/a.ts").unwrap()
    else {
        panic!("expected rewrite");
    };

    insta::assert_snapshot!(code, @r#"
    import { registerReducer, registerType, type } from "spacetimedb";
    type Bad = { v: u8 | str };
    const Good = registerType("Good", type.product({ v: type.u8 }));
    useReducer("bad", (x: Bad | null) => {});
    registerReducer("good", [Good], (x) => {});
    "#);
    assert_eq!(diagnostics.warning_count(), 2);
    assert!(!diagnostics.has_errors());
}

#[test]
fn exported_alias_and_hashbang() {
    let source = "#!/usr/bin/env node\nexport type Id = { raw: u128 };\n";
    assert_eq!(
        rewrite(source),
        "#!/usr/bin/env node\n\
         import { registerType, type } from \"spacetimedb\";\n\
         export const Id = registerType(\"Id\", type.product({ raw: type.u128 }));\n"
    );
}

#[test]
fn tsx_files_use_the_tsx_grammar() {
    let source = "useReducer(\"r\", (n: u8) => <Row n={n} />);\n";
    let result = Transformer::default().transform(source, "src/App.tsx").unwrap();
    assert!(result.code_or(source).contains("registerReducer(\"r\", [type.u8], (n) => <Row n={n} />);"));
}

#[test]
fn parse_failure_is_fatal() {
    let err = transform("type A = {\nuseReducer(\"x\", (a: u8) => {});\n", "src/broken.ts").unwrap_err();
    let Error::Parse { file, diagnostics } = err else {
        panic!("expected parse failure");
    };
    assert_eq!(file, "src/broken.ts");
    assert!(diagnostics.has_errors());
}

#[test]
fn configured_modules() {
    let config = Config::default()
        .with_runtime_module("@acme/runtime")
        .with_placeholder_module("@acme/runtime/types");
    let source = indoc! {r#"
        import { u8 } from "@acme/runtime/types";
        import { x } from "spacetimedb/composable";
        useReducer("a", (n: u8) => {});
    "#};
    insta::assert_snapshot!(rewrite_with(config, source), @r#"
    import { registerReducer, type } from "@acme/runtime";
    import { x } from "spacetimedb/composable";
    registerReducer("a", [type.u8], (n) => {});
    "#);
}

#[test]
fn source_map_points_into_original() {
    let source = indoc! {r#"
        import { u32 } from "spacetimedb/composable";
        useReducer("a", (n: u32) => {
          work(n);
        });
    "#};
    let Transformed::Rewritten { code, source_map, .. } = transform(source, "src/a.ts").unwrap() else {
        panic!("expected rewrite");
    };

    assert_eq!(source_map.version, 3);
    assert_eq!(source_map.sources, ["src/a.ts"]);
    assert_eq!(source_map.sources_content.as_deref(), Some(&[source.to_owned()][..]));

    // `work(n);` sits on line 2 in both texts.
    let generated_line = code.lines().position(|l| l.contains("work(n)")).unwrap() as u32;
    let mapping = source_map.lookup(generated_line, 2).unwrap().unwrap();
    assert_eq!(mapping.original_line, 2);
    assert_eq!(mapping.original_column, 0);

    // The synthesized import maps to the start of the file.
    let first = source_map.lookup(0, 0).unwrap().unwrap();
    assert_eq!((first.original_line, first.original_column), (0, 0));
}

#[test]
fn source_map_content_can_be_omitted() {
    let config = Config::default().with_source_map_content(false);
    let result = Transformer::new(config)
        .transform("type A = { x: u8 };\n", "a.ts")
        .unwrap();
    assert_eq!(result.source_map().unwrap().sources_content, None);
}

#[test]
fn transformer_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Transformer>();
}
