use std::path::Path;

use tyreflect_lib::{Config, SourceMap};

use super::config_loader::ConfigArgs;
use super::read_source;
use super::transform::{
    TransformArgs, map_path_for, render_failure, transform_source, write_outputs,
};

const REDUCER: &str = "useReducer(\"add\", (a: u32, b: u32) => {});\n";

fn args(output: Option<&Path>, source_map: bool) -> TransformArgs {
    TransformArgs {
        file: "src/in.ts".into(),
        output: output.map(Path::to_owned),
        source_map,
        color: false,
        config: ConfigArgs::default(),
    }
}

#[test]
fn writes_code_and_map() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.ts");

    let report = transform_source(&Config::default(), REDUCER, "src/in.ts").unwrap();
    assert!(report.diagnostics.is_empty());
    write_outputs(&args(Some(&output), true), report).unwrap();

    let code = std::fs::read_to_string(&output).unwrap();
    insta::assert_snapshot!(code, @r#"
    import { registerReducer, type } from "spacetimedb";
    registerReducer("add", [type.u32, type.u32], (a, b) => {});
    //# sourceMappingURL=out.ts.map
    "#);

    let json = std::fs::read_to_string(dir.path().join("out.ts.map")).unwrap();
    let map = SourceMap::from_json(&json).unwrap();
    assert_eq!(map.file.as_deref(), Some("out.ts"));
    assert_eq!(map.sources, ["src/in.ts"]);
    assert_eq!(map.sources_content.as_deref(), Some(&[REDUCER.to_owned()][..]));
}

#[test]
fn unchanged_file_passes_through() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.ts");
    let source = "export const answer = 42;\n";

    let report = transform_source(&Config::default(), source, "src/in.ts").unwrap();
    assert!(report.source_map.is_none());
    write_outputs(&args(Some(&output), true), report).unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), source);
    assert!(!dir.path().join("out.ts.map").exists());
}

#[test]
fn config_flags_reach_the_transform() {
    let config = ConfigArgs {
        runtime_module: Some("@acme/runtime".to_owned()),
        namespace: Some("t".to_owned()),
        sources_content: Some(false),
        ..Default::default()
    }
    .load()
    .unwrap();
    let report = transform_source(&config, REDUCER, "src/in.ts").unwrap();

    assert!(report.code.starts_with("import { registerReducer, t } from \"@acme/runtime\";\n"));
    assert!(report.code.contains("[t.u32, t.u32]"));
    assert_eq!(report.source_map.unwrap().sources_content, None);
}

#[test]
fn syntax_error_is_reported_with_location() {
    let source = "type A = {";
    let err = transform_source(&Config::default(), source, "src/broken.ts").unwrap_err();
    assert!(matches!(err, tyreflect_lib::Error::Parse { .. }));

    let rendered = render_failure(&err, source, "src/broken.ts", false);
    assert!(rendered.contains("src/broken.ts:1:"), "{rendered}");
    assert!(rendered.contains("type A = {"));
    assert!(rendered.contains("\nerror: failed to parse `src/broken.ts` ("));
    assert!(rendered.ends_with("syntax errors)\n"));
}

#[test]
fn other_failures_render_one_line() {
    let err = tyreflect_lib::Error::Language("src/in.ts".to_owned());
    assert_eq!(
        render_failure(&err, "", "src/in.ts", false),
        "error: no usable grammar for `src/in.ts`\n"
    );
}

#[test]
fn missing_input_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_source(&dir.path().join("nope.ts")).unwrap_err();
    assert!(err.to_string().starts_with("failed to read '"));
}

#[test]
fn map_path_appends_extension() {
    assert_eq!(map_path_for(Path::new("dist/index.js")), Path::new("dist/index.js.map"));
}
