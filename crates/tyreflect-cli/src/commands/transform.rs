use std::path::{Path, PathBuf};

use tyreflect_lib::{Config, Diagnostics, Error, SourceMap, Transformed, Transformer};

use super::config_loader::ConfigArgs;
use super::{CommandError, fail, module_id, read_source};

pub struct TransformArgs {
    pub file: PathBuf,
    pub output: Option<PathBuf>,
    pub source_map: bool,
    pub color: bool,
    pub config: ConfigArgs,
}

/// What `transform` produced for one file, before anything is written.
#[derive(Debug)]
pub struct TransformReport {
    pub code: String,
    pub source_map: Option<SourceMap>,
    pub diagnostics: Diagnostics,
}

pub fn run(args: TransformArgs) {
    let config = args.config.load().unwrap_or_else(|err| fail(err));
    let source = read_source(&args.file).unwrap_or_else(|err| fail(err));
    let path = module_id(&args.file);

    let report = match transform_source(&config, &source, &path) {
        Ok(report) => report,
        Err(err) => {
            eprint!("{}", render_failure(&err, &source, &path, args.color));
            std::process::exit(1);
        }
    };

    if !report.diagnostics.is_empty() {
        eprint!(
            "{}",
            report.diagnostics.render_colored(&source, &path, args.color)
        );
    }

    if let Err(err) = write_outputs(&args, report) {
        fail(err);
    }
}

/// Transform `source`. Unchanged files pass through verbatim.
pub fn transform_source(
    config: &Config,
    source: &str,
    path: &str,
) -> Result<TransformReport, Error> {
    let report = match Transformer::new(config.clone()).transform(source, path)? {
        Transformed::Unchanged { diagnostics } => TransformReport {
            code: source.to_owned(),
            source_map: None,
            diagnostics,
        },
        Transformed::Rewritten {
            code,
            source_map,
            diagnostics,
        } => TransformReport {
            code,
            source_map: Some(source_map),
            diagnostics,
        },
    };
    Ok(report)
}

/// Located syntax errors for parse failures, then a one-line summary.
pub fn render_failure(err: &Error, source: &str, path: &str, color: bool) -> String {
    let mut out = match err {
        Error::Parse { diagnostics, .. } => diagnostics.render_colored(source, path, color),
        _ => String::new(),
    };
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&format!("error: {}\n", err));
    out
}

pub fn write_outputs(args: &TransformArgs, report: TransformReport) -> Result<(), CommandError> {
    let Some(output) = &args.output else {
        print!("{}", report.code);
        return Ok(());
    };

    let mut code = report.code;
    if let (true, Some(mut map)) = (args.source_map, report.source_map) {
        let map_path = map_path_for(output);
        map.file = file_name(output);
        let json = map.to_json().map_err(CommandError::SourceMap)?;
        write_file(&map_path, &json)?;

        if !code.ends_with('\n') {
            code.push('\n');
        }
        code.push_str(&format!(
            "//# sourceMappingURL={}\n",
            file_name(&map_path).unwrap_or_default()
        ));
    }

    write_file(output, &code)
}

/// `out.ts` → `out.ts.map`.
pub fn map_path_for(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_owned();
    name.push(".map");
    PathBuf::from(name)
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

fn write_file(path: &Path, contents: &str) -> Result<(), CommandError> {
    std::fs::write(path, contents).map_err(|source| CommandError::Write {
        path: path.to_owned(),
        source,
    })
}
