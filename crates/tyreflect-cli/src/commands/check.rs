use std::path::PathBuf;

use tyreflect_lib::{Error, Transformer};

use super::config_loader::ConfigArgs;
use super::{fail, module_id, read_source};

pub struct CheckArgs {
    pub files: Vec<PathBuf>,
    pub strict: bool,
    pub color: bool,
    pub config: ConfigArgs,
}

/// Per-file verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Rewritten,
    Unchanged,
    Failed,
}

impl FileStatus {
    pub fn label(self) -> &'static str {
        match self {
            FileStatus::Rewritten => "rewritten",
            FileStatus::Unchanged => "unchanged",
            FileStatus::Failed => "failed",
        }
    }
}

#[derive(Debug)]
pub struct FileReport {
    pub path: String,
    pub status: FileStatus,
    pub warnings: usize,
    /// Rendered diagnostics, empty when there are none.
    pub rendered: String,
}

pub fn run(args: CheckArgs) {
    let config = args.config.load().unwrap_or_else(|err| fail(err));
    let transformer = Transformer::new(config);

    let reports: Vec<FileReport> = args
        .files
        .iter()
        .map(|path| check_file(&transformer, path, args.color))
        .collect();

    for report in &reports {
        eprint!("{}", report.rendered);
        println!("{}: {}", report.path, report.status.label());
    }

    if !passed(&reports, args.strict) {
        std::process::exit(1);
    }
}

/// Transform one file without writing anything.
pub fn check_file(transformer: &Transformer, path: &std::path::Path, color: bool) -> FileReport {
    let id = module_id(path);
    let source = match read_source(path) {
        Ok(source) => source,
        Err(err) => {
            return FileReport {
                path: id,
                status: FileStatus::Failed,
                warnings: 0,
                rendered: format!("error: {}\n", err),
            };
        }
    };

    match transformer.transform(&source, &id) {
        Ok(result) => {
            let diagnostics = result.diagnostics();
            let rendered = if diagnostics.is_empty() {
                String::new()
            } else {
                diagnostics.render_colored(&source, &id, color)
            };
            FileReport {
                status: if result.is_rewritten() {
                    FileStatus::Rewritten
                } else {
                    FileStatus::Unchanged
                },
                warnings: diagnostics.warning_count(),
                rendered,
                path: id,
            }
        }
        Err(Error::Parse { diagnostics, .. }) => FileReport {
            rendered: diagnostics.render_colored(&source, &id, color),
            path: id,
            status: FileStatus::Failed,
            warnings: 0,
        },
        Err(err) => FileReport {
            path: id,
            status: FileStatus::Failed,
            warnings: 0,
            rendered: format!("error: {}\n", err),
        },
    }
}

/// Failures always fail the run; warnings only under `strict`.
pub fn passed(reports: &[FileReport], strict: bool) -> bool {
    reports
        .iter()
        .all(|r| r.status != FileStatus::Failed && !(strict && r.warnings > 0))
}
