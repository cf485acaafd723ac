use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphdef_core::Diagnostics;
use libgraphdef_core::SchemaModel;
use libgraphdef_core::SourceFile;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=["gdef".to_string()],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    file_exts: Vec<String>,

    #[arg(
        help="Print the JSON export of every valid schema to stdout.",
        long,
    )]
    json: bool,

    #[arg(
        help="Paths to one or more graphdef files or directories containing \
             graphdef files which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// The files found under the command's path arguments.
#[derive(Debug, Default)]
struct FileScan {
    file_paths: Vec<PathBuf>,
    num_skipped: usize,
}

/// The outcome of validating one file.
#[derive(Debug)]
enum FileReport {
    Valid {
        path: PathBuf,
        model: Box<SchemaModel>,
    },
    Invalid {
        path: PathBuf,
        source: String,
        diagnostics: Diagnostics,
    },
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.validate_all().await {
            Ok(result) => result,
            Err(err) => CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}

impl ValidateCmd {
    async fn validate_all(&self) -> anyhow::Result<CommandResult> {
        let scan = self.scan_paths()?;
        log::debug!(
            "Found {} graphdef files to be validated.",
            scan.file_paths.len(),
        );

        let mut tasks = tokio::task::JoinSet::new();
        for path in scan.file_paths.iter().cloned() {
            tasks.spawn(validate_file(path));
        }
        let mut reports = vec![];
        while let Some(joined) = tasks.join_next().await {
            reports.push(joined.context("validation task failed")??);
        }
        reports.sort_by(|a, b| a.path().cmp(b.path()));

        Ok(self.summarize(&scan, &reports))
    }

    /// Finds every file at or under the path arguments whose extension is
    /// one of `--file-exts`.
    fn scan_paths(&self) -> anyhow::Result<FileScan> {
        let file_exts = normalize_exts(&self.file_exts);
        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );

        let mut scan = FileScan::default();
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = entry.with_context(|| {
                    format!("failed to walk {}", path.display())
                })?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }
                if has_matching_ext(entry_path, &file_exts) {
                    log::trace!("Found file at {entry_path:#?}.");
                    scan.file_paths.push(canonicalize(entry_path)?);
                } else {
                    scan.num_skipped += 1;
                }
            }
        }

        // A single explicit file argument is validated whatever its
        // extension.
        if scan.file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            let first_arg_path = canonicalize(first_arg_path)?;
            log::warn!(
                "Proceeding to validate {first_arg_path:#?} even though it \
                doesn't match any of the --file-exts ({}).",
                file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            scan.num_skipped = 0;
            scan.file_paths.push(first_arg_path);
        }

        if scan.file_paths.is_empty() {
            anyhow::bail!("no graphdef files found");
        }
        Ok(scan)
    }

    fn summarize(&self, scan: &FileScan, reports: &[FileReport]) -> CommandResult {
        let mut failures = vec![];
        let mut num_diagnostics = 0;
        let mut num_types = 0;
        let mut num_endpoints = 0;
        let mut json_exports = vec![];

        for report in reports {
            match report {
                FileReport::Valid { path, model } => {
                    log::info!(
                        "{} {}: schema `{}` is valid.",
                        output_utils::GREEN_CHECK,
                        path.display(),
                        model.name(),
                    );
                    num_types += model
                        .types()
                        .filter(|type_| !type_.id().is_primitive() && !type_.is_anonymous())
                        .count();
                    num_endpoints += model.queries().count() + model.mutations().count();
                    if self.json {
                        match model.to_json_pretty() {
                            Ok(json) => json_exports.push(json),
                            Err(err) => failures.push(format!(
                                "{}: failed to export JSON: {err}",
                                path.display(),
                            )),
                        }
                    }
                },
                FileReport::Invalid { source, diagnostics, .. } => {
                    num_diagnostics += diagnostics.len();
                    failures.push(diagnostics.format_detailed(source));
                },
            }
        }

        if !failures.is_empty() {
            let num_invalid = reports
                .iter()
                .filter(|report| matches!(report, FileReport::Invalid { .. }))
                .count();
            return CommandResult::failure(format!(
                "{}\n{} {} of {} failed validation with {}.",
                failures.join("\n"),
                output_utils::RED_X,
                num_invalid,
                output_utils::counted(reports.len(), "schema"),
                output_utils::counted(num_diagnostics, "diagnostic"),
            ));
        }

        if self.json {
            return CommandResult::stdout(format_args!("{}", json_exports.join("\n")));
        }
        CommandResult::stdout(format_args!(
            concat!(
                "{} All graphdef schemas validated successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} files with other extensions.\n",
                "  * Validated {} type declarations.\n",
                "  * Validated {} endpoints.",
            ),
            output_utils::GREEN_CHECK,
            reports.len(),
            scan.num_skipped,
            num_types,
            num_endpoints,
        ))
    }
}

impl FileReport {
    fn path(&self) -> &Path {
        match self {
            FileReport::Valid { path, .. } | FileReport::Invalid { path, .. } => path,
        }
    }
}

async fn validate_file(path: PathBuf) -> anyhow::Result<FileReport> {
    let text = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let source_file = SourceFile::new(path.clone(), text);

    let report = match libgraphdef_core::parse(&source_file) {
        Ok(model) => FileReport::Valid {
            path,
            model: Box::new(model),
        },
        Err(diagnostics) => {
            log::debug!(
                "{}: {} diagnostic(s)",
                path.display(),
                diagnostics.len(),
            );
            FileReport::Invalid {
                path,
                source: source_file.text().to_string(),
                diagnostics,
            }
        },
    };
    Ok(report)
}

fn canonicalize(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("failed to resolve {}", path.display()))
}

/// Strips a leading `.` so that `gdef` and `.gdef` both work.
pub(crate) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}

pub(crate) fn has_matching_ext(path: &Path, exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .is_some_and(|ext| exts.contains(&*ext))
}
