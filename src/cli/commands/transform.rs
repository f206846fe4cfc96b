use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;

use super::TransformContext;
use crate::{
    cli::{ExitStatus, FAILURE_MARK, SUCCESS_MARK, args::TransformCommand},
    core::{file_scanner::scan_files, transform::TransformOutput},
};

/// Totals over one transform run.
#[derive(Debug, Default)]
struct TransformSummary {
    call_sites: usize,
    files_changed: usize,
    files_failed: usize,
}

pub fn transform(cmd: TransformCommand) -> Result<ExitStatus> {
    let context = TransformContext::new(&cmd.common)?;
    let files = collect_files(&context, &cmd.paths, cmd.common.verbose)?;
    tracing::debug!(count = files.len(), "transforming files");

    // Each file gets its own parser and visitor, nothing is shared
    let results: Vec<(PathBuf, Result<TransformOutput>)> = files
        .into_par_iter()
        .map(|file| {
            let output = context.transform_file(&file);
            (file, output)
        })
        .collect();

    let mut summary = TransformSummary::default();
    for (file, result) in results {
        let display = display_path(&file, &context.working_dir);
        let output = match result {
            Ok(output) => output,
            Err(err) => {
                summary.files_failed += 1;
                eprintln!("{} {:#}", "error:".bold().red(), err);
                continue;
            }
        };
        if !output.is_changed() {
            continue;
        }

        if cmd.apply
            && let Err(err) = fs::write(&file, &output.code)
                .with_context(|| format!("Failed to write file: {}", display))
        {
            summary.files_failed += 1;
            eprintln!("{} {:#}", "error:".bold().red(), err);
            continue;
        }

        println!("{}", display.bold());
        for injection in &output.injections {
            println!("  {} {}:{}", "+".green(), injection.path, injection.line);
        }
        summary.call_sites += output.injections.len();
        summary.files_changed += 1;
    }

    print_summary(&summary, cmd.apply);

    Ok(ExitStatus::from_failed_files(summary.files_failed))
}

/// Resolve the files to process: explicit paths, or the config includes.
fn collect_files(
    context: &TransformContext,
    paths: &[PathBuf],
    verbose: bool,
) -> Result<Vec<PathBuf>> {
    let config = &context.config;
    if paths.is_empty() {
        let scan = scan_files(
            context.base_dir(),
            &config.includes,
            &config.ignores,
            &config.extensions,
            verbose,
        );
        return Ok(scan.files.into_iter().collect());
    }

    let mut files = BTreeSet::new();
    for path in paths {
        let full_path = context.working_dir.join(path);
        if !full_path.exists() {
            anyhow::bail!("Path does not exist: {}", path.display());
        }
        if full_path.is_file() {
            files.insert(full_path);
            continue;
        }
        let scan = scan_files(
            &context.working_dir,
            &[path.to_string_lossy().into_owned()],
            &config.ignores,
            &config.extensions,
            verbose,
        );
        files.extend(scan.files);
    }

    Ok(files.into_iter().collect())
}

fn display_path(file: &Path, working_dir: &Path) -> String {
    file.strip_prefix(working_dir)
        .unwrap_or(file)
        .display()
        .to_string()
}

fn print_summary(summary: &TransformSummary, apply: bool) {
    if summary.files_failed > 0 {
        eprintln!(
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} file(s) could not be transformed", summary.files_failed).red()
        );
    }

    if summary.call_sites == 0 {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            "No Log.traceable() calls to rewrite".green()
        );
    } else if apply {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Rewrote {} call site(s) in {} file(s)",
                summary.call_sites, summary.files_changed
            )
            .green()
        );
    } else {
        println!(
            "Would rewrite {} call site(s) in {} file(s). Run with --apply to write changes.",
            summary.call_sites, summary.files_changed
        );
    }
}
