use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use super::CmdResult;
use mdlist::list::{self, NormalizeOutput, RewriteFileOutput};
use mdlist::utils::io;
use mdlist::{Error, Result};

#[derive(Args)]
pub struct SortArgs {
    /// Input files, concatenated in argument order (reads stdin when omitted)
    pub files: Vec<PathBuf>,

    /// Rewrite the input files in place instead of printing to stdout
    #[arg(long)]
    pub write: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteOutput {
    pub files: Vec<RewriteFileOutput>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "command")]
pub enum SortOutput {
    Normalize(NormalizeOutput),

    Rewrite(RewriteOutput),
}

pub fn run(args: SortArgs) -> CmdResult<SortOutput> {
    if args.write {
        if args.files.is_empty() {
            return Err(Error::validation_invalid_argument(
                "files",
                "--write requires at least one file argument",
                None,
                None,
            )
            .with_hint("Pass the files to rewrite: mdlist --write CHANGELOG.md"));
        }

        let mut files = Vec::new();
        for path in &args.files {
            files.push(list::rewrite_file(path)?);
        }
        return Ok((SortOutput::Rewrite(RewriteOutput { files }), 0));
    }

    let input = read_input(&args.files)?;
    Ok((SortOutput::Normalize(list::normalize_stream(&input)), 0))
}

/// Standard multi-file filter semantics: named files concatenated in
/// argument order, stdin when no files are named.
fn read_input(files: &[PathBuf]) -> Result<String> {
    if files.is_empty() {
        return io::read_stdin("sort list");
    }

    let mut buf = String::new();
    for path in files {
        buf.push_str(&io::read_file(path, "sort list")?);
    }
    Ok(buf)
}
