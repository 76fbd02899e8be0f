use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use clap::Parser;
use cmtfix::{DEFAULT_COLUMN_LIMIT, process_stream_with_limit, rewrite_with_limit};
use rayon::prelude::*;

#[derive(Parser)]
#[command(version, about = "Reflow block comments to a column limit")]
struct Cli {
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files")]
    in_place: bool,
    /// Target maximum line width, comment prefix included
    #[arg(long = "columns", default_value_t = DEFAULT_COLUMN_LIMIT)]
    columns: usize,
    /// Source files to reflow
    files: Vec<PathBuf>,
}

fn process_path(path: &Path, columns: usize) -> std::io::Result<String> {
    let content = fs::read_to_string(path)?;
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    Ok(process_stream_with_limit(&lines, columns).join("\n") + "\n")
}

/// Entry point for the command-line tool that reflows block comments.
///
/// With no files, acts as a stdin-to-stdout filter. With files, prints each
/// reflowed file to stdout in argument order, or rewrites them in place when
/// `--in-place` is given. Multiple files are processed in parallel.
///
/// # Examples
///
/// ```sh
/// # Reflow comments in a file and print to stdout
/// cmtfix main.c
///
/// # Reflow comments in place at 72 columns
/// cmtfix --in-place --columns 72 main.c
///
/// # Reflow comments from standard input
/// cat main.c | cmtfix
/// ```
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        let lines: Vec<String> = input.lines().map(str::to_string).collect();
        let fixed = process_stream_with_limit(&lines, cli.columns);
        println!("{}", fixed.join("\n"));
        return Ok(());
    }

    if cli.in_place {
        cli.files
            .par_iter()
            .try_for_each(|path| rewrite_with_limit(path, cli.columns))?;
        return Ok(());
    }

    let outputs = cli
        .files
        .par_iter()
        .map(|path| process_path(path, cli.columns))
        .collect::<std::io::Result<Vec<_>>>()?;
    for output in outputs {
        print!("{output}");
    }
    Ok(())
}
