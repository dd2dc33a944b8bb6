pub mod cli;
pub mod error;
pub mod header;
pub mod include_matcher;

pub use cli::Args;
pub use error::HeaderError;

use header::Outcome;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub rewritten: usize,
    pub skipped_empty: usize,
}

/// Processes every file in order and stops at the first failure.
pub fn run(args: Args) -> Result<Summary, HeaderError> {
    let pb = ProgressBar::new(args.filenames.len() as u64);
    pb.set_style(ProgressStyle::with_template(
        "{spinner:.green} [{wide_bar:.cyan/blue}] {pos}/{len} {msg}",
    )?);

    let mut summary = Summary::default();
    for path in &args.filenames {
        pb.set_message(path.display().to_string());
        let mut echoed: Vec<u8> = Vec::new();
        let outcome = header::inject(path, &mut echoed);
        pb.suspend(|| io::stdout().lock().write_all(&echoed))
            .map_err(|err| HeaderError::write("<stdout>", err))?;

        match outcome? {
            Outcome::Rewritten => summary.rewritten += 1,
            Outcome::Empty => {
                pb.suspend(|| eprintln!("{}: empty, left unchanged", path.display()));
                summary.skipped_empty += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message(format!(
        "done: {} rewritten, {} empty",
        summary.rewritten, summary.skipped_empty
    ));
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn run_counts_rewritten_and_empty_files() {
        let dir = tempdir().unwrap();
        let headed = dir.path().join("a.h");
        fs::write(&headed, "#include <stdio.h>\n").unwrap();
        let empty = dir.path().join("empty.h");
        fs::write(&empty, "").unwrap();

        let summary = run(Args {
            filenames: vec![headed, empty],
        })
        .unwrap();

        assert_eq!(
            summary,
            Summary {
                rewritten: 1,
                skipped_empty: 1
            }
        );
    }
}
