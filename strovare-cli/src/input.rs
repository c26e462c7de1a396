//! Plan acquisition: file, piped stdin, or interactive prompts.

use std::fs;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Raised when the plan source cannot be read.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("plan file {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("standard input: {0}")]
    Stdin(#[from] io::Error),
}

/// Reads the full plan text from `path`, falling back to stdin.
///
/// A terminal on stdin switches to interactive prompting; piped input is
/// read to EOF unchanged. File errors carry the offending path.
pub fn read_plan_text(path: Option<&Path>) -> Result<String, InputError> {
    match path {
        Some(path) => {
            debug!("reading plan from {}", path.display());
            fs::read_to_string(path).map_err(|source| InputError::File {
                path: path.to_path_buf(),
                source,
            })
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                let mut lines = stdin.lock().lines();
                collect_plan(&mut lines)
            } else {
                let mut text = String::new();
                stdin.lock().read_to_string(&mut text)?;
                Ok(text)
            }
        }
    }
}

/// Collects a plan interactively: the grid vertex first, then rover and
/// instruction line pairs until an empty rover line ends input.
///
/// Prompts go to stderr so a redirected stdout still carries only the
/// report. EOF at any prompt keeps the text gathered so far and never
/// synthesizes a line, so the collected text runs through the normal
/// parser with exactly the errors the same text piped in would produce.
fn collect_plan(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<String, InputError> {
    let mut text = String::new();

    let grid = match prompt_line(lines, "grid vertex (max_x max_y): ")? {
        Some(line) => line,
        None => return Ok(text),
    };
    text.push_str(&grid);
    text.push('\n');

    loop {
        let rover = match prompt_line(lines, "rover start (x y heading, empty line to finish): ")? {
            Some(line) if !line.trim().is_empty() => line,
            _ => break,
        };
        text.push_str(&rover);
        text.push('\n');

        let instructions = match prompt_line(lines, "instructions (L/R/M): ")? {
            Some(line) => line,
            None => break,
        };
        text.push_str(&instructions);
        text.push('\n');
    }

    Ok(text)
}

/// `None` means EOF on the line source.
fn prompt_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<Option<String>, InputError> {
    eprint!("{prompt}");
    io::stderr().flush()?;
    Ok(lines.next().transpose()?)
}

#[cfg(test)]
mod tests {
    use strovare_protocol::{PlanParseError, PlanParser};

    use super::*;

    fn collected(lines: &[&str]) -> String {
        let mut feed = lines.iter().map(|line| Ok(line.to_string()));
        collect_plan(&mut feed).unwrap()
    }

    #[test]
    fn missing_plan_file_names_the_path() {
        let err = match read_plan_text(Some(Path::new("no/such/plan.txt"))) {
            Err(err) => err,
            Ok(_) => panic!("reading a missing file must fail"),
        };
        assert!(
            matches!(&err, InputError::File { source, .. } if source.kind() == io::ErrorKind::NotFound)
        );
        assert!(err.to_string().contains("no/such/plan.txt"));
    }

    #[test]
    fn reads_plan_files_verbatim() {
        let path = std::env::temp_dir().join("strovare-input-plan.txt");
        fs::write(&path, "5 5\n1 2 N\nLM\n").unwrap();
        let text = read_plan_text(Some(path.as_path())).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(text, "5 5\n1 2 N\nLM\n");
    }

    #[test]
    fn prompted_pairs_collect_until_an_empty_rover_line() {
        let text = collected(&["5 5", "1 2 N", "LMLM", ""]);
        assert_eq!(text, "5 5\n1 2 N\nLMLM\n");
        PlanParser::new().parse(&text).unwrap();
    }

    #[test]
    fn eof_mid_pair_surfaces_the_same_error_as_piped_input() {
        let text = collected(&["5 5", "1 2 N"]);
        assert_eq!(text, "5 5\n1 2 N\n");
        assert_eq!(
            PlanParser::new().parse(&text),
            Err(PlanParseError::MissingInstructionLine("1 2 N".to_string()))
        );
    }

    #[test]
    fn eof_before_any_input_collects_nothing() {
        let text = collected(&[]);
        assert_eq!(text, "");
        assert!(matches!(
            PlanParser::new().parse(&text),
            Err(PlanParseError::MalformedGridLine(_))
        ));
    }
}
