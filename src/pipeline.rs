//! The conversion run: discover problem files, convert each one, write the
//! corpus once at the end.
//!
//! A bad problem file is logged and counted; it never stops the run. Only
//! discovery, encoding and writing the output can fail the run as a whole.

use std::cmp::Ordering;
use std::fs;
use std::iter::Peekable;
use std::path::{Component, Path, PathBuf};
use std::str::Chars;

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::board::Color;
use crate::error::Error;
use crate::output::OutputFormat;
use crate::problem::Problem;

/// Run configuration supplied by the CLI.
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    pub input_root: PathBuf,
    pub output_path: PathBuf,
    /// Overrides the format implied by `output_path`.
    pub format: Option<OutputFormat>,
    /// Extension of problem files; a leading dot is ignored.
    pub extension: String,
    pub max_problems: Option<usize>,
}

/// A problem file that could not be converted.
#[derive(Debug)]
pub struct Failure {
    pub path: PathBuf,
    pub error: Error,
}

#[derive(Debug, Default)]
pub struct ConvertSummary {
    pub converted: usize,
    pub failures: Vec<Failure>,
}

/// Converted problems plus the files that failed, in input order.
#[derive(Debug, Default)]
pub struct Conversion {
    pub problems: Vec<Problem>,
    pub failures: Vec<Failure>,
}

/// Run the full conversion described by `opts` and write the output file.
pub fn convert(opts: &ConvertOptions) -> Result<ConvertSummary> {
    let format = match opts.format {
        Some(format) => format,
        None => OutputFormat::from_path(&opts.output_path)?,
    };

    let paths = find_problem_paths(&opts.input_root, &opts.extension, opts.max_problems)?;
    info!(
        "Found {} problem file(s) under {}",
        paths.len(),
        opts.input_root.display()
    );

    let Conversion { problems, failures } = convert_paths(&paths, &opts.input_root);

    let encoded = format.encode(&problems)?;
    fs::write(&opts.output_path, encoded)
        .with_context(|| format!("failed to write {}", opts.output_path.display()))?;

    Ok(ConvertSummary {
        converted: problems.len(),
        failures,
    })
}

/// Convert every path, canonicalizing each problem to black to play.
pub fn convert_paths(paths: &[PathBuf], root: &Path) -> Conversion {
    let mut conversion = Conversion::default();
    for path in paths {
        match load_problem(path, root) {
            Ok(problem) => {
                if problem.next_player == Color::White {
                    debug!("Swapping colours of {}", problem.name);
                }
                let problem = problem.into_black_to_play();
                debug!(
                    "Converted {} ({}x{}, {} move(s))",
                    problem.name,
                    problem.size,
                    problem.size,
                    problem.tree.depth()
                );
                conversion.problems.push(problem);
            }
            Err(error) => {
                warn!("Failed to load {}: {error}", path.display());
                conversion.failures.push(Failure {
                    path: path.clone(),
                    error,
                });
            }
        }
    }
    conversion
}

/// Read and convert one problem file.
pub fn load_problem(path: &Path, root: &Path) -> std::result::Result<Problem, Error> {
    let json = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Problem::from_json(problem_name(path, root), &json)
}

/// The problem name: the path relative to `root`, extension removed, with `/`
/// separators.
pub fn problem_name(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path).with_extension("");
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Recursively collect files with `extension` under `root`, in natural order,
/// keeping at most `max` of them.
///
/// The extension matches case-insensitively, with or without a leading dot.
pub fn find_problem_paths(root: &Path, extension: &str, max: Option<usize>) -> Result<Vec<PathBuf>> {
    let extension = extension.trim_start_matches('.');
    let mut paths = Vec::new();
    for entry in walkdir::WalkDir::new(root) {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension));
        if !matches {
            continue;
        }
        paths.push(path.to_path_buf());
    }

    paths.sort_by(|a, b| natural_cmp(&a.to_string_lossy(), &b.to_string_lossy()));
    if let Some(max) = max {
        paths.truncate(max);
    }
    Ok(paths)
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    digits
}

/// Compare strings the way a person would: runs of digits compare by numeric
/// value, so `"prob2"` sorts before `"prob10"`.
///
/// Strings that only differ in leading zeros fall back to plain ordering.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();

    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let da = take_digits(&mut ca);
                let db = take_digits(&mut cb);
                let na = da.trim_start_matches('0');
                let nb = db.trim_start_matches('0');
                let ord = na.len().cmp(&nb.len()).then_with(|| na.cmp(nb));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                if x != y {
                    return x.cmp(&y);
                }
                ca.next();
                cb.next();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_cmp_numbers() {
        assert_eq!(natural_cmp("prob2", "prob10"), Ordering::Less);
        assert_eq!(natural_cmp("prob10", "prob2"), Ordering::Greater);
        assert_eq!(natural_cmp("a/9/x", "a/10/a"), Ordering::Less);
        assert_eq!(natural_cmp("abc", "abc"), Ordering::Equal);
        assert_eq!(natural_cmp("ab", "abc"), Ordering::Less);
        assert_eq!(natural_cmp("b1", "a2"), Ordering::Greater);
    }

    #[test]
    fn test_natural_cmp_leading_zeros() {
        assert_eq!(natural_cmp("p007", "p7"), "p007".cmp("p7"));
        assert_eq!(natural_cmp("p007", "p8"), Ordering::Less);
    }

    #[test]
    fn test_natural_sort() {
        let mut names = vec!["Prob0100", "Prob10", "Prob9", "Prob1", "Prob0011"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, vec!["Prob1", "Prob9", "Prob10", "Prob0011", "Prob0100"]);
    }

    #[test]
    fn test_find_problem_paths_extension_forms() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("b.JSON"), "{}").unwrap();
        fs::write(dir.path().join("c.txt"), "").unwrap();

        for ext in ["json", ".json", "JSON"] {
            let paths = find_problem_paths(dir.path(), ext, None).unwrap();
            assert_eq!(paths.len(), 2, "extension {ext:?}");
        }
    }

    #[test]
    fn test_problem_name() {
        let root = Path::new("problems");
        assert_eq!(
            problem_name(Path::new("problems/cho/elementary/Prob0001.json"), root),
            "cho/elementary/Prob0001"
        );
        assert_eq!(problem_name(Path::new("other/x.json"), root), "other/x");
    }
}
