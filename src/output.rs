//! Output encoders for the converted corpus.
//!
//! - JSON: one document, `{"problems": [{"name", "board", "tree"}, ...]}`.
//! - SQL: a transaction of `INSERT OR REPLACE` statements into `tsumego`,
//!   with the tree stored as JSON text. Re-running the script over an
//!   updated corpus replaces rows by name.
//!
//! The encoder is chosen from the output path's extension unless a format is
//! given explicitly.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::SQL_TABLE;
use crate::error::{Error, Result};
use crate::problem::{Problem, ProblemRecord};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Sql,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "sql" => Ok(OutputFormat::Sql),
            _ => Err(Error::UnrecognizedOutputFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl OutputFormat {
    /// Pick the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        ext.parse().map_err(|_| Error::UnrecognizedOutputFormat {
            format: path.display().to_string(),
        })
    }

    pub fn encode(self, problems: &[Problem]) -> Result<String> {
        match self {
            OutputFormat::Json => encode_json(problems),
            OutputFormat::Sql => encode_sql(problems),
        }
    }
}

/// The JSON output document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    pub problems: Vec<ProblemRecord>,
}

impl Corpus {
    pub fn from_problems(problems: &[Problem]) -> Self {
        Corpus {
            problems: problems.iter().map(Problem::to_record).collect(),
        }
    }
}

pub fn encode_json(problems: &[Problem]) -> Result<String> {
    Ok(serde_json::to_string(&Corpus::from_problems(problems))?)
}

pub fn decode_json(json: &str) -> Result<Corpus> {
    Ok(serde_json::from_str(json)?)
}

/// Quote a string as an SQLite literal, doubling embedded single quotes.
///
/// NUL cannot appear inside a literal, so it is rejected.
fn sql_literal(column: &str, value: &str) -> Result<String> {
    if value.contains('\0') {
        return Err(Error::UnencodableSqlText {
            column: column.to_string(),
            reason: "contains a NUL character".to_string(),
        });
    }
    Ok(format!("'{}'", value.replace('\'', "''")))
}

pub fn encode_sql(problems: &[Problem]) -> Result<String> {
    let mut out = String::from("BEGIN TRANSACTION;\n");
    out.push_str(&format!(
        "CREATE TABLE IF NOT EXISTS {SQL_TABLE} (\
         id INTEGER PRIMARY KEY, \
         name TEXT NOT NULL UNIQUE, \
         board TEXT NOT NULL, \
         tree TEXT NOT NULL);\n"
    ));

    for record in problems.iter().map(Problem::to_record) {
        let tree = serde_json::to_string(&record.tree)?;
        out.push_str(&format!(
            "INSERT OR REPLACE INTO {SQL_TABLE} (name, board, tree) VALUES ({}, {}, {});\n",
            sql_literal("name", &record.name)?,
            sql_literal("board", &record.board)?,
            sql_literal("tree", &tree)?,
        ));
    }

    out.push_str("COMMIT;\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::InputRecord;
    use serde_json::json;

    fn problem(name: &str, player: &str) -> Problem {
        let input: InputRecord = serde_json::from_value(json!({
            "SZ": "3",
            "AB": ["aa"],
            "AW": ["bb"],
            "SOL": [[player, "cc"]],
        }))
        .unwrap();
        Problem::from_input(name, &input).unwrap()
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OutputFormat::from_path(Path::new("out/all.json")).unwrap(),
            OutputFormat::Json
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("all.SQL")).unwrap(),
            OutputFormat::Sql
        );
        for bad in ["all.csv", "all", "json"] {
            assert!(matches!(
                OutputFormat::from_path(Path::new(bad)),
                Err(Error::UnrecognizedOutputFormat { .. })
            ));
        }
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("Json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_encode_json_shape() {
        let json = encode_json(&[problem("a/1", "B")]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            json!({"problems": [{"name": "a/1", "board": "b\nb..\n.w.\n...", "tree": {"C3": "win"}}]})
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let problems = vec![problem("a/1", "B"), problem("a/2", "W").into_black_to_play()];
        let corpus = decode_json(&encode_json(&problems).unwrap()).unwrap();
        assert_eq!(corpus, Corpus::from_problems(&problems));
        for (record, original) in corpus.problems.iter().zip(&problems) {
            assert_eq!(&Problem::from_record(record).unwrap(), original);
        }
    }

    #[test]
    fn test_encode_json_empty() {
        assert_eq!(encode_json(&[]).unwrap(), r#"{"problems":[]}"#);
    }

    #[test]
    fn test_encode_sql() {
        let sql = encode_sql(&[problem("a/1", "B")]).unwrap();
        let lines: Vec<&str> = sql.lines().collect();
        assert_eq!(lines.first(), Some(&"BEGIN TRANSACTION;"));
        assert!(lines[1].starts_with("CREATE TABLE IF NOT EXISTS tsumego ("));
        assert!(lines[1].contains("name TEXT NOT NULL UNIQUE"));
        assert_eq!(
            lines[2],
            r#"INSERT OR REPLACE INTO tsumego (name, board, tree) VALUES ('a/1', 'b"#
        );
        assert_eq!(lines.last(), Some(&"COMMIT;"));
        assert!(sql.ends_with("COMMIT;\n"));
        assert!(sql.contains("'{\"C3\":\"win\"}');\nCOMMIT;"));
    }

    #[test]
    fn test_sql_escapes_quotes() {
        let sql = encode_sql(&[problem("o'neil's \"set\"", "B")]).unwrap();
        assert!(sql.contains("VALUES ('o''neil''s \"set\"', "));
    }

    #[test]
    fn test_sql_rejects_nul() {
        let err = encode_sql(&[problem("bad\0name", "B")]).unwrap_err();
        assert!(matches!(err, Error::UnencodableSqlText { column, .. } if column == "name"));
    }
}
