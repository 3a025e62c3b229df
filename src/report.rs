//! Parsing of `cloc` and `wc` line-count reports into flat records.

use crate::tool::{TOTAL_NAME, split_path};
use std::fmt;
use tracing::debug;

const LANGUAGE_COLUMN: usize = 0;
const PATH_COLUMN: usize = 1;
const CODE_COLUMN: usize = 4;

/// Which tool produced the report text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Origin {
    /// `cloc --by-file --csv` output
    Cloc,
    /// `wc -l` output
    #[default]
    Wc,
}

impl Origin {
    /// File extension conventionally used for reports of this origin
    pub fn extension(self) -> &'static str {
        match self {
            Origin::Cloc => "cloc",
            Origin::Wc => "wc",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// One file entry of a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub path: Vec<String>,
    pub size: u64,
    pub language: Option<String>,
}

/// Parse raw report text into records, skipping malformed rows.
pub fn parse(text: &str, origin: Origin) -> Vec<Record> {
    match origin {
        Origin::Cloc => parse_cloc(text),
        Origin::Wc => parse_wc(text),
    }
}

fn parse_cloc(text: &str) -> Vec<Record> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    rdr.records()
        .flat_map(|i| i.ok())
        .filter_map(|row| {
            let path = row.get(PATH_COLUMN).unwrap_or_default();
            if path.is_empty() {
                debug!(?row, "skipping cloc row without a path");
                return None;
            }
            let Some(size) = row
                .get(CODE_COLUMN)
                .and_then(|code| code.trim().parse::<u64>().ok())
            else {
                debug!(path, "skipping cloc row with an invalid code count");
                return None;
            };
            let language = row
                .get(LANGUAGE_COLUMN)
                .filter(|lang| !lang.is_empty())
                .map(String::from);
            Some(Record {
                path: split_path(path),
                size,
                language,
            })
        })
        .collect()
}

fn parse_wc(text: &str) -> Vec<Record> {
    text.lines().filter_map(parse_wc_line).collect()
}

fn parse_wc_line(line: &str) -> Option<Record> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (count, name) = match line.split_once(char::is_whitespace) {
        Some((count, name)) => (count, name.trim()),
        None => (line, ""),
    };
    if name.is_empty() || name == TOTAL_NAME {
        debug!(line, "skipping wc line without a file name");
        return None;
    }
    let Ok(size) = count.parse::<u64>() else {
        debug!(line, "skipping wc line with an invalid count");
        return None;
    };
    Some(Record {
        path: split_path(name),
        size,
        language: None,
    })
}
