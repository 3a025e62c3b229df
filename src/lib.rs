use std::path::PathBuf;
use tool::MAX_JSON_LENGTH;
use tracing::{info, warn};

mod config;
mod error;
mod report;
mod tool;
mod tree;

pub use config::Config;
pub use error::{Error, Result};
pub use report::{Origin, Record, parse};
pub use tool::split_path;
pub use tree::{ConvertOptions, Directory, Entry, Tree, TreeNode};

pub fn convert(text: &str, origin: Origin) -> TreeNode {
    convert_with(text, origin, &ConvertOptions::default())
}

pub fn convert_with(text: &str, origin: Origin, options: &ConvertOptions) -> TreeNode {
    let records = parse(text, origin);
    info!(records = records.len(), %origin, "parsed report");
    Tree::from_records(records).into_node(options)
}

/// Convert `config.input_path` into `config.output_path`.
///
/// Returns `Ok(None)` without writing anything when the input is blank.
pub fn run(config: &Config) -> Result<Option<PathBuf>> {
    let bytes = std::fs::read(&config.input_path).map_err(|source| Error::FileRead {
        path: config.input_path.clone(),
        source,
    })?;
    // Reports may carry file names that are not valid UTF-8.
    let text = String::from_utf8_lossy(&bytes);
    if text.trim().is_empty() {
        info!(input = %config.input_path.display(), "input is empty, nothing to write");
        return Ok(None);
    }

    let tree = convert_with(&text, config.origin, &config.options);
    let json = if config.pretty {
        serde_json::to_string_pretty(&tree)?
    } else {
        serde_json::to_string(&tree)?
    };
    if json.len() > MAX_JSON_LENGTH {
        warn!(
            bytes = json.len(),
            mb = json.len() >> 20,
            "JSON output exceeds the maximum JavaScript string length and may not load in a browser"
        );
    }

    std::fs::write(&config.output_path, json).map_err(|source| Error::FileWrite {
        path: config.output_path.clone(),
        source,
    })?;
    info!(
        leaves = tree.leaf_count(),
        output = %config.output_path.display(),
        "wrote tree"
    );
    Ok(Some(config.output_path.clone()))
}
