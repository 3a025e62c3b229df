use crate::{report::Origin, tree::ConvertOptions};
use std::path::{Path, PathBuf};

/// Everything a single conversion run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub origin: Origin,
    pub options: ConvertOptions,
    pub pretty: bool,
}

impl Config {
    /// `<base>.<origin>` in, `<base>.json` out.
    pub fn from_base(base: impl AsRef<Path>, origin: Origin) -> Config {
        let base = base.as_ref();
        Config {
            input_path: with_suffix(base, origin.extension()),
            output_path: with_suffix(base, "json"),
            origin,
            options: ConvertOptions::default(),
            pretty: false,
        }
    }
}

// Appends rather than replacing, so `report.v2` becomes `report.v2.wc`.
fn with_suffix(base: &Path, ext: &str) -> PathBuf {
    let mut path = base.as_os_str().to_owned();
    path.push(".");
    path.push(ext);
    PathBuf::from(path)
}
