pub const ROOT_NAME: &str = "root";
pub const TOTAL_NAME: &str = "total";

/// Practical upper bound for a JavaScript string (V8 uses 0x1fffffe8).
/// The output is loaded by a browser front end, so anything above this
/// will not parse there.
pub const MAX_JSON_LENGTH: usize = 0x1fff_ffe8;

pub fn is_path_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Split a report path into segments on `/` or `\`.
///
/// Empty segments are kept: `/a/b` yields `["", "a", "b"]` and `a//b`
/// yields `["a", "", "b"]`.
pub fn split_path(path: &str) -> Vec<String> {
    path.split(is_path_separator).map(String::from).collect()
}

pub fn join_path(segments: &[String]) -> String {
    segments.join("/")
}
