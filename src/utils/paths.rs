//! Path normalization

pub fn normalize_path(path: &str) -> String {
    // Report paths always use forward slashes
    path.replace('\\', "/")
}
