//! Platform detection and the read-path normalization rule.
//!
//! On Android the resize step reports its output as a `file:/data/...`
//! URI, which the file reader does not accept directly; the prefix must
//! be rewritten to the plain absolute data path. All other platforms
//! consume the resize URI as-is.

/// Platform the workflow is running on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
    Other,
}

impl Platform {
    /// Detect the platform at compile time
    pub fn current() -> Self {
        if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_os = "ios") {
            Platform::Ios
        } else {
            Platform::Other
        }
    }
}

const ANDROID_FILE_PREFIX: &str = "file:/data";
const ANDROID_DATA_ROOT: &str = "/data";

/// Rewrite a resize-output URI into a path the file reader accepts
///
/// Pure string transform. On Android the first occurrence of the
/// `file:/data` prefix becomes `/data`; the prefix is assumed to appear
/// at most once, at the start. Everything else passes through unchanged.
pub fn normalize_read_path(platform: Platform, uri: &str) -> String {
    match platform {
        Platform::Android => uri.replacen(ANDROID_FILE_PREFIX, ANDROID_DATA_ROOT, 1),
        _ => uri.to_string(),
    }
}
