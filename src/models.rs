use crate::picker::PickerError;
use serde::{Deserialize, Serialize};

/// Target encoding for the resized photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PhotoFormat {
    Jpeg,
    Png,
    Webp,
}

impl PhotoFormat {
    /// File extension used when the built-in resizer writes its output
    pub fn extension(&self) -> &'static str {
        match self {
            PhotoFormat::Jpeg => "jpg",
            PhotoFormat::Png => "png",
            PhotoFormat::Webp => "webp",
        }
    }
}

impl Default for PhotoFormat {
    fn default() -> Self {
        PhotoFormat::Jpeg
    }
}

/// Configuration for one acquisition service instance
///
/// Immutable for the lifetime of the service. Built from caller overrides
/// merged over the defaults, see [`AcquisitionConfig::from_options`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionConfig {
    /// Target resize height in pixels
    pub height: u32,
    /// Target resize width in pixels
    pub width: u32,
    /// Target resize encoding
    pub format: PhotoFormat,
    /// Resize quality, 0-100 (only meaningful for JPEG output)
    pub quality: u8,
    /// Title shown by the native picker
    pub picker_title: String,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            height: 300,
            width: 300,
            format: PhotoFormat::Jpeg,
            quality: 80,
            picker_title: "Select Photo".to_string(),
        }
    }
}

impl AcquisitionConfig {
    /// Merge caller-supplied overrides over the defaults
    ///
    /// Zero dimensions and zero quality count as unset and fall back to
    /// the defaults; quality above 100 is clamped to 100. The merged
    /// config therefore always carries positive dimensions and a quality
    /// in 0-100.
    pub fn from_options(options: AcquisitionOptions) -> Self {
        let defaults = Self::default();
        Self {
            height: options.height.filter(|h| *h > 0).unwrap_or(defaults.height),
            width: options.width.filter(|w| *w > 0).unwrap_or(defaults.width),
            format: options.format.unwrap_or(defaults.format),
            quality: options
                .quality
                .filter(|q| *q > 0)
                .unwrap_or(defaults.quality)
                .min(100),
            picker_title: options.picker_title.unwrap_or(defaults.picker_title),
        }
    }
}

/// Caller-facing override form of [`AcquisitionConfig`]
///
/// Every field is optional; missing fields resolve to the documented
/// defaults (height=300, width=300, format=JPEG, quality=80,
/// picker_title="Select Photo").
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AcquisitionOptions {
    pub height: Option<u32>,
    pub width: Option<u32>,
    pub format: Option<PhotoFormat>,
    pub quality: Option<u8>,
    pub picker_title: Option<String>,
}

impl AcquisitionOptions {
    /// Parse overrides from a JSON document, e.g. `{"height": 512, "format": "PNG"}`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Storage directives passed to the picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageOptions {
    /// Exclude the picked photo from device backups
    pub skip_backup: bool,
    /// Sub-path under the app storage directory
    pub path: String,
}

impl Default for StorageOptions {
    fn default() -> Self {
        Self {
            skip_backup: true,
            path: "images".to_string(),
        }
    }
}

/// Request handed to the picker gateway for one presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerRequest {
    pub title: String,
    pub storage: StorageOptions,
}

impl PickerRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            storage: StorageOptions::default(),
        }
    }
}

/// Result of one picker presentation
///
/// Exactly one variant is produced per user gesture and consumed exactly
/// once by the acquisition service.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerOutcome {
    /// User picked or captured a photo; payload is its raw base64 data
    Selected { data_base64: String },
    /// User dismissed the picker
    Cancelled,
    /// The native picker reported an error
    Failed(PickerError),
    /// User tapped an alternate action button
    CustomAction { button_id: String },
}

/// Reference to the resized image produced by the resize gateway
///
/// Owned for the duration of one workflow run; never retained afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizedImage {
    pub uri: String,
}

/// Displayable reference handed back to the host on success
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayReference {
    pub uri: String,
}

/// Terminal success payload of one acquisition run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionResult {
    /// Base64 of the resized photo bytes, as read back from disk
    pub photo_data_base64: String,
    /// URI of the resized image, suitable for display
    pub display_reference: DisplayReference,
}
