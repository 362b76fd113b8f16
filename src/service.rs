//! The photo acquisition service: one run per trigger, sequencing the
//! picker, resizer, and reader gateways and reporting a single tagged
//! outcome.

use crate::gateway::{FileReadGateway, GatewayError, PickerGateway, ResizeGateway};
use crate::models::{
    AcquisitionConfig, AcquisitionResult, DisplayReference, PickerOutcome, PickerRequest,
    ResizedImage,
};
use crate::picker::PickerError;
use crate::platform::{normalize_read_path, Platform};
use std::sync::Arc;

/// Message reported when the user dismisses the picker
pub const CANCEL_MESSAGE: &str = "User cancelled image picker";

/// Error type for acquisition runs
#[derive(Debug)]
pub enum AcquisitionError {
    Picker(PickerError),
    Resize(GatewayError),
    Read(GatewayError),
}

impl std::fmt::Display for AcquisitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AcquisitionError::Picker(e) => write!(f, "Picker error: {}", e),
            AcquisitionError::Resize(e) => write!(f, "Resize error: {}", e),
            AcquisitionError::Read(e) => write!(f, "Read error: {}", e),
        }
    }
}

impl std::error::Error for AcquisitionError {}

impl From<PickerError> for AcquisitionError {
    fn from(err: PickerError) -> Self {
        AcquisitionError::Picker(err)
    }
}

/// Terminal outcome of one acquisition run
///
/// Exactly one variant per run; the host pattern-matches instead of
/// registering per-outcome callbacks.
#[derive(Debug)]
pub enum AcquisitionOutcome {
    /// User dismissed the picker; payload is [`CANCEL_MESSAGE`]
    Cancelled(String),
    /// The picker, resizer, or reader failed
    Failed(AcquisitionError),
    /// User tapped an alternate action button; payload is the button id
    CustomAction(String),
    /// Full workflow success
    Succeeded(AcquisitionResult),
}

type StartHook = Box<dyn Fn() + Send + Sync>;
type ResponseHook = Box<dyn Fn(&PickerOutcome) + Send + Sync>;
type ResizedImageHook = Box<dyn Fn(&ResizedImage) + Send + Sync>;
type AfterUpdateHook = Box<dyn Fn(&AcquisitionConfig) + Send + Sync>;

/// Optional progress hooks fired during a run
///
/// Every slot is optional; an unset slot is a no-op. Terminal outcomes
/// are not hooks, they are the return value of
/// [`PhotoAcquisitionService::run_acquisition`].
#[derive(Default)]
pub struct AcquisitionHooks {
    /// Fired when a run starts, before the picker is presented
    pub on_start: Option<StartHook>,
    /// Fired with the raw picker outcome, before any branching
    pub on_response: Option<ResponseHook>,
    /// Fired when the resized image is ready, before the read step
    pub on_resized_image: Option<ResizedImageHook>,
    /// Fired once per run after the outcome settles, with the config snapshot
    pub on_after_update: Option<AfterUpdateHook>,
}

/// Sequences the photo acquisition workflow
///
/// Construction takes the immutable [`AcquisitionConfig`] and the three
/// gateway handles. The platform is detected at construction and only
/// affects the read-path normalization step.
pub struct PhotoAcquisitionService {
    config: AcquisitionConfig,
    platform: Platform,
    picker: Arc<dyn PickerGateway>,
    resizer: Arc<dyn ResizeGateway>,
    reader: Arc<dyn FileReadGateway>,
    hooks: AcquisitionHooks,
}

impl PhotoAcquisitionService {
    pub fn new(
        config: AcquisitionConfig,
        picker: Arc<dyn PickerGateway>,
        resizer: Arc<dyn ResizeGateway>,
        reader: Arc<dyn FileReadGateway>,
    ) -> Self {
        Self {
            config,
            platform: Platform::current(),
            picker,
            resizer,
            reader,
            hooks: AcquisitionHooks::default(),
        }
    }

    /// Install progress hooks
    pub fn with_hooks(mut self, hooks: AcquisitionHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Override the detected platform (path-normalization behavior)
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn config(&self) -> &AcquisitionConfig {
        &self.config
    }

    /// Run one acquisition workflow to a terminal outcome
    ///
    /// Steps: present the picker, resize the selected photo, normalize
    /// the resize URI, read the result back as base64. Each gateway call
    /// is a suspension point; between them the caller's executor is free.
    ///
    /// There is no in-flight guard, timeout, or cancellation primitive:
    /// overlapping calls on the same service run as fully independent
    /// workflows sharing only the read-only config, and their hook
    /// invocations may interleave with no defined relative order.
    pub async fn run_acquisition(&self) -> AcquisitionOutcome {
        let outcome = self.run_inner().await;
        if let Some(hook) = &self.hooks.on_after_update {
            hook(&self.config);
        }
        outcome
    }

    async fn run_inner(&self) -> AcquisitionOutcome {
        if let Some(hook) = &self.hooks.on_start {
            hook();
        }

        let request = PickerRequest::new(self.config.picker_title.clone());
        log::debug!("presenting picker: {}", request.title);
        let response = self.picker.present(&request).await;

        // The raw outcome is reported before any branching
        if let Some(hook) = &self.hooks.on_response {
            hook(&response);
        }

        let data_base64 = match response {
            PickerOutcome::Cancelled => {
                log::debug!("picker cancelled by user");
                return AcquisitionOutcome::Cancelled(CANCEL_MESSAGE.to_string());
            }
            PickerOutcome::Failed(e) => {
                log::warn!("picker failed: {}", e);
                return AcquisitionOutcome::Failed(AcquisitionError::Picker(e));
            }
            PickerOutcome::CustomAction { button_id } => {
                log::debug!("custom picker button tapped: {}", button_id);
                return AcquisitionOutcome::CustomAction(button_id);
            }
            PickerOutcome::Selected { data_base64 } => data_base64,
        };

        // The picker hands back JPEG-tagged base64 regardless of the
        // configured output format
        let data_uri = format!("data:image/jpeg;base64,{}", data_base64);

        let resized = match self
            .resizer
            .resize(
                &data_uri,
                self.config.height,
                self.config.width,
                self.config.format,
                self.config.quality,
            )
            .await
        {
            Ok(resized) => resized,
            Err(e) => {
                log::error!("resize failed: {}", e);
                return AcquisitionOutcome::Failed(AcquisitionError::Resize(e));
            }
        };

        if let Some(hook) = &self.hooks.on_resized_image {
            hook(&resized);
        }

        let read_path = normalize_read_path(self.platform, &resized.uri);
        log::debug!("reading resized image from {}", read_path);

        let photo_data_base64 = match self.reader.read_as_base64(&read_path).await {
            Ok(data) => data,
            Err(e) => {
                log::error!("read-back failed: {}", e);
                return AcquisitionOutcome::Failed(AcquisitionError::Read(e));
            }
        };

        AcquisitionOutcome::Succeeded(AcquisitionResult {
            photo_data_base64,
            display_reference: DisplayReference { uri: resized.uri },
        })
    }
}
