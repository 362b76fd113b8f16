//! # Photo Acquire
//!
//! An embeddable photo acquisition workflow: the host triggers a run, the
//! user picks or captures a photo, the photo is resized, and the host
//! receives the result as a base64 string plus a displayable URI.
//!
//! This crate provides:
//! - The acquisition service sequencing one run per trigger
//! - Gateway traits for the three external capabilities (picker, resizer,
//!   file reader)
//! - Built-in resize and read gateways backed by the `image` crate and
//!   `tokio::fs`
//! - Platform-specific read-path normalization for Android resize output
//!
//! ## Platform Separation
//!
//! The native picker UI is not implemented here. Hosts supply their own
//! [`PickerGateway`]; platforms without one can fall back to
//! [`UnsupportedPicker`].
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use photo_acquire::{
//!     AcquisitionConfig, AcquisitionOutcome, Base64FileReader, ImageResizer,
//!     PhotoAcquisitionService,
//! };
//! use std::sync::Arc;
//!
//! let service = PhotoAcquisitionService::new(
//!     AcquisitionConfig::default(),
//!     Arc::new(MyNativePicker::new()),
//!     Arc::new(ImageResizer::new("/path/to/storage")),
//!     Arc::new(Base64FileReader),
//! );
//!
//! match service.run_acquisition().await {
//!     AcquisitionOutcome::Succeeded(result) => display(result),
//!     AcquisitionOutcome::Cancelled(_) => {}
//!     AcquisitionOutcome::CustomAction(button_id) => handle(button_id),
//!     AcquisitionOutcome::Failed(e) => log::error!("acquisition failed: {}", e),
//! }
//! ```

pub mod gateway;
pub mod models;
pub mod picker;
pub mod platform;
pub mod reader;
pub mod resize;
pub mod service;

pub use gateway::{FileReadGateway, GatewayError, PickerGateway, ResizeGateway};
pub use models::{
    AcquisitionConfig, AcquisitionOptions, AcquisitionResult, DisplayReference, PhotoFormat,
    PickerOutcome, PickerRequest, ResizedImage, StorageOptions,
};
pub use picker::{PickerError, UnsupportedPicker};
pub use platform::{normalize_read_path, Platform};
pub use reader::Base64FileReader;
pub use resize::ImageResizer;
pub use service::{
    AcquisitionError, AcquisitionHooks, AcquisitionOutcome, PhotoAcquisitionService,
    CANCEL_MESSAGE,
};
