//! Product and image metadata supplied by the caller.

use serde::{Deserialize, Serialize};

/// The kind of product being advertised.
///
/// Drives prompt construction for every stage; a closed set so downstream
/// consumers can match exhaustively.
///
/// # Examples
///
/// ```
/// use reelcraft_core::ProductType;
///
/// assert_eq!(format!("{}", ProductType::Saas), "saas");
/// assert_eq!(format!("{}", ProductType::MobileApp), "mobile_app");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProductType {
    /// Software-as-a-service product.
    Saas,
    /// Mobile application.
    MobileApp,
    /// Online store or storefront product.
    Ecommerce,
    /// Service business (consulting, bookings, etc.).
    Service,
    /// Physical good.
    PhysicalProduct,
    /// Online course or educational offering.
    Course,
    /// Agency or studio.
    Agency,
}

/// The kind of a caller-provided image.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ImageKind {
    /// Product UI screenshot.
    Screenshot,
    /// Brand logo.
    Logo,
    /// Photograph.
    Photo,
    /// Illustration or rendered graphic.
    Graphic,
    /// Small icon asset.
    Icon,
    /// Untagged or unrecognized image.
    Unknown,
}

/// A caller-provided image with metadata.
///
/// Stages 1 and 2 read only `id`, `kind`, and `description`. The `reference`
/// payload is opaque to the pipeline: it is passed through untouched to
/// stage-3 prompt construction and never inspected or decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    /// Caller-assigned identifier, referenced by scene image placements.
    pub id: String,
    /// What the image depicts.
    pub kind: ImageKind,
    /// Optional caller-supplied description.
    pub description: Option<String>,
    /// Opaque reference payload (e.g., a URL or encoded binary handle).
    pub reference: Option<String>,
}

impl ImageAsset {
    /// Create an asset with metadata only (no reference payload).
    ///
    /// # Examples
    ///
    /// ```
    /// use reelcraft_core::{ImageAsset, ImageKind};
    ///
    /// let asset = ImageAsset::new("dashboard", ImageKind::Screenshot);
    /// assert!(asset.reference.is_none());
    /// ```
    pub fn new(id: impl Into<String>, kind: ImageKind) -> Self {
        Self {
            id: id.into(),
            kind,
            description: None,
            reference: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach an opaque reference payload.
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}
