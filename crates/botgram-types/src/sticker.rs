//! Stickers and sticker sets.

use serde::{Deserialize, Serialize};

use crate::media::PhotoSize;

/// A sticker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sticker {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i64,
    pub height: i64,
    pub is_animated: bool,
    pub is_video: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// Name of the sticker set the sticker belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_name: Option<String>,
    /// Where the mask should be placed, for mask stickers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_position: Option<MaskPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}

/// A sticker set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StickerSet {
    pub name: String,
    pub title: String,
    pub is_animated: bool,
    pub is_video: bool,
    pub contains_masks: bool,
    pub stickers: Vec<Sticker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<PhotoSize>,
}

/// Part of the face relative to which a mask is positioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskPoint {
    Forehead,
    Eyes,
    Mouth,
    Chin,
}

/// Position on faces where a mask should be placed by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskPosition {
    pub point: MaskPoint,
    /// Shift by X-axis in widths of the mask, scaled to the face size.
    pub x_shift: f64,
    /// Shift by Y-axis in heights of the mask, scaled to the face size.
    pub y_shift: f64,
    pub scale: f64,
}
