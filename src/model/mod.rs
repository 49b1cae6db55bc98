//! Domain types for advertisements, images, and pool entries
//!
//! The model is deliberately small: advertisements and their images arrive
//! from a catalog source, the pool builder replicates them according to
//! vendor weights, and the selector/scheduler only ever see [`PoolEntry`]
//! values. Weights do not live on the advertisement itself — they come from
//! the vendor weight configuration and are resolved at pool-build time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Placement zone on the page
///
/// Each position owns an independent pool. `TopBanner` is special: its
/// creatives are selected once per slot but rendered with viewport-specific
/// art, so its pool entries are responsive pairs rather than single images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    TopBanner,
    LeftBanner,
    RightBanner,
    Feed,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Position::TopBanner => "top-banner",
            Position::LeftBanner => "left-banner",
            Position::RightBanner => "right-banner",
            Position::Feed => "feed",
        };
        write!(f, "{}", name)
    }
}

/// Viewport class an image asset is cropped for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageType {
    Mobile,
    Desktop,
    Universal,
}

/// A single hosted image asset belonging to an advertisement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvertisementImage {
    pub id: u64,
    pub image_type: ImageType,
    pub image_url: String,
}

/// A sponsor creative as supplied by the catalog
///
/// The catalog source is responsible for filtering records to the requested
/// position and active date window; the pool builder assumes every record it
/// receives is eligible for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advertisement {
    pub id: u64,
    pub vendor_slug: String,
    pub target_url: String,
    pub alt_text: String,
    pub position: Position,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub images: Vec<AdvertisementImage>,
}

impl Advertisement {
    /// First image of the given viewport type, if any
    ///
    /// Vendors are expected to supply at most one image per viewport type;
    /// if they supply more, the first one wins.
    pub fn image_of_type(&self, image_type: ImageType) -> Option<&AdvertisementImage> {
        self.images.iter().find(|img| img.image_type == image_type)
    }
}

/// One creative rendered once but with viewport-appropriate art
///
/// Synthesized for `TopBanner` pools only. At least one of the two variants
/// is present: the builder excludes ads that have neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsiveImagePair {
    pub mobile: Option<AdvertisementImage>,
    pub desktop: Option<AdvertisementImage>,
}

impl ResponsiveImagePair {
    /// Build a pair from an ad's assets, or `None` if neither variant exists
    pub fn from_ad(ad: &Advertisement) -> Option<Self> {
        let mobile = ad.image_of_type(ImageType::Mobile).cloned();
        let desktop = ad.image_of_type(ImageType::Desktop).cloned();
        if mobile.is_none() && desktop.is_none() {
            return None;
        }
        Some(Self { mobile, desktop })
    }
}

/// What a pool entry displays: a single image or a responsive pair
///
/// An explicit tagged variant; every consumer matches exhaustively rather
/// than shape-checking at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Displayable {
    Single(AdvertisementImage),
    Responsive(ResponsiveImagePair),
}

impl Displayable {
    /// URL of the asset preferred for a desktop viewport
    ///
    /// Falls back to the mobile variant when a responsive pair has no
    /// desktop crop.
    pub fn desktop_url(&self) -> Option<&str> {
        match self {
            Displayable::Single(img) => Some(img.image_url.as_str()),
            Displayable::Responsive(pair) => pair
                .desktop
                .as_ref()
                .or(pair.mobile.as_ref())
                .map(|img| img.image_url.as_str()),
        }
    }
}

/// One selectable display unit in a pool
///
/// The parent advertisement is shared: a vendor with weight `w` contributes
/// `w` replicated entries per displayable, all pointing at the same ad.
#[derive(Debug, Clone)]
pub struct PoolEntry {
    pub displayable: Displayable,
    pub ad: Arc<Advertisement>,
}


#[cfg(test)]
mod tests {
    use super::fixtures::{ad, image};
    use super::*;

    #[test]
    fn test_image_of_type_first_wins() {
        let a = ad(
            1,
            "acme",
            Position::TopBanner,
            vec![
                image(10, ImageType::Mobile),
                image(11, ImageType::Mobile),
                image(12, ImageType::Desktop),
            ],
        );

        assert_eq!(a.image_of_type(ImageType::Mobile).unwrap().id, 10);
        assert_eq!(a.image_of_type(ImageType::Desktop).unwrap().id, 12);
        assert!(a.image_of_type(ImageType::Universal).is_none());
    }

    #[test]
    fn test_responsive_pair_both_variants() {
        let a = ad(
            1,
            "acme",
            Position::TopBanner,
            vec![image(10, ImageType::Mobile), image(11, ImageType::Desktop)],
        );

        let pair = ResponsiveImagePair::from_ad(&a).unwrap();
        assert_eq!(pair.mobile.unwrap().id, 10);
        assert_eq!(pair.desktop.unwrap().id, 11);
    }

    #[test]
    fn test_responsive_pair_mobile_only() {
        let a = ad(1, "acme", Position::TopBanner, vec![image(10, ImageType::Mobile)]);

        let pair = ResponsiveImagePair::from_ad(&a).unwrap();
        assert!(pair.mobile.is_some());
        assert!(pair.desktop.is_none());
    }

    #[test]
    fn test_responsive_pair_no_usable_images() {
        // Universal images do not participate in responsive pairing
        let a = ad(1, "acme", Position::TopBanner, vec![image(10, ImageType::Universal)]);
        assert!(ResponsiveImagePair::from_ad(&a).is_none());

        let bare = ad(2, "acme", Position::TopBanner, vec![]);
        assert!(ResponsiveImagePair::from_ad(&bare).is_none());
    }

    #[test]
    fn test_displayable_desktop_url_fallback() {
        let pair = Displayable::Responsive(ResponsiveImagePair {
            mobile: Some(image(10, ImageType::Mobile)),
            desktop: None,
        });
        assert_eq!(pair.desktop_url(), Some("https://cdn.example.com/10.png"));

        let single = Displayable::Single(image(20, ImageType::Universal));
        assert_eq!(single.desktop_url(), Some("https://cdn.example.com/20.png"));
    }

    #[test]
    fn test_position_serde_wire_names() {
        let json = serde_json::to_string(&Position::TopBanner).unwrap();
        assert_eq!(json, "\"TOP_BANNER\"");

        let parsed: Position = serde_json::from_str("\"LEFT_BANNER\"").unwrap();
        assert_eq!(parsed, Position::LeftBanner);
    }
}
