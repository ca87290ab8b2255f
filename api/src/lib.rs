//! Wire contract between the OCR backend and the MenuSnap UI.
//!
//! The backend answers a menu scan with a [`ResultSet`]: a count, the OCR
//! wall time, and the recognized items. Everything here is read-only input
//! for the UI crate; nothing is mutated after decoding.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Bundled scan result used by the host shells' "try the sample" flow.
const SAMPLE_JSON: &str = include_str!("../fixtures/sample.json");

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("failed to decode result set: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Complete OCR output for one scanned menu.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub dishes_found: u32,
    /// Seconds spent in OCR on the backend.
    #[serde(default)]
    pub ocr_time: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub menu_with_images: Vec<MenuItem>,
}

impl ResultSet {
    pub fn from_json(raw: &str) -> Result<Self, ApiError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn sample() -> Result<Self, ApiError> {
        Self::from_json(SAMPLE_JSON)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.menu_with_images
    }

    pub fn is_empty(&self) -> bool {
        self.menu_with_images.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuItem {
    pub dish: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Language code -> localized dish name.
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub translations: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

impl MenuItem {
    pub fn new(dish: impl Into<String>) -> Self {
        Self {
            dish: dish.into(),
            ..Self::default()
        }
    }

    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_translation(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.translations.insert(code.into(), name.into());
        self
    }

    /// Candidate sources in load priority order.
    pub fn candidates(&self) -> ImageCandidates {
        self.image
            .as_ref()
            .map(ImageRef::candidates)
            .unwrap_or_default()
    }
}

/// Image search hit attached to a dish. Any field may be missing or blank.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(
        default,
        rename = "thumbnailLink",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_link: Option<String>,
}

impl ImageRef {
    pub fn candidates(&self) -> ImageCandidates {
        ImageCandidates {
            primary: non_blank(&self.url).or_else(|| non_blank(&self.link)),
            thumbnail: non_blank(&self.thumbnail_link),
        }
    }
}

/// The (at most two) URLs an item's image can be loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ImageCandidates {
    /// Full resolution: `url`, else `link`.
    pub primary: Option<String>,
    /// Lower resolution fallback: `thumbnailLink`.
    pub thumbnail: Option<String>,
}

impl ImageCandidates {
    pub fn new(primary: Option<&str>, thumbnail: Option<&str>) -> Self {
        Self {
            primary: primary.map(str::to_owned),
            thumbnail: thumbnail.map(str::to_owned),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.thumbnail.is_none()
    }
}

// The backend sends "" for links it could not find.
fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn url_wins_over_link() {
        let image = ImageRef {
            url: Some("a.jpg".into()),
            link: Some("b.jpg".into()),
            thumbnail_link: Some("a_thumb.jpg".into()),
        };
        assert_eq!(
            image.candidates(),
            ImageCandidates::new(Some("a.jpg"), Some("a_thumb.jpg"))
        );
    }

    #[test]
    fn link_used_when_url_blank() {
        let image = ImageRef {
            url: Some("  ".into()),
            link: Some("b.jpg".into()),
            thumbnail_link: Some(String::new()),
        };
        assert_eq!(image.candidates(), ImageCandidates::new(Some("b.jpg"), None));
    }

    #[test]
    fn item_without_image_has_no_candidates() {
        assert!(MenuItem::new("Tom Yum").candidates().is_empty());
    }

    #[test]
    fn decodes_backend_shape() {
        let raw = r#"{
            "dishes_found": 2,
            "ocr_time": 1.5,
            "menu_with_images": [
                {"dish": "Pad Thai", "price": "$12",
                 "image": {"url": "a.jpg", "thumbnailLink": "a_thumb.jpg"}},
                {"dish": "Tom Yum", "translations": {"es": "Sopa Tom Yum"}, "image": null}
            ]
        }"#;
        let set = ResultSet::from_json(raw).unwrap();
        assert_eq!(set.dishes_found, 2);
        assert_eq!(set.items().len(), 2);
        assert_eq!(set.items()[0].price.as_deref(), Some("$12"));
        assert_eq!(
            set.items()[0].candidates(),
            ImageCandidates::new(Some("a.jpg"), Some("a_thumb.jpg"))
        );
        assert_eq!(set.items()[1].translations["es"], "Sopa Tom Yum");
        assert!(set.items()[1].image.is_none());
    }

    #[test]
    fn null_collections_decode_as_empty() {
        let set = ResultSet::from_json(
            r#"{"dishes_found": 0, "ocr_time": 0.2, "menu_with_images": null}"#,
        )
        .unwrap();
        assert!(set.is_empty());

        let item: MenuItem =
            serde_json::from_str(r#"{"dish": "Satay", "translations": null}"#).unwrap();
        assert!(item.translations.is_empty());
    }

    #[test]
    fn missing_dish_is_a_decode_error() {
        let err = ResultSet::from_json(r#"{"menu_with_images": [{"price": "$3"}]}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
