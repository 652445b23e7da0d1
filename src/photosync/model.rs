use serde::{Deserialize, Serialize};

/// EXIF summary shown on the photo detail overlay. Every field defaults
/// independently when the upstream metadata lacks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exif {
    pub camera: String,
    pub lens: String,
    pub aperture: String,
    pub shutter: String,
    pub iso: String,
}

/// One photo's metadata record as persisted in `photos.json`.
///
/// `public_id` is the stable key used to match entries across syncs; `id` is
/// a dense 1-based position that gets reassigned on every save. The serde
/// renames keep the on-disk layout (`publicId`, `aspectRatio`) that the site
/// frontend reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    pub public_id: String,
    pub title: String,
    pub category: String,
    pub year: String,
    pub aspect_ratio: String,
    pub orientation: String,
    pub exif: Exif,
}

/// The persisted catalog: a single object wrapping the ordered photo list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub photos: Vec<Photo>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_serializes_with_frontend_field_names() {
        let photo = Photo {
            id: "1".to_string(),
            public_id: "travel/kyoto".to_string(),
            title: "Kyoto".to_string(),
            category: "Travel".to_string(),
            year: "2024".to_string(),
            aspect_ratio: "3:2".to_string(),
            orientation: "landscape".to_string(),
            exif: Exif {
                camera: "X-T5".to_string(),
                lens: "XF 23mm".to_string(),
                aperture: "f/2.8".to_string(),
                shutter: "1/250s".to_string(),
                iso: "400".to_string(),
            },
        };

        let json = serde_json::to_value(&photo).unwrap();
        assert_eq!(json["publicId"], "travel/kyoto");
        assert_eq!(json["aspectRatio"], "3:2");
        assert!(json.get("public_id").is_none());
    }

    #[test]
    fn catalog_roundtrips_through_json() {
        let raw = r#"{
            "photos": [{
                "id": "1",
                "publicId": "p1",
                "title": "Untitled",
                "category": "General",
                "year": "2026",
                "aspectRatio": "Unknown",
                "orientation": "portrait",
                "exif": {
                    "camera": "Unknown",
                    "lens": "Unknown",
                    "aperture": "N/A",
                    "shutter": "N/A",
                    "iso": "N/A"
                }
            }]
        }"#;

        let catalog: Catalog = serde_json::from_str(raw).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.photos[0].public_id, "p1");

        let back = serde_json::to_string(&catalog).unwrap();
        let reparsed: Catalog = serde_json::from_str(&back).unwrap();
        assert_eq!(catalog, reparsed);
    }
}
