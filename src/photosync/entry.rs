//! Builds a catalog entry from a raw upstream asset. Pure functions only;
//! every derivation here has a defined fallback so a sparse upstream record
//! still produces a complete entry.

use crate::model::{Exif, Photo};
use crate::source::Asset;

/// Year used when the upstream record carries no creation timestamp.
const FALLBACK_YEAR: &str = "2026";
/// Category for assets living at the root of the library.
const ROOT_CATEGORY: &str = "General";

/// The "new entry" transform: one upstream asset plus the folder it was
/// fetched from becomes a catalog entry. The numeric `id` is left empty
/// here; reconciliation assigns it positionally.
pub fn build_photo(asset: &Asset, folder: &str) -> Photo {
    Photo {
        id: String::new(),
        public_id: asset.public_id.clone(),
        title: title_for(asset.filename.as_deref()),
        category: category_for(folder),
        year: year_for(asset.created_at.as_deref()),
        aspect_ratio: aspect_ratio(asset.width, asset.height),
        orientation: orientation(asset.width, asset.height).to_string(),
        exif: exif_for(asset),
    }
}

fn title_for(filename: Option<&str>) -> String {
    match filename {
        Some(name) if !name.is_empty() => display_label(name),
        _ => "Untitled".to_string(),
    }
}

fn category_for(folder: &str) -> String {
    if folder.is_empty() {
        return ROOT_CATEGORY.to_string();
    }
    let segment = folder.rsplit('/').next().unwrap_or(folder);
    display_label(segment)
}

fn year_for(created_at: Option<&str>) -> String {
    created_at
        .and_then(|ts| ts.get(..4))
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_YEAR.to_string())
}

/// Separators become spaces and each word is title-cased, so
/// "street-photography_2024" reads as "Street Photography 2024".
fn display_label(raw: &str) -> String {
    raw.replace(['-', '_'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn aspect_ratio(width: u32, height: u32) -> String {
    // Zero dimensions show up on corrupt uploads; never divide by them.
    if width == 0 || height == 0 {
        return "Unknown".to_string();
    }
    let divisor = gcd(width, height);
    format!("{}:{}", width / divisor, height / divisor)
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Square images count as portrait.
fn orientation(width: u32, height: u32) -> &'static str {
    if width > height {
        "landscape"
    } else {
        "portrait"
    }
}

fn exif_for(asset: &Asset) -> Exif {
    Exif {
        camera: asset
            .meta("Model")
            .unwrap_or_else(|| "Unknown".to_string()),
        lens: asset
            .meta("LensModel")
            .unwrap_or_else(|| "Unknown".to_string()),
        aperture: asset
            .meta("FNumber")
            .map(|f| format!("f/{}", f))
            .unwrap_or_else(|| "N/A".to_string()),
        shutter: asset
            .meta("ExposureTime")
            .map(|t| format!("{}s", t))
            .unwrap_or_else(|| "N/A".to_string()),
        iso: asset.meta("ISO").unwrap_or_else(|| "N/A".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn asset(public_id: &str) -> Asset {
        Asset {
            public_id: public_id.to_string(),
            ..Asset::default()
        }
    }

    #[test]
    fn titles_are_cleaned_and_title_cased() {
        assert_eq!(title_for(Some("golden-gate_at-dusk")), "Golden Gate At Dusk");
        assert_eq!(title_for(Some("DSC_0042")), "Dsc 0042");
        assert_eq!(title_for(None), "Untitled");
        assert_eq!(title_for(Some("")), "Untitled");
    }

    #[test]
    fn category_comes_from_the_last_folder_segment() {
        assert_eq!(category_for("travel/street-photography"), "Street Photography");
        assert_eq!(category_for("nature"), "Nature");
        assert_eq!(category_for(""), "General");
    }

    #[test]
    fn year_uses_the_timestamp_prefix_with_a_fixed_fallback() {
        assert_eq!(year_for(Some("2023-08-14T09:30:00Z")), "2023");
        assert_eq!(year_for(None), "2026");
        assert_eq!(year_for(Some("")), "2026");
    }

    #[test]
    fn aspect_ratio_is_gcd_reduced() {
        assert_eq!(aspect_ratio(4000, 3000), "4:3");
        assert_eq!(aspect_ratio(6000, 4000), "3:2");
        assert_eq!(aspect_ratio(1080, 1080), "1:1");
    }

    #[test]
    fn zero_dimension_means_unknown_ratio() {
        assert_eq!(aspect_ratio(0, 3000), "Unknown");
        assert_eq!(aspect_ratio(4000, 0), "Unknown");
    }

    #[test]
    fn orientation_ties_go_to_portrait() {
        assert_eq!(orientation(3000, 2000), "landscape");
        assert_eq!(orientation(2000, 3000), "portrait");
        assert_eq!(orientation(2000, 2000), "portrait");
    }

    #[test]
    fn exif_fields_default_independently() {
        let mut a = asset("p");
        a.image_metadata = BTreeMap::from([
            ("Model".to_string(), json!("X-T5")),
            ("FNumber".to_string(), json!(1.4)),
        ]);

        let exif = exif_for(&a);
        assert_eq!(exif.camera, "X-T5");
        assert_eq!(exif.lens, "Unknown");
        assert_eq!(exif.aperture, "f/1.4");
        assert_eq!(exif.shutter, "N/A");
        assert_eq!(exif.iso, "N/A");
    }

    #[test]
    fn build_photo_fills_every_field() {
        let a = Asset {
            public_id: "travel/kyoto-garden".to_string(),
            width: 6000,
            height: 4000,
            created_at: Some("2024-05-12T10:00:00Z".to_string()),
            filename: Some("kyoto-garden".to_string()),
            image_metadata: BTreeMap::from([
                ("Model".to_string(), json!("X-T5")),
                ("LensModel".to_string(), json!("XF 23mm F1.4")),
                ("FNumber".to_string(), json!(2.8)),
                ("ExposureTime".to_string(), json!("1/250")),
                ("ISO".to_string(), json!(400)),
            ]),
        };

        let photo = build_photo(&a, "travel");
        assert_eq!(photo.id, "");
        assert_eq!(photo.public_id, "travel/kyoto-garden");
        assert_eq!(photo.title, "Kyoto Garden");
        assert_eq!(photo.category, "Travel");
        assert_eq!(photo.year, "2024");
        assert_eq!(photo.aspect_ratio, "3:2");
        assert_eq!(photo.orientation, "landscape");
        assert_eq!(photo.exif.shutter, "1/250s");
        assert_eq!(photo.exif.iso, "400");
    }
}
