//! Brand design tokens.
//!
//! The storefront styles itself with the Tailwind CDN build; these tokens are
//! serialized into the `tailwind.config` object the CDN script reads.

use serde::Serialize;
use std::collections::BTreeMap;

pub const RED: &str = "#D32F2F";
pub const GREEN: &str = "#388E3C";
pub const WHITE: &str = "#FFFFFF";
pub const RED_LIGHT: &str = "#FFEBEE";
pub const GREEN_LIGHT: &str = "#E8F5E8";
pub const GRAY: &str = "#F5F5F5";
pub const DARK: &str = "#212121";

/// Named colors, exposed to utility classes as `bg-arivas-red` etc.
pub const PALETTE: [(&str, &str); 7] = [
    ("arivas-red", RED),
    ("arivas-green", GREEN),
    ("arivas-white", WHITE),
    ("arivas-red-light", RED_LIGHT),
    ("arivas-green-light", GREEN_LIGHT),
    ("arivas-gray", GRAY),
    ("arivas-dark", DARK),
];

type Keyframe = BTreeMap<String, String>;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TailwindConfig {
    pub theme: ThemeSection,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ThemeSection {
    pub extend: ThemeExtend,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExtend {
    pub colors: BTreeMap<String, String>,
    pub animation: BTreeMap<String, String>,
    pub keyframes: BTreeMap<String, BTreeMap<String, Keyframe>>,
    pub box_shadow: BTreeMap<String, String>,
    pub backdrop_blur: BTreeMap<String, String>,
}

fn frame(pairs: &[(&str, &str)]) -> Keyframe {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl TailwindConfig {
    /// Storefront brand theme.
    pub fn brand() -> Self {
        let colors = PALETTE
            .iter()
            .map(|(name, hex)| (name.to_string(), hex.to_string()))
            .collect();

        let mut animation = BTreeMap::new();
        animation.insert("slide-in".to_string(), "slide-in 0.5s ease-out".to_string());
        animation.insert("fade-in".to_string(), "fade-in 0.6s ease-out".to_string());

        let mut slide_in = BTreeMap::new();
        slide_in.insert("0%".to_string(), frame(&[("transform", "translateX(-100%)")]));
        slide_in.insert("100%".to_string(), frame(&[("transform", "translateX(0)")]));

        let mut fade_in = BTreeMap::new();
        fade_in.insert(
            "0%".to_string(),
            frame(&[("opacity", "0"), ("transform", "translateY(20px)")]),
        );
        fade_in.insert(
            "100%".to_string(),
            frame(&[("opacity", "1"), ("transform", "translateY(0)")]),
        );

        let mut keyframes = BTreeMap::new();
        keyframes.insert("slide-in".to_string(), slide_in);
        keyframes.insert("fade-in".to_string(), fade_in);

        let mut box_shadow = BTreeMap::new();
        box_shadow.insert("premium".to_string(), "0 10px 30px rgba(0,0,0,0.08)".to_string());

        let mut backdrop_blur = BTreeMap::new();
        backdrop_blur.insert("xs".to_string(), "2px".to_string());

        Self {
            theme: ThemeSection {
                extend: ThemeExtend {
                    colors,
                    animation,
                    keyframes,
                    box_shadow,
                    backdrop_blur,
                },
            },
        }
    }
}
