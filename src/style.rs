//! Subfamily-name to weight/style classification.

use serde::{Deserialize, Serialize};

/// Slant classification derived from the subfamily name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
}

/// Derived weight/style pair for one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightStyle {
    /// CSS-style weight, 100-900.
    pub weight: u16,
    pub style: FontStyle,
}

/// Classify a subfamily string such as `"Bold"` or `"Light Italic"`.
///
/// Weight is an exact-match lookup on the whole subfamily string; anything
/// not in the table maps to 400. Style is a substring match, so compound
/// names like `"Bold Italic"` still register as italic even though they
/// miss the weight table.
pub fn weight_style(subfamily: &str) -> WeightStyle {
    WeightStyle {
        weight: weight_for(subfamily),
        style: style_for(subfamily),
    }
}

/// Exact-match weight table (Thin=100 .. Black=900), default 400.
fn weight_for(subfamily: &str) -> u16 {
    match subfamily {
        "Thin" | "Hairline" => 100,
        "ExtraLight" | "Extra Light" | "UltraLight" | "Ultra Light" => 200,
        "Light" => 300,
        "Regular" | "Normal" | "Book" => 400,
        "Medium" => 500,
        "SemiBold" | "Semi Bold" | "DemiBold" | "Demi Bold" => 600,
        "Bold" => 700,
        "ExtraBold" | "Extra Bold" | "UltraBold" | "Ultra Bold" => 800,
        "Black" | "Heavy" => 900,
        _ => 400,
    }
}

fn style_for(subfamily: &str) -> FontStyle {
    if subfamily.contains("Italic") || subfamily.contains("Oblique") {
        FontStyle::Italic
    } else {
        FontStyle::Normal
    }
}
