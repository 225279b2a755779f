//! Identifier tables for the token pipeline.
//!
//! The export identifies its collections and modes by opaque ids. Which
//! collection plays which role (colour primitives, colour mode axis, brand
//! mapping, ...) and which mode belongs to which brand or breakpoint is
//! configuration, passed to the builders at construction time.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{StrataError, Result};

/// Category of a primitive output tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Colors,
    Typography,
    Spacing,
    Sizing,
    Radius,
    Shadows,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Colors,
        Category::Typography,
        Category::Spacing,
        Category::Sizing,
        Category::Radius,
        Category::Shadows,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Colors => "colors",
            Category::Typography => "typography",
            Category::Spacing => "spacing",
            Category::Sizing => "sizing",
            Category::Radius => "radius",
            Category::Shadows => "shadows",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Public breakpoint names emitted in semantic artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicBreakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl PublicBreakpoint {
    pub const ALL: [PublicBreakpoint; 3] = [
        PublicBreakpoint::Mobile,
        PublicBreakpoint::Tablet,
        PublicBreakpoint::Desktop,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PublicBreakpoint::Mobile => "mobile",
            PublicBreakpoint::Tablet => "tablet",
            PublicBreakpoint::Desktop => "desktop",
        }
    }
}

/// Well-known collection ids, one per axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionIds {
    pub font_primitive: String,
    pub color_primitive: String,
    pub size_primitive: String,
    pub space_primitive: String,
    pub density: String,
    pub brand_tokens: String,
    pub brand_colors: String,
    pub breakpoints: String,
    pub color_mode: String,
}

impl Default for CollectionIds {
    fn default() -> Self {
        Self {
            font_primitive: "VariableCollectionId:470:1450".to_string(),
            color_primitive: "VariableCollectionId:539:2238".to_string(),
            size_primitive: "VariableCollectionId:4072:1817".to_string(),
            space_primitive: "VariableCollectionId:2726:12077".to_string(),
            density: "VariableCollectionId:5695:5841".to_string(),
            brand_tokens: "VariableCollectionId:18038:10593".to_string(),
            brand_colors: "VariableCollectionId:18212:14495".to_string(),
            breakpoints: "VariableCollectionId:7017:25696".to_string(),
            color_mode: "VariableCollectionId:588:1979".to_string(),
        }
    }
}

/// A brand and its mode in each brand mapping collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandConfig {
    pub name: String,
    /// Mode id in the brand token mapping collection.
    pub token_mode: String,
    /// Mode id in the brand colour mapping collection. Brands without one
    /// get no colour-mode output.
    #[serde(default)]
    pub color_mode: Option<String>,
}

impl BrandConfig {
    pub fn new(name: impl Into<String>, token_mode: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            token_mode: token_mode.into(),
            color_mode: None,
        }
    }

    pub fn with_color_mode(mut self, mode: impl Into<String>) -> Self {
        self.color_mode = Some(mode.into());
        self
    }

    /// Lower-cased name used for output directories.
    pub fn slug(&self) -> String {
        crate::types::normalize_segment(&self.name)
    }
}

/// Light and dark mode ids of the colour mode collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorModes {
    pub light: String,
    pub dark: String,
}

impl ColorModes {
    /// `(name, mode id)` pairs in output order.
    pub fn modes(&self) -> [(&'static str, &str); 2] {
        [("light", self.light.as_str()), ("dark", self.dark.as_str())]
    }
}

impl Default for ColorModes {
    fn default() -> Self {
        Self {
            light: "588:0".to_string(),
            dark: "592:1".to_string(),
        }
    }
}

/// A fine-grained breakpoint mode and the public breakpoint it feeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakpointConfig {
    pub name: String,
    pub mode_id: String,
    pub output: PublicBreakpoint,
}

impl BreakpointConfig {
    pub fn new(name: impl Into<String>, mode_id: impl Into<String>, output: PublicBreakpoint) -> Self {
        Self {
            name: name.into(),
            mode_id: mode_id.into(),
            output,
        }
    }
}

/// A component bucket and the name fragments that select it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketConfig {
    pub name: String,
    pub keywords: Vec<String>,
}

impl BucketConfig {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            keywords: vec![name.to_string()],
        }
    }
}

/// Name of the bucket for component tokens matching no other bucket.
pub const GENERAL_BUCKET: &str = "general";

/// Immutable identifier configuration for one build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    pub collections: CollectionIds,
    pub brands: Vec<BrandConfig>,
    pub color_modes: ColorModes,
    pub breakpoints: Vec<BreakpointConfig>,
    pub buckets: Vec<BucketConfig>,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            collections: CollectionIds::default(),
            brands: vec![
                BrandConfig::new("BILD", "18038:0").with_color_mode("18212:0"),
                BrandConfig::new("SportBILD", "18038:1").with_color_mode("18212:1"),
                // No colour mapping mode exists upstream for Advertorial
                BrandConfig::new("Advertorial", "18094:0"),
            ],
            color_modes: ColorModes::default(),
            breakpoints: vec![
                BreakpointConfig::new("xs", "7017:0", PublicBreakpoint::Mobile),
                BreakpointConfig::new("sm", "16706:1", PublicBreakpoint::Mobile),
                BreakpointConfig::new("md", "7015:1", PublicBreakpoint::Tablet),
                BreakpointConfig::new("lg", "7015:2", PublicBreakpoint::Desktop),
            ],
            buckets: vec![
                BucketConfig::new("button"),
                BucketConfig::new("card"),
                BucketConfig::new("input"),
                BucketConfig::new("navigation"),
            ],
        }
    }
}

impl TokenConfig {
    /// Primitive collections and the category each feeds, in output order.
    pub fn primitive_collections(&self) -> [(&str, Category); 4] {
        [
            (self.collections.color_primitive.as_str(), Category::Colors),
            (self.collections.font_primitive.as_str(), Category::Typography),
            (self.collections.space_primitive.as_str(), Category::Spacing),
            (self.collections.size_primitive.as_str(), Category::Sizing),
        ]
    }

    /// The representative fine breakpoint mode for a public breakpoint: the
    /// first configured breakpoint mapping onto it.
    pub fn breakpoint_mode(&self, output: PublicBreakpoint) -> Option<&str> {
        self.breakpoints
            .iter()
            .find(|b| b.output == output)
            .map(|b| b.mode_id.as_str())
    }

    /// Pick the component bucket for a variable name. First match wins.
    pub fn bucket_for(&self, name: &str) -> &str {
        let lower = name.to_lowercase();
        self.buckets
            .iter()
            .find(|bucket| {
                bucket
                    .keywords
                    .iter()
                    .any(|k| !k.is_empty() && lower.contains(&k.to_lowercase()))
            })
            .map(|bucket| bucket.name.as_str())
            .unwrap_or(GENERAL_BUCKET)
    }

    /// Check the tables for inconsistencies that would make output ambiguous.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for brand in &self.brands {
            if brand.slug().is_empty() {
                return Err(StrataError::Config {
                    message: format!("Brand name '{}' has no usable characters", brand.name),
                    help: Some("Use letters or digits in brand names".to_string()),
                });
            }
            if !seen.insert(brand.slug()) {
                return Err(StrataError::Config {
                    message: format!("Duplicate brand '{}'", brand.name),
                    help: Some("Brand names must be unique (case-insensitive)".to_string()),
                });
            }
        }

        let mut buckets = HashSet::new();
        for bucket in &self.buckets {
            if bucket.name.trim().is_empty() || !buckets.insert(bucket.name.as_str()) {
                return Err(StrataError::Config {
                    message: format!("Invalid or duplicate component bucket '{}'", bucket.name),
                    help: None,
                });
            }
        }

        Ok(())
    }
}
