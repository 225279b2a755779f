//! Mode selection.
//!
//! A variable stores one value per mode of its collection. Which mode
//! applies depends on the collection's axis and the active
//! [`ResolutionContext`].

use crate::config::{BrandConfig, CollectionIds};
use crate::types::{ModeValue, Variable};

/// The mode selections in effect while building one output artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResolutionContext<'c> {
    pub brand: Option<&'c BrandConfig>,
    pub breakpoint: Option<&'c str>,
    pub color_mode: Option<&'c str>,
    pub density: Option<&'c str>,
}

impl<'c> ResolutionContext<'c> {
    /// A context with no selections: every variable uses its first mode.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_brand(mut self, brand: &'c BrandConfig) -> Self {
        self.brand = Some(brand);
        self
    }

    pub fn with_breakpoint(mut self, mode_id: &'c str) -> Self {
        self.breakpoint = Some(mode_id);
        self
    }

    pub fn with_color_mode(mut self, mode_id: &'c str) -> Self {
        self.color_mode = Some(mode_id);
        self
    }

    pub fn with_density(mut self, mode_id: &'c str) -> Self {
        self.density = Some(mode_id);
        self
    }
}

/// Picks the mode value of a variable for a context.
#[derive(Debug, Clone, Copy)]
pub struct ModeResolver<'c> {
    collections: &'c CollectionIds,
}

impl<'c> ModeResolver<'c> {
    pub fn new(collections: &'c CollectionIds) -> Self {
        Self { collections }
    }

    /// The mode the context asks for in `collection_id`, if any.
    ///
    /// Axes are checked in order: colour mode, breakpoint, brand mappings,
    /// density.
    pub fn preferred_mode<'x>(
        &self,
        collection_id: &str,
        context: &ResolutionContext<'x>,
    ) -> Option<&'x str> {
        let ids = self.collections;

        if collection_id == ids.color_mode {
            if let Some(mode) = context.color_mode {
                return Some(mode);
            }
        }
        if collection_id == ids.breakpoints {
            if let Some(mode) = context.breakpoint {
                return Some(mode);
            }
        }
        if collection_id == ids.brand_tokens {
            if let Some(brand) = context.brand {
                return Some(brand.token_mode.as_str());
            }
        }
        if collection_id == ids.brand_colors {
            if let Some(mode) = context.brand.and_then(|b| b.color_mode.as_deref()) {
                return Some(mode);
            }
        }
        if collection_id == ids.density {
            if let Some(mode) = context.density {
                return Some(mode);
            }
        }

        None
    }

    /// Select `(mode id, value)` for a variable.
    ///
    /// Uses the context's mode for the variable's collection when it has a
    /// value; otherwise the first declared mode that has one. Returns `None`
    /// when no mode has a value.
    pub fn select<'v>(
        &self,
        variable: &'v Variable,
        collection_id: &str,
        context: &ResolutionContext<'_>,
    ) -> Option<(&'v str, &'v ModeValue)> {
        let preferred = self
            .preferred_mode(collection_id, context)
            .and_then(|mode| variable.values_by_mode.get_key_value(mode))
            .and_then(|(mode, value)| Some((mode.as_str(), value.as_ref()?)));

        preferred.or_else(|| {
            variable
                .values_by_mode
                .iter()
                .find_map(|(mode, value)| Some((mode.as_str(), value.as_ref()?)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResolvedKind;

    fn ids() -> CollectionIds {
        CollectionIds {
            font_primitive: "font".into(),
            color_primitive: "color".into(),
            size_primitive: "size".into(),
            space_primitive: "space".into(),
            density: "density".into(),
            brand_tokens: "brand-tokens".into(),
            brand_colors: "brand-colors".into(),
            breakpoints: "breakpoints".into(),
            color_mode: "color-mode".into(),
        }
    }

    fn themed() -> Variable {
        Variable::new("v", "Semantic/Bg", ResolvedKind::Color)
            .with_value("light", ModeValue::text("#fff"))
            .with_value("dark", ModeValue::text("#000"))
    }

    #[test]
    fn test_context_selects_color_mode() {
        let ids = ids();
        let resolver = ModeResolver::new(&ids);
        let ctx = ResolutionContext::new().with_color_mode("dark");

        let variable = themed();
        let (mode, value) = resolver.select(&variable, "color-mode", &ctx).unwrap();
        assert_eq!(mode, "dark");
        assert_eq!(value, &ModeValue::text("#000"));
    }

    #[test]
    fn test_unrelated_collection_uses_first_mode() {
        let ids = ids();
        let resolver = ModeResolver::new(&ids);
        let ctx = ResolutionContext::new().with_color_mode("dark");

        let variable = themed();
        let (mode, _) = resolver.select(&variable, "breakpoints", &ctx).unwrap();
        assert_eq!(mode, "light");
    }

    #[test]
    fn test_brand_axes_use_brand_modes() {
        let ids = ids();
        let resolver = ModeResolver::new(&ids);
        let brand = BrandConfig::new("Sport", "tok-sport").with_color_mode("col-sport");
        let ctx = ResolutionContext::new().with_brand(&brand);

        assert_eq!(resolver.preferred_mode("brand-tokens", &ctx), Some("tok-sport"));
        assert_eq!(resolver.preferred_mode("brand-colors", &ctx), Some("col-sport"));
        assert_eq!(resolver.preferred_mode("color-mode", &ctx), None);
    }

    #[test]
    fn test_brand_without_color_mode_falls_back() {
        let ids = ids();
        let resolver = ModeResolver::new(&ids);
        let brand = BrandConfig::new("Advertorial", "tok-adv");
        let ctx = ResolutionContext::new().with_brand(&brand);

        assert_eq!(resolver.preferred_mode("brand-colors", &ctx), None);
    }

    #[test]
    fn test_missing_mode_falls_back_to_declared_value() {
        let ids = ids();
        let resolver = ModeResolver::new(&ids);
        let mut variable = Variable::new("v", "Space/Gap", ResolvedKind::Float)
            .with_value("mobile", ModeValue::number(8.0));
        variable.values_by_mode.insert("tablet".into(), None);
        let variable = variable.with_value("desktop", ModeValue::number(16.0));

        let ctx = ResolutionContext::new().with_breakpoint("tablet");
        let (mode, value) = resolver.select(&variable, "breakpoints", &ctx).unwrap();
        assert_eq!(mode, "mobile");
        assert_eq!(value, &ModeValue::number(8.0));

        let ctx = ResolutionContext::new().with_breakpoint("wide");
        let (mode, _) = resolver.select(&variable, "breakpoints", &ctx).unwrap();
        assert_eq!(mode, "mobile");
    }

    #[test]
    fn test_first_mode_without_value_is_skipped() {
        let ids = ids();
        let resolver = ModeResolver::new(&ids);
        let mut variable = Variable::new("v", "Space/Gap", ResolvedKind::Float);
        variable.values_by_mode.insert("a".into(), None);
        let variable = variable.with_value("b", ModeValue::number(4.0));

        let (mode, _) = resolver.select(&variable, "space", &ResolutionContext::new()).unwrap();
        assert_eq!(mode, "b");
    }

    #[test]
    fn test_no_values_selects_nothing() {
        let ids = ids();
        let resolver = ModeResolver::new(&ids);
        let variable = Variable::new("v", "Empty", ResolvedKind::String);

        assert!(resolver.select(&variable, "space", &ResolutionContext::new()).is_none());
    }
}
