//! The static layer catalog.
//!
//! A "layer" is a category of project documentation mapped to a two-digit
//! sidebar-ordering prefix. The catalog is a compile-time constant table:
//! folder-creation order follows catalog order, so the table must never be
//! reorderable at runtime.

use serde::Serialize;

use crate::domain::slug::slugify;

/// A documentation layer. Variant order is catalog order — the order in
/// which folders are created and listed in the project index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layer {
    Planning,
    WebFrontend,
    MobileApp,
    Backend,
    Infrastructure,
    Testing,
    Incidents,
}

/// One immutable catalog entry: display name, numeric ordering prefix, and
/// a short description shown in prompts and index tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayerDefinition {
    pub layer: Layer,
    pub name: &'static str,
    pub prefix: &'static str,
    pub description: &'static str,
}

/// The fixed set of available layers, in sidebar order.
pub const LAYER_CATALOG: [LayerDefinition; 7] = [
    LayerDefinition {
        layer: Layer::Planning,
        name: "Planning",
        prefix: "00",
        description: "PRD, TRD, Research",
    },
    LayerDefinition {
        layer: Layer::WebFrontend,
        name: "Web Frontend",
        prefix: "10",
        description: "Web Applications",
    },
    LayerDefinition {
        layer: Layer::MobileApp,
        name: "Mobile App",
        prefix: "10",
        description: "Mobile Applications",
    },
    LayerDefinition {
        layer: Layer::Backend,
        name: "Backend",
        prefix: "20",
        description: "Backend Services",
    },
    LayerDefinition {
        layer: Layer::Infrastructure,
        name: "Infrastructure",
        prefix: "30",
        description: "Infrastructure & DevOps",
    },
    LayerDefinition {
        layer: Layer::Testing,
        name: "Testing",
        prefix: "40",
        description: "Testing & QA",
    },
    LayerDefinition {
        layer: Layer::Incidents,
        name: "Incidents",
        prefix: "99",
        description: "Post-Mortems",
    },
];

impl Layer {
    /// Look up this layer's catalog entry.
    pub fn definition(self) -> &'static LayerDefinition {
        // The catalog covers every variant, so the lookup cannot fail.
        LAYER_CATALOG
            .iter()
            .find(|def| def.layer == self)
            .unwrap_or(&LAYER_CATALOG[0])
    }

    /// Layers pre-checked in the selection prompt.
    pub fn checked_by_default(self) -> bool {
        matches!(self, Layer::Planning | Layer::Incidents)
    }
}

impl LayerDefinition {
    /// Folder name for a non-backend layer: `{prefix}-{slugified name}`,
    /// e.g. `00-planning`, `10-web-frontend`.
    pub fn folder_name(&self) -> String {
        format!("{}-{}", self.prefix, slugify(self.name))
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.definition().name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_variant_once() {
        for layer in [
            Layer::Planning,
            Layer::WebFrontend,
            Layer::MobileApp,
            Layer::Backend,
            Layer::Infrastructure,
            Layer::Testing,
            Layer::Incidents,
        ] {
            let hits = LAYER_CATALOG.iter().filter(|d| d.layer == layer).count();
            assert_eq!(hits, 1, "catalog entries for {layer:?}");
        }
    }

    #[test]
    fn definition_roundtrips() {
        assert_eq!(Layer::Backend.definition().prefix, "20");
        assert_eq!(Layer::Incidents.definition().prefix, "99");
        assert_eq!(Layer::Planning.definition().description, "PRD, TRD, Research");
    }

    #[test]
    fn folder_names_are_prefixed_slugs() {
        assert_eq!(Layer::Planning.definition().folder_name(), "00-planning");
        assert_eq!(Layer::WebFrontend.definition().folder_name(), "10-web-frontend");
        assert_eq!(Layer::MobileApp.definition().folder_name(), "10-mobile-app");
        assert_eq!(Layer::Incidents.definition().folder_name(), "99-incidents");
    }

    #[test]
    fn planning_and_incidents_are_default_checked() {
        let checked: Vec<_> = LAYER_CATALOG
            .iter()
            .filter(|d| d.layer.checked_by_default())
            .map(|d| d.layer)
            .collect();
        assert_eq!(checked, vec![Layer::Planning, Layer::Incidents]);
    }

    #[test]
    fn display_uses_catalog_names() {
        assert_eq!(Layer::WebFrontend.to_string(), "Web Frontend");
    }
}
