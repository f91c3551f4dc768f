//! Validated user answers.
//!
//! [`ProjectAnswers`] is built once per run by the collector and never
//! mutated afterwards. Construction enforces the invariants the prompt
//! collaborator cannot: non-empty slug, at least one layer, and normalized
//! service names.

use crate::domain::{
    error::DomainError,
    layer::{LAYER_CATALOG, Layer},
    slug::slugify,
};

/// Everything the planner needs, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectAnswers {
    project_name: String,
    slug: String,
    layers: Vec<Layer>,
    backend_services: Vec<String>,
}

impl ProjectAnswers {
    /// Build validated answers.
    ///
    /// `layers` may arrive in any order and with duplicates (selection order
    /// is not significant); the stored sequence is the catalog filtered to
    /// the selection, so planning order is always sidebar order.
    ///
    /// `backend_services` is ignored unless Backend is selected; when
    /// Backend is selected and the list is empty, the single implicit
    /// service `core` is used. Service names are normalized here; a name
    /// that normalizes to nothing is rejected.
    pub fn new(
        project_name: impl Into<String>,
        layers: &[Layer],
        backend_services: &[String],
    ) -> Result<Self, DomainError> {
        let project_name = project_name.into();
        if project_name.trim().is_empty() {
            return Err(DomainError::EmptyProjectName);
        }

        let slug = slugify(&project_name);
        if slug.is_empty() {
            return Err(DomainError::UnusableProjectName { name: project_name });
        }

        if layers.is_empty() {
            return Err(DomainError::NoLayersSelected);
        }
        let layers: Vec<Layer> = LAYER_CATALOG
            .iter()
            .map(|def| def.layer)
            .filter(|layer| layers.contains(layer))
            .collect();

        let backend_services = if layers.contains(&Layer::Backend) {
            if backend_services.is_empty() {
                vec!["core".to_string()]
            } else {
                let mut normalized = Vec::with_capacity(backend_services.len());
                for raw in backend_services {
                    let name = slugify(raw);
                    if name.is_empty() {
                        return Err(DomainError::UnusableServiceName { name: raw.clone() });
                    }
                    normalized.push(name);
                }
                normalized
            }
        } else {
            Vec::new()
        };

        Ok(Self {
            project_name,
            slug,
            layers,
            backend_services,
        })
    }

    /// The raw project name, as typed (used in headings and prose).
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Normalized project identifier (directory name, URL path segment).
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Selected layers in catalog order, deduplicated.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Normalized backend service names in user order; empty unless the
    /// Backend layer is selected.
    pub fn backend_services(&self) -> &[String] {
        &self.backend_services
    }

    pub fn has_backend(&self) -> bool {
        self.layers.contains(&Layer::Backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_name() {
        let err = ProjectAnswers::new("   ", &[Layer::Planning], &[]).unwrap_err();
        assert_eq!(err, DomainError::EmptyProjectName);
    }

    #[test]
    fn rejects_symbol_only_name() {
        let err = ProjectAnswers::new("!!!", &[Layer::Planning], &[]).unwrap_err();
        assert!(matches!(err, DomainError::UnusableProjectName { .. }));
    }

    #[test]
    fn rejects_no_layers() {
        let err = ProjectAnswers::new("Demo", &[], &[]).unwrap_err();
        assert_eq!(err, DomainError::NoLayersSelected);
    }

    #[test]
    fn layers_follow_catalog_order_and_dedupe() {
        let answers = ProjectAnswers::new(
            "Demo",
            &[Layer::Incidents, Layer::Planning, Layer::Incidents],
            &[],
        )
        .unwrap();
        assert_eq!(answers.layers(), &[Layer::Planning, Layer::Incidents]);
    }

    #[test]
    fn backend_defaults_to_core() {
        let answers = ProjectAnswers::new("Demo", &[Layer::Backend], &[]).unwrap();
        assert_eq!(answers.backend_services(), &["core".to_string()]);
    }

    #[test]
    fn service_names_are_normalized_in_user_order() {
        let services = vec!["Auth Service".to_string(), " api ".to_string()];
        let answers = ProjectAnswers::new("Demo", &[Layer::Backend], &services).unwrap();
        assert_eq!(
            answers.backend_services(),
            &["auth-service".to_string(), "api".to_string()]
        );
    }

    #[test]
    fn symbol_only_service_name_is_rejected() {
        let services = vec!["auth".to_string(), "!!".to_string()];
        let err = ProjectAnswers::new("Demo", &[Layer::Backend], &services).unwrap_err();
        assert!(matches!(err, DomainError::UnusableServiceName { .. }));
    }

    #[test]
    fn services_dropped_without_backend_layer() {
        let services = vec!["auth".to_string()];
        let answers = ProjectAnswers::new("Demo", &[Layer::Planning], &services).unwrap();
        assert!(answers.backend_services().is_empty());
        assert!(!answers.has_backend());
    }

    #[test]
    fn slug_derived_from_name() {
        let answers = ProjectAnswers::new("My Cool App", &[Layer::Planning], &[]).unwrap();
        assert_eq!(answers.slug(), "my-cool-app");
        assert_eq!(answers.project_name(), "My Cool App");
    }
}
