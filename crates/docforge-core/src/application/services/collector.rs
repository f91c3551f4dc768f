//! Answer collection: the prompt sequence behind the `new` flow.
//!
//! The collector owns validation and the re-ask loop; the [`Prompter`]
//! port only renders single questions. Each answer may be pre-supplied by
//! a CLI flag override — an invalid override is a hard validation error,
//! because re-asking makes no sense for a flag.

use tracing::debug;

use crate::{
    application::ports::{Prompter, SelectChoice},
    domain::{DomainError, LAYER_CATALOG, Layer, ProjectAnswers, slugify},
    error::ForgeResult,
};

/// Answers pre-supplied on the command line; anything left `None` is
/// prompted for interactively.
#[derive(Debug, Clone, Default)]
pub struct AnswerOverrides {
    pub name: Option<String>,
    pub layers: Option<Vec<Layer>>,
    pub services: Option<Vec<String>>,
}

/// Gathers all inputs needed to build a folder plan.
pub struct AnswerCollector<'a> {
    prompter: &'a dyn Prompter,
}

impl<'a> AnswerCollector<'a> {
    pub fn new(prompter: &'a dyn Prompter) -> Self {
        Self { prompter }
    }

    /// Run the prompt sequence (name → layers → backend services) and
    /// return validated answers. Prompts are asked one at a time and
    /// re-asked until their validator passes.
    pub fn collect(&self, overrides: &AnswerOverrides) -> ForgeResult<ProjectAnswers> {
        let name = match &overrides.name {
            Some(name) => {
                validate_name(name)?;
                name.clone()
            }
            None => self.ask_name()?,
        };
        debug!(slug = %slugify(&name), "Project name collected");

        let layers = match &overrides.layers {
            Some(layers) => {
                if layers.is_empty() {
                    return Err(DomainError::NoLayersSelected.into());
                }
                layers.clone()
            }
            None => self.ask_layers()?,
        };

        let services = if layers.contains(&Layer::Backend) {
            match &overrides.services {
                // Validation (normalization, non-empty tokens) happens in
                // ProjectAnswers::new below.
                Some(services) => services.clone(),
                None => self.ask_services()?,
            }
        } else {
            Vec::new()
        };

        let answers = ProjectAnswers::new(name, &layers, &services)?;
        debug!(
            layers = answers.layers().len(),
            services = answers.backend_services().len(),
            "Answers collected"
        );
        Ok(answers)
    }

    /// Final confirmation, default yes. Declining is a cancellation, not an
    /// error — the caller reports it and exits cleanly.
    pub fn confirm(&self) -> ForgeResult<bool> {
        self.prompter.confirm("Create this project?", true)
    }

    // ── Individual prompts ────────────────────────────────────────────────

    fn ask_name(&self) -> ForgeResult<String> {
        loop {
            let name = self.prompter.input("What is your project name?", None)?;
            match validate_name(&name) {
                Ok(()) => return Ok(name),
                Err(e) => self.prompter.reject(&e.to_string())?,
            }
        }
    }

    fn ask_layers(&self) -> ForgeResult<Vec<Layer>> {
        let choices: Vec<SelectChoice> = LAYER_CATALOG
            .iter()
            .map(|def| SelectChoice {
                label: format!("{} ({})", def.name, def.description),
                checked: def.layer.checked_by_default(),
            })
            .collect();

        loop {
            let picked = self
                .prompter
                .multi_select("Which layers does your project need?", &choices)?;
            if picked.is_empty() {
                self.prompter
                    .reject(&DomainError::NoLayersSelected.to_string())?;
                continue;
            }
            return Ok(picked
                .into_iter()
                .filter_map(|i| LAYER_CATALOG.get(i).map(|def| def.layer))
                .collect());
        }
    }

    fn ask_services(&self) -> ForgeResult<Vec<String>> {
        let count = loop {
            let count = self.prompter.integer("How many backend services?", 1)?;
            if count < 1 {
                self.prompter
                    .reject(&DomainError::InvalidServiceCount { count }.to_string())?;
                continue;
            }
            break count as usize;
        };

        // A single service is implicitly named "core" — no extra prompt.
        if count == 1 {
            return Ok(Vec::new());
        }

        loop {
            let raw = self.prompter.input(
                &format!("Enter {count} backend service names (comma-separated):"),
                Some("core,auth,api"),
            )?;
            let names: Vec<String> = raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();

            if names.len() != count {
                self.prompter.reject(
                    &DomainError::ServiceCountMismatch {
                        expected: count,
                        actual: names.len(),
                    }
                    .to_string(),
                )?;
                continue;
            }
            if let Some(bad) = names.iter().find(|n| slugify(n).is_empty()) {
                self.prompter.reject(
                    &DomainError::UnusableServiceName { name: bad.clone() }.to_string(),
                )?;
                continue;
            }
            return Ok(names);
        }
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::EmptyProjectName);
    }
    if slugify(name).is_empty() {
        return Err(DomainError::UnusableProjectName {
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Prompt-driven flows are covered end-to-end with the ScriptedPrompter
    // in docforge-adapters; here we only test the override paths, which
    // never touch the prompter.

    struct NoPrompts;

    impl Prompter for NoPrompts {
        fn input(&self, _: &str, _: Option<&str>) -> ForgeResult<String> {
            panic!("prompter must not be called when overrides are complete");
        }
        fn integer(&self, _: &str, _: i64) -> ForgeResult<i64> {
            panic!("prompter must not be called when overrides are complete");
        }
        fn multi_select(&self, _: &str, _: &[SelectChoice]) -> ForgeResult<Vec<usize>> {
            panic!("prompter must not be called when overrides are complete");
        }
        fn confirm(&self, _: &str, _: bool) -> ForgeResult<bool> {
            panic!("prompter must not be called when overrides are complete");
        }
        fn reject(&self, _: &str) -> ForgeResult<()> {
            panic!("prompter must not be called when overrides are complete");
        }
    }

    fn overrides(name: &str, layers: &[Layer], services: Option<&[&str]>) -> AnswerOverrides {
        AnswerOverrides {
            name: Some(name.to_string()),
            layers: Some(layers.to_vec()),
            services: services.map(|s| s.iter().map(|x| x.to_string()).collect()),
        }
    }

    #[test]
    fn complete_overrides_skip_all_prompts() {
        let collector = AnswerCollector::new(&NoPrompts);
        let answers = collector
            .collect(&overrides(
                "My Cool App",
                &[Layer::Planning, Layer::Backend],
                Some(&["auth", "api"]),
            ))
            .unwrap();
        assert_eq!(answers.slug(), "my-cool-app");
        assert_eq!(answers.backend_services(), &["auth", "api"]);
    }

    #[test]
    fn backend_override_without_services_defaults_to_core() {
        let collector = AnswerCollector::new(&NoPrompts);
        let answers = collector
            .collect(&overrides("Demo", &[Layer::Backend], Some(&[])))
            .unwrap();
        assert_eq!(answers.backend_services(), &["core"]);
    }

    #[test]
    fn services_override_skipped_without_backend() {
        let collector = AnswerCollector::new(&NoPrompts);
        let answers = collector
            .collect(&overrides("Demo", &[Layer::Planning], Some(&["auth"])))
            .unwrap();
        assert!(answers.backend_services().is_empty());
    }

    #[test]
    fn invalid_name_override_is_a_hard_error() {
        let collector = AnswerCollector::new(&NoPrompts);
        let err = collector
            .collect(&overrides("   ", &[Layer::Planning], None))
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::ForgeError::Domain(DomainError::EmptyProjectName)
        ));
    }

    #[test]
    fn empty_layers_override_is_a_hard_error() {
        let collector = AnswerCollector::new(&NoPrompts);
        let err = collector.collect(&overrides("Demo", &[], None)).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ForgeError::Domain(DomainError::NoLayersSelected)
        ));
    }

    #[test]
    fn bad_service_override_is_a_hard_error() {
        let collector = AnswerCollector::new(&NoPrompts);
        let err = collector
            .collect(&overrides("Demo", &[Layer::Backend], Some(&["auth", "!!"])))
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::ForgeError::Domain(DomainError::UnusableServiceName { .. })
        ));
    }
}
