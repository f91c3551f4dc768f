//! Scaffold Service - materializes a folder plan on disk.
//!
//! This service performs the filesystem effects, in order:
//! 1. Conflict check on the target project directory (before any write)
//! 2. Create the project root
//! 3. Per planned folder: create the directory, write seed files, and for
//!    the Incidents folder copy the reference template (best-effort)
//! 4. Render and write the project-level `index.md`
//!
//! There is no rollback: if a write fails mid-run, folders already written
//! remain on disk. That is an accepted limitation of the tool, not a bug.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::ProjectPlan,
    error::ForgeResult,
};

/// Where (and from what) to materialize.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Directory that holds all documentation projects; the new project
    /// lands at `{projects_dir}/{slug}`.
    pub projects_dir: PathBuf,
    /// Reference incident template to copy into the Incidents folder.
    /// `None`, or a path that does not exist, skips the copy silently.
    pub incident_template: Option<PathBuf>,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            projects_dir: PathBuf::from("docs/projects"),
            incident_template: Some(PathBuf::from(
                "docs/projects/project-a-superapp/99-incidents/template-incident.md",
            )),
        }
    }
}

/// What a scaffold run created, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Absolute or cwd-relative project root that was created.
    pub root: PathBuf,
    /// Paths created, relative to the root, in creation order. Directories
    /// carry a trailing `/`.
    pub created: Vec<String>,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Materialize `plan` under `options.projects_dir`.
    ///
    /// Fails with a conflict before any write if the target directory
    /// already exists, so running twice with the same name never silently
    /// overwrites.
    #[instrument(skip_all, fields(project = %plan.slug()))]
    pub fn scaffold(
        &self,
        plan: &ProjectPlan,
        options: &ScaffoldOptions,
    ) -> ForgeResult<ScaffoldReport> {
        let root = options.projects_dir.join(plan.slug());

        if self.filesystem.exists(&root) {
            return Err(ApplicationError::ProjectExists {
                slug: plan.slug().to_string(),
                path: root,
            }
            .into());
        }

        info!(root = %root.display(), "Creating project structure");
        self.filesystem.create_dir_all(&root)?;

        let mut created = Vec::new();
        for folder in plan.folders() {
            let folder_name = &folder.entry.folder_name;
            let dir = root.join(folder_name);
            self.filesystem.create_dir_all(&dir)?;
            created.push(format!("{folder_name}/"));

            for seed in &folder.seed_files {
                self.filesystem
                    .write_file(&dir.join(seed.file_name), &seed.content)?;
                created.push(format!("{folder_name}/{}", seed.file_name));
            }

            if folder.copy_incident_template {
                if let Some(name) = self.copy_incident_template(options, &dir)? {
                    created.push(format!("{folder_name}/{name}"));
                }
            }

            debug!(folder = %folder_name, "Folder created");
        }

        self.filesystem
            .write_file(&root.join("index.md"), &plan.render_project_index())?;
        created.push("index.md".to_string());

        info!(entries = created.len(), "Project structure created");
        Ok(ScaffoldReport { root, created })
    }

    /// Best-effort copy of the reference incident template. A missing
    /// source is skipped silently; only the copy itself can fail.
    fn copy_incident_template(
        &self,
        options: &ScaffoldOptions,
        dir: &Path,
    ) -> ForgeResult<Option<&'static str>> {
        let Some(source) = &options.incident_template else {
            return Ok(None);
        };
        if !self.filesystem.exists(source) {
            debug!(source = %source.display(), "Incident template absent, skipping copy");
            return Ok(None);
        }
        self.filesystem
            .copy_file(source, &dir.join("template-incident.md"))?;
        Ok(Some("template-incident.md"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::{Layer, ProjectAnswers, build_plan};
    use mockall::predicate::always;

    fn plan(layers: &[Layer]) -> ProjectPlan {
        build_plan(&ProjectAnswers::new("Demo", layers, &[]).unwrap())
    }

    #[test]
    fn existing_project_aborts_before_any_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_create_dir_all().times(0);
        fs.expect_write_file().times(0);
        fs.expect_copy_file().times(0);

        let service = ScaffoldService::new(Box::new(fs));
        let err = service
            .scaffold(&plan(&[Layer::Planning]), &ScaffoldOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::ForgeError::Application(ApplicationError::ProjectExists { .. })
        ));
    }

    #[test]
    fn planning_only_writes_dir_seed_and_index() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        // root + one layer folder
        fs.expect_create_dir_all()
            .with(always())
            .times(2)
            .returning(|_| Ok(()));
        // seed index.md + project index.md
        fs.expect_write_file()
            .with(always(), always())
            .times(2)
            .returning(|_, _| Ok(()));
        fs.expect_copy_file().times(0);

        let service = ScaffoldService::new(Box::new(fs));
        let report = service
            .scaffold(&plan(&[Layer::Planning]), &ScaffoldOptions::default())
            .unwrap();
        assert_eq!(
            report.created,
            vec!["00-planning/", "00-planning/index.md", "index.md"]
        );
    }

    #[test]
    fn missing_incident_template_is_skipped_silently() {
        let mut fs = MockFilesystem::new();
        // Neither the project root nor the template source exists.
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_copy_file().times(0);

        let service = ScaffoldService::new(Box::new(fs));
        let report = service
            .scaffold(&plan(&[Layer::Incidents]), &ScaffoldOptions::default())
            .unwrap();
        assert!(!report.created.iter().any(|p| p.contains("template-incident")));
        assert!(report.created.contains(&"99-incidents/_category_.yml".to_string()));
    }

    #[test]
    fn present_incident_template_is_copied() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p.ends_with("template-incident.md"));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_copy_file()
            .with(always(), always())
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs));
        let report = service
            .scaffold(&plan(&[Layer::Incidents]), &ScaffoldOptions::default())
            .unwrap();
        assert!(
            report
                .created
                .contains(&"99-incidents/template-incident.md".to_string())
        );
    }

    #[test]
    fn no_template_configured_means_no_copy() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_copy_file().times(0);

        let options = ScaffoldOptions {
            projects_dir: PathBuf::from("docs/projects"),
            incident_template: None,
        };
        let service = ScaffoldService::new(Box::new(fs));
        service.scaffold(&plan(&[Layer::Incidents]), &options).unwrap();
    }

    #[test]
    fn report_root_is_projects_dir_plus_slug() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let options = ScaffoldOptions {
            projects_dir: PathBuf::from("site/docs/projects"),
            incident_template: None,
        };
        let service = ScaffoldService::new(Box::new(fs));
        let report = service.scaffold(&plan(&[Layer::Planning]), &options).unwrap();
        assert_eq!(report.root, PathBuf::from("site/docs/projects/demo"));
    }
}
