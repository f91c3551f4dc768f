//! Folder planning: expand validated answers into concrete folder specs.
//!
//! The plan is pure data — directory names, seed file contents, and the
//! index-table entries — produced deterministically from the answers.
//! Materialization (actual filesystem writes) lives in the application
//! layer.

use crate::domain::{
    answers::ProjectAnswers,
    layer::{LAYER_CATALOG, Layer},
    slug::capitalize_first,
};

/// Record of one planned folder, reused to build the project index table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderPlanEntry {
    pub folder_name: String,
    pub display_name: String,
    pub description: String,
}

/// One seed file to write inside a planned folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedFile {
    pub file_name: &'static str,
    pub content: String,
}

/// A folder to create, with its seed files.
///
/// `copy_incident_template` marks the Incidents folder, which additionally
/// receives a best-effort copy of the reference incident template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFolder {
    pub entry: FolderPlanEntry,
    pub seed_files: Vec<SeedFile>,
    pub copy_incident_template: bool,
}

/// Deterministic expansion of the selected layers, in catalog order.
#[derive(Debug, Clone)]
pub struct ProjectPlan {
    project_name: String,
    slug: String,
    folders: Vec<PlannedFolder>,
}

/// Build the folder plan for a set of validated answers.
///
/// Non-backend layers expand to a single folder; the Backend layer expands
/// to one folder per service, in the order the user named them.
pub fn build_plan(answers: &ProjectAnswers) -> ProjectPlan {
    let mut folders = Vec::new();

    for layer in answers.layers() {
        match layer {
            Layer::Backend => {
                for service in answers.backend_services() {
                    folders.push(backend_folder(service));
                }
            }
            other => folders.push(layer_folder(*other, answers)),
        }
    }

    ProjectPlan {
        project_name: answers.project_name().to_string(),
        slug: answers.slug().to_string(),
        folders,
    }
}

fn layer_folder(layer: Layer, answers: &ProjectAnswers) -> PlannedFolder {
    let def = layer.definition();
    let mut seed_files = vec![SeedFile {
        file_name: "index.md",
        content: layer_seed(def.name, def.description),
    }];

    // The Incidents folder also carries Docusaurus category metadata.
    if layer == Layer::Incidents {
        seed_files.push(SeedFile {
            file_name: "_category_.yml",
            content: incidents_category_yml(answers.project_name(), answers.slug()),
        });
    }

    PlannedFolder {
        entry: FolderPlanEntry {
            folder_name: def.folder_name(),
            display_name: def.name.to_string(),
            description: def.description.to_string(),
        },
        seed_files,
        copy_incident_template: layer == Layer::Incidents,
    }
}

fn backend_folder(service: &str) -> PlannedFolder {
    let def = Layer::Backend.definition();
    let capitalized = capitalize_first(service);

    PlannedFolder {
        entry: FolderPlanEntry {
            folder_name: format!("{}-backend-{}", def.prefix, service),
            display_name: format!("Backend - {capitalized}"),
            description: format!("{capitalized} backend service"),
        },
        seed_files: vec![SeedFile {
            file_name: "index.md",
            content: backend_seed(service),
        }],
        copy_incident_template: false,
    }
}

// ── Seed content templates ────────────────────────────────────────────────────

fn layer_seed(name: &str, description: &str) -> String {
    format!(
        "# {name}\n\
         \n\
         This section contains {}.\n\
         \n\
         ## Contents\n\
         \n\
         Add your documentation here.\n",
        description.to_lowercase()
    )
}

fn backend_seed(service: &str) -> String {
    format!(
        "# Backend - {}\n\
         \n\
         This section contains documentation for the {service} backend service.\n\
         \n\
         ## Contents\n\
         \n\
         - API documentation\n\
         - Database schema\n\
         - Service architecture\n\
         - Deployment guides\n",
        capitalize_first(service)
    )
}

fn incidents_category_yml(project_name: &str, slug: &str) -> String {
    format!(
        "label: 'Incidents'\n\
         position: 99\n\
         link:\n\
         \x20 type: generated-index\n\
         \x20 title: 'Incident Reports'\n\
         \x20 description: 'A list of all incident reports for {project_name}.'\n\
         \x20 slug: '/projects/{slug}/incidents'\n"
    )
}

impl ProjectPlan {
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn folders(&self) -> &[PlannedFolder] {
        &self.folders
    }

    /// Index-table entries in creation order.
    pub fn entries(&self) -> impl Iterator<Item = &FolderPlanEntry> {
        self.folders.iter().map(|f| &f.entry)
    }

    /// Render the project-level `index.md`: heading, welcome line, a table
    /// with one row per created folder, and the fixed prefix legend.
    pub fn render_project_index(&self) -> String {
        let rows: String = self
            .entries()
            .map(|e| {
                format!(
                    "| [{}](./{}/index.md) | {} |\n",
                    e.display_name, e.folder_name, e.description
                )
            })
            .collect();

        format!(
            "# {name}\n\
             \n\
             Welcome to the **{name}** documentation.\n\
             \n\
             ## Project Structure\n\
             \n\
             | Section | Description |\n\
             |---------|-------------|\n\
             {rows}\
             \n\
             ## Overview\n\
             \n\
             This documentation is organized into numbered sections that control the sidebar order:\n\
             - `00-` prefix: Planning and specifications\n\
             - `10-` prefix: Frontend applications\n\
             - `20-` prefix: Backend services\n\
             - `30-` prefix: Infrastructure and DevOps\n\
             - `40-` prefix: Testing and QA\n\
             - `99-` prefix: Incidents and post-mortems\n\
             \n\
             Navigate using the sidebar to explore each section in detail.\n",
            name = self.project_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(name: &str, layers: &[Layer], services: &[&str]) -> ProjectAnswers {
        let services: Vec<String> = services.iter().map(|s| s.to_string()).collect();
        ProjectAnswers::new(name, layers, &services).unwrap()
    }

    #[test]
    fn folder_count_law() {
        // non-backend layers contribute one folder each; backend contributes
        // one per service.
        let plan = build_plan(&answers(
            "Demo",
            &[Layer::Planning, Layer::Backend, Layer::Testing],
            &["auth", "api", "billing"],
        ));
        assert_eq!(plan.folders().len(), 2 + 3);
    }

    #[test]
    fn example_my_cool_app() {
        let plan = build_plan(&answers("My Cool App", &[Layer::Planning, Layer::Backend], &[]));
        assert_eq!(plan.slug(), "my-cool-app");
        let names: Vec<_> = plan.entries().map(|e| e.folder_name.as_str()).collect();
        assert_eq!(names, vec!["00-planning", "20-backend-core"]);
    }

    #[test]
    fn backend_services_keep_user_order() {
        let plan = build_plan(&answers("Demo", &[Layer::Backend], &["auth", " api "]));
        let names: Vec<_> = plan.entries().map(|e| e.folder_name.as_str()).collect();
        assert_eq!(names, vec!["20-backend-auth", "20-backend-api"]);
    }

    #[test]
    fn backend_seed_mentions_capitalized_service() {
        let plan = build_plan(&answers("Demo", &[Layer::Backend], &["auth"]));
        let seed = &plan.folders()[0].seed_files[0];
        assert_eq!(seed.file_name, "index.md");
        assert!(seed.content.starts_with("# Backend - Auth\n"));
        assert!(seed.content.contains("the auth backend service"));
        assert!(seed.content.contains("- Deployment guides"));
    }

    #[test]
    fn layer_seed_lowercases_description() {
        let plan = build_plan(&answers("Demo", &[Layer::Infrastructure], &[]));
        let seed = &plan.folders()[0].seed_files[0];
        assert!(seed.content.starts_with("# Infrastructure\n"));
        assert!(seed.content.contains("This section contains infrastructure & devops.\n"));
    }

    #[test]
    fn incidents_folder_carries_category_metadata() {
        let plan = build_plan(&answers("My Cool App", &[Layer::Incidents], &[]));
        let folder = &plan.folders()[0];
        assert!(folder.copy_incident_template);

        let yml = folder
            .seed_files
            .iter()
            .find(|f| f.file_name == "_category_.yml")
            .expect("category metadata");
        assert!(yml.content.contains("label: 'Incidents'"));
        assert!(yml.content.contains("position: 99"));
        assert!(yml.content.contains("type: generated-index"));
        assert!(yml.content.contains("title: 'Incident Reports'"));
        assert!(yml.content.contains("all incident reports for My Cool App."));
        assert!(yml.content.contains("slug: '/projects/my-cool-app/incidents'"));
    }

    #[test]
    fn only_incidents_requests_template_copy() {
        let plan = build_plan(&answers(
            "Demo",
            &[Layer::Planning, Layer::Backend, Layer::Incidents],
            &[],
        ));
        let flagged: Vec<_> = plan
            .folders()
            .iter()
            .filter(|f| f.copy_incident_template)
            .map(|f| f.entry.folder_name.as_str())
            .collect();
        assert_eq!(flagged, vec!["99-incidents"]);
    }

    #[test]
    fn index_table_rows_match_creation_order() {
        let plan = build_plan(&answers(
            "My Cool App",
            &[Layer::Planning, Layer::Backend],
            &["auth", "api"],
        ));
        let index = plan.render_project_index();

        assert!(index.starts_with("# My Cool App\n"));
        assert!(index.contains("Welcome to the **My Cool App** documentation."));
        assert!(index.contains("| [Planning](./00-planning/index.md) | PRD, TRD, Research |"));
        assert!(index.contains(
            "| [Backend - Auth](./20-backend-auth/index.md) | Auth backend service |"
        ));

        let planning = index.find("./00-planning/").unwrap();
        let auth = index.find("./20-backend-auth/").unwrap();
        let api = index.find("./20-backend-api/").unwrap();
        assert!(planning < auth && auth < api);
    }

    #[test]
    fn index_legend_lists_all_prefixes() {
        let plan = build_plan(&answers("Demo", &[Layer::Planning], &[]));
        let index = plan.render_project_index();
        for legend in ["`00-`", "`10-`", "`20-`", "`30-`", "`40-`", "`99-`"] {
            assert!(index.contains(legend), "missing {legend}");
        }
        assert!(index.ends_with("explore each section in detail.\n"));
    }

    #[test]
    fn catalog_order_governs_mixed_selection() {
        let plan = build_plan(&answers(
            "Demo",
            &[Layer::Incidents, Layer::Planning, Layer::Testing],
            &[],
        ));
        let names: Vec<_> = plan.entries().map(|e| e.folder_name.as_str()).collect();
        assert_eq!(names, vec!["00-planning", "40-testing", "99-incidents"]);
    }
}
