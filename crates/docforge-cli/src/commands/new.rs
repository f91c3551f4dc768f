//! Implementation of the `docforge new` command.
//!
//! Responsibility: translate CLI flags into answer overrides, drive the
//! core collector/planner/scaffolder, and display results. No business
//! logic lives here.
//!
//! Dispatch sequence:
//! 1. Build [`AnswerOverrides`] from flags
//! 2. Collect answers (prompting for whatever the flags left open)
//! 3. Show the summary and confirm unless `--yes` / `--quiet`
//! 4. Early-exit if `--dry-run`
//! 5. Materialize via `ScaffoldService`
//! 6. Print next-steps guidance

use tracing::{debug, info, instrument};

use docforge_adapters::LocalFilesystem;
use docforge_core::{
    application::{AnswerCollector, AnswerOverrides, ScaffoldOptions, ScaffoldService},
    domain::{ProjectAnswers, build_plan},
};

use crate::{
    cli::{GlobalArgs, NewArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `docforge new` command.
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Flags become overrides; anything missing is prompted for.
    let overrides = AnswerOverrides {
        name: args.name.clone(),
        layers: args
            .layers
            .as_ref()
            .map(|layers| layers.iter().map(|&l| l.into()).collect()),
        services: args.services.clone(),
    };

    let prompter = make_prompter(&args, &output)?;
    let collector = AnswerCollector::new(prompter.as_ref());

    // 2. Collect and validate.
    let answers = collector.collect(&overrides)?;
    debug!(
        slug = %answers.slug(),
        layers = answers.layers().len(),
        "Answers collected"
    );

    // 3. Summary + confirmation. A dry run never writes, so it needs no
    // confirmation either.
    if !global.quiet && !args.yes && !args.dry_run {
        show_summary(&answers, &output)?;
        if !collector.confirm()? {
            output.info("Project creation cancelled")?;
            return Ok(());
        }
    }

    let options = ScaffoldOptions {
        projects_dir: args.projects_dir.unwrap_or(config.projects_dir),
        incident_template: config.incident_template,
    };
    let plan = build_plan(&answers);

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        let root = options.projects_dir.join(plan.slug());
        output.info(&format!("Dry run: would create {}", root.display()))?;
        for entry in plan.entries() {
            output.print(&format!("  {}/  ({})", entry.folder_name, entry.display_name))?;
        }
        return Ok(());
    }

    // 5. Materialize.
    output.header("Creating project structure...")?;
    info!(project = %answers.slug(), "Scaffold started");

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let report = service.scaffold(&plan, &options)?;

    for created in &report.created {
        output.print(&format!("   \u{2713} Created {created}"))?;
    }

    info!(project = %answers.slug(), entries = report.created.len(), "Scaffold completed");

    // 6. Success + next steps.
    output.success("Project created successfully!")?;
    if !global.quiet {
        let slug = answers.slug();
        output.print("")?;
        output.print("Next steps:")?;
        output.print("  1. Add your project to the navbar in docusaurus.config.ts:")?;
        output.print("       {")?;
        output.print(&format!("         label: '{}',", answers.project_name()))?;
        output.print(&format!("         to: '/docs/projects/{slug}',"))?;
        output.print("       }")?;
        output.print("  2. Start the dev server: pnpm run start")?;
        output.print(&format!(
            "  3. Navigate to: http://localhost:3000/docs/projects/{slug}"
        ))?;
    }

    Ok(())
}

fn show_summary(answers: &ProjectAnswers, output: &OutputManager) -> CliResult<()> {
    let layers = answers
        .layers()
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    output.header("Project Summary:")?;
    output.print(&format!("   Name:   {}", answers.project_name()))?;
    output.print(&format!("   Slug:   {}", answers.slug()))?;
    output.print(&format!("   Layers: {layers}"))?;
    if answers.has_backend() {
        output.print(&format!(
            "   Backend Services: {}",
            answers.backend_services().join(", ")
        ))?;
    }
    output.print("")?;
    Ok(())
}

// ── Prompter selection ────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
fn make_prompter(
    _args: &NewArgs,
    output: &OutputManager,
) -> CliResult<Box<dyn docforge_core::application::ports::Prompter>> {
    Ok(Box::new(crate::prompt::TermPrompter::new(
        output.supports_color(),
    )))
}

#[cfg(not(feature = "interactive"))]
fn make_prompter(
    args: &NewArgs,
    _output: &OutputManager,
) -> CliResult<Box<dyn docforge_core::application::ports::Prompter>> {
    // Without dialoguer every answer must come from a flag; fail up front
    // with a clear message instead of mid-collection.
    if args.name.is_none() || args.layers.is_none() || !args.yes {
        return Err(crate::error::CliError::FeatureNotAvailable {
            feature: "interactive",
        });
    }
    Ok(Box::new(NeverPrompt))
}

#[cfg(not(feature = "interactive"))]
struct NeverPrompt;

#[cfg(not(feature = "interactive"))]
impl docforge_core::application::ports::Prompter for NeverPrompt {
    fn input(
        &self,
        message: &str,
        _default: Option<&str>,
    ) -> docforge_core::error::ForgeResult<String> {
        Err(unavailable(message))
    }
    fn integer(&self, message: &str, _default: i64) -> docforge_core::error::ForgeResult<i64> {
        Err(unavailable(message))
    }
    fn multi_select(
        &self,
        message: &str,
        _choices: &[docforge_core::application::ports::SelectChoice],
    ) -> docforge_core::error::ForgeResult<Vec<usize>> {
        Err(unavailable(message))
    }
    fn confirm(&self, message: &str, _default: bool) -> docforge_core::error::ForgeResult<bool> {
        Err(unavailable(message))
    }
    fn reject(&self, _message: &str) -> docforge_core::error::ForgeResult<()> {
        Ok(())
    }
}

#[cfg(not(feature = "interactive"))]
fn unavailable(message: &str) -> docforge_core::error::ForgeError {
    docforge_core::application::ApplicationError::PromptFailed {
        reason: format!("prompt '{message}' needs the interactive feature"),
    }
    .into()
}
