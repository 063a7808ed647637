//! Command-line subcommands and their handlers.
//!
//! Argument structs carry the clap attributes and convert into the core
//! parameter types with `From`, so the core crate stays free of CLI
//! concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Navigator
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use log::debug;
use navigator_core::{
    display::{GenerateResult, ImportResult, StatusUpdateResult, Templates},
    params::{GenerateRoadmap, Id, ListTemplates, MatchProfile, UpdateStepStatus, UserId},
    Catalog, Navigator, NavigatorError,
};

use crate::renderer::TerminalRenderer;

#[derive(Subcommand)]
pub enum RoadmapCommands {
    /// Generate a user's roadmap from their profile (no-op if one exists)
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Show a user's roadmap with progress
    #[command(alias = "s")]
    Show(UserArgs),
}

#[derive(Subcommand)]
pub enum StepCommands {
    /// Update the status or notes of a roadmap step
    #[command(alias = "u")]
    Update(UpdateStepArgs),
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// Load the bundled template catalog
    Seed,
    /// Load templates from a catalog JSON file
    Import(ImportArgs),
    /// List templates
    #[command(alias = "l")]
    List(ListTemplatesArgs),
    /// Show a template with its steps
    #[command(alias = "s")]
    Show(ShowTemplateArgs),
    /// Show which template a profile would be matched to
    #[command(alias = "m")]
    Match(MatchArgs),
}

/// Generate a roadmap
#[derive(Args)]
pub struct GenerateArgs {
    /// ID of the user
    #[arg(long = "user")]
    pub user_id: u64,
    /// Engineering branch (e.g. CSE, Mechanical)
    #[arg(long)]
    pub branch: String,
    /// Career goal (e.g. "Data Engineer", python_backend_developer)
    #[arg(long)]
    pub goal: String,
    /// Current study year
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub year: u8,
    /// Current semester
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub semester: u8,
}

impl From<GenerateArgs> for GenerateRoadmap {
    fn from(val: GenerateArgs) -> Self {
        GenerateRoadmap {
            user_id: val.user_id,
            branch: val.branch,
            career_goal: val.goal,
            current_year: val.year,
            current_semester: val.semester,
        }
    }
}

/// Select a user's roadmap
#[derive(Args)]
pub struct UserArgs {
    /// ID of the user
    #[arg(long = "user")]
    pub user_id: u64,
}

impl From<UserArgs> for UserId {
    fn from(val: UserArgs) -> Self {
        UserId {
            user_id: val.user_id,
        }
    }
}

/// Update a roadmap step
#[derive(Args)]
pub struct UpdateStepArgs {
    /// ID of the user owning the roadmap
    #[arg(long = "user")]
    pub user_id: u64,
    /// Template step ID as shown by `roadmap show`
    pub step_id: u64,
    /// New status
    #[arg(long, value_enum)]
    pub status: StepStatusArg,
    /// Notes for the step; replaces existing notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<UpdateStepArgs> for UpdateStepStatus {
    fn from(val: UpdateStepArgs) -> Self {
        UpdateStepStatus {
            user_id: val.user_id,
            step_id: val.step_id,
            status: val.status.to_string(),
            notes: val.notes,
        }
    }
}

/// Import a catalog file
#[derive(Args)]
pub struct ImportArgs {
    /// Path to the catalog JSON file
    pub file: PathBuf,
}

/// List templates
#[derive(Args)]
pub struct ListTemplatesArgs {
    /// Include inactive templates
    #[arg(long)]
    pub all: bool,
}

impl From<ListTemplatesArgs> for ListTemplates {
    fn from(val: ListTemplatesArgs) -> Self {
        ListTemplates {
            include_inactive: val.all,
        }
    }
}

/// Show a template
#[derive(Args)]
pub struct ShowTemplateArgs {
    /// ID of the template
    pub id: u64,
}

impl From<ShowTemplateArgs> for Id {
    fn from(val: ShowTemplateArgs) -> Self {
        Id { id: val.id }
    }
}

/// Preview template matching
#[derive(Args)]
pub struct MatchArgs {
    /// Engineering branch
    #[arg(long)]
    pub branch: String,
    /// Career goal
    #[arg(long)]
    pub goal: String,
    /// Current study year
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub year: u8,
}

impl From<MatchArgs> for MatchProfile {
    fn from(val: MatchArgs) -> Self {
        MatchProfile {
            branch: val.branch,
            career_goal: val.goal,
            current_year: val.year,
        }
    }
}

/// Step status values accepted by `--status`
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum StepStatusArg {
    /// Not picked up yet
    NotStarted,
    /// Currently being worked on
    InProgress,
    /// Finished
    Completed,
}

impl std::fmt::Display for StepStatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepStatusArg::NotStarted => write!(f, "not_started"),
            StepStatusArg::InProgress => write!(f, "in_progress"),
            StepStatusArg::Completed => write!(f, "completed"),
        }
    }
}

/// Runs CLI commands against a navigator and renders the markdown output.
pub struct Cli {
    navigator: Navigator,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(navigator: Navigator, renderer: TerminalRenderer) -> Self {
        Self {
            navigator,
            renderer,
        }
    }

    pub async fn handle_roadmap_command(&self, command: RoadmapCommands) -> Result<()> {
        match command {
            RoadmapCommands::Generate(args) => {
                let params = GenerateRoadmap::from(args);
                let outcome = self
                    .navigator
                    .generate_roadmap(&params)
                    .await
                    .context("Failed to generate roadmap")?;
                self.renderer.render(&GenerateResult(outcome).to_string())
            }
            RoadmapCommands::Show(args) => {
                let summary = self
                    .navigator
                    .get_roadmap_with_progress(&args.into())
                    .await
                    .context("Failed to load roadmap")?;
                self.renderer.render(&summary.to_string())
            }
        }
    }

    pub async fn handle_step_command(&self, command: StepCommands) -> Result<()> {
        match command {
            StepCommands::Update(args) => {
                let params = UpdateStepStatus::from(args);
                debug!("Updating step {} of user {}", params.step_id, params.user_id);
                let step = self
                    .navigator
                    .update_step_status(&params)
                    .await
                    .context("Failed to update step")?;
                self.renderer.render(&StatusUpdateResult(step).to_string())
            }
        }
    }

    pub async fn handle_catalog_command(&self, command: CatalogCommands) -> Result<()> {
        match command {
            CatalogCommands::Seed => {
                let catalog = Catalog::bundled().context("Bundled catalog is invalid")?;
                self.import(catalog).await
            }
            CatalogCommands::Import(args) => {
                let catalog = Catalog::from_path(&args.file)
                    .with_context(|| format!("Failed to read catalog {}", args.file.display()))?;
                self.import(catalog).await
            }
            CatalogCommands::List(args) => self.list_templates(&args.into()).await,
            CatalogCommands::Show(args) => {
                let id = args.id;
                let template = self
                    .navigator
                    .get_template(&args.into())
                    .await
                    .context("Failed to load template")?
                    .ok_or(NavigatorError::TemplateNotFound { id })?;
                self.renderer.render(&template.to_string())
            }
            CatalogCommands::Match(args) => {
                let template = self
                    .navigator
                    .match_template(&args.into())
                    .await
                    .context("Failed to match template")?;
                self.renderer.render(&template.to_string())
            }
        }
    }

    pub async fn list_templates(&self, params: &ListTemplates) -> Result<()> {
        let templates = self
            .navigator
            .list_templates(params)
            .await
            .context("Failed to list templates")?;
        self.renderer.render(&Templates(templates).to_string())
    }

    async fn import(&self, catalog: Catalog) -> Result<()> {
        let report = self
            .navigator
            .import_catalog(catalog)
            .await
            .context("Failed to import catalog")?;
        self.renderer.render(&ImportResult(report).to_string())
    }
}
