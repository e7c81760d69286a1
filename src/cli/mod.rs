//! Command-line interface
//!
//! Parses arguments, merges them with the configuration file, picks the tag
//! source and runs the selected workflow.

pub mod orchestration;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::{load_config, Config};
use crate::domain::{BumpKind, Environment};
use crate::error::HarborTagError;
use crate::registry::{FixedTagSource, HarborCoordinates, HarborRegistry, TagSource};
use crate::ui;

use orchestration::WorkflowResult;

#[derive(Parser, Debug)]
#[command(
    name = "harbor-tag",
    version,
    about = "Retrieve tag information of Harbor registry artifacts",
    long_about = "Based on the current tags of the artifacts and the input from the user, generates the next tag"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, help = "Custom configuration file path")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Enable debug logging")]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Retrieve all tags for a given image and print the latest one
    Latest(SourceArgs),
    /// Based on the current tags of the image, generate the next tag
    Next(NextArgs),
}

/// Where the tags come from and which environment they belong to
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    #[arg(short, long, value_enum, help = "Environment [dev, staging, prod]")]
    pub environment: Option<Environment>,

    #[arg(short, long, env = "HARBOR_REGISTRY", help = "Harbor registry URL")]
    pub registry: Option<String>,

    #[arg(long, env = "HARBOR_PROJECT", help = "Harbor project")]
    pub project: Option<String>,

    #[arg(long, env = "HARBOR_REPOSITORY", help = "Harbor repository")]
    pub repository: Option<String>,

    #[arg(
        short,
        long,
        env = "HARBOR_USERNAME",
        help = "Username to authenticate in the registry"
    )]
    pub username: Option<String>,

    #[arg(
        short,
        long,
        env = "HARBOR_PASSWORD",
        hide_env_values = true,
        help = "Password to authenticate in the registry"
    )]
    pub password: Option<String>,

    #[arg(
        long,
        value_name = "PATH",
        help = "Read tag names from a file, one per line ('-' for stdin), instead of the registry"
    )]
    pub tags_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct NextArgs {
    #[arg(
        short = 't',
        long = "type",
        value_enum,
        default_value = "patch",
        help = "Tag type [major, minor, patch, rc, dev]"
    )]
    pub kind: BumpKind,

    #[command(flatten)]
    pub source: SourceArgs,
}

impl SourceArgs {
    /// The environment is required; clap leaves it optional so that the
    /// error is reported like every other missing argument.
    pub fn environment(&self) -> crate::error::Result<Environment> {
        self.environment
            .ok_or_else(|| HarborTagError::config("Arguments missing: environment"))
    }

    /// Build the tag source: the tags file when given, otherwise the Harbor
    /// registry from flags, environment variables and `config`, in that order.
    pub fn tag_source(&self, config: &Config) -> crate::error::Result<Box<dyn TagSource>> {
        if let Some(path) = &self.tags_file {
            return Ok(Box::new(FixedTagSource::from_path(path)?));
        }
        Ok(Box::new(HarborRegistry::new(self.coordinates(config)?)))
    }

    /// Resolve Harbor coordinates, failing with the list of missing values
    pub fn coordinates(&self, config: &Config) -> crate::error::Result<HarborCoordinates> {
        let registry = &config.registry;
        let pick = |flag: &Option<String>, file: &Option<String>| {
            flag.clone()
                .or_else(|| file.clone())
                .filter(|value| !value.is_empty())
        };

        let url = pick(&self.registry, &registry.url);
        let project = pick(&self.project, &registry.project);
        let repository = pick(&self.repository, &registry.repository);
        let username = pick(&self.username, &registry.username);
        let password = pick(&self.password, &registry.password);

        match (url, project, repository, username, password) {
            (Some(registry_url), Some(project), Some(repository), Some(username), Some(password)) => {
                Ok(HarborCoordinates {
                    registry: registry_url,
                    project,
                    repository,
                    username,
                    password,
                    page_size: registry.page_size,
                })
            }
            (url, project, repository, username, password) => {
                let missing: Vec<&str> = [
                    ("registry", url.is_none()),
                    ("project", project.is_none()),
                    ("repository", repository.is_none()),
                    ("username", username.is_none()),
                    ("password", password.is_none()),
                ]
                .iter()
                .filter(|(_, is_missing)| *is_missing)
                .map(|(name, _)| *name)
                .collect();
                Err(HarborTagError::config(format!(
                    "Arguments missing: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

impl Cli {
    /// Run the selected subcommand and return the version line to print.
    ///
    /// Boundary warnings are shown on stderr as they are collected.
    pub fn run(&self) -> Result<String> {
        let config = load_config(self.config.as_deref())?;

        let result = match &self.command {
            Command::Latest(args) => {
                let environment = args.environment()?;
                let source = args.tag_source(&config)?;
                orchestration::run_latest(&source, environment)?
            }
            Command::Next(args) => {
                let environment = args.source.environment()?;
                crate::domain::validate_pairing(environment, args.kind)?;
                let source = args.source.tag_source(&config)?;
                orchestration::run_next(&source, environment, args.kind)?
            }
        };

        Ok(report(result))
    }
}

fn report(result: WorkflowResult) -> String {
    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }
    result.output.to_string()
}
