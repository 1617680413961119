//! Command line interface
//!
//! [`run`] loads configuration, initializes logging and dispatches to
//! [`execute`], which returns the text to print.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use fanmatch_application::use_cases::{FanSubmission, MatchOutcome};
use fanmatch_domain::error::{Error, Result};
use fanmatch_domain::{FanProfile, FavoriteGame, PrimaryRole};
use fanmatch_infrastructure::config::ConfigLoader;
use fanmatch_infrastructure::error_ext::ErrorContext;
use fanmatch_infrastructure::{AppContext, init_app, init_logging};
use tracing::warn;

/// Command line interface for fanmatch
#[derive(Parser, Debug)]
#[command(name = "fanmatch")]
#[command(about = "Match esports fans to professional players by playstyle")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Embed player descriptions into the reference catalog
    BuildCatalog {
        /// `name -> description` JSON mapping (defaults to `catalog.source_path`)
        #[arg(long)]
        source: Option<PathBuf>,

        /// Catalog file to write (defaults to `catalog.path`)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Find the player closest to a game, role and playstyle
    Match {
        /// Favorite game (Counter-Strike, League of Legends)
        #[arg(long, default_value = "")]
        game: FavoriteGame,

        /// Primary role within the game
        #[arg(long, default_value = "")]
        role: PrimaryRole,

        /// Free-text playstyle description
        #[arg(long, default_value = "")]
        playstyle: String,
    },

    /// Check that an identity document carries the given name
    Verify {
        /// Document image or PDF
        #[arg(long)]
        document: PathBuf,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Write the configuration to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Register a fan: validate, verify, match and save the profile
    Register {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        city: String,

        #[arg(long)]
        game: FavoriteGame,

        #[arg(long)]
        role: PrimaryRole,

        #[arg(long)]
        nickname: String,

        #[arg(long)]
        playstyle: String,

        /// Whether the fan has watched championships
        #[arg(long)]
        watched_championships: Option<bool>,

        #[arg(long)]
        instagram: Option<String>,

        /// Identity document to verify
        #[arg(long)]
        document: Option<PathBuf>,

        /// Keep the record in memory instead of the configured store
        #[arg(long)]
        dry_run: bool,
    },
}

/// Load configuration, initialize logging and execute the command
pub async fn run(cli: Cli) -> Result<String> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load()?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    init_logging(&config.logging)?;

    let ctx = init_app(config)?;
    execute(&ctx, &cli.command).await
}

/// Execute one command against a wired context
pub async fn execute(ctx: &AppContext, command: &Command) -> Result<String> {
    match command {
        Command::BuildCatalog { source, output } => {
            build_catalog(ctx, source.as_deref(), output.as_deref())
        }
        Command::Match {
            game,
            role,
            playstyle,
        } => {
            let profile = FanProfile {
                favorite_game: *game,
                primary_role: *role,
                playstyle: playstyle.clone(),
                ..FanProfile::default()
            };
            let outcome = run_match(ctx, profile).await?;
            Ok(render_outcome(&outcome))
        }
        Command::Verify {
            document,
            first_name,
            last_name,
        } => {
            let bytes = read_document(document)?;
            let status = ctx
                .verifier()
                .verify(Some(bytes.as_slice()), first_name, last_name)
                .await;
            Ok(format!("Verification: {}", status.as_str()))
        }
        Command::Config { output } => match output {
            Some(path) => {
                ConfigLoader::new().save_to_file(&ctx.config, path)?;
                Ok(format!("Configuration written to {}", path.display()))
            }
            None => ConfigLoader::to_toml_string(&ctx.config),
        },
        Command::Register {
            first_name,
            last_name,
            city,
            game,
            role,
            nickname,
            playstyle,
            watched_championships,
            instagram,
            document,
            dry_run,
        } => {
            let submission = FanSubmission {
                profile: FanProfile {
                    first_name: first_name.clone(),
                    last_name: last_name.clone(),
                    city: city.clone(),
                    favorite_game: *game,
                    primary_role: *role,
                    nickname: nickname.clone(),
                    playstyle: playstyle.clone(),
                    watched_championships: *watched_championships,
                    instagram_handle: instagram.clone(),
                },
                document: document.as_deref().map(read_document).transpose()?,
            };
            register(ctx, &submission, *dry_run).await
        }
    }
}

fn build_catalog(
    ctx: &AppContext,
    source: Option<&Path>,
    output: Option<&Path>,
) -> Result<String> {
    let source = source.unwrap_or(ctx.config.catalog.source_path.as_path());
    let output = output.unwrap_or(ctx.config.catalog.path.as_path());

    let report = ctx.catalog_builder()?.build(source, output)?;
    // Later matches in this process must read the rebuilt file
    ctx.catalogs().invalidate(output);

    let mut lines = vec![format!(
        "Wrote {} entries ({} dimensions) to {}",
        report.written,
        report.dimensions.unwrap_or_default(),
        report.output_path.display()
    )];
    lines.extend(
        report
            .skipped
            .iter()
            .map(|skipped| format!("Skipped {}: {}", skipped.name, skipped.reason)),
    );
    Ok(lines.join("\n"))
}

// Model inference is blocking work
async fn run_match(ctx: &AppContext, profile: FanProfile) -> Result<MatchOutcome> {
    let matching = ctx.matching();
    tokio::task::spawn_blocking(move || matching.match_profile(&profile))
        .await
        .map_err(|e| Error::internal(format!("Matching task failed: {e}")))
}

async fn register(ctx: &AppContext, submission: &FanSubmission, dry_run: bool) -> Result<String> {
    let store = if dry_run {
        ctx.dry_run_store()?
    } else {
        ctx.profile_store()?
    };
    let report = ctx.onboarding(store).complete(submission).await?;

    match (&report.record_key, report.saved) {
        (Some(key), true) => Ok(format!(
            "Verification: {}\n{}\nSaved profile {key}",
            report.verification.as_str(),
            render_outcome(&report.outcome)
        )),
        _ => {
            warn!("Profile for {} was not saved", report.record.nickname);
            Err(Error::storage("Profile could not be saved"))
        }
    }
}

fn render_outcome(outcome: &MatchOutcome) -> String {
    match outcome.result() {
        Some(result) => format!(
            "{}\nAffinity: {}\n{}",
            outcome.describe(),
            result.affinity(),
            result.description
        ),
        None => outcome.describe(),
    }
}

fn read_document(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).io_context(format!("Failed to read document {}", path.display()))
}
