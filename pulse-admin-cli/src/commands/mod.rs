mod catalog;
mod config_cmd;
mod dashboard;
mod list;
mod moderation;
mod stats;
mod users;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::api::ApiClient;
use crate::config::Config;

pub use catalog::{NewChallengeArgs, NewExerciseArgs};
pub use dashboard::DashboardCommand;
pub use list::{print_table, render_table};
pub use stats::StatsCommand;

#[derive(Parser)]
#[command(name = "pulse-admin-cli")]
#[command(about = "Administration dashboard for the Pulse fitness challenge app", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "PULSE_ADMIN_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse users
    #[command(subcommand)]
    Users(UsersSubcommands),

    /// Browse training sessions
    #[command(subcommand)]
    Trainings(TrainingsSubcommands),

    /// Browse and add exercises
    #[command(subcommand)]
    Exercises(ExercisesSubcommands),

    /// Browse and add challenges
    #[command(subcommand)]
    Challenges(ChallengesSubcommands),

    /// Browse comment reports
    #[command(subcommand)]
    Reports(ReportsSubcommands),

    /// Moderate a reported comment
    #[command(subcommand)]
    Comment(CommentSubcommands),

    /// Show user and training counts
    Stats(StatsCommand),

    /// Launch interactive dashboard
    Dashboard(DashboardCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum UsersSubcommands {
    /// List users
    List {
        /// Only show usernames containing this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show a user with their trainings and challenges
    Show {
        /// User ID
        id: i64,
    },
}

#[derive(Subcommand)]
enum TrainingsSubcommands {
    /// List training sessions
    List,
}

#[derive(Subcommand)]
enum ExercisesSubcommands {
    /// List exercises
    List {
        /// Only show titles containing this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Add an exercise to the catalog
    Add(NewExerciseArgs),
}

#[derive(Subcommand)]
enum ChallengesSubcommands {
    /// List challenges
    List {
        /// Only show names containing this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Create a challenge
    Add(NewChallengeArgs),
}

#[derive(Subcommand)]
enum ReportsSubcommands {
    /// List reports
    List {
        /// Only show reports on comment ids containing this text
        #[arg(short, long)]
        search: Option<String>,
    },
}

#[derive(Subcommand)]
enum CommentSubcommands {
    /// Show a comment
    Show {
        /// Comment ID
        id: i64,
    },

    /// Delete a comment and its reports
    Delete {
        /// Comment ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Keep a comment and dismiss its reports
    Keep {
        /// Comment ID
        id: i64,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,

    /// Edit configuration file
    Edit,

    /// Initialize configuration with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Loaded configuration plus the file it came from
pub struct Context {
    pub config: Config,
    pub config_path: PathBuf,
}

impl Context {
    pub fn load(path: Option<&std::path::Path>) -> Result<Self> {
        let config_path = Config::resolve_path(path)?;
        let config = Config::load_from(&config_path)?;
        tracing::debug!("Using configuration {}", config_path.display());

        Ok(Self { config, config_path })
    }

    pub fn client(&self) -> Result<ApiClient> {
        ApiClient::new(&self.config)
    }
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        if let Commands::Completions { shell } = self.command {
            generate_completions(shell);
            return Ok(());
        }

        let ctx = Context::load(self.config.as_deref())?;

        match self.command {
            Commands::Users(subcmd) => match subcmd {
                UsersSubcommands::List { search } => users::list_users(&ctx, search).await,
                UsersSubcommands::Show { id } => users::show_user(&ctx, id).await,
            },
            Commands::Trainings(TrainingsSubcommands::List) => list::list_trainings(&ctx).await,
            Commands::Exercises(subcmd) => match subcmd {
                ExercisesSubcommands::List { search } => list::list_exercises(&ctx, search).await,
                ExercisesSubcommands::Add(args) => catalog::add_exercise(&ctx, args).await,
            },
            Commands::Challenges(subcmd) => match subcmd {
                ChallengesSubcommands::List { search } => list::list_challenges(&ctx, search).await,
                ChallengesSubcommands::Add(args) => catalog::add_challenge(&ctx, args).await,
            },
            Commands::Reports(ReportsSubcommands::List { search }) => list::list_reports(&ctx, search).await,
            Commands::Comment(subcmd) => match subcmd {
                CommentSubcommands::Show { id } => moderation::show_comment(&ctx, id).await,
                CommentSubcommands::Delete { id, force } => moderation::delete_comment(&ctx, id, force).await,
                CommentSubcommands::Keep { id } => moderation::keep_comment(&ctx, id).await,
            },
            Commands::Stats(cmd) => cmd.execute(&ctx).await,
            Commands::Dashboard(cmd) => cmd.execute(&ctx).await,
            Commands::Config(subcmd) => match subcmd {
                ConfigSubcommands::Show => config_cmd::show_config(&ctx),
                ConfigSubcommands::Edit => config_cmd::edit_config(&ctx),
                ConfigSubcommands::Init { force } => config_cmd::init_config(&ctx, force),
            },
            Commands::Completions { .. } => Ok(()),
        }
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
