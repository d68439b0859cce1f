use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jiralink::client::JiraSession;
use jiralink::commands;
use jiralink::config::Config;

#[derive(Parser)]
#[command(name = "jiralink")]
#[command(about = "A lean Jira CLI for editor integration")]
#[command(version)]
struct Cli {
    /// URL of the Jira server
    #[arg(short, long, env = "JIRA_SERVER")]
    server: String,

    /// Jira username
    #[arg(short, long, env = "JIRA_USER")]
    user: String,

    /// Jira password (prompted if absent)
    #[arg(short, long, env = "JIRA_PASSWORD")]
    password: Option<String>,

    /// Project key scoping the issue queries
    #[arg(long, env = "JIRA_PROJECT", default_value = "AC")]
    project: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List unresolved issues assigned to you
    Issues {
        /// Print completion-menu records instead of display lines
        #[arg(long)]
        menu: bool,
    },

    /// Show an issue and its comments
    Show {
        /// Issue key, e.g. AC-186
        key: String,
    },

    /// Add a comment to an issue
    Comment {
        /// Issue key
        key: String,
        /// Comment text
        text: String,
    },

    /// Log work on an issue
    Worklog {
        /// Issue key
        key: String,
        /// Time spent: "1h30m", "45m", or seconds
        #[arg(short, long)]
        time: String,
        /// Worklog comment
        #[arg(short, long)]
        comment: Option<String>,
    },

    /// Transition an issue to a named status
    Transition {
        /// Issue key
        key: String,
        /// Target status label, e.g. "In Progress"
        status: String,
    },

    /// List assigned issues, then show comments for the given keys
    Overview {
        /// Issue keys to expand
        keys: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::new(cli.server, cli.user, cli.project, cli.password)?;
    let session = JiraSession::connect(&config)?;

    match cli.command {
        Commands::Issues { menu } => commands::issues::run(&session, &config.project, menu),

        Commands::Show { key } => commands::show::run(&session, &config.project, &key),

        Commands::Comment { key, text } => commands::comment::run(&session, &key, &text),

        Commands::Worklog { key, time, comment } => {
            commands::worklog::run(&session, &key, &time, comment.as_deref())
        }

        Commands::Transition { key, status } => {
            commands::transition::run(&session, &key, &status)
        }

        Commands::Overview { keys } => commands::overview::run(&session, &config.project, &keys),
    }
}
