use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::str::FromStr;

use crate::types::{TicketStatus, VALID_STATUSES};

#[derive(Parser)]
#[command(name = "ticketapp")]
#[command(about = "Minimal ticket tracking from the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new ticket
    #[command(visible_alias = "c")]
    Create {
        /// Ticket title
        title: String,

        /// Description text (max 1000 characters)
        #[arg(short, long)]
        description: Option<String>,

        /// Status: open, in_progress, closed (default: open)
        #[arg(short, long)]
        status: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List tickets, newest first
    Ls {
        /// Filter by status
        #[arg(long, value_parser = parse_status)]
        status: Option<TicketStatus>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display a ticket
    #[command(visible_alias = "s")]
    Show {
        /// Ticket ID (can be partial)
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change a ticket's title, description or status
    Update {
        /// Ticket ID (can be partial)
        id: String,

        #[arg(long)]
        title: Option<String>,

        /// New description (empty string clears it)
        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        status: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a ticket
    #[command(visible_alias = "rm")]
    Delete {
        /// Ticket ID (can be partial)
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ticket counts per status
    Dashboard {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start a session
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create an account and start a session
    Signup {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// End the current session
    Logout {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the signed-in user
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive board
    View,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (latency_ms, notification_ms, require_login)
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (latency_ms, notification_ms, require_login)
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            UpdateOptions, cmd_config_get, cmd_config_set, cmd_config_show, cmd_create,
            cmd_dashboard, cmd_delete, cmd_login, cmd_logout, cmd_ls, cmd_show, cmd_signup,
            cmd_update, cmd_view, cmd_whoami,
        };

        match self {
            Commands::Create {
                title,
                description,
                status,
                json,
            } => cmd_create(&title, description.as_deref(), status.as_deref(), json).await,
            Commands::Ls { status, json } => cmd_ls(status, json).await,
            Commands::Show { id, json } => cmd_show(&id, json).await,
            Commands::Update {
                id,
                title,
                description,
                status,
                json,
            } => {
                cmd_update(
                    &id,
                    UpdateOptions {
                        title,
                        description,
                        status,
                    },
                    json,
                )
                .await
            }
            Commands::Delete { id, yes, json } => cmd_delete(&id, yes, json).await,
            Commands::Dashboard { json } => cmd_dashboard(json).await,

            Commands::Login {
                email,
                password,
                json,
            } => cmd_login(&email, &password, json),
            Commands::Signup {
                name,
                email,
                password,
                json,
            } => cmd_signup(&name, &email, &password, json),
            Commands::Logout { json } => cmd_logout(json),
            Commands::Whoami { json } => cmd_whoami(json),

            Commands::View => cmd_view().await,

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn parse_with_validation<T, F>(
    s: &str,
    parser: F,
    field_name: &str,
    valid_values: &[&str],
) -> Result<T, String>
where
    F: FnOnce(&str) -> Result<T, String>,
{
    parser(s).map_err(|_| {
        format!(
            "Invalid {}. Must be one of: {}",
            field_name,
            valid_values.join(", ")
        )
    })
}

fn parse_status(s: &str) -> Result<TicketStatus, String> {
    parse_with_validation(
        s,
        |v| TicketStatus::from_str(v).map_err(|_| String::new()),
        "status",
        VALID_STATUSES,
    )
}

pub fn generate_completions(shell: Shell) {
    clap_complete::generate(shell, &mut Cli::command(), "ticketapp", &mut io::stdout());
}
