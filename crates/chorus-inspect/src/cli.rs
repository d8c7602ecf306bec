use chorus_core::Snowflake;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "chorus-inspect", about = "Resolve chat entities and their relationships")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/chorus.toml")]
    pub config: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a guild and its owner
    Guild {
        #[arg(long)]
        guild: Snowflake,
    },
    /// Show a guild member with their roles and base permissions
    Member {
        #[arg(long)]
        guild: Snowflake,
        #[arg(long)]
        user: Snowflake,
    },
    /// Show a custom emoji and the roles allowed to use it
    Emoji {
        #[arg(long)]
        guild: Snowflake,
        #[arg(long)]
        emoji: Snowflake,
    },
    /// Show a user account
    User {
        #[arg(long)]
        user: Snowflake,
    },
}
