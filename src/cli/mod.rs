pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "trivpass")]
#[command(about = "Turn personal trivia answers into a memorable password", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a password from your trivia answers
    Generate {
        /// Childhood pet's name (prompted if omitted)
        #[arg(long)]
        pet: Option<String>,

        /// A city you'd love to visit (prompted if omitted)
        #[arg(long)]
        city: Option<String>,

        /// Childhood dream job (prompted if omitted)
        #[arg(long)]
        job: Option<String>,

        /// Copy password to clipboard
        #[arg(short, long)]
        copy: bool,

        /// Mask the password in terminal output
        #[arg(long)]
        hide: bool,

        /// Seed the generator for a reproducible password
        #[arg(long)]
        seed: Option<u64>,

        /// Seconds before the clipboard is cleared (0 disables)
        #[arg(long, env = "TRIVPASS_CLIPBOARD_TIMEOUT", default_value = "30")]
        clipboard_timeout: u64,
    },

    /// Score the strength of any password
    Strength {
        /// Password to score
        password: String,
    },

    /// List the trivia questions
    Questions,

    /// Hold copied text on the clipboard (spawned by `generate --copy`)
    #[cfg(target_os = "linux")]
    #[command(hide = true)]
    HoldClipboard {
        /// Seconds to hold before clearing (0 holds until replaced)
        #[arg(long)]
        timeout: u64,
    },
}
