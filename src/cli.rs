//! Command-line interface for relaytext.
//!
//! A thin driver over [`relaytext::Text`], handy for checking how a chat
//! line will be stripped or colored, or what a host resolves to.

use clap::{Parser, Subcommand};

/// rt - chat text and host helpers for game relays.
#[derive(Parser, Debug)]
#[command(
    name = "rt",
    author = "Relaytext Contributors",
    version,
    about = "Strip or translate color markers and resolve hosts",
    after_help = "Examples:\n  \
                  rt strip '§cHello §lWorld'\n  \
                  tail -f chat.log | rt mark\n  \
                  rt --real-ansi translate '§aonline'\n  \
                  rt resolve-host 192.0.2.10"
)]
pub struct Cli {
    /// Set the logging level (trace, debug, info, warn, error) [default: from config, else warn]
    #[arg(short = 'l', long = "loglevel", global = true)]
    pub log_level: Option<String>,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Emit real ESC characters before color codes
    #[arg(long = "real-ansi", global = true)]
    pub real_ansi: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,

    /// Write the default config file if none exists, print its path and exit
    #[arg(long = "init-config")]
    pub init_config: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// What to do with the input.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Remove color markers (reads stdin line by line without TEXT)
    Strip {
        /// Keep surrounding whitespace
        #[arg(long = "no-trim")]
        no_trim: bool,

        /// Text to strip
        text: Option<String>,
    },

    /// Rewrite color markers as ANSI codes (reads stdin line by line without TEXT)
    Translate {
        /// Text to translate
        text: Option<String>,
    },

    /// Rewrite color markers inside an ```ansi block (reads all of stdin without TEXT)
    Mark {
        /// Text to translate
        text: Option<String>,
    },

    /// Resolve an IP address to its hostname
    ResolveHost {
        /// Address to look up
        ip: String,
    },

    /// Resolve a hostname to an IP address
    ResolveIp {
        /// Hostname to look up
        host: String,
    },

    /// Print the current UTC time
    Now,
}

/// Show paths information.
pub fn show_paths() {
    use relaytext::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
