//! rt - command-line driver for relaytext.
//!
//! Strips or translates color markers from arguments or stdin, and runs
//! single host lookups.

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, Command};
use log::{debug, error, info, warn, LevelFilter};
use std::io::{self, BufRead, Read, Write};

use relaytext::{Config, LogLogger, RelayError, Text, Translator};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    // Handle --init-config flag
    if cli.init_config {
        match Config::ensure_config_file() {
            Ok(path) => println!("{}", path.display()),
            Err(e) => {
                eprintln!("Failed to create config file: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let (config, problems) = load_config(&cli);

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    setup_logging(&level);
    info!("relaytext v{}", env!("CARGO_PKG_VERSION"));

    for problem in &problems {
        error!("Failed to load config: {}", problem);
    }
    if cli.log_level.is_none() && !config.logging.is_valid_level() {
        warn!("Unknown log level {:?}, using warn", config.logging.level);
    }

    if let Err(e) = run(&cli, &config) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Load the base config and apply the `--config` override, if any.
///
/// Logging is not set up yet, so failures are handed back for reporting.
fn load_config(cli: &Cli) -> (Config, Vec<RelayError>) {
    layer_config(Config::load(), cli.config.as_deref())
}

/// Merge an override onto a base config. A broken base falls back to
/// defaults; a broken override is skipped and the base kept.
fn layer_config(
    base: relaytext::Result<Config>,
    override_arg: Option<&str>,
) -> (Config, Vec<RelayError>) {
    let mut problems = Vec::new();

    let mut config = base.unwrap_or_else(|e| {
        problems.push(e);
        Config::default()
    });

    if let Some(arg) = override_arg {
        match Config::parse_override(arg) {
            Ok(override_config) => config.merge(&override_config),
            Err(e) => problems.push(e),
        }
    }

    (config, problems)
}

/// Main application logic.
fn run(cli: &Cli, config: &Config) -> io::Result<()> {
    let logger = LogLogger::with_target(config.logging.target.clone());
    let mut text = Text::from_config(logger, config);
    if cli.real_ansi {
        text = text.with_translator(Translator::real_ansi());
    }
    debug!("Escape prefix: {:?}", text.translator().escape_prefix());

    let Some(command) = &cli.command else {
        debug!("No command given");
        return Ok(());
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Strip { no_trim, text: arg } => {
            let trim = if *no_trim { false } else { config.markers.trim };
            for_each_line(arg.as_deref(), &mut out, |line| text.strip(line, trim))?;
        }
        Command::Translate { text: arg } => {
            for_each_line(arg.as_deref(), &mut out, |line| text.color_ansi(line))?;
        }
        Command::Mark { text: arg } => {
            let input = match arg {
                Some(s) => s.clone(),
                None => read_all_stdin()?,
            };
            writeln!(out, "{}", text.mark_filter(&input))?;
        }
        Command::ResolveHost { ip } => {
            writeln!(out, "{}", text.resolve_host(ip))?;
        }
        Command::ResolveIp { host } => {
            writeln!(out, "{}", text.resolve_ip(host))?;
        }
        Command::Now => {
            writeln!(out, "{}", text.time_now())?;
        }
    }

    out.flush()
}

/// Apply `f` to the argument, or to each stdin line when there is none.
fn for_each_line<W, F>(arg: Option<&str>, out: &mut W, f: F) -> io::Result<()>
where
    W: Write,
    F: Fn(&str) -> String,
{
    if let Some(s) = arg {
        return writeln!(out, "{}", f(s));
    }

    info!("Reading from stdin");
    for line in io::stdin().lock().lines() {
        let line = line?;
        writeln!(out, "{}", f(&line))?;
        // Keep piped output streaming
        out.flush()?;
    }
    Ok(())
}

/// Read stdin to the end, dropping one trailing newline.
fn read_all_stdin() -> io::Result<String> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}
