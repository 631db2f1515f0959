//! Integration tests for relaytext.
//!
//! These exercise the `Text` facade end to end: marker handling as a
//! relay would run it over chat lines, and host resolution with an
//! injected logger and resolver.

use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use relaytext::{
    Config, Logger, LookupOutcome, NullLogger, ResolveError, Resolver, SkipReason, Text,
    Translator,
};

/// Logger double keeping every line.
#[derive(Default)]
struct Recording {
    lines: Mutex<Vec<(&'static str, String)>>,
}

impl Recording {
    fn lines(&self) -> Vec<(&'static str, String)> {
        self.lines.lock().unwrap().clone()
    }
}

impl Logger for Recording {
    fn info(&self, message: &str) {
        self.lines.lock().unwrap().push(("info", message.to_string()));
    }

    fn error(&self, message: &str) {
        self.lines.lock().unwrap().push(("error", message.to_string()));
    }
}

/// Resolver double answering from a small table.
#[derive(Default)]
struct TableResolver {
    calls: AtomicUsize,
}

impl Resolver for TableResolver {
    fn reverse(&self, addr: IpAddr) -> Result<String, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match addr.to_string().as_str() {
            "192.0.2.10" => Ok("lobby.example.net".to_string()),
            "192.0.2.11" => Ok(String::new()),
            "192.0.2.12" => Err(ResolveError::Other("connection refused".to_string())),
            _ => Err(ResolveError::NotFound("Unknown host".to_string())),
        }
    }

    fn forward(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match host {
            "lobby.example.net" => Ok(vec!["192.0.2.10".parse().unwrap()]),
            "broken.example.net" => Err(ResolveError::Other("resolver crashed".to_string())),
            _ => Err(ResolveError::NotFound("Name or service not known".to_string())),
        }
    }
}

fn fixture() -> (Arc<Recording>, Arc<TableResolver>, Text<Arc<Recording>, Arc<TableResolver>>) {
    let logger = Arc::new(Recording::default());
    let resolver = Arc::new(TableResolver::default());
    let text = Text::with_resolver(Arc::clone(&logger), Arc::clone(&resolver));
    (logger, resolver, text)
}

// =============================================================================
// Marker handling
// =============================================================================

#[test]
fn test_strip_chat_line() {
    let text = Text::new(NullLogger);
    let line = "§7[§cAdmin§7] §fSteve§7: §fhello @everyone | bye";
    assert_eq!(text.strip(line, true), "[Admin] Steve: hello @ everyone  bye");
}

#[test]
fn test_strip_properties_from_docs() {
    let text = Text::new(NullLogger);
    assert_eq!(text.strip("§cHello §lWorld", true), "Hello World");
    assert_eq!(text.strip("a@b", true), "a@ b");
    assert_eq!(text.strip("  §ahi  ", true), "hi");
    assert_eq!(text.strip("  §ahi  ", false), "  hi  ");
}

#[test]
fn test_strip_default_follows_config() {
    let config: Config = toml::from_str("[markers]\nTrim = false").unwrap();
    let text = Text::from_config(NullLogger, &config);
    assert_eq!(text.strip_default("  §ahi  "), "  hi  ");

    let text = Text::new(NullLogger);
    assert_eq!(text.strip_default("  §ahi  "), "hi");
}

#[test]
fn test_translate_chat_line() {
    let text = Text::new(NullLogger);
    let out = text.color_ansi("§c[PvP] §lKill §r§ejoe §8(§7x2§8)");
    assert_eq!(out, "[31m[PvP] Kill [33mjoe ([30mx2)");
    assert!(!out.contains('§'));
}

#[test]
fn test_mark_filter_fences() {
    let text = Text::new(NullLogger);
    let out = text.mark_filter("§chi");
    assert!(out.starts_with("```ansi\n"));
    assert!(out.ends_with("\n```"));
    assert!(out.contains("[31m"));
    assert!(!out.contains('§'));
}

#[test]
fn test_real_ansi_from_config() {
    let config: Config = toml::from_str("[markers]\nEscapePrefix = \"\\u001b\"").unwrap();
    let text = Text::from_config(NullLogger, &config);
    assert_eq!(text.color_ansi("§bcyan"), "\x1b[36mcyan");
    assert_eq!(text.translator(), &Translator::real_ansi());
}

#[test]
fn test_with_translator_overrides() {
    let text = Text::new(NullLogger).with_translator(Translator::with_escape_prefix("<ESC>"));
    assert_eq!(text.mark_filter("§dx"), "```ansi\n<ESC>[35mx\n```");
}

// =============================================================================
// Host resolution
// =============================================================================

#[test]
fn test_resolve_host_loopback() {
    let (logger, resolver, text) = fixture();
    assert_eq!(text.resolve_host("127.0.0.1"), "127.0.0.1");
    assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);
    assert!(logger.lines().is_empty());
}

#[test]
fn test_resolve_host_hostname_input() {
    let (logger, resolver, text) = fixture();
    assert_eq!(text.resolve_host("not.an.ip"), "not.an.ip");
    assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);
    assert_eq!(logger.lines().len(), 1);
    assert_eq!(logger.lines()[0].0, "info");
}

#[test]
fn test_resolve_host_paths() {
    let (logger, _resolver, text) = fixture();

    assert_eq!(text.resolve_host("192.0.2.10"), "lobby.example.net");
    assert_eq!(text.resolve_host("192.0.2.11"), "192.0.2.11");
    assert_eq!(text.resolve_host("192.0.2.99"), "192.0.2.99");
    assert_eq!(text.resolve_host("192.0.2.12"), "192.0.2.12");

    let levels: Vec<&str> = logger.lines().iter().map(|(level, _)| *level).collect();
    assert_eq!(levels, vec!["info", "info", "error"]);
}

#[test]
fn test_resolve_ip_paths() {
    let (logger, _resolver, text) = fixture();

    assert_eq!(text.resolve_ip("lobby.example.net"), "192.0.2.10");
    assert_eq!(text.resolve_ip("gone.example.net"), "gone.example.net");
    assert_eq!(text.resolve_ip("broken.example.net"), "broken.example.net");

    let lines = logger.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].0, "info");
    assert_eq!(lines[1].0, "error");
    assert!(lines[1].1.contains("resolver crashed"));
}

#[test]
fn test_outcomes_distinguish_kinds() {
    let (_logger, _resolver, text) = fixture();
    let hosts = text.hosts();

    assert_eq!(
        hosts.reverse_outcome("127.0.0.1"),
        LookupOutcome::Skipped(SkipReason::Loopback)
    );
    assert_eq!(hosts.reverse_outcome("192.0.2.11"), LookupOutcome::NoName);
    assert!(matches!(
        hosts.forward_outcome("gone.example.net"),
        LookupOutcome::NotFound(_)
    ));
    assert!(matches!(
        hosts.forward_outcome("broken.example.net"),
        LookupOutcome::Failed(_)
    ));
}

#[test]
fn test_system_resolver_unknown_host_falls_back() {
    let text = Text::new(NullLogger);
    let host = "nonexistent.invalid.hostname.test";
    assert_eq!(text.resolve_ip(host), host);
}

#[test]
fn test_system_resolver_nul_host_logs_error() {
    let logger = Recording::default();
    let text = Text::new(&logger);

    assert_eq!(text.resolve_ip("bad\0host"), "bad\0host");
    let lines = logger.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0, "error");
    assert!(lines[0].1.contains("bad\0host"));
}

// =============================================================================
// Clock and threading
// =============================================================================

#[test]
fn test_time_now_pattern() {
    let text = Text::new(NullLogger);
    let re = regex::Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").unwrap();
    let first = text.time_now();
    let second = text.time_now();
    assert!(re.is_match(&first), "bad timestamp {}", first);
    assert!(second >= first);
}

#[test]
fn test_shared_across_threads() {
    let (logger, _resolver, text) = fixture();
    let text = Arc::new(text);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let text = Arc::clone(&text);
            std::thread::spawn(move || {
                let stripped = text.strip(&format!("§{}worker {}", i, i), true);
                let host = text.resolve_host("192.0.2.10");
                (stripped, host)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (stripped, host) = handle.join().unwrap();
        assert_eq!(stripped, format!("worker {}", i));
        assert_eq!(host, "lobby.example.net");
    }
    assert!(logger.lines().is_empty());
}
