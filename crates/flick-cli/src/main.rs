//! Flick CLI - check, render and replay toggle switches.

#![allow(
    clippy::needless_pass_by_value,
    clippy::uninlined_format_args,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::print_stdout,
    clippy::print_stderr
)]

mod script;

use clap::{Parser, Subcommand, ValueEnum};
use flick_core::{Mounted, Node, PointerBus};
use flick_widgets::{Switch, SwitchChanged};
use flick_yaml::{ConfigError, SwitchManifest};
use script::ScriptError;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "FLICK_LOG";

#[derive(Parser)]
#[command(name = "flick")]
#[command(about = "Draggable toggle switch toolkit")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a switch manifest
    Check {
        /// Path to the manifest
        manifest: PathBuf,
    },

    /// Print the rendered node tree of a switch
    Render {
        /// Path to the manifest (default switch if omitted)
        manifest: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Css)]
        format: Format,
    },

    /// Apply a pointer script to a switch and print each transition
    Replay {
        /// Path to the manifest (default switch if omitted)
        manifest: Option<PathBuf>,

        /// Steps such as "down 20,20; up"
        #[arg(short, long)]
        script: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One `.class { ... }` rule per node
    Css,
    /// Node tree as JSON
    Json,
    /// Indented markup
    Markup,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid script: {0}")]
    Script(#[from] ScriptError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { manifest } => check(&manifest),
        Commands::Render { manifest, format } => render(manifest.as_deref(), format),
        Commands::Replay { manifest, script } => replay(manifest.as_deref(), &script),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(manifest: Option<&Path>) -> Result<Switch, CliError> {
    match manifest {
        Some(path) => Ok(SwitchManifest::from_path(path)?.build()),
        None => {
            debug!("no manifest given, using default switch");
            Ok(Switch::new())
        }
    }
}

fn check(path: &Path) -> Result<(), CliError> {
    println!("Checking manifest: {}", path.display());
    let manifest = SwitchManifest::from_path(path)?;
    let theme = &manifest.theme;
    let (width, height) = theme.outer_size();

    println!("Manifest valid!");
    println!("  Initial state: {}", state_word(manifest.props().initial_on()));
    match &manifest.labels {
        Some(labels) => println!("  Labels: {} / {}", labels.on, labels.off),
        None => println!("  Labels: none"),
    }
    println!("  Track: {}px wide, {}x{} outer", theme.track.width, width, height);
    println!(
        "  Circle: {}px, on {} / off {}",
        theme.circle.height,
        theme.circle.on_color.to_hex(),
        theme.circle.off_color.to_hex()
    );
    println!("  Transition: {}ms", theme.transition_ms);
    Ok(())
}

fn render(manifest: Option<&Path>, format: Format) -> Result<(), CliError> {
    let switch = load(manifest)?;
    let node = flick_core::Widget::render(&switch);
    print!("{}", format_node(&node, format)?);
    Ok(())
}

fn format_node(node: &Node, format: Format) -> Result<String, CliError> {
    Ok(match format {
        Format::Css => {
            let mut out = String::new();
            write_rules(node, &mut out);
            out
        }
        Format::Json => {
            let mut json = serde_json::to_string_pretty(node)?;
            json.push('\n');
            json
        }
        Format::Markup => node.to_markup(),
    })
}

fn write_rules(node: &Node, out: &mut String) {
    let selector = node
        .class_name
        .split_whitespace()
        .map(|c| format!(".{c}"))
        .collect::<String>();
    let selector = if selector.is_empty() {
        node.tag.clone()
    } else {
        selector
    };
    out.push_str(&format!("{selector} {{ {} }}\n", node.style.to_css()));
    for child in &node.children {
        write_rules(child, out);
    }
}

fn replay(manifest: Option<&Path>, script: &str) -> Result<(), CliError> {
    let steps = script::parse(script)?;
    let bus = PointerBus::new();
    let mounted = Mounted::mount(load(manifest)?, &bus);
    println!("start: {}", describe(&mounted));

    for step in steps {
        let delivered = bus.dispatch(&step.event(mounted.id()));
        debug!(%step, delivered, "replayed step");

        let changes: Vec<bool> = mounted
            .take_messages()
            .iter()
            .filter_map(|m| m.downcast_ref::<SwitchChanged>().map(|c| c.on))
            .collect();
        let mut line = format!("{:<20} -> {}", step.to_string(), describe(&mounted));
        for on in changes {
            line.push_str(&format!(" (switched {})", state_word(on)));
        }
        println!("{line}");
    }

    println!("final: {}", mounted.with(|s| state_word(s.is_on())));
    Ok(())
}

fn describe(mounted: &Mounted<Switch>) -> String {
    mounted.with(|s| {
        if s.is_dragging() {
            format!("{} dragging", state_word(s.is_on()))
        } else {
            state_word(s.is_on()).to_string()
        }
    })
}

const fn state_word(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flick_widgets::Labels;

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from(["flick", "render", "--format", "json"]).unwrap();
        match cli.command {
            Commands::Render { manifest, format } => {
                assert!(manifest.is_none());
                assert_eq!(format, Format::Json);
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_cli_replay_requires_script() {
        assert!(Cli::try_parse_from(["flick", "replay"]).is_err());
        assert!(Cli::try_parse_from(["flick", "replay", "--script", "down 1,1; up"]).is_ok());
    }

    #[test]
    fn test_css_rules() {
        let node = flick_core::Widget::render(&Switch::new().labels(Labels::new("ON", "OFF")));
        let css = format_node(&node, Format::Css).unwrap();
        let lines: Vec<&str> = css.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(".switch.off { width: 100px"));
        assert!(lines[1].starts_with(".circle { "));
        assert!(lines[2].starts_with(".label { position: absolute"));
    }

    #[test]
    fn test_json_output() {
        let node = flick_core::Widget::render(&Switch::with_state(true));
        let json = format_node(&node, Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["class_name"], "switch on");
        assert_eq!(value["children"][0]["class_name"], "circle");
    }

    #[test]
    fn test_state_word() {
        assert_eq!(state_word(true), "on");
        assert_eq!(state_word(false), "off");
    }

    #[test]
    fn test_replay_default_switch() {
        assert!(replay(None, "down 20,20; up").is_ok());
        assert!(matches!(replay(None, "jump"), Err(CliError::Script(_))));
    }
}
