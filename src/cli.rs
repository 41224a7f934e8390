// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - resolve: print the class string for a kind/variant/size
// - render:  print a sample component's markup (HTML or JSON)
// - config:  show, locate or reset the configuration file
//
// With no subcommand the binary runs the interactive gallery.

use crate::components::{Button, Component, Dialog, Form, List};
use crate::config::{Config, VERSION};
use crate::markup::{html, Callback, Node};
use crate::modal::Document;
use crate::showcase;
use crate::style::{resolve, ComponentKind, DialogVariant, Size};
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::rc::Rc;
use tracing::{debug, warn};

/// bemkit - variant-driven UI components with a modal lifecycle
#[derive(Parser)]
#[command(name = "bemkit")]
#[command(version = VERSION)]
#[command(about = "Design system components: class resolver, markup and terminal gallery", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the BEM class string for a component
    Resolve {
        /// Block name (button, list, form, dialog or any other name)
        kind: String,

        /// Variant name, used literally
        variant: String,

        /// Size name, used literally
        size: String,

        /// Extra classes appended at the end
        #[arg(long)]
        extra: Option<String>,
    },

    /// Render a sample component
    Render {
        #[arg(value_enum)]
        component: RenderTarget,

        /// Variant name (family default when omitted)
        #[arg(long)]
        variant: Option<String>,

        /// Size name (medium when omitted)
        #[arg(long)]
        size: Option<String>,

        /// Extra classes
        #[arg(long)]
        class: Option<String>,

        /// Print the markup tree as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderTarget {
    Button,
    List,
    Form,
    Dialog,
}

impl RenderTarget {
    pub fn kind(self) -> ComponentKind {
        match self {
            RenderTarget::Button => ComponentKind::Button,
            RenderTarget::List => ComponentKind::List,
            RenderTarget::Form => ComponentKind::Form,
            RenderTarget::Dialog => ComponentKind::Dialog,
        }
    }
}

/// Warn about names outside the built-in vocabulary (they still render)
fn check_names(kind: ComponentKind, variant: Option<&str>, size: Option<&str>) {
    if let Some(variant) = variant {
        if !kind.has_variant(variant) {
            warn!(
                kind = kind.as_str(),
                variant, "unknown variant, using it literally"
            );
        }
    }
    if let Some(size) = size {
        if Size::parse(size).is_none() {
            warn!(size, "unknown size, using it literally");
        }
    }
}

/// Run a subcommand
pub fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Resolve {
            kind,
            variant,
            size,
            extra,
        } => {
            match ComponentKind::parse(&kind) {
                Some(family) => check_names(family, Some(&variant), Some(&size)),
                None => debug!(kind = kind.as_str(), "resolving a block outside the design system"),
            }
            println!("{}", resolve(&kind, &variant, &size, extra.as_deref()));
            Ok(())
        }
        Commands::Render {
            component,
            variant,
            size,
            class,
            json,
        } => {
            check_names(component.kind(), variant.as_deref(), size.as_deref());
            let node = render_sample(component, variant, size, class);
            print_node(&node, json)
        }
        Commands::Config { show, reset, path } => {
            if path {
                handle_config_path()
            } else if show {
                handle_config_show(config);
                Ok(())
            } else if reset {
                handle_config_reset()
            } else {
                // No flag provided, show help
                println!("Usage: bemkit config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
                Ok(())
            }
        }
    }
}

/// Build the sample for `render`, applying only the options that were given
pub fn render_sample(
    target: RenderTarget,
    variant: Option<String>,
    size: Option<String>,
    class: Option<String>,
) -> Node {
    match target {
        RenderTarget::Button => Button {
            variant,
            size,
            class,
            ..Button::label("Button")
        }
        .render(),
        RenderTarget::List => List {
            variant,
            size,
            class,
            ..List::of(showcase::SAMPLE_ITEMS)
        }
        .render(),
        RenderTarget::Form => {
            let section = showcase::forms_section(Default::default(), Callback::noop());
            // First form of the section carries the sample fields
            let sample = section
                .find_by_class("form")
                .map(|form| form.children.clone())
                .unwrap_or_default();
            Form {
                variant,
                size,
                class,
                children: sample,
                ..Form::new()
            }
            .render()
        }
        RenderTarget::Dialog => {
            let dialog_variant = variant
                .as_deref()
                .and_then(DialogVariant::parse)
                .unwrap_or_default();
            let mut props =
                showcase::dialog_props(dialog_variant, Callback::noop(), Callback::noop())
                    .open(true);
            // Literal values win over the sample's own choices
            if variant.is_some() {
                props.variant = variant;
            }
            if size.is_some() {
                props.size = size;
            }
            props.class = class;

            // A dialog only renders while its lifecycle is open
            let doc = Rc::new(Document::new());
            let mut dialog = Dialog::new(doc);
            let node = dialog.render(&props).unwrap_or_else(|| Node::fragment(vec![]));
            dialog.unmount();
            node
        }
    }
}

fn print_node(node: &Node, json: bool) -> Result<()> {
    let output = if json {
        serde_json::to_string_pretty(node).context("serializing markup to JSON")?
    } else {
        html::to_html(node)
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output).context("writing markup to stdout")?;
    Ok(())
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().ok_or_else(|| anyhow!("could not determine config path"))?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show(config: &Config) {
    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("stylesheet = {:?}", config.stylesheet.name());
    println!("enable_tui = {}", config.enable_tui);
    println!();
    println!("[gallery]");
    println!("default_size = {:?}", config.gallery.default_size.as_str());
    println!(
        "list_decoration = {:?}",
        config.gallery.list_decoration.name()
    );
    println!("show_logs = {}", config.gallery.show_logs);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!("file_dir = {:?}", config.logging.file_dir.display().to_string());
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().ok_or_else(|| anyhow!("could not determine config path"))?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().context("flushing prompt")?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("reading confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    Config::write_default(&path)?;
    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_resolve_arguments() {
        let cli = Cli::parse_from(["bemkit", "resolve", "button", "secondary", "small", "--extra", "x"]);
        match cli.command {
            Some(Commands::Resolve {
                kind,
                variant,
                size,
                extra,
            }) => {
                assert_eq!(
                    resolve(&kind, &variant, &size, extra.as_deref()),
                    "button button--secondary button--small x"
                );
            }
            _ => panic!("expected resolve"),
        }
    }

    #[test]
    fn render_targets_map_to_component_families() {
        assert_eq!(RenderTarget::Form.kind(), ComponentKind::Form);
        assert_eq!(RenderTarget::Dialog.kind(), ComponentKind::Dialog);
        assert!(RenderTarget::Form.kind().has_variant("secondary"));
        assert!(!RenderTarget::Button.kind().has_variant("bordered"));
    }

    #[test]
    fn no_subcommand_means_gallery() {
        let cli = Cli::parse_from(["bemkit"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn render_applies_defaults_when_options_omitted() {
        let node = render_sample(RenderTarget::Button, None, None, None);
        assert_eq!(
            node.as_element().and_then(|el| el.class.as_deref()),
            Some("button button--primary button--medium")
        );

        let node = render_sample(RenderTarget::List, Some("card".into()), None, Some("wide".into()));
        assert_eq!(
            node.as_element().and_then(|el| el.class.as_deref()),
            Some("list list--card list--medium wide")
        );
    }

    #[test]
    fn render_form_keeps_sample_fields() {
        let node = render_sample(RenderTarget::Form, Some("secondary".into()), None, None);
        let form = node.as_element().unwrap();
        assert_eq!(form.class.as_deref(), Some("form form--secondary form--medium"));
        assert_eq!(form.children.len(), 2);
    }

    #[test]
    fn render_dialog_emits_open_markup() {
        let node = render_sample(RenderTarget::Dialog, Some("warning".into()), Some("large".into()), None);
        let html = html::to_html(&node);
        assert!(html.contains(r#"class="dialog dialog--warning dialog--large""#));
        assert!(html.contains("dialog__actions"));
        assert!(html.contains("dialog-overlay"));
    }

    #[test]
    fn render_dialog_accepts_unknown_variant_literally() {
        let node = render_sample(RenderTarget::Dialog, Some("success".into()), None, None);
        let container = node.find_by_class("dialog").unwrap();
        assert_eq!(
            container.class.as_deref(),
            Some("dialog dialog--success dialog--medium")
        );
    }
}
