//! gui-themes - inspect GUI themes and lobby preferences from the terminal

use anyhow::{bail, Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

use gui_themes::config::{Config, DEFAULT_GUI};
use gui_themes::preferences::lobby::{self, LobbySettings};
use gui_themes::preferences::Preferences;
use gui_themes::settings::ThemeSettings;
use gui_themes::theme::ThemeDefinition;
use gui_themes::{FixedScreen, ScreenSize, ToolkitContext};

#[derive(ClapParser)]
#[command(name = "gui-themes")]
#[command(about = "Load, validate and query GUI themes", long_about = None)]
struct Cli {
    /// Data directory holding gui/default.xml (default: ~/.gui-themes/data)
    /// Can also be set via GUI_THEMES_DATA_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Theme file to load instead of the one in the data directory
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Screen size used to pick resolutions
    #[arg(short, long, default_value = "1024x768", value_parser = parse_screen)]
    screen: ScreenSize,

    /// Preferences file (default: ~/.gui-themes/preferences.toml)
    #[arg(long, value_name = "FILE")]
    prefs: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load every gui and report what it defines
    Validate,
    /// Print the active gui as JSON
    Dump,
    /// Show the resolution picked for a control
    Control {
        /// Widget type, e.g. button
        control_type: String,
        /// Definition id; unknown ids fall back to "default"
        #[arg(default_value = "default")]
        definition: String,
    },
    /// Show the resolution picked for a window
    Window {
        id: String,
    },
    /// Print the tips of the day in random order
    Tips {
        /// Units the player has met, unlocking unit specific tips
        #[arg(long, value_delimiter = ',')]
        units: Vec<String>,
    },
    /// Lobby preferences
    Lobby {
        #[command(subcommand)]
        action: LobbyAction,
    },
}

#[derive(Subcommand)]
enum LobbyAction {
    /// Show all lobby preferences
    Show,
    /// Change a lobby preference
    Set {
        /// e.g. fi_invert, whisper_friends_only
        key: String,
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
}

fn parse_screen(s: &str) -> Result<ScreenSize, String> {
    ScreenSize::parse(s).ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))
}

#[derive(Serialize)]
struct ThemeSummary<'a> {
    id: &'a str,
    description: &'a str,
    widgets: BTreeMap<&'a str, Vec<&'a str>>,
    windows: Vec<&'a str>,
    settings: &'a ThemeSettings,
    tips: usize,
}

impl<'a> ThemeSummary<'a> {
    fn new(gui: &'a ThemeDefinition) -> Self {
        Self {
            id: &gui.id,
            description: &gui.description,
            widgets: gui
                .control_definition
                .iter()
                .map(|(kind, defs)| (kind.as_str(), defs.keys().map(String::as_str).collect()))
                .collect(),
            windows: gui.window_types.keys().map(String::as_str).collect(),
            settings: gui.settings(),
            tips: gui.tips().len(),
        }
    }
}

fn load_context(cli: &Cli) -> Result<ToolkitContext> {
    let mut ctx = ToolkitContext::with_builtins(FixedScreen(cli.screen));

    let path = match &cli.file {
        Some(file) => Some(file.clone()),
        None => {
            let candidate = Config::gui_path(&Config::data_dir(cli.data_dir.as_deref())?);
            candidate.exists().then_some(candidate)
        }
    };

    match path {
        Some(path) => ctx
            .load_settings(&path)
            .with_context(|| format!("Failed to load gui from {:?}", path))?,
        None => {
            tracing::info!("No theme file in data directory, using the built-in gui");
            ctx.load_settings_from_str(DEFAULT_GUI)
                .context("Failed to load built-in gui")?
        }
    }

    Ok(ctx)
}

fn load_preferences(cli: &Cli) -> Result<Preferences> {
    match &cli.prefs {
        Some(path) => Preferences::load(path),
        None => Preferences::load_default(),
    }
}

fn main() -> Result<()> {
    // Use RUST_LOG to control the level, e.g. RUST_LOG=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.screen.width == 0 || cli.screen.height == 0 {
        bail!("Screen size must be non-zero");
    }

    match &cli.command {
        Commands::Validate => {
            let ctx = load_context(&cli)?;
            for gui in ctx.themes().iter() {
                println!("✓ gui '{}' ({})", gui.id, gui.description);
                for (kind, defs) in &gui.control_definition {
                    println!("  {:<16} {} definition(s)", kind, defs.len());
                }
                println!("  {} window(s), {} tip(s)", gui.window_types.len(), gui.tips().len());
            }
            println!("Active gui: {}", ctx.active_theme().map_or("-", |g| g.id.as_str()));
        }
        Commands::Dump => {
            let ctx = load_context(&cli)?;
            let gui = ctx.active_theme().context("No active gui")?;
            println!("{}", serde_json::to_string_pretty(&ThemeSummary::new(gui))?);
        }
        Commands::Control {
            control_type,
            definition,
        } => {
            let ctx = load_context(&cli)?;
            let resolution = ctx.get_control(control_type, definition)?;
            println!(
                "{} '{}' at {}x{}:",
                control_type, definition, cli.screen.width, cli.screen.height
            );
            println!(
                "  window {}x{}, min {}x{}, default {}x{}, max {}x{}",
                resolution.window_width,
                resolution.window_height,
                resolution.min_width,
                resolution.min_height,
                resolution.default_width,
                resolution.default_height,
                resolution.max_width,
                resolution.max_height
            );
            println!(
                "  font size {}, states: {}",
                resolution.text_font_size,
                resolution
                    .state
                    .iter()
                    .map(|s| s.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        Commands::Window { id } => {
            let mut ctx = load_context(&cli)?;
            let resolution = ctx.get_window_builder(id)?;
            println!("window '{}' at {}x{}:", id, cli.screen.width, cli.screen.height);
            println!(
                "  thresholds {}x{}, definition '{}'",
                resolution.window_width, resolution.window_height, resolution.definition
            );
            if resolution.automatic_placement {
                println!(
                    "  automatic placement ({} / {})",
                    resolution.horizontal_placement, resolution.vertical_placement
                );
            } else {
                println!(
                    "  x={} y={} width={} height={}",
                    resolution.x, resolution.y, resolution.width, resolution.height
                );
            }
        }
        Commands::Tips { units } => {
            let ctx = load_context(&cli)?;
            let encountered: HashSet<String> = units.iter().cloned().collect();
            for tip in ctx.settings().get_tips(&encountered) {
                if tip.source.is_empty() {
                    println!("- {}", tip.text);
                } else {
                    println!("- {} ({})", tip.text, tip.source);
                }
            }
        }
        Commands::Lobby { action } => {
            let mut prefs = load_preferences(&cli)?;
            match action {
                LobbyAction::Show => {
                    let settings = LobbySettings::read(&prefs);
                    println!("{}", toml::to_string_pretty(&settings)?);
                }
                LobbyAction::Set { key, value } => {
                    lobby::set_by_name(&mut prefs, key, *value)?;
                    prefs.save()?;
                    println!("{} = {}", key, value);
                }
            }
        }
    }

    Ok(())
}
