use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use leader_key::cli::{parse_key, CliArgs, Command};
use leader_key::config::{read_config, validate as validate_tree, Group, LogAlertHandler, UserConfig};
use leader_key::keys::glyphs;
use leader_key::{KeyOutcome, NavigationController, Settings};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    leader_key::tracing::init();

    match args.command {
        Command::Validate { config } => validate(config),
        Command::Walk { keys, config } => walk(&keys, config),
        Command::Glyphs => {
            print_glyphs();
            Ok(())
        }
        Command::Init => init(),
        Command::Settings {
            force_standard_layout,
        } => settings(force_standard_layout),
    }
}

/// Path of the tree to load: the override, or the configured location
fn config_path(config: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = config {
        return Ok(path);
    }
    let user_config = UserConfig::new(Settings::load(), LogAlertHandler)
        .context("Failed to locate config directory")?;
    Ok(user_config.path())
}

fn load_tree(path: &Path) -> Result<Group> {
    read_config(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn validate(config: Option<PathBuf>) -> Result<()> {
    let path = config_path(config)?;
    let root = load_tree(&path)?;
    let errors = validate_tree(&root);

    if errors.is_empty() {
        println!("{}: ok ({} items)", path.display(), root.item_count());
        return Ok(());
    }

    for error in &errors {
        println!("{}", error);
    }
    bail!("{} validation error(s) in {}", errors.len(), path.display())
}

fn walk(keys: &[String], config: Option<PathBuf>) -> Result<()> {
    let path = config_path(config)?;
    let root = load_tree(&path)?;

    let mut nav = NavigationController::new();
    nav.activate();

    for (i, arg) in keys.iter().enumerate() {
        let Some(glyph) = parse_key(arg) else {
            bail!("Unknown key: {}", arg);
        };

        match nav.on_key(&root, &glyph) {
            KeyOutcome::Entered(_) => {
                println!("{} → {}", glyph, nav.breadcrumbs(&root).join(" › "));
            }
            KeyOutcome::NoMatch => println!("{} → no binding", glyph),
            KeyOutcome::Dispatch(action) => {
                println!(
                    "{} → {} {} ({})",
                    glyph,
                    action.action_type,
                    action.value,
                    action.display_label()
                );
                if i + 1 < keys.len() {
                    println!("ignoring {} remaining key(s)", keys.len() - i - 1);
                }
                return Ok(());
            }
            KeyOutcome::Inactive => break,
        }
    }

    if let Some(group) = nav.current_group(&root) {
        let choices: Vec<String> = group
            .actions
            .iter()
            .map(|item| {
                format!(
                    "{} {}",
                    glyphs::display_glyph(item.key().unwrap_or("?")),
                    item.display_label()
                )
            })
            .collect();
        println!("waiting: {}", choices.join(", "));
    }
    Ok(())
}

fn print_glyphs() {
    for entry in glyphs::entries() {
        if entry.shifted {
            continue;
        }
        let kind = if entry.special { "special" } else { "printable" };
        println!("0x{:02X}  {:<3} {:<14} {}", entry.keycode, entry.glyph, entry.name, kind);
    }
}

fn init() -> Result<()> {
    let mut user_config = UserConfig::new(Settings::load(), LogAlertHandler)
        .context("Failed to locate config directory")?;

    if user_config.exists() {
        println!("Config already exists at {}", user_config.path().display());
        return Ok(());
    }

    user_config.ensure_and_load();
    if !user_config.exists() {
        bail!("Could not write {}", user_config.path().display());
    }
    println!("Wrote default config to {}", user_config.path().display());
    Ok(())
}

fn settings(force_standard_layout: Option<bool>) -> Result<()> {
    let mut settings = Settings::load();

    if let Some(force) = force_standard_layout {
        settings
            .set_force_standard_layout(force)
            .context("Failed to save settings")?;
    }

    println!("force_standard_layout: {}", settings.force_standard_layout);
    match &settings.config_dir {
        Some(dir) => println!("config_dir: {}", dir.display()),
        None => println!("config_dir: (default)"),
    }
    Ok(())
}
