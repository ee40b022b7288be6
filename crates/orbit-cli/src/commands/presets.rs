//! Preset management commands.
//!
//! Provides commands to list, show and save presets.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use orbit_config::{
    Preset, ensure_user_presets_dir, factory_presets, is_factory_preset, list_user_presets,
    preset_name_from_path, resolve_preset, user_presets_dir,
};

use super::common::EffectArgs;

#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: PresetsCommand,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List available presets (factory and user)
    List {
        /// Show only factory presets
        #[arg(long)]
        factory: bool,

        /// Show only user presets
        #[arg(long)]
        user: bool,
    },

    /// Show details of a preset
    Show {
        /// Preset name or path
        name: String,
    },

    /// Save the given effects and parameters as a preset
    Save {
        /// Name for the new preset
        name: String,

        /// Destination file [default: user preset directory]
        path: Option<PathBuf>,

        /// Description of the preset
        #[arg(short, long)]
        description: Option<String>,

        /// Overwrite if the file already exists
        #[arg(long)]
        force: bool,

        #[command(flatten)]
        effect: EffectArgs,
    },
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command {
        PresetsCommand::List { factory, user } => list_presets(factory, user),
        PresetsCommand::Show { name } => show_preset(&name),
        PresetsCommand::Save {
            name,
            path,
            description,
            force,
            effect,
        } => save_preset(&name, path, description, force, &effect),
    }
}

fn list_presets(factory_only: bool, user_only: bool) -> anyhow::Result<()> {
    let show_factory = !user_only;
    let show_user = !factory_only;

    if show_factory {
        println!("Factory Presets:");
        println!("================");
        for preset in factory_presets() {
            let desc = preset.description.as_deref().unwrap_or("");
            println!("  {:20} - {}", preset.name, desc);
        }
        println!();
    }

    if show_user {
        println!("User Presets ({}):", user_presets_dir().display());
        println!("=============");
        let user_presets = list_user_presets();
        if user_presets.is_empty() {
            println!("  (none)");
            println!();
            println!("  Create a preset with: orbit presets save <name> --speed 0.2 ...");
        } else {
            for path in user_presets {
                let name = preset_name_from_path(&path).unwrap_or_else(|| "unknown".into());
                match Preset::load(&path) {
                    Ok(preset) => {
                        let desc = preset.description.as_deref().unwrap_or("");
                        println!("  {:20} - {}", name, desc);
                    }
                    Err(e) => {
                        tracing::debug!(path = %path.display(), error = %e, "unreadable preset");
                        println!("  {:20} - (error loading)", name);
                    }
                }
            }
        }
        println!();
    }

    Ok(())
}

fn show_preset(name: &str) -> anyhow::Result<()> {
    let preset = resolve_preset(name)?;

    println!("Preset: {}", preset.name);
    println!("{}", "=".repeat(8 + preset.name.len()));
    println!();

    if let Some(desc) = &preset.description {
        println!("Description: {}", desc);
        println!();
    }

    println!("Effects: {}", preset.effects.join(" -> "));
    println!();
    println!("Parameters:");
    for key in orbit_core::ParamKey::ALL {
        let marker = if preset.params.get(key).is_some() {
            ""
        } else {
            " (default)"
        };
        println!(
            "  {:14} {}{}",
            key.as_str(),
            preset.params.resolved(key),
            marker
        );
    }

    Ok(())
}

fn save_preset(
    name: &str,
    path: Option<PathBuf>,
    description: Option<String>,
    force: bool,
    effect: &EffectArgs,
) -> anyhow::Result<()> {
    let path = match path {
        Some(path) => path,
        None => {
            if is_factory_preset(name) {
                anyhow::bail!(
                    "'{name}' is a factory preset name. Choose a different name or give an explicit path."
                );
            }
            ensure_user_presets_dir()?.join(format!("{name}.toml"))
        }
    };

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    let mut preset = effect.to_preset(name)?;
    preset.name = name.to_string();
    if let Some(description) = description {
        preset.description = Some(description);
    }
    preset.save(&path)?;

    println!("Saved preset '{}' to {}", name, path.display());
    Ok(())
}
