//! Effect listing and information command.

#![allow(clippy::print_literal)] // Table headers use literal strings intentionally

use clap::Args;
use orbit_core::ParamKey;
use orbit_effects::{DEFAULT_EFFECTS, EffectDescriptor, EffectKind};
use serde::Serialize;

#[derive(Args)]
pub struct EffectsArgs {
    /// Show details for a specific effect
    #[arg(value_name = "EFFECT")]
    effect: Option<String>,

    /// Print machine-readable JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct EffectListing {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    params: Vec<ParamListing>,
}

#[derive(Serialize)]
struct ParamListing {
    key: &'static str,
    name: &'static str,
    min: f32,
    // `None` for unbounded parameters
    max: Option<f32>,
    default: f32,
    unit: &'static str,
}

impl ParamListing {
    fn new(key: ParamKey) -> Self {
        let desc = key.descriptor();
        Self {
            key: key.as_str(),
            name: desc.name,
            min: desc.min,
            max: desc.max.is_finite().then_some(desc.max),
            default: desc.default,
            unit: desc.unit.suffix(),
        }
    }

    fn range(&self) -> String {
        match self.max {
            Some(max) => format!("{}-{}", self.min, max),
            None => format!(">= {}", self.min),
        }
    }
}

impl From<EffectDescriptor> for EffectListing {
    fn from(desc: EffectDescriptor) -> Self {
        Self {
            id: desc.id,
            name: desc.name,
            description: desc.description,
            category: desc.category.name(),
            params: desc.params.iter().copied().map(ParamListing::new).collect(),
        }
    }
}

fn listings() -> Vec<EffectListing> {
    EffectKind::BUILTIN
        .iter()
        .filter_map(EffectKind::descriptor)
        .map(EffectListing::from)
        .collect()
}

fn trim_params() -> Vec<ParamListing> {
    [ParamKey::TrimStart, ParamKey::TrimEnd]
        .into_iter()
        .map(ParamListing::new)
        .collect()
}

pub fn run(args: EffectsArgs) -> anyhow::Result<()> {
    let effects = listings();

    if let Some(effect_id) = &args.effect {
        let effect = effects
            .iter()
            .find(|e| e.id.eq_ignore_ascii_case(effect_id.trim()))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown effect: {effect_id} (available: {})",
                    EffectKind::builtin_ids().collect::<Vec<_>>().join(", ")
                )
            })?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(effect)?);
            return Ok(());
        }

        let title = format!("{} ({})", effect.name, effect.id);
        println!("{title}");
        println!("{}", "=".repeat(title.len()));
        println!();
        println!("{}", effect.description);
        println!();
        print_params(&effect.params);

        let flags: Vec<String> = effect
            .params
            .iter()
            .map(|p| format!("--set {}={}", p.key, p.default))
            .collect();
        println!();
        println!("Example usage:");
        println!();
        println!(
            "  orbit convert input.mp3 output.wav --effects {} {}",
            effect.id,
            flags.join(" ")
        );
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&effects)?);
        return Ok(());
    }

    println!("Available Effects");
    println!("=================");
    println!();
    for effect in &effects {
        println!(
            "  {:14} {:10} - {}",
            effect.id,
            format!("[{}]", effect.category),
            effect.description
        );
    }
    println!();
    println!("Default chain: {}", DEFAULT_EFFECTS.join(","));
    println!();
    println!("Applied to every chain:");
    println!();
    print_params(&trim_params());
    println!();
    println!("Use 'orbit effects <ID>' for parameter details.");

    Ok(())
}

fn print_params(params: &[ParamListing]) {
    println!("Parameters:");
    println!();
    println!(
        "  {:14}  {:14}  {:9}  {}",
        "Key", "Name", "Default", "Range"
    );
    println!(
        "  {:14}  {:14}  {:9}  {}",
        "---", "----", "-------", "-----"
    );
    for param in params {
        let default = if param.unit.is_empty() {
            param.default.to_string()
        } else {
            format!("{} {}", param.default, param.unit)
        };
        println!(
            "  {:14}  {:14}  {:9}  {}",
            param.key,
            param.name,
            default,
            param.range()
        );
    }
}
