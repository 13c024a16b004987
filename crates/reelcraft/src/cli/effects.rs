//! Effect selection command handlers.

use reelcraft_core::SceneType;
use reelcraft_effects::{
    EffectContext, EffectSelection, registry, select_all_effects, select_effects,
};

use super::commands::{EffectsCommands, OutputFormat};

/// Handle an effects subcommand.
pub fn handle_effects_command(command: EffectsCommands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        EffectsCommands::Select {
            role,
            tone,
            brand,
            intensity,
            images,
            screenshot,
            format,
        } => {
            let context = EffectContext {
                role,
                tone,
                brand_style: brand,
                intensity,
                has_images: images,
                has_screenshot: screenshot,
            };
            let selection = select_effects(&context);

            match format {
                OutputFormat::Human => print_selection(role, &selection),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&selection)?),
            }
        }

        EffectsCommands::All {
            tone,
            brand,
            intensity,
            images,
            screenshot,
            format,
        } => {
            let context = EffectContext {
                // role is replaced per scene during selection
                role: SceneType::Hook,
                tone,
                brand_style: brand,
                intensity,
                has_images: images,
                has_screenshot: screenshot,
            };
            let effects = select_all_effects(&context);

            match format {
                OutputFormat::Human => {
                    print_selection(SceneType::Hook, &effects.hook);
                    print_selection(SceneType::Problem, &effects.problem);
                    print_selection(SceneType::Solution, &effects.solution);
                    print_selection(SceneType::Proof, &effects.proof);
                    print_selection(SceneType::Cta, &effects.cta);
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&effects)?),
            }
        }

        EffectsCommands::List { category } => {
            for effect in registry() {
                let effect_category = format!("{}", effect.category);
                if let Some(ref wanted) = category {
                    if &effect_category != wanted {
                        continue;
                    }
                }
                println!(
                    "{:<28} {:<12} {:<10} impact={} professional={} modern={}",
                    format!("{}", effect.id),
                    effect_category,
                    format!("{}", effect.intensity),
                    effect.impact_score,
                    effect.professional_score,
                    effect.modern_score,
                );
            }
        }
    }

    Ok(())
}

fn print_selection(role: SceneType, selection: &EffectSelection) {
    println!("{}:", role);
    match selection.image_reveal {
        Some(id) => println!("  image_reveal: {}", id),
        None => println!("  image_reveal: (no media)"),
    }
    println!("  text_reveal:  {}", selection.text_reveal);
    println!("  stat_reveal:  {}", selection.stat_reveal);
    println!("  transition:   {}", selection.transition);
    println!("  emphasis:     {}", selection.emphasis);
}
