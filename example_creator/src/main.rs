//! Example Creator - a minimal CLI demonstrating sheet_core
//!
//! This demo shows:
//! - Building Selections the way a UI layer would
//! - Standard-array and rolled-manual score generation
//! - A flexible racial ASI choice
//! - Validation-failure reporting
//! - Writing the finished record to a sanitized file name

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sheet_core::prelude::*;
use std::fs;
use std::io;

fn pick_first_equipment(selections: &mut Selections, rules: &RuleSet) {
    if let Some(class) = rules.class(&selections.class) {
        for (index, group) in class.equipment_groups.iter().enumerate() {
            selections
                .equipment_choices
                .insert(index, group.options[0].clone());
        }
    }
}

/// A standard-array dwarven fighter
fn build_fighter(rules: &RuleSet) -> Selections {
    let mut selections = Selections::new();
    selections.name = "Borin Ironfist".to_string();
    selections.player = "Sam".to_string();
    selections.race = "Dwarf".to_string();
    selections.subrace = Some("Mountain Dwarf".to_string());
    selections.class = "Fighter".to_string();
    selections.background = "Soldier".to_string();
    selections.alignment = Some("Lawful Good".to_string());

    selections.set_generation_method(GenerationMethod::StandardArray);
    let assignment = [15, 10, 14, 8, 12, 13];
    for (&ability, &score) in Ability::all().iter().zip(assignment.iter()) {
        selections.base_scores.set(ability, score);
    }

    selections.class_skills = vec!["athletics".to_string(), "perception".to_string()];
    pick_first_equipment(&mut selections, rules);
    selections
}

/// A rolled-manual half-elf warlock exercising the flexible ASI grant
fn build_warlock(rules: &RuleSet, rng: &mut ChaCha8Rng) -> Selections {
    let mut selections = Selections::new();
    selections.name = "Vexis Emberwhisper".to_string();
    selections.player = "Alex".to_string();
    selections.race = "Half-Elf".to_string();
    selections.class = "Warlock".to_string();
    selections.level = 3;
    selections.background = "Noble".to_string();
    selections.alignment = Some("Chaotic Neutral".to_string());

    selections.set_generation_method(GenerationMethod::Manual);
    selections.base_scores = roll_scores(rng);

    // Half-Elf: +2 CHA fixed, +1 to two abilities of your choice
    selections.asi_choice = vec![Ability::Constitution, Ability::Dexterity];
    selections.class_skills = vec!["arcana".to_string(), "deception".to_string()];
    selections.background_languages = vec!["Infernal".to_string()];
    selections.chosen_spells = vec!["eldritch blast".to_string(), "hex".to_string()];
    pick_first_equipment(&mut selections, rules);
    selections
}

fn print_summary(character: &DerivedCharacter) {
    let meta = &character.meta;
    println!(
        "{} - level {} {} {} ({})",
        meta.name,
        meta.level,
        meta.subrace.as_deref().unwrap_or(&meta.race),
        meta.class,
        meta.background
    );
    println!(
        "  abilities: {:?}",
        character.final_abilities.values()
    );
    println!(
        "  hp {} | initiative {:+} | passive perception {} | speed {} ft",
        character.combat.hit_points,
        character.combat.initiative,
        character.combat.passive_perception,
        character.combat.speed
    );
    match &character.spells {
        Some(spells) => println!(
            "  casts with {} (DC {}, attack {:+})",
            spells.ability, spells.save_dc, spells.attack_bonus
        ),
        None => println!("  does not cast spells"),
    }
}

fn save_record(character: &DerivedCharacter) -> io::Result<()> {
    let name = file_name(&character.meta.name);
    let json = to_json(character).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    fs::write(&name, json)?;
    println!("  saved to {}", name);
    Ok(())
}

fn main() -> io::Result<()> {
    let rules = RuleSet::default();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for selections in [build_fighter(&rules), build_warlock(&rules, &mut rng)] {
        match assemble(&selections, &rules) {
            Ok(character) => {
                print_summary(&character);
                save_record(&character)?;
            }
            Err(errors) => {
                println!("{} failed validation:", selections.name);
                for error in &errors {
                    println!("  - {}", error);
                }
            }
        }
        println!();
    }

    // A deliberately broken character: every problem reports at once.
    let mut broken = Selections::new();
    broken.race = "Human".to_string();
    broken.class = "Rogue".to_string();
    broken.background = "Sage".to_string();
    broken.set_generation_method(GenerationMethod::PointBuy);
    broken.base_scores.set(Ability::Dexterity, 17);
    broken.class_skills = vec!["arcana".to_string()];

    if let Err(errors) = assemble(&broken, &rules) {
        println!("unnamed rogue failed validation:");
        for error in &errors {
            println!("  - {}", error);
        }
    }

    Ok(())
}
