//! Skill proficiency and language resolution
//!
//! Class picks are constrained by the class menu and pick count;
//! background grants are unconditional. A wrong selection is reported,
//! never silently truncated or corrected.

use crate::ruleset::{LanguageGrant, RuleSet, SkillChoices};
use crate::types::ValidationError;
use std::collections::BTreeSet;

/// Result of merging class and background skill proficiencies
#[derive(Debug, Clone, Default)]
pub struct ProficiencyOutcome {
    pub skills: BTreeSet<String>,
    pub errors: Vec<ValidationError>,
}

/// Merge class skill picks with background grants.
///
/// The class grants exactly `menu.choose` picks drawn from `menu.from`;
/// over- and under-selection are both errors (never clamped).
/// Background skills do not count against the class quota.
pub fn resolve(
    class_picks: &[String],
    background_skills: &[String],
    menu: &SkillChoices,
) -> ProficiencyOutcome {
    let mut outcome = ProficiencyOutcome::default();

    if class_picks.len() != menu.choose {
        outcome.errors.push(ValidationError::new(
            "class_skills",
            format!(
                "class grants exactly {} skill picks; {} chosen",
                menu.choose,
                class_picks.len()
            ),
        ));
    }

    let mut seen = BTreeSet::new();
    for pick in class_picks {
        if !menu.from.contains(pick) {
            outcome.errors.push(ValidationError::new(
                "class_skills",
                format!("'{}' is not on this class's skill list", pick),
            ));
        }
        if !seen.insert(pick.clone()) {
            outcome.errors.push(ValidationError::new(
                "class_skills",
                format!("'{}' picked more than once", pick),
            ));
        }
    }

    outcome.skills.extend(class_picks.iter().cloned());
    outcome.skills.extend(background_skills.iter().cloned());
    outcome
}

/// Resolve a background's language grant against the caller's picks.
///
/// Fixed grants pass through untouched. Counted grants require exactly
/// that many distinct languages from the ruleset vocabulary; a
/// shortfall is an incomplete state the assembler treats as blocking.
pub fn resolve_languages(
    grant: &LanguageGrant,
    picks: &[String],
    rules: &RuleSet,
) -> (Vec<String>, Vec<ValidationError>) {
    match grant {
        LanguageGrant::Fixed(names) => (names.clone(), Vec::new()),
        LanguageGrant::Choose(count) => {
            let mut errors = Vec::new();

            let mut distinct: Vec<String> = Vec::new();
            for pick in picks {
                if distinct.contains(pick) {
                    errors.push(ValidationError::new(
                        "languages",
                        format!("'{}' chosen more than once", pick),
                    ));
                    continue;
                }
                if !rules.is_known_language(pick) {
                    errors.push(ValidationError::new(
                        "languages",
                        format!("'{}' is not a known language", pick),
                    ));
                    continue;
                }
                distinct.push(pick.clone());
            }

            if distinct.len() != *count {
                errors.push(ValidationError::new(
                    "languages",
                    format!(
                        "background grants {} language choices; {} valid picks supplied",
                        count,
                        distinct.len()
                    ),
                ));
            }

            (distinct, errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ruleset::RuleSet;

    fn fighter_menu(rules: &RuleSet) -> SkillChoices {
        rules.class("Fighter").unwrap().skill_choices.clone()
    }

    fn strs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_picks_from_menu() {
        let rules = RuleSet::default();
        let menu = fighter_menu(&rules);
        let outcome = resolve(&strs(&["athletics", "perception"]), &[], &menu);
        assert!(outcome.errors.is_empty());
        assert!(outcome.skills.contains("athletics"));
    }

    #[test]
    fn test_over_selection_is_rejected_not_clamped() {
        let rules = RuleSet::default();
        let menu = fighter_menu(&rules);
        let picks = strs(&["athletics", "perception", "survival"]);
        let outcome = resolve(&picks, &[], &menu);
        assert!(!outcome.errors.is_empty());
        // All picks are still reported back; the caller decides what to do.
        assert_eq!(outcome.skills.len(), 3);
    }

    #[test]
    fn test_pick_outside_menu() {
        let rules = RuleSet::default();
        let menu = fighter_menu(&rules);
        let outcome = resolve(&strs(&["athletics", "arcana"]), &[], &menu);
        assert!(outcome
            .errors
            .iter()
            .any(|e| e.message.contains("not on this class's skill list")));
    }

    #[test]
    fn test_duplicate_pick() {
        let rules = RuleSet::default();
        let menu = fighter_menu(&rules);
        let outcome = resolve(&strs(&["athletics", "athletics"]), &[], &menu);
        assert!(outcome
            .errors
            .iter()
            .any(|e| e.message.contains("more than once")));
    }

    #[test]
    fn test_background_skills_union_without_counting() {
        let rules = RuleSet::default();
        let menu = fighter_menu(&rules);
        // Soldier grants athletics + intimidation unconditionally
        let outcome = resolve(
            &strs(&["perception", "survival"]),
            &strs(&["athletics", "intimidation"]),
            &menu,
        );
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.skills.len(), 4);
    }

    #[test]
    fn test_fixed_language_grant_passes_through() {
        let rules = RuleSet::default();
        let grant = LanguageGrant::Fixed(strs(&["Common", "Orc"]));
        let (languages, errors) = resolve_languages(&grant, &[], &rules);
        assert_eq!(languages, strs(&["Common", "Orc"]));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_counted_grant_requires_distinct_known_languages() {
        let rules = RuleSet::default();
        let grant = LanguageGrant::Choose(2);

        let (languages, errors) =
            resolve_languages(&grant, &strs(&["Elvish", "Draconic"]), &rules);
        assert_eq!(languages.len(), 2);
        assert!(errors.is_empty());

        let (_, errors) = resolve_languages(&grant, &strs(&["Elvish"]), &rules);
        assert!(errors.iter().any(|e| e.message.contains("2 language")));

        let (_, errors) = resolve_languages(&grant, &strs(&["Elvish", "Elvish"]), &rules);
        assert!(!errors.is_empty());

        let (_, errors) = resolve_languages(&grant, &strs(&["Elvish", "Klingon"]), &rules);
        assert!(errors.iter().any(|e| e.message.contains("not a known language")));
    }
}
