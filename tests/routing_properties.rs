//! Properties of the scoring/routing engine
//!
//! Exercises the routing contract over the full answer space: bounds,
//! order-independence, totality over partial input, and the documented
//! tier/pain/urgency/case-study rules.

use leadfunnel::quiz::{tags_for, Answers, QuizState, Tag, QUESTIONS};
use leadfunnel::routing::{
    maturity_score, CaseStudyRoute, PainLevel, RoutingProfile, Tier, SCORE_CEILING, SCORE_FLOOR,
};

/// Every combination of answers across all six questions.
fn all_answer_combinations() -> Vec<Answers> {
    let mut combos = vec![Answers::default()];
    for question in QUESTIONS.iter() {
        let mut next = Vec::with_capacity(combos.len() * question.options.len());
        for base in &combos {
            for option in &question.options {
                let mut answers = base.clone();
                answers.set(question.id, option.value);
                next.push(answers);
            }
        }
        combos = next;
    }
    combos
}

#[test]
fn score_is_bounded_for_every_possible_answer_set() {
    for answers in all_answer_combinations() {
        let score = maturity_score(&tags_for(&answers));
        assert!(
            (SCORE_FLOOR..=SCORE_CEILING).contains(&score),
            "score {score} out of bounds for {answers:?}"
        );
    }
}

#[test]
fn empty_tag_set_scores_baseline_within_bounds() {
    let score = maturity_score(&[]);
    assert_eq!(score, 50);
    assert!((SCORE_FLOOR..=SCORE_CEILING).contains(&score));
}

#[test]
fn no_entity_and_no_pain_tags_means_tier_c() {
    let tags = [Tag::BooksCurrent, Tag::ConsequenceNone, Tag::TimeDelegated];
    let profile = RoutingProfile::build("professional", &tags);
    assert_eq!(profile.tier, Tier::C);
}

#[test]
fn many_entities_wins_tier_a_over_anything_else() {
    let tags = [
        Tag::EntitiesMany,
        Tag::BooksCurrent,
        Tag::ConsequenceNone,
        Tag::TimeDelegated,
    ];
    assert_eq!(RoutingProfile::build("other", &tags).tier, Tier::A);
}

#[test]
fn all_five_high_pain_tags_give_high_pain() {
    let tags = [
        Tag::BooksFarBehind,
        Tag::BooksNever,
        Tag::PainTrust,
        Tag::ConsequenceDirect,
        Tag::TimeExcessive,
    ];
    assert_eq!(RoutingProfile::build("", &tags).pain_level, PainLevel::High);
}

#[test]
fn entertainment_routes_to_vfx_regardless_of_entity_count() {
    for entity_tag in [
        Tag::EntitiesSingle,
        Tag::EntitiesFew,
        Tag::EntitiesSeveral,
        Tag::EntitiesMany,
    ] {
        let profile = RoutingProfile::build("entertainment", &[entity_tag]);
        assert_eq!(profile.case_study_route, CaseStudyRoute::Vfx);
    }
}

#[test]
fn ecommerce_without_entity_tag_routes_to_apparel() {
    let profile = RoutingProfile::build("ecommerce", &[Tag::PainVisibility]);
    assert_eq!(profile.case_study_route, CaseStudyRoute::Apparel);
}

#[test]
fn unknown_industry_falls_back_without_panicking() {
    let profile = RoutingProfile::build("aerospace", &[]);
    assert_eq!(profile.industry_label, "your industry");
    assert_eq!(profile.case_study_route, CaseStudyRoute::Production);
}

#[test]
fn permuting_tag_order_never_changes_the_profile() {
    let tags = vec![
        Tag::EntitiesFew,
        Tag::BooksFarBehind,
        Tag::PainTrust,
        Tag::ConsequenceIndirect,
        Tag::TimeSignificant,
        Tag::IndustryProfessional,
    ];

    let reference = RoutingProfile::build("professional", &tags);

    // Rotations plus the full reversal cover a representative set of
    // permutations without pulling in a permutation generator.
    let mut rotated = tags.clone();
    for _ in 0..tags.len() {
        rotated.rotate_left(1);
        assert_eq!(RoutingProfile::build("professional", &rotated), reference);
    }
    let mut reversed = tags;
    reversed.reverse();
    assert_eq!(RoutingProfile::build("professional", &reversed), reference);
}

#[test]
fn back_navigation_and_reanswer_reproduce_the_profile() {
    let mut state = QuizState::new();
    for value in ["ecommerce", "4-6", "6months", "trust", "yes", "second-job"] {
        state.select(value).unwrap();
    }
    let reference = RoutingProfile::from_state(&state);

    for _ in 0..3 {
        state.back();
    }
    for value in ["trust", "yes", "second-job"] {
        state.select(value).unwrap();
    }

    assert_eq!(RoutingProfile::from_state(&state), reference);
}

#[test]
fn every_output_field_is_always_assigned() {
    // Partial input: only one answer given.
    let mut state = QuizState::new();
    state.select("professional").unwrap();

    let profile = RoutingProfile::from_state(&state);
    assert!(!profile.industry_label.is_empty());
    assert!((SCORE_FLOOR..=SCORE_CEILING).contains(&profile.maturity_score));
}
