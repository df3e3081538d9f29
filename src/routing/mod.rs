//! Routing and scoring engine
//!
//! Pure function from a quiz state snapshot to a routing profile: lead tier,
//! pain level, urgency, case-study route, industry label, and a maturity
//! score. No I/O, no side effects, total over partial input — missing
//! answers simply fail every conditional and fall through to the defaults.

pub mod query;

use crate::quiz::{industry_label, QuizState, Tag};
use serde::{Deserialize, Serialize};

/// Score clamp bounds. A lead never sees a flat 0 or a perfect 100.
pub const SCORE_FLOOR: i32 = 5;
pub const SCORE_CEILING: i32 = 95;

const SCORE_BASELINE: i32 = 50;

/// Coarse lead-priority classification, `A` highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    A,
    B,
    C,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PainLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

/// Which canned success-story bundle the solution page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStudyRoute {
    Vfx,
    Cpa,
    Apparel,
    Production,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::A => "a",
            Tier::B => "b",
            Tier::C => "c",
        }
    }
}

impl PainLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PainLevel::High => "high",
            PainLevel::Medium => "medium",
            PainLevel::Low => "low",
        }
    }
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::High => "high",
            Urgency::Medium => "medium",
            Urgency::Low => "low",
        }
    }
}

impl CaseStudyRoute {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStudyRoute::Vfx => "vfx",
            CaseStudyRoute::Cpa => "cpa",
            CaseStudyRoute::Apparel => "apparel",
            CaseStudyRoute::Production => "production",
        }
    }
}

/// Derived, stateless routing output. Never persisted — always recomputed
/// from answers so persisted sessions and live sessions agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingProfile {
    pub tier: Tier,
    pub pain_level: PainLevel,
    pub urgency: Urgency,
    pub case_study_route: CaseStudyRoute,
    pub industry_label: String,
    pub maturity_score: i32,
}

const HIGH_PAIN_TAGS: [Tag; 5] = [
    Tag::BooksFarBehind,
    Tag::BooksNever,
    Tag::PainTrust,
    Tag::ConsequenceDirect,
    Tag::TimeExcessive,
];

const MED_PAIN_TAGS: [Tag; 5] = [
    Tag::BooksBehind,
    Tag::BooksUnsure,
    Tag::PainFounderTime,
    Tag::ConsequenceIndirect,
    Tag::TimeSignificant,
];

impl RoutingProfile {
    /// Build the routing profile from a quiz state snapshot.
    pub fn from_state(state: &QuizState) -> Self {
        Self::build(&state.answers.industry, &state.tags())
    }

    /// Build from an industry value and a derived tag list.
    ///
    /// Tag matching is set membership, so input order never affects any
    /// output field.
    pub fn build(industry: &str, tags: &[Tag]) -> Self {
        let has = |tag: Tag| tags.contains(&tag);

        let tier = if has(Tag::EntitiesMany) || has(Tag::EntitiesSeveral) {
            Tier::A
        } else if has(Tag::EntitiesFew) && (has(Tag::PainTrust) || has(Tag::PainVisibility)) {
            Tier::B
        } else {
            Tier::C
        };

        let high_count = HIGH_PAIN_TAGS.iter().filter(|t| has(**t)).count();
        let med_count = MED_PAIN_TAGS.iter().filter(|t| has(**t)).count();
        let pain_level = if high_count >= 2 {
            PainLevel::High
        } else if high_count >= 1 || med_count >= 2 {
            PainLevel::Medium
        } else {
            PainLevel::Low
        };

        let urgency = if has(Tag::ConsequenceDirect)
            || (has(Tag::BooksFarBehind) && has(Tag::PainTrust))
        {
            Urgency::High
        } else if has(Tag::ConsequenceIndirect) || has(Tag::ConsequenceWorried) {
            Urgency::Medium
        } else {
            Urgency::Low
        };

        // Mutually exclusive, evaluated in priority order.
        let case_study_route = if industry == "entertainment" {
            CaseStudyRoute::Vfx
        } else if industry == "multi" || has(Tag::EntitiesMany) {
            CaseStudyRoute::Cpa
        } else if industry == "ecommerce" {
            CaseStudyRoute::Apparel
        } else {
            CaseStudyRoute::Production
        };

        Self {
            tier,
            pain_level,
            urgency,
            case_study_route,
            industry_label: industry_label(industry).to_string(),
            maturity_score: maturity_score(tags),
        }
    }
}

/// Synthetic financial-operations health score.
///
/// A fixed baseline with independent additive deltas per factor group,
/// clamped to [`SCORE_FLOOR`, `SCORE_CEILING`]. Multiple pain tags compound
/// by simple sum.
pub fn maturity_score(tags: &[Tag]) -> i32 {
    let has = |tag: Tag| tags.contains(&tag);
    let mut score = SCORE_BASELINE;

    // Books currency, the largest swing.
    if has(Tag::BooksCurrent) {
        score += 20;
    } else if has(Tag::BooksBehind) {
        score -= 10;
    } else if has(Tag::BooksFarBehind) {
        score -= 25;
    } else if has(Tag::BooksNever) {
        score -= 35;
    } else if has(Tag::BooksUnsure) {
        score -= 20;
    }

    // Entity complexity.
    if has(Tag::EntitiesSingle) {
        score += 10;
    } else if has(Tag::EntitiesFew) {
        score += 5;
    } else if has(Tag::EntitiesSeveral) {
        score -= 10;
    } else if has(Tag::EntitiesMany) {
        score -= 20;
    }

    // Pain signals subtract independently.
    if has(Tag::PainTrust) {
        score -= 15;
    }
    if has(Tag::PainVisibility) {
        score -= 10;
    }
    if has(Tag::PainFounderTime) {
        score -= 10;
    }
    if has(Tag::PainOverwhelm) {
        score -= 15;
    }

    // Consequences.
    if has(Tag::ConsequenceDirect) {
        score -= 15;
    } else if has(Tag::ConsequenceIndirect) {
        score -= 5;
    }

    // Personal time spent.
    if has(Tag::TimeDelegated) {
        score += 10;
    } else if has(Tag::TimeSignificant) {
        score -= 10;
    } else if has(Tag::TimeExcessive) {
        score -= 20;
    }

    score.clamp(SCORE_FLOOR, SCORE_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QuizState;

    #[test]
    fn empty_tags_give_baseline_and_defaults() {
        let profile = RoutingProfile::build("", &[]);
        assert_eq!(profile.tier, Tier::C);
        assert_eq!(profile.pain_level, PainLevel::Low);
        assert_eq!(profile.urgency, Urgency::Low);
        assert_eq!(profile.case_study_route, CaseStudyRoute::Production);
        assert_eq!(profile.industry_label, "your industry");
        assert_eq!(profile.maturity_score, 50);
    }

    #[test]
    fn many_entities_forces_tier_a() {
        let profile = RoutingProfile::build(
            "professional",
            &[Tag::EntitiesMany, Tag::BooksCurrent, Tag::ConsequenceNone],
        );
        assert_eq!(profile.tier, Tier::A);
    }

    #[test]
    fn few_entities_with_trust_pain_is_tier_b() {
        let profile = RoutingProfile::build("other", &[Tag::EntitiesFew, Tag::PainTrust]);
        assert_eq!(profile.tier, Tier::B);

        let without_pain = RoutingProfile::build("other", &[Tag::EntitiesFew, Tag::PainCost]);
        assert_eq!(without_pain.tier, Tier::C);
    }

    #[test]
    fn two_high_pain_tags_raise_pain_to_high() {
        let profile = RoutingProfile::build("", &[Tag::BooksNever, Tag::TimeExcessive]);
        assert_eq!(profile.pain_level, PainLevel::High);
    }

    #[test]
    fn one_high_or_two_medium_is_medium_pain() {
        let one_high = RoutingProfile::build("", &[Tag::PainTrust]);
        assert_eq!(one_high.pain_level, PainLevel::Medium);

        let two_medium = RoutingProfile::build("", &[Tag::BooksBehind, Tag::TimeSignificant]);
        assert_eq!(two_medium.pain_level, PainLevel::Medium);

        let one_medium = RoutingProfile::build("", &[Tag::BooksBehind]);
        assert_eq!(one_medium.pain_level, PainLevel::Low);
    }

    #[test]
    fn urgency_paths() {
        let direct = RoutingProfile::build("", &[Tag::ConsequenceDirect]);
        assert_eq!(direct.urgency, Urgency::High);

        let compound = RoutingProfile::build("", &[Tag::BooksFarBehind, Tag::PainTrust]);
        assert_eq!(compound.urgency, Urgency::High);

        let worried = RoutingProfile::build("", &[Tag::ConsequenceWorried]);
        assert_eq!(worried.urgency, Urgency::Medium);
    }

    #[test]
    fn case_study_priority_order() {
        // Entertainment wins over everything, entity count included.
        let vfx = RoutingProfile::build("entertainment", &[Tag::EntitiesMany]);
        assert_eq!(vfx.case_study_route, CaseStudyRoute::Vfx);

        // Many-entities tag routes to cpa even outside the multi industry.
        let cpa = RoutingProfile::build("professional", &[Tag::EntitiesMany]);
        assert_eq!(cpa.case_study_route, CaseStudyRoute::Cpa);

        let apparel = RoutingProfile::build("ecommerce", &[]);
        assert_eq!(apparel.case_study_route, CaseStudyRoute::Apparel);
    }

    #[test]
    fn score_stays_in_bounds_at_the_extremes() {
        let worst = [
            Tag::BooksNever,
            Tag::EntitiesMany,
            Tag::PainTrust,
            Tag::ConsequenceDirect,
            Tag::TimeExcessive,
        ];
        assert_eq!(maturity_score(&worst), SCORE_FLOOR);

        let best = [Tag::BooksCurrent, Tag::EntitiesSingle, Tag::TimeDelegated];
        assert_eq!(maturity_score(&best), 90);
        assert!(maturity_score(&best) <= SCORE_CEILING);
    }

    #[test]
    fn scoring_is_order_independent() {
        let tags = [
            Tag::BooksFarBehind,
            Tag::EntitiesFew,
            Tag::PainTrust,
            Tag::ConsequenceIndirect,
            Tag::TimeSignificant,
        ];
        let mut reversed = tags;
        reversed.reverse();

        assert_eq!(maturity_score(&tags), maturity_score(&reversed));
        assert_eq!(
            RoutingProfile::build("other", &tags),
            RoutingProfile::build("other", &reversed)
        );
    }

    #[test]
    fn profile_from_incomplete_state_never_fails() {
        let mut state = QuizState::new();
        state.select("ecommerce").unwrap();

        let profile = RoutingProfile::from_state(&state);
        assert_eq!(profile.case_study_route, CaseStudyRoute::Apparel);
        assert_eq!(profile.tier, Tier::C);
        assert_eq!(profile.maturity_score, 50);
    }
}
