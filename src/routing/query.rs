//! Query-string contract between the quiz and the results view
//!
//! Completing the quiz encodes the routing profile plus raw answers as URL
//! query parameters. The results side reconstructs its display entirely from
//! those parameters, falling back to the persisted session when they are
//! missing. This round trip is the de facto API between the two pages.

use super::RoutingProfile;
use crate::quiz::{Answers, QuizState};
use url::form_urlencoded;

/// Encode a completed state plus its routing profile as a query string.
pub fn to_query_string(state: &QuizState, profile: &RoutingProfile) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("industry", &state.answers.industry)
        .append_pair("entities", &state.answers.entity_count)
        .append_pair("books", &state.answers.books_status)
        .append_pair("frustration", &state.answers.frustration)
        .append_pair("opportunity", &state.answers.opportunity)
        .append_pair("time", &state.answers.personal_time)
        .append_pair("firstName", &state.contact.first_name)
        .append_pair("email", &state.contact.email)
        .append_pair("company", &state.contact.company)
        .append_pair("tier", profile.tier.as_str())
        .append_pair("pain", profile.pain_level.as_str())
        .append_pair("urgency", profile.urgency.as_str())
        .append_pair("caseStudy", profile.case_study_route.as_str())
        .append_pair("score", &profile.maturity_score.to_string())
        .finish()
}

/// Parameters the results view works from.
///
/// All fields default to empty; a missing parameter is indistinguishable
/// from an empty one, matching how the page behaves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsParams {
    pub first_name: String,
    pub email: String,
    pub company: String,
    pub industry: String,
    pub entities: String,
    pub books: String,
    pub frustration: String,
    pub opportunity: String,
    pub time: String,
}

impl ResultsParams {
    /// Parse from a raw query string. Unknown keys are ignored.
    pub fn parse(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "firstName" => &mut params.first_name,
                "email" => &mut params.email,
                "company" => &mut params.company,
                "industry" => &mut params.industry,
                "entities" => &mut params.entities,
                "books" => &mut params.books,
                "frustration" => &mut params.frustration,
                "opportunity" => &mut params.opportunity,
                "time" => &mut params.time,
                _ => continue,
            };
            *slot = value.into_owned();
        }
        params
    }

    /// Fill missing values from a persisted session. URL parameters win.
    pub fn hydrate_from(mut self, state: &QuizState) -> Self {
        let fill = |slot: &mut String, value: &str| {
            if slot.is_empty() && !value.is_empty() {
                *slot = value.to_string();
            }
        };
        fill(&mut self.first_name, &state.contact.first_name);
        fill(&mut self.email, &state.contact.email);
        fill(&mut self.company, &state.contact.company);
        fill(&mut self.industry, &state.answers.industry);
        fill(&mut self.entities, &state.answers.entity_count);
        fill(&mut self.books, &state.answers.books_status);
        fill(&mut self.frustration, &state.answers.frustration);
        fill(&mut self.opportunity, &state.answers.opportunity);
        fill(&mut self.time, &state.answers.personal_time);
        self
    }

    /// The raw answers these parameters carry.
    pub fn answers(&self) -> Answers {
        Answers {
            industry: self.industry.clone(),
            entity_count: self.entities.clone(),
            books_status: self.books.clone(),
            frustration: self.frustration.clone(),
            opportunity: self.opportunity.clone(),
            personal_time: self.time.clone(),
        }
    }

    /// Recompute the routing profile from the raw answers.
    ///
    /// Scoring is deterministic, so this always agrees with whatever the
    /// quiz side computed before navigating.
    pub fn routing_profile(&self) -> RoutingProfile {
        let answers = self.answers();
        RoutingProfile::build(&answers.industry, &crate::quiz::tags_for(&answers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QuizState;

    fn completed_state() -> QuizState {
        let mut state = QuizState::new();
        for value in ["ecommerce", "2-3", "quarter", "reports", "maybe", "half-day"] {
            state.select(value).unwrap();
        }
        state.contact.first_name = "Maya".to_string();
        state.contact.email = "maya@example.com".to_string();
        state.contact.company = "Maya Apparel".to_string();
        state
    }

    #[test]
    fn query_round_trip_recomputes_identical_profile() {
        let state = completed_state();
        let profile = RoutingProfile::from_state(&state);

        let query = to_query_string(&state, &profile);
        let params = ResultsParams::parse(&query);

        assert_eq!(params.first_name, "Maya");
        assert_eq!(params.industry, "ecommerce");
        assert_eq!(params.routing_profile(), profile);
    }

    #[test]
    fn hydrate_fills_only_missing_fields() {
        let state = completed_state();
        let params = ResultsParams::parse("firstName=Override&books=current").hydrate_from(&state);

        assert_eq!(params.first_name, "Override");
        assert_eq!(params.books, "current");
        assert_eq!(params.industry, "ecommerce");
        assert_eq!(params.time, "half-day");
    }

    #[test]
    fn empty_query_hydrates_entirely_from_session() {
        let state = completed_state();
        let params = ResultsParams::parse("").hydrate_from(&state);
        assert_eq!(params.routing_profile(), RoutingProfile::from_state(&state));
    }

    #[test]
    fn encoding_escapes_reserved_characters() {
        let mut state = completed_state();
        state.contact.company = "Smith & Sons".to_string();
        let profile = RoutingProfile::from_state(&state);

        let query = to_query_string(&state, &profile);
        let params = ResultsParams::parse(&query);
        assert_eq!(params.company, "Smith & Sons");
    }
}
