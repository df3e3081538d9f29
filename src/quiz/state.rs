//! Quiz state accumulated across steps
//!
//! Tags are never stored. They are re-derived from the answer map whenever
//! needed, so the answer map and the tag list cannot drift apart under
//! back-navigation.

use super::catalog::{self, QUESTIONS};
use super::tags::Tag;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// The six answer slots, keyed by question identifier.
///
/// Empty string means unanswered. Field names match the persisted and
/// submitted wire form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Answers {
    pub industry: String,
    pub entity_count: String,
    pub books_status: String,
    pub frustration: String,
    pub opportunity: String,
    pub personal_time: String,
}

impl Answers {
    /// Value for a question id, empty string if unanswered.
    pub fn get(&self, question_id: &str) -> &str {
        match question_id {
            "industry" => &self.industry,
            "entityCount" => &self.entity_count,
            "booksStatus" => &self.books_status,
            "frustration" => &self.frustration,
            "opportunity" => &self.opportunity,
            "personalTime" => &self.personal_time,
            _ => "",
        }
    }

    /// Record a value for a question id. Last write wins.
    pub fn set(&mut self, question_id: &str, value: &str) {
        let slot = match question_id {
            "industry" => &mut self.industry,
            "entityCount" => &mut self.entity_count,
            "booksStatus" => &mut self.books_status,
            "frustration" => &mut self.frustration,
            "opportunity" => &mut self.opportunity,
            "personalTime" => &mut self.personal_time,
            _ => return,
        };
        *slot = value.to_string();
    }

    /// True when every slot holds a value.
    pub fn all_answered(&self) -> bool {
        catalog::QUESTION_IDS.iter().all(|id| !self.get(id).is_empty())
    }
}

/// Contact info captured after the last question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub first_name: String,
    pub email: String,
    pub company: String,
}

/// Accumulated quiz state for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizState {
    /// 0-based index into the question catalog; equal to the catalog length
    /// once every question is answered.
    pub current_step: usize,
    pub answers: Answers,
    pub contact: Contact,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The question at the current step, if any remain.
    pub fn current_question(&self) -> Option<&'static super::catalog::Question> {
        QUESTIONS.get(self.current_step)
    }

    /// Record an answer for the current question and advance one step.
    ///
    /// The value must be one of the question's options.
    pub fn select(&mut self, value: &str) -> Result<()> {
        let question = self
            .current_question()
            .ok_or_else(|| Error::Validation("no question at current step".to_string()))?;
        if question.option_for(value).is_none() {
            return Err(Error::Validation(format!(
                "'{value}' is not an option for question '{}'",
                question.id
            )));
        }
        self.answers.set(question.id, value);
        self.current_step += 1;
        Ok(())
    }

    /// Navigate back one step, clearing that step's answer.
    ///
    /// The derived tag list then loses exactly the tag the removed answer
    /// contributed. No-op at step 0.
    pub fn back(&mut self) {
        if self.current_step == 0 {
            return;
        }
        self.current_step -= 1;
        if let Some(question) = QUESTIONS.get(self.current_step) {
            self.answers.set(question.id, "");
        }
    }

    /// Tags derived fresh from the answer map.
    ///
    /// Unanswered questions and values with no matching option contribute
    /// nothing.
    pub fn tags(&self) -> Vec<Tag> {
        tags_for(&self.answers)
    }

    /// All six answers present plus first name and email.
    pub fn is_complete(&self) -> bool {
        self.answers.all_answered()
            && !self.contact.first_name.is_empty()
            && !self.contact.email.is_empty()
    }
}

/// Derive the tag list from an answer map.
///
/// This is the only way tags come into existence; there is no stored tag
/// collection to keep in sync.
pub fn tags_for(answers: &Answers) -> Vec<Tag> {
    QUESTIONS
        .iter()
        .filter_map(|q| {
            let value = answers.get(q.id);
            if value.is_empty() {
                return None;
            }
            q.option_for(value).map(|o| o.tag)
        })
        .collect()
}
