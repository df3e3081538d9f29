//! Quiz answer model and session state
//!
//! The fixed question catalog, the semantic tags answers carry, and the
//! per-session state that accumulates selections.

pub mod catalog;
pub mod state;
pub mod tags;

pub use catalog::{industry_label, question, AnswerOption, Question, QUESTIONS, QUESTION_IDS};
pub use state::{tags_for, Answers, Contact, QuizState};
pub use tags::Tag;
