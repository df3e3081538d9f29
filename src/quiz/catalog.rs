//! The fixed six-question catalog
//!
//! Questions, answer options, and industry display labels are immutable and
//! defined at process start. Option values are what gets stored and
//! submitted; tags are what the scoring engine reads.

use super::tags::Tag;
use once_cell::sync::Lazy;

/// Question identifiers, in presentation order.
pub const QUESTION_IDS: [&str; 6] = [
    "industry",
    "entityCount",
    "booksStatus",
    "frustration",
    "opportunity",
    "personalTime",
];

/// A selectable answer option.
#[derive(Debug, Clone)]
pub struct AnswerOption {
    /// Stored as the user's response.
    pub value: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Semantic tag, scoring input only.
    pub tag: Tag,
    /// Optional transitional copy shown after selection.
    pub micro_copy: Option<&'static str>,
}

/// A quiz question with its ordered options.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub subtext: Option<&'static str>,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Find the option matching a stored value.
    pub fn option_for(&self, value: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

fn opt(value: &'static str, label: &'static str, tag: Tag) -> AnswerOption {
    AnswerOption {
        value,
        label,
        tag,
        micro_copy: None,
    }
}

fn opt_with_copy(
    value: &'static str,
    label: &'static str,
    tag: Tag,
    micro_copy: &'static str,
) -> AnswerOption {
    AnswerOption {
        value,
        label,
        tag,
        micro_copy: Some(micro_copy),
    }
}

/// The quiz, in order. Six questions, answered front to back.
pub static QUESTIONS: Lazy<Vec<Question>> = Lazy::new(|| {
    vec![
        Question {
            id: "industry",
            prompt: "What best describes your business?",
            subtext: None,
            options: vec![
                opt(
                    "entertainment",
                    "Entertainment / Media / Production",
                    Tag::IndustryEntertainment,
                ),
                opt("professional", "Professional Services", Tag::IndustryProfessional),
                opt("ecommerce", "E-commerce / DTC", Tag::IndustryEcommerce),
                opt("multi", "Multi-business Operator", Tag::IndustryMulti),
                opt("other", "Other", Tag::IndustryOther),
            ],
        },
        Question {
            id: "entityCount",
            prompt: "How many entities do you manage financially?",
            subtext: Some("LLCs, corporations, partnerships — all count."),
            options: vec![
                opt("1", "Just one", Tag::EntitiesSingle),
                opt("2-3", "2–3 entities", Tag::EntitiesFew),
                opt_with_copy(
                    "4-6",
                    "4–6 entities",
                    Tag::EntitiesSeveral,
                    "That's a lot to keep straight.",
                ),
                opt_with_copy(
                    "7+",
                    "7 or more",
                    Tag::EntitiesMany,
                    "Consolidation is probably a nightmare.",
                ),
            ],
        },
        Question {
            id: "booksStatus",
            prompt: "When were your books last fully closed and current?",
            subtext: None,
            options: vec![
                opt("current", "This month", Tag::BooksCurrent),
                opt_with_copy(
                    "quarter",
                    "Last quarter",
                    Tag::BooksBehind,
                    "That's more common than you'd think.",
                ),
                opt_with_copy(
                    "6months",
                    "Over 6 months ago",
                    Tag::BooksFarBehind,
                    "You're flying blind.",
                ),
                opt_with_copy(
                    "never",
                    "Never fully current",
                    Tag::BooksNever,
                    "At least you're honest.",
                ),
                opt_with_copy(
                    "unsure",
                    "Not sure",
                    Tag::BooksUnsure,
                    "That answer tells us something too.",
                ),
            ],
        },
        Question {
            id: "frustration",
            prompt: "What frustrates you most about how your finances are managed?",
            subtext: None,
            options: vec![
                opt(
                    "reports",
                    "Can't get clear reports when I need them",
                    Tag::PainVisibility,
                ),
                opt("cost", "Spending too much for what I'm getting", Tag::PainCost),
                opt_with_copy(
                    "trust",
                    "Don't fully trust the numbers",
                    Tag::PainTrust,
                    "That's a dangerous place to be.",
                ),
                opt("systems", "Too many disconnected systems", Tag::PainSystems),
                opt_with_copy(
                    "myself",
                    "I'm doing too much of it myself",
                    Tag::PainFounderTime,
                    "You shouldn't be doing that.",
                ),
                opt("start", "Don't know where to start", Tag::PainOverwhelm),
            ],
        },
        Question {
            id: "opportunity",
            prompt: "Has your financial situation ever cost you an opportunity?",
            subtext: Some("A loan denied. A deal delayed. An investor who walked."),
            options: vec![
                opt_with_copy(
                    "yes",
                    "Yes, directly",
                    Tag::ConsequenceDirect,
                    "That's money you'll never get back.",
                ),
                opt("maybe", "Possibly — hard to say", Tag::ConsequenceIndirect),
                opt(
                    "worried",
                    "Not yet, but I worry about it",
                    Tag::ConsequenceWorried,
                ),
                opt("no", "No", Tag::ConsequenceNone),
            ],
        },
        Question {
            id: "personalTime",
            prompt: "How much of YOUR time goes to managing finances each week?",
            subtext: Some("Be honest. Nobody's judging."),
            options: vec![
                opt("none", "Almost none — it's handled", Tag::TimeDelegated),
                opt("few", "A few hours", Tag::TimeSome),
                opt_with_copy(
                    "half-day",
                    "Half a day or more",
                    Tag::TimeSignificant,
                    "That's expensive time.",
                ),
                opt_with_copy(
                    "second-job",
                    "Basically a second job",
                    Tag::TimeExcessive,
                    "You're paying yourself bookkeeper wages.",
                ),
            ],
        },
    ]
});

/// Look up a question by identifier.
pub fn question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

/// Display label for an industry answer value.
///
/// Unknown or missing values fall back to the generic label rather than
/// failing; callers rely on this for partially answered sessions.
pub fn industry_label(industry: &str) -> &'static str {
    match industry {
        "entertainment" => "entertainment & media",
        "professional" => "professional services",
        "ecommerce" => "e-commerce",
        "multi" => "multi-entity operations",
        _ => "your industry",
    }
}
