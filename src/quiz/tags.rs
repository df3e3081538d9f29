//! Semantic tags attached to answer options
//!
//! Tags are the only input the scoring engine looks at. They serialize in
//! `namespace:name` form so persisted sessions and analytics events stay
//! readable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic label carried by a chosen answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    #[serde(rename = "industry:entertainment")]
    IndustryEntertainment,
    #[serde(rename = "industry:professional")]
    IndustryProfessional,
    #[serde(rename = "industry:ecommerce")]
    IndustryEcommerce,
    #[serde(rename = "industry:multi")]
    IndustryMulti,
    #[serde(rename = "industry:other")]
    IndustryOther,

    #[serde(rename = "entities:single")]
    EntitiesSingle,
    #[serde(rename = "entities:few")]
    EntitiesFew,
    #[serde(rename = "entities:several")]
    EntitiesSeveral,
    #[serde(rename = "entities:many")]
    EntitiesMany,

    #[serde(rename = "books:current")]
    BooksCurrent,
    #[serde(rename = "books:behind")]
    BooksBehind,
    #[serde(rename = "books:far-behind")]
    BooksFarBehind,
    #[serde(rename = "books:never")]
    BooksNever,
    #[serde(rename = "books:unsure")]
    BooksUnsure,

    #[serde(rename = "pain:visibility")]
    PainVisibility,
    #[serde(rename = "pain:cost")]
    PainCost,
    #[serde(rename = "pain:trust")]
    PainTrust,
    #[serde(rename = "pain:systems")]
    PainSystems,
    #[serde(rename = "pain:founder-time")]
    PainFounderTime,
    #[serde(rename = "pain:overwhelm")]
    PainOverwhelm,

    #[serde(rename = "consequence:direct")]
    ConsequenceDirect,
    #[serde(rename = "consequence:indirect")]
    ConsequenceIndirect,
    #[serde(rename = "consequence:worried")]
    ConsequenceWorried,
    #[serde(rename = "consequence:none")]
    ConsequenceNone,

    #[serde(rename = "time:delegated")]
    TimeDelegated,
    #[serde(rename = "time:some")]
    TimeSome,
    #[serde(rename = "time:significant")]
    TimeSignificant,
    #[serde(rename = "time:excessive")]
    TimeExcessive,
}

impl Tag {
    /// The `namespace:name` form used in persisted sessions and events.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::IndustryEntertainment => "industry:entertainment",
            Tag::IndustryProfessional => "industry:professional",
            Tag::IndustryEcommerce => "industry:ecommerce",
            Tag::IndustryMulti => "industry:multi",
            Tag::IndustryOther => "industry:other",
            Tag::EntitiesSingle => "entities:single",
            Tag::EntitiesFew => "entities:few",
            Tag::EntitiesSeveral => "entities:several",
            Tag::EntitiesMany => "entities:many",
            Tag::BooksCurrent => "books:current",
            Tag::BooksBehind => "books:behind",
            Tag::BooksFarBehind => "books:far-behind",
            Tag::BooksNever => "books:never",
            Tag::BooksUnsure => "books:unsure",
            Tag::PainVisibility => "pain:visibility",
            Tag::PainCost => "pain:cost",
            Tag::PainTrust => "pain:trust",
            Tag::PainSystems => "pain:systems",
            Tag::PainFounderTime => "pain:founder-time",
            Tag::PainOverwhelm => "pain:overwhelm",
            Tag::ConsequenceDirect => "consequence:direct",
            Tag::ConsequenceIndirect => "consequence:indirect",
            Tag::ConsequenceWorried => "consequence:worried",
            Tag::ConsequenceNone => "consequence:none",
            Tag::TimeDelegated => "time:delegated",
            Tag::TimeSome => "time:some",
            Tag::TimeSignificant => "time:significant",
            Tag::TimeExcessive => "time:excessive",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_namespace_form() {
        let json = serde_json::to_string(&Tag::BooksFarBehind).unwrap();
        assert_eq!(json, "\"books:far-behind\"");

        let back: Tag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Tag::BooksFarBehind);
    }

    #[test]
    fn as_str_matches_serde_rename() {
        for tag in [Tag::EntitiesMany, Tag::PainFounderTime, Tag::TimeDelegated] {
            let json = serde_json::to_string(&tag).unwrap();
            assert_eq!(json, format!("\"{}\"", tag.as_str()));
        }
    }
}
