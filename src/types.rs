//! Closed taxonomy vocabularies for catalogued activities.
//!
//! Every enumeration here is a closed set: the serialized form is the
//! snake_case variant name, and anything outside the set fails to
//! deserialize. The graded vocabularies (level, complexity, skill
//! ceiling, physicality, vocality) are backed by explicit ordinals so
//! comparisons follow the declared grading, never lexical order.
//!
//! With the `typescript` feature enabled, these types can be exported
//! to TypeScript using ts-rs for consistency with the Angular frontend.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// What kind of activity a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    /// Very brief and simple, nothing to learn beyond the rule itself
    Warmup,
    /// Narrow game built to teach one specific skill
    Exercise,
    /// Repetitive game used to practice one specific skill
    Drill,
    /// Full improv game exercising several skills at once
    Game,
}

impl Default for ActivityType {
    fn default() -> Self {
        Self::Game
    }
}

/// Which branch of improv an activity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ActivityField {
    /// Built around a game that is established before play begins
    ShortForm,
    /// The game is discovered asynchronously during play
    LongForm,
}

impl Default for ActivityField {
    fn default() -> Self {
        Self::ShortForm
    }
}

/// Classification tags. An activity carries zero or more of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ActivityTag {
    /// Focused on creating a scene
    Scene,
    /// Most players stay on the sidelines
    Backline,
    /// A fixed formation is used for quick drills
    Gauntlet,
    /// Players have the initiative to jump in
    Jumpout,
    /// Has competitive elements
    Competitive,
    /// Involves guessing elements
    Guessing,
    /// Involves music or singing
    Musical,
    /// Requires a host or moderator
    Hosted,
    /// Requires assistance from other performers
    Assisted,
    /// Focused on storytelling
    Narrative,
    /// Requires significant physical movement
    Physical,
}

impl ActivityTag {
    /// Every tag in the taxonomy, for filter-style consumers.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Scene,
            Self::Backline,
            Self::Gauntlet,
            Self::Jumpout,
            Self::Competitive,
            Self::Guessing,
            Self::Musical,
            Self::Hosted,
            Self::Assisted,
            Self::Narrative,
            Self::Physical,
        ]
    }
}

/// Prerequisite knowledge an activity assumes, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Suitable for brand-new improvisers
    Beginner = 1,
    /// Assumes foundational concepts: base reality, who/what/where, subversion
    Intermediate = 2,
    /// Assumes game awareness and moves like heightening, framing, justification
    Advanced = 3,
    /// Assumes long form structure, character work, and in-depth theory
    Expert = 4,
}

impl ActivityLevel {
    /// Ordinal rank (higher = more prerequisite knowledge).
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// All levels in ascending order.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Beginner,
            Self::Intermediate,
            Self::Advanced,
            Self::Expert,
        ]
    }
}

impl Default for ActivityLevel {
    fn default() -> Self {
        Self::Beginner
    }
}

/// Rule density of an activity, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ActivityComplexity {
    /// One rule, no special instructions, purely reactive
    VeryLow = 1,
    /// One or two rules, rarely raises questions
    Low = 2,
    /// Two or three rules, timing or cue based, needs an example
    Medium = 3,
    /// Rules interact with each other, needs several examples
    High = 4,
    /// Many interacting rules, needs detailed explanation and prior knowledge
    VeryHigh = 5,
}

impl Default for ActivityComplexity {
    fn default() -> Self {
        Self::VeryLow
    }
}

/// How much mastery-depth an activity rewards with practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ActivitySkillCeiling {
    /// No development left once the rule is understood
    Low = 1,
    /// Some development over time, theory can be applied
    Medium = 2,
    /// Practice leads to significant development and better scene quality
    High = 3,
    /// No ceiling; mastery keeps deepening indefinitely
    Endless = 4,
}

impl Default for ActivitySkillCeiling {
    fn default() -> Self {
        Self::Low
    }
}

/// Skills an activity trains. An activity carries zero or more of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ActivitySkill {
    /// Establishing context so a scene partner can see the game
    Framing,
    /// Raising the stakes of a scene through actions and dialogue
    Heightening,
    /// Supplying reasons and motivations for what happens in a scene
    Justification,
    /// Responding appropriately to partners and situations
    Reaction,
    /// Actively hearing and understanding scene partners
    Listening,
    /// Using the body effectively in a scene
    Physicality,
    /// Fully engaging with a scene or character
    Commitment,
    /// Building and maintaining relationships between characters
    Relationship,
    /// Keeping the scene's world believable and consistent
    BaseReality,
}

impl ActivitySkill {
    /// Every skill in the taxonomy, for filter-style consumers.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Framing,
            Self::Heightening,
            Self::Justification,
            Self::Reaction,
            Self::Listening,
            Self::Physicality,
            Self::Commitment,
            Self::Relationship,
            Self::BaseReality,
        ]
    }
}

/// How much physical movement an activity asks for, least to most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum PhysicalityLevel {
    /// No physical movement required
    None = 0,
    /// Upper body movement required
    HalfBody = 1,
    /// Full body movement required
    FullBody = 2,
}

impl PhysicalityLevel {
    /// Get string representation for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::HalfBody => "half_body",
            Self::FullBody => "full_body",
        }
    }
}

impl Default for PhysicalityLevel {
    fn default() -> Self {
        Self::HalfBody
    }
}

/// How much vocal work an activity asks for, least to most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum VocalityLevel {
    /// No vocalization required
    None = 0,
    /// Works over text communication
    Text = 1,
    /// Requires voice communication
    Vocal = 2,
}

impl VocalityLevel {
    /// Get string representation for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Text => "text",
            Self::Vocal => "vocal",
        }
    }
}

impl Default for VocalityLevel {
    fn default() -> Self {
        Self::Vocal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graded_vocabularies_use_declared_order() {
        // Lexical order would put "low" < "very_low"; declared order must not.
        assert!(ActivityComplexity::VeryLow < ActivityComplexity::Low);
        assert!(ActivityComplexity::High < ActivityComplexity::VeryHigh);

        assert!(ActivityLevel::Beginner < ActivityLevel::Intermediate);
        assert!(ActivityLevel::Advanced < ActivityLevel::Expert);

        assert!(ActivitySkillCeiling::High < ActivitySkillCeiling::Endless);

        assert!(PhysicalityLevel::None < PhysicalityLevel::HalfBody);
        assert!(PhysicalityLevel::HalfBody < PhysicalityLevel::FullBody);

        // "text" < "vocal" lexically too, but "none" > both lexically.
        assert!(VocalityLevel::None < VocalityLevel::Text);
        assert!(VocalityLevel::Text < VocalityLevel::Vocal);
    }

    #[test]
    fn test_level_rank_ascends() {
        let levels = ActivityLevel::all();
        assert_eq!(levels.first(), Some(&ActivityLevel::Beginner));
        assert_eq!(levels.last(), Some(&ActivityLevel::Expert));
        for pair in levels.windows(2) {
            assert!(pair[0].rank() < pair[1].rank());
        }
    }

    #[test]
    fn test_taxonomy_listings_are_complete() {
        assert_eq!(ActivityTag::all().len(), 11);
        assert_eq!(ActivitySkill::all().len(), 9);
    }

    #[test]
    fn test_wire_strings_are_snake_case() {
        assert_eq!(
            serde_json::to_string(&ActivityField::ShortForm).unwrap(),
            "\"short_form\""
        );
        assert_eq!(
            serde_json::to_string(&ActivityComplexity::VeryLow).unwrap(),
            "\"very_low\""
        );
        assert_eq!(
            serde_json::to_string(&PhysicalityLevel::HalfBody).unwrap(),
            "\"half_body\""
        );
        assert_eq!(
            serde_json::to_string(&ActivitySkill::BaseReality).unwrap(),
            "\"base_reality\""
        );

        // Closed set: unknown values are rejected at the boundary.
        assert!(serde_json::from_str::<ActivityTag>("\"improvised\"").is_err());
        let tag: ActivityTag = serde_json::from_str("\"jumpout\"").unwrap();
        assert_eq!(tag, ActivityTag::Jumpout);
    }

    #[test]
    fn test_defaults_match_catalog_conventions() {
        assert_eq!(ActivityType::default(), ActivityType::Game);
        assert_eq!(ActivityField::default(), ActivityField::ShortForm);
        assert_eq!(ActivityLevel::default(), ActivityLevel::Beginner);
        assert_eq!(ActivityComplexity::default(), ActivityComplexity::VeryLow);
        assert_eq!(ActivitySkillCeiling::default(), ActivitySkillCeiling::Low);
        assert_eq!(PhysicalityLevel::default(), PhysicalityLevel::HalfBody);
        assert_eq!(VocalityLevel::default(), VocalityLevel::Vocal);
    }
}
