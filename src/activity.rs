//! The activity entity and its nested requirement value objects.
//!
//! An [`Activity`] is plain data: invariants (length caps, ordering of
//! requirement pairs, non-empty identifiers) are reported by the
//! validator in [`crate::validate`], never enforced by panicking
//! constructors. [`ActivityBuilder`] is the well-formed construction
//! path - its `build` runs the full per-field validation.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::types::{
    ActivityComplexity, ActivityField, ActivityLevel, ActivitySkill, ActivitySkillCeiling,
    ActivityTag, ActivityType, PhysicalityLevel, VocalityLevel,
};
use crate::validate::{validate_activity, ValidationResult};

/// How many players an activity needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct PlayerRequirement {
    /// Fewest players the activity works with at all
    pub minimum: u32,
    /// Player count the activity plays best at; never below `minimum`
    pub recommended: u32,
}

/// How long an activity runs, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct DurationRequirement {
    /// Shortest useful run, in seconds
    pub minimum: u32,
    /// Typical run, in seconds; never below `minimum`
    pub average: u32,
}

/// Physical movement range an activity asks of its players.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct PhysicalityRequirement {
    /// Least movement the activity can be run with
    pub minimum: PhysicalityLevel,
    /// Movement the activity plays best with; never below `minimum`
    pub recommended: PhysicalityLevel,
}

/// Vocal range an activity asks of its players.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct VocalityRequirement {
    /// Least vocal work the activity can be run with
    pub minimum: VocalityLevel,
    /// Vocal work the activity plays best with; never below `minimum`
    pub recommended: VocalityLevel,
}

/// Everything needed to actually run an activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ActivityRequirements {
    pub players: PlayerRequirement,
    pub duration: DurationRequirement,
    pub physicality: PhysicalityRequirement,
    pub vocality: VocalityRequirement,
}

/// Facilitation tips, grouped by audience. Lists keep insertion order;
/// every entry is a non-empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ActivityTips {
    /// Tips that apply to everyone in the room
    pub generic: Vec<String>,
    /// Tips for whoever hosts or moderates
    pub host: Vec<String>,
    /// Tips for the performing players
    pub player: Vec<String>,
}

/// One catalogued improv activity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Activity {
    /// Stable identifier, unique within a catalog, never reused after deletion
    pub id: String,
    /// Last-modification timestamp; never moves backwards for a given id
    #[cfg_attr(feature = "typescript", ts(type = "string"))]
    pub updated_at: DateTime<Utc>,
    /// Aliases the activity is known by; the first entry is the canonical
    /// display name, and the list is never empty
    pub name: Vec<String>,
    /// One-line pitch, at most 50 characters
    pub brief: String,
    /// Short abstract, at most 200 characters
    pub summary: String,
    /// Full explanation of rules and expectations, at most 500 characters
    pub description: String,
    /// Facilitation tips by audience
    pub tips: ActivityTips,
    /// Player/duration/physicality/vocality ranges
    pub requirements: ActivityRequirements,
    /// Unordered classification tags
    pub tags: HashSet<ActivityTag>,
    /// Unordered set of skills the activity trains
    pub skills: HashSet<ActivitySkill>,
    /// Short form or long form
    pub field: ActivityField,
    /// Warmup, exercise, drill, or game
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    /// Prerequisite knowledge grade
    pub level: ActivityLevel,
    /// Rule density grade
    pub complexity: ActivityComplexity,
    /// Mastery-depth grade
    pub skill_ceiling: ActivitySkillCeiling,
    /// Id of the activity this one is derived from; `None` marks a root
    pub parent: Option<String>,
    /// Ids of activities derived from this one, in display order
    pub variants: Vec<String>,
    /// Contributor names, in display order
    pub credits: Vec<String>,
    /// Citations and links, in display order
    pub sources: Vec<String>,
}

impl Activity {
    /// The canonical display name - the first alias.
    pub fn canonical_name(&self) -> &str {
        self.name.first().map(String::as_str).unwrap_or("")
    }

    /// Record a mutation by bumping `updated_at` to now.
    ///
    /// The timestamp never moves backwards, even if the wall clock does.
    pub fn touch(&mut self) {
        let now = Utc::now();
        if now > self.updated_at {
            self.updated_at = now;
        }
    }
}

/// Builder for creating well-formed activities.
///
/// `build` runs the full per-field validation, so an [`Activity`] built
/// through this path is valid or not constructed at all.
pub struct ActivityBuilder {
    activity: Activity,
}

impl ActivityBuilder {
    /// Start a builder for the given stable id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            activity: Activity {
                id: id.into(),
                updated_at: Utc::now(),
                name: Vec::new(),
                brief: String::new(),
                summary: String::new(),
                description: String::new(),
                tips: ActivityTips::default(),
                requirements: ActivityRequirements::default(),
                tags: HashSet::new(),
                skills: HashSet::new(),
                field: ActivityField::default(),
                activity_type: ActivityType::default(),
                level: ActivityLevel::default(),
                complexity: ActivityComplexity::default(),
                skill_ceiling: ActivitySkillCeiling::default(),
                parent: None,
                variants: Vec::new(),
                credits: Vec::new(),
                sources: Vec::new(),
            },
        }
    }

    /// Add an alias. The first alias added becomes the canonical name.
    pub fn name(mut self, alias: impl Into<String>) -> Self {
        self.activity.name.push(alias.into());
        self
    }

    /// Set the one-line pitch.
    pub fn brief(mut self, brief: impl Into<String>) -> Self {
        self.activity.brief = brief.into();
        self
    }

    /// Set the short abstract.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.activity.summary = summary.into();
        self
    }

    /// Set the full description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.activity.description = description.into();
        self
    }

    /// Add a tip for everyone in the room.
    pub fn generic_tip(mut self, tip: impl Into<String>) -> Self {
        self.activity.tips.generic.push(tip.into());
        self
    }

    /// Add a tip for the host.
    pub fn host_tip(mut self, tip: impl Into<String>) -> Self {
        self.activity.tips.host.push(tip.into());
        self
    }

    /// Add a tip for the players.
    pub fn player_tip(mut self, tip: impl Into<String>) -> Self {
        self.activity.tips.player.push(tip.into());
        self
    }

    /// Set the player count range.
    pub fn players(mut self, minimum: u32, recommended: u32) -> Self {
        self.activity.requirements.players = PlayerRequirement {
            minimum,
            recommended,
        };
        self
    }

    /// Set the duration range, in seconds.
    pub fn duration(mut self, minimum: u32, average: u32) -> Self {
        self.activity.requirements.duration = DurationRequirement { minimum, average };
        self
    }

    /// Set the physicality range.
    pub fn physicality(mut self, minimum: PhysicalityLevel, recommended: PhysicalityLevel) -> Self {
        self.activity.requirements.physicality = PhysicalityRequirement {
            minimum,
            recommended,
        };
        self
    }

    /// Set the vocality range.
    pub fn vocality(mut self, minimum: VocalityLevel, recommended: VocalityLevel) -> Self {
        self.activity.requirements.vocality = VocalityRequirement {
            minimum,
            recommended,
        };
        self
    }

    /// Add a classification tag.
    pub fn tag(mut self, tag: ActivityTag) -> Self {
        self.activity.tags.insert(tag);
        self
    }

    /// Add a trained skill.
    pub fn skill(mut self, skill: ActivitySkill) -> Self {
        self.activity.skills.insert(skill);
        self
    }

    /// Set the field.
    pub fn field(mut self, field: ActivityField) -> Self {
        self.activity.field = field;
        self
    }

    /// Set the activity type.
    pub fn activity_type(mut self, activity_type: ActivityType) -> Self {
        self.activity.activity_type = activity_type;
        self
    }

    /// Set the level.
    pub fn level(mut self, level: ActivityLevel) -> Self {
        self.activity.level = level;
        self
    }

    /// Set the complexity.
    pub fn complexity(mut self, complexity: ActivityComplexity) -> Self {
        self.activity.complexity = complexity;
        self
    }

    /// Set the skill ceiling.
    pub fn skill_ceiling(mut self, skill_ceiling: ActivitySkillCeiling) -> Self {
        self.activity.skill_ceiling = skill_ceiling;
        self
    }

    /// Set the parent this activity derives from.
    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.activity.parent = Some(parent.into());
        self
    }

    /// Add a derived variant id.
    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.activity.variants.push(variant.into());
        self
    }

    /// Add a contributor credit.
    pub fn credit(mut self, credit: impl Into<String>) -> Self {
        self.activity.credits.push(credit.into());
        self
    }

    /// Add a citation or link.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.activity.sources.push(source.into());
        self
    }

    /// Validate and build the activity.
    ///
    /// Returns the complete violation report if any per-field invariant
    /// fails; nothing partial is ever constructed.
    pub fn build(self) -> Result<Activity, ValidationResult> {
        let report = validate_activity(&self.activity);
        if report.is_valid() {
            Ok(self.activity)
        } else {
            Err(report)
        }
    }
}
