//! Canonical example activity used by demos and regression tests.

use std::collections::HashSet;

use chrono::Utc;

use crate::activity::{
    Activity, ActivityRequirements, ActivityTips, DurationRequirement, PhysicalityRequirement,
    PlayerRequirement, VocalityRequirement,
};
use crate::types::{
    ActivityComplexity, ActivityField, ActivityLevel, ActivitySkill, ActivitySkillCeiling,
    ActivityTag, ActivityType, PhysicalityLevel, VocalityLevel,
};

/// One fully-populated, well-formed catalog record.
///
/// Seed data for demos and the fixture the validation regression tests
/// run against - it must always pass [`crate::validate_activity`] with
/// zero violations.
pub fn example_activity() -> Activity {
    Activity {
        id: "freeze-tag".to_string(),
        updated_at: Utc::now(),
        name: vec!["Freeze Tag".to_string(), "Freeze".to_string()],
        brief: "Scenes spun from a frozen pose, swapped on a call".to_string(),
        summary: "Two players improvise until someone calls freeze, takes over one \
                  frozen pose, and justifies a brand new scene from it."
            .to_string(),
        description: "Two players start a scene from a suggestion, playing with big \
                      physical choices. At any point another player calls freeze, tags \
                      one of the two out, and assumes their exact pose. The new player \
                      starts a completely different scene justified by the inherited \
                      body positions. Keep edits fast so everyone on the backline gets \
                      plenty of turns."
            .to_string(),
        tips: ActivityTips {
            generic: vec!["Favor big, readable poses over clever dialogue.".to_string()],
            host: vec!["Call freeze yourself if the backline hesitates.".to_string()],
            player: vec!["Justify the pose first; the scene follows from it.".to_string()],
        },
        requirements: ActivityRequirements {
            players: PlayerRequirement {
                minimum: 3,
                recommended: 8,
            },
            duration: DurationRequirement {
                minimum: 300,
                average: 600,
            },
            physicality: PhysicalityRequirement {
                minimum: PhysicalityLevel::HalfBody,
                recommended: PhysicalityLevel::FullBody,
            },
            vocality: VocalityRequirement {
                minimum: VocalityLevel::Vocal,
                recommended: VocalityLevel::Vocal,
            },
        },
        tags: HashSet::from([ActivityTag::Scene, ActivityTag::Jumpout, ActivityTag::Backline]),
        skills: HashSet::from([
            ActivitySkill::Justification,
            ActivitySkill::Reaction,
            ActivitySkill::Physicality,
        ]),
        field: ActivityField::ShortForm,
        activity_type: ActivityType::Game,
        level: ActivityLevel::Beginner,
        complexity: ActivityComplexity::Low,
        skill_ceiling: ActivitySkillCeiling::High,
        parent: None,
        variants: Vec::new(),
        credits: vec!["Traditional".to_string()],
        sources: vec!["Improv Encyclopedia".to_string()],
    }
}
