//! Per-activity and collection-level validation.
//!
//! Validation never fails fast and never panics: every check in a pass
//! runs, every violation found is collected, and the caller receives the
//! complete report to decide whether to reject or merely warn. A report
//! with zero violations means valid.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::activity::Activity;

/// Character cap for [`Activity::brief`].
pub const BRIEF_LIMIT: usize = 50;
/// Character cap for [`Activity::summary`].
pub const SUMMARY_LIMIT: usize = 200;
/// Character cap for [`Activity::description`].
pub const DESCRIPTION_LIMIT: usize = 500;

/// What a single violation is about.
///
/// Per-field kinds come out of [`validate_activity`]; the relational
/// kinds come out of [`validate_collection`] and always name the id(s)
/// involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required field (id, name list, alias, tip entry) is empty.
    #[error("required field is empty")]
    EmptyRequiredField,

    /// A capped text field runs past its character limit.
    #[error("length {actual} exceeds the {limit} character limit")]
    LengthExceeded {
        /// Maximum allowed characters.
        limit: usize,
        /// Characters actually present.
        actual: usize,
    },

    /// A requirement pair has its upper value below its minimum.
    #[error("'{upper}' is below the minimum '{minimum}'")]
    OrderingViolation {
        /// The pair's minimum, rendered for display.
        minimum: String,
        /// The recommended/average value, rendered for display.
        upper: String,
    },

    /// The same id appears more than once in a candidate collection.
    #[error("duplicate id '{id}'")]
    DuplicateId { id: String },

    /// One side of a parent/variant link does not point back.
    ///
    /// Flagged in both directions and never repaired; the caller decides
    /// which side is authoritative.
    #[error("'{parent_id}' and '{variant_id}' disagree about their parent/variant link")]
    AsymmetricLink {
        parent_id: String,
        variant_id: String,
    },

    /// A `parent` or `variants` entry names an id absent from the collection.
    #[error("'{from_id}' references missing id '{missing_id}'")]
    DanglingReference {
        from_id: String,
        missing_id: String,
    },

    /// A parent chain revisits one of its own ancestors.
    #[error("parent chain forms a cycle: {}", .ids.join(" -> "))]
    CyclicParentChain { ids: Vec<String> },
}

/// One violation, anchored to the field (or id-scoped field) it was found at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Violation {
    /// Field path, e.g. `requirements.players` or `root-1.variants[0]`.
    pub path: String,
    /// What went wrong there.
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// The complete outcome of a validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ValidationResult {
    /// Every violation found, in discovery order.
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    /// True when the pass found nothing wrong.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Record a violation at the given path.
    pub fn push(&mut self, path: impl Into<String>, kind: ViolationKind) {
        self.violations.push(Violation {
            path: path.into(),
            kind,
        });
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.violations.extend(other.violations);
    }

    /// Violations of a particular kind, for callers triaging a report.
    pub fn of_kind<'a>(
        &'a self,
        predicate: impl Fn(&ViolationKind) -> bool + 'a,
    ) -> impl Iterator<Item = &'a Violation> {
        self.violations.iter().filter(move |v| predicate(&v.kind))
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() {
            return write!(f, "valid");
        }
        writeln!(f, "{} violation(s):", self.violations.len())?;
        for violation in &self.violations {
            writeln!(f, "  - {}", violation)?;
        }
        Ok(())
    }
}

/// Check one activity against every per-field invariant.
///
/// Pure and complete: all violations found are returned, not just the
/// first. Enum membership and non-negativity are structural in this
/// model and need no dynamic check.
pub fn validate_activity(activity: &Activity) -> ValidationResult {
    let mut report = ValidationResult::default();

    if activity.id.is_empty() {
        report.push("id", ViolationKind::EmptyRequiredField);
    }

    if activity.name.is_empty() {
        report.push("name", ViolationKind::EmptyRequiredField);
    }
    for (i, alias) in activity.name.iter().enumerate() {
        if alias.is_empty() {
            report.push(format!("name[{i}]"), ViolationKind::EmptyRequiredField);
        }
    }

    check_length(&mut report, "brief", &activity.brief, BRIEF_LIMIT);
    check_length(&mut report, "summary", &activity.summary, SUMMARY_LIMIT);
    check_length(
        &mut report,
        "description",
        &activity.description,
        DESCRIPTION_LIMIT,
    );

    let tips = &activity.tips;
    for (field, list) in [
        ("tips.generic", &tips.generic),
        ("tips.host", &tips.host),
        ("tips.player", &tips.player),
    ] {
        for (i, tip) in list.iter().enumerate() {
            if tip.is_empty() {
                report.push(format!("{field}[{i}]"), ViolationKind::EmptyRequiredField);
            }
        }
    }

    let requirements = &activity.requirements;
    let players = &requirements.players;
    if players.recommended < players.minimum {
        report.push(
            "requirements.players",
            ViolationKind::OrderingViolation {
                minimum: players.minimum.to_string(),
                upper: players.recommended.to_string(),
            },
        );
    }
    let duration = &requirements.duration;
    if duration.average < duration.minimum {
        report.push(
            "requirements.duration",
            ViolationKind::OrderingViolation {
                minimum: duration.minimum.to_string(),
                upper: duration.average.to_string(),
            },
        );
    }
    let physicality = &requirements.physicality;
    if physicality.recommended < physicality.minimum {
        report.push(
            "requirements.physicality",
            ViolationKind::OrderingViolation {
                minimum: physicality.minimum.as_str().to_string(),
                upper: physicality.recommended.as_str().to_string(),
            },
        );
    }
    let vocality = &requirements.vocality;
    if vocality.recommended < vocality.minimum {
        report.push(
            "requirements.vocality",
            ViolationKind::OrderingViolation {
                minimum: vocality.minimum.as_str().to_string(),
                upper: vocality.recommended.as_str().to_string(),
            },
        );
    }

    report
}

fn check_length(report: &mut ValidationResult, path: &str, value: &str, limit: usize) {
    // Caps are defined over characters, not bytes.
    let actual = value.chars().count();
    if actual > limit {
        report.push(path, ViolationKind::LengthExceeded { limit, actual });
    }
}

/// Check relational consistency across a materialized collection.
///
/// Covers global id uniqueness, both directions of parent/variant
/// symmetry, reference existence, and acyclicity of parent chains. All
/// violations in the pass are collected; nothing aborts early and
/// nothing is repaired.
pub fn validate_collection<'a, I>(activities: I) -> ValidationResult
where
    I: IntoIterator<Item = &'a Activity>,
{
    let activities: Vec<&Activity> = activities.into_iter().collect();
    let mut report = ValidationResult::default();

    // Uniqueness first; the by-id index keeps the first occurrence.
    let mut index: HashMap<&str, &Activity> = HashMap::new();
    for &activity in &activities {
        if index.contains_key(activity.id.as_str()) {
            report.push(
                format!("{}.id", activity.id),
                ViolationKind::DuplicateId {
                    id: activity.id.clone(),
                },
            );
        } else {
            index.insert(activity.id.as_str(), activity);
        }
    }

    // Variant side: every listed variant must exist and point back.
    for activity in &activities {
        for (i, variant_id) in activity.variants.iter().enumerate() {
            let path = format!("{}.variants[{i}]", activity.id);
            match index.get(variant_id.as_str()) {
                None => report.push(
                    path,
                    ViolationKind::DanglingReference {
                        from_id: activity.id.clone(),
                        missing_id: variant_id.clone(),
                    },
                ),
                Some(variant) if variant.parent.as_deref() != Some(activity.id.as_str()) => {
                    report.push(
                        path,
                        ViolationKind::AsymmetricLink {
                            parent_id: activity.id.clone(),
                            variant_id: variant_id.clone(),
                        },
                    )
                }
                Some(_) => {}
            }
        }
    }

    // Parent side: a named parent must exist and list this activity back.
    // The two directions can never both fire for the same pair.
    for activity in &activities {
        let Some(parent_id) = activity.parent.as_deref() else {
            continue;
        };
        let path = format!("{}.parent", activity.id);
        match index.get(parent_id) {
            None => report.push(
                path,
                ViolationKind::DanglingReference {
                    from_id: activity.id.clone(),
                    missing_id: parent_id.to_string(),
                },
            ),
            Some(parent) if !parent.variants.iter().any(|v| v == &activity.id) => report.push(
                path,
                ViolationKind::AsymmetricLink {
                    parent_id: parent_id.to_string(),
                    variant_id: activity.id.clone(),
                },
            ),
            Some(_) => {}
        }
    }

    // Acyclicity: walk each parent chain once; a repeated node on the
    // current path is a cycle. The visited set keeps every chain and
    // every cycle from being reported more than once.
    let mut visited: HashSet<&str> = HashSet::new();
    for activity in &activities {
        if visited.contains(activity.id.as_str()) {
            continue;
        }
        let mut path_ids: Vec<&str> = Vec::new();
        let mut on_path: HashSet<&str> = HashSet::new();
        let mut current = Some(activity.id.as_str());
        while let Some(id) = current {
            if on_path.contains(id) {
                let start = path_ids.iter().position(|p| *p == id).unwrap_or(0);
                let cycle: Vec<String> = path_ids[start..].iter().map(|p| p.to_string()).collect();
                report.push(
                    format!("{id}.parent"),
                    ViolationKind::CyclicParentChain { ids: cycle },
                );
                break;
            }
            if visited.contains(id) {
                break;
            }
            on_path.insert(id);
            path_ids.push(id);
            // A missing parent was already flagged as dangling; the walk
            // just stops there.
            current = index.get(id).copied().and_then(|a| a.parent.as_deref());
        }
        visited.extend(path_ids);
    }

    if !report.is_valid() {
        tracing::warn!(
            violations = report.violations.len(),
            "collection validation found inconsistencies"
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityBuilder;
    use crate::types::{PhysicalityLevel, VocalityLevel};

    fn activity(id: &str) -> Activity {
        ActivityBuilder::new(id)
            .name("Test Activity")
            .brief("A short pitch")
            .summary("A short summary of the test activity.")
            .description("A longer description of how the test activity runs.")
            .players(2, 4)
            .duration(300, 600)
            .build()
            .unwrap()
    }

    fn linked(parent_id: &str, variant_id: &str) -> (Activity, Activity) {
        let mut parent = activity(parent_id);
        parent.variants = vec![variant_id.to_string()];
        let mut variant = activity(variant_id);
        variant.parent = Some(parent_id.to_string());
        (parent, variant)
    }

    #[test]
    fn test_valid_activity_has_no_violations() {
        let report = validate_activity(&activity("clean"));
        assert!(report.is_valid(), "unexpected violations: {report}");
    }

    #[test]
    fn test_empty_id_and_name_are_flagged() {
        let mut subject = activity("subject");
        subject.id = String::new();
        subject.name.clear();

        let report = validate_activity(&subject);
        assert_eq!(report.violations.len(), 2);
        assert!(report
            .violations
            .iter()
            .any(|v| v.path == "id" && v.kind == ViolationKind::EmptyRequiredField));
        assert!(report
            .violations
            .iter()
            .any(|v| v.path == "name" && v.kind == ViolationKind::EmptyRequiredField));
    }

    #[test]
    fn test_blank_alias_and_tip_entries_are_flagged() {
        let mut subject = activity("subject");
        subject.name.push(String::new());
        subject.tips.host.push("Keep rounds short".to_string());
        subject.tips.host.push(String::new());

        let report = validate_activity(&subject);
        let paths: Vec<&str> = report.violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["name[1]", "tips.host[1]"]);
    }

    #[test]
    fn test_text_caps_count_characters() {
        let mut subject = activity("subject");
        subject.brief = "x".repeat(BRIEF_LIMIT + 1);
        subject.summary = "y".repeat(SUMMARY_LIMIT);
        subject.description = "z".repeat(DESCRIPTION_LIMIT + 20);

        let report = validate_activity(&subject);
        assert_eq!(report.violations.len(), 2);
        assert_eq!(
            report.violations[0].kind,
            ViolationKind::LengthExceeded {
                limit: BRIEF_LIMIT,
                actual: BRIEF_LIMIT + 1
            }
        );
        assert_eq!(report.violations[1].path, "description");

        // Multi-byte characters count once each.
        subject = activity("subject");
        subject.brief = "é".repeat(BRIEF_LIMIT);
        assert!(validate_activity(&subject).is_valid());
    }

    #[test]
    fn test_each_inverted_pair_yields_exactly_one_ordering_violation() {
        let mut subject = activity("subject");
        subject.requirements.players.minimum = 4;
        subject.requirements.players.recommended = 2;
        let report = validate_activity(&subject);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].path, "requirements.players");

        let mut subject = activity("subject");
        subject.requirements.duration.minimum = 600;
        subject.requirements.duration.average = 300;
        let report = validate_activity(&subject);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].path, "requirements.duration");

        let mut subject = activity("subject");
        subject.requirements.physicality.minimum = PhysicalityLevel::FullBody;
        subject.requirements.physicality.recommended = PhysicalityLevel::None;
        let report = validate_activity(&subject);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(
            report.violations[0].kind,
            ViolationKind::OrderingViolation {
                minimum: "full_body".to_string(),
                upper: "none".to_string(),
            }
        );

        let mut subject = activity("subject");
        subject.requirements.vocality.minimum = VocalityLevel::Vocal;
        subject.requirements.vocality.recommended = VocalityLevel::Text;
        let report = validate_activity(&subject);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].path, "requirements.vocality");
    }

    #[test]
    fn test_symmetric_pair_is_consistent() {
        let (parent, variant) = linked("root-1", "child-1");
        let report = validate_collection([&parent, &variant]);
        assert!(report.is_valid(), "unexpected violations: {report}");
    }

    #[test]
    fn test_orphaned_variant_claim_is_one_asymmetry() {
        let (parent, mut variant) = linked("root-1", "child-1");
        variant.parent = None;

        let report = validate_collection([&parent, &variant]);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(
            report.violations[0].kind,
            ViolationKind::AsymmetricLink {
                parent_id: "root-1".to_string(),
                variant_id: "child-1".to_string(),
            }
        );
    }

    #[test]
    fn test_reparented_variant_is_one_asymmetry_plus_dangling() {
        let (parent, mut variant) = linked("root-1", "child-1");
        variant.parent = Some("elsewhere".to_string());

        let report = validate_collection([&parent, &variant]);
        let asymmetries: Vec<_> = report
            .of_kind(|k| matches!(k, ViolationKind::AsymmetricLink { .. }))
            .collect();
        assert_eq!(asymmetries.len(), 1);
        assert_eq!(
            asymmetries[0].kind,
            ViolationKind::AsymmetricLink {
                parent_id: "root-1".to_string(),
                variant_id: "child-1".to_string(),
            }
        );
        let dangling: Vec<_> = report
            .of_kind(|k| matches!(k, ViolationKind::DanglingReference { .. }))
            .collect();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].path, "child-1.parent");
    }

    #[test]
    fn test_parent_claim_without_variant_listing_is_flagged() {
        let parent = activity("root-1");
        let mut variant = activity("child-1");
        variant.parent = Some("root-1".to_string());

        let report = validate_collection([&parent, &variant]);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(
            report.violations[0].kind,
            ViolationKind::AsymmetricLink {
                parent_id: "root-1".to_string(),
                variant_id: "child-1".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_ids_are_flagged() {
        let first = activity("twin");
        let second = activity("twin");

        let report = validate_collection([&first, &second]);
        assert!(report
            .violations
            .iter()
            .any(|v| v.kind == ViolationKind::DuplicateId {
                id: "twin".to_string()
            }));
    }

    #[test]
    fn test_dangling_variant_reference_is_flagged() {
        let mut parent = activity("root-1");
        parent.variants = vec!["ghost".to_string()];

        let report = validate_collection([&parent]);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(
            report.violations[0].kind,
            ViolationKind::DanglingReference {
                from_id: "root-1".to_string(),
                missing_id: "ghost".to_string(),
            }
        );
    }

    #[test]
    fn test_two_node_parent_cycle_is_detected() {
        let (mut a, mut b) = linked("a", "b");
        // Close the loop: a also claims b as its parent, and b lists a back
        // so the links stay symmetric and only the cycle is wrong.
        a.parent = Some("b".to_string());
        b.variants = vec!["a".to_string()];

        let report = validate_collection([&a, &b]);
        let cycles: Vec<_> = report
            .of_kind(|k| matches!(k, ViolationKind::CyclicParentChain { .. }))
            .collect();
        assert_eq!(cycles.len(), 1);
        match &cycles[0].kind {
            ViolationKind::CyclicParentChain { ids } => {
                assert_eq!(ids.len(), 2);
                assert!(ids.contains(&"a".to_string()));
                assert!(ids.contains(&"b".to_string()));
            }
            other => panic!("expected cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_self_parent_is_a_cycle() {
        let mut a = activity("loner");
        a.parent = Some("loner".to_string());
        a.variants = vec!["loner".to_string()];

        let report = validate_collection([&a]);
        assert!(report
            .violations
            .iter()
            .any(|v| matches!(&v.kind, ViolationKind::CyclicParentChain { ids } if ids == &vec!["loner".to_string()])));
    }

    #[test]
    fn test_chain_into_cycle_reports_cycle_once() {
        let (mut a, mut b) = linked("a", "b");
        a.parent = Some("b".to_string());
        b.variants = vec!["a".to_string()];
        a.variants.push("c".to_string());
        let mut c = activity("c");
        c.parent = Some("a".to_string());

        let report = validate_collection([&c, &a, &b]);
        let cycles: Vec<_> = report
            .of_kind(|k| matches!(k, ViolationKind::CyclicParentChain { .. }))
            .collect();
        assert_eq!(cycles.len(), 1);
    }

    #[test]
    fn test_reports_merge_for_whole_catalog_review() {
        let mut subject = activity("subject");
        subject.brief = "x".repeat(BRIEF_LIMIT + 1);
        let mut orphan = activity("orphan");
        orphan.parent = Some("missing".to_string());

        let mut report = ValidationResult::default();
        for a in [&subject, &orphan] {
            report.merge(validate_activity(a));
        }
        report.merge(validate_collection([&subject, &orphan]));

        assert!(!report.is_valid());
        assert_eq!(report.violations.len(), 2);
        assert_eq!(report.violations[0].path, "brief");
        assert_eq!(report.violations[1].path, "orphan.parent");
    }

    #[test]
    fn test_report_display_lists_every_violation() {
        assert_eq!(ValidationResult::default().to_string(), "valid");

        let mut subject = activity("subject");
        subject.id = String::new();
        let rendered = validate_activity(&subject).to_string();
        assert!(rendered.starts_with("1 violation(s):"));
        assert!(rendered.contains("id: required field is empty"));
    }

    #[test]
    fn test_root_with_no_backreference_is_valid() {
        // A root is valid regardless of whether anything claims it.
        let root = activity("standalone");
        let report = validate_collection([&root]);
        assert!(report.is_valid());
    }
}
