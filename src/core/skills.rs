use std::collections::BTreeSet;

/// Fold a skill name for comparison.
///
/// Folding is lower-casing only. Surrounding whitespace is significant, so
/// `" python"` and `"python"` are different skills.
#[must_use]
pub fn fold_skill(skill: &str) -> String {
    skill.to_lowercase()
}

/// A set of case-folded skill names.
///
/// Backed by a `BTreeSet`, so intersections (and therefore the
/// `matched_skills` list in responses) come out sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    skills: BTreeSet<String>,
}

impl SkillSet {
    /// Build a set from raw skill names, folding and deduplicating them.
    pub fn from_skills<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            skills: skills.into_iter().map(|s| fold_skill(s.as_ref())).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Skills present in both sets, in sorted order
    #[must_use]
    pub fn intersection(&self, other: &SkillSet) -> Vec<String> {
        self.skills.intersection(&other.skills).cloned().collect()
    }
}
