use serde::Serialize;

use crate::core::request::ValidatedRequest;
use crate::core::skills::SkillSet;
use crate::core::team::{Team, TeamId};

/// A team that shares at least one skill with the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub id: TeamId,

    pub name: String,

    pub description: String,

    /// The team's skills as supplied, without case folding
    pub required_skills: Vec<String>,

    /// Case-folded skills common to user and team, sorted
    pub matched_skills: Vec<String>,

    /// Number of matched skills
    pub score: usize,
}

impl MatchResult {
    /// Score a team against a folded user skill set.
    ///
    /// Returns `None` when the team has no required skills or shares none
    /// with the user.
    pub fn score_team(user_skills: &SkillSet, team: &Team) -> Option<Self> {
        if !team.has_required_skills() {
            return None;
        }

        let team_skills = SkillSet::from_skills(&team.required_skills);
        let matched_skills = user_skills.intersection(&team_skills);
        if matched_skills.is_empty() {
            return None;
        }

        Some(Self {
            id: team.id.clone(),
            name: team.name.clone(),
            description: team.description.clone(),
            required_skills: team.required_skills.clone(),
            score: matched_skills.len(),
            matched_skills,
        })
    }
}

/// Rank teams by how many of the user's skills they require.
///
/// Teams with no required skills, or none in common with the user, are left
/// out. The rest are ordered by score descending; teams with equal scores
/// keep their input order.
///
/// ```
/// use skill_match::{recommend, Team};
///
/// let teams = vec![
///     Team::new(1, "A", "d").with_required_skills(["Python", "Go"]),
///     Team::new(2, "B", "d2").with_required_skills(["python", "React"]),
/// ];
/// let matches = recommend(&["python", "react"], &teams);
///
/// assert_eq!(matches[0].name, "B");
/// assert_eq!(matches[0].score, 2);
/// assert_eq!(matches[1].matched_skills, vec!["python"]);
/// ```
pub fn recommend<S: AsRef<str>>(user_skills: &[S], teams: &[Team]) -> Vec<MatchResult> {
    MatchingEngine::new(user_skills).find_matches(teams)
}

/// Matches one user's skills against any number of teams
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    user_skills: SkillSet,
}

impl MatchingEngine {
    pub fn new<S: AsRef<str>>(user_skills: &[S]) -> Self {
        Self {
            user_skills: SkillSet::from_skills(user_skills),
        }
    }

    /// Create an engine for the user described by a validated request
    pub fn from_request(request: &ValidatedRequest) -> Self {
        Self::new(&request.user_skills)
    }

    /// The user's case-folded skills
    pub fn user_skills(&self) -> &SkillSet {
        &self.user_skills
    }

    /// Find and rank all teams sharing a skill with the user
    pub fn find_matches(&self, teams: &[Team]) -> Vec<MatchResult> {
        if self.user_skills.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<MatchResult> = teams
            .iter()
            .filter_map(|team| MatchResult::score_team(&self.user_skills, team))
            .collect();

        // Stable: equal scores stay in input order
        results.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::debug!(
            teams = teams.len(),
            matches = results.len(),
            "Scored teams against user skills"
        );

        results
    }
}
