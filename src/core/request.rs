//! Wire-level request types and their validation into domain types.
//!
//! Request bodies are deserialized leniently: every field is optional so that
//! an absent field can be reported as a typed [`RequestError`] naming what is
//! missing, instead of a generic deserialization failure.

use serde::{Deserialize, Deserializer};

use crate::core::team::{Team, TeamId};
use crate::utils::validation::{check_team_limit, check_user_skill_limit};

/// Errors raised while turning a [`RecommendRequest`] into matchable input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("Missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("Team at index {index} is missing required field '{field}'")]
    MalformedTeam { index: usize, field: &'static str },

    #[error("Too many teams: {count} exceeds maximum of {max}")]
    TooManyTeams { count: usize, max: usize },

    #[error("Too many user skills: {count} exceeds maximum of {max}")]
    TooManySkills { count: usize, max: usize },
}

impl RequestError {
    /// Stable machine-readable name for the error kind
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing_field",
            Self::MalformedTeam { .. } => "malformed_team",
            Self::TooManyTeams { .. } => "too_many_teams",
            Self::TooManySkills { .. } => "too_many_skills",
        }
    }
}

/// Deserialize a field that may hold any JSON value, `null` included.
///
/// Paired with `#[serde(default)]`, a missing key stays `None` while an
/// explicit `null` becomes `Some(Value::Null)`.
fn present_value<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

/// A team as it arrives on the wire, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamRecord {
    /// `None` only when the key is missing; `null` is a valid identifier
    #[serde(default, deserialize_with = "present_value")]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required_skills: Option<Vec<String>>,
}

impl TeamRecord {
    /// Validate this record into a [`Team`].
    ///
    /// `index` is the record's position in the request and is reported back
    /// on failure. Absent or `null` `required_skills` become an empty list.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::MalformedTeam` if `id` is missing, or if `name`
    /// or `description` is missing or `null`.
    pub fn into_team(self, index: usize) -> Result<Team, RequestError> {
        let id = self.id.ok_or(RequestError::MalformedTeam { index, field: "id" })?;
        let name = self
            .name
            .ok_or(RequestError::MalformedTeam { index, field: "name" })?;
        let description = self.description.ok_or(RequestError::MalformedTeam {
            index,
            field: "description",
        })?;

        Ok(Team {
            id: TeamId(id),
            name,
            description,
            required_skills: self.required_skills.unwrap_or_default(),
        })
    }
}

/// Body of a recommendation request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub user_skills: Option<Vec<String>>,
    #[serde(default)]
    pub teams: Option<Vec<TeamRecord>>,
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub user_skills: Vec<String>,
    pub teams: Vec<Team>,
}

impl RecommendRequest {
    /// Validate the request, failing on the first problem found.
    ///
    /// Top-level fields are checked before any team, and teams are checked in
    /// input order, so the reported team index is the first malformed one.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::MissingField` if `user_skills` or `teams` is
    /// absent, `RequestError::MalformedTeam` for the first team lacking a
    /// mandatory field, or a size-limit error.
    pub fn validate(self) -> Result<ValidatedRequest, RequestError> {
        let user_skills = self.user_skills.ok_or(RequestError::MissingField {
            field: "user_skills",
        })?;
        let records = self
            .teams
            .ok_or(RequestError::MissingField { field: "teams" })?;

        check_user_skill_limit(user_skills.len())?;
        check_team_limit(records.len())?;

        let teams = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_team(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ValidatedRequest { user_skills, teams })
    }
}
