use serde::Serialize;

/// Opaque team identifier, echoed back exactly as the caller sent it.
///
/// Callers use numbers, strings, or anything else JSON can carry, so the
/// value is kept as raw JSON rather than forced into one type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TeamId(pub serde_json::Value);

impl TeamId {
    pub fn new(value: impl Into<serde_json::Value>) -> Self {
        Self(value.into())
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => write!(f, "{s}"),
            other => write!(f, "{other}"),
        }
    }
}

/// A candidate team with its skill requirements
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: TeamId,

    pub name: String,

    pub description: String,

    /// Skills the team is looking for, in the caller's original spelling.
    /// An empty list means the team never matches.
    pub required_skills: Vec<String>,
}

impl Team {
    pub fn new(
        id: impl Into<serde_json::Value>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: TeamId::new(id),
            name: name.into(),
            description: description.into(),
            required_skills: Vec::new(),
        }
    }

    /// Builder method to set required skills
    #[must_use]
    pub fn with_required_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_skills = skills.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn has_required_skills(&self) -> bool {
        !self.required_skills.is_empty()
    }
}
