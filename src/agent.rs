use std::fmt;

use serde::{Serialize, Deserialize};

#[derive(Debug, thiserror::Error)]
#[error("Unknown agent identifier: {0}")]
pub struct UnknownAgent(pub String);

/// Agents known to the orchestrator. Every tool namespace belongs to exactly one.
///
/// Serialized as the identifier returned by [`AgentType::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum AgentType {
    Human,
    Hr,
    Marketing,
    Procurement,
    Product,
    Generic,
    TechSupport,
    EmailSupport,
    GroupChatManager,
    Planner,
}

impl AgentType {
    pub const ALL: [AgentType; 10] = [
        AgentType::Human,
        AgentType::Hr,
        AgentType::Marketing,
        AgentType::Procurement,
        AgentType::Product,
        AgentType::Generic,
        AgentType::TechSupport,
        AgentType::EmailSupport,
        AgentType::GroupChatManager,
        AgentType::Planner,
    ];

    /// Identifier used in the catalog's `agent` field.
    pub const fn as_str(&self) -> &'static str {
        match self {
            AgentType::Human => "Human_Agent",
            AgentType::Hr => "Hr_Agent",
            AgentType::Marketing => "Marketing_Agent",
            AgentType::Procurement => "Procurement_Agent",
            AgentType::Product => "Product_Agent",
            AgentType::Generic => "Generic_Agent",
            AgentType::TechSupport => "Tech_Support_Agent",
            AgentType::EmailSupport => "Email_Support_Agent",
            AgentType::GroupChatManager => "Group_Chat_Manager",
            AgentType::Planner => "Planner_Agent",
        }
    }
}

impl From<AgentType> for &'static str {
    fn from(agent: AgentType) -> Self {
        agent.as_str()
    }
}

impl TryFrom<String> for AgentType {
    type Error = UnknownAgent;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::str::FromStr for AgentType {
    type Err = UnknownAgent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentType::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownAgent(s.to_string()))
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_name_matches_identifier() {
        for agent in AgentType::ALL {
            let encoded = serde_json::to_string(&agent).unwrap();
            assert_eq!(encoded, format!("\"{}\"", agent.as_str()));
            let decoded: AgentType = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, agent);
        }
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        assert!(serde_json::from_str::<AgentType>("\"Email_Agent\"").is_err());
        let err = "Email_Agent".parse::<AgentType>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown agent identifier: Email_Agent");
    }
}
