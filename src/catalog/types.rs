use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::agent::AgentType;
use crate::error::Result;
use crate::tools::schema::{ArgSchema, ArgType};
use crate::tools::traits::Tool;
use super::encoding::{to_indented_string, to_spaced_string};

/// Catalog view of one tool. Built once from a tagged member and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub arguments: Vec<ArgSchema>,
    pub agent: AgentType,
}

impl ToolDefinition {
    pub fn from_tool(agent: AgentType, name: impl Into<String>, tool: &dyn Tool) -> Self {
        Self {
            name: name.into(),
            description: tool.description().to_string(),
            arguments: tool.args(),
            agent,
        }
    }

    /// The `arguments` field as the planner reads it: a JSON object keyed by
    /// parameter name, single-quoted.
    pub fn encoded_arguments(&self) -> Result<String> {
        let doc = to_spaced_string(&ArgumentsDoc(&self.arguments))?;
        Ok(doc.replace('"', "'"))
    }

    pub fn to_entry(&self) -> Result<CatalogEntry> {
        Ok(CatalogEntry {
            agent: self.agent.as_str().to_string(),
            function: self.name.clone(),
            description: self.description.clone(),
            arguments: self.encoded_arguments()?,
        })
    }
}

/// One record of the serialized catalog.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CatalogEntry {
    pub agent: String,
    pub function: String,
    pub description: String,
    pub arguments: String,
}

/// Ordered tool definitions for one namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolCatalog {
    pub definitions: Vec<ToolDefinition>,
}

impl ToolCatalog {
    pub fn entries(&self) -> Result<Vec<CatalogEntry>> {
        self.definitions.iter().map(ToolDefinition::to_entry).collect()
    }

    pub fn to_json(&self, indent: usize) -> Result<String> {
        to_indented_string(&self.entries()?, indent)
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }
}

struct ArgumentsDoc<'a>(&'a [ArgSchema]);

impl Serialize for ArgumentsDoc<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for arg in self.0 {
            map.serialize_entry(&arg.name, &ArgumentRecord {
                description: &arg.description,
                title: &arg.title,
                arg_type: arg.arg_type,
            })?;
        }
        map.end()
    }
}

#[derive(serde::Serialize)]
struct ArgumentRecord<'a> {
    description: &'a str,
    title: &'a str,
    #[serde(rename = "type")]
    arg_type: ArgType,
}
