use std::sync::Arc;

use crate::agent::AgentType;
use super::traits::Tool;

/// A named callable inside a [`Namespace`].
#[derive(Clone)]
pub struct Member {
    pub name: String,
    pub handler: Arc<dyn Tool>,
}

impl std::fmt::Debug for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("tagged", &self.handler.tag().is_some())
            .finish()
    }
}

/// Statically declared table of callables owned by one agent.
///
/// Members keep declaration order. Registering a name twice replaces the
/// earlier member in place.
#[derive(Debug, Clone)]
pub struct Namespace {
    name: String,
    agent: AgentType,
    members: Vec<Member>,
}

impl Namespace {
    pub fn new(name: impl Into<String>, agent: AgentType) -> Self {
        Self {
            name: name.into(),
            agent,
            members: Vec::new(),
        }
    }

    /// Add a tool under its own name. Returns self for chaining.
    pub fn with_tool(self, tool: impl Tool + 'static) -> Self {
        let tool: Arc<dyn Tool> = Arc::new(tool);
        let name = tool.name().to_string();
        self.with_member(name, tool)
    }

    /// Add a callable under an explicit member name.
    pub fn with_member(mut self, name: impl Into<String>, handler: Arc<dyn Tool>) -> Self {
        let member = Member { name: name.into(), handler };
        match self.members.iter_mut().find(|m| m.name == member.name) {
            Some(existing) => *existing = member,
            None => self.members.push(member),
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn agent(&self) -> AgentType {
        self.agent
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }
}
