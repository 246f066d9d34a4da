use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::constants::{AGENT_INSTRUCTIONS, AGENT_NAME};
use crate::tools::{weather_tools, FunctionTool, ToolDeclaration};

// ============================================================================
// Chat Client Boundary
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A model's request to run one tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    pub arguments: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChatReply {
    Text(String),
    ToolCalls(Vec<ToolCall>),
}

/// One round-trip's worth of input for a [`ChatClient`]
#[derive(Debug)]
pub struct ChatRequest<'a> {
    pub instructions: &'a str,
    pub messages: &'a [ChatMessage],
    pub tools: Vec<&'a ToolDeclaration>,
}

/// Whatever talks to the model
///
/// Implementations own transport, authentication and model selection; the
/// agent only hands over its instructions, the conversation and the tools it
/// can run.
pub trait ChatClient: Send + Sync {
    fn send(&self, request: &ChatRequest<'_>) -> Result<ChatReply>;
}

// ============================================================================
// Agent
// ============================================================================

pub struct AgentOptions {
    pub name: String,
    pub instructions: String,
    pub client: Arc<dyn ChatClient>,
    pub tools: Vec<FunctionTool>,
}

/// A configured chat agent: instructions, a client and the tools it exposes
pub struct ChatAgent {
    name: String,
    instructions: String,
    client: Arc<dyn ChatClient>,
    tools: Vec<FunctionTool>,
}

impl ChatAgent {
    pub fn new(options: AgentOptions) -> Result<Self> {
        if options.name.trim().is_empty() {
            bail!("Agent name must not be empty");
        }

        let mut seen = HashSet::new();
        for tool in &options.tools {
            if !seen.insert(tool.name()) {
                bail!(
                    "Tool {} is registered more than once on agent {}",
                    tool.name(),
                    options.name
                );
            }
        }

        Ok(Self {
            name: options.name,
            instructions: options.instructions,
            client: options.client,
            tools: options.tools,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn client(&self) -> &Arc<dyn ChatClient> {
        &self.client
    }

    pub fn tools(&self) -> &[FunctionTool] {
        &self.tools
    }

    pub fn tool(&self, name: &str) -> Option<&FunctionTool> {
        self.tools.iter().find(|tool| tool.name() == name)
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(FunctionTool::name).collect()
    }

    pub fn declarations(&self) -> Vec<&ToolDeclaration> {
        self.tools.iter().map(FunctionTool::declaration).collect()
    }

    /// Forwards the conversation to the client once, with this agent's
    /// instructions and tool declarations attached
    pub fn send(&self, messages: &[ChatMessage]) -> Result<ChatReply> {
        let request = ChatRequest {
            instructions: &self.instructions,
            messages,
            tools: self.declarations(),
        };
        self.client
            .send(&request)
            .with_context(|| format!("Chat client failed for agent {}", self.name))
    }

    /// Runs a tool the model asked for
    pub fn call_tool(&self, call: &ToolCall) -> Result<Value> {
        let Some(tool) = self.tool(&call.name) else {
            bail!("Agent {} has no tool named {}", self.name, call.name);
        };
        tool.invoke(call.arguments.clone())
    }
}

impl fmt::Debug for ChatAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatAgent")
            .field("name", &self.name)
            .field("instructions", &self.instructions)
            .field("tools", &self.tool_names())
            .finish_non_exhaustive()
    }
}

/// Creates the weather agent with the `get_weather` and `get_forecast` tools
pub fn weather_agent<C>(client: Arc<C>) -> Result<ChatAgent>
where
    C: ChatClient + 'static,
{
    tracing::info!("[weather_agent] Creating weather agent");
    tracing::debug!(
        "[weather_agent] Chat client type: {}",
        std::any::type_name::<C>()
    );

    let tools = weather_tools();
    tracing::debug!(
        "[weather_agent] Available tools: {:?}",
        tools.iter().map(FunctionTool::name).collect::<Vec<_>>()
    );

    let agent = ChatAgent::new(AgentOptions {
        name: AGENT_NAME.to_string(),
        instructions: AGENT_INSTRUCTIONS.to_string(),
        client,
        tools,
    })?;

    tracing::info!("[weather_agent] Weather agent created successfully");
    Ok(agent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    /// Replies with a canned answer and remembers what it was asked
    #[derive(Default)]
    struct StubClient {
        seen_tools: Mutex<Vec<String>>,
    }

    impl ChatClient for StubClient {
        fn send(&self, request: &ChatRequest<'_>) -> Result<ChatReply> {
            *self.seen_tools.lock().unwrap() =
                request.tools.iter().map(|t| t.name.clone()).collect();
            Ok(ChatReply::ToolCalls(vec![ToolCall {
                name: "get_weather".to_string(),
                arguments: json!({ "location": request.messages[0].content }),
            }]))
        }
    }

    struct FailingClient;

    impl ChatClient for FailingClient {
        fn send(&self, _request: &ChatRequest<'_>) -> Result<ChatReply> {
            bail!("connection refused")
        }
    }

    #[test]
    fn weather_agent_has_name_and_both_tools() {
        let agent = weather_agent(Arc::new(StubClient::default())).unwrap();
        assert_eq!(agent.name(), "weather_agent");
        let mut names = agent.tool_names();
        names.sort_unstable();
        assert_eq!(names, vec!["get_forecast", "get_weather"]);
        assert!(agent.instructions().contains("get_weather and get_forecast"));
    }

    #[test]
    fn send_forwards_declarations_to_client() {
        let client = Arc::new(StubClient::default());
        let agent = weather_agent(client.clone()).unwrap();
        let reply = agent.send(&[ChatMessage::user("Chicago")]).unwrap();

        assert_eq!(
            *client.seen_tools.lock().unwrap(),
            vec!["get_weather".to_string(), "get_forecast".to_string()]
        );
        let ChatReply::ToolCalls(calls) = reply else {
            panic!("expected tool calls");
        };
        let result = agent.call_tool(&calls[0]).unwrap();
        assert_eq!(result["conditions"], "windy");
    }

    #[test]
    fn client_errors_propagate() {
        let agent = weather_agent(Arc::new(FailingClient)).unwrap();
        let err = agent.send(&[ChatMessage::user("hi")]).unwrap_err();
        assert!(format!("{:#}", err).contains("connection refused"));
    }

    #[test]
    fn unknown_tool_call_is_an_error() {
        let agent = weather_agent(Arc::new(FailingClient)).unwrap();
        let call = ToolCall {
            name: "get_alerts".to_string(),
            arguments: json!({}),
        };
        assert!(agent.call_tool(&call).is_err());
    }

    #[test]
    fn constructor_rejects_duplicate_tools() {
        let result = ChatAgent::new(AgentOptions {
            name: "twice".to_string(),
            instructions: String::new(),
            client: Arc::new(FailingClient),
            tools: vec![
                crate::tools::get_weather_tool(),
                crate::tools::get_weather_tool(),
            ],
        });
        assert!(result.is_err());
    }

    #[test]
    fn constructor_rejects_empty_name() {
        let result = ChatAgent::new(AgentOptions {
            name: "  ".to_string(),
            instructions: String::new(),
            client: Arc::new(FailingClient),
            tools: Vec::new(),
        });
        assert!(result.is_err());
    }
}
