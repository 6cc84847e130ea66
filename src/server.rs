//! NL-to-SQL MCP server implementation

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::config::Config;
use crate::llm::{CompletionBackend, OpenAiBackend};
use crate::prompt::build_prompt;
use crate::response::{text_error, text_success};
use crate::schema::SchemaStore;
use crate::tools::{calc, convert, datetime};

type McpError = rmcp::ErrorData;

// ============================================================================
// Parameter Types
// ============================================================================

/// Parameters for the echo tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct EchoParams {
    /// Message to echo back
    pub message: String,
}

/// Parameters for the calculate tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CalculateParams {
    /// Arithmetic expression, e.g. "(2+3)*4"
    pub expression: String,
}

/// Parameters for the convert tool
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConvertParams {
    /// Numeric value to convert
    pub value: f64,
    /// Source unit (celsius, fahrenheit, kilometers, miles, kilograms, pounds)
    pub from_unit: String,
    /// Target unit
    pub to_unit: String,
}

/// Parameters for the format-date tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct FormatDateParams {
    /// Date to format, e.g. "2024-01-15T10:30:00". Defaults to now.
    pub date: Option<String>,
    /// Pattern using YYYY, MM, DD, HH, mm, ss tokens. Defaults to an ISO timestamp.
    pub format: Option<String>,
}

/// Parameters for the nl-to-sql tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct NlToSqlParams {
    /// Natural language description of the desired query
    pub query: String,
}

// ============================================================================
// Server Implementation
// ============================================================================

/// NL-to-SQL MCP Server
#[derive(Clone)]
pub struct NlSqlMcpServer {
    schemas: Arc<SchemaStore>,
    backend: Arc<dyn CompletionBackend>,
    strict_calc: bool,
    tool_router: ToolRouter<Self>,
}

impl NlSqlMcpServer {
    /// Create a server with the OpenAI-compatible backend from config
    pub fn new(config: &Config, schemas: SchemaStore) -> Self {
        let backend = Arc::new(OpenAiBackend::new(&config.model));
        Self::with_backend(config, schemas, backend)
    }

    /// Create a server with an explicit completion backend
    pub fn with_backend(
        config: &Config,
        schemas: SchemaStore,
        backend: Arc<dyn CompletionBackend>,
    ) -> Self {
        Self {
            schemas: Arc::new(schemas),
            backend,
            strict_calc: config.calculator.strict,
            tool_router: Self::tool_router(),
        }
    }
}

/// Strip markdown code fences models tend to wrap SQL in.
fn extract_sql(raw: &str) -> String {
    let trimmed = raw.trim();
    let inner = if let Some(rest) = trimmed.strip_prefix("```sql") {
        rest
    } else if let Some(rest) = trimmed.strip_prefix("```") {
        rest
    } else {
        trimmed
    };
    inner.strip_suffix("```").unwrap_or(inner).trim().to_string()
}

#[tool_router]
impl NlSqlMcpServer {
    /// Echo a message back
    #[tool(description = "Echo a message back to the caller.")]
    async fn echo(
        &self,
        Parameters(params): Parameters<EchoParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(text_success(format!("Echo: {}", params.message)))
    }

    /// Evaluate an arithmetic expression
    #[tool(
        description = "Evaluate an arithmetic expression with +, -, *, / and parentheses. Returns the numeric result."
    )]
    async fn calculate(
        &self,
        Parameters(params): Parameters<CalculateParams>,
    ) -> Result<CallToolResult, McpError> {
        match calc::evaluate(&params.expression, self.strict_calc) {
            Ok(value) => Ok(text_success(calc::format_result(value))),
            Err(e) => Ok(text_error(format!("Error: {}", e))),
        }
    }

    /// Convert a value between units
    #[tool(
        description = "Convert a value between units. Supported pairs: celsius/fahrenheit, kilometers/miles, kilograms/pounds."
    )]
    async fn convert(
        &self,
        Parameters(params): Parameters<ConvertParams>,
    ) -> Result<CallToolResult, McpError> {
        match convert::convert(params.value, &params.from_unit, &params.to_unit) {
            Ok(text) => Ok(text_success(text)),
            Err(e) => Ok(text_error(format!("Error: {}", e))),
        }
    }

    /// Format a date with an optional token pattern
    #[tool(
        name = "format-date",
        description = "Format a date. Accepts an optional date string (defaults to now) and an optional pattern with YYYY, MM, DD, HH, mm, ss tokens."
    )]
    async fn format_date(
        &self,
        Parameters(params): Parameters<FormatDateParams>,
    ) -> Result<CallToolResult, McpError> {
        match datetime::format_date(params.date.as_deref(), params.format.as_deref()) {
            Ok(text) => Ok(text_success(text)),
            Err(e) => Ok(text_error(format!("Error: {}", e))),
        }
    }

    /// Convert a natural language query to SQL via the completion model
    #[tool(
        name = "nl-to-sql",
        description = "Convert a natural language query into a SQL statement grounded in the loaded table schemas."
    )]
    async fn nl_to_sql(
        &self,
        Parameters(params): Parameters<NlToSqlParams>,
    ) -> Result<CallToolResult, McpError> {
        // Both precondition failures are reported without touching the
        // remote endpoint.
        if self.schemas.is_empty() {
            return Ok(text_error(
                "Error: no table schemas are loaded; cannot ground the query",
            ));
        }
        if !self.backend.is_available() {
            return Ok(text_error(format!(
                "Error: no API credential configured; set the {} environment variable",
                self.backend.credential_env()
            )));
        }

        let prompt = build_prompt(&self.schemas, &params.query);
        tracing::debug!(
            "Sending prompt for {} schema(s) to {}",
            self.schemas.len(),
            self.backend.name()
        );

        match self.backend.complete(&prompt).await {
            Ok(raw) => Ok(text_success(extract_sql(&raw))),
            Err(e) => {
                tracing::warn!("SQL generation failed: {}", e);
                Ok(text_error(format!("Error: SQL generation failed: {}", e)))
            }
        }
    }
}

#[tool_handler]
impl rmcp::ServerHandler for NlSqlMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(format!(
                "Natural-language-to-SQL MCP server with {} table schema(s) loaded. \
                Use nl-to-sql to generate SQL from plain English, calculate for \
                arithmetic, convert for unit conversion, format-date for date \
                formatting, and echo for connectivity checks.",
                self.schemas.len()
            )),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
