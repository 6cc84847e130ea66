//! NL-to-SQL MCP Server
//!
//! Converts natural language to SQL via a hosted completion model, grounded
//! in table schemas read from disk at startup.
//!
//! # Configuration
//! Set `OPENAI_API_KEY` and `NLSQL_SCHEMA_DIR` env vars or configure in
//! `~/.nlsql/config.toml`

use rmcp::{transport::stdio, ServiceExt};

mod config;
mod init;
mod llm;
mod prompt;
mod response;
mod schema;
mod server;
mod tools;

use config::Config;
use schema::SchemaStore;
use server::NlSqlMcpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init::init_tracing("nlsql_mcp")?;

    tracing::info!("Starting NL-to-SQL MCP Server");

    let config = Config::load()?;
    tracing::info!("Model: {}", config.model.name);

    let schemas = SchemaStore::load(&config.schemas.dir);
    tracing::info!(
        "Loaded {} table schema(s) from {:?}",
        schemas.len(),
        config.schemas.dir
    );

    let server = NlSqlMcpServer::new(&config, schemas);
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");
    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
