//! NL-to-SQL MCP Library
//!
//! An MCP server exposing a natural-language-to-SQL tool grounded in table
//! schemas loaded from disk, plus small self-contained utilities (echo,
//! arithmetic, unit conversion, date formatting).
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use nlsql_mcp::{Config, NlSqlMcpServer, SchemaStore};
//!
//! let config = Config::load()?;
//! let schemas = SchemaStore::load(&config.schemas.dir);
//! let server = NlSqlMcpServer::new(&config, schemas);
//! // Use with in-memory transport or serve via stdio
//! ```
//!
//! # Configuration
//! Set `OPENAI_API_KEY` for the nl-to-sql tool and `NLSQL_SCHEMA_DIR` for
//! the schema directory, or configure in `~/.nlsql/config.toml`.

pub mod config;
pub mod init;
pub mod llm;
pub mod prompt;
pub mod response;
pub mod schema;
pub mod server;
pub mod tools;

// Re-export main server type
pub use server::NlSqlMcpServer;

// Re-export commonly used pieces for direct API usage
pub use config::Config;
pub use schema::SchemaStore;
pub use server::{CalculateParams, ConvertParams, EchoParams, FormatDateParams, NlToSqlParams};
