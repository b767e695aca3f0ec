//! Parameter types for Linear MCP tools
//!
//! Organized by domain: issue, comment, project, cycle, team, user,
//! label, search, attachment, compound

mod attachment;
mod comment;
mod compound;
mod cycle;
mod issue;
mod label;
mod project;
mod search;
mod team;
mod user;

pub use attachment::*;
pub use comment::*;
pub use compound::*;
pub use cycle::*;
pub use issue::*;
pub use label::*;
pub use project::*;
pub use search::*;
pub use team::*;
pub use user::*;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Empty parameters for tools that take no arguments
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EmptyParams {}
