//! Linear GraphQL dispatch layer
//!
//! Client, transport seam, and error types for the single
//! `POST /graphql` endpoint every Linear operation goes through.

pub mod client;
pub mod error;
pub mod transport;

pub use client::LinearClient;
pub use error::{ApiError, LinearError, LinearResult};
pub use transport::{GraphqlTransport, HttpTransport};
