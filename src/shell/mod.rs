// Composition root for the activities bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory roster and wire it into the use case handlers.
// - Expose the HTTP router and GraphQL schema.

pub mod config;
pub mod errors;
pub mod graphql;
pub mod http;
pub mod state;
