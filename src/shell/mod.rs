// Composition root for the activities service.
//
// Responsibilities
// - Read config from the environment.
// - Wire the in memory store into the use case handlers.
// - Expose the HTTP and GraphQL routers.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
