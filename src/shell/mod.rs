// Composition root for the activities service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in memory repository and wire it into the use case handlers.
// - Expose the HTTP router (REST, GraphQL and static files) to the binary.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
