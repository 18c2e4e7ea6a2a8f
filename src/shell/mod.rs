// Composition root.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate concrete store implementations.
// - Wire stores and the clock into use case handlers.
// - Assemble the router and serve it.

pub mod auth;
pub mod http;
pub mod state;
