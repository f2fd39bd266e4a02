// Composition root for the entries context.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the raw entry source and wire it into the use case handler.
// - Expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
