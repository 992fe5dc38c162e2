//! Application services for the draw context.

pub mod command_handlers;
pub mod query_handlers;
