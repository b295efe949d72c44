pub mod command;
pub mod op;
pub mod pass;
