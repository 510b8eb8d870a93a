//! ormgen library - ORM schema relationship resolver
//!
//! Loads annotated message descriptors, registers the types marked for
//! persistence, maps their fields to native types and resolves associations
//! (foreign keys, back-references and join tables) into a schema an emitter
//! can render.

pub mod cli;
pub mod commands;
pub mod config;
pub mod descriptor;
pub mod diagnostics;
pub mod error;
pub mod inflection;
pub mod mapping;
pub mod output;
pub mod resolve;
pub mod schema;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod fixtures;

#[cfg(test)]
pub mod test_utils;
