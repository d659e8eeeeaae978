//! Prom Builder: Prometheus configuration assembly
//!
//! Builds the runtime configuration of a monitoring daemon from a base file
//! and an ordered population of fragments, then resolves `${NAME}` and
//! `${NAME:default}` placeholders from the environment. Runs once as a
//! pre-start step.

pub mod cli;
pub mod document;
pub mod environment;
pub mod error;
pub mod fragment;
pub mod logging;
pub mod merge;
pub mod pipeline;
pub mod population;
pub mod settings;
pub mod substitute;
pub mod writer;
