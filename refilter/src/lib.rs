// refilter/src/lib.rs
//! # Refilter CLI Application
//!
//! This crate provides the command-line host for the refilter engine. It
//! stands in for the chat-pipeline glue in a deployment: it loads a filter
//! configuration, builds the [`refilter_core::RegexFilter`] facade, and
//! exposes the administrative surface (filter a stream, list active rules,
//! run ad-hoc test input).

pub mod cli;
pub mod commands;
pub mod logger;
