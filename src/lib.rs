//! Backend service for ESL speaking practice.
//!
//! Three capabilities, each a single schema-constrained call to the OpenAI
//! API: generate a practice scenario, transcribe learner audio, and evaluate
//! a transcribed response against its scenario.

pub mod agent;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
