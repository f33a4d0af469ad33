//! Library store integration tests

mod scenarios;
mod workflow;
