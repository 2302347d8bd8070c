//! mudctl - a lifecycle CLI for a containerized MUD manager service
//!
//! mudctl is a single-binary tool that manages a MUD (Manufacturer Usage
//! Description) manager service running as a Docker container: pulling the
//! image, starting and stopping the container, following its logs, querying
//! its network address, and maintaining the host-side MUD profile cache
//! directory that is mounted into it.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, dispatches to handlers)
//! - [`core`] - Domain types, configuration schema, and the resolved service config
//! - [`docker`] - Single interface for all container runtime delegation
//! - [`cache`] - Host cache-directory operations and their advisory lock
//! - [`ui`] - Output formatting utilities
//!
//! # Correctness Invariants
//!
//! mudctl maintains the following invariants:
//!
//! 1. The service configuration is resolved once per invocation and is
//!    immutable afterwards
//! 2. Every external mutation is a single delegated command; nothing is
//!    caught or retried, and the first failure aborts the invocation
//! 3. Cache-directory mutations are serialized through an advisory file lock
//! 4. Invalid images, tags, and container names cannot be represented

pub mod cache;
pub mod cli;
pub mod core;
pub mod docker;
pub mod ui;
