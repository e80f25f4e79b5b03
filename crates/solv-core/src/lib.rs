//! # SolvSieve Core Library
//!
//! A library for curating experimental solvation free-energy data sets by
//! functional group and staging molecular-simulation estimation requests
//! against a SMIRNOFF force field.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict layered architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models
//!   (`Substance`, `PhysicalProperty`, `PhysicalPropertyDataSet`), chemistry
//!   primitives (SMILES parsing, the molecular graph, functional-group
//!   matching), and I/O utilities.
//!
//! - **[`curation`]: The Logic Core.** Deduplicates substances, buckets parsed
//!   structures into functional-group categories, re-assembles per-category
//!   SMILES lists, and filters data sets. All of it is single-pass, in-memory,
//!   and best-effort: malformed identifiers are absorbed, never fatal.
//!
//! - **[`estimation`]: The Collaborator Seam.** Data types describing an
//!   estimation request (force-field source, request options, connection
//!   options) and the client trait behind which the external estimation
//!   server lives. The scheduler and wire protocol are not part of this crate.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing
//!   layer. It ties the lower layers together to execute the complete
//!   pipeline: load, classify, filter, stage, submit.

pub mod core;
pub mod curation;
pub mod estimation;
pub mod workflows;
