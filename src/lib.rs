//! File handles for a sandboxed process runner: creating, writing and disposing of the regular and
//! temporary files that get handed to a child process.
//!
//! # Purpose
//! A build rule that runs a binary usually needs a handful of scratch files around it: manifests,
//! argument files, captured output. Those files have to be created without clobbering anything,
//! written without losing errors, and removed afterwards no matter how the rule exits. This crate
//! provides exactly those pieces and nothing else:
//! - [`fs::path`]: syntactic path joining and random temporary names.
//! - [`fs::File`]: an owning file handle with explicit close.
//! - [`fs::TempFile`]: a file handle that deletes its file when closed or dropped.
//! - [`runner`]: the interface for handing those files to a child process.
//!
//! # Ownership
//! Every handle owns exactly one descriptor and is never [`Clone`]. Moving a handle moves the
//! descriptor. [`File::take`](fs::File::take) moves it out from behind a `&mut`, leaving an empty
//! handle that can be closed or dropped without effect. Dropping an open handle closes it (and
//! deletes a temporary file), but any error is only logged. Call `close` to see it.
//!
//! # Error Handling
//! Expected failures are returned as [`Result`]s with strongly typed errors: one struct per
//! condition, one enum per operation, all of which convert into [`fs::FsError`]. Misuse, such as
//! closing a handle twice or writing to a closed one, panics.
//!
//! # Dependencies
//! The [`fs`] module relies on `libc` for its thin syscall wrappers and on `rand` for temporary
//! names. Errors are derived with `derive_more`. Logging goes through `tracing`; this crate never
//! installs a subscriber.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "fs")]
pub mod fs;
#[cfg(feature = "runner")]
pub mod runner;

pub(crate) mod util;
