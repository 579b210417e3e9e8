//! # csvpick
//!
//! A small interactive CSV tool: load a file, list its columns, optionally
//! keep only the rows where one column equals a value, and export the
//! result as CSV or pretty-printed JSON under `outputs/`.
//!
//! ## Pipeline
//!
//! ```text
//! argv ──▶ cli ──▶ InvocationConfig
//! file ──▶ loader ──▶ record ──▶ filter ──▶ serialize ──▶ sink ──▶ outputs/output_<ts>.<ext>
//!                                  ▲                           └──▶ stdout (--print)
//!                                stdin
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`cli`] | Argument capture and prefix-matched flags |
//! | [`config`] | Optional `csvpick.toml` settings |
//! | [`error`] | User-facing error kinds and messages |
//! | [`loader`] | CSV ingestion |
//! | [`record`] | Header and keyed records |
//! | [`filter`] | Filter prompt and record selection |
//! | [`serialize`] | CSV / JSON encoding |
//! | [`sink`] | Timestamped output files |
//! | [`app`] | The interactive driver |

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod record;
pub mod serialize;
pub mod sink;
