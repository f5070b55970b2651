//! Santa's Letter Sorter (workspace facade crate).
//!
//! The game logic, input mapping, rendering and persistence live in dedicated
//! crates under `crates/`; this package re-exports them as
//! `santa_sorter::{core,input,store,term,types}` and adds the process-level
//! pieces the binaries share: environment configuration, log setup and
//! event dispatch.

pub use santa_sorter_core as core;
pub use santa_sorter_input as input;
pub use santa_sorter_store as store;
pub use santa_sorter_term as term;
pub use santa_sorter_types as types;

pub mod config;
pub mod logging;
pub mod session;

pub use config::SorterConfig;
