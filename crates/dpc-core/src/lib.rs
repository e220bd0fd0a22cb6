//! Core dpc library: the command family and the script that renders it.
//!
//! Most users should depend on the `dpc` facade crate, which re-exports this
//! crate together with the argument types and a prelude.
//!
//! ## Layout
//!
//! - `command/` holds one module per command grammar rule. Every variant
//!   implements `Construct` and is collected into the closed `CommandKind` enum.
//! - `script` is the in-memory owner of a list of commands. Rendering hands
//!   each command its line index and a `ScriptRef` before constructing it.
//! - `config` is the `dpc.toml` model (pack identity, dev builds, logging).
//! - `log` provides the `log!` macro used across the crate.

pub mod command;
pub mod config;
pub mod error;
pub mod log;
pub mod script;

pub use {::dpc_types as types, ::dpc_utils as utils};

pub use error::{Error, ErrorClass};

///
/// Crate Version
///

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// init and validate config
pub fn init_config(toml: &str) -> Result<(), Error> {
    config::Config::init_from_toml(toml).map_err(Error::from)
}
