//! dpc facade crate.
//!
//! Typed builders for datapack script lines. Each command is plain data that
//! renders itself into one line of `.mcfunction` text; a `Script` collects
//! commands and renders them in order.
//!
//! ```
//! use dpc::prelude::*;
//!
//! let mut script = Script::new("demo:init".parse().unwrap());
//! script.push(Say::new("hello").unwrap());
//! script.push(Function::new("./setup").unwrap());
//!
//! let text = script.render_with(&ConfigModel::default()).unwrap();
//! assert!(text.ends_with("say hello\nfunction demo:setup"));
//! ```

// -----------------------------------------------------------------------------
// Sub-crates
// -----------------------------------------------------------------------------
pub use dpc_types as types;
pub use dpc_utils as utils;

// -----------------------------------------------------------------------------
// Re-exports
// -----------------------------------------------------------------------------
pub use dpc_core::{Error, ErrorClass, command, config, init_config, log, script};

// -----------------------------------------------------------------------------
// Constants
// -----------------------------------------------------------------------------

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// -----------------------------------------------------------------------------
// Prelude
// -----------------------------------------------------------------------------

///
/// Everything needed to write scripts: the command family, the script type,
/// config and the argument types.
///

pub mod prelude {
    pub use crate::{
        command::*,
        config::{Config, ConfigModel},
        script::{Script, ScriptRef},
        types::*,
    };
}
