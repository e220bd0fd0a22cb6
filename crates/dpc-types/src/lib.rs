//! Value types used as command arguments.
//! Every type renders its command-line form through `Display`, so commands
//! can format them directly.

mod block;
mod error;
mod location;
mod position;
mod selector;
mod text;
mod uuid;

pub use block::*;
pub use error::*;
pub use location::*;
pub use position::*;
pub use selector::*;
pub use text::*;
pub use uuid::*;
