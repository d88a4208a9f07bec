//! Interactive question/answer gateway
//!
//! The module is structured in layers:
//! - `interface`: schemas, answers and the abstract gateway
//! - `schema`: the fixed schemas asked during setup
//! - `dialoguer`: terminal implementation using the dialoguer library
//! - `scripted`: implementation answering from a pre-recorded script

pub mod dialoguer;
pub mod interface;
pub mod schema;
pub mod scripted;

pub use interface::*;
pub use scripted::ScriptedGateway;

pub use self::dialoguer::DialoguerGateway;
