//! Turns a CSV of Shulchan Aruch simanim into SQL inserts for subjects,
//! seifim, categories and tags.

pub mod batch;
pub mod error;
pub mod input;
pub mod parser;
pub mod settings;
pub mod sql;
pub mod stats;

pub use error::{Error, Result, RowError};
pub use input::InputRow;
pub use parser::{process_siman, Siman};
pub use settings::{Settings, Variant};
