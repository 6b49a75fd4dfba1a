//! [`Storage`]-related implementations.

pub mod json_file;
pub mod memory;

use derive_more::{Display, Error as StdError, From};

pub use self::{json_file::JsonFile, memory::Memory};

/// Durable slot operation.
pub use common::Handler as Storage;

/// [`Storage`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// [`JsonFile`] error.
    JsonFile(json_file::Error),
}
