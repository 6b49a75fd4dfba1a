//! Infrastructure layer.

pub mod catalog;
pub mod gateway;
pub mod storage;

pub use self::{
    catalog::Catalog,
    gateway::{Gateway, Mock},
    storage::{JsonFile, Memory, Storage},
};
