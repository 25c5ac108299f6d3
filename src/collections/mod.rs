pub mod container_common;
pub mod linked;

pub use container_common::ContainerCommon;
pub use linked::{Queue, Stack};
