//! Singly linked containers.
//!
//! Both containers own their nodes outright and hand values back by move on
//! removal. Neither caps its length.

pub mod queue;
pub mod stack;

pub use queue::Queue;
pub use stack::Stack;
