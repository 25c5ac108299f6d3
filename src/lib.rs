//! Singly linked FIFO [`Queue`](collections::Queue) and LIFO
//! [`Stack`](collections::Stack).

#[cfg(feature = "collections")]
pub mod collections;
