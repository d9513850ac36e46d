//! Domain-level frontend features and their shared logic. Components import
//! these modules to keep view code focused while auth handling stays in one
//! feature area.

pub(crate) mod auth;
