//! Application ports

pub mod registry;
