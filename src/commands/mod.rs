//! Command implementations for the FPL last-man-standing helper

pub mod common;
pub mod suggest;
