//! A collection of components for magbranch.
//!
//! Each component is a pure implementation of [`magbranch_core::Component`]:
//! deterministic, free of I/O, and safe to call from any request context.

pub mod electrical;
