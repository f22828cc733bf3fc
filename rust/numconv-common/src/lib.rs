//! Core definitions shared by the numconv crates: the error taxonomy, the
//! `Result` alias and the precondition checks the conversion engine relies on.

#![no_std]

pub mod error;
pub mod result;

pub use result::Result;
