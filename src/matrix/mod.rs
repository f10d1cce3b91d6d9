//! Matrix addressing and reference implementations.
//!
//! `layout` is the addressing shared by packing and compute. The reference
//! multiply is the correctness baseline for the blocked path, and
//! `transpose` lays operands out densely for it.

pub mod layout;
pub mod reference;
pub mod transpose;
