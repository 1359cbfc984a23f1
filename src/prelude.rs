//! Crate-local prelude (for alloc-dependent features like `Vec`)

pub use alloc::vec::Vec;
