#![doc = include_str!("../README.md")]
#![warn(missing_debug_implementations, missing_docs, rustdoc::all)]
#![deny(unused_must_use, rust_2018_idioms)]

/// Registry of static contract metadata loaded from the bundled JSON
/// data files.
pub mod registry;
pub use registry::{ContractRegistry, EthereumContract, RegistryError};

/// Well-known contract and ABI constants resolved through the shared
/// registry.
pub mod contracts;
pub use contracts::*;
