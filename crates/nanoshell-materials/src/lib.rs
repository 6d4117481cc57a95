//! # Nanoshell Materials
//!
//! Material records for the Nanoshell framework. All materials implement
//! the [`MaterialProvider`](provider::MaterialProvider) trait, which provides
//! frequency-dependent complex dielectric functions.
//!
//! ## Material kinds
//!
//! | Role | Module | Model |
//! |------|--------|-------|
//! | Core, host medium | [`dielectric`] | Constant real permittivity |
//! | Shell | [`drude`] | Lossy Drude metal |
//!
//! Named materials are collected in a [`library::MaterialLibrary`], which
//! ships with built-in entries and accepts user-defined ones.

pub mod dielectric;
pub mod drude;
pub mod library;
pub mod provider;

pub use dielectric::ConstantDielectric;
pub use drude::DrudeMaterial;
pub use library::MaterialLibrary;
pub use provider::{MaterialError, MaterialProvider};
