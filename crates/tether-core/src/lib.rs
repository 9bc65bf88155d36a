//! Tether Core Types and Definitions
//!
//! This crate provides the foundational types used by the Tether graph layout
//! engine. It includes:
//!
//! - **Values**: The [`value::LinearValue`] element algebra
//! - **Matrices**: Dense row-major matrices and their position cursor ([`matrix`] module)
//! - **Geometry**: Points, sizes and bounds ([`geometry`] module)
//! - **Colors**: CSS color handling for rendering ([`color::Color`])

pub mod color;
pub mod geometry;
pub mod matrix;
pub mod value;
