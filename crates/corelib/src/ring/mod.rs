//! Token ring geometry.
//!
//! The ring turns the tokens announced by cluster metadata into the ranges
//! between them, and finds the range owning a given token.

pub mod ring;

pub use ring::TokenRing;
