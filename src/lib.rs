//! HavenHub Core Library
//!
//! Core functionality for HavenHub - finding nearby shelters, food banks,
//! and health resources. This crate owns the navigation controller that
//! decides which screen the app shows, routes the signed-in identity to the
//! right place at startup, and aggregates nearby-place searches. Rendering,
//! map tiles, and the auth backend live in the embedding app and are reached
//! through the traits in [`profile`] and [`search`].

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(unsafe_code)]

pub mod navigation;
pub mod profile;
pub mod search;

pub use navigation::{ControllerState, NavigationController, Screen};
