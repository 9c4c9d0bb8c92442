// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`grid`] - Catalog grid of product summary cards
//! - [`detail`] - Single product page with photo gallery and lightbox
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (image slots)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering (visual primitives)
//! - [`notifications`] - Toast notification system for user feedback

pub mod components;
pub mod design_tokens;
pub mod detail;
pub mod grid;
pub mod icons;
pub mod notifications;
pub mod styles;
pub mod theming;
