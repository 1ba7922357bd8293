//! # HAL Sample App Library
//!
//! This library exposes the modules of the sample catalog API for integration testing.

pub mod error;
pub mod lifecycle;
pub mod model;
pub mod registry;
pub mod urls;
pub mod views;
