//! Core types: the router's error model and the landing page renderer.

pub mod error;
pub mod landing;
