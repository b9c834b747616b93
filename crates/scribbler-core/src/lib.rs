//! Scribbler Core Types
//!
//! This crate provides the value types shared by every part of Scribbler,
//! the screenshot decoration toolkit. It includes:
//!
//! - **Colors**: RGBA colors and solid/gradient fills ([`color`] module)
//! - **Angles**: Rotation angles that remember their authored unit ([`angle::Angle`])
//! - **Alignment**: Horizontal and vertical placement ([`alignment`] module)
//! - **Scaling**: Image scaling policies ([`scaling::ImageScaling`])
//! - **Layout**: Caption/screenshot arrangements ([`layout::LayoutType`])
//! - **Geometry**: Points, sizes and rectangles ([`geometry`] module)
//!
//! Every type here is a plain value. Turning them into text and back is the
//! job of the `scribbler-parser` crate.

pub mod alignment;
pub mod angle;
pub mod color;
pub mod geometry;
pub mod layout;
pub mod scaling;
