//! # Pagewright Tokens
//!
//! Derives a complete design-token set (colors, type scale, spacing, radii,
//! shadows) from a sparse or empty [`TokenInput`].
//!
//! [`resolve`] is a pure function: no I/O, no randomness. The resulting
//! [`DesignTokens`] are immutable and safe to share across concurrent runs.

pub mod color;
pub mod industry;
pub mod input;
pub mod preset;
pub mod resolve;

pub use color::{adjust_color, darken, lighten};
pub use industry::{Palette, detect_industry};
pub use input::{TokenFamily, TokenInput};
pub use preset::VisualStyle;
pub use resolve::{
    Borders, ButtonType, Colors, Corners, DesignTokens, IconScale, Motion, Shadows, Sides,
    Spacing, TypeScale, Typography, Weights, resolve,
};
