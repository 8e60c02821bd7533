//! Default value functions for configuration and grid state.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes and by the
//! `Default` impls.

pub fn columns_count() -> u32 {
    3
}

pub fn rows_count() -> u32 {
    2
}

pub fn viewport_width() -> f32 {
    1920.0
}

pub fn viewport_height() -> f32 {
    1080.0
}
