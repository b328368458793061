use glam::{Mat4, Vec2};

use crate::config::ViewportMargins;
use crate::geometry::Aabb;

/// Orthographic projection of the current viewport rectangle, uploaded to
/// the GPU (column-major, matching WGSL `mat4x4<f32>`).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

/// The visible world rectangle, as published to the renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ViewportRect {
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
    pub top: i32,
}

impl ViewportRect {
    /// Maps `[left..right] × [bottom..top]` (y-up world pixels) to clip space.
    pub fn view_proj(&self) -> CameraUniform {
        let proj = Mat4::orthographic_rh(
            self.left as f32,
            self.right as f32,
            self.bottom as f32,
            self.top as f32,
            -1.0,
            1.0,
        );
        CameraUniform { view_proj: proj.to_cols_array_2d() }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.top - self.bottom
    }
}

/// World-space offset of the camera's bottom-left corner.
///
/// Stored as integers: the renderer aligns to the pixel grid, so a
/// fractional camera offset is never published.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewportState {
    pub view_left: i32,
    pub view_bottom: i32,
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.view_left = 0;
        self.view_bottom = 0;
    }

    /// Scroll so the player box stays at least `margins` away from each
    /// screen edge. Returns true if any edge rule moved the camera.
    ///
    /// The four rules run in order (left, right, top, bottom) and each sees
    /// the offsets left by the previous one. When the camera moved, both
    /// offsets are truncated toward zero.
    pub fn follow(&mut self, player: &Aabb, margins: &ViewportMargins, screen: Vec2) -> bool {
        let mut view_left = self.view_left as f32;
        let mut view_bottom = self.view_bottom as f32;
        let mut changed = false;

        let left_boundary = view_left + margins.left;
        if player.left < left_boundary {
            view_left -= left_boundary - player.left;
            changed = true;
        }

        let right_boundary = view_left + screen.x - margins.right;
        if player.right > right_boundary {
            view_left += player.right - right_boundary;
            changed = true;
        }

        let top_boundary = view_bottom + screen.y - margins.top;
        if player.top > top_boundary {
            view_bottom += player.top - top_boundary;
            changed = true;
        }

        let bottom_boundary = view_bottom + margins.bottom;
        if player.bottom < bottom_boundary {
            view_bottom -= bottom_boundary - player.bottom;
            changed = true;
        }

        if changed {
            self.view_left = view_left as i32;
            self.view_bottom = view_bottom as i32;
        }
        changed
    }

    pub fn rect(&self, screen_width: u32, screen_height: u32) -> ViewportRect {
        ViewportRect {
            left: self.view_left,
            right: self.view_left + screen_width as i32,
            bottom: self.view_bottom,
            top: self.view_bottom + screen_height as i32,
        }
    }
}
