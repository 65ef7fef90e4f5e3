//! World bounds and map → world coordinate conversion.
//!
//! Maps are authored y-down with the origin at the top-left corner.  The
//! world keeps that origin but flips y, so the scaled map occupies
//! `x ∈ [0, width]`, `y ∈ [-height, 0]`.

use bevy::prelude::*;

use super::data::LevelData;

/// Extent of the scaled map in world units.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct LevelBounds {
    /// Scaled map size (world units).
    pub size: Vec2,
    /// Factor applied to raw map coordinates.
    pub scale: f32,
}

impl Default for LevelBounds {
    fn default() -> Self {
        Self {
            size: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl LevelBounds {
    pub fn from_level(level: &LevelData, scale: f32) -> Self {
        Self {
            size: level.pixel_size() * scale,
            scale,
        }
    }

    /// Raw map pixel position → world position (scaled, y flipped).
    #[inline]
    pub fn map_to_world(&self, raw: Vec2) -> Vec2 {
        Vec2::new(raw.x * self.scale, -raw.y * self.scale)
    }

    /// Already-scaled screen position (y down) → world position.
    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(screen.x, -screen.y)
    }

    /// World-space centre of the map.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.size.x * 0.5, -self.size.y * 0.5)
    }

    /// Clamp a camera target so a view of `view` size stays inside the bounds.
    ///
    /// On an axis where the map is smaller than the view, the camera is
    /// centred on the map instead.
    pub fn clamp_camera(&self, target: Vec2, view: Vec2) -> Vec2 {
        let half = view * 0.5;
        let center = self.center();

        let x = if self.size.x <= view.x {
            center.x
        } else {
            target.x.clamp(half.x, self.size.x - half.x)
        };
        let y = if self.size.y <= view.y {
            center.y
        } else {
            target.y.clamp(-self.size.y + half.y, -half.y)
        };
        Vec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(w: f32, h: f32) -> LevelBounds {
        LevelBounds {
            size: Vec2::new(w, h),
            scale: 2.0,
        }
    }

    #[test]
    fn map_positions_are_scaled_and_flipped() {
        let b = bounds(100.0, 100.0);
        assert_eq!(b.map_to_world(Vec2::new(10.0, 20.0)), Vec2::new(20.0, -40.0));
        assert_eq!(b.screen_to_world(Vec2::new(200.0, 60.0)), Vec2::new(200.0, -60.0));
    }

    #[test]
    fn camera_stays_inside_large_map() {
        let b = bounds(2000.0, 1000.0);
        let view = Vec2::new(400.0, 200.0);
        assert_eq!(
            b.clamp_camera(Vec2::new(0.0, 0.0), view),
            Vec2::new(200.0, -100.0)
        );
        assert_eq!(
            b.clamp_camera(Vec2::new(5000.0, -5000.0), view),
            Vec2::new(1800.0, -900.0)
        );
        assert_eq!(
            b.clamp_camera(Vec2::new(700.0, -300.0), view),
            Vec2::new(700.0, -300.0)
        );
    }

    #[test]
    fn camera_centres_on_axis_smaller_than_view() {
        let b = bounds(2000.0, 100.0);
        let clamped = b.clamp_camera(Vec2::new(900.0, -10.0), Vec2::new(400.0, 200.0));
        assert_eq!(clamped, Vec2::new(900.0, -50.0));
    }
}
