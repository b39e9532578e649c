// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Pixel extents for surfaces, textures and viewports.

/// A two-dimensional extent, typically representing width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent2D {
    /// The width component of the extent.
    pub width: u32,
    /// The height component of the extent.
    pub height: u32,
}

impl Extent2D {
    /// Creates a new extent.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either component is zero.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The extent of mip level `level`, never smaller than one pixel per axis.
    pub fn mip_level(&self, level: u32) -> Self {
        let shrink = |v: u32| v.checked_shr(level).unwrap_or(0).max(1);
        Self {
            width: shrink(self.width),
            height: shrink(self.height),
        }
    }

    /// Number of pixels covered by this extent.
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mip_levels_halve_and_clamp_to_one() {
        let base = Extent2D::new(256, 64);
        assert_eq!(base.mip_level(0), base);
        assert_eq!(base.mip_level(1), Extent2D::new(128, 32));
        assert_eq!(base.mip_level(7), Extent2D::new(2, 1));
        assert_eq!(base.mip_level(40), Extent2D::new(1, 1));
    }

    #[test]
    fn empty_when_any_axis_is_zero() {
        assert!(Extent2D::new(0, 10).is_empty());
        assert!(Extent2D::default().is_empty());
        assert!(!Extent2D::new(1, 1).is_empty());
        assert_eq!(Extent2D::new(4, 3).area(), 12);
    }
}
