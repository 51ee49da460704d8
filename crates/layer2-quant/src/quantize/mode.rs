//! Layer 2 screen modes.

use super::traversal::Traversal;

/// A supported Layer 2 resolution mode.
///
/// The mode determines both the accepted raster dimensions and the
/// traversal order of the output pixel stream:
///
/// | Mode | Dimensions | Stream size | Traversal |
/// |------|------------|-------------|-----------|
/// | `Wide` | 320x256 | 80 KiB | X-outer (stripes run left to right) |
/// | `Tall` | 256x192 or 256x256 | 48 or 64 KiB | row-major (stripes run top down) |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenMode {
    /// 320x256, 10 stripes of 8 KiB running left to right across the page.
    Wide,
    /// 256x192 or 256x256, stripes running top down.
    Tall,
}

impl ScreenMode {
    /// Detect the mode from raster dimensions, or `None` if the raster
    /// matches no supported mode.
    pub fn for_dimensions(width: u32, height: u32) -> Option<Self> {
        match (width, height) {
            (320, 256) => Some(ScreenMode::Wide),
            (256, 192) | (256, 256) => Some(ScreenMode::Tall),
            _ => None,
        }
    }

    /// Returns true if a raster of the given dimensions is valid for this
    /// mode.
    pub fn supports(self, width: u32, height: u32) -> bool {
        ScreenMode::for_dimensions(width, height) == Some(self)
    }

    /// The traversal order the hardware layout requires for this mode.
    pub fn traversal(self) -> Traversal {
        match self {
            ScreenMode::Wide => Traversal::ColumnMajorXOuter,
            ScreenMode::Tall => Traversal::RowMajor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_wide() {
        assert_eq!(ScreenMode::for_dimensions(320, 256), Some(ScreenMode::Wide));
    }

    #[test]
    fn test_detect_tall_both_heights() {
        assert_eq!(ScreenMode::for_dimensions(256, 192), Some(ScreenMode::Tall));
        assert_eq!(ScreenMode::for_dimensions(256, 256), Some(ScreenMode::Tall));
    }

    #[test]
    fn test_detect_rejects_other_sizes() {
        assert_eq!(ScreenMode::for_dimensions(640, 480), None);
        assert_eq!(ScreenMode::for_dimensions(256, 320), None);
        assert_eq!(ScreenMode::for_dimensions(0, 0), None);
    }

    #[test]
    fn test_supports_is_mode_specific() {
        assert!(ScreenMode::Wide.supports(320, 256));
        assert!(!ScreenMode::Wide.supports(256, 192));
        assert!(!ScreenMode::Tall.supports(320, 256));
    }

    #[test]
    fn test_traversal_mapping() {
        assert_eq!(ScreenMode::Wide.traversal(), Traversal::ColumnMajorXOuter);
        assert_eq!(ScreenMode::Tall.traversal(), Traversal::RowMajor);
    }
}
