/// A detection rectangle in frame pixel coordinates.
///
/// Detectors are allowed to emit coordinates that fall outside the frame;
/// anything that indexes into pixel data must call [`Region::fits_within`]
/// first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when the rectangle lies entirely inside a `frame_w` x `frame_h`
    /// frame. Degenerate (zero or negative size) rectangles never fit.
    pub fn fits_within(&self, frame_w: u32, frame_h: u32) -> bool {
        self.width > 0
            && self.height > 0
            && self.x >= 0
            && self.y >= 0
            && self.x + self.width <= frame_w as i32
            && self.y + self.height <= frame_h as i32
    }

    pub fn area(&self) -> i64 {
        (self.width.max(0) as i64) * (self.height.max(0) as i64)
    }

    /// Intersection-over-union with another rectangle, used by NMS.
    pub fn iou(&self, other: &Region) -> f64 {
        let ix1 = self.x.max(other.x);
        let iy1 = self.y.max(other.y);
        let ix2 = (self.x + self.width).min(other.x + other.width);
        let iy2 = (self.y + self.height).min(other.y + other.height);

        let inter = (ix2 - ix1).max(0) as f64 * (iy2 - iy1).max(0) as f64;
        if inter == 0.0 {
            return 0.0;
        }

        inter / (self.area() as f64 + other.area() as f64 - inter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case::inside(Region::new(10, 10, 50, 50), true)]
    #[case::exact_fit(Region::new(0, 0, 200, 100), true)]
    #[case::touching_right_edge(Region::new(150, 0, 50, 50), true)]
    #[case::negative_x(Region::new(-5, 10, 50, 50), false)]
    #[case::negative_y(Region::new(10, -1, 50, 50), false)]
    #[case::overflow_right(Region::new(160, 10, 50, 50), false)]
    #[case::overflow_bottom(Region::new(10, 60, 50, 50), false)]
    #[case::zero_width(Region::new(10, 10, 0, 50), false)]
    #[case::negative_height(Region::new(10, 10, 50, -3), false)]
    fn test_fits_within_200x100(#[case] region: Region, #[case] expected: bool) {
        assert_eq!(region.fits_within(200, 100), expected);
    }

    #[test]
    fn test_iou_identical() {
        let a = Region::new(10, 10, 100, 100);
        assert_relative_eq!(a.iou(&a), 1.0);
    }

    #[test]
    fn test_iou_disjoint() {
        let a = Region::new(0, 0, 50, 50);
        let b = Region::new(100, 100, 50, 50);
        assert_relative_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn test_iou_partial_overlap() {
        // intersection 50x100 = 5000, union 15000
        let a = Region::new(0, 0, 100, 100);
        let b = Region::new(50, 0, 100, 100);
        assert_relative_eq!(a.iou(&b), 5000.0 / 15000.0);
    }

    #[test]
    fn test_iou_touching_edges_is_zero() {
        let a = Region::new(0, 0, 50, 50);
        let b = Region::new(50, 0, 50, 50);
        assert_relative_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn test_area_clamps_negative() {
        assert_eq!(Region::new(0, 0, -5, 10).area(), 0);
        assert_eq!(Region::new(0, 0, 4, 5).area(), 20);
    }
}
