/// A point in turtle space: y-up, origin at the canvas center.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self { Self { x, y } }

    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// RGB, each channel normalized to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLUE: Self = Self { r: 0.0, g: 0.0, b: 1.0 };

    /// Build from 0–255 channels, clamping each before normalizing.
    pub fn from_rgb255(r: f64, g: f64, b: f64) -> Self {
        let norm = |c: f64| c.clamp(0.0, 255.0) / 255.0;
        Self { r: norm(r), g: norm(g), b: norm(b) }
    }
}

impl Default for Color {
    fn default() -> Self { Self::BLUE }
}

// ─── Segment ─────────────────────────────────────────────────────────────────

/// One drawn stroke. Segments are kept in draw order, which is also the
/// playback order.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    /// Heading of the turtle when the stroke was drawn, degrees.
    pub heading: f64,
    pub color: Color,
    pub line_width: f64,
    pub turtle: String,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }
}

// ─── Bounds ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle, `min_x`/`min_y` at the lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Viewport used when nothing has been registered: 100×100 around the origin.
    pub const DEFAULT: Self = Self { min_x: -50.0, min_y: -50.0, width: 100.0, height: 100.0 };

    pub fn max_x(&self) -> f64 { self.min_x + self.width }
    pub fn max_y(&self) -> f64 { self.min_y + self.height }

    pub fn center(&self) -> Point {
        Point::new(self.min_x + self.width / 2.0, self.min_y + self.height / 2.0)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x() && p.y >= self.min_y && p.y <= self.max_y()
    }
}

/// Running min/max over every point any turtle has occupied.
#[derive(Debug, Clone, Default)]
pub struct BoundsTracker {
    extent: Option<(Point, Point)>,
}

impl BoundsTracker {
    pub fn new() -> Self { Self::default() }

    pub fn register(&mut self, p: Point) {
        self.extent = Some(match self.extent {
            None => (p, p),
            Some((min, max)) => (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            ),
        });
    }

    pub fn is_initialized(&self) -> bool { self.extent.is_some() }

    pub fn reset(&mut self) { self.extent = None; }

    /// Width and height are floored at 1 so downstream scale factors stay finite.
    /// No padding is applied.
    pub fn rect(&self) -> Rect {
        match self.extent {
            None => Rect::DEFAULT,
            Some((min, max)) => Rect {
                min_x: min.x,
                min_y: min.y,
                width: (max.x - min.x).max(1.0),
                height: (max.y - min.y).max(1.0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_yields_default_box() {
        let rect = BoundsTracker::new().rect();
        assert_eq!(rect, Rect::DEFAULT);
        assert_eq!(rect.center(), Point::ORIGIN);
    }

    #[test]
    fn tracks_extremes() {
        let mut b = BoundsTracker::new();
        b.register(Point::new(-10.0, 5.0));
        b.register(Point::new(30.0, -20.0));
        b.register(Point::new(0.0, 0.0));
        let r = b.rect();
        assert_eq!((r.min_x, r.min_y, r.max_x(), r.max_y()), (-10.0, -20.0, 30.0, 5.0));
    }

    #[test]
    fn degenerate_extent_is_floored() {
        let mut b = BoundsTracker::new();
        b.register(Point::new(0.0, 0.0));
        b.register(Point::new(0.0, 100.0));
        let r = b.rect();
        assert_eq!(r.width, 1.0);
        assert_eq!(r.height, 100.0);
    }

    #[test]
    fn reset_forgets_points() {
        let mut b = BoundsTracker::new();
        b.register(Point::new(500.0, 500.0));
        b.reset();
        assert!(!b.is_initialized());
        assert_eq!(b.rect(), Rect::DEFAULT);
    }

    #[test]
    fn color_channels_are_clamped() {
        let c = Color::from_rgb255(-20.0, 255.0, 510.0);
        assert_eq!(c, Color { r: 0.0, g: 1.0, b: 1.0 });
    }
}
