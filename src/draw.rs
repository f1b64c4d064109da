//! Primitive shapes drawn straight into a raster, without anti-aliasing.
//!
//! Coordinates are trusted: every pixel a shape touches must lie inside the
//! raster, otherwise drawing panics the same way [`Raster::set`] does.
//! Only [`Raster::draw_filled_polygon`] validates its input.

use crate::error::PnmError;
use crate::pixel::Pixel;
use crate::raster::Raster;

/// Integer pixel coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// `round(num / den)` with halves rounded up, `den > 0`.
#[inline]
fn div_round(num: i64, den: i64) -> i64 {
    (2 * num + den).div_euclid(2 * den)
}

/// x where the edge `lo`→`hi` crosses row `y`. `lo.y <= y <= hi.y`.
#[inline]
fn edge_x(lo: Point, hi: Point, y: i32) -> i32 {
    if lo.y == hi.y {
        return lo.x;
    }
    let num = i64::from(hi.x - lo.x) * i64::from(y - lo.y);
    lo.x + div_round(num, i64::from(hi.y - lo.y)) as i32
}

impl<P: Pixel> Raster<P> {
    #[inline]
    fn plot(&mut self, x: i32, y: i32, color: P) {
        match (u32::try_from(x), u32::try_from(y)) {
            (Ok(ux), Ok(uy)) => self.set(ux, uy, color),
            _ => panic!(
                "pixel ({x}, {y}) outside {}x{} raster",
                self.width(),
                self.height()
            ),
        }
    }

    fn hline(&mut self, x0: i32, x1: i32, y: i32, color: P) {
        for x in x0.min(x1)..=x0.max(x1) {
            self.plot(x, y, color);
        }
    }

    /// DDA line from `p1` to `p2`, both ends included.
    ///
    /// Takes `max(|dx|, |dy|) + 1` equal steps and rounds each position to
    /// the nearest pixel.
    pub fn draw_line(&mut self, p1: Point, p2: Point, color: P) {
        let dx = i64::from(p2.x) - i64::from(p1.x);
        let dy = i64::from(p2.y) - i64::from(p1.y);
        if dx == 0 && dy == 0 {
            self.plot(p1.x, p1.y, color);
            return;
        }
        let steps = dx.abs().max(dy.abs()) + 1;
        for i in 0..=steps {
            let x = i64::from(p1.x) + div_round(dx * i, steps);
            let y = i64::from(p1.y) + div_round(dy * i, steps);
            self.plot(x as i32, y as i32, color);
        }
    }

    /// Outline of the `width`×`height` box whose top-left corner is `origin`.
    pub fn draw_rectangle(&mut self, origin: Point, width: i32, height: i32, color: P) {
        if width <= 0 || height <= 0 {
            return;
        }
        let right = origin.x + width - 1;
        let bottom = origin.y + height - 1;
        let top_right = Point::new(right, origin.y);
        let bottom_left = Point::new(origin.x, bottom);
        let bottom_right = Point::new(right, bottom);
        self.draw_line(origin, top_right, color);
        self.draw_line(top_right, bottom_right, color);
        self.draw_line(bottom_right, bottom_left, color);
        self.draw_line(bottom_left, origin, color);
    }

    pub fn draw_filled_rectangle(&mut self, origin: Point, width: i32, height: i32, color: P) {
        if width <= 0 || height <= 0 {
            return;
        }
        for y in origin.y..origin.y + height {
            self.hline(origin.x, origin.x + width - 1, y, color);
        }
    }

    /// Disc of pixels with `dx² + dy² <= radius²`.
    ///
    /// Identical to [`Raster::draw_filled_circle`]: there is no separate
    /// ring algorithm.
    pub fn draw_circle(&mut self, center: Point, radius: i32, color: P) {
        self.fill_disc(center, radius, color);
    }

    pub fn draw_filled_circle(&mut self, center: Point, radius: i32, color: P) {
        self.fill_disc(center, radius, color);
    }

    fn fill_disc(&mut self, center: Point, radius: i32, color: P) {
        let r2 = i64::from(radius) * i64::from(radius);
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if i64::from(dx) * i64::from(dx) + i64::from(dy) * i64::from(dy) <= r2 {
                    self.plot(center.x + dx, center.y + dy, color);
                }
            }
        }
    }

    pub fn draw_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: P) {
        self.draw_line(p1, p2, color);
        self.draw_line(p2, p3, color);
        self.draw_line(p3, p1, color);
    }

    /// Scanline fill. Vertices are sorted by y; each row spans from the long
    /// edge (top to bottom vertex) to whichever short edge covers it, the
    /// split happening at the middle vertex.
    pub fn draw_filled_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: P) {
        let mut v = [p1, p2, p3];
        v.sort_by_key(|p| p.y);
        let [top, mid, bottom] = v;

        if top.y == bottom.y {
            let left = top.x.min(mid.x).min(bottom.x);
            let right = top.x.max(mid.x).max(bottom.x);
            self.hline(left, right, top.y, color);
            return;
        }

        for y in top.y..=bottom.y {
            let long = edge_x(top, bottom, y);
            let short = if y < mid.y {
                edge_x(top, mid, y)
            } else {
                edge_x(mid, bottom, y)
            };
            self.hline(long, short, y, color);
        }
    }

    /// Closed outline through `points`; a single point plots one pixel.
    pub fn draw_polygon(&mut self, points: &[Point], color: P) -> Result<(), PnmError> {
        if points.is_empty() {
            return Err(PnmError::InvalidPolygon("no vertices".into()));
        }
        for (i, &p) in points.iter().enumerate() {
            let next = points[(i + 1) % points.len()];
            self.draw_line(p, next, color);
        }
        Ok(())
    }

    /// Even-odd scanline fill of the polygon through `points`, outline
    /// included.
    ///
    /// Each row collects the x crossings of every non-horizontal edge under
    /// a half-open `[min_y, max_y)` rule, sorts them and fills between
    /// successive pairs.
    pub fn draw_filled_polygon(&mut self, points: &[Point], color: P) -> Result<(), PnmError> {
        if points.len() < 3 {
            return Err(PnmError::InvalidPolygon(format!(
                "need at least 3 vertices, got {}",
                points.len()
            )));
        }
        let min_y = points.iter().map(|p| p.y).min().unwrap_or_default();
        let max_y = points.iter().map(|p| p.y).max().unwrap_or_default();
        if min_y < 0 || i64::from(max_y) >= i64::from(self.height()) {
            return Err(PnmError::InvalidPolygon(format!(
                "y range {min_y}..={max_y} outside 0..{}",
                self.height()
            )));
        }

        let mut crossings = Vec::with_capacity(points.len());
        for y in min_y..=max_y {
            crossings.clear();
            for (i, &a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                if a.y == b.y {
                    continue;
                }
                let (lo, hi) = if a.y < b.y { (a, b) } else { (b, a) };
                if y >= lo.y && y < hi.y {
                    crossings.push(edge_x(lo, hi, y));
                }
            }
            crossings.sort_unstable();
            for pair in crossings.chunks_exact(2) {
                self.hline(pair[0], pair[1], y, color);
            }
        }

        self.draw_polygon(points, color)
    }
}
