/// Iterator over the lattice pixels of the line from `(x0, y0)` to `(x1, y1)`, using
/// Bresenham's algorithm.
///
/// Both end points are emitted. Pixels are produced from the start point toward the end
/// point along the major axis.
///
/// # Examples
///
/// ```
/// # use lattice_geom::core::math::*;
/// let pixels: Vec<_> = BresenhamLineIter::new(0, 0, 5, 2).collect();
/// assert_eq!(pixels, vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]);
/// ```
#[derive(Debug, Clone)]
pub struct BresenhamLineIter {
    steep: bool,
    x: i32,
    y: i32,
    x_end: i32,
    dx: i64,
    dy: i64,
    err: i64,
    x_step: i32,
    y_step: i32,
    done: bool,
}

impl BresenhamLineIter {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let steep = (i64::from(y1) - i64::from(y0)).abs() > (i64::from(x1) - i64::from(x0)).abs();
        let (x0, y0, x1, y1) = if steep {
            (y0, x0, y1, x1)
        } else {
            (x0, y0, x1, y1)
        };
        let dx = (i64::from(x1) - i64::from(x0)).abs();
        let dy = (i64::from(y1) - i64::from(y0)).abs();
        Self {
            steep,
            x: x0,
            y: y0,
            x_end: x1,
            dx,
            dy,
            err: dx / 2,
            x_step: if x0 < x1 { 1 } else { -1 },
            y_step: if y0 < y1 { 1 } else { -1 },
            done: false,
        }
    }
}

impl Iterator for BresenhamLineIter {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let pixel = if self.steep {
            (self.y, self.x)
        } else {
            (self.x, self.y)
        };

        if self.x == self.x_end {
            self.done = true;
        } else {
            self.err -= self.dy;
            if self.err < 0 {
                self.y += self.y_step;
                self.err += self.dx;
            }
            self.x += self.x_step;
        }

        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = (i64::from(self.x_end) - i64::from(self.x)).unsigned_abs() as usize + 1;
        (remaining, Some(remaining))
    }
}
