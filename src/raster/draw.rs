//! Segment and drawing rasterization

use serde::Deserialize;

use super::Canvas;

/// One pen path, stored as parallel x and y coordinate sequences.
///
/// Decodes straight from the QuickDraw `drawing` entries, which are
/// two-element arrays `[[x0, x1, ...], [y0, y1, ...]]`.
#[derive(Debug, Clone, Deserialize)]
pub struct Stroke(pub Vec<i32>, pub Vec<i32>);

impl Stroke {
    pub fn xs(&self) -> &[i32] {
        &self.0
    }

    pub fn ys(&self) -> &[i32] {
        &self.1
    }

    /// Consecutive point pairs along the polyline. A single-point stroke
    /// yields no pairs; unequal parallel sequences truncate to the shorter.
    pub fn segments(&self) -> impl Iterator<Item = ((i32, i32), (i32, i32))> + '_ {
        let from = self.0.iter().copied().zip(self.1.iter().copied());
        let to = self
            .0
            .iter()
            .copied()
            .skip(1)
            .zip(self.1.iter().copied().skip(1));
        from.zip(to)
    }
}

/// Rasterize one drawing onto a fresh canvas.
///
/// Both endpoints of every consecutive pair are marked directly; the
/// segment between them goes through the vertical fast path when the x
/// coordinates coincide, the candidate scan otherwise. Marking is a set
/// union, so stroke order never changes the result.
pub fn rasterize(strokes: &[Stroke]) -> Canvas {
    let mut canvas = Canvas::new();
    for stroke in strokes {
        for ((x0, y0), (x1, y1)) in stroke.segments() {
            canvas.set(x0, y0);
            canvas.set(x1, y1);
            if x0 != x1 {
                draw_segment(&mut canvas, x0, y0, x1, y1);
            } else {
                draw_column(&mut canvas, x0, y0, y1);
            }
        }
    }
    canvas
}

/// Fill the column x for y in `[min(y0,y1), max(y0,y1))`. The far
/// endpoint is left to the caller, which marks both endpoints itself.
pub fn draw_column(canvas: &mut Canvas, x: i32, y0: i32, y1: i32) {
    for y in y0.min(y1)..y0.max(y1) {
        canvas.set(x, y);
    }
}

/// Slope-intercept scan for a non-vertical segment.
///
/// For every column between the endpoints, the predicted row and its six
/// rounding candidates are all marked. The redundancy is intentional: it
/// thickens the line just enough that adjacent columns always connect,
/// and the dataset format is defined by exactly this marking. Candidates
/// that land outside the canvas are dropped by `Canvas::set`.
pub fn draw_segment(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32) {
    let a = (y0 - y1) as f64 / (x0 - x1) as f64;
    let b = y0 as f64 - a * x0 as f64;

    for x in x0.min(x1)..=x0.max(x1) {
        let pred = a * x as f64 + b;
        let candidates = [
            pred.ceil() as i32,
            pred.floor() as i32,
            (pred + 0.5).ceil() as i32,
            (pred - 0.5).ceil() as i32,
            (pred + 0.5).floor() as i32,
            (pred - 0.5).floor() as i32,
        ];
        for y in candidates {
            canvas.set(x, y);
        }
    }
}
