use std::sync::OnceLock;

use common::geometry::{BoundingBox, Line};
use tracing::trace;

/// The segments cut from a mesh by one horizontal plane. Lines are kept in
/// the order the facets produced them, they are not chained into contours.
#[derive(Debug, Clone)]
pub struct Layer {
    height: f32,
    lines: Vec<Line>,
    bounds: OnceLock<BoundingBox>,
}

impl Layer {
    pub fn new(height: f32) -> Self {
        Self {
            height,
            lines: Vec::new(),
            bounds: OnceLock::new(),
        }
    }

    /// Z of the slicing plane.
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds a line unless an equal one (same endpoints in either order) is
    /// already in the layer. Returns whether it was added.
    ///
    /// This is a linear scan, making a full layer quadratic in its line
    /// count. Layers hold at most a few thousand lines for the models this is
    /// used with.
    pub fn push(&mut self, line: Line) -> bool {
        if self.lines.contains(&line) {
            trace!("Dropping duplicate line at z = {}", self.height);
            return false;
        }

        self.lines.push(line);
        self.bounds.take();
        true
    }

    /// Bounds of every line endpoint, computed on first use. `None` while the
    /// layer is empty.
    pub fn bounds(&self) -> Option<BoundingBox> {
        let first = self.lines.first()?;
        let bounds = self.bounds.get_or_init(|| {
            let mut bounds = BoundingBox::new(first.start);
            for line in self.lines.iter() {
                bounds.expand_point(line.start);
                bounds.expand_point(line.end);
            }
            bounds
        });

        Some(*bounds)
    }
}

impl Extend<Line> for Layer {
    fn extend<T: IntoIterator<Item = Line>>(&mut self, iter: T) {
        for line in iter {
            self.push(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use common::geometry::Pos;

    use super::*;

    fn line(a: [f32; 2], b: [f32; 2]) -> Line {
        Line::new(Pos::new(a[0], a[1], 0.5), Pos::new(b[0], b[1], 0.5))
    }

    #[test]
    fn drops_duplicates_in_either_direction() {
        let mut layer = Layer::new(0.5);
        assert!(layer.push(line([0.0, 0.0], [1.0, 0.0])));
        assert!(layer.push(line([1.0, 0.0], [1.0, 1.0])));
        assert!(!layer.push(line([1.0, 0.0], [0.0, 0.0])));
        assert!(!layer.push(line([1.0, 0.0], [1.0, 1.0])));
        assert_eq!(layer.len(), 2);
        assert_eq!(layer.lines()[0], line([0.0, 0.0], [1.0, 0.0]));
    }

    #[test]
    fn bounds_follow_lines() {
        let mut layer = Layer::new(0.5);
        assert_eq!(layer.bounds(), None);

        layer.extend([line([0.0, 0.0], [1.0, 2.0])]);
        let bounds = layer.bounds().unwrap();
        assert_eq!(bounds.min, Pos::new(0.0, 0.0, 0.5));
        assert_eq!(bounds.max, Pos::new(1.0, 2.0, 0.5));

        layer.push(line([-3.0, 1.0], [0.0, 0.0]));
        assert_eq!(layer.bounds().unwrap().min, Pos::new(-3.0, 0.0, 0.5));
        assert_eq!(layer.bounds().unwrap().size(), Pos::new(4.0, 2.0, 0.0));
    }
}
