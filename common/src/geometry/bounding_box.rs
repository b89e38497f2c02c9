use super::Pos;

/// Axis aligned box enclosing a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Pos,
    pub max: Pos,
}

impl BoundingBox {
    /// A box containing only `point`.
    pub fn new(point: Pos) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Builds the smallest box around every point, or `None` if there are no
    /// points.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Pos>) -> Option<Self> {
        let mut points = points.into_iter();
        let mut bounds = Self::new(*points.next()?);
        points.for_each(|point| bounds.expand_point(*point));
        Some(bounds)
    }

    pub fn expand_point(&mut self, point: Pos) {
        self.min = Pos::new(
            self.min.x.min(point.x),
            self.min.y.min(point.y),
            self.min.z.min(point.z),
        );
        self.max = Pos::new(
            self.max.x.max(point.x),
            self.max.y.max(point.y),
            self.max.z.max(point.z),
        );
    }

    /// Extent along each axis.
    pub fn size(&self) -> Pos {
        self.max - self.min
    }

    pub fn center(&self) -> Pos {
        (self.min + self.max) / 2.0
    }

    /// Length of the diagonal, used by viewers to pick a camera distance.
    pub fn diagonal(&self) -> f32 {
        self.size().magnitude()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_bounds() {
        assert_eq!(BoundingBox::from_points(&[] as &[Pos]), None);
    }

    #[test]
    fn bounds_of_points() {
        let points = [
            Pos::new(1.0, -2.0, 3.0),
            Pos::new(-1.0, 4.0, 0.0),
            Pos::new(0.0, 0.0, 5.0),
        ];

        let bounds = BoundingBox::from_points(&points).unwrap();
        assert_eq!(bounds.min, Pos::new(-1.0, -2.0, 0.0));
        assert_eq!(bounds.max, Pos::new(1.0, 4.0, 5.0));
        assert_eq!(bounds.size(), Pos::new(2.0, 6.0, 5.0));
        assert_eq!(bounds.center(), Pos::new(0.0, 1.0, 2.5));
    }

    #[test]
    fn diagonal_of_box() {
        let bounds = BoundingBox {
            min: Pos::zeros(),
            max: Pos::new(2.0, 3.0, 6.0),
        };
        assert_eq!(bounds.diagonal(), 7.0);
    }
}
