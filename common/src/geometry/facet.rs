use super::{is_intersect, point_at_z, Line, Pos};

/// One triangle of a mesh. The vertex order is whatever the source file
/// used, no winding is assumed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facet {
    pub normal: Pos,
    pub vertices: [Pos; 3],
}

impl Facet {
    pub fn new(normal: Pos, vertices: [Pos; 3]) -> Self {
        Self { normal, vertices }
    }

    /// Returns a copy with every vertex multiplied by `factor`. The normal is
    /// left alone as uniform scaling does not change its direction.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            normal: self.normal,
            vertices: self.vertices.map(|v| v * factor),
        }
    }

    /// Lowest and highest z of the three vertices.
    pub fn z_range(&self) -> (f32, f32) {
        let [a, b, c] = self.vertices.map(|v| v.z);
        (a.min(b).min(c), a.max(b).max(c))
    }

    /// Cuts the facet with the horizontal plane at `height`.
    ///
    /// The result depends on how many vertices sit exactly on the plane:
    /// - none: the segment between the two edges that cross the plane.
    /// - one: a segment from that vertex to the point on the opposite edge
    ///   at `height`. This is produced even when the opposite edge does not
    ///   cross, in which case the second point is extrapolated. If the
    ///   opposite edge is level there is no such point and the vertex only
    ///   touches the plane, so `None` is returned.
    /// - two: the edge joining them.
    /// - three: the facet is coplanar with the plane and `None` is returned.
    ///
    /// `None` is also returned when all vertices are strictly above or
    /// strictly below the plane.
    ///
    /// # Panics
    ///
    /// Panics if no vertex is on the plane yet the number of crossing edges
    /// is not two, which only happens with non-finite coordinates.
    pub fn intersect(&self, height: f32) -> Option<Line> {
        let v = &self.vertices;
        if v.iter().all(|p| p.z > height) || v.iter().all(|p| p.z < height) {
            return None;
        }

        let (mut on, mut off) = ([0; 3], [0; 3]);
        let (mut n, mut m) = (0, 0);
        for (idx, point) in v.iter().enumerate() {
            if point.z == height {
                on[n] = idx;
                n += 1;
            } else {
                off[m] = idx;
                m += 1;
            }
        }

        match n {
            0 => Some(self.intersect_edges(height)),
            1 => {
                let (a, b) = (&v[off[0]], &v[off[1]]);
                if a.z == b.z {
                    return None;
                }

                Some(Line::new(v[on[0]], point_at_z(a, b, height)))
            }
            2 => Some(Line::new(v[on[0]], v[on[1]])),
            _ => None,
        }
    }

    fn intersect_edges(&self, height: f32) -> Line {
        let v = &self.vertices;

        let mut points = [Pos::zeros(); 3];
        let mut n = 0;
        for i in 0..3 {
            let (a, b) = (&v[i], &v[(i + 1) % 3]);
            if is_intersect(a, b, height) {
                points[n] = point_at_z(a, b, height);
                n += 1;
            }
        }

        assert_eq!(n, 2, "facet {v:?} crosses plane z = {height} on {n} edges");
        Line::new(points[0], points[1])
    }
}
