use super::Pos;

/// A segment produced by cutting a facet with a slicing plane. The endpoints
/// are unordered, two lines are equal if they share both endpoints in either
/// order.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub start: Pos,
    pub end: Pos,
}

impl Line {
    pub fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    pub fn points(&self) -> [Pos; 2] {
        [self.start, self.end]
    }

    pub fn length(&self) -> f32 {
        (self.end - self.start).magnitude()
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }
}
