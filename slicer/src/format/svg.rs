use std::io::{self, Write};

use nalgebra::Vector2;
use svg::{
    node::element::{Group, Line, Rectangle},
    Document,
};

use crate::layer::Layer;

/// A preview sheet with every layer drawn in its own cell of a square grid,
/// bottom layer first, reading left to right. All cells share the same
/// origin so layers can be compared by eye.
pub struct SvgFile {
    layers: Vec<VectorLayer>,
    min: Vector2<f32>,
    size: Vector2<f32>,
}

struct VectorLayer {
    height: f32,
    segments: Vec<[Vector2<f32>; 2]>,
}

impl SvgFile {
    pub fn new(layers: &[Layer]) -> Self {
        let bounds = layers.iter().filter_map(|x| x.bounds());
        let (min, max) = bounds.fold(
            (Vector2::repeat(f32::MAX), Vector2::repeat(f32::MIN)),
            |(min, max), x| (min.inf(&x.min.xy()), max.sup(&x.max.xy())),
        );
        let (min, size) = if min.x > max.x {
            (Vector2::zeros(), Vector2::zeros())
        } else {
            (min, max - min)
        };

        let layers = layers
            .iter()
            .map(|layer| VectorLayer {
                height: layer.height(),
                segments: layer
                    .lines()
                    .iter()
                    .map(|x| [x.start.xy(), x.end.xy()])
                    .collect(),
            })
            .collect();

        Self { layers, min, size }
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn document(&self) -> Document {
        let sides = ((self.layers.len() as f32).sqrt().ceil() as usize).max(1);
        let extent = self.size.x.max(self.size.y).max(f32::EPSILON);
        let margin = extent * 0.05;
        let stroke = (extent / 200.0).to_string();

        let cell = self.size + Vector2::repeat(margin * 2.0);
        let total = cell * sides as f32;

        let mut svg = Document::new()
            .set("viewBox", (0, 0, total.x, total.y))
            .set("width", format!("{}mm", total.x))
            .set("height", format!("{}mm", total.y));

        for (idx, layer) in self.layers.iter().enumerate() {
            let (x, y) = (idx % sides, idx / sides);
            let offset = Vector2::new(x as f32 * cell.x, y as f32 * cell.y);

            let mut group = Group::new()
                .set("id", format!("layer-{idx}"))
                .set("data-z", layer.height)
                .add(
                    Rectangle::new()
                        .set("x", offset.x)
                        .set("y", offset.y)
                        .set("width", cell.x)
                        .set("height", cell.y)
                        .set("fill", "none")
                        .set("stroke", "gray")
                        .set("stroke-width", stroke.as_str()),
                );

            for [a, b] in layer.segments.iter() {
                let (a, b) = (self.project(a, offset, margin), self.project(b, offset, margin));
                group = group.add(
                    Line::new()
                        .set("x1", a.x)
                        .set("y1", a.y)
                        .set("x2", b.x)
                        .set("y2", b.y)
                        .set("stroke", "black")
                        .set("stroke-width", stroke.as_str()),
                );
            }

            svg = svg.add(group);
        }

        svg
    }

    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(self.document().to_string().as_bytes())
    }

    // Moves a point into its cell, flipping y so it grows upwards.
    fn project(&self, point: &Vector2<f32>, offset: Vector2<f32>, margin: f32) -> Vector2<f32> {
        let local = point - self.min;
        Vector2::new(
            offset.x + margin + local.x,
            offset.y + margin + self.size.y - local.y,
        )
    }
}
