//! SVG output for a [`Scene`].
//!
//! The scene lives in the unit square with y pointing up. The SVG document
//! is measured in points (72 per inch) with y pointing down, so every
//! coordinate goes through [`canvas_transform`] on the way out.
use std::path::Path;

use geo_types::{Coord, LineString};
use nalgebra::{Affine2, Matrix3, Point2};
use svg::node::element::path::Data;
use svg::node::element::{Group, Path as SvgPath, Rectangle, Text};
use svg::Document;

use crate::errors::PosterError;
use crate::scene::{FontWeight, Scene, TextAnchor, TextElement};

pub const POINTS_PER_INCH: f64 = 72.0;

/// Maps unit square coordinates onto a `width` x `height` canvas, flipping y.
pub fn canvas_transform(width: f64, height: f64) -> Affine2<f64> {
    Affine2::from_matrix_unchecked(Matrix3::new(
        width, 0.0, 0.0, 0.0, -height, height, 0.0, 0.0, 1.0,
    ))
}

fn xform_coord(xy: &Coord<f64>, affine: &Affine2<f64>) -> (f64, f64) {
    let out = affine * Point2::new(xy.x, xy.y);
    (out.x, out.y)
}

/// Closed path data for a blob outline. Empty outlines give empty data.
pub fn outline_data(outline: &LineString<f64>, affine: &Affine2<f64>) -> Data {
    let mut data = Data::new();
    let mut coords = outline.coords();
    if let Some(first) = coords.next() {
        data = data.move_to(xform_coord(first, affine));
        for coord in coords {
            data = data.line_to(xform_coord(coord, affine));
        }
        data = data.close();
    }
    data
}

fn text_node(text: &TextElement, affine: &Affine2<f64>) -> Text {
    let (x, y) = xform_coord(&text.position, affine);
    Text::new(text.content.clone())
        .set("x", x)
        .set("y", y)
        .set("font-family", "sans-serif")
        .set("font-size", text.size)
        .set(
            "font-weight",
            match text.weight {
                FontWeight::Normal => "normal",
                FontWeight::Bold => "bold",
            },
        )
        .set(
            "text-anchor",
            match text.anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            },
        )
        .set("fill", text.color.to_hex())
}

impl Scene {
    /// Canvas size in points.
    pub fn canvas_points(&self) -> (f64, f64) {
        (self.width * POINTS_PER_INCH, self.height * POINTS_PER_INCH)
    }

    /// Background, then one group holding every blob at the shared opacity,
    /// then the text.
    pub fn to_svg(&self) -> Document {
        let (width, height) = self.canvas_points();
        let affine = canvas_transform(width, height);

        let mut blobs = Group::new()
            .set("id", "blobs")
            .set("fill-opacity", self.alpha)
            .set("stroke", "none");
        for (id, shape) in self.shapes.iter().enumerate() {
            blobs = blobs.add(
                SvgPath::new()
                    .set("id", format!("blob-{}", id))
                    .set("fill", shape.fill.to_hex())
                    .set("d", outline_data(&shape.outline, &affine)),
            );
        }

        let mut doc = Document::new()
            .set("viewBox", (0.0, 0.0, width, height))
            .set("width", format!("{}in", self.width))
            .set("height", format!("{}in", self.height))
            .add(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", self.background.to_hex()),
            )
            .add(blobs);
        for text in &self.texts {
            doc = doc.add(text_node(text, &affine));
        }
        doc
    }

    pub fn save_svg(&self, path: &Path) -> Result<(), PosterError> {
        svg::save(path, &self.to_svg())
            .map_err(|e| PosterError::SvgGenerationError(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::palette::Rgb;
    use geo_types::coord;

    #[test]
    fn test_canvas_transform_flips_y() {
        let affine = canvas_transform(432.0, 576.0);
        assert_eq!(xform_coord(&coord! {x: 0.0, y: 0.0}, &affine), (0.0, 576.0));
        assert_eq!(xform_coord(&coord! {x: 1.0, y: 1.0}, &affine), (432.0, 0.0));
        assert_eq!(xform_coord(&coord! {x: 0.5, y: 0.25}, &affine), (216.0, 432.0));
    }

    #[test]
    fn test_outline_data() {
        let affine = canvas_transform(100.0, 100.0);
        let square = LineString::new(vec![
            coord! {x: 0.0, y: 0.0},
            coord! {x: 1.0, y: 0.0},
            coord! {x: 1.0, y: 1.0},
        ]);
        let doc = Document::new().add(SvgPath::new().set("d", outline_data(&square, &affine)));
        assert!(doc.to_string().contains("d=\"M0,100 L100,100 L100,0 z\""));
        let empty = Document::new().add(
            SvgPath::new().set("d", outline_data(&LineString::new(vec![]), &affine)),
        );
        assert!(empty.to_string().contains("d=\"\""));
    }

    #[test]
    fn test_scene_svg() {
        let mut scene = Scene::new(6.0, 8.0, Rgb::new(1.0, 1.0, 1.0), 0.6);
        scene
            .add_shape(
                LineString::new(vec![
                    coord! {x: 0.0, y: 0.0},
                    coord! {x: 0.5, y: 0.0},
                    coord! {x: 0.5, y: 0.5},
                ]),
                Rgb::new(1.0, 0.0, 0.0),
            )
            .add_text(TextElement {
                content: "Soft Geometry".into(),
                position: coord! {x: 0.5, y: 0.5},
                size: 28.0,
                weight: FontWeight::Bold,
                anchor: TextAnchor::Middle,
                color: Rgb::new(0.0, 0.0, 1.0),
            });
        let svg = scene.to_svg().to_string();
        assert!(svg.contains("viewBox=\"0 0 432 576\""));
        assert!(svg.contains("width=\"6in\""));
        assert!(svg.contains("fill-opacity=\"0.6\""));
        assert!(svg.contains("fill=\"#ff0000\""));
        assert!(svg.contains("id=\"blob-0\""));
        assert!(svg.contains("text-anchor=\"middle\""));
        assert!(svg.contains("font-weight=\"bold\""));
        assert!(svg.contains("<text"));
        assert!(svg.contains("Soft Geometry"));
        assert!(svg.contains("x=\"216\" y=\"288\""));
    }
}
