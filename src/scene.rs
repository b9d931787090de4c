//! A renderer-agnostic description of one poster.
use geo::BoundingRect;
use geo_types::{Coord, LineString, MultiLineString, Rect};
use serde::{Deserialize, Serialize};

use crate::palette::Rgb;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Horizontal anchoring of a text label relative to its position.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// A filled blob. The outline is left open; renderers close it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FilledShape {
    pub outline: LineString<f64>,
    pub fill: Rgb,
}

/// Text placed in unit square coordinates. `size` is in points.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub position: Coord<f64>,
    pub size: f64,
    pub weight: FontWeight,
    pub anchor: TextAnchor,
    pub color: Rgb,
}

/// Everything a rendering surface needs to draw a poster: the canvas, the
/// blobs (drawn in order, all at one opacity, no outline), and the text on
/// top. Geometry lives in the unit square with y pointing up.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub background: Rgb,
    pub alpha: f64,
    pub shapes: Vec<FilledShape>,
    pub texts: Vec<TextElement>,
}

impl Scene {
    /// Empty canvas, no shapes or text yet.
    pub fn new(width: f64, height: f64, background: Rgb, alpha: f64) -> Self {
        Scene {
            width,
            height,
            background,
            alpha,
            shapes: vec![],
            texts: vec![],
        }
    }

    pub fn add_shape(&mut self, outline: LineString<f64>, fill: Rgb) -> &mut Self {
        self.shapes.push(FilledShape { outline, fill });
        self
    }

    pub fn add_text(&mut self, text: TextElement) -> &mut Self {
        self.texts.push(text);
        self
    }

    /// Bounding box of all the shape outlines, or None if there are none.
    /// Blobs may poke past the unit square; this tells you how far.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        MultiLineString::new(self.shapes.iter().map(|s| s.outline.clone()).collect())
            .bounding_rect()
    }

    pub fn find_text(&self, content: &str) -> Option<&TextElement> {
        self.texts.iter().find(|t| t.content == content)
    }

    pub fn to_ron(&self) -> anyhow::Result<String> {
        Ok(ron::to_string(self)?)
    }

    pub fn from_ron(text: &str) -> anyhow::Result<Scene> {
        Ok(ron::from_str(text)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo_types::coord;

    fn triangle() -> LineString<f64> {
        LineString::new(vec![
            coord! {x: -0.1, y: 0.2},
            coord! {x: 0.9, y: 0.2},
            coord! {x: 0.5, y: 1.3},
        ])
    }

    #[test]
    fn test_bounds() {
        let mut scene = Scene::new(6.0, 8.0, Rgb::gray(0.9), 0.5);
        assert_eq!(scene.bounds(), None);
        scene.add_shape(triangle(), Rgb::gray(0.1));
        let bounds = scene.bounds().unwrap();
        assert_eq!(bounds.min(), coord! {x: -0.1, y: 0.2});
        assert_eq!(bounds.max(), coord! {x: 0.9, y: 1.3});
    }

    #[test]
    fn test_ron_round_trip() {
        let mut scene = Scene::new(6.0, 8.0, Rgb::gray(0.9), 0.5);
        scene.add_shape(triangle(), Rgb::new(0.2, 0.4, 0.6)).add_text(TextElement {
            content: "Hi".into(),
            position: coord! {x: 0.5, y: 0.5},
            size: 12.0,
            weight: FontWeight::Bold,
            anchor: TextAnchor::Middle,
            color: Rgb::gray(0.3),
        });
        let back = Scene::from_ron(&scene.to_ron().unwrap()).unwrap();
        assert_eq!(back, scene);
        assert!(back.find_text("Hi").is_some());
        assert!(back.find_text("Bye").is_none());
    }
}
