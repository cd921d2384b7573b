//! What the scene needs from whatever it draws on.

use serde::{Deserialize, Serialize};

use crate::vector::Vec2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Any CSS color.
    pub color: String,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }
}

pub trait Surface {
    fn width(&self) -> f64;

    fn height(&self) -> f64;

    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Stroke the open polyline through `points`.
    fn stroke_path(&mut self, points: &[Vec2], stroke: &Stroke);

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f64,
        height: f64,
    },
    StrokePath {
        points: Vec<Vec2>,
        stroke: Stroke,
    },
    FillCircle {
        center: Vec2,
        radius: f64,
        color: String,
    },
}

/// A surface that remembers what was drawn on it since the last `clear`.
#[derive(Debug, Clone)]
pub struct Recording {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl Recording {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Surface for Recording {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear {
            width: self.width,
            height: self.height,
        });
    }

    fn stroke_path(&mut self, points: &[Vec2], stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokePath {
            points: points.to_vec(),
            stroke: stroke.clone(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: &str) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color: color.to_owned(),
        });
    }
}
