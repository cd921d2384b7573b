#![warn(clippy::todo)]

pub mod animation;
pub mod bezier;
pub mod config;
pub mod pointer;
pub mod scene;
pub mod spring;
pub mod surface;
pub mod svg;
pub mod vector;

#[cfg(target_family = "wasm")]
mod web;

pub use bezier::{bezier_point, bezier_tangent, CubicBezier, Samples};
pub use config::SceneConfig;
pub use pointer::Pointer;
pub use scene::Scene;
pub use spring::{update_spring, DynamicPoint, SpringConfig};
pub use surface::{Stroke, Surface};
pub use vector::{length, normalize, Vec2};

#[cfg(target_family = "wasm")]
pub use web::{start, start_with_config, Animation};
