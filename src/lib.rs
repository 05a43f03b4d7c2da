pub mod types;
pub mod color;
pub mod mesh;
pub mod tessellate;
pub mod cube;
pub mod camera;
pub mod config;
pub mod render;
pub mod gpu_mesh;
pub mod application;

use types::Point3;

/// The corners of the regular tetrahedron which is subdivided into a sphere
pub const TETRAHEDRON: [Point3; 4] = [
    Point3::new(0.0, 0.0, -1.0),
    Point3::new(0.0, 0.942809, 0.333333),
    Point3::new(-0.816497, -0.471405, 0.333333),
    Point3::new(0.816497, -0.471405, 0.333333),
];
pub const DEPTH: u32 = 3;
pub const ROTATION_STEP: f64 = 0.01;
pub const WINDOW_SIZE: u32 = 500;
const CUBE_SIZE: f64 = 1.5;
const CAMERA_DISTANCE: f64 = 6.0;
const FOV_Y: f64 = std::f64::consts::FRAC_PI_3;
const NEAR: f64 = 0.1;
const FAR: f64 = 100.0;
const CLEAR_COLOR: color::Color = color::Color::new_gray(0.0);
