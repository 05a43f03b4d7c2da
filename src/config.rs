use clap::{Parser, ValueEnum};
use super::{
    DEPTH, ROTATION_STEP, WINDOW_SIZE, CUBE_SIZE, TETRAHEDRON,
    mesh::Mesh,
    tessellate,
    cube,
};

/// The object to spin
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    /// A sphere made by subdividing a tetrahedron
    Sphere,
    /// A cube with one color per face
    Cube,
}

/// Renders a spinning sphere or cube
#[derive(Clone, Debug, PartialEq, Parser)]
#[command(version, about)]
pub struct Config {
    /// The object to render
    #[arg(long, value_enum, default_value_t = Shape::Sphere)]
    pub shape: Shape,
    /// The number of times the tetrahedron is subdivided
    #[arg(long, default_value_t = DEPTH)]
    pub depth: u32,
    /// The angle in radians the object turns every frame
    #[arg(long, default_value_t = ROTATION_STEP)]
    pub rotation_step: f64,
    /// The initial width of the window
    #[arg(long, default_value_t = WINDOW_SIZE)]
    pub width: u32,
    /// The initial height of the window
    #[arg(long, default_value_t = WINDOW_SIZE)]
    pub height: u32,
}

impl Config {
    /// Builds the mesh for the configured shape
    pub fn build_mesh(&self) -> Mesh {
        match self.shape {
            Shape::Sphere => {
                let [a, b, c, d] = TETRAHEDRON;
                tessellate::tetrahedron(&a, &b, &c, &d, self.depth)
            }
            Shape::Cube => cube::generate(CUBE_SIZE),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shape: Shape::Sphere,
            depth: DEPTH,
            rotation_step: ROTATION_STEP,
            width: WINDOW_SIZE,
            height: WINDOW_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_parser() {
        let config = Config::try_parse_from(["spinning_sphere"]).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.depth, 3);
    }

    #[test]
    fn parse_flags() {
        let config = Config::try_parse_from([
            "spinning_sphere", "--shape", "cube", "--depth", "1", "--rotation-step", "0.05", "--width", "800",
        ]).unwrap();

        assert_eq!(config.shape, Shape::Cube);
        assert_eq!(config.depth, 1);
        assert_eq!(config.rotation_step, 0.05);
        assert_eq!(config.width, 800);
        assert_eq!(config.height, WINDOW_SIZE);
    }

    #[test]
    fn negative_depth_is_rejected() {
        assert!(Config::try_parse_from(["spinning_sphere", "--depth", "-1"]).is_err());
    }

    #[test]
    fn build_mesh_for_shape() {
        let sphere = Config { depth: 1, ..Config::default() };
        let cube = Config { shape: Shape::Cube, ..Config::default() };

        assert_eq!(sphere.build_mesh().triangle_count(), 40);
        assert_eq!(cube.build_mesh().triangle_count(), 12);
    }
}
