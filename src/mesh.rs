use super::{
    types::Point3,
    color::Color,
};

/// A triangle given by its three corners, the order of the corners gives the winding
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle([Point3; 3]);

impl Triangle {
    /// Creates a new triangle
    ///
    /// # Parameters
    ///
    /// a: The first corner
    ///
    /// b: The second corner
    ///
    /// c: The third corner
    pub fn new(a: &Point3, b: &Point3, c: &Point3) -> Self {
        Self([*a, *b, *c])
    }

    /// Retrieves the corners in order
    pub fn get_points(&self) -> &[Point3; 3] {
        &self.0
    }

    /// Retrieves the three edges as pairs of corners: ab, bc, ca
    pub fn get_edges(&self) -> [(&Point3, &Point3); 3] {
        [(&self.0[0], &self.0[1]), (&self.0[1], &self.0[2]), (&self.0[2], &self.0[0])]
    }
}

/// A list of triangles with a color for every vertex, ready to be uploaded to the gpu
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    /// The triangles in draw order
    triangles: Vec<Triangle>,
    /// One color per vertex, 3 for each triangle in the same order
    colors: Vec<Color>,
}

impl Mesh {
    /// Creates an empty mesh with room for the given number of triangles
    ///
    /// # Parameters
    ///
    /// capacity: The number of triangles to reserve space for
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(3 * capacity),
        }
    }

    /// Adds a triangle to the end of the mesh
    ///
    /// # Parameters
    ///
    /// triangle: The triangle to add
    ///
    /// colors: The colors of the three vertices
    pub fn push(&mut self, triangle: Triangle, colors: [Color; 3]) {
        self.triangles.push(triangle);
        self.colors.extend_from_slice(&colors);
    }

    /// Retrieves the triangles
    pub fn get_triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Retrieves the vertex colors
    pub fn get_colors(&self) -> &[Color] {
        &self.colors
    }

    /// Retrieves the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Retrieves the number of vertices
    pub fn vertex_count(&self) -> usize {
        3 * self.triangles.len()
    }

    /// Iterates over all vertex positions in draw order
    pub fn positions(&self) -> impl Iterator<Item = &Point3> + '_ {
        self.triangles.iter().flat_map(|triangle| triangle.get_points().iter())
    }

    /// Retrieves the position data for the gpu
    pub fn get_position_data(&self) -> Vec<[f32; 3]> {
        self.positions().map(|point| point.get_data()).collect()
    }

    /// Retrieves the color data for the gpu
    pub fn get_color_data(&self) -> Vec<[f32; 3]> {
        self.colors.iter().map(|color| color.get_data()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_colors_parallel() {
        let mut mesh = Mesh::with_capacity(1);
        let triangle = Triangle::new(&Point3::new(1.0, 0.0, 0.0), &Point3::new(0.0, 1.0, 0.0), &Point3::new(0.0, 0.0, 1.0));
        let red = Color::new_rgb(1.0, 0.0, 0.0);

        mesh.push(triangle, [red; 3]);
        mesh.push(triangle, [Color::new_gray(0.5); 3]);

        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.get_colors().len(), 6);
        assert_eq!(mesh.get_position_data()[1], [0.0, 1.0, 0.0]);
        assert_eq!(mesh.get_color_data()[2], [1.0, 0.0, 0.0]);
        assert_eq!(mesh.get_color_data()[3], [0.5, 0.5, 0.5]);
    }
}
