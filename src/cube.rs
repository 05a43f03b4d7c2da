use super::{
    types::Point3,
    color::Color,
    mesh::{Mesh, Triangle},
};

/// The color of each face in the order +x, -x, +y, -y, +z, -z
const FACE_COLORS: [Color; 6] = [
    Color::new_rgb(1.0, 0.0, 0.0),
    Color::new_rgb(0.0, 1.0, 0.0),
    Color::new_rgb(0.0, 0.0, 1.0),
    Color::new_rgb(1.0, 1.0, 0.0),
    Color::new_rgb(1.0, 0.0, 1.0),
    Color::new_rgb(0.0, 1.0, 1.0),
];

/// Generates an axis aligned cube centered at origo where every face has its own color.
/// All faces are wound counter clockwise when seen from the outside.
///
/// # Parameters
///
/// size: The length of the edges
pub fn generate(size: f64) -> Mesh {
    let h = 0.5 * size;
    let mut mesh = Mesh::with_capacity(12);

    // Each face as (normal, u, v) with u x v = normal
    let faces: [([f64; 3], [f64; 3], [f64; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
    ];

    for ((normal, u, v), color) in faces.iter().zip(FACE_COLORS.iter()) {
        let corner = |s: f64, t: f64| {
            Point3::new(
                h * (normal[0] + s * u[0] + t * v[0]),
                h * (normal[1] + s * u[1] + t * v[1]),
                h * (normal[2] + s * u[2] + t * v[2]),
            )
        };

        let p0 = corner(-1.0, -1.0);
        let p1 = corner(1.0, -1.0);
        let p2 = corner(1.0, 1.0);
        let p3 = corner(-1.0, 1.0);

        mesh.push(Triangle::new(&p0, &p1, &p2), [*color; 3]);
        mesh.push(Triangle::new(&p0, &p2, &p3), [*color; 3]);
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_triangles() {
        let mesh = generate(1.0);

        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.vertex_count(), 36);
        assert_eq!(mesh.get_color_data().len(), 36);
    }

    #[test]
    fn corners_on_cube() {
        for point in generate(2.0).positions() {
            for coordinate in [point.get_x(), point.get_y(), point.get_z()] {
                assert_eq!(coordinate.abs(), 1.0);
            }
        }
    }

    #[test]
    fn faces_point_outwards() {
        for triangle in generate(1.0).get_triangles() {
            let [a, b, c] = triangle.get_points();
            let u = b - a;
            let v = c - a;
            let normal = Point3::new(
                u.get_y() * v.get_z() - u.get_z() * v.get_y(),
                u.get_z() * v.get_x() - u.get_x() * v.get_z(),
                u.get_x() * v.get_y() - u.get_y() * v.get_x(),
            );
            assert!(normal.dot(a) > 0.0);
        }
    }

    #[test]
    fn one_color_per_face() {
        let colors = generate(1.0).get_colors().to_vec();

        for (face, face_colors) in colors.chunks(6).enumerate() {
            assert!(face_colors.iter().all(|color| *color == FACE_COLORS[face]));
        }
    }
}
