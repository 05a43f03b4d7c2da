use super::{
    types::Point3,
    color::Color,
    mesh::{Mesh, Triangle},
};
use rand::Rng;

/// Approximates the unit sphere by recursively subdividing a tetrahedron.
/// The vertex colors are drawn from the thread local random number generator.
///
/// # Parameters
///
/// a, b, c, d: The corners of the tetrahedron, they are projected onto the unit sphere
///
/// depth: The number of subdivisions
pub fn tetrahedron(a: &Point3, b: &Point3, c: &Point3, d: &Point3, depth: u32) -> Mesh {
    tetrahedron_with_rng(a, b, c, d, depth, &mut rand::thread_rng())
}

/// Approximates the unit sphere by recursively subdividing a tetrahedron
///
/// # Parameters
///
/// a, b, c, d: The corners of the tetrahedron, they are projected onto the unit sphere
///
/// depth: The number of subdivisions
///
/// rng: The random number generator to draw the vertex colors from
pub fn tetrahedron_with_rng<R: Rng + ?Sized>(a: &Point3, b: &Point3, c: &Point3, d: &Point3, depth: u32, rng: &mut R) -> Mesh {
    let a = a.normalize();
    let b = b.normalize();
    let c = c.normalize();
    let d = d.normalize();

    let mut mesh = Mesh::with_capacity(triangle_count(depth));

    divide_triangle(&a, &b, &c, &d, depth, &mut mesh, rng);
    divide_triangle(&d, &c, &b, &a, depth, &mut mesh, rng);
    divide_triangle(&a, &d, &b, &c, depth, &mut mesh, rng);
    divide_triangle(&a, &c, &d, &b, depth, &mut mesh, rng);

    log::debug!("Tessellated sphere at depth {} into {} triangles", depth, mesh.triangle_count());

    mesh
}

/// The number of triangles produced by tetrahedron for the given depth
///
/// # Parameters
///
/// depth: The number of subdivisions
pub fn triangle_count(depth: u32) -> usize {
    8 * 5usize.pow(depth)
}

/// Subdivides the patch made of the triangles (a, b, c) and (a, c, d) which share the edge ac.
///
/// Every level splits both triangles at the edge midpoints into 8 smaller triangles,
/// grouped in 4 patches covering the parent. A fifth patch repeats the corner at a
/// together with the center of (a, b, c). Only midpoints of drawn edges are used so
/// no midpoint falls on the center of the sphere.
///
/// # Parameters
///
/// a, b, c, d: The corners of the patch
///
/// count: The number of subdivisions left
///
/// mesh: The mesh to add the final triangles to
///
/// rng: The random number generator for the vertex colors
fn divide_triangle<R: Rng + ?Sized>(a: &Point3, b: &Point3, c: &Point3, d: &Point3, count: u32, mesh: &mut Mesh, rng: &mut R) {
    if count == 0 {
        add_triangle(a, b, c, mesh, rng);
        add_triangle(a, c, d, mesh, rng);
        return;
    }

    // Project the edge midpoints onto the sphere
    let ab = a.mix(b, 0.5).normalize();
    let ac = a.mix(c, 0.5).normalize();
    let ad = a.mix(d, 0.5).normalize();
    let bc = b.mix(c, 0.5).normalize();
    let cd = c.mix(d, 0.5).normalize();

    let count = count - 1;

    divide_triangle(a, &ab, &ac, &ad, count, mesh, rng);
    divide_triangle(&ab, b, &bc, &ac, count, mesh, rng);
    divide_triangle(&ac, &bc, c, &cd, count, mesh, rng);
    divide_triangle(&ad, &ac, &cd, d, count, mesh, rng);
    divide_triangle(&ab, &bc, &ac, a, count, mesh, rng);
}

/// Adds a triangle with independently random vertex colors
fn add_triangle<R: Rng + ?Sized>(a: &Point3, b: &Point3, c: &Point3, mesh: &mut Mesh, rng: &mut R) {
    let colors = [Color::new_random(rng), Color::new_random(rng), Color::new_random(rng)];

    mesh.push(Triangle::new(a, b, c), colors);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TETRAHEDRON, DEPTH};
    use rand::{rngs::StdRng, SeedableRng};

    fn default_sphere(depth: u32, seed: u64) -> Mesh {
        let [a, b, c, d] = TETRAHEDRON;
        tetrahedron_with_rng(&a, &b, &c, &d, depth, &mut StdRng::seed_from_u64(seed))
    }

    fn longest_edge(mesh: &Mesh) -> f64 {
        mesh.get_triangles()
            .iter()
            .flat_map(|triangle| triangle.get_edges())
            .map(|(p, q)| (p - q).length())
            .fold(0.0, f64::max)
    }

    #[test]
    fn depth_zero_gives_eight_triangles() {
        let mesh = default_sphere(0, 1);

        assert_eq!(mesh.triangle_count(), 8);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.get_position_data().len(), 24);
        assert_eq!(mesh.get_color_data().len(), 24);
    }

    #[test]
    fn depth_one_gives_forty_triangles() {
        let mesh = default_sphere(1, 1);

        assert_eq!(mesh.triangle_count(), 40);
        assert_eq!(mesh.vertex_count(), 120);
    }

    #[test]
    fn counts_match_closed_form() {
        assert_eq!(triangle_count(0), 8);
        assert_eq!(triangle_count(1), 40);
        assert_eq!(triangle_count(2), 200);
        assert_eq!(triangle_count(3), 1000);

        for depth in 0..5 {
            let mesh = default_sphere(depth, 3);
            assert_eq!(mesh.triangle_count(), triangle_count(depth));
            assert_eq!(mesh.get_colors().len(), 3 * mesh.triangle_count());
        }
    }

    #[test]
    fn vertices_lie_on_unit_sphere() {
        for depth in 0..5 {
            for point in default_sphere(depth, 5).positions() {
                assert!((point.length() - 1.0).abs() < 1e-6, "vertex {:?} at depth {} is off the sphere", point, depth);
            }
        }
    }

    #[test]
    fn arbitrary_tetrahedron_is_projected() {
        let a = Point3::new(0.0, 0.0, -3.0);
        let b = Point3::new(0.0, 2.0, 1.0);
        let c = Point3::new(-2.0, -1.0, 0.5);
        let d = Point3::new(5.0, -1.0, 1.0);
        let mesh = tetrahedron_with_rng(&a, &b, &c, &d, 2, &mut StdRng::seed_from_u64(11));

        for point in mesh.positions() {
            assert!((point.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn colors_in_unit_interval() {
        for color in default_sphere(3, 9).get_color_data() {
            for component in color {
                assert!((0.0..1.0).contains(&component));
            }
        }
    }

    #[test]
    fn deeper_is_finer() {
        let meshes: Vec<Mesh> = (0..5).map(|depth| default_sphere(depth, 13)).collect();

        for pair in meshes.windows(2) {
            assert!(pair[1].triangle_count() > pair[0].triangle_count());
            assert!(longest_edge(&pair[1]) < longest_edge(&pair[0]));
        }
    }

    #[test]
    fn geometry_is_deterministic() {
        let [a, b, c, d] = TETRAHEDRON;
        let first = tetrahedron(&a, &b, &c, &d, DEPTH);
        let second = tetrahedron(&a, &b, &c, &d, DEPTH);

        assert_eq!(first.get_triangles(), second.get_triangles());
    }

    #[test]
    fn seeded_colors_repeat() {
        let first = default_sphere(2, 42);
        let second = default_sphere(2, 42);

        assert_eq!(first.get_colors(), second.get_colors());
    }

    #[test]
    fn winding_is_consistent() {
        // All triangles of the default tetrahedron face the same way relative to the center
        let signs: Vec<bool> = default_sphere(3, 0).get_triangles()
            .iter()
            .map(|triangle| {
                let [a, b, c] = triangle.get_points();
                let u = b - a;
                let v = c - a;
                let normal = Point3::new(
                    u.get_y() * v.get_z() - u.get_z() * v.get_y(),
                    u.get_z() * v.get_x() - u.get_x() * v.get_z(),
                    u.get_x() * v.get_y() - u.get_y() * v.get_x(),
                );
                normal.dot(a) > 0.0
            })
            .collect();

        assert!(signs.iter().all(|&sign| sign == signs[0]));
    }
}
