use std::ops::{Mul, Add, Sub};

/// A 3D point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point3 {
    /// The x-coordinate
    x: f64,
    /// The y-coordinate
    y: f64,
    /// The z-coordinate
    z: f64,
}

impl Point3 {
    /// Creates a new point
    ///
    /// # Parameters
    ///
    /// x: The x-coordinate
    ///
    /// y: The y-coordinate
    ///
    /// z: The z-coordinate
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
        }
    }

    /// Retrieves the x-coordinate
    pub fn get_x(&self) -> f64 {
        self.x
    }

    /// Retrieves the y-coordinate
    pub fn get_y(&self) -> f64 {
        self.y
    }

    /// Retrieves the z-coordinate
    pub fn get_z(&self) -> f64 {
        self.z
    }

    /// Retrieves the data for the gpu
    pub fn get_data(&self) -> [f32; 3] {
        [self.x as f32, self.y as f32, self.z as f32]
    }

    /// Calculates the dot product with another point
    ///
    /// # Parameters
    ///
    /// other: The point to dot with
    pub fn dot(&self, other: &Point3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the euclidean length of the point seen as a vector from origo
    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Scales the point to have length 1, the zero point is returned unchanged
    pub fn normalize(&self) -> Self {
        let length = self.length();

        if length == 0.0 {
            return *self;
        }

        self * (1.0 / length)
    }

    /// Linearly interpolates between this point (t = 0) and other (t = 1)
    ///
    /// # Parameters
    ///
    /// other: The point to interpolate towards
    ///
    /// t: The interpolation parameter
    pub fn mix(&self, other: &Point3, t: f64) -> Self {
        self * (1.0 - t) + other * t
    }
}

impl Add<Point3> for Point3 {
    type Output = Point3;

    fn add(self, rhs: Point3) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Add<&Point3> for &Point3 {
    type Output = Point3;

    fn add(self, rhs: &Point3) -> Self::Output {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub<Point3> for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Point3) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Sub<&Point3> for &Point3 {
    type Output = Point3;

    fn sub(self, rhs: &Point3) -> Self::Output {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Point3 {
    type Output = Point3;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<f64> for &Point3 {
    type Output = Point3;

    fn mul(self, rhs: f64) -> Self::Output {
        Point3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Defines a 4x4 matrix acting on homogeneous coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix4 {
    /// The values of the matrix
    values: [[f64; 4]; 4],
}

impl Matrix4 {
    /// Creates a new matrix
    ///
    /// # Parameters
    ///
    /// values: The values of the matrix, first index is row, second index is column
    pub fn new(values: &[[f64; 4]; 4]) -> Self {
        Self { values: *values }
    }

    /// Creates the identity matrix
    pub fn identity() -> Self {
        Self::new(&[
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Translates a point
    ///
    /// # Parameters
    ///
    /// offset: The amount to translate
    pub fn translation(offset: &Point3) -> Self {
        Self::new(&[
            [1.0, 0.0, 0.0, offset.x],
            [0.0, 1.0, 0.0, offset.y],
            [0.0, 0.0, 1.0, offset.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotate around the y-axis, a positive angle turns the z-axis towards the x-axis
    ///
    /// # Parameters
    ///
    /// angle: The angle to rotate
    pub fn rotation_y(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();

        Self::new(&[
            [cos, 0.0, sin, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-sin, 0.0, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// A right handed perspective projection looking down the negative z-axis.
    /// Depth is mapped such that the near plane ends at 0 and the far plane at 1.
    ///
    /// # Parameters
    ///
    /// fov_y: The vertical field of view in radians
    ///
    /// aspect: The width divided by the height of the screen
    ///
    /// near: The distance to the near plane
    ///
    /// far: The distance to the far plane
    ///
    /// # Panics
    ///
    /// In debug mode it panics if near and far are equal
    pub fn perspective(fov_y: f64, aspect: f64, near: f64, far: f64) -> Self {
        if cfg!(debug_assertions) && near == far {
            panic!("The near and far planes must differ but both are {:?}", near);
        }

        let focal = 1.0 / (0.5 * fov_y).tan();
        let range = 1.0 / (near - far);

        Self::new(&[
            [focal / aspect, 0.0, 0.0, 0.0],
            [0.0, focal, 0.0, 0.0],
            [0.0, 0.0, far * range, near * far * range],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// Applies the matrix to a point with w = 1 and returns the homogeneous result
    ///
    /// # Parameters
    ///
    /// point: The point to transform
    pub fn transform(&self, point: &Point3) -> [f64; 4] {
        let input = [point.x, point.y, point.z, 1.0];
        let mut output = [0.0; 4];

        for (row, value) in self.values.iter().zip(output.iter_mut()) {
            *value = row.iter().zip(input.iter()).map(|(a, b)| a * b).sum();
        }

        output
    }

    /// Retrieves the data for the gpu, the outer index is the column
    pub fn get_data(&self) -> [[f32; 4]; 4] {
        let mut data = [[0.0; 4]; 4];

        for (column, column_data) in data.iter_mut().enumerate() {
            for (row, value) in column_data.iter_mut().enumerate() {
                *value = self.values[row][column] as f32;
            }
        }

        data
    }
}

impl Mul<Matrix4> for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Self::Output {
        let mut values = [[0.0; 4]; 4];

        for (row, row_values) in values.iter_mut().enumerate() {
            for (column, value) in row_values.iter_mut().enumerate() {
                *value = (0..4).map(|id| self.values[row][id] * rhs.values[id][column]).sum();
            }
        }

        Self::new(&values)
    }
}

impl Mul<Point3> for Matrix4 {
    type Output = Point3;

    /// Transforms the point and divides by w
    fn mul(self, rhs: Point3) -> Self::Output {
        let [x, y, z, w] = self.transform(&rhs);

        Point3::new(x / w, y / w, z / w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn normalize_gives_unit_length() {
        let point = Point3::new(3.0, -4.0, 12.0).normalize();

        assert!((point.length() - 1.0).abs() < EPSILON);
        assert!((point.get_x() - 3.0 / 13.0).abs() < EPSILON);
    }

    #[test]
    fn normalize_keeps_zero() {
        let point = Point3::new(0.0, 0.0, 0.0);

        assert_eq!(point.normalize(), point);
    }

    #[test]
    fn mix_halfway() {
        let a = Point3::new(1.0, 0.0, 2.0);
        let b = Point3::new(3.0, -2.0, 0.0);

        assert_eq!(a.mix(&b, 0.5), Point3::new(2.0, -1.0, 1.0));
        assert_eq!(a.mix(&b, 0.0), a);
    }

    #[test]
    fn rotation_preserves_length() {
        let point = Point3::new(0.3, -1.2, 0.7);
        let rotated = Matrix4::rotation_y(1.234) * point;

        assert!((rotated.length() - point.length()).abs() < EPSILON);
        assert!((rotated.get_y() - point.get_y()).abs() < EPSILON);
    }

    #[test]
    fn rotation_quarter_turn_moves_z_to_x() {
        let rotated = Matrix4::rotation_y(0.5 * std::f64::consts::PI) * Point3::new(0.0, 0.0, 1.0);

        assert!((rotated.get_x() - 1.0).abs() < EPSILON);
        assert!(rotated.get_z().abs() < EPSILON);
    }

    #[test]
    fn translation_then_identity() {
        let transform = Matrix4::identity() * Matrix4::translation(&Point3::new(0.0, 0.0, -6.0));
        let moved = transform * Point3::new(1.0, 2.0, 3.0);

        assert_eq!(moved, Point3::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn perspective_maps_near_and_far() {
        let projection = Matrix4::perspective(std::f64::consts::PI / 3.0, 1.5, 0.1, 100.0);

        let near = projection * Point3::new(0.0, 0.0, -0.1);
        let far = projection * Point3::new(0.0, 0.0, -100.0);

        assert!(near.get_z().abs() < 1e-9);
        assert!((far.get_z() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn gpu_data_is_column_major() {
        let data = Matrix4::translation(&Point3::new(1.0, 2.0, 3.0)).get_data();

        assert_eq!(data[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(data[0], [1.0, 0.0, 0.0, 0.0]);
    }
}
