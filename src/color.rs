use rand::Rng;

/// Describes a rgb color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    /// The red component
    pub r: f32,
    /// The green component
    pub g: f32,
    /// The blue component
    pub b: f32,
}

impl Color {
    /// Creates a new rgb color
    ///
    /// # Parameters
    ///
    /// r: The red component
    ///
    /// g: The green component
    ///
    /// b: The blue component
    pub const fn new_rgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            r,
            g,
            b,
        }
    }

    /// Creates a new gray scale color, all color components are equal
    ///
    /// # Parameters
    ///
    /// g: The value of all the color components
    pub const fn new_gray(g: f32) -> Self {
        Self {
            r: g,
            g,
            b: g,
        }
    }

    /// Creates a color where every component is drawn uniformly from [0, 1)
    ///
    /// # Parameters
    ///
    /// rng: The random number generator to draw from
    pub fn new_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.gen(),
            g: rng.gen(),
            b: rng.gen(),
        }
    }

    /// Retrieves the data for the gpu
    pub fn get_data(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn random_components_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let color = Color::new_random(&mut rng);
            for component in color.get_data() {
                assert!((0.0..1.0).contains(&component), "component out of range: {}", component);
            }
        }
    }

    #[test]
    fn gray_has_equal_components() {
        assert_eq!(Color::new_gray(0.25), Color::new_rgb(0.25, 0.25, 0.25));
    }
}
