use super::{
    CAMERA_DISTANCE, FOV_Y, NEAR, FAR,
    types::{Matrix4, Point3},
};

/// Describes how the object is viewed, the object spins around the y-axis a fixed angle every frame
pub struct Camera {
    /// The current rotation angle of the object
    rotation: f64,
    /// The angle to add to the rotation every frame
    rotation_step: f64,
    /// The width divided by the height of the window
    aspect: f64,
}

impl Camera {
    /// Creates a new camera
    ///
    /// # Parameters
    ///
    /// rotation_step: The angle to rotate every frame
    ///
    /// size: The current size of the window
    pub fn new(rotation_step: f64, size: &winit::dpi::PhysicalSize<u32>) -> Self {
        Self {
            rotation: 0.0,
            rotation_step,
            aspect: Self::size_to_aspect(size),
        }
    }

    /// Recalculates the aspect ratio after resizing
    ///
    /// # Parameters
    ///
    /// size: The new size of the window
    pub fn resize(&mut self, size: &winit::dpi::PhysicalSize<u32>) {
        self.aspect = Self::size_to_aspect(size);
    }

    /// Advances the rotation by one step, should be run once per frame
    pub fn update(&mut self) {
        self.rotation += self.rotation_step;
    }

    /// Retrieves the current rotation angle
    pub fn get_rotation(&self) -> f64 {
        self.rotation
    }

    /// Retrieves the aspect ratio
    pub fn get_aspect(&self) -> f64 {
        self.aspect
    }

    /// Retrieves the model view matrix, the object is rotated and then moved away from the viewer
    pub fn get_model_view(&self) -> Matrix4 {
        Matrix4::translation(&Point3::new(0.0, 0.0, -CAMERA_DISTANCE)) * Matrix4::rotation_y(self.rotation)
    }

    /// Retrieves the projection matrix
    pub fn get_projection(&self) -> Matrix4 {
        Matrix4::perspective(FOV_Y, self.aspect, NEAR, FAR)
    }

    /// Retrieves the data for the uniform buffer
    pub fn get_data(&self) -> CameraUniform {
        CameraUniform {
            model_view: self.get_model_view().get_data(),
            projection: self.get_projection().get_data(),
        }
    }

    /// Converts a size to an aspect ratio, a window without height is treated as square
    ///
    /// # Parameters
    ///
    /// size: The size of the window
    fn size_to_aspect(size: &winit::dpi::PhysicalSize<u32>) -> f64 {
        if size.width == 0 || size.height == 0 {
            return 1.0;
        }

        (size.width as f64) / (size.height as f64)
    }
}

/// The matrices as laid out in the uniform buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// The model view matrix
    model_view: [[f32; 4]; 4],
    /// The projection matrix
    projection: [[f32; 4]; 4],
}
