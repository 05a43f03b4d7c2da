use winit::{
    window::{Window, WindowBuilder},
    event_loop::{EventLoop, ControlFlow},
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
};
use thiserror::Error;
#[cfg(target_arch="wasm32")]
use wasm_bindgen::prelude::*;
use super::{
    CLEAR_COLOR,
    camera::Camera,
    config::Config,
    mesh::Mesh,
    render::{RenderState, NewRenderStateError},
    gpu_mesh::{GPUMesh, RenderError},
};

/// Starts the application in the browser with the default configuration
#[cfg(target_arch="wasm32")]
#[wasm_bindgen(start)]
pub async fn run_web() {
    run(Config::default()).await;
}

/// Runs the application
///
/// # Parameters
///
/// config: The configuration of the shape, its rotation and the window
pub async fn run(config: Config) {
    // Setup logging
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            if let Err(error) = console_log::init_with_level(log::Level::Warn) {
                web_sys::console::error_1(&format!("Couldn't initialize logger: {:?}", error).into());
            }
        } else {
            env_logger::init();
        }
    }

    log::info!("Starting with {:?}", config);

    // Create the event loop
    let event_loop = EventLoop::new();

    // Create the window
    let size = PhysicalSize::new(config.width, config.height);
    let window = WindowBuilder::new()
        .with_title("Spinning Sphere")
        .with_inner_size(size)
        .build(&event_loop);
    let window = match window {
        Ok(window) => window,
        Err(error) => {
            log::error!("Unable to open window: {:?}", error);
            return;
        }
    };

    // Create canvas for browser to draw in
    #[cfg(target_arch = "wasm32")]
    {
        use winit::platform::web::WindowExtWebSys;
        let attached = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| {
                let dst = doc.get_element_by_id("spinning-sphere")?;
                let canvas = web_sys::Element::from(window.canvas());
                dst.append_child(&canvas).ok()?;
                Some(())
            });
        if attached.is_none() {
            log::error!("Couldn't append canvas to the document");
            return;
        }
    }

    // Build the mesh once, it is never changed afterwards
    let mesh = config.build_mesh();
    log::info!("Built mesh with {} triangles", mesh.triangle_count());

    // Create the state
    let state = State::new(window, &mesh, config.rotation_step).await;
    let mut state = match state {
        Ok(state) => state,
        Err(error) => {
            log::error!("Unable to create state: {}", error);
            return;
        },
    };

    // Run the event loop
    event_loop.run(move |event, _, control_flow| state.handle_event(&event, control_flow));
}

/// Holds the state of the application
struct State {
    /// The main window
    window: Window,
    /// The render state
    render_state: RenderState,
    /// The inner size of the window
    size: PhysicalSize<u32>,
    /// The camera spinning the object
    camera: Camera,
    /// The mesh uploaded to the gpu
    gpu_mesh: GPUMesh,
}

impl State {
    /// Create a new state
    ///
    /// # Parameters
    ///
    /// window: The window to use for the application
    ///
    /// mesh: The mesh to render
    ///
    /// rotation_step: The angle to rotate the mesh every frame
    ///
    /// # Errors
    ///
    /// See NewStateError for the possible errors
    async fn new(window: Window, mesh: &Mesh, rotation_step: f64) -> Result<Self, NewStateError> {
        // Get the size of the window
        let size = window.inner_size();

        if size.width == 0 || size.height == 0 {
            return Err(NewStateError::InvalidSize(size));
        }

        // Initialize the render state
        let render_state = RenderState::new(&window).await?;

        // Upload the mesh
        let gpu_mesh = GPUMesh::new(mesh, &CLEAR_COLOR, wgpu::include_wgsl!("shader.wgsl"), &render_state);
        log::debug!("Uploaded {} vertices", gpu_mesh.get_vertex_count());

        let camera = Camera::new(rotation_step, &size);

        Ok(Self {
            window,
            render_state,
            size,
            camera,
            gpu_mesh,
        })
    }

    /// Render the screen
    ///
    /// # Errors
    ///
    /// See gpu_mesh::RenderError for the possible errors
    fn render(&self) -> Result<(), RenderError> {
        self.gpu_mesh.render(&self.camera, &self.render_state)
    }

    /// Handles all events from winit
    ///
    /// # Parameters
    ///
    /// event: The event to handle
    ///
    /// control_flow: The location to set the control flow
    fn handle_event(&mut self, event: &Event<'_, ()>, control_flow: &mut ControlFlow) {
        match event {
            // Run the window event handler
            Event::WindowEvent { window_id, event } => if *window_id == self.window.id() {
                self.handle_window_event(event, control_flow);
            }

            // Render the screen and advance the rotation
            Event::RedrawRequested(window_id) => if *window_id == self.window.id() {
                match self.render() {
                    Ok(_) => self.camera.update(),

                    // Reconfigure the surface if lost
                    Err(RenderError::SurfaceTexture(wgpu::SurfaceError::Lost)) => self.resize(self.size),

                    // The system is out of memory, we should probably quit
                    Err(RenderError::SurfaceTexture(wgpu::SurfaceError::OutOfMemory)) => {
                        *control_flow = ControlFlow::Exit;
                        log::error!("System is out of memory")
                    }

                    // All other errors (Outdated, Timeout) should be resolved by the next frame
                    Err(error) => log::warn!("Error while rendering: {}", error),
                }
            }

            // Request the next frame
            Event::MainEventsCleared => self.window.request_redraw(),

            _ => ()
        }
    }

    /// Handle a window event
    ///
    /// # Parameters
    ///
    /// event: The event to handle
    ///
    /// control_flow: The location to set the control flow
    fn handle_window_event(&mut self, event: &WindowEvent<'_>, control_flow: &mut ControlFlow) {
        match event {
            // Close the window
            WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,

            // The size of the window has changed
            WindowEvent::Resized(physical_size) => {
                self.resize(*physical_size);
            }

            // The window has been dragged into an area with a different scale factor
            WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                self.resize(**new_inner_size);
            }

            _ => (),
        }
    }

    /// Reconfigure if the window has been resized
    ///
    /// # Parameters
    ///
    /// new_size: The new size to set
    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        // A minimized window has no size
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.render_state.resize(new_size);
            self.camera.resize(&new_size);
        }
    }
}

/// The error types for when creating a new state
#[derive(Error, Debug, Clone)]
pub enum NewStateError {
    /// The width or height of the window is too small
    #[error("The width and height of the window must be larger than 0 but received {:?}", .0)]
    InvalidSize(PhysicalSize<u32>),
    /// The render state could not be created
    #[error("Unable to initialize the render state: {}", .0)]
    RenderInitError(NewRenderStateError),
}

impl From<NewRenderStateError> for NewStateError {
    fn from(value: NewRenderStateError) -> Self {
        Self::RenderInitError(value)
    }
}
