/// Error categories for setting up the window and GPU resources.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Failed to initialize GLFW or create the window.
    #[error("Initialization error: {0}")]
    Initialization(String),

    /// Shader compilation or linking errors.
    #[error("Shader error: {0}")]
    Shader(String),

    /// OpenGL resource creation errors.
    #[error("Resource error: {0}")]
    Resource(String),
}

impl Error {
    pub fn glfw_init_failed(detail: impl std::fmt::Debug) -> Self {
        Self::Initialization(format!("Failed to initialize GLFW: {detail:?}"))
    }

    pub fn window_creation_failed() -> Self {
        Self::Initialization("Failed to create window".to_string())
    }

    pub fn shader_compile_failed(stage: &str, log: String) -> Self {
        Self::Shader(format!("{stage} shader compilation failed: {log}"))
    }

    pub fn shader_link_failed(log: String) -> Self {
        Self::Shader(format!("Shader linking failed: {log}"))
    }

    pub fn uniform_location_failed(name: &str) -> Self {
        Self::Resource(format!("Failed to get uniform location: {name}"))
    }

    pub fn gl_error(code: u32) -> Self {
        Self::Resource(format!("OpenGL error 0x{code:04X}"))
    }
}
