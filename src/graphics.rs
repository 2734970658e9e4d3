use std::{mem::size_of, sync::mpsc::Receiver};

use bytemuck::{Pod, Zeroable};
use gl::types::{GLint, GLsizei, GLsizeiptr, GLuint};
use glam::Vec2;
use glfw::{Action, Context, Glfw, Window, WindowEvent};
use log::{debug, info};
use memoffset::offset_of;

use crate::{
    config::{Color, WindowConfig},
    error::Error,
    input::{Key, MouseButton, UserInput},
    pipeline::LineRenderer,
    shader::{Shader, LINE_FRAGMENT_SHADER, LINE_VERTEX_SHADER},
};

#[derive(Debug, Copy, Clone, Pod, Zeroable)]
#[repr(C)]
pub struct LineQueueEntry {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

// GL objects are declared before the window so they drop while the context
// is still alive.
pub struct Renderer {
    // Line rendering
    line_shader: Shader,
    u_resolution: GLint,
    line_vao: GLuint,
    line_vbo: GLuint,
    line_queue: Vec<LineQueueEntry>,

    // Window stuff
    caption: String,
    resolution: Vec2,
    events: Receiver<(f64, WindowEvent)>,
    window: Window,
    glfw: Glfw,
}

impl Renderer {
    pub fn new(config: &WindowConfig) -> Result<Self, Error> {
        // Initialize GLFW
        let mut glfw = glfw::init(glfw::FAIL_ON_ERRORS).map_err(Error::glfw_init_failed)?;
        glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
        glfw.window_hint(glfw::WindowHint::Resizable(false));

        // Create window
        let (mut window, events) = glfw
            .create_window(
                config.width,
                config.height,
                &config.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or_else(Error::window_creation_failed)?;

        // Set context to this window
        glfw.make_context_current(Some(&window));
        glfw.set_swap_interval(glfw::SwapInterval::Sync(1));
        window.set_key_polling(true);
        window.set_mouse_button_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_close_polling(true);

        // Init OpenGL
        gl::load_with(|f_name| glfw.get_proc_address_raw(f_name));

        let line_shader = Shader::new(LINE_VERTEX_SHADER, LINE_FRAGMENT_SHADER)?;
        let u_resolution = line_shader.uniform_location("u_resolution")?;

        let mut line_vao = 0;
        let mut line_vbo = 0;
        unsafe {
            // Create GPU buffers
            gl::GenVertexArrays(1, &mut line_vao);
            gl::GenBuffers(1, &mut line_vbo);

            // Bind GPU buffers
            gl::BindVertexArray(line_vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, line_vbo);

            // Define vertex layout
            gl::VertexAttribPointer(
                0,
                2,
                gl::FLOAT,
                gl::FALSE,
                size_of::<LineQueueEntry>() as GLsizei,
                offset_of!(LineQueueEntry, position) as *const _,
            );
            gl::VertexAttribPointer(
                1,
                4,
                gl::FLOAT,
                gl::FALSE,
                size_of::<LineQueueEntry>() as GLsizei,
                offset_of!(LineQueueEntry, color) as *const _,
            );
            gl::EnableVertexAttribArray(0);
            gl::EnableVertexAttribArray(1);

            // Unbind buffer
            gl::BindVertexArray(0);
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);

            let error = gl::GetError();
            if error != gl::NO_ERROR {
                return Err(Error::gl_error(error));
            }
        }

        info!(
            "window \"{}\" created at {}x{}",
            config.title, config.width, config.height
        );

        Ok(Renderer {
            line_shader,
            u_resolution,
            line_vao,
            line_vbo,
            line_queue: Vec::new(),
            caption: config.title.clone(),
            resolution: Vec2::new(config.width as f32, config.height as f32),
            events,
            window,
            glfw,
        })
    }

    /// Polls the window and feeds this frame's device state into `input`.
    /// Returns false once the window has been asked to close.
    pub fn process_events(&mut self, input: &mut UserInput) -> bool {
        input.new_frame();
        self.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&self.events) {
            match event {
                WindowEvent::Key(key, _, action, _) => {
                    if let Some(key) = map_key(key) {
                        input.set_key(key, action != Action::Release);
                    }
                }
                WindowEvent::MouseButton(button, action, _) => {
                    if let Some(button) = map_mouse_button(button) {
                        input.set_mouse_button(button, action != Action::Release);
                    }
                }
                WindowEvent::CursorPos(x, y) => {
                    input.set_mouse_pos(Vec2::new(x as f32, y as f32));
                }
                WindowEvent::Close => {
                    debug!("close requested");
                    self.window.set_should_close(true);
                }
                _ => {}
            }
        }
        !self.window.should_close()
    }

    pub fn begin_frame(&mut self) {
        self.line_queue.clear();
        unsafe {
            gl::ClearColor(0.1, 0.1, 0.1, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    pub fn end_frame(&mut self) {
        let (width, height) = self.window.get_framebuffer_size();

        // Render line queue
        unsafe {
            gl::Viewport(0, 0, width, height);
            if !self.line_queue.is_empty() {
                gl::UseProgram(self.line_shader.program);
                gl::Uniform2f(self.u_resolution, self.resolution.x, self.resolution.y);
                gl::BindVertexArray(self.line_vao);
                gl::BindBuffer(gl::ARRAY_BUFFER, self.line_vbo);

                // Populate vertex buffer
                let bytes: &[u8] = bytemuck::cast_slice(&self.line_queue);
                gl::BufferData(
                    gl::ARRAY_BUFFER,
                    bytes.len() as GLsizeiptr,
                    bytes.as_ptr().cast(),
                    gl::STREAM_DRAW,
                );
                gl::DrawArrays(gl::LINES, 0, self.line_queue.len() as GLsizei);

                // Unbind buffer
                gl::BindVertexArray(0);
                gl::BindBuffer(gl::ARRAY_BUFFER, 0);
            }
        }

        // Swap front and back buffers
        self.window.swap_buffers();
    }

    /// Shows `caption` in the title bar, only touching the window when it
    /// changes.
    pub fn set_caption(&mut self, caption: &str) {
        if caption != self.caption {
            self.window.set_title(caption);
            self.caption = caption.to_string();
        }
    }
}

impl LineRenderer for Renderer {
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let color = unpack_color(color);
        self.line_queue.push(LineQueueEntry {
            position: [x0 as f32, y0 as f32],
            color,
        });
        self.line_queue.push(LineQueueEntry {
            position: [x1 as f32, y1 as f32],
            color,
        });
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.line_vbo);
            gl::DeleteVertexArrays(1, &self.line_vao);
        }
        info!("renderer shut down");
    }
}

/// `0xRRGGBBAA` to normalized RGBA.
pub fn unpack_color(color: Color) -> [f32; 4] {
    color.to_be_bytes().map(|c| c as f32 / 255.0)
}

fn map_key(key: glfw::Key) -> Option<Key> {
    match key {
        glfw::Key::W => Some(Key::W),
        glfw::Key::A => Some(Key::A),
        glfw::Key::S => Some(Key::S),
        glfw::Key::D => Some(Key::D),
        glfw::Key::Up => Some(Key::Up),
        glfw::Key::Down => Some(Key::Down),
        glfw::Key::Escape => Some(Key::Escape),
        glfw::Key::Tab => Some(Key::Tab),
        _ => None,
    }
}

fn map_mouse_button(button: glfw::MouseButton) -> Option<MouseButton> {
    match button {
        glfw::MouseButton::Button1 => Some(MouseButton::Left),
        glfw::MouseButton::Button2 => Some(MouseButton::Right),
        _ => None,
    }
}
