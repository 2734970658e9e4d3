use gl::types::{GLchar, GLenum, GLint, GLuint};
use log::error;

use crate::error::Error;

pub const LINE_VERTEX_SHADER: &str = r#"#version 330 core
layout(location = 0) in vec2 i_position;
layout(location = 1) in vec4 i_color;

uniform vec2 u_resolution;

out vec4 v_color;

void main() {
    // Pixel space with a top-left origin to clip space
    vec2 ndc = (i_position / u_resolution) * 2.0 - 1.0;
    gl_Position = vec4(ndc.x, -ndc.y, 0.0, 1.0);
    v_color = i_color;
}
"#;

pub const LINE_FRAGMENT_SHADER: &str = r#"#version 330 core
in vec4 v_color;
out vec4 o_color;

void main() {
    o_color = v_color;
}
"#;

pub struct Shader {
    pub program: GLuint,
}

impl Shader {
    pub fn new(vertex_source: &str, fragment_source: &str) -> Result<Self, Error> {
        let vertex = compile_shader_part(gl::VERTEX_SHADER, vertex_source)?;
        let fragment = match compile_shader_part(gl::FRAGMENT_SHADER, fragment_source) {
            Ok(fragment) => fragment,
            Err(err) => {
                unsafe { gl::DeleteShader(vertex) };
                return Err(err);
            }
        };

        unsafe {
            let program = gl::CreateProgram();
            gl::AttachShader(program, vertex);
            gl::AttachShader(program, fragment);
            gl::LinkProgram(program);

            // Parts are no longer needed once linked
            gl::DeleteShader(vertex);
            gl::DeleteShader(fragment);

            let mut result = 0;
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut result);
            if result == gl::FALSE as GLint {
                let log = program_info_log(program);
                gl::DeleteProgram(program);
                error!("shader link error:\n{log}");
                return Err(Error::shader_link_failed(log));
            }

            Ok(Shader { program })
        }
    }

    pub fn uniform_location(&self, name: &str) -> Result<GLint, Error> {
        let c_name = format!("{name}\0");
        let location =
            unsafe { gl::GetUniformLocation(self.program, c_name.as_ptr() as *const GLchar) };
        if location < 0 {
            return Err(Error::uniform_location_failed(name));
        }
        Ok(location)
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.program) };
    }
}

fn compile_shader_part(shader_type: GLenum, source: &str) -> Result<GLuint, Error> {
    let source_len = source.len() as GLint;

    unsafe {
        // Create shader part
        let shader = gl::CreateShader(shader_type);
        gl::ShaderSource(shader, 1, &source.as_bytes().as_ptr().cast(), &source_len);
        gl::CompileShader(shader);

        // Check for errors
        let mut result = 0;
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut result);
        if result == gl::FALSE as GLint {
            let mut log_length = 0;
            gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut log_length);
            let mut message: Vec<u8> = vec![0; log_length.max(0) as usize];
            gl::GetShaderInfoLog(
                shader,
                log_length,
                std::ptr::null_mut(),
                message.as_mut_ptr().cast(),
            );
            gl::DeleteShader(shader);

            let stage = if shader_type == gl::VERTEX_SHADER {
                "Vertex"
            } else {
                "Fragment"
            };
            let log = trim_log(&message);
            error!("{stage} shader compilation error:\n{log}");
            return Err(Error::shader_compile_failed(stage, log));
        }

        Ok(shader)
    }
}

fn program_info_log(program: GLuint) -> String {
    unsafe {
        let mut log_length = 0;
        gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut log_length);
        let mut message: Vec<u8> = vec![0; log_length.max(0) as usize];
        gl::GetProgramInfoLog(
            program,
            log_length,
            std::ptr::null_mut(),
            message.as_mut_ptr().cast(),
        );
        trim_log(&message)
    }
}

fn trim_log(message: &[u8]) -> String {
    String::from_utf8_lossy(message)
        .trim_end_matches('\0')
        .trim_end()
        .to_string()
}
