use web_sys::{WebGl2RenderingContext as GL, WebGlProgram, WebGlShader, WebGlUniformLocation};

use crate::error::SetupError;

pub const POSITION_ATTRIBUTE: &str = "position";

/// Uniform slots the fragment shader may declare. A slot the driver optimised
/// away resolves to `None` and is skipped when drawing.
pub struct Uniforms {
    pub time: Option<WebGlUniformLocation>,
    pub resolution: Option<WebGlUniformLocation>,
    pub zoom: Option<WebGlUniformLocation>,
    pub mouse: Option<WebGlUniformLocation>,
    pub pan: Option<WebGlUniformLocation>,
}

impl Uniforms {
    pub fn locate(gl: &GL, program: &WebGlProgram) -> Self {
        Self {
            time: gl.get_uniform_location(program, "iTime"),
            resolution: gl.get_uniform_location(program, "iResolution"),
            zoom: gl.get_uniform_location(program, "zoom"),
            mouse: gl.get_uniform_location(program, "mousePos"),
            pan: gl.get_uniform_location(program, "pan"),
        }
    }
}

pub fn compile(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, SetupError> {
    let stage = if kind == GL::VERTEX_SHADER { "vertex" } else { "fragment" };
    let shader = gl.create_shader(kind).ok_or(SetupError::Resource("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let ok = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(SetupError::Compile { stage, log })
    }
}

/// Compiles both stages and links them into a program.
pub fn build_program(gl: &GL, vertex: &str, fragment: &str) -> Result<WebGlProgram, SetupError> {
    let vs = compile(gl, GL::VERTEX_SHADER, vertex)?;
    let fs = compile(gl, GL::FRAGMENT_SHADER, fragment)?;

    let program = gl.create_program().ok_or(SetupError::Resource("program"))?;
    gl.attach_shader(&program, &vs);
    gl.attach_shader(&program, &fs);
    gl.link_program(&program);

    // Stages are owned by the program once linked.
    gl.delete_shader(Some(&vs));
    gl.delete_shader(Some(&fs));

    let ok = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(SetupError::Link(log))
    }
}

pub fn attribute_location(gl: &GL, program: &WebGlProgram) -> Result<u32, SetupError> {
    let loc = gl.get_attrib_location(program, POSITION_ATTRIBUTE);
    u32::try_from(loc).map_err(|_| SetupError::MissingAttribute(POSITION_ATTRIBUTE))
}
