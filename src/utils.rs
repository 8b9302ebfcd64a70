use std::fmt::Write;

use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub uv: [f32; 2],
}

pub const CUBE_VERTEX_COUNT: u32 = 36;

const fn v(x: f32, y: f32, z: f32, u: f32, w: f32) -> Vertex {
    Vertex { pos: [x, y, z], uv: [u, w] }
}

/// Unit cube centred on the origin: six quads, two triangles each.
/// Emitted by the `gen_cube` binary; `generate_cube_vertices` must agree with it.
#[rustfmt::skip]
pub const CUBE_VERTICES: [Vertex; CUBE_VERTEX_COUNT as usize] = [
    // front
    v(-0.5,  0.5,  0.5, 0.0, 1.0),
    v( 0.5,  0.5,  0.5, 1.0, 1.0),
    v( 0.5, -0.5,  0.5, 1.0, 0.0),
    v( 0.5, -0.5,  0.5, 1.0, 0.0),
    v(-0.5, -0.5,  0.5, 0.0, 0.0),
    v(-0.5,  0.5,  0.5, 0.0, 1.0),
    // back
    v( 0.5,  0.5, -0.5, 0.0, 1.0),
    v(-0.5,  0.5, -0.5, 1.0, 1.0),
    v(-0.5, -0.5, -0.5, 1.0, 0.0),
    v(-0.5, -0.5, -0.5, 1.0, 0.0),
    v( 0.5, -0.5, -0.5, 0.0, 0.0),
    v( 0.5,  0.5, -0.5, 0.0, 1.0),
    // left
    v(-0.5,  0.5, -0.5, 0.0, 1.0),
    v(-0.5,  0.5,  0.5, 1.0, 1.0),
    v(-0.5, -0.5,  0.5, 1.0, 0.0),
    v(-0.5, -0.5,  0.5, 1.0, 0.0),
    v(-0.5, -0.5, -0.5, 0.0, 0.0),
    v(-0.5,  0.5, -0.5, 0.0, 1.0),
    // right
    v( 0.5,  0.5,  0.5, 0.0, 1.0),
    v( 0.5,  0.5, -0.5, 1.0, 1.0),
    v( 0.5, -0.5, -0.5, 1.0, 0.0),
    v( 0.5, -0.5, -0.5, 1.0, 0.0),
    v( 0.5, -0.5,  0.5, 0.0, 0.0),
    v( 0.5,  0.5,  0.5, 0.0, 1.0),
    // top
    v(-0.5,  0.5, -0.5, 0.0, 1.0),
    v( 0.5,  0.5, -0.5, 1.0, 1.0),
    v( 0.5,  0.5,  0.5, 1.0, 0.0),
    v( 0.5,  0.5,  0.5, 1.0, 0.0),
    v(-0.5,  0.5,  0.5, 0.0, 0.0),
    v(-0.5,  0.5, -0.5, 0.0, 1.0),
    // bottom
    v( 0.5, -0.5, -0.5, 0.0, 1.0),
    v(-0.5, -0.5, -0.5, 1.0, 1.0),
    v(-0.5, -0.5,  0.5, 1.0, 0.0),
    v(-0.5, -0.5,  0.5, 1.0, 0.0),
    v( 0.5, -0.5,  0.5, 0.0, 0.0),
    v( 0.5, -0.5, -0.5, 0.0, 1.0),
];

/// Builds the cube from its eight corners. Each quad `a b c d` is split into
/// `a b c` and `c d a`, with texture corners (0,1) (1,1) (1,0) and (1,0) (0,0) (0,1).
pub fn generate_cube_vertices() -> Vec<Vertex> {
    let front = [[-0.5, 0.5, 0.5], [0.5, 0.5, 0.5], [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5]];
    let back = [[-0.5, 0.5, -0.5], [0.5, 0.5, -0.5], [0.5, -0.5, -0.5], [-0.5, -0.5, -0.5]];
    let [v1, v2, v3, v4] = front;
    let [v5, v6, v7, v8] = back;

    let quads = [
        [v1, v2, v3, v4], // front
        [v6, v5, v8, v7], // back
        [v5, v1, v4, v8], // left
        [v2, v6, v7, v3], // right
        [v5, v6, v2, v1], // top
        [v7, v8, v4, v3], // bottom
    ];

    let mut vertices = Vec::with_capacity(CUBE_VERTEX_COUNT as usize);
    for [a, b, c, d] in quads {
        vertices.push(Vertex { pos: a, uv: [0.0, 1.0] });
        vertices.push(Vertex { pos: b, uv: [1.0, 1.0] });
        vertices.push(Vertex { pos: c, uv: [1.0, 0.0] });
        vertices.push(Vertex { pos: c, uv: [1.0, 0.0] });
        vertices.push(Vertex { pos: d, uv: [0.0, 0.0] });
        vertices.push(Vertex { pos: a, uv: [0.0, 1.0] });
    }
    vertices
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexArrayFormat {
    /// `pub const CUBE_VERTICES: [f32; N] = [...]`
    Rust,
    /// `float vertices[] = {...};`
    C,
}

/// Renders vertices as an interleaved `x, y, z, u, v` float literal.
pub fn format_vertex_array(vertices: &[Vertex], format: VertexArrayFormat) -> String {
    let mut out = String::new();
    let floats = vertices.len() * 5;
    let (open, close) = match format {
        VertexArrayFormat::Rust => (format!("pub const CUBE_VERTICES: [f32; {floats}] = ["), "];"),
        VertexArrayFormat::C => ("float vertices[] = {".to_string(), "};"),
    };

    out.push_str(&open);
    out.push('\n');
    for vert in vertices {
        let [x, y, z] = vert.pos;
        let [u, w] = vert.uv;
        // writing into a String cannot fail
        let _ = writeln!(out, "\t{x:4.1},{y:4.1},{z:4.1}, {u:.1}, {w:.1},");
    }
    out.push_str(close);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_cube_matches_embedded_array() {
        assert_eq!(generate_cube_vertices(), CUBE_VERTICES.to_vec());
    }

    #[test]
    fn every_face_has_two_triangles_on_one_plane() {
        for (face, tri) in CUBE_VERTICES.chunks(6).enumerate() {
            // each face shares one coordinate that sits at +/-0.5
            let shared = (0..3).find(|&axis| tri.iter().all(|v| v.pos[axis] == tri[0].pos[axis]));
            let axis = shared.unwrap_or_else(|| panic!("face {face} is not axis aligned"));
            assert_eq!(tri[0].pos[axis].abs(), 0.5);
        }
    }

    #[test]
    fn c_output_has_one_line_per_vertex() {
        let text = format_vertex_array(&CUBE_VERTICES, VertexArrayFormat::C);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.first(), Some(&"float vertices[] = {"));
        assert_eq!(lines.last(), Some(&"};"));
        assert_eq!(lines.len(), CUBE_VERTEX_COUNT as usize + 2);
        assert_eq!(lines[1], "\t-0.5, 0.5, 0.5, 0.0, 1.0,");
    }

    #[test]
    fn rust_output_declares_array_length() {
        let text = format_vertex_array(&CUBE_VERTICES, VertexArrayFormat::Rust);
        assert!(text.starts_with("pub const CUBE_VERTICES: [f32; 180] = ["));
        assert!(text.trim_end().ends_with("];"));
    }
}
