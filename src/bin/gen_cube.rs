use clap::{Parser, ValueEnum};

use duducraft::utils::{format_vertex_array, generate_cube_vertices, VertexArrayFormat};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Rust,
    C,
}

impl From<Format> for VertexArrayFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Rust => VertexArrayFormat::Rust,
            Format::C => VertexArrayFormat::C,
        }
    }
}

/// Print the 36-vertex unit cube as an interleaved position + uv array
#[derive(Parser, Debug)]
#[command(name = "gen_cube")]
struct Cli {
    #[arg(long, value_enum, default_value_t = Format::Rust)]
    format: Format,
}

fn main() {
    let cli = Cli::parse();
    print!("{}", format_vertex_array(&generate_cube_vertices(), cli.format.into()));
}
