//! Text report of a frame's transform chain for terminal output
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use mtx3d_core::{Matrix4x4, Transformation, VertexData};
use std::io::{self, Write};

/// Column width for a single matrix entry
const ENTRY_WIDTH: usize = 11;

/// Unit quad in the XY plane, facing +Z, with texture coordinates
pub fn textured_quad() -> [VertexData; 4] {
    [
        VertexData::new([-1.0, -1.0, 0.0, 1.0], [0.0, 1.0]),
        VertexData::new([1.0, -1.0, 0.0, 1.0], [1.0, 1.0]),
        VertexData::new([1.0, 1.0, 0.0, 1.0], [1.0, 0.0]),
        VertexData::new([-1.0, 1.0, 0.0, 1.0], [0.0, 0.0]),
    ]
}

/// Writes matrices and projected vertices, highlighting non-finite values
pub struct MatrixReport {
    color: bool,
}

impl MatrixReport {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn write_frame<W: Write>(
        &self,
        writer: &mut W,
        frame: u32,
        transformation: &Transformation,
        vertices: &[VertexData],
    ) -> io::Result<()> {
        self.write_heading(writer, &format!("frame {frame}"))?;
        self.write_matrix(writer, "model", &transformation.model_matrix)?;
        self.write_matrix(writer, "view", &transformation.view_matrix)?;
        self.write_matrix(writer, "perspective", &transformation.perspective_matrix)?;
        self.write_vertices(writer, &transformation.mvp(), vertices)
    }

    pub fn write_matrix<W: Write>(
        &self,
        writer: &mut W,
        label: &str,
        matrix: &Matrix4x4,
    ) -> io::Result<()> {
        writer.queue(Print(format!("{label}:\n")))?;
        for row in 0..4 {
            writer.queue(Print("  ["))?;
            for col in 0..4 {
                self.write_value(writer, matrix.get(row, col))?;
            }
            writer.queue(Print(" ]\n"))?;
        }
        Ok(())
    }

    /// One line per vertex: clip position, NDC after the divide, texture coordinate
    pub fn write_vertices<W: Write>(
        &self,
        writer: &mut W,
        mvp: &Matrix4x4,
        vertices: &[VertexData],
    ) -> io::Result<()> {
        writer.queue(Print("vertices (clip | ndc | uv):\n"))?;
        for vertex in vertices {
            let clip = mvp.transform(vertex.position);
            let ndc = clip.xyz() / clip.w;

            writer.queue(Print("  "))?;
            for value in clip.iter() {
                self.write_value(writer, *value)?;
            }
            writer.queue(Print(" |"))?;
            for value in ndc.iter() {
                self.write_value(writer, *value)?;
            }
            writer.queue(Print(" |"))?;
            for value in vertex.texture_coordinate.iter() {
                self.write_value(writer, *value)?;
            }
            writer.queue(Print('\n'))?;
        }
        Ok(())
    }

    fn write_heading<W: Write>(&self, writer: &mut W, text: &str) -> io::Result<()> {
        if self.color {
            writer.queue(SetForegroundColor(Color::Yellow))?;
        }
        writer.queue(Print(format!("== {text}\n")))?;
        if self.color {
            writer.queue(ResetColor)?;
        }
        Ok(())
    }

    fn write_value<W: Write>(&self, writer: &mut W, value: f32) -> io::Result<()> {
        let text = format!("{:>width$.4}", value, width = ENTRY_WIDTH);
        if self.color && !value.is_finite() {
            writer.queue(SetForegroundColor(Color::Red))?;
            writer.queue(Print(text))?;
            writer.queue(ResetColor)?;
        } else {
            writer.queue(Print(text))?;
        }
        Ok(())
    }
}
