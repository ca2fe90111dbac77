//! Terminal front end: builds a frame's transform chain and prints it
use clap::Parser;
use log::{debug, info};
use mtx3d_core::{
    constants::to_radians, rotation, ConfigError, FrameConfig, Transformation, VertexData,
};
use std::io::{self, Write};
use std::path::PathBuf;

pub mod report;

pub use report::{textured_quad, MatrixReport};

/// Print model, view and perspective matrices for a frame config
#[derive(Debug, Parser)]
#[command(name = "mtx3d", version)]
pub struct Cli {
    /// Frame config in TOML; built-in defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of frames to print
    #[arg(short, long, default_value_t = 1)]
    pub frames: u32,

    /// Extra model rotation added each frame, in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub spin_degrees: f32,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Main application struct for printing frame transforms
pub struct FrameApp {
    config: FrameConfig,
    report: MatrixReport,
    vertices: Vec<VertexData>,
    frames: u32,
    spin_degrees: f32,
}

impl FrameApp {
    pub fn new(config: FrameConfig) -> Self {
        Self {
            config,
            report: MatrixReport::new(false),
            vertices: textured_quad().to_vec(),
            frames: 1,
            spin_degrees: 0.0,
        }
    }

    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let config = match &cli.config {
            Some(path) => FrameConfig::load(path)?,
            None => {
                debug!("no config given, using defaults");
                FrameConfig::default()
            }
        };

        Ok(Self::new(config)
            .with_color(!cli.no_color)
            .with_animation(cli.frames, cli.spin_degrees))
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.report = MatrixReport::new(color);
        self
    }

    pub fn with_animation(mut self, frames: u32, spin_degrees: f32) -> Self {
        self.frames = frames;
        self.spin_degrees = spin_degrees;
        self
    }

    pub fn with_vertices(mut self, vertices: Vec<VertexData>) -> Self {
        self.vertices = vertices;
        self
    }

    /// Transform chain for `frame`: the configured model spun by
    /// `frame * spin_degrees` about the model's spin axis
    pub fn transformation(&self, frame: u32) -> Result<Transformation, CliError> {
        let base = self.config.transformation()?;
        if self.spin_degrees == 0.0 {
            return Ok(base);
        }

        let [x, y, z] = self.config.model.spin_axis();
        let spin = rotation(to_radians(self.spin_degrees * frame as f32), x, y, z);
        Ok(Transformation::new(
            base.model_matrix * spin,
            base.view_matrix,
            base.perspective_matrix,
        ))
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        info!(
            "printing {} frame(s), {} vertices",
            self.frames,
            self.vertices.len()
        );

        for frame in 0..self.frames {
            let transformation = self.transformation(frame)?;
            if !transformation.mvp().is_finite() {
                debug!("frame {frame} has non-finite entries");
            }
            self.report
                .write_frame(out, frame, &transformation, &self.vertices)?;
        }

        out.flush()?;
        Ok(())
    }
}
