//! Debug output of sampled points and directions as a [VPython](https://vpython.org/) program.
//!
//! Running the generated script opens an interactive 3d view, which is the quickest way to
//! eyeball whether a warp covers its domain the way it should.
//!
//! ```no_run
//! use sample_warp::{hemisphere::sample_hemisphere_cosine, vpython::VPythonFile, Vec2d};
//!
//! # fn main() -> sample_warp::error::Result<()> {
//! let mut file = VPythonFile::create("cosine.py")?;
//! file.draw_unit_square(0.001)?;
//! for i in 0..16 {
//!     for j in 0..16 {
//!         let s = Vec2d::new(i as f64 / 16.0, j as f64 / 16.0);
//!         file.draw_point(sample_hemisphere_cosine(s), "white", 5)?;
//!     }
//! }
//! file.finish()?;
//! # Ok(())
//! # }
//! ```

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tracing::debug;

use crate::{
    error::{Error, Result},
    Vec3d,
};

/// Colors predefined by VPython's `color` module
pub const COLORS: [&str; 9] = [
    "red", "green", "blue", "yellow", "cyan", "magenta", "orange", "black", "white",
];

/// Writes a VPython program. Every `draw_*` call appends one primitive to the scene.
pub struct VPythonFile<W: Write> {
    writer: W,
    primitives: usize,
}

impl VPythonFile<BufWriter<File>> {
    /// Creates the script at `path`, overwriting an existing file
    ///
    /// # Errors
    /// If the file can not be created or written to
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Writing VPython script to {}", path.display());
        Self::new(BufWriter::new(File::create(path)?))
    }
}

impl<W: Write> VPythonFile<W> {
    /// Writes the script header to `writer`
    ///
    /// # Errors
    /// If writing to `writer` fails
    pub fn new(mut writer: W) -> Result<Self> {
        writeln!(writer, "from visual import *")?;
        writeln!(writer)?;
        Ok(Self {
            writer,
            primitives: 0,
        })
    }

    /// Draws a single point
    ///
    /// # Errors
    /// If `color` is not one of [`COLORS`] or writing fails
    pub fn draw_point(&mut self, point: Vec3d, color: &str, size: usize) -> Result<()> {
        self.draw_points(&[point], color, size)
    }

    /// Draws a collection of points which share the same color and size
    ///
    /// # Errors
    /// If `color` is not one of [`COLORS`] or writing fails
    pub fn draw_points(&mut self, points: &[Vec3d], color: &str, size: usize) -> Result<()> {
        check_color(color)?;
        if points.is_empty() {
            return Ok(());
        }

        write!(self.writer, "points(pos=[")?;
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                write!(self.writer, ", ")?;
            }
            write!(self.writer, "{}", tuple(*p))?;
        }
        writeln!(self.writer, "], color=color.{color}, size={size})")?;
        self.primitives += 1;
        Ok(())
    }

    /// Draws the unit square `[0, 1]^2` in the xz-plane as a thin box
    ///
    /// # Errors
    /// If writing fails
    pub fn draw_unit_square(&mut self, thickness: f64) -> Result<()> {
        writeln!(
            self.writer,
            "box(pos=(0.5, 0, 0.5), length=1, height={thickness}, width=1)"
        )?;
        self.primitives += 1;
        Ok(())
    }

    /// Draws an arrow pointing from `from` to `to`
    ///
    /// # Errors
    /// If writing fails
    pub fn draw_arrow(&mut self, from: Vec3d, to: Vec3d, shaft_width: f64) -> Result<()> {
        writeln!(
            self.writer,
            "arrow(pos={}, axis={}, shaftwidth={shaft_width})",
            tuple(from),
            tuple(to - from)
        )?;
        self.primitives += 1;
        Ok(())
    }

    /// Flushes the script and returns the underlying writer
    ///
    /// # Errors
    /// If flushing fails
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        debug!("Finished VPython script with {} primitives", self.primitives);
        Ok(self.writer)
    }
}

fn check_color(color: &str) -> Result<()> {
    if COLORS.contains(&color) {
        Ok(())
    } else {
        Err(Error::UnknownColor(color.to_owned()))
    }
}

fn tuple(v: Vec3d) -> String {
    format!("({}, {}, {})", v.x, v.y, v.z)
}
