//! This module samples the sky model over the whole visible hemisphere, giving the display colors
//! a renderer stretches over its sky background. Samples sit on a regular azimuth/elevation grid:
//! `naz + 1` columns from azimuth 0 to 360 inclusive (the first and last column are the same
//! direction, so a texture can wrap without a seam) and `nel + 1` rows from the horizon to the
//! zenith.

use std::io;

use crate::colors::RGBColor;
use crate::display::Display;
use crate::skymodel::SkyModel;

/// One CSV row of an exported grid.
#[derive(Debug, Serialize, Deserialize)]
struct Record {
    azimuth: f64,
    elevation: f64,
    r: f64,
    g: f64,
    b: f64,
}

/// A grid of display-ready sky colors.
///
/// # Example
/// ```
/// # use skyview::skygrid::SkyGrid;
/// # use skyview::skymodel::SkyModel;
/// # use skyview::display::Display;
/// let mut sky = SkyModel::new();
/// sky.set_solar_position(135., 30.);
/// let mut grid = SkyGrid::new(36, 9);
/// grid.fill(&sky, &Display::default());
/// assert_eq!(grid.dimensions(), (37, 10));
/// // column 0 and column 36 both face North
/// assert_eq!(grid.get(0, 4), grid.get(36, 4));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SkyGrid {
    naz: usize,
    nel: usize,
    colors: Vec<RGBColor>,
}

impl SkyGrid {
    /// A grid with `naz` azimuth steps and `nel` elevation steps, all black until it is filled.
    /// Panics if either is zero.
    pub fn new(naz: usize, nel: usize) -> SkyGrid {
        assert!(naz > 0 && nel > 0, "sky grid needs at least one step each way");
        SkyGrid {
            naz,
            nel,
            colors: vec![RGBColor { r: 0., g: 0., b: 0. }; (naz + 1) * (nel + 1)],
        }
    }

    /// The number of samples as `(columns, rows)`: one more than the number of steps each way.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.naz + 1, self.nel + 1)
    }

    /// The compass azimuth of column `i`, in degrees.
    pub fn azimuth(&self, i: usize) -> f64 {
        i as f64 / self.naz as f64 * 360.0
    }

    /// The elevation of row `j`, in degrees.
    pub fn elevation(&self, j: usize) -> f64 {
        90.0 * j as f64 / self.nel as f64
    }

    fn index(&self, i: usize, j: usize) -> usize {
        j * (self.naz + 1) + i
    }

    /// The color at column `i` and row `j`, or `None` outside the grid.
    pub fn get(&self, i: usize, j: usize) -> Option<RGBColor> {
        if i > self.naz || j > self.nel {
            return None;
        }
        self.colors.get(self.index(i, j)).copied()
    }

    /// Samples the model at every grid point and passes each sample through the display pipeline.
    pub fn fill(&mut self, model: &SkyModel, display: &Display) {
        for j in 0..=self.nel {
            let elevation = self.elevation(j);
            for i in 0..=self.naz {
                let color = display.apply(model.colour(self.azimuth(i), elevation));
                let idx = self.index(i, j);
                self.colors[idx] = color;
            }
        }
    }

    /// Every sample as `(azimuth, elevation, color)`, row by row from the horizon up.
    pub fn samples<'a>(&'a self) -> impl Iterator<Item = (f64, f64, RGBColor)> + 'a {
        self.colors.iter().enumerate().map(move |(idx, &color)| {
            let (i, j) = (idx % (self.naz + 1), idx / (self.naz + 1));
            (self.azimuth(i), self.elevation(j), color)
        })
    }

    /// Writes the grid as CSV with a header row and one row per sample: azimuth, elevation, r, g, b.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        for (azimuth, elevation, color) in self.samples() {
            wtr.serialize(Record {
                azimuth,
                elevation,
                r: color.r,
                g: color.g,
                b: color.b,
            })?;
        }
        wtr.flush()?;
        Ok(())
    }
}
