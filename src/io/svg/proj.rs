use anyhow::{Context, Result, anyhow};
use geo::Coord;
use proj4rs::{proj::Proj as Proj4, transform::transform};

use crate::config::ProjectionKind;

/// Maps topology coordinates to canvas pixels.
pub enum Projection {
    /// Coordinates are already canvas pixels.
    Identity,
    AlbersUsa(Box<AlbersUsa>),
}

impl Projection {
    pub fn new(kind: ProjectionKind) -> Result<Self> {
        Ok(match kind {
            ProjectionKind::Identity => Projection::Identity,
            ProjectionKind::AlbersUsa => Projection::AlbersUsa(Box::new(AlbersUsa::new(
                AlbersUsa::DEFAULT_SCALE,
                AlbersUsa::DEFAULT_TRANSLATE,
            )?)),
        })
    }

    /// `None` when the point falls outside every region the projection covers.
    #[inline]
    pub fn project(&self, coord: &Coord<f64>) -> Option<(f64, f64)> {
        match self {
            Projection::Identity => Some((coord.x, coord.y)),
            Projection::AlbersUsa(albers) => albers.project(coord),
        }
    }
}

/// Mean equatorial radius, to bring projected meters back to unit-sphere units.
const EARTH_RADIUS: f64 = 6_378_137.0;

/// One conic equal-area panel of the composite.
struct Inset {
    proj: Proj4,
    /// Pixels per unit-sphere radian.
    scale: f64,
    translate: (f64, f64),
    /// Projected meters of the geographic point that lands on `translate`.
    origin: (f64, f64),
    /// Pixel box `[[x0, y0], [x1, y1]]` a point must land in to belong to this panel.
    clip: [[f64; 2]; 2],
}

impl Inset {
    fn new(proj4: &str, geographic: &Proj4, center: (f64, f64), scale: f64, translate: (f64, f64), clip: [[f64; 2]; 2]) -> Result<Self> {
        let proj = Proj4::from_proj_string(proj4)
            .map_err(|e| anyhow!("{e:?}"))
            .with_context(|| format!("[proj] Failed to build PROJ.4: {proj4}"))?;

        let mut point = (center.0.to_radians(), center.1.to_radians(), 0.0);
        transform(geographic, &proj, &mut point)
            .map_err(|e| anyhow!("{e:?}"))
            .with_context(|| format!("[proj] Failed to project inset center {center:?}"))?;

        Ok(Self { proj, scale, translate, origin: (point.0, point.1), clip })
    }

    fn project(&self, geographic: &Proj4, coord: &Coord<f64>) -> Option<(f64, f64)> {
        let mut point = (coord.x.to_radians(), coord.y.to_radians(), 0.0);
        transform(geographic, &self.proj, &mut point).ok()?;

        let x = self.translate.0 + self.scale * (point.0 - self.origin.0) / EARTH_RADIUS;
        let y = self.translate.1 - self.scale * (point.1 - self.origin.1) / EARTH_RADIUS;
        if !(x.is_finite() && y.is_finite()) { return None }

        let [[x0, y0], [x1, y1]] = self.clip;
        (x0 <= x && x <= x1 && y0 <= y && y <= y1).then_some((x, y))
    }
}

/// Composite Albers equal-area projection of the United States: the lower 48
/// with Alaska and Hawaii moved into insets below the Southwest.
pub struct AlbersUsa {
    geographic: Proj4,
    lower48: Inset,
    alaska: Inset,
    hawaii: Inset,
}

impl AlbersUsa {
    pub const DEFAULT_SCALE: f64 = 1070.0;
    pub const DEFAULT_TRANSLATE: (f64, f64) = (480.0, 250.0);

    pub fn new(k: f64, (x, y): (f64, f64)) -> Result<Self> {
        let geographic = Proj4::from_proj_string("+proj=longlat +ellps=GRS80 +no_defs")
            .map_err(|e| anyhow!("{e:?}"))
            .context("[proj] Failed to build geographic PROJ.4")?;

        let lower48 = Inset::new(
            "+proj=aea +lat_1=29.5 +lat_2=45.5 +lat_0=38.7 +lon_0=-96 +x_0=0 +y_0=0 +ellps=GRS80 +units=m +no_defs",
            &geographic, (-96.6, 38.7), k, (x, y),
            [[x - 0.455 * k, y - 0.238 * k], [x + 0.455 * k, y + 0.238 * k]],
        )?;
        let alaska = Inset::new(
            "+proj=aea +lat_1=55 +lat_2=65 +lat_0=58.5 +lon_0=-154 +x_0=0 +y_0=0 +ellps=GRS80 +units=m +no_defs",
            &geographic, (-156.0, 58.5), 0.35 * k, (x - 0.307 * k, y + 0.201 * k),
            [[x - 0.425 * k, y + 0.120 * k], [x - 0.214 * k, y + 0.234 * k]],
        )?;
        let hawaii = Inset::new(
            "+proj=aea +lat_1=8 +lat_2=18 +lat_0=19.9 +lon_0=-157 +x_0=0 +y_0=0 +ellps=GRS80 +units=m +no_defs",
            &geographic, (-160.0, 19.9), k, (x - 0.205 * k, y + 0.212 * k),
            [[x - 0.214 * k, y + 0.166 * k], [x - 0.115 * k, y + 0.234 * k]],
        )?;

        Ok(Self { geographic, lower48, alaska, hawaii })
    }

    /// First panel whose clip box contains the projected point wins.
    pub fn project(&self, coord: &Coord<f64>) -> Option<(f64, f64)> {
        self.lower48.project(&self.geographic, coord)
            .or_else(|| self.alaska.project(&self.geographic, coord))
            .or_else(|| self.hawaii.project(&self.geographic, coord))
    }
}
