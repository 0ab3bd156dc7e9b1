use std::fmt;

use crate::common::js_number;

/// Uniform scale followed by translation: `p ↦ p·k + (x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

impl ZoomTransform {
    pub const IDENTITY: Self = Self { k: 1.0, x: 0.0, y: 0.0 };

    pub fn new(k: f64, x: f64, y: f64) -> Self { Self { k, x, y } }

    /// Map a viewport point back onto the untransformed map.
    pub fn invert(&self, (px, py): (f64, f64)) -> (f64, f64) {
        ((px - self.x) / self.k, (py - self.y) / self.k)
    }
}

impl Default for ZoomTransform {
    fn default() -> Self { Self::IDENTITY }
}

impl fmt::Display for ZoomTransform {
    /// SVG `transform` attribute: `translate(x,y) scale(k)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({},{}) scale({})", js_number(self.x), js_number(self.y), js_number(self.k))
    }
}

/// Unit of a wheel event's delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeltaMode {
    Pixel,
    Line,
    Page,
}

impl DeltaMode {
    /// DOM `WheelEvent.deltaMode` code; unknown codes count as pages.
    pub fn from_dom(code: u32) -> Self {
        match code {
            0 => DeltaMode::Pixel,
            1 => DeltaMode::Line,
            _ => DeltaMode::Page,
        }
    }
}

/// Zoom exponent for one wheel event; the factor applied is `2^delta`.
pub fn wheel_delta(delta_y: f64, mode: DeltaMode, ctrl: bool) -> f64 {
    let unit = match mode {
        DeltaMode::Pixel => 0.002,
        DeltaMode::Line => 0.05,
        DeltaMode::Page => 1.0,
    };
    -delta_y * unit * if ctrl { 10.0 } else { 1.0 }
}

/// Pan/zoom state of the map group.
///
/// Gestures clamp the scale to `scale_extent`; `transform_to` sets the
/// transform verbatim. No easing: every call yields the final transform.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomBehavior {
    transform: ZoomTransform,
    scale_extent: [f64; 2],
    /// Viewport position of the last drag event.
    drag_from: Option<(f64, f64)>,
}

impl ZoomBehavior {
    pub fn new(scale_extent: [f64; 2]) -> Self {
        Self { transform: ZoomTransform::IDENTITY, scale_extent, drag_from: None }
    }

    pub fn transform(&self) -> ZoomTransform { self.transform }

    pub fn scale_extent(&self) -> [f64; 2] { self.scale_extent }

    /// Never panics: an inverted extent pins to its upper bound, a NaN bound is ignored.
    fn clamp_scale(&self, k: f64) -> f64 {
        let [lo, hi] = self.scale_extent;
        k.max(lo).min(hi)
    }

    /// Replace the transform as given.
    pub fn transform_to(&mut self, transform: ZoomTransform) -> ZoomTransform {
        self.transform = transform;
        self.transform
    }

    /// Zoom to scale `k` (clamped) keeping the map point under `pointer` in place.
    pub fn scale_to(&mut self, k: f64, pointer: (f64, f64)) -> ZoomTransform {
        let k = self.clamp_scale(k);
        let (mx, my) = self.transform.invert(pointer);
        self.transform = ZoomTransform { k, x: pointer.0 - mx * k, y: pointer.1 - my * k };
        self.transform
    }

    pub fn scale_by(&mut self, factor: f64, pointer: (f64, f64)) -> ZoomTransform {
        self.scale_to(self.transform.k * factor, pointer)
    }

    /// Pan by a viewport distance.
    pub fn translate_by(&mut self, dx: f64, dy: f64) -> ZoomTransform {
        self.transform.x += dx;
        self.transform.y += dy;
        self.transform
    }

    /// Returns `None` when the scale is already pinned at the extent in that direction.
    pub fn wheel(&mut self, delta_y: f64, mode: DeltaMode, ctrl: bool, pointer: (f64, f64)) -> Option<ZoomTransform> {
        let k = self.clamp_scale(self.transform.k * 2f64.powf(wheel_delta(delta_y, mode, ctrl)));
        if k == self.transform.k { return None }
        Some(self.scale_to(k, pointer))
    }

    /// Double the scale, or halve it with shift held.
    pub fn double_click(&mut self, shift: bool, pointer: (f64, f64)) -> ZoomTransform {
        self.scale_by(if shift { 0.5 } else { 2.0 }, pointer)
    }

    pub fn drag_start(&mut self, pointer: (f64, f64)) {
        self.drag_from = Some(pointer);
    }

    /// `None` unless a drag is in progress.
    pub fn drag_move(&mut self, pointer: (f64, f64)) -> Option<ZoomTransform> {
        let (x0, y0) = self.drag_from.replace(pointer)?;
        Some(self.translate_by(pointer.0 - x0, pointer.1 - y0))
    }

    pub fn drag_end(&mut self) {
        self.drag_from = None;
    }

    pub fn is_dragging(&self) -> bool { self.drag_from.is_some() }
}
