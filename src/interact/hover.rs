use crate::scene::{CountyContext, RenderContext};

use super::Tooltip;

impl RenderContext {
    /// Pointer entered `county` at page position `page`.
    ///
    /// Returns whether the tooltip changed. A county without a record leaves
    /// the tooltip exactly as it was, previous text included.
    pub fn pointer_enter(&self, tooltip: &mut Tooltip, county: &CountyContext, page: (f64, f64)) -> bool {
        let Some(record) = county.fips().and_then(|fips| self.data().get(fips)) else {
            tracing::trace!(id = ?county.id, "hover without record");
            return false;
        };
        tooltip.show(record, page, self.config().tooltip_offset);
        true
    }

    /// Pointer left a county: hide the tooltip whatever it showed.
    pub fn pointer_leave(&self, tooltip: &mut Tooltip) {
        tooltip.hide();
    }
}
