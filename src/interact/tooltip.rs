use crate::{common::js_number, data::EducationRecord};

/// The single tooltip shared by every county.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub opacity: f64,
    /// Page coordinates in pixels; unset until the first hover.
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub text: String,
    /// Mirrors the hovered county's `data-education`.
    pub education: Option<f64>,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self { opacity: 0.0, left: None, top: None, text: String::new(), education: None }
    }
}

impl Tooltip {
    pub const VISIBLE_OPACITY: f64 = 0.9;

    /// Show `record` next to the pointer at page position `(x, y)`.
    pub fn show(&mut self, record: &EducationRecord, (x, y): (f64, f64), [dx, dy]: [f64; 2]) {
        self.opacity = Self::VISIBLE_OPACITY;
        self.left = Some(x + dx);
        self.top = Some(y + dy);
        self.text = record.tooltip_text();
        self.education = Some(record.bachelors_or_higher);
    }

    /// Content and position stay as they were.
    pub fn hide(&mut self) {
        self.opacity = 0.0;
    }

    /// CSS `left`, e.g. `110px`.
    pub fn left_css(&self) -> Option<String> { self.left.map(|v| format!("{}px", js_number(v))) }

    /// CSS `top`, e.g. `72px`.
    pub fn top_css(&self) -> Option<String> { self.top.map(|v| format!("{}px", js_number(v))) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn autauga() -> EducationRecord {
        EducationRecord { fips: 1001, state: "AL".into(), area_name: "Autauga County".into(), bachelors_or_higher: 25.3 }
    }

    #[test]
    fn starts_hidden_and_empty() {
        let tooltip = Tooltip::default();
        assert_eq!(tooltip.opacity, 0.0);
        assert_eq!(tooltip.text, "");
        assert_eq!(tooltip.left_css(), None);
    }

    #[test]
    fn show_offsets_from_the_pointer() {
        let mut tooltip = Tooltip::default();
        tooltip.show(&autauga(), (100.0, 100.0), [10.0, -28.0]);
        assert_eq!(tooltip.opacity, 0.9);
        assert_eq!(tooltip.text, "Autauga County, AL: 25.3%");
        assert_eq!(tooltip.left_css().as_deref(), Some("110px"));
        assert_eq!(tooltip.top_css().as_deref(), Some("72px"));
        assert_eq!(tooltip.education, Some(25.3));
    }

    #[test]
    fn hide_keeps_content() {
        let mut tooltip = Tooltip::default();
        tooltip.show(&autauga(), (0.0, 0.0), [10.0, -28.0]);
        tooltip.hide();
        assert_eq!(tooltip.opacity, 0.0);
        assert_eq!(tooltip.text, "Autauga County, AL: 25.3%");
    }
}
