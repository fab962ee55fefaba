//! Drag-resizable side panel width
//!
//! Pointer movement maps to a width clamped into `[min, max]`. A panel on
//! the left is dragged by its right edge, so moving the pointer right makes
//! it wider; a panel on the right is the mirror image.

use serde::{Deserialize, Serialize};

use crate::error::{ListkitError, Result};

/// Which side of the layout the panel sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelSide {
    #[default]
    Left,
    Right,
}

/// Static bounds of a resizable panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub default_width: u32,
    pub min_width: u32,
    pub max_width: u32,
    #[serde(default)]
    pub side: PanelSide,
    /// Key the width is persisted under
    pub storage_key: Option<String>,
}

impl PanelSpec {
    pub fn new(default_width: u32, min_width: u32, max_width: u32) -> Result<Self> {
        let spec = Self {
            default_width,
            min_width,
            max_width,
            side: PanelSide::Left,
            storage_key: None,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn side(mut self, side: PanelSide) -> Self {
        self.side = side;
        self
    }

    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    /// Check `0 < min <= default <= max`
    pub fn validate(&self) -> Result<()> {
        let fail = |reason: &str| {
            Err(ListkitError::invalid_panel(
                self.default_width,
                self.min_width,
                self.max_width,
                reason,
            ))
        };

        if self.min_width == 0 {
            return fail("min width must be positive");
        }
        if self.min_width > self.max_width {
            return fail("min width exceeds max width");
        }
        if !(self.min_width..=self.max_width).contains(&self.default_width) {
            return fail("default width outside [min, max]");
        }
        Ok(())
    }

    /// Clamp into `[min, max]`; never panics, even on unvalidated bounds
    pub fn clamp(&self, width: i64) -> u32 {
        width
            .min(self.max_width as i64)
            .max(self.min_width as i64) as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Drag {
    start_x: i64,
    start_width: u32,
}

/// Live width of one panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    spec: PanelSpec,
    width: u32,
    drag: Option<Drag>,
}

impl PanelState {
    /// Start from a stored width (clamped) or the default
    ///
    /// The spec is validated here since its fields are public and it can be
    /// deserialized without going through [`PanelSpec::new`].
    pub fn new(spec: PanelSpec, stored: Option<u32>) -> Result<Self> {
        spec.validate()?;
        let width = stored
            .map(|w| spec.clamp(w as i64))
            .unwrap_or(spec.default_width);
        Ok(Self {
            spec,
            width,
            drag: None,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn spec(&self) -> &PanelSpec {
        &self.spec
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn begin_drag(&mut self, pointer_x: i64) {
        self.drag = Some(Drag {
            start_x: pointer_x,
            start_width: self.width,
        });
    }

    /// Move the pointer; returns the new width when it changed
    pub fn drag_to(&mut self, pointer_x: i64) -> Option<u32> {
        let drag = self.drag?;
        let delta = pointer_x - drag.start_x;
        let raw = match self.spec.side {
            PanelSide::Left => drag.start_width as i64 + delta,
            PanelSide::Right => drag.start_width as i64 - delta,
        };

        let next = self.spec.clamp(raw);
        if next == self.width {
            return None;
        }
        self.width = next;
        Some(next)
    }

    /// Finish dragging; returns the width to persist
    pub fn end_drag(&mut self) -> Option<u32> {
        self.drag.take().map(|_| self.width)
    }

    /// Set the width directly, clamped
    pub fn set_width(&mut self, width: u32) -> u32 {
        self.width = self.spec.clamp(width as i64);
        self.width
    }

    pub fn reset(&mut self) -> u32 {
        self.drag = None;
        self.width = self.spec.default_width;
        self.width
    }

    /// Position of the width within `[min, max]`, from 0.0 to 1.0
    pub fn fill_ratio(&self) -> f64 {
        let span = self.spec.max_width.saturating_sub(self.spec.min_width);
        if span == 0 {
            return 1.0;
        }
        self.width.saturating_sub(self.spec.min_width) as f64 / span as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> PanelSpec {
        PanelSpec::new(350, 250, 500).unwrap()
    }

    fn open_panel(spec: PanelSpec, stored: Option<u32>) -> PanelState {
        PanelState::new(spec, stored).unwrap()
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(PanelSpec::new(100, 200, 300).is_err());
        assert!(PanelSpec::new(250, 300, 200).is_err());
        assert!(PanelSpec::new(0, 0, 100).is_err());
        assert!(PanelSpec::new(200, 200, 200).is_ok());
    }

    #[test]
    fn test_deserialized_inverted_bounds_rejected() {
        let spec: PanelSpec =
            serde_json::from_str(r#"{"default_width":250,"min_width":300,"max_width":200}"#)
                .unwrap();

        assert!(matches!(
            PanelState::new(spec.clone(), Some(260)),
            Err(ListkitError::InvalidPanel { .. })
        ));
        assert_eq!(spec.clamp(260), 300);
    }

    #[test]
    fn test_initial_width() {
        assert_eq!(open_panel(spec(), None).width(), 350);
        assert_eq!(open_panel(spec(), Some(300)).width(), 300);
        assert_eq!(open_panel(spec(), Some(9000)).width(), 500);
    }

    #[test]
    fn test_drag_left_panel() {
        let mut panel = open_panel(spec(), None);
        panel.begin_drag(350);

        assert_eq!(panel.drag_to(400), Some(400));
        assert_eq!(panel.drag_to(400), None);
        assert_eq!(panel.drag_to(1000), Some(500));
        assert_eq!(panel.drag_to(0), Some(250));
        assert_eq!(panel.end_drag(), Some(250));
        assert!(!panel.is_dragging());
    }

    #[test]
    fn test_drag_right_panel_is_mirrored() {
        let mut panel = open_panel(spec().side(PanelSide::Right), None);
        panel.begin_drag(800);

        assert_eq!(panel.drag_to(750), Some(400));
        assert_eq!(panel.drag_to(850), Some(300));
    }

    #[test]
    fn test_drag_without_begin_is_ignored() {
        let mut panel = open_panel(spec(), None);
        assert_eq!(panel.drag_to(10), None);
        assert_eq!(panel.end_drag(), None);
        assert_eq!(panel.width(), 350);
    }

    #[test]
    fn test_reset_and_fill_ratio() {
        let mut panel = open_panel(spec(), Some(500));
        assert_eq!(panel.fill_ratio(), 1.0);

        assert_eq!(panel.set_width(100), 250);
        assert_eq!(panel.fill_ratio(), 0.0);

        assert_eq!(panel.reset(), 350);
        assert!((panel.fill_ratio() - 0.4).abs() < f64::EPSILON);
    }
}
