//! Configuration types for the Eventually placement engine.
//!
//! This module provides configuration structures that control how events are
//! laid out on the day timeline. All types implement [`serde::Deserialize`]
//! for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and timeline settings.
//! - [`LayoutConfig`] - Spacing and minimum sizes used while placing events.
//! - [`TimelineConfig`] - Vertical scale of the timeline.
//!
//! All lengths are in whatever linear unit the hosting surface uses, as long
//! as widths, heights and the hour height agree.
//!
//! # Example
//!
//! ```
//! # use eventually::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.layout().title_height(), 20.0);
//! assert_eq!(config.timeline().hour_height(), 60.0);
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use crate::error::EventuallyError;

/// Top-level configuration combining layout and timeline settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Timeline configuration section.
    #[serde(default)]
    timeline: TimelineConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and timeline configurations.
    ///
    /// # Arguments
    ///
    /// * `layout` - Spacing and minimum size settings.
    /// * `timeline` - Vertical scale settings.
    pub fn new(layout: LayoutConfig, timeline: TimelineConfig) -> Self {
        Self { layout, timeline }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the timeline configuration.
    pub fn timeline(&self) -> &TimelineConfig {
        &self.timeline
    }

    /// Returns a copy with the hour height replaced.
    pub fn with_hour_height(mut self, hour_height: f64) -> Self {
        self.timeline.hour_height = hour_height;
        self
    }

    /// Checks both sections.
    ///
    /// # Errors
    ///
    /// Returns [`EventuallyError::InvalidConfig`] for a negative or non-finite
    /// layout parameter and [`EventuallyError::InvalidHourHeight`] for a
    /// non-positive hour height.
    pub fn validate(&self) -> Result<(), EventuallyError> {
        self.layout.validate()?;
        self.timeline.validate()
    }
}

/// Spacing and minimum size parameters of the placement algorithm.
///
/// The defaults keep every placed event readable: it is at least
/// [`min_event_width`](Self::min_event_width) wide and
/// [`min_event_height`](Self::min_event_height) tall unless it collapses.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal gap left between adjacent events.
    h_spacing: f64,

    /// Horizontal inset reserved at the start of a frame seam.
    h_padding: f64,

    /// Height of the title band at the top of an event.
    title_height: f64,

    /// Minimum width of a placed event.
    min_event_width: f64,

    /// Minimum height of a placed event, before the vertical gap.
    min_event_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            h_spacing: 1.0,
            h_padding: 14.0,
            title_height: 20.0,
            min_event_width: 4.0,
            min_event_height: 16.0,
        }
    }
}

impl LayoutConfig {
    /// Returns the horizontal gap between adjacent events.
    pub fn h_spacing(&self) -> f64 {
        self.h_spacing
    }

    /// Returns the horizontal inset reserved at frame seams.
    pub fn h_padding(&self) -> f64 {
        self.h_padding
    }

    /// Returns the height of an event's title band.
    pub fn title_height(&self) -> f64 {
        self.title_height
    }

    /// Returns the minimum event width.
    pub fn min_event_width(&self) -> f64 {
        self.min_event_width
    }

    /// Returns the minimum event height.
    pub fn min_event_height(&self) -> f64 {
        self.min_event_height
    }

    /// Sets the horizontal gap between adjacent events.
    pub fn with_h_spacing(mut self, h_spacing: f64) -> Self {
        self.h_spacing = h_spacing;
        self
    }

    /// Sets the horizontal inset reserved at frame seams.
    pub fn with_h_padding(mut self, h_padding: f64) -> Self {
        self.h_padding = h_padding;
        self
    }

    /// Sets the height of an event's title band.
    pub fn with_title_height(mut self, title_height: f64) -> Self {
        self.title_height = title_height;
        self
    }

    /// Sets the minimum event width.
    pub fn with_min_event_width(mut self, min_event_width: f64) -> Self {
        self.min_event_width = min_event_width;
        self
    }

    /// Sets the minimum event height.
    pub fn with_min_event_height(mut self, min_event_height: f64) -> Self {
        self.min_event_height = min_event_height;
        self
    }

    /// Checks that every parameter is finite and not negative.
    ///
    /// # Errors
    ///
    /// Returns [`EventuallyError::InvalidConfig`] naming the first offending
    /// parameter.
    pub fn validate(&self) -> Result<(), EventuallyError> {
        let params = [
            ("h_spacing", self.h_spacing),
            ("h_padding", self.h_padding),
            ("title_height", self.title_height),
            ("min_event_width", self.min_event_width),
            ("min_event_height", self.min_event_height),
        ];

        for (name, value) in params {
            if !value.is_finite() || value < 0.0 {
                return Err(EventuallyError::InvalidConfig(format!(
                    "`{name}` must be a finite, non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Vertical scale of the day timeline.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Height of one hour slot.
    hour_height: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self { hour_height: 60.0 }
    }
}

impl TimelineConfig {
    /// Creates a timeline configuration with the given hour height.
    pub fn new(hour_height: f64) -> Self {
        Self { hour_height }
    }

    /// Returns the height of one hour slot.
    pub fn hour_height(&self) -> f64 {
        self.hour_height
    }

    /// Checks that the hour height is a positive finite number.
    ///
    /// # Errors
    ///
    /// Returns [`EventuallyError::InvalidHourHeight`] otherwise.
    pub fn validate(&self) -> Result<(), EventuallyError> {
        if !self.hour_height.is_finite() || self.hour_height <= 0.0 {
            return Err(EventuallyError::InvalidHourHeight(self.hour_height));
        }
        Ok(())
    }
}
