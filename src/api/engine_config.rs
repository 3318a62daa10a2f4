use serde::{Deserialize, Serialize};

use crate::core::{Align, SlideWidth};
use crate::error::{CarouselError, CarouselResult};

/// Bullet indicator styling requested from the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Bullets {
    #[default]
    None,
    Dark,
    Light,
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load carousel
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    #[serde(default)]
    pub align: Align,
    #[serde(default)]
    pub slide_width: SlideWidth,
    #[serde(default = "default_is_draggable")]
    pub is_draggable: bool,
    #[serde(default)]
    pub bullets: Bullets,
    #[serde(default)]
    pub show_arrows: bool,
    /// Autoplay interval in milliseconds; `0` disables autoplay.
    #[serde(default)]
    pub autoplay_interval_ms: u64,
    /// Starting index for uncontrolled carousels.
    #[serde(default)]
    pub initial_index: usize,
    /// Controller-supplied index; presence switches the engine to controlled
    /// mode.
    #[serde(default)]
    pub controlled_index: Option<usize>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            align: Align::Left,
            slide_width: SlideWidth::Full,
            is_draggable: default_is_draggable(),
            bullets: Bullets::default(),
            show_arrows: false,
            autoplay_interval_ms: 0,
            initial_index: 0,
            controlled_index: None,
        }
    }

    #[must_use]
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub fn with_slide_width(mut self, slide_width: SlideWidth) -> Self {
        self.slide_width = slide_width;
        self
    }

    #[must_use]
    pub fn with_draggable(mut self, is_draggable: bool) -> Self {
        self.is_draggable = is_draggable;
        self
    }

    #[must_use]
    pub fn with_bullets(mut self, bullets: Bullets) -> Self {
        self.bullets = bullets;
        self
    }

    #[must_use]
    pub fn with_show_arrows(mut self, show_arrows: bool) -> Self {
        self.show_arrows = show_arrows;
        self
    }

    #[must_use]
    pub fn with_autoplay_interval_ms(mut self, autoplay_interval_ms: u64) -> Self {
        self.autoplay_interval_ms = autoplay_interval_ms;
        self
    }

    #[must_use]
    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    /// Switches the engine to controlled mode with this starting value.
    #[must_use]
    pub fn with_controlled_index(mut self, index: usize) -> Self {
        self.controlled_index = Some(index);
        self
    }

    pub(crate) fn validate(self) -> CarouselResult<Self> {
        validate_slide_width(self.slide_width)?;
        Ok(self)
    }
}

pub(crate) fn validate_slide_width(slide_width: SlideWidth) -> CarouselResult<()> {
    if let SlideWidth::Fixed(width) = slide_width {
        if !width.is_finite() || width <= 0.0 {
            return Err(CarouselError::InvalidConfig(format!(
                "fixed slide width must be finite and > 0, got {width}"
            )));
        }
    }
    Ok(())
}

fn default_is_draggable() -> bool {
    true
}
