/// Fraction of a viewport after which the view counts as past the first screen
const PAST_HERO_RATIO: f64 = 0.3;
/// Fraction of a viewport after which "back to top" is offered
const BACK_TO_TOP_RATIO: f64 = 1.5;

/// Flags derived from the scroll position for the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollIndicators {
    pub past_hero: bool,
    pub show_back_to_top: bool,
}

impl ScrollIndicators {
    pub fn from_offset(offset: f64, viewport_height: f64) -> Self {
        Self {
            past_hero: offset > viewport_height * PAST_HERO_RATIO,
            show_back_to_top: offset > viewport_height * BACK_TO_TOP_RATIO,
        }
    }
}
