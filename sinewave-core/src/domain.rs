use std::f64::consts::PI;

/// Upper bound of the plotted x-range at startup.
pub const DEFAULT_BOUND: f64 = 4.0 * PI;

/// Integer multiplier converting the real-valued bound to a slider tick.
pub const SLIDER_SCALE: f64 = 10.0;

/// Highest slider tick; the slider covers twice the default range.
pub const SLIDER_MAX: u32 = (2.0 * DEFAULT_BOUND * SLIDER_SCALE) as u32;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DomainInputError {
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error("x max must be positive and finite, got {0}")]
    OutOfRange(f64),
}

/// The current upper limit of the plotted x-range.
///
/// Invariant: the value is positive and finite from construction on. The
/// only fallible mutation is [`set_from_text`](DomainBound::set_from_text),
/// which leaves the value untouched when it rejects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainBound {
    value: f64,
}

impl DomainBound {
    pub fn new() -> Self {
        Self {
            value: DEFAULT_BOUND,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Slider position for the current bound.
    ///
    /// The conversion truncates, mirroring the tick-to-value division, so
    /// repeated round trips through the slider do not drift. Bounds typed in
    /// beyond the slider's range clamp to its ends; the displayed position
    /// then no longer matches the value exactly.
    pub fn slider_tick(&self) -> u32 {
        ((self.value * SLIDER_SCALE) as i64).clamp(1, i64::from(SLIDER_MAX)) as u32
    }

    /// Adopts a slider tick. Ticks come pre-clamped to `[1, SLIDER_MAX]` by
    /// the control itself, so this never fails.
    pub fn set_from_slider(&mut self, tick: u32) {
        self.value = f64::from(tick) / SLIDER_SCALE;
    }

    /// Adopts a committed text entry. Rejects anything that does not parse
    /// as a positive finite number and keeps the prior value in that case.
    pub fn set_from_text(&mut self, raw: &str) -> Result<(), DomainInputError> {
        let parsed =
            parse_f64_input(raw).ok_or_else(|| DomainInputError::NotANumber(raw.to_string()))?;
        if !(parsed > 0.0 && parsed.is_finite()) {
            return Err(DomainInputError::OutOfRange(parsed));
        }
        self.value = parsed;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.value = DEFAULT_BOUND;
    }

    /// Text-field rendition of the bound.
    pub fn formatted(&self) -> String {
        format!("{:.2}", self.value)
    }

    /// Result-label rendition, sine evaluated at the bound itself.
    pub fn result_text(&self) -> String {
        format!("sin({:.2}) = {:.4}", self.value, self.value.sin())
    }

    pub fn plot_title(&self) -> String {
        format!("sin(x): 0 to {:.2}", self.value)
    }
}

impl Default for DomainBound {
    fn default() -> Self {
        Self::new()
    }
}

/// Lenient numeric parsing for the text field: surrounding whitespace is
/// ignored and a comma decimal separator is accepted; a bare sign or a
/// trailing separator is not a number yet.
pub fn parse_f64_input(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "-" || trimmed.ends_with('.') || trimmed.ends_with(',') {
        return None;
    }
    let normalized = trimmed.replace(',', ".");
    normalized.parse::<f64>().ok()
}
