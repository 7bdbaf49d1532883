use serde::{Deserialize, Serialize};

/// Which duration representation is currently authoritative for a form.
///
/// Exactly one representation is live at a time: the year-count select in
/// [`InputMode::Years`], the start/end date pair in [`InputMode::Dates`].
/// Fields belonging to the inactive representation are inert: they are not
/// validated and their stale values must not affect calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    Years,
    Dates,
}

impl InputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Years => "years",
            Self::Dates => "dates",
        }
    }
}

impl Default for InputMode {
    fn default() -> Self {
        Self::Years
    }
}
