//! Visual severity derived from a resource's raw lifecycle state.
//!
//! Every renderer (badge, icon, page header, dashboard slice) colors itself
//! from a `Severity`, never from the raw state directly. The color tables
//! below are fixed for the process lifetime.

/// Small closed set of visual urgency levels.
///
/// No ordering between levels is implied; callers compare for equality only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Actively healthy.
    Good,
    /// Transitioning or stopped; not yet failed.
    Warning,
    /// Confirmed broken.
    Critical,
    /// Inactive by choice (never deployed, disabled). Not a failure.
    Neutral,
    /// The backend explicitly reported that it does not know the state.
    Unknown,
    /// Nothing to color (e.g. builtin docker networks).
    None,
}

/// Expected number of `Severity` variants. Update when adding new variants.
pub const EXPECTED_SEVERITY_COUNT: usize = 6;

/// All `Severity` variants, for exhaustive iteration.
pub const ALL_SEVERITIES: &[Severity] = &[
    Severity::Good,
    Severity::Warning,
    Severity::Critical,
    Severity::Neutral,
    Severity::Unknown,
    Severity::None,
];

impl Severity {
    /// Stable snake_case name used in log fields and metric tails.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Good => "good",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
            Severity::Neutral => "neutral",
            Severity::Unknown => "unknown",
            Severity::None => "none",
        }
    }

    /// Color tokens for this severity.
    pub fn tokens(self) -> ColorTokens {
        color_tokens(self)
    }
}

/// The three palettes a renderer needs for one severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTokens {
    /// Text color class (light and dark variants).
    pub text_class: &'static str,
    /// Base hex color (`#RRGGBB`), used for tinted backgrounds and charts.
    pub hex: &'static str,
    /// Icon stroke class.
    pub stroke_class: &'static str,
}

const NO_TOKENS: ColorTokens = ColorTokens {
    text_class: "",
    hex: "",
    stroke_class: "",
};

/// Fixed `Severity -> ColorTokens` table.
pub fn color_tokens(severity: Severity) -> ColorTokens {
    match severity {
        Severity::Good => ColorTokens {
            text_class: "text-green-700 dark:text-green-400",
            hex: "#22C55E",
            stroke_class: "stroke-green-500",
        },
        Severity::Neutral => ColorTokens {
            text_class: "text-blue-700 dark:text-blue-400",
            hex: "#3B82F6",
            stroke_class: "stroke-blue-500",
        },
        Severity::Warning => ColorTokens {
            text_class: "text-orange-700 dark:text-orange-400",
            hex: "#F97316",
            stroke_class: "stroke-orange-500",
        },
        Severity::Critical => ColorTokens {
            text_class: "text-red-700 dark:text-red-400",
            hex: "#EF4444",
            stroke_class: "stroke-red-500",
        },
        Severity::Unknown => ColorTokens {
            text_class: "text-purple-700 dark:text-purple-400",
            hex: "#A855F7",
            stroke_class: "stroke-purple-500",
        },
        Severity::None => NO_TOKENS,
    }
}

/// Tinted background: the severity hex with a two-digit alpha suffix.
///
/// Returns an empty string for `Severity::None` so the renderer falls back to
/// its default background.
pub fn background_with_alpha(severity: Severity, alpha: u8) -> String {
    let hex = color_tokens(severity).hex;
    if hex.is_empty() {
        return String::new();
    }
    format!("{hex}{alpha:02x}")
}
