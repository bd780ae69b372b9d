//! Dashboard stat card with an optional trend line.

/// Direction of a stat's change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    /// Increase.
    Up,
    /// Decrease.
    Down,
    /// No meaningful change.
    Neutral,
}

/// Change of a stat since a reference point.
#[derive(Debug, Clone, PartialEq)]
pub struct StatChange {
    /// Percentage magnitude.
    pub value: f64,
    /// Reference label, e.g. `from last week`.
    pub label: String,
    /// Direction.
    pub direction: TrendDirection,
}

/// Rendered trend line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendLine {
    /// Colour class.
    pub color: &'static str,
    /// Icon name.
    pub icon: &'static str,
    /// Percentage text, e.g. `12.4%`.
    pub text: String,
    /// Reference label.
    pub label: String,
}

/// Rendered stat card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    /// Card heading.
    pub title: String,
    /// Headline value.
    pub value: String,
    /// Optional trend line.
    pub trend: Option<TrendLine>,
}

impl StatCard {
    /// Build a card from a title, a displayable value and an optional change.
    pub fn new(title: impl Into<String>, value: impl ToString, change: Option<&StatChange>) -> Self {
        Self {
            title: title.into(),
            value: value.to_string(),
            trend: change.map(trend_line),
        }
    }
}

/// Style a change for display.
pub fn trend_line(change: &StatChange) -> TrendLine {
    let (color, icon) = match change.direction {
        TrendDirection::Up => ("text-green-500", "arrow-up"),
        TrendDirection::Down => ("text-red-500", "arrow-down"),
        TrendDirection::Neutral => ("text-gray-500", "minus"),
    };
    TrendLine {
        color,
        icon,
        text: format!("{}%", change.value),
        label: change.label.clone(),
    }
}
