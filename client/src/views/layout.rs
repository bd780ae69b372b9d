//! Page and container layout presets.
//!
//! Produces the class lists a renderer attaches to page wrappers. Widths scale
//! with the viewport; padding defaults to a responsive ladder unless the
//! caller overrides it.

use super::class_names;

/// Padding applied when the caller gives none.
pub const DEFAULT_PADDING: &str = "px-3 sm:px-4 md:px-6 lg:px-8 py-3 sm:py-4 md:py-5 lg:py-6";
const SCALING: &str = "transition-all duration-200";

/// Width preset for a page container.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PageWidth {
    /// Medium reading width.
    #[default]
    Default,
    /// Narrow forms.
    Narrow,
    /// Wide tables.
    Wide,
    /// Edge to edge.
    Full,
}

impl PageWidth {
    /// Width classes of the preset.
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Default => "w-full sm:w-[95%] md:w-[90%] lg:max-w-5xl mx-auto",
            Self::Narrow => "w-full sm:w-[95%] md:w-[90%] lg:max-w-3xl mx-auto",
            Self::Wide => "w-full sm:w-[95%] md:w-[90%] lg:max-w-7xl mx-auto",
            Self::Full => "w-full",
        }
    }
}

/// Options for a page container.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageLayout {
    /// Forces `w-full` regardless of `width`.
    pub full_width: bool,
    /// Width preset.
    pub width: PageWidth,
    /// Padding override; [`DEFAULT_PADDING`] when `None`.
    pub padding: Option<String>,
    /// Extra classes appended last.
    pub extra: Option<String>,
}

impl PageLayout {
    /// Width classes after applying `full_width`.
    pub fn container_width(&self) -> &'static str {
        if self.full_width {
            PageWidth::Full.classes()
        } else {
            self.width.classes()
        }
    }

    /// Complete class list for the container.
    pub fn container_classes(&self) -> String {
        let padding = self
            .padding
            .as_deref()
            .filter(|padding| !padding.is_empty())
            .unwrap_or(DEFAULT_PADDING);
        class_names([
            padding,
            self.container_width(),
            SCALING,
            self.extra.as_deref().unwrap_or_default(),
        ])
    }
}

/// Size preset for a responsive container.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ContainerSize {
    /// Small.
    Sm,
    /// Medium.
    Md,
    /// Large.
    #[default]
    Lg,
    /// Extra large.
    Xl,
    /// Edge to edge.
    Full,
}

impl ContainerSize {
    const fn classes(self) -> &'static str {
        match self {
            Self::Sm => "w-full sm:w-[95%] md:w-[90%] lg:max-w-2xl",
            Self::Md => "w-full sm:w-[95%] md:w-[90%] lg:max-w-3xl",
            Self::Lg => "w-full sm:w-[95%] md:w-[90%] lg:max-w-5xl",
            Self::Xl => "w-full sm:w-[95%] md:w-[90%] lg:max-w-7xl",
            Self::Full => "w-full",
        }
    }
}

/// Display mode of a responsive container.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ContainerDisplay {
    /// Block flow.
    #[default]
    Block,
    /// Flexbox; `row` selects horizontal direction.
    Flex {
        /// Lay children out horizontally.
        row: bool,
    },
    /// One to three column grid.
    Grid,
}

impl ContainerDisplay {
    const fn classes(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Flex { row: true } => "flex flex-row",
            Self::Flex { row: false } => "flex flex-col",
            Self::Grid => "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
        }
    }
}

/// Options for a responsive container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponsiveContainer {
    /// Size preset.
    pub size: ContainerSize,
    /// Whether [`DEFAULT_PADDING`] is applied.
    pub with_padding: bool,
    /// Display mode.
    pub display: ContainerDisplay,
}

impl Default for ResponsiveContainer {
    fn default() -> Self {
        Self {
            size: ContainerSize::default(),
            with_padding: true,
            display: ContainerDisplay::default(),
        }
    }
}

impl ResponsiveContainer {
    /// Complete class list for the container.
    pub fn classes(&self) -> String {
        class_names([
            SCALING,
            self.size.classes(),
            if self.with_padding { DEFAULT_PADDING } else { "" },
            self.display.classes(),
        ])
    }
}
