//! Visual styling for the grid.
//!
//! All defaults use `AdaptiveColor`, so they adjust to light and dark
//! terminal themes. Styling is presentation only; no grid behavior depends
//! on anything in this module.

use lipgloss_extras::prelude::*;

/// Unicode ellipsis used when cell content is truncated to its column width.
pub const ELLIPSIS: &str = "…";

/// Header arrow for an ascending sort.
pub const SORT_ASC_ARROW: &str = "▲";

/// Header arrow for a descending sort.
pub const SORT_DESC_ARROW: &str = "▼";

/// Styling configuration for every visual element of the grid.
///
/// # Examples
///
/// ```rust
/// use bubbletea_datagrid::grid::style::GridStyles;
/// use lipgloss_extras::prelude::*;
///
/// let mut styles = GridStyles::default();
/// styles.header = Style::new()
///     .foreground(AdaptiveColor { Light: "#1a1a1a", Dark: "#ffffff" })
///     .bold(true);
/// ```
#[derive(Debug, Clone)]
pub struct GridStyles {
    /// The header row.
    pub header: Style,
    /// Regular data cells.
    pub cell: Style,
    /// The cell currently being edited.
    pub cell_editing: Style,
    /// The "No records." message shown for an empty projection.
    pub no_rows: Style,
    /// The footer line with row counts.
    pub footer: Style,
    /// The pagination indicator inside the footer.
    pub pagination: Style,
}

impl Default for GridStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            header: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .bold(true),
            cell: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            cell_editing: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .bold(true),
            no_rows: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            footer: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            pagination: Style::new().foreground(subdued),
        }
    }
}
