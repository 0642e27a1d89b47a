//! Pagination state and rendering for the data grid.
//!
//! This component tracks the current page, page size, and total page count,
//! and renders a compact pagination indicator. It does not render pages of
//! content itself; the grid slices its projected rows using the bounds this
//! model computes.

/// The style of pagination indicator to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Type {
    /// Arabic numerals, e.g. `"3/10"`.
    #[default]
    Arabic,
    /// One dot per page with the current page highlighted, e.g. `"○ ● ○"`.
    Dots,
}

/// Pagination model: current page, page size, and derived page count.
///
/// Pages are zero-indexed internally; the arabic view displays them
/// one-indexed. The page count is always at least 1, even for an empty
/// data set, so consumers never divide by or render zero pages.
///
/// # Examples
///
/// ```rust
/// use bubbletea_datagrid::paginator::Model;
///
/// let mut p = Model::new().with_per_page(10).with_total_items(25);
/// assert_eq!(p.total_pages, 3);
/// assert!(p.on_first_page());
///
/// p.next_page();
/// let (start, end) = p.get_slice_bounds(25);
/// assert_eq!((start, end), (10, 20));
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// The indicator style (arabic or dots).
    pub paginator_type: Type,
    /// The current page, zero-indexed.
    pub page: usize,
    /// Items per page. Always at least 1.
    pub per_page: usize,
    /// Total number of pages. Always at least 1.
    pub total_pages: usize,

    /// Glyph for the current page in dots mode.
    pub active_dot: String,
    /// Glyph for other pages in dots mode.
    pub inactive_dot: String,
    /// Format string for arabic mode; both `%d` occurrences are substituted.
    pub arabic_format: String,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            paginator_type: Type::default(),
            page: 0,
            per_page: 1,
            total_pages: 1,
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            arabic_format: "%d/%d".to_string(),
        }
    }
}

impl Model {
    /// Creates a paginator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size and recomputes nothing else (builder pattern).
    ///
    /// Values below 1 are clamped to 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.set_per_page(per_page);
        self
    }

    /// Sets the total item count and derives the page count (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Sets the page size. Values below 1 are clamped to 1.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Derives the page count from a total item count.
    ///
    /// Zero items still yield one (empty) page. If the current page falls
    /// beyond the new page count it is clamped down to the last valid page;
    /// it is never moved forward.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_datagrid::paginator::Model;
    ///
    /// let mut p = Model::new().with_per_page(10).with_total_items(25);
    /// p.page = 2;
    /// p.set_total_items(5); // the data shrank under us
    /// assert_eq!(p.total_pages, 1);
    /// assert_eq!(p.page, 0);
    /// ```
    pub fn set_total_items(&mut self, items: usize) {
        self.total_pages = if items == 0 {
            1
        } else {
            items.div_ceil(self.per_page)
        };
        if self.page >= self.total_pages {
            self.page = self.total_pages.saturating_sub(1);
        }
    }

    /// Returns `[start, end)` slice bounds for the current page, clamped to
    /// the given data length.
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = (self.page * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Moves to the previous page; no-op on the first page.
    pub fn prev_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
        }
    }

    /// Moves to the next page; no-op on the last page.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Returns true when on the first page.
    pub fn on_first_page(&self) -> bool {
        self.page == 0
    }

    /// Returns true when on the last page.
    pub fn on_last_page(&self) -> bool {
        self.page == self.total_pages.saturating_sub(1)
    }

    /// Renders the pagination indicator in the configured style.
    ///
    /// ```rust
    /// use bubbletea_datagrid::paginator::Model;
    ///
    /// let p = Model::new().with_per_page(10).with_total_items(50);
    /// assert_eq!(p.view(), "1/5");
    /// ```
    pub fn view(&self) -> String {
        match self.paginator_type {
            Type::Arabic => self.arabic_view(),
            Type::Dots => self.dots_view(),
        }
    }

    fn arabic_view(&self) -> String {
        self.arabic_format
            .replacen("%d", &(self.page + 1).to_string(), 1)
            .replacen("%d", &self.total_pages.to_string(), 1)
    }

    fn dots_view(&self) -> String {
        let mut s = String::new();
        for i in 0..self.total_pages {
            if i == self.page {
                s.push_str(&self.active_dot);
            } else {
                s.push_str(&self.inactive_dot);
            }
            if i < self.total_pages - 1 {
                s.push(' ');
            }
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_is_never_zero() {
        let mut p = Model::new().with_per_page(10);
        p.set_total_items(0);
        assert_eq!(p.total_pages, 1);
    }

    #[test]
    fn shrinking_totals_clamp_the_page_down() {
        let mut p = Model::new().with_per_page(10).with_total_items(95);
        p.page = 9;
        p.set_total_items(31);
        assert_eq!(p.total_pages, 4);
        assert_eq!(p.page, 3);
    }

    #[test]
    fn growing_totals_leave_the_page_alone() {
        let mut p = Model::new().with_per_page(10).with_total_items(20);
        p.page = 1;
        p.set_total_items(100);
        assert_eq!(p.page, 1);
    }

    #[test]
    fn slice_bounds_clamp_to_length() {
        let mut p = Model::new().with_per_page(10).with_total_items(25);
        p.page = 2;
        assert_eq!(p.get_slice_bounds(25), (20, 25));
    }

    #[test]
    fn navigation_stops_at_the_edges() {
        let mut p = Model::new().with_per_page(10).with_total_items(20);
        p.prev_page();
        assert_eq!(p.page, 0);
        p.next_page();
        p.next_page();
        assert_eq!(p.page, 1);
    }

    #[test]
    fn dots_view_marks_the_current_page() {
        let mut p = Model::new().with_per_page(1).with_total_items(3);
        p.paginator_type = Type::Dots;
        p.page = 1;
        assert_eq!(p.view(), "○ • ○");
    }
}
