#![forbid(unsafe_code)]

//! Pagination indicator: one marker per logical item.

use unicode_width::UnicodeWidthStr;

/// Text rendering mode for the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginatorMode {
    /// Render as "Page X/Y".
    Page,
    /// Render as "X/Y".
    Compact,
    /// Render one symbol per marker (e.g. "○●○○").
    Dots,
}

/// Marker strip tracking which logical page is active.
///
/// Markers are created once by [`render`](Self::render); afterwards only the
/// active marker moves, via [`sync`](Self::sync).
#[derive(Debug, Clone)]
pub struct PaginationIndicator<'a> {
    marker_count: usize,
    active: usize,
    mode: PaginatorMode,
    active_symbol: &'a str,
    inactive_symbol: &'a str,
}

impl Default for PaginationIndicator<'_> {
    fn default() -> Self {
        Self {
            marker_count: 0,
            active: 0,
            mode: PaginatorMode::Dots,
            active_symbol: "●",
            inactive_symbol: "○",
        }
    }
}

impl<'a> PaginationIndicator<'a> {
    /// Create an indicator with no markers yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text rendering mode.
    pub fn mode(mut self, mode: PaginatorMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the symbols used in dots mode.
    pub fn dots_symbols(mut self, active: &'a str, inactive: &'a str) -> Self {
        self.active_symbol = active;
        self.inactive_symbol = inactive;
        self
    }

    /// Create `logical_count` markers, the first one active.
    ///
    /// Markers are created once; later calls are ignored and return `false`.
    pub fn render(&mut self, logical_count: usize) -> bool {
        if self.marker_count != 0 {
            return false;
        }
        self.marker_count = logical_count;
        self.active = 0;
        true
    }

    /// Make `active_page` the single active marker.
    ///
    /// Out-of-range pages leave the indicator unchanged and return `false`.
    pub fn sync(&mut self, active_page: usize) -> bool {
        if active_page >= self.marker_count {
            return false;
        }
        self.active = active_page;
        true
    }

    /// Number of markers.
    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.marker_count
    }

    /// Index of the active marker.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Whether marker `index` is active.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.marker_count != 0 && index == self.active
    }

    /// Active state of every marker, in order.
    pub fn markers(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.marker_count).map(|i| self.is_active(i))
    }

    /// Page a click on marker `index` should navigate to.
    #[must_use]
    pub fn page_for_click(&self, index: usize) -> Option<usize> {
        (index < self.marker_count).then_some(index)
    }

    fn format_compact(&self) -> String {
        if self.marker_count == 0 {
            return "0/0".to_owned();
        }
        format!("{}/{}", self.active + 1, self.marker_count)
    }

    fn format_page(&self) -> String {
        format!("Page {}", self.format_compact())
    }

    fn format_dots(&self, max_width: usize) -> Option<String> {
        if self.marker_count == 0 || max_width == 0 {
            return None;
        }
        let symbol_width = UnicodeWidthStr::width(self.active_symbol)
            .max(UnicodeWidthStr::width(self.inactive_symbol));
        if symbol_width == 0 || self.marker_count > max_width / symbol_width {
            return None;
        }

        let out: String = self
            .markers()
            .map(|on| {
                if on {
                    self.active_symbol
                } else {
                    self.inactive_symbol
                }
            })
            .collect();
        (UnicodeWidthStr::width(out.as_str()) <= max_width).then_some(out)
    }

    /// Text projection of the indicator, fitted to `max_width` columns.
    ///
    /// Dots mode falls back to compact when the dots do not fit.
    #[must_use]
    pub fn format_for_width(&self, max_width: usize) -> String {
        if max_width == 0 {
            return String::new();
        }
        match self.mode {
            PaginatorMode::Page => self.format_page(),
            PaginatorMode::Compact => self.format_compact(),
            PaginatorMode::Dots => self
                .format_dots(max_width)
                .unwrap_or_else(|| self.format_compact()),
        }
    }
}
