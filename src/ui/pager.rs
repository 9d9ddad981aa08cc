/// Fixed-size window over the result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    start: usize,
    page_size: usize,
    total: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            start: 0,
            page_size: page_size.max(1),
            total: 0,
        }
    }

    /// Table length changed; keep the window inside it.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        if self.start >= total {
            self.start = 0;
        }
    }

    /// Configured size, shrunk to the rows available.
    fn page_size(&self) -> usize {
        self.page_size.min(self.total)
    }

    /// `(start, len)` of the visible rows.
    pub fn window(&self) -> (usize, usize) {
        let len = self.page_size().min(self.total - self.start);
        (self.start, len)
    }

    pub fn next_page(&mut self) {
        if self.start + self.page_size < self.total {
            self.start += self.page_size;
        }
    }

    pub fn prev_page(&mut self) {
        self.start = self.start.saturating_sub(self.page_size);
    }

    pub fn label(&self) -> String {
        let (start, len) = self.window();
        if len == 0 {
            return "No rows".to_string();
        }
        format!("Rows {}-{} of {}", start + 1, start + len, self.total)
    }
}
