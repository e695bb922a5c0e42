//! Client-side paging over an in-memory collection.

/// Entry of the page-link bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Gap,
}

/// Current page (1-based) and page size of a paginated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    items_per_page: usize,
}

impl Pager {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Number of pages needed for `total` items; zero for an empty list.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.items_per_page)
    }

    /// Moves to `page`, clamped into the pages that exist for `total` items.
    pub fn set_page(&mut self, page: usize, total: usize) {
        let last = self.page_count(total).max(1);
        self.current_page = page.clamp(1, last);
    }

    /// Pulls the current page back into range after the list shrank.
    pub fn clamp(&mut self, total: usize) {
        self.set_page(self.current_page, total);
    }

    /// Index of the first item on the current page.
    pub fn offset(&self) -> usize {
        (self.current_page - 1) * self.items_per_page
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = (start + self.items_per_page).min(items.len());
        &items[start..end]
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.current_page < self.page_count(total)
    }

    /// Page links for a bar of at most `max_size` entries.
    ///
    /// First and last page are always present; when pages are left out a
    /// `Gap` takes the second and/or the second-to-last slot, and the window
    /// in between follows the current page.
    /// An empty list still shows a single page.
    pub fn links(&self, total: usize, max_size: usize) -> Vec<PageLink> {
        let total_pages = self.page_count(total).max(1);
        let max_size = max_size.max(5);
        let half_way = max_size.div_ceil(2);
        let current = self.current_page;

        let is_start = current <= half_way;
        let is_end = total_pages.saturating_sub(half_way) < current;
        let is_middle = !is_start && !is_end;
        let gaps_needed = max_size < total_pages;

        (1..=total_pages.min(max_size))
            .map(|slot| {
                let opening_gap = slot == 2 && (is_middle || is_end);
                let closing_gap = slot == max_size - 1 && (is_middle || is_start);
                if gaps_needed && (opening_gap || closing_gap) {
                    PageLink::Gap
                } else {
                    PageLink::Page(page_for_slot(slot, current, max_size, total_pages))
                }
            })
            .collect()
    }
}

fn page_for_slot(slot: usize, current: usize, max_size: usize, total_pages: usize) -> usize {
    let half_way = max_size.div_ceil(2);
    if slot == max_size {
        total_pages
    } else if slot == 1 || max_size >= total_pages {
        slot
    } else if total_pages - half_way < current {
        total_pages - max_size + slot
    } else if half_way < current {
        current - half_way + slot
    } else {
        slot
    }
}

#[cfg(test)]
mod tests {
    use super::PageLink::{Gap, Page};
    use super::*;

    #[test]
    fn slices_current_page() {
        let items: Vec<u32> = (1..=12).collect();
        let mut pager = Pager::new(5);
        assert_eq!(pager.page_count(items.len()), 3);
        assert_eq!(pager.slice(&items), &[1, 2, 3, 4, 5]);

        pager.set_page(3, items.len());
        assert_eq!(pager.slice(&items), &[11, 12]);
        assert_eq!(pager.offset(), 10);
        assert!(pager.has_previous());
        assert!(!pager.has_next(items.len()));
    }

    #[test]
    fn clamps_out_of_range_pages() {
        let mut pager = Pager::new(5);
        pager.set_page(9, 12);
        assert_eq!(pager.current_page(), 3);
        pager.set_page(0, 12);
        assert_eq!(pager.current_page(), 1);

        pager.set_page(3, 12);
        pager.clamp(4);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn empty_list_stays_on_first_page() {
        let mut pager = Pager::new(5);
        pager.set_page(4, 0);
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.page_count(0), 0);
        assert!(pager.slice::<u8>(&[]).is_empty());
        assert_eq!(pager.links(0, 7), vec![Page(1)]);
        assert!(!pager.has_previous());
        assert!(!pager.has_next(0));
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        assert_eq!(Pager::new(0).items_per_page(), 1);
    }

    #[test]
    fn short_lists_show_every_page() {
        let pager = Pager::new(5);
        assert_eq!(
            pager.links(23, 7),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn long_lists_window_around_current_page() {
        let total = 100; // 20 pages of 5
        let mut pager = Pager::new(5);

        assert_eq!(
            pager.links(total, 7),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Gap, Page(20)]
        );

        pager.set_page(10, total);
        assert_eq!(
            pager.links(total, 7),
            vec![Page(1), Gap, Page(9), Page(10), Page(11), Gap, Page(20)]
        );

        pager.set_page(20, total);
        assert_eq!(
            pager.links(total, 7),
            vec![Page(1), Gap, Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
    }
}
