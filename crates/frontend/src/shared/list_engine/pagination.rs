/// Bounds for the per-page setting.
pub const PER_PAGE_MIN: usize = 5;
pub const PER_PAGE_MAX: usize = 100;
pub const PER_PAGE_DEFAULT: usize = 25;

pub const PER_PAGE_OPTIONS: [usize; 5] = [5, 10, 25, 50, 100];

pub fn clamp_per_page(value: usize) -> usize {
    value.clamp(PER_PAGE_MIN, PER_PAGE_MAX)
}

/// Clamp a 1-based page number against the reported page count. A count of
/// zero (nothing fetched yet, or an empty collection) pins to page 1 so the
/// pagination control never underflows.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    if total_pages == 0 {
        return 1;
    }
    page.clamp(1, total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_page_is_clamped_to_bounds() {
        assert_eq!(clamp_per_page(1), PER_PAGE_MIN);
        assert_eq!(clamp_per_page(25), 25);
        assert_eq!(clamp_per_page(1000), PER_PAGE_MAX);
    }

    #[test]
    fn page_beyond_total_clamps() {
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
    }

    #[test]
    fn empty_collection_pins_to_first_page() {
        assert_eq!(clamp_page(5, 0), 1);
    }
}
