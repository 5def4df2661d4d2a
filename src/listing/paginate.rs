//! Slicing an ordered sequence into pages.

use crate::models::Page;

/// Cut out page `page` (1-based) of size `limit`.
///
/// Out-of-range pages, including anything below 1, give an empty slice with
/// the totals still filled in. A zero `limit` has no pages at all.
pub fn paginate<T>(items: Vec<T>, page: i64, limit: usize) -> Page<T> {
    let total = items.len();
    let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };

    let data = match usize::try_from(page) {
        Ok(page) if page >= 1 && page <= total_pages => {
            let start = (page - 1) * limit;
            items.into_iter().skip(start).take(limit).collect()
        }
        _ => Vec::new(),
    };

    Page {
        data,
        total,
        page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_page_of_twenty_five() {
        let items: Vec<usize> = (0..25).collect();
        let page = paginate(items, 2, 10);

        assert_eq!(page.data, (10..20).collect::<Vec<_>>());
        assert_eq!(page.total, 25);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_last_page_is_partial() {
        let page = paginate((0..25).collect::<Vec<usize>>(), 3, 10);
        assert_eq!(page.data, vec![20, 21, 22, 23, 24]);
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        for requested in [-1, 0, 4, 100] {
            let page = paginate((0..25).collect::<Vec<usize>>(), requested, 10);
            assert!(page.data.is_empty(), "page {requested} should be empty");
            assert_eq!(page.total, 25);
            assert_eq!(page.total_pages, 3);
            assert_eq!(page.page, requested);
        }
    }

    #[test]
    fn test_empty_input() {
        let page = paginate(Vec::<usize>::new(), 1, 10);
        assert!(page.data.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_zero_limit_has_no_pages() {
        let page = paginate((0..5).collect::<Vec<usize>>(), 1, 0);
        assert!(page.data.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_pages_cover_every_item_once() {
        for total in [0usize, 1, 9, 10, 11, 57] {
            for limit in [1usize, 3, 10, 60] {
                let items: Vec<usize> = (0..total).collect();
                let total_pages = paginate(items.clone(), 1, limit).total_pages;

                let mut seen = Vec::new();
                for page in 1..=total_pages as i64 {
                    seen.extend(paginate(items.clone(), page, limit).data);
                }
                assert_eq!(seen, items, "total={total} limit={limit}");
            }
        }
    }
}
