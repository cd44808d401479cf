//! Listing pagination.

use serde::Serialize;
use std::num::NonZeroUsize;

/// One listing page. `number` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub number: usize,
    pub total: usize,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    #[inline]
    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        self.number < self.total
    }

    /// Site-relative URL of this page.
    pub fn url(&self, base_path: &str) -> String {
        page_url(base_path, self.number)
    }

    pub fn prev_url(&self, base_path: &str) -> Option<String> {
        self.has_prev()
            .then(|| page_url(base_path, self.number - 1))
    }

    pub fn next_url(&self, base_path: &str) -> Option<String> {
        self.has_next()
            .then(|| page_url(base_path, self.number + 1))
    }
}

/// Split `items` into pages of `per_page`.
///
/// Every page holds at least one item; an empty input yields no pages.
pub fn paginate<T>(items: Vec<T>, per_page: NonZeroUsize) -> Vec<Page<T>> {
    let per_page = per_page.get();
    let total = items.len().div_ceil(per_page);

    let mut pages = Vec::with_capacity(total);
    let mut items = items.into_iter().peekable();
    while items.peek().is_some() {
        pages.push(Page {
            number: pages.len() + 1,
            total,
            items: items.by_ref().take(per_page).collect(),
        });
    }
    pages
}

/// URL of listing page `number`: `/posts/` for the first, `/posts/n/` after.
///
/// `base_path` is the deployment prefix without slashes (`""` at the root).
pub fn page_url(base_path: &str, number: usize) -> String {
    let prefix = if base_path.is_empty() {
        String::new()
    } else {
        format!("/{base_path}")
    };

    if number <= 1 {
        format!("{prefix}/posts/")
    } else {
        format!("{prefix}/posts/{number}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE: NonZeroUsize = NonZeroUsize::new(3).unwrap();

    #[test]
    fn test_seven_items_three_per_page() {
        let pages = paginate((1..=7).collect(), THREE);

        let sizes: Vec<_> = pages.iter().map(|p| p.items.len()).collect();
        assert_eq!(sizes, [3, 3, 1]);
        assert_eq!(pages[2].items, [7]);
        assert!(pages.iter().all(|p| p.total == 3));
        let numbers: Vec<_> = pages.iter().map(|p| p.number).collect();
        assert_eq!(numbers, [1, 2, 3]);
    }

    #[test]
    fn test_empty_input_has_no_pages() {
        let pages = paginate(Vec::<u32>::new(), THREE);
        assert!(pages.is_empty());
    }

    #[test]
    fn test_no_empty_pages() {
        for len in 0..20 {
            for per_page in 1..6 {
                let pages = paginate(vec![(); len], NonZeroUsize::new(per_page).unwrap());
                assert!(pages.iter().all(|p| !p.items.is_empty()));
                assert_eq!(pages.iter().map(|p| p.items.len()).sum::<usize>(), len);
            }
        }
    }

    #[test]
    fn test_exact_multiple() {
        let pages = paginate((0..6).collect::<Vec<_>>(), THREE);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].items.len(), 3);
    }

    #[test]
    fn test_page_urls() {
        assert_eq!(page_url("", 1), "/posts/");
        assert_eq!(page_url("", 2), "/posts/2/");
        assert_eq!(page_url("blog", 1), "/blog/posts/");
        assert_eq!(page_url("blog", 3), "/blog/posts/3/");
    }

    #[test]
    fn test_prev_next() {
        let pages = paginate((1..=7).collect::<Vec<_>>(), THREE);

        assert_eq!(pages[0].prev_url(""), None);
        assert_eq!(pages[0].next_url("").as_deref(), Some("/posts/2/"));
        assert_eq!(pages[1].prev_url("").as_deref(), Some("/posts/"));
        assert_eq!(pages[2].next_url(""), None);
        assert_eq!(pages[2].url(""), "/posts/3/");
    }
}
