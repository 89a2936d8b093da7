/// Single-open accordion state.
///
/// Entries are identified by position in their static list by default; any
/// comparable key works, which lets a page key entries by a stable slug
/// instead.
#[derive(Clone, Debug, PartialEq)]
pub struct AccordionSelector<K = usize> {
    open: Option<K>,
}

impl<K> Default for AccordionSelector<K> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<K: PartialEq> AccordionSelector<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `key`, closing whatever was open. Selecting the open entry
    /// closes it. Returns whether `key` is open afterwards.
    pub fn select(&mut self, key: K) -> bool {
        if self.open.as_ref() == Some(&key) {
            self.open = None;
            false
        } else {
            self.open = Some(key);
            true
        }
    }

    pub fn is_open(&self, key: &K) -> bool {
        self.open.as_ref() == Some(key)
    }

    pub fn open(&self) -> Option<&K> {
        self.open.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_set(acc: &AccordionSelector, len: usize) -> Vec<usize> {
        (0..len).filter(|i| acc.is_open(i)).collect()
    }

    #[test]
    fn select_opens_then_closes() {
        let mut acc: AccordionSelector = AccordionSelector::new();
        assert!(acc.select(3));
        assert_eq!(open_set(&acc, 10), vec![3]);

        assert!(!acc.select(3));
        assert!(open_set(&acc, 10).is_empty());
        assert_eq!(acc.open(), None);
    }

    #[test]
    fn selecting_another_entry_replaces_the_open_one() {
        let mut acc: AccordionSelector = AccordionSelector::new();
        acc.select(2);
        acc.select(7);
        assert_eq!(open_set(&acc, 10), vec![7]);
    }

    #[test]
    fn last_then_first_leaves_only_first_open() {
        let entries = 50;
        let mut acc: AccordionSelector = AccordionSelector::new();
        acc.select(entries - 1);
        assert_eq!(open_set(&acc, entries), vec![entries - 1]);
        acc.select(0);
        assert_eq!(open_set(&acc, entries), vec![0]);
    }

    #[test]
    fn keyed_by_slug() {
        let mut acc = AccordionSelector::<&str>::new();
        acc.select("deadline");
        acc.select("damages");
        assert!(acc.is_open(&"damages"));
        assert!(!acc.is_open(&"deadline"));
    }
}
