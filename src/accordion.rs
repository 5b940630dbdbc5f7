/// Which item of a single-open list is expanded, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpenItem(Option<usize>);

impl OpenItem {
    /// Opens `index`, or closes it if it is already the open item.
    pub fn toggled(self, index: usize) -> Self {
        if self.0 == Some(index) {
            OpenItem(None)
        } else {
            OpenItem(Some(index))
        }
    }

    pub fn is_open(self, index: usize) -> bool {
        self.0 == Some(index)
    }

    pub fn index(self) -> Option<usize> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let open = OpenItem::default();
        assert_eq!(open.index(), None);
        assert!(!open.is_open(0));
    }

    #[test]
    fn only_one_item_open() {
        let open = OpenItem::default().toggled(2);
        assert!(open.is_open(2));

        let open = open.toggled(5);
        assert!(open.is_open(5));
        assert!(!open.is_open(2));
    }

    #[test]
    fn toggling_open_item_closes_it() {
        let open = OpenItem::default().toggled(3).toggled(3);
        assert_eq!(open, OpenItem::default());
        assert!(open.toggled(3).is_open(3));
    }
}
