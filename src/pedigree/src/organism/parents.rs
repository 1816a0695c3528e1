use std::fmt::{self, Display, Formatter};

use super::OrganismId;

/// Ordered parent ids of an offspring: `first` always exists, `second` may not.
/// 
/// Order matters during gamete inference: the first parent is always queried first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parents {
    first : OrganismId,
    second: Option<OrganismId>,
}

impl Parents {
    /// Build a parent set from the two raw parent fields of a record.
    /// Missing parents are filtered out, and the remaining ones keep their relative order.
    /// Returns `None` if both fields are missing (i.e. the organism is a founder).
    #[must_use]
    pub fn from_ids(ids: [Option<OrganismId>; 2]) -> Option<Self> {
        match ids {
            [Some(first), second] => Some(Self { first, second }),
            [None, Some(first)]   => Some(Self { first, second: None }),
            [None, None]          => None,
        }
    }

    #[must_use]
    pub fn first(&self) -> OrganismId {
        self.first
    }

    #[must_use]
    pub fn second(&self) -> Option<OrganismId> {
        self.second
    }

    /// Iterate over all parent ids, first parent first.
    pub fn iter(&self) -> impl Iterator<Item = OrganismId> {
        std::iter::once(self.first).chain(self.second)
    }
}

impl Display for Parents {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.second {
            Some(second) => write!(f, "{} <-> {}", self.first, second),
            None         => write!(f, "{} <-> ?", self.first),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::oid;

    fn id(raw: u32) -> Option<OrganismId> {
        OrganismId::new(raw)
    }

    #[test]
    fn founder_has_no_parents() {
        assert_eq!(Parents::from_ids([None, None]), None);
    }

    #[test]
    fn missing_first_parent_shifts_second() {
        let parents = Parents::from_ids([None, id(7)]).expect("Expected a single parent");
        assert_eq!(parents.first(), oid(7));
        assert_eq!(parents.second(), None);
        assert_eq!(parents.iter().count(), 1);
    }

    #[test]
    fn iter_keeps_order() {
        let parents = Parents::from_ids([id(4), id(2)]).expect("Expected two parents");
        let got: Vec<OrganismId> = parents.iter().collect();
        assert_eq!(got, vec![oid(4), oid(2)]);
    }

    #[test]
    fn display() {
        let parents = Parents::from_ids([id(4), id(2)]).expect("Expected two parents");
        assert_eq!(parents.to_string(), "4 <-> 2");
        let parents = Parents::from_ids([id(4), None]).expect("Expected a single parent");
        assert_eq!(parents.to_string(), "4 <-> ?");
    }
}
