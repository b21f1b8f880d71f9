use lazy_static::lazy_static;

/// A unit name and how many base units fit into one of it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitEntry {
    pub name: &'static str,
    /// Multiplier converting one `name` into the category's base unit (always > 0)
    pub factor: f64,
}

/// Immutable, insertion-ordered mapping from unit name to base-relative factor
///
/// Tables are tiny, so lookups are a linear scan over the entries. This keeps the
/// insertion order for diagnostics without a second index.
#[derive(Debug, Clone)]
pub struct UnitTable {
    entries: Vec<UnitEntry>,
}

lazy_static! {
    /// Length units, base unit meter
    pub static ref LENGTH: UnitTable = UnitTable::new(&[
        ("meter", 1.0),
        ("millimeter", 1e-3),
        ("kilometer", 1e3),
    ]);
}

impl UnitTable {
    /// Build a table from `(name, factor)` pairs
    ///
    /// Only called for the static tables above; names must be unique and
    /// factors strictly positive.
    fn new(pairs: &[(&'static str, f64)]) -> Self {
        debug_assert!(pairs.iter().all(|(_, factor)| *factor > 0.0));
        debug_assert!(pairs
            .iter()
            .enumerate()
            .all(|(i, (name, _))| pairs[..i].iter().all(|(other, _)| other != name)));

        let entries = pairs
            .iter()
            .map(|&(name, factor)| UnitEntry { name, factor })
            .collect();
        Self { entries }
    }

    /// Factor for `name`, or `None` if the table has no such unit
    /// Matching is exact: case-sensitive, no trimming, no aliases
    pub fn lookup(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.factor)
    }

    /// All unit names in insertion order
    pub fn list_names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.name).collect()
    }

    /// Names joined for diagnostics, e.g. "meter, millimeter, kilometer"
    pub fn valid_units(&self) -> String {
        self.list_names().join(", ")
    }

    pub fn entries(&self) -> &[UnitEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_units() {
        assert_eq!(LENGTH.lookup("meter"), Some(1.0));
        assert_eq!(LENGTH.lookup("millimeter"), Some(1e-3));
        assert_eq!(LENGTH.lookup("kilometer"), Some(1e3));
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(LENGTH.lookup("Meter"), None);
        assert_eq!(LENGTH.lookup(" meter"), None);
        assert_eq!(LENGTH.lookup("meter "), None);
        assert_eq!(LENGTH.lookup("m"), None);
        assert_eq!(LENGTH.lookup(""), None);
    }

    #[test]
    fn test_list_names_keeps_insertion_order() {
        assert_eq!(LENGTH.list_names(), vec!["meter", "millimeter", "kilometer"]);
        // Same answer on every call
        assert_eq!(LENGTH.list_names(), LENGTH.list_names());
    }

    #[test]
    fn test_valid_units() {
        assert_eq!(LENGTH.valid_units(), "meter, millimeter, kilometer");
    }

    #[test]
    fn test_factors_are_positive() {
        assert_eq!(LENGTH.len(), 3);
        assert!(!LENGTH.is_empty());
        assert!(LENGTH.entries().iter().all(|entry| entry.factor > 0.0));
    }

    #[test]
    fn test_custom_table() {
        let table = UnitTable::new(&[("gram", 1.0), ("kilogram", 1e3)]);
        assert_eq!(table.lookup("kilogram"), Some(1e3));
        assert_eq!(table.lookup("meter"), None);
        assert_eq!(table.valid_units(), "gram, kilogram");
    }
}
