use std::path::Path;

use super::builtin;
use super::hash::fnv1a_32;
use super::primitives::PatternRecord;
use crate::{Error, Result};

/// Immutable, ordered set of kolam templates.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it after
/// construction, so lookups need no locking.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    records: Vec<PatternRecord>,
}

impl PatternCatalog {
    /// Create a catalog from explicit records
    pub fn new(records: Vec<PatternRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        Ok(Self { records })
    }

    /// The three templates the service ships with
    pub fn builtin() -> Self {
        Self {
            records: builtin::records(),
        }
    }

    /// Parse a YAML list of records
    pub fn from_yaml(text: &str) -> Result<Self> {
        let records: Vec<PatternRecord> =
            serde_yaml::from_str(text).map_err(|e| Error::CatalogParse(e.to_string()))?;
        Self::new(records)
    }

    /// Load a YAML catalog from disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; construction rejects empty catalogs.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PatternRecord] {
        &self.records
    }

    /// Look up a record by its `id`
    pub fn get(&self, id: &str) -> Option<&PatternRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Index `select` uses for `name`
    pub fn index_for(&self, name: &str) -> usize {
        fnv1a_32(name.as_bytes()) as usize % self.records.len()
    }

    /// Pick the template for `name`.
    ///
    /// Returns an owned copy; callers stamp and mutate it freely.
    pub fn select(&self, name: &str) -> PatternRecord {
        self.records[self.index_for(name)].clone()
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Point;

    #[test]
    fn test_select_is_deterministic() {
        let catalog = PatternCatalog::builtin();
        for name in ["test.png", "", "kolam photo (1).jpeg", "கோலம்.png"] {
            assert_eq!(catalog.select(name), catalog.select(name));
            assert_eq!(catalog.select(name), PatternCatalog::builtin().select(name));
        }
    }

    #[test]
    fn test_select_returns_catalog_entry() {
        let catalog = PatternCatalog::builtin();
        for i in 0..64 {
            let name = format!("upload_{i}.png");
            let picked = catalog.select(&name);
            let matches = catalog.records().iter().filter(|r| **r == picked).count();
            assert_eq!(matches, 1, "{name} selected a record not in the catalog");
        }
    }

    #[test]
    fn test_select_index_follows_fnv() {
        let catalog = PatternCatalog::builtin();
        let expected = fnv1a_32(b"test.png") as usize % 3;
        assert_eq!(catalog.index_for("test.png"), expected);
        assert_eq!(catalog.select("test.png"), catalog.records()[expected]);
        // fnv1a("") = 0x811c9dc5 = 2166136261, which is 1 mod 3
        assert_eq!(catalog.select("").id, "KLM_002");
    }

    #[test]
    fn test_select_reaches_every_record() {
        let catalog = PatternCatalog::builtin();
        let mut seen = [false; 3];
        for i in 0..100 {
            seen[catalog.index_for(&format!("{i}.png"))] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_mutating_copy_leaves_catalog_intact() {
        let catalog = PatternCatalog::builtin();
        let mut copy = catalog.select("test.png");
        copy.id = "CHANGED".to_string();
        copy.grid.dots.clear();
        copy.paths[0].push(Point(0, 0));

        let again = catalog.select("test.png");
        assert_ne!(again.id, "CHANGED");
        assert!(!again.grid.dots.is_empty());
        assert_ne!(again, copy);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(PatternCatalog::new(vec![]), Err(Error::EmptyCatalog)));
    }

    #[test]
    fn test_substitute_catalog_from_yaml() {
        let yaml = r#"
- id: ONLY
  type: Test Kolam
  complexity: Low
  symmetry: None
  equations:
    x_function: "t"
    y_function: "t"
    domain: [0, 1]
    r_squared: 1.0
  grid:
    type: circular
    dimensions: [1, 1]
    dots: [[10, 20]]
  paths: [[[10, 20], [30, 40]]]
"#;
        let catalog = PatternCatalog::from_yaml(yaml).unwrap();
        assert_eq!(catalog.len(), 1);
        for name in ["a", "b", "test.png"] {
            assert_eq!(catalog.select(name).id, "ONLY");
        }
        assert_eq!(catalog.get("ONLY").unwrap().grid.dots, vec![Point(10, 20)]);
        assert!(catalog.get("KLM_001").is_none());
    }

    #[test]
    fn test_from_yaml_errors() {
        assert!(matches!(PatternCatalog::from_yaml("[]"), Err(Error::EmptyCatalog)));
        assert!(matches!(
            PatternCatalog::from_yaml("- id: 3\n  nope: true"),
            Err(Error::CatalogParse(_))
        ));
    }

    #[test]
    fn test_load_roundtrips_builtin_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        let yaml = serde_yaml::to_string(PatternCatalog::builtin().records()).unwrap();
        std::fs::write(&path, yaml).unwrap();

        let loaded = PatternCatalog::load(&path).unwrap();
        assert_eq!(loaded.records(), PatternCatalog::builtin().records());
        assert!(matches!(
            PatternCatalog::load(&dir.path().join("missing.yaml")),
            Err(Error::Io(_))
        ));
    }
}
