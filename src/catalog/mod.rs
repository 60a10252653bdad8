//! The read-only periodic-table catalog.
//!
//! A catalog is loaded in full at construction from a tabular JSON resource
//! (exactly 118 records, atomic numbers 1..=118) and never mutated
//! afterwards. It backs symbol lookups in the segmenter and supplies
//! display attributes (name, mass, color) to the rendering collaborator.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::KemioError;

/// Number of records a well-formed catalog resource carries.
pub const ELEMENT_COUNT: usize = 118;

/// The bundled element table (CPK-style colors, abridged standard weights).
const BUILTIN_RESOURCE: &str = include_str!("../../assets/elements.json");

/// One immutable element record, keyed by atomic number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    /// Atomic number, 1..=118.
    #[serde(rename = "AtomicNumber")]
    pub atomic_number: u32,
    /// Element symbol, one or two letters (e.g. "O", "Ba").
    #[serde(rename = "Symbol")]
    pub symbol: String,
    /// English element name.
    #[serde(rename = "Name")]
    pub name: String,
    /// Standard atomic weight (mass number for elements without one).
    #[serde(rename = "AtomicMass")]
    pub atomic_mass: f64,
    /// Display color as RGB components in [0, 1].
    #[serde(rename = "Color", with = "crate::util::color::hex")]
    pub color: [f32; 3],
}

/// The read-only element table with O(1) lookup by atomic number and by
/// case-insensitive symbol.
#[derive(Debug, Clone)]
pub struct ElementCatalog {
    /// Slot-indexed records: `records[z - 1]` holds atomic number `z`.
    records: Vec<ElementRecord>,
    /// Lowercase symbol -> atomic number.
    by_symbol: FxHashMap<String, u32>,
}

impl ElementCatalog {
    /// Load the bundled 118-element resource.
    ///
    /// # Errors
    ///
    /// Fails only if the embedded resource is corrupt, which indicates a
    /// packaging defect rather than a runtime condition.
    pub fn builtin() -> Result<Self, KemioError> {
        Self::from_json_str(BUILTIN_RESOURCE)
    }

    /// Parse a catalog from JSON resource text.
    ///
    /// # Errors
    ///
    /// Returns [`KemioError::CatalogParse`] when the text is not a JSON
    /// array of records, the row count differs from
    /// [`ELEMENT_COUNT`], an atomic number is out of range or duplicated, a
    /// symbol is not one or two ASCII letters, or two records share a
    /// symbol.
    pub fn from_json_str(json: &str) -> Result<Self, KemioError> {
        let rows: Vec<ElementRecord> = serde_json::from_str(json)
            .map_err(|e| KemioError::CatalogParse(e.to_string()))?;
        Self::from_records(rows)
    }

    /// Load a catalog resource from a file path.
    ///
    /// # Errors
    ///
    /// Returns [`KemioError::Io`] on file access failure, otherwise the same
    /// validation errors as [`Self::from_json_str`].
    pub fn from_path(path: &Path) -> Result<Self, KemioError> {
        let content = std::fs::read_to_string(path).map_err(KemioError::Io)?;
        Self::from_json_str(&content)
    }

    /// Validate records and build the lookup tables.
    fn from_records(rows: Vec<ElementRecord>) -> Result<Self, KemioError> {
        if rows.len() != ELEMENT_COUNT {
            return Err(KemioError::CatalogParse(format!(
                "expected {ELEMENT_COUNT} element rows, found {}",
                rows.len()
            )));
        }

        let mut slots: Vec<Option<ElementRecord>> =
            (0..ELEMENT_COUNT).map(|_| None).collect();
        let mut by_symbol = FxHashMap::default();
        for row in rows {
            validate_record(&row)?;
            let slot = &mut slots[row.atomic_number as usize - 1];
            if slot.is_some() {
                return Err(KemioError::CatalogParse(format!(
                    "duplicate atomic number {}",
                    row.atomic_number
                )));
            }
            let key = row.symbol.to_lowercase();
            if by_symbol.insert(key, row.atomic_number).is_some() {
                return Err(KemioError::CatalogParse(format!(
                    "duplicate symbol {:?}",
                    row.symbol
                )));
            }
            *slot = Some(row);
        }

        // Row count and uniqueness together guarantee full 1..=118 coverage.
        let records: Vec<ElementRecord> = slots.into_iter().flatten().collect();
        log::info!("loaded {} element records", records.len());
        Ok(Self { records, by_symbol })
    }

    /// Look up a record by atomic number.
    ///
    /// # Errors
    ///
    /// Returns [`KemioError::UnknownElement`] for numbers outside 1..=118.
    pub fn by_atomic_number(
        &self,
        atomic_number: u32,
    ) -> Result<&ElementRecord, KemioError> {
        (atomic_number as usize)
            .checked_sub(1)
            .and_then(|idx| self.records.get(idx))
            .ok_or_else(|| {
                KemioError::UnknownElement(format!(
                    "atomic number {atomic_number}"
                ))
            })
    }

    /// Look up a record by symbol, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`KemioError::UnknownElement`] when no element uses the
    /// symbol.
    pub fn by_symbol(&self, symbol: &str) -> Result<&ElementRecord, KemioError> {
        let z = self.symbol_to_atomic_number(symbol).ok_or_else(|| {
            KemioError::UnknownElement(format!("symbol {symbol:?}"))
        })?;
        self.by_atomic_number(z)
    }

    /// Atomic number for a symbol, case-insensitively. `None` on a miss.
    #[must_use]
    pub fn symbol_to_atomic_number(&self, symbol: &str) -> Option<u32> {
        self.by_symbol.get(&symbol.to_lowercase()).copied()
    }

    /// All records in atomic-number order.
    #[must_use]
    pub fn records(&self) -> &[ElementRecord] {
        &self.records
    }

    /// Number of records (always [`ELEMENT_COUNT`] once constructed).
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty (never, once constructed).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Per-record validation: atomic number range and symbol shape.
fn validate_record(record: &ElementRecord) -> Result<(), KemioError> {
    if record.atomic_number == 0 || record.atomic_number as usize > ELEMENT_COUNT
    {
        return Err(KemioError::CatalogParse(format!(
            "atomic number {} out of range 1..={ELEMENT_COUNT}",
            record.atomic_number
        )));
    }
    let symbol_ok = matches!(record.symbol.len(), 1 | 2)
        && record.symbol.chars().all(|c| c.is_ascii_alphabetic());
    if !symbol_ok {
        return Err(KemioError::CatalogParse(format!(
            "symbol {:?} is not one or two ASCII letters",
            record.symbol
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_all_118_elements() {
        let catalog = ElementCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), ELEMENT_COUNT);
        for z in 1..=118 {
            let record = catalog.by_atomic_number(z).unwrap();
            assert_eq!(record.atomic_number, z);
        }
    }

    #[test]
    fn test_symbol_lookup_is_case_insensitive() {
        let catalog = ElementCatalog::builtin().unwrap();
        for query in ["ba", "Ba", "BA", "bA"] {
            assert_eq!(catalog.by_symbol(query).unwrap().atomic_number, 56);
        }
        assert_eq!(catalog.by_symbol("o").unwrap().name, "Oxygen");
    }

    #[test]
    fn test_lookup_misses_raise_unknown_element() {
        let catalog = ElementCatalog::builtin().unwrap();
        assert!(matches!(
            catalog.by_atomic_number(0),
            Err(KemioError::UnknownElement(_))
        ));
        assert!(matches!(
            catalog.by_atomic_number(119),
            Err(KemioError::UnknownElement(_))
        ));
        assert!(matches!(
            catalog.by_symbol("xx"),
            Err(KemioError::UnknownElement(_))
        ));
    }

    #[test]
    fn test_wrong_row_count_is_rejected() {
        let err = ElementCatalog::from_json_str("[]").unwrap_err();
        assert!(matches!(err, KemioError::CatalogParse(_)));
    }

    #[test]
    fn test_duplicate_atomic_number_is_rejected() {
        let catalog = ElementCatalog::builtin().unwrap();
        let mut rows: Vec<ElementRecord> = catalog.records().to_vec();
        rows[1] = rows[0].clone();
        let json = serde_json::to_string(&rows).unwrap();
        let err = ElementCatalog::from_json_str(&json).unwrap_err();
        assert!(matches!(err, KemioError::CatalogParse(_)));
    }

    #[test]
    fn test_bad_symbol_is_rejected() {
        let catalog = ElementCatalog::builtin().unwrap();
        let mut rows: Vec<ElementRecord> = catalog.records().to_vec();
        rows[0].symbol = "Xyz".into();
        let json = serde_json::to_string(&rows).unwrap();
        let err = ElementCatalog::from_json_str(&json).unwrap_err();
        assert!(matches!(err, KemioError::CatalogParse(_)));
    }

    #[test]
    fn test_colors_parse_from_hex() {
        let catalog = ElementCatalog::builtin().unwrap();
        let oxygen = catalog.by_atomic_number(8).unwrap();
        // Oxygen is CPK red: #FF0D0D.
        assert!((oxygen.color[0] - 1.0).abs() < 1e-6);
        assert!(oxygen.color[1] < 0.1);
        assert!(oxygen.color[2] < 0.1);
    }
}
