//! In-memory catalog store.
//!
//! Records live in an insertion-ordered map keyed by id. A single lock guards
//! both the map and the id counter, so `create` is serialized while reads
//! work on a cloned snapshot.

pub mod seed;

use std::collections::BTreeSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use motocompare_core::error::CoreError;
use motocompare_core::filters::SearchFilters;
use motocompare_core::motorcycle::{CreateMotorcycle, Motorcycle};
use motocompare_core::similarity::{self, SimilarMotorcycle};
use motocompare_core::types::DbId;
use validator::Validate;

struct Catalog {
    next_id: DbId,
    records: IndexMap<DbId, Motorcycle>,
}

/// The catalog of motorcycle records for the lifetime of the process.
///
/// Construct explicitly and share behind an `Arc`; there is no global
/// instance.
pub struct MotorcycleStore {
    catalog: RwLock<Catalog>,
}

impl Default for MotorcycleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MotorcycleStore {
    /// Create an empty store. The first record gets id 1.
    pub fn new() -> Self {
        Self {
            catalog: RwLock::new(Catalog {
                next_id: 1,
                records: IndexMap::new(),
            }),
        }
    }

    /// Create a store pre-loaded with the reference catalog.
    pub fn seeded() -> Result<Self, CoreError> {
        let store = Self::new();
        for input in seed::seed_records() {
            store.create(input)?;
        }
        tracing::info!(count = store.len()?, "Catalog seeded");
        Ok(store)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Catalog>, CoreError> {
        self.catalog
            .read()
            .map_err(|_| CoreError::Internal("catalog lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Catalog>, CoreError> {
        self.catalog
            .write()
            .map_err(|_| CoreError::Internal("catalog lock poisoned".into()))
    }

    /// Validate `input`, assign the next id and append it.
    pub fn create(&self, input: CreateMotorcycle) -> Result<Motorcycle, CoreError> {
        input.validate()?;

        let mut catalog = self.write()?;
        let id = catalog.next_id;
        catalog.next_id += 1;

        let motorcycle = Motorcycle::from_create(id, input);
        catalog.records.insert(id, motorcycle.clone());
        tracing::debug!(id, name = %motorcycle.name, "Motorcycle added to catalog");
        Ok(motorcycle)
    }

    /// Every record in insertion order.
    pub fn get_all(&self) -> Result<Vec<Motorcycle>, CoreError> {
        Ok(self.read()?.records.values().cloned().collect())
    }

    pub fn get_by_id(&self, id: DbId) -> Result<Option<Motorcycle>, CoreError> {
        Ok(self.read()?.records.get(&id).cloned())
    }

    /// Like [`get_by_id`](Self::get_by_id), but a missing record is an error.
    pub fn require(&self, id: DbId) -> Result<Motorcycle, CoreError> {
        self.get_by_id(id)?.ok_or(CoreError::NotFound {
            entity: "Motorcycle",
            id,
        })
    }

    pub fn len(&self) -> Result<usize, CoreError> {
        Ok(self.read()?.records.len())
    }

    pub fn is_empty(&self) -> Result<bool, CoreError> {
        Ok(self.len()? == 0)
    }

    pub fn search(&self, query: &str) -> Result<Vec<Motorcycle>, CoreError> {
        let snapshot = self.get_all()?;
        Ok(motocompare_core::query::search(&snapshot, query))
    }

    pub fn filter(&self, filters: &SearchFilters) -> Result<Vec<Motorcycle>, CoreError> {
        let snapshot = self.get_all()?;
        Ok(motocompare_core::query::filter(&snapshot, filters))
    }

    /// Suggestions for the records in `selected_ids`, scored against the
    /// first one. Unknown ids are an error.
    pub fn similar(
        &self,
        selected_ids: &[DbId],
        limit: usize,
    ) -> Result<Vec<SimilarMotorcycle>, CoreError> {
        let selected = selected_ids
            .iter()
            .map(|id| self.require(*id))
            .collect::<Result<Vec<_>, _>>()?;
        let snapshot = self.get_all()?;
        Ok(similarity::similar(&snapshot, &selected, limit))
    }

    /// Distinct brand names, sorted.
    pub fn list_brands(&self) -> Result<Vec<String>, CoreError> {
        self.distinct(|m| &m.brand)
    }

    /// Distinct category names, sorted.
    pub fn list_categories(&self) -> Result<Vec<String>, CoreError> {
        self.distinct(|m| &m.category)
    }

    fn distinct(&self, field: impl Fn(&Motorcycle) -> &String) -> Result<Vec<String>, CoreError> {
        let catalog = self.read()?;
        let set: BTreeSet<&String> = catalog.records.values().map(field).collect();
        Ok(set.into_iter().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use motocompare_core::filters::SortBy;

    fn seeded() -> MotorcycleStore {
        MotorcycleStore::seeded().unwrap()
    }

    fn ids(records: &[Motorcycle]) -> Vec<DbId> {
        records.iter().map(|m| m.id).collect()
    }

    #[test]
    fn seed_assigns_sequential_ids() {
        let store = seeded();
        let all = store.get_all().unwrap();
        assert_eq!(all.len(), 7);
        assert_eq!(ids(&all), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(all[0].name, "Bera SBR 150cc");
        assert_eq!(all[6].name, "BMW S1000RR");
    }

    #[test]
    fn seed_keeps_literal_torque_values() {
        let br200 = seeded().require(3).unwrap();
        assert_eq!(br200.name, "Bera BR 200cc");
        assert_eq!(br200.max_torque, 6500.0);
        assert_eq!(br200.max_torque_rpm, 12500);
    }

    #[test]
    fn get_by_id_round_trips_every_record() {
        let store = seeded();
        for record in store.get_all().unwrap() {
            assert_eq!(store.get_by_id(record.id).unwrap(), Some(record));
        }
    }

    #[test]
    fn unknown_id_is_none_or_not_found() {
        let store = seeded();
        assert_eq!(store.get_by_id(99).unwrap(), None);
        assert_matches!(
            store.require(99),
            Err(CoreError::NotFound { entity: "Motorcycle", id: 99 })
        );
    }

    #[test]
    fn create_appends_with_next_id() {
        let store = seeded();
        let mut input = seed::seed_records().remove(0);
        input.name = "Bera SBR 150cc (2026)".to_string();
        let created = store.create(input).unwrap();
        assert_eq!(created.id, 8);
        assert_eq!(store.get_all().unwrap().last().unwrap().id, 8);
    }

    #[test]
    fn create_rejects_invalid_input_without_consuming_an_id() {
        let store = MotorcycleStore::new();
        let mut input = seed::seed_records().remove(0);
        input.brand = String::new();
        assert_matches!(store.create(input), Err(CoreError::InvalidFields(fields)) => {
            assert_eq!(fields[0].field, "brand");
        });

        let created = store.create(seed::seed_records().remove(1)).unwrap();
        assert_eq!(created.id, 1);
    }

    #[test]
    fn brands_and_categories_are_sorted_and_distinct() {
        let store = seeded();
        assert_eq!(
            store.list_brands().unwrap(),
            vec!["AVA", "BMW", "Bera", "Ducati", "Kawasaki"]
        );
        assert_eq!(
            store.list_categories().unwrap(),
            vec!["Classic", "Off-Road", "Sport"]
        );
    }

    #[test]
    fn search_results_are_subset_containing_query() {
        let store = seeded();
        let results = store.search("SPORT").unwrap();
        assert_eq!(ids(&results), vec![5, 6, 7]);

        let results = store.search("urban").unwrap();
        assert_eq!(ids(&results), vec![1, 2, 3]);
    }

    #[test]
    fn filter_price_asc_over_seed() {
        let store = seeded();
        let filters = SearchFilters {
            sort_by: Some(SortBy::PriceAsc),
            ..Default::default()
        };
        let prices: Vec<i64> = store.filter(&filters).unwrap().iter().map(|m| m.price).collect();
        assert_eq!(prices, vec![950, 980, 1250, 1360, 16399, 17895, 22595]);
    }

    #[test]
    fn filter_power_sorts_fractional_values() {
        let store = seeded();
        let filters = SearchFilters {
            categories: Some(vec!["Classic".to_string(), "Off-Road".to_string()]),
            sort_by: Some(SortBy::Power),
            ..Default::default()
        };
        // 15 hp, then the two 12 hp Beras in catalog order, then 11.8 hp.
        assert_eq!(ids(&store.filter(&filters).unwrap()), vec![3, 1, 2, 4]);
    }

    #[test]
    fn similar_for_zx10r() {
        let store = seeded();
        let suggestions = store.similar(&[5], 3).unwrap();
        let got: Vec<(DbId, u8)> = suggestions
            .iter()
            .map(|s| (s.motorcycle.id, s.match_percentage))
            .collect();
        assert_eq!(got[0], (7, 99));
        assert_eq!(got.len(), 2);
        assert_eq!(got[1].0, 6);
    }

    #[test]
    fn similar_with_unknown_id_is_not_found() {
        assert_matches!(seeded().similar(&[5, 42], 3), Err(CoreError::NotFound { id: 42, .. }));
    }

    #[test]
    fn similar_with_empty_selection_is_empty() {
        assert!(seeded().similar(&[], 3).unwrap().is_empty());
    }
}
