//! Text search, predicate filtering and sorting over a catalog snapshot.
//!
//! All functions take the records in catalog (insertion) order and return
//! owned clones, so callers can run them against a snapshot without holding
//! any lock.

use std::cmp::Ordering;

use crate::filters::{SearchFilters, SortBy};
use crate::motorcycle::Motorcycle;

/// Case-insensitive substring match against name, brand, model, category
/// and tags.
pub fn matches_text(bike: &Motorcycle, query: &str) -> bool {
    let needle = query.to_lowercase();
    [&bike.name, &bike.brand, &bike.model, &bike.category]
        .into_iter()
        .chain(bike.tags.iter())
        .any(|field| field.to_lowercase().contains(&needle))
}

/// All records matching `query`, in catalog order. No ranking.
pub fn search(records: &[Motorcycle], query: &str) -> Vec<Motorcycle> {
    records
        .iter()
        .filter(|bike| matches_text(bike, query))
        .cloned()
        .collect()
}

/// Returns `true` if `bike` passes every predicate set in `filters`.
pub fn matches_filters(bike: &Motorcycle, filters: &SearchFilters) -> bool {
    if let Some(query) = filters.text_query() {
        if !matches_text(bike, query) {
            return false;
        }
    }
    if let Some(brands) = filters.brand_set() {
        if !brands.iter().any(|b| *b == bike.brand) {
            return false;
        }
    }
    if let Some(categories) = filters.category_set() {
        if !categories.iter().any(|c| *c == bike.category) {
            return false;
        }
    }

    let price = bike.price as f64;
    if filters.min_price.is_some_and(|min| price < min) {
        return false;
    }
    if filters.max_price.is_some_and(|max| price > max) {
        return false;
    }

    let displacement = f64::from(bike.displacement);
    if filters.min_engine.is_some_and(|min| displacement < min) {
        return false;
    }
    if filters.max_engine.is_some_and(|max| displacement > max) {
        return false;
    }

    true
}

/// Apply `filters` and order the survivors by `filters.sort_by`.
///
/// Sorting is stable: records comparing equal keep their catalog order.
pub fn filter(records: &[Motorcycle], filters: &SearchFilters) -> Vec<Motorcycle> {
    let mut results: Vec<Motorcycle> = records
        .iter()
        .filter(|bike| matches_filters(bike, filters))
        .cloned()
        .collect();
    sort(&mut results, filters.sort_key());
    results
}

/// Stable in-place sort by the given key. `Relevance` leaves order untouched.
pub fn sort(records: &mut [Motorcycle], key: SortBy) {
    let compare: fn(&Motorcycle, &Motorcycle) -> Ordering = match key {
        SortBy::Relevance => return,
        SortBy::PriceAsc => |a, b| a.price.cmp(&b.price),
        SortBy::PriceDesc => |a, b| b.price.cmp(&a.price),
        SortBy::EngineSize => |a, b| b.displacement.cmp(&a.displacement),
        SortBy::Power => |a, b| b.max_power.total_cmp(&a.max_power),
    };
    records.sort_by(compare);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motorcycle::fixtures::bike;

    fn catalog() -> Vec<Motorcycle> {
        let mut a = bike(1, "Street Triple", "Triumph", "Naked");
        a.price = 12_000;
        a.displacement = 765;
        a.max_power = 128.0;
        a.tags = vec!["British".to_string(), "agile".to_string()];

        let mut b = bike(2, "Ninja 400", "Kawasaki", "Sport");
        b.price = 5_500;
        b.displacement = 399;
        b.max_power = 45.0;

        let mut c = bike(3, "Ninja ZX-6R", "Kawasaki", "Sport");
        c.price = 12_000;
        c.displacement = 636;
        c.max_power = 127.0;

        let mut d = bike(4, "Tenere 700", "Yamaha", "Adventure");
        d.price = 10_500;
        d.displacement = 689;
        d.max_power = 72.0;
        d.tags = vec!["offroad".to_string()];

        vec![a, b, c, d]
    }

    fn ids(records: &[Motorcycle]) -> Vec<i64> {
        records.iter().map(|m| m.id).collect()
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let all = catalog();
        assert_eq!(ids(&search(&all, "NINJA")), vec![2, 3]);
        assert_eq!(ids(&search(&all, "kawa")), vec![2, 3]);
        assert_eq!(ids(&search(&all, "adventure")), vec![4]);
    }

    #[test]
    fn search_matches_tags() {
        let all = catalog();
        assert_eq!(ids(&search(&all, "british")), vec![1]);
        assert_eq!(ids(&search(&all, "OffRoad")), vec![4]);
    }

    #[test]
    fn search_without_match_is_empty() {
        assert!(search(&catalog(), "harley").is_empty());
    }

    #[test]
    fn empty_filters_return_everything_in_order() {
        let all = catalog();
        assert_eq!(filter(&all, &SearchFilters::default()), all);
    }

    #[test]
    fn empty_brand_list_is_no_brand_filter() {
        let all = catalog();
        let filters = SearchFilters {
            brands: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(filter(&all, &filters), all);
    }

    #[test]
    fn brand_and_category_are_exact_matches() {
        let all = catalog();
        let filters = SearchFilters {
            brands: Some(vec!["kawasaki".to_string(), "Yamaha".to_string()]),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&all, &filters)), vec![4]);

        let filters = SearchFilters {
            categories: Some(vec!["Sport".to_string(), "Naked".to_string()]),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&all, &filters)), vec![1, 2, 3]);
    }

    #[test]
    fn predicates_are_conjunctive() {
        let filters = SearchFilters {
            query: Some("ninja".to_string()),
            min_price: Some(6_000.0),
            max_engine: Some(700.0),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&catalog(), &filters)), vec![3]);
    }

    #[test]
    fn bounds_are_inclusive() {
        let filters = SearchFilters {
            min_price: Some(10_500.0),
            max_price: Some(12_000.0),
            min_engine: Some(689.0),
            max_engine: Some(765.0),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&catalog(), &filters)), vec![1, 4]);
    }

    #[test]
    fn inverted_price_bounds_yield_nothing() {
        let filters = SearchFilters {
            min_price: Some(2_000.0),
            max_price: Some(1_000.0),
            ..Default::default()
        };
        assert!(filter(&catalog(), &filters).is_empty());
    }

    #[test]
    fn price_asc_is_stable() {
        let filters = SearchFilters {
            sort_by: Some(SortBy::PriceAsc),
            ..Default::default()
        };
        // 1 and 3 tie on price; 1 precedes 3 in the catalog.
        assert_eq!(ids(&filter(&catalog(), &filters)), vec![2, 4, 1, 3]);
    }

    #[test]
    fn price_desc_is_stable() {
        let filters = SearchFilters {
            sort_by: Some(SortBy::PriceDesc),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&catalog(), &filters)), vec![1, 3, 4, 2]);
    }

    #[test]
    fn engine_size_and_power_sort_descending() {
        let mut all = catalog();
        sort(&mut all, SortBy::EngineSize);
        assert_eq!(ids(&all), vec![1, 4, 3, 2]);

        sort(&mut all, SortBy::Power);
        assert_eq!(ids(&all), vec![1, 3, 4, 2]);
    }

    #[test]
    fn relevance_keeps_catalog_order() {
        let filters = SearchFilters {
            sort_by: Some(SortBy::Relevance),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&catalog(), &filters)), vec![1, 2, 3, 4]);
    }
}
