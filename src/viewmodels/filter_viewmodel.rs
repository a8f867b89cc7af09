// ============================================================================
// FILTER VIEWMODEL - Búsqueda por texto + categoría
// ============================================================================
// SOLO lógica pura - Sin estado, sin DOM
// ============================================================================

use crate::models::Spot;

pub struct FilterViewModel;

impl FilterViewModel {
    /// Subconjunto visible, en el orden original.
    ///
    /// El texto se compara (sin mayúsculas) contra `name + category + note`;
    /// la categoría, si no está vacía, debe ser exactamente igual.
    pub fn filter_spots(spots: &[Spot], query: &str, category: Option<&str>) -> Vec<Spot> {
        let needle = query.trim().to_lowercase();
        let category = category.filter(|c| !c.is_empty());

        spots
            .iter()
            .filter(|spot| Self::matches_category(spot, category))
            .filter(|spot| needle.is_empty() || Self::haystack(spot).contains(&needle))
            .cloned()
            .collect()
    }

    /// Categorías distintas en orden de aparición (para el `<select>`)
    pub fn category_options(spots: &[Spot]) -> Vec<String> {
        let mut options: Vec<String> = Vec::new();
        for category in spots.iter().filter_map(|s| s.category.as_deref()) {
            if !category.is_empty() && !options.iter().any(|c| c == category) {
                options.push(category.to_string());
            }
        }
        options
    }

    fn matches_category(spot: &Spot, category: Option<&str>) -> bool {
        match category {
            Some(wanted) => spot.category.as_deref() == Some(wanted),
            None => true,
        }
    }

    fn haystack(spot: &Spot) -> String {
        format!(
            "{} {} {}",
            spot.name,
            spot.category.as_deref().unwrap_or(""),
            spot.note.as_deref().unwrap_or("")
        )
        .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spots() -> Vec<Spot> {
        vec![
            Spot::new("1", "Blue Bottle Coffee", 35.0, 135.0).with_category("cafe"),
            Spot::new("2", "Ramen Ichiban", 35.1, 135.1).with_category("food").with_note("late night"),
            Spot::new("3", "Kissa Night Owl", 35.2, 135.2).with_category("cafe").with_note("Jazz"),
            Spot::new("4", "Bookstore", 35.3, 135.3),
        ]
    }

    fn ids(spots: &[Spot]) -> Vec<&str> {
        spots.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let all = spots();
        assert_eq!(FilterViewModel::filter_spots(&all, "", None), all);
        assert_eq!(FilterViewModel::filter_spots(&all, "   ", Some("")), all);
    }

    #[test]
    fn test_query_matches_any_case_variant_of_name() {
        let all = spots();
        let target = &all[0..1];
        for query in ["bottle", "BOTTLE", "BoTtLe", "Blue Bottle Coffee", "e c"] {
            assert_eq!(ids(&FilterViewModel::filter_spots(target, query, None)), vec!["1"], "query {query}");
        }
    }

    #[test]
    fn test_query_searches_category_and_note() {
        let all = spots();
        assert_eq!(ids(&FilterViewModel::filter_spots(&all, "night", None)), vec!["2", "3"]);
        assert_eq!(ids(&FilterViewModel::filter_spots(&all, "jazz", None)), vec!["3"]);
        assert_eq!(ids(&FilterViewModel::filter_spots(&all, "CAFE", None)), vec!["1", "3"]);
    }

    #[test]
    fn test_category_is_exact_match() {
        let all = spots();
        let result = FilterViewModel::filter_spots(&all, "", Some("cafe"));
        assert!(result.iter().all(|s| s.category.as_deref() == Some("cafe")));
        assert_eq!(ids(&result), vec!["1", "3"]);
        assert!(FilterViewModel::filter_spots(&all, "", Some("Cafe")).is_empty());
        assert!(FilterViewModel::filter_spots(&all, "", Some("caf")).is_empty());
    }

    #[test]
    fn test_query_and_category_combine() {
        let all = spots();
        assert_eq!(ids(&FilterViewModel::filter_spots(&all, "night", Some("cafe"))), vec!["3"]);
        assert!(FilterViewModel::filter_spots(&all, "ramen", Some("cafe")).is_empty());
    }

    #[test]
    fn test_category_options_first_seen_order() {
        assert_eq!(FilterViewModel::category_options(&spots()), vec!["cafe", "food"]);
    }
}
