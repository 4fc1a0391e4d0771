//! Pure derivations over the fetched catalog. Every operation reads the full
//! product list and returns a new sequence; the input is never reordered.

use std::collections::HashSet;

use shared::domain::{Product, SortOrder, ALL_CATEGORIES};

/// `["all", c1, c2, ...]` with each distinct category once, in first-seen order.
pub fn derive_categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if seen.insert(product.category.as_str()) {
            categories.push(product.category.clone());
        }
    }
    categories
}

pub fn filter_by_category(products: &[Product], selected: &str) -> Vec<Product> {
    if selected == ALL_CATEGORIES {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|product| product.category == selected)
        .cloned()
        .collect()
}

/// Stable sort of a copy by price; ties keep their catalog order.
pub fn sort_by_price(products: &[Product], order: SortOrder) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match order {
        SortOrder::AscendingPrice => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::DescendingPrice => sorted.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOrder::None => {}
    }
    sorted
}

/// Case-insensitive substring match of `query` against product titles.
pub fn search_by_title(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|product| product.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use shared::domain::ProductId;

    use super::*;

    fn product(id: i64, title: &str, price: f64, category: &str) -> Product {
        Product {
            id: ProductId(id),
            title: title.to_string(),
            description: String::new(),
            price,
            category: category.to_string(),
            image: format!("https://img.example/{id}.png"),
        }
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn categories_start_with_all_in_first_seen_order() {
        let products = vec![
            product(1, "a", 1.0, "home"),
            product(2, "b", 1.0, "clothing"),
            product(3, "c", 1.0, "home"),
            product(4, "d", 1.0, "jewelery"),
        ];
        assert_eq!(
            derive_categories(&products),
            vec!["all", "home", "clothing", "jewelery"]
        );
        assert_eq!(derive_categories(&[]), vec!["all"]);
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let products = vec![product(1, "a", 1.0, "home")];
        assert!(filter_by_category(&products, "garden").is_empty());
        assert_eq!(ids(&filter_by_category(&products, "all")), vec![1]);
    }

    #[test]
    fn price_sort_is_stable_and_leaves_input_untouched() {
        let products = vec![
            product(1, "a", 20.0, "x"),
            product(2, "b", 10.0, "x"),
            product(3, "c", 20.0, "x"),
            product(4, "d", 5.5, "x"),
        ];

        assert_eq!(
            ids(&sort_by_price(&products, SortOrder::AscendingPrice)),
            vec![4, 2, 1, 3]
        );
        assert_eq!(
            ids(&sort_by_price(&products, SortOrder::DescendingPrice)),
            vec![1, 3, 2, 4]
        );
        assert_eq!(ids(&sort_by_price(&products, SortOrder::None)), vec![1, 2, 3, 4]);
        assert_eq!(ids(&products), vec![1, 2, 3, 4]);
    }

    #[test]
    fn ascending_and_descending_are_reverses_for_distinct_prices() {
        let products = vec![
            product(1, "a", 3.0, "x"),
            product(2, "b", 1.0, "x"),
            product(3, "c", 2.0, "x"),
        ];
        let mut low = ids(&sort_by_price(&products, SortOrder::AscendingPrice));
        let high = ids(&sort_by_price(&products, SortOrder::DescendingPrice));
        low.reverse();
        assert_eq!(low, high);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let products = vec![
            product(1, "Red Shirt", 20.0, "clothing"),
            product(2, "Blue Mug", 10.0, "home"),
        ];
        assert_eq!(ids(&search_by_title(&products, "red")), vec![1]);
        assert_eq!(ids(&search_by_title(&products, "MUG")), vec![2]);
        assert_eq!(ids(&search_by_title(&products, "")), vec![1, 2]);
        assert!(search_by_title(&products, "green").is_empty());
    }
}
