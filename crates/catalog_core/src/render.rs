//! Projection from a product sequence to grid content.

use shared::{
    domain::Product,
    protocol::{Card, GridContent, BUY_ACTION_LABEL},
};

pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;
const ELLIPSIS: &str = "...";
const CURRENCY_SYMBOL: &str = "$";

pub fn render(products: &[Product]) -> GridContent {
    if products.is_empty() {
        return GridContent::NoProducts;
    }
    GridContent::Cards(products.iter().map(card_for).collect())
}

pub fn card_for(product: &Product) -> Card {
    Card {
        product_id: product.id,
        image: product.image.clone(),
        image_alt: product.title.clone(),
        title: product.title.clone(),
        description: description_preview(&product.description),
        price_label: price_label(product.price),
        action_label: BUY_ACTION_LABEL.to_string(),
    }
}

/// Raw cut at 100 characters with no word-boundary handling. The ellipsis is
/// appended even when nothing was cut.
pub fn description_preview(description: &str) -> String {
    let mut preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    preview.push_str(ELLIPSIS);
    preview
}

/// Price in its shortest decimal form, e.g. `$20` or `$109.95`.
pub fn price_label(price: f64) -> String {
    format!("{CURRENCY_SYMBOL}{price}")
}

#[cfg(test)]
mod tests {
    use shared::{domain::ProductId, protocol::NO_PRODUCTS_TEXT};

    use super::*;

    fn product(id: i64, description: &str, price: f64) -> Product {
        Product {
            id: ProductId(id),
            title: format!("Product {id}"),
            description: description.to_string(),
            price,
            category: "misc".to_string(),
            image: format!("https://img.example/{id}.png"),
        }
    }

    #[test]
    fn empty_sequence_renders_placeholder() {
        let grid = render(&[]);
        assert_eq!(grid, GridContent::NoProducts);
        assert_eq!(grid.placeholder_text(), Some(NO_PRODUCTS_TEXT));
    }

    #[test]
    fn one_card_per_product_in_order() {
        let long = "x".repeat(250);
        let products = vec![product(3, "short", 20.0), product(1, &long, 109.95)];

        let grid = render(&products);
        let cards = grid.cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].product_id, ProductId(3));
        assert_eq!(cards[1].product_id, ProductId(1));

        for (card, product) in cards.iter().zip(&products) {
            let body = card.description.strip_suffix("...").expect("ellipsis");
            assert!(product.description.starts_with(body));
            assert!(body.chars().count() <= DESCRIPTION_PREVIEW_CHARS);
            assert_eq!(card.image_alt, product.title);
            assert_eq!(card.action_label, "Buy Now");
        }
    }

    #[test]
    fn truncation_is_a_raw_character_cut() {
        let description = format!("{} tail words", "word ".repeat(19));
        let preview = description_preview(&description);
        assert_eq!(preview.chars().count(), DESCRIPTION_PREVIEW_CHARS + 3);
        assert!(preview.starts_with(&description[..100]));
        assert_eq!(description_preview("tiny"), "tiny...");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let description = "é".repeat(150);
        let preview = description_preview(&description);
        assert_eq!(preview, format!("{}...", "é".repeat(100)));
    }

    #[test]
    fn price_labels_use_shortest_decimal_form() {
        assert_eq!(price_label(20.0), "$20");
        assert_eq!(price_label(10.5), "$10.5");
        assert_eq!(price_label(109.95), "$109.95");
        assert_eq!(price_label(0.0), "$0");
    }
}
