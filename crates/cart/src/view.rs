//! Cart display data and the item list fragment template.
//!
//! Prices are formatted into strings before they reach the template, so the
//! template stays a dumb projection of the view model.

use askama::Template;

use dila_store_core::Rupiah;

use crate::models::CartEntry;

/// Cart row display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    /// Display name.
    pub name: String,
    /// Display asset reference.
    pub image: String,
    /// Pre-formatted unit price ("Rp 15.000").
    pub price: String,
}

impl From<&CartEntry> for CartItemView {
    fn from(entry: &CartEntry) -> Self {
        Self {
            name: entry.name.clone(),
            image: entry.image.clone(),
            price: format_price(entry.price),
        }
    }
}

/// Cart page display data: the item rows plus the order summary labels.
#[derive(Debug, Clone)]
pub struct CartPageView {
    /// One row per entry, in cart order.
    pub items: Vec<CartItemView>,
    /// Summary count text ("3 Produk").
    pub count_label: String,
    /// Summary total text ("Rp 17.600").
    pub total_label: String,
}

impl CartPageView {
    /// Project the entry sequence into display data.
    #[must_use]
    pub fn from_entries(entries: &[CartEntry]) -> Self {
        let items = entries.iter().map(CartItemView::from).collect();
        let total: Rupiah = entries.iter().map(|e| e.price).sum();

        Self {
            items,
            count_label: format!("{} Produk", entries.len()),
            total_label: format_price(total),
        }
    }
}

/// Cart items fragment template.
///
/// Renders the empty-cart placeholder or one row per entry; each row's
/// remove control is tagged with the entry's current positional index.
#[derive(Template)]
#[template(path = "cart_items.html")]
pub struct CartItemsTemplate<'a> {
    /// Rows to render, in cart order.
    pub items: &'a [CartItemView],
    /// Placeholder shown when `items` is empty.
    pub empty_message: &'a str,
    /// CSS class put on the per-row remove controls.
    pub remove_class: &'a str,
}

/// Format an amount as a display price string.
fn format_price(amount: Rupiah) -> String {
    format!("Rp {amount}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use dila_store_core::ProductId;

    fn entry(name: &str, price: i64) -> CartEntry {
        CartEntry::new(ProductId::new("p"), name, Rupiah::new(price), "x.jpg")
    }

    #[test]
    fn test_summary_labels() {
        let entries = [entry("a", 15000), entry("b", 2500), entry("c", 100)];
        let view = CartPageView::from_entries(&entries);

        assert_eq!(view.count_label, "3 Produk");
        assert_eq!(view.total_label, "Rp 17.600");
    }

    #[test]
    fn test_empty_summary_labels() {
        let view = CartPageView::from_entries(&[]);

        assert!(view.items.is_empty());
        assert_eq!(view.count_label, "0 Produk");
        assert_eq!(view.total_label, "Rp 0");
    }

    #[test]
    fn test_rows_follow_cart_order() {
        let entries = [entry("Kopi", 15000), entry("Teh", 2500)];
        let view = CartPageView::from_entries(&entries);

        let names: Vec<_> = view.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Kopi", "Teh"]);
        assert_eq!(view.items.first().unwrap().price, "Rp 15.000");
    }

    #[test]
    fn test_template_tags_rows_with_positional_indices() {
        let entries = [entry("Kopi", 15000), entry("Teh", 2500)];
        let view = CartPageView::from_entries(&entries);
        let html = CartItemsTemplate {
            items: &view.items,
            empty_message: "kosong",
            remove_class: "btn-remove-item",
        }
        .render()
        .unwrap();

        assert!(html.contains(r#"data-index="0""#));
        assert!(html.contains(r#"data-index="1""#));
        assert!(!html.contains(r#"data-index="2""#));
        assert!(html.contains("Rp 15.000"));
        assert!(!html.contains("kosong"));
    }

    #[test]
    fn test_template_renders_placeholder_when_empty() {
        let html = CartItemsTemplate {
            items: &[],
            empty_message: "Keranjang Anda masih kosong.",
            remove_class: "btn-remove-item",
        }
        .render()
        .unwrap();

        assert!(html.contains("Keranjang Anda masih kosong."));
        assert!(!html.contains("cart-item"));
    }

    #[test]
    fn test_template_escapes_names() {
        let entries = [entry("Kopi <susu> & gula", 1000)];
        let view = CartPageView::from_entries(&entries);
        let html = CartItemsTemplate {
            items: &view.items,
            empty_message: "kosong",
            remove_class: "btn-remove-item",
        }
        .render()
        .unwrap();

        assert!(html.contains("Kopi &lt;susu&gt; &amp; gula"));
    }
}
