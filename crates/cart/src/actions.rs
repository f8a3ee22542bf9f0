//! Cart commands and their resolution from click events.
//!
//! The UI layer never talks to the repository directly: a click either
//! resolves to an explicit [`CartAction`] or to nothing at all. Clicks
//! outside any recognized control are a silent no-op; controls with missing
//! or non-numeric attributes are rejected with a reported [`InputError`]
//! instead of carrying a half-parsed value into state.

use std::num::ParseIntError;

use thiserror::Error;

use dila_store_core::{ProductId, Rupiah};

use crate::config::WidgetConfig;
use crate::dom::{Click, Element};
use crate::models::CartEntry;

/// A concrete user action against the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Append a product instance.
    AddItem(CartEntry),
    /// Remove the entry at a positional index. Negative and past-the-end
    /// indices remove nothing.
    RemoveItem {
        /// Zero-based position at render time; not a stable identifier.
        index: i64,
    },
    /// Reset the cart to empty, subject to confirmation.
    ClearCart,
}

/// A control carried attributes the widget cannot use.
#[derive(Debug, Error)]
pub enum InputError {
    /// A required data attribute is absent from the control.
    #[error("control is missing its data-{0} attribute")]
    MissingAttr(&'static str),

    /// A numeric data attribute did not parse as a base-10 integer.
    #[error("invalid data-{attr} attribute {value:?}: {source}")]
    InvalidNumber {
        /// Attribute key without the `data-` prefix.
        attr: &'static str,
        /// The raw attribute value.
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl CartAction {
    /// Resolve a click on a product listing into an add command.
    ///
    /// `None` when the click did not originate within a buy control;
    /// `Some(Err(_))` when the control's attributes are unusable.
    pub fn from_buy_click(
        click: &Click,
        config: &WidgetConfig,
    ) -> Option<Result<Self, InputError>> {
        let control = click.closest(&config.controls.buy_class)?;
        Some(entry_from_control(control).map(Self::AddItem))
    }

    /// Resolve a click on the cart item list into a remove command.
    ///
    /// `None` when the click did not originate within a remove control.
    pub fn from_remove_click(
        click: &Click,
        config: &WidgetConfig,
    ) -> Option<Result<Self, InputError>> {
        let control = click.closest(&config.controls.remove_class)?;
        Some(parse_attr(control, "index").map(|index| Self::RemoveItem { index }))
    }

    /// Resolve a click on the clear-cart button.
    #[must_use]
    pub fn from_clear_click(click: &Click, config: &WidgetConfig) -> Option<Self> {
        click
            .closest_id(&config.anchors.clear_control)
            .map(|_| Self::ClearCart)
    }
}

/// Build a cart entry from a buy control's data attributes.
fn entry_from_control(control: &Element) -> Result<CartEntry, InputError> {
    let id = require_attr(control, "id")?;
    let name = require_attr(control, "name")?;
    let price = parse_attr(control, "price")?;
    let image = require_attr(control, "image")?;

    Ok(CartEntry::new(
        ProductId::new(id),
        name,
        Rupiah::new(price),
        image,
    ))
}

fn require_attr<'e>(control: &'e Element, key: &'static str) -> Result<&'e str, InputError> {
    control.attr(key).ok_or(InputError::MissingAttr(key))
}

/// Base-10 parse of a numeric data attribute.
fn parse_attr(control: &Element, key: &'static str) -> Result<i64, InputError> {
    let raw = require_attr(control, key)?;
    raw.parse().map_err(|source| InputError::InvalidNumber {
        attr: key,
        value: raw.to_owned(),
        source,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn buy_control(price: &str) -> Element {
        Element::new()
            .class("btn-buy")
            .data("id", "p-7")
            .data("name", "Teh Melati")
            .data("price", price)
            .data("image", "img/teh.jpg")
    }

    #[test]
    fn test_click_outside_controls_resolves_to_nothing() {
        let config = WidgetConfig::default();
        let click = Click::new(vec![Element::new().class("product-card")]);

        assert!(CartAction::from_buy_click(&click, &config).is_none());
        assert!(CartAction::from_remove_click(&click, &config).is_none());
        assert!(CartAction::from_clear_click(&click, &config).is_none());
    }

    #[test]
    fn test_buy_click_resolves_through_nested_target() {
        let config = WidgetConfig::default();
        // Click landed on the icon inside the button.
        let click = Click::new(vec![Element::new().class("fa-cart-plus"), buy_control("12500")]);

        let action = CartAction::from_buy_click(&click, &config).unwrap().unwrap();
        let CartAction::AddItem(entry) = action else {
            panic!("expected an add command");
        };
        assert_eq!(entry.id.as_str(), "p-7");
        assert_eq!(entry.name, "Teh Melati");
        assert_eq!(entry.price, Rupiah::new(12500));
        assert_eq!(entry.image, "img/teh.jpg");
    }

    #[test]
    fn test_non_numeric_price_is_rejected() {
        let config = WidgetConfig::default();
        let click = Click::new(vec![buy_control("gratis")]);

        let err = CartAction::from_buy_click(&click, &config).unwrap().unwrap_err();
        assert!(matches!(
            err,
            InputError::InvalidNumber { attr: "price", .. }
        ));
    }

    #[test]
    fn test_missing_attribute_is_rejected() {
        let config = WidgetConfig::default();
        let control = Element::new()
            .class("btn-buy")
            .data("id", "p-7")
            .data("price", "1000")
            .data("image", "img/teh.jpg");
        let click = Click::new(vec![control]);

        let err = CartAction::from_buy_click(&click, &config).unwrap().unwrap_err();
        assert!(matches!(err, InputError::MissingAttr("name")));
    }

    #[test]
    fn test_remove_click_parses_the_index() {
        let config = WidgetConfig::default();
        let click = Click::new(vec![
            Element::new().class("fa-xmark"),
            Element::new().class("btn-remove-item").data("index", "2"),
        ]);

        let action = CartAction::from_remove_click(&click, &config).unwrap().unwrap();
        assert_eq!(action, CartAction::RemoveItem { index: 2 });
    }

    #[test]
    fn test_clear_click_resolves_by_id() {
        let config = WidgetConfig::default();
        let click = Click::new(vec![Element::new().id("clear-cart")]);

        assert_eq!(
            CartAction::from_clear_click(&click, &config),
            Some(CartAction::ClearCart)
        );
    }
}
