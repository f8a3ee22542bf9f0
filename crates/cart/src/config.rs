//! Widget configuration.
//!
//! The widget finds its way around the host page through fixed identifiers:
//! a storage slot key, element ids for the anchors it writes into, and CSS
//! classes for the controls it reacts to. Defaults mirror the Dila Store
//! markup. There are no environment variables; embedders override fields
//! directly when their markup differs.

/// Complete widget configuration.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Key of the persistent slot holding the serialized cart.
    pub slot_key: String,
    /// Element ids the widget writes into.
    pub anchors: AnchorConfig,
    /// Control classes the widget reacts to.
    pub controls: ControlConfig,
    /// User-facing message strings.
    pub messages: MessageConfig,
}

/// Element ids consumed by the badge updater and the page renderer.
///
/// Anchors missing from the current page make the corresponding feature a
/// no-op, not an error: the badge can exist without the cart page and the
/// cart page without the badge.
#[derive(Debug, Clone)]
pub struct AnchorConfig {
    /// Badge element showing the entry count.
    pub badge: String,
    /// Container the item rows are rendered into.
    pub item_list: String,
    /// Summary element showing the item count text.
    pub summary_count: String,
    /// Summary element showing the formatted total.
    pub summary_total: String,
    /// The clear-cart button.
    pub clear_control: String,
}

/// CSS classes of the controls the widget resolves clicks against.
#[derive(Debug, Clone)]
pub struct ControlConfig {
    /// Buy buttons on product listings.
    pub buy_class: String,
    /// Per-row remove buttons on the cart page.
    pub remove_class: String,
}

/// User-facing message strings.
#[derive(Debug, Clone)]
pub struct MessageConfig {
    /// Shown after an item was added.
    pub item_added: String,
    /// Placeholder rendered when the cart is empty.
    pub cart_empty: String,
    /// Confirmation prompt before clearing the cart.
    pub clear_prompt: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            slot_key: "cart".to_owned(),
            anchors: AnchorConfig::default(),
            controls: ControlConfig::default(),
            messages: MessageConfig::default(),
        }
    }
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            badge: "cart-count".to_owned(),
            item_list: "cart-items".to_owned(),
            summary_count: "summary-item-count".to_owned(),
            summary_total: "summary-total-price".to_owned(),
            clear_control: "clear-cart".to_owned(),
        }
    }
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            buy_class: "btn-buy".to_owned(),
            remove_class: "btn-remove-item".to_owned(),
        }
    }
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            item_added: "Produk berhasil ditambahkan!".to_owned(),
            cart_empty: "Keranjang Anda masih kosong.".to_owned(),
            clear_prompt: "Apakah Anda yakin ingin mengosongkan keranjang?".to_owned(),
        }
    }
}
