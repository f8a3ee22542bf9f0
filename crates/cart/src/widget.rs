//! The cart widget controller.
//!
//! Wires the repository and the injected ports together and owns the event
//! cycle: click -> command -> repository mutation -> slot write -> badge
//! refresh (+ page re-render where the cart page is visible). Every
//! persisted mutation refreshes the badge in the same logical operation, so
//! the counter can never drift from the slot.

use askama::Template;
use tracing::{debug, warn};

use crate::actions::CartAction;
use crate::config::WidgetConfig;
use crate::dom::{Click, Document};
use crate::error::Result;
use crate::feedback::{ConfirmDialog, Notifier};
use crate::models::CartEntry;
use crate::repository::CartRepository;
use crate::storage::{SlotStore, StoragePort};
use crate::view::{CartItemsTemplate, CartPageView};

/// The cart widget: repository plus the page surface and feedback ports.
#[derive(Debug)]
pub struct CartWidget<P, D, N, C> {
    config: WidgetConfig,
    repository: CartRepository<P>,
    document: D,
    notifier: N,
    confirm: C,
}

impl<P, D, N, C> CartWidget<P, D, N, C>
where
    P: StoragePort,
    D: Document,
    N: Notifier,
    C: ConfirmDialog,
{
    /// Build a widget over the given ports.
    pub fn new(config: WidgetConfig, storage: P, document: D, notifier: N, confirm: C) -> Self {
        let store = SlotStore::new(storage, config.slot_key.clone());
        Self {
            config,
            repository: CartRepository::new(store),
            document,
            notifier,
            confirm,
        }
    }

    /// Page-load initialization: refresh the badge and render the cart page
    /// if its anchors are present. Safe to call on every page.
    ///
    /// # Errors
    ///
    /// Propagates slot access and rendering failures.
    pub fn mount(&mut self) -> Result<()> {
        debug!("mounting cart widget");
        self.refresh_badge()?;
        self.render()
    }

    /// Handle a click on a product listing.
    ///
    /// Clicks outside any buy control are a no-op; controls with unusable
    /// attributes are rejected without touching the cart.
    ///
    /// # Errors
    ///
    /// Returns the rejection for malformed controls, and propagates slot
    /// access failures.
    pub fn handle_buy_click(&mut self, click: &Click) -> Result<()> {
        match CartAction::from_buy_click(click, &self.config) {
            None => Ok(()),
            Some(Ok(action)) => self.dispatch(action),
            Some(Err(err)) => {
                warn!(error = %err, "rejecting buy control");
                Err(err.into())
            }
        }
    }

    /// Handle a click on the cart item list.
    ///
    /// # Errors
    ///
    /// Returns the rejection for malformed controls, and propagates slot
    /// access and rendering failures.
    pub fn handle_remove_click(&mut self, click: &Click) -> Result<()> {
        match CartAction::from_remove_click(click, &self.config) {
            None => Ok(()),
            Some(Ok(action)) => self.dispatch(action),
            Some(Err(err)) => {
                warn!(error = %err, "rejecting remove control");
                Err(err.into())
            }
        }
    }

    /// Handle a click on the clear-cart button.
    ///
    /// # Errors
    ///
    /// Propagates slot access and rendering failures.
    pub fn handle_clear_click(&mut self, click: &Click) -> Result<()> {
        match CartAction::from_clear_click(click, &self.config) {
            None => Ok(()),
            Some(action) => self.dispatch(action),
        }
    }

    /// Execute a cart command.
    ///
    /// # Errors
    ///
    /// Propagates slot access and rendering failures.
    pub fn dispatch(&mut self, action: CartAction) -> Result<()> {
        match action {
            CartAction::AddItem(entry) => self.add_item(entry),
            CartAction::RemoveItem { index } => self.remove_item(index),
            CartAction::ClearCart => self.clear_cart(),
        }
    }

    fn add_item(&mut self, entry: CartEntry) -> Result<()> {
        debug!(id = %entry.id, "adding cart entry");
        self.repository.add(entry)?;
        self.refresh_badge()?;
        self.notifier.notify(&self.config.messages.item_added);
        Ok(())
    }

    fn remove_item(&mut self, index: i64) -> Result<()> {
        match usize::try_from(index) {
            Ok(index) => {
                let removed = self.repository.remove_at(index)?;
                debug!(index, removed, "removal request");
            }
            // Negative index: nothing to remove.
            Err(_) => debug!(index, "out-of-range removal index"),
        }
        self.refresh_badge()?;
        self.render()
    }

    fn clear_cart(&mut self) -> Result<()> {
        if !self.confirm.confirm(&self.config.messages.clear_prompt) {
            debug!("cart clear declined");
            return Ok(());
        }
        self.repository.clear()?;
        self.refresh_badge()?;
        self.render()
    }

    /// Reflect the persisted entry count into the badge anchor. Pages
    /// without a badge are a no-op.
    ///
    /// # Errors
    ///
    /// Propagates slot access failures.
    pub fn refresh_badge(&mut self) -> Result<()> {
        let count = self.repository.count()?;
        self.document
            .set_text(&self.config.anchors.badge, &count.to_string());
        Ok(())
    }

    /// Rebuild the cart page fragments from the slot.
    ///
    /// A pure no-op unless the item list and both summary anchors exist on
    /// the current page. The item container is replaced wholesale, so
    /// repeated renders over unchanged data are identical.
    ///
    /// # Errors
    ///
    /// Propagates slot access and template failures.
    pub fn render(&mut self) -> Result<()> {
        let on_cart_page = self.document.has(&self.config.anchors.item_list)
            && self.document.has(&self.config.anchors.summary_count)
            && self.document.has(&self.config.anchors.summary_total);
        if !on_cart_page {
            return Ok(());
        }

        let entries = self.repository.entries()?;
        let view = CartPageView::from_entries(&entries);
        let html = CartItemsTemplate {
            items: &view.items,
            empty_message: &self.config.messages.cart_empty,
            remove_class: &self.config.controls.remove_class,
        }
        .render()?;

        self.document
            .set_html(&self.config.anchors.item_list, &html);
        self.document
            .set_text(&self.config.anchors.summary_count, &view.count_label);
        self.document
            .set_text(&self.config.anchors.summary_total, &view.total_label);
        Ok(())
    }

    /// Current entry sequence.
    ///
    /// # Errors
    ///
    /// Propagates slot access failures.
    pub fn entries(&self) -> Result<Vec<CartEntry>> {
        Ok(self.repository.entries()?)
    }

    /// The widget configuration.
    #[must_use]
    pub const fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// The page surface, for shells and assertions.
    #[must_use]
    pub const fn document(&self) -> &D {
        &self.document
    }
}
