//! Integration test harness for the Dila Store cart widget.
//!
//! Builds widgets over in-memory ports and hands the fakes back to the
//! tests: a simulated page, recorded notifications and scripted
//! confirmation answers. Every property from the widget's contract can be
//! exercised without a browser.
//!
//! # Test Categories
//!
//! - `cart_properties` - persistence, badge, rendering and removal
//! - `input_policy` - rejection of malformed controls and slot payloads

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use dila_store_cart::config::WidgetConfig;
use dila_store_cart::dom::{Click, Element, MemoryDocument};
use dila_store_cart::feedback::{ConfirmDialog, Notifier};
use dila_store_cart::storage::{MemoryStorage, StoragePort};
use dila_store_cart::widget::CartWidget;

/// Notifier recording every message for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingNotifier {
    /// Messages shown so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.borrow_mut().push(message.to_owned());
    }
}

/// Dialog giving a fixed answer to every request, recording the prompts.
#[derive(Debug, Clone)]
pub struct ScriptedConfirm {
    answer: bool,
    prompts: Rc<RefCell<Vec<String>>>,
}

impl ScriptedConfirm {
    /// Dialog that answers every request with `answer`.
    #[must_use]
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Rc::default(),
        }
    }

    /// Prompts asked so far, oldest first.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl ConfirmDialog for ScriptedConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.borrow_mut().push(prompt.to_owned());
        self.answer
    }
}

/// The widget type every test drives.
pub type TestWidget = CartWidget<MemoryStorage, MemoryDocument, RecordingNotifier, ScriptedConfirm>;

/// A widget over in-memory ports, plus handles to the fakes.
pub struct TestContext {
    /// The widget under test.
    pub widget: TestWidget,
    /// Handle to the recording notifier passed into the widget.
    pub notifier: RecordingNotifier,
    /// Handle to the scripted dialog passed into the widget.
    pub confirm: ScriptedConfirm,
}

impl TestContext {
    /// Widget on a simulated cart page: all anchors present, dialog
    /// confirming.
    #[must_use]
    pub fn cart_page() -> Self {
        let config = WidgetConfig::default();
        Self::build(cart_page_document(&config), MemoryStorage::new(), true)
    }

    /// Widget on a simulated cart page whose dialog declines.
    #[must_use]
    pub fn cart_page_declining() -> Self {
        let config = WidgetConfig::default();
        Self::build(cart_page_document(&config), MemoryStorage::new(), false)
    }

    /// Widget on a simulated product listing page: badge anchor only.
    #[must_use]
    pub fn listing_page() -> Self {
        let config = WidgetConfig::default();
        let document = MemoryDocument::with_anchors([config.anchors.badge.as_str()]);
        Self::build(document, MemoryStorage::new(), true)
    }

    /// Widget on a cart page whose slot was externally written with `raw`.
    ///
    /// # Panics
    ///
    /// Panics when the in-memory seed write fails, which it never does.
    #[must_use]
    pub fn cart_page_with_slot(raw: &str) -> Self {
        let config = WidgetConfig::default();
        let mut storage = MemoryStorage::new();
        storage
            .write(&config.slot_key, raw)
            .expect("seeding an in-memory slot");
        Self::build(cart_page_document(&config), storage, true)
    }

    fn build(document: MemoryDocument, storage: MemoryStorage, answer: bool) -> Self {
        init_tracing();
        let notifier = RecordingNotifier::default();
        let confirm = ScriptedConfirm::answering(answer);
        let widget = CartWidget::new(
            WidgetConfig::default(),
            storage,
            document,
            notifier.clone(),
            confirm.clone(),
        );
        Self {
            widget,
            notifier,
            confirm,
        }
    }
}

/// Simulated page holding every cart anchor, all empty.
fn cart_page_document(config: &WidgetConfig) -> MemoryDocument {
    MemoryDocument::with_anchors([
        config.anchors.badge.as_str(),
        config.anchors.item_list.as_str(),
        config.anchors.summary_count.as_str(),
        config.anchors.summary_total.as_str(),
        config.anchors.clear_control.as_str(),
    ])
}

/// A click inside a buy control carrying the given product attributes.
#[must_use]
pub fn buy_click(id: &str, name: &str, price: &str, image: &str) -> Click {
    Click::new(vec![
        // The shopper hit the icon inside the button.
        Element::new().class("fa-solid"),
        Element::new()
            .class("btn-buy")
            .data("id", id)
            .data("name", name)
            .data("price", price)
            .data("image", image),
    ])
}

/// A click inside the remove control tagged with `index`.
#[must_use]
pub fn remove_click(index: &str) -> Click {
    Click::new(vec![
        Element::new().class("fa-xmark"),
        Element::new().class("btn-remove-item").data("index", index),
    ])
}

/// A click on the clear-cart button.
#[must_use]
pub fn clear_click() -> Click {
    Click::new(vec![Element::new().id("clear-cart")])
}

/// Install a log subscriber once, so `RUST_LOG` works in test runs.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
