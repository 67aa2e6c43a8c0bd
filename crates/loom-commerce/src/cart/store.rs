//! Session cart store.

use crate::cart::CartLineItem;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::price::Price;
use loom_cache::{Cache, SessionId, SessionStorage};

/// Name of the session slot that holds the cart.
pub const CART_SLOT: &str = "cart";

/// The shopping cart of one browsing session.
///
/// Owns the ordered line items and a handle to the session storage slot they
/// are persisted in. There is no global instance: the store is created once
/// per session and passed to whatever renders cart-dependent views.
///
/// Every mutation that changes the cart ends with [`CartStore::save`], which
/// overwrites the slot with the full item list. The returned `Result` only
/// ever reports that write failing; the in-memory cart has been updated
/// either way.
#[derive(Debug)]
pub struct CartStore<S> {
    cache: Cache<S>,
    session_id: SessionId,
    key: String,
    items: Vec<CartLineItem>,
}

impl<S: SessionStorage> CartStore<S> {
    /// Open the cart of `session_id`, rehydrating it from `storage`.
    ///
    /// A missing slot gives an empty cart. So does a slot that cannot be read
    /// or parsed; that case is logged and the bad value is overwritten by the
    /// next mutation.
    pub fn open(storage: S, session_id: SessionId) -> Self {
        let cache = Cache::new(storage);
        let key = session_id.slot_key(CART_SLOT);
        let items = load_items(&cache, &key);

        tracing::debug!(
            session = %session_id,
            items = items.len(),
            "cart rehydrated"
        );

        Self {
            cache,
            session_id,
            key,
            items,
        }
    }

    /// Add `quantity` of `product`.
    ///
    /// If the product is already in the cart its quantity grows by `quantity`
    /// and the existing snapshot is kept; otherwise a new line is appended.
    /// A `quantity` below 1 leaves the cart unchanged.
    pub fn add_to_cart(&mut self, product: Product, quantity: i64) -> Result<(), CommerceError> {
        let Ok(quantity) = u64::try_from(quantity) else {
            return Ok(());
        };
        if quantity == 0 {
            return Ok(());
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            tracing::debug!(
                product = %product.id,
                quantity = existing.quantity,
                "cart line incremented"
            );
        } else {
            tracing::debug!(product = %product.id, quantity, "cart line added");
            self.items.push(CartLineItem::new(product, quantity));
        }

        self.save()
    }

    /// Add a single unit of `product`.
    pub fn add_one(&mut self, product: Product) -> Result<(), CommerceError> {
        self.add_to_cart(product, 1)
    }

    /// Remove the line for `product_id`, if there is one.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> Result<(), CommerceError> {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product.id != product_id);
        if self.items.len() < len_before {
            tracing::debug!(product = %product_id, "cart line removed");
        }
        self.save()
    }

    /// Set the quantity of the line for `product_id` to exactly `quantity`.
    ///
    /// A `quantity` below 1 is ignored and the previous quantity stays; so is
    /// an id that is not in the cart.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        if quantity < 1 {
            tracing::debug!(product = %product_id, quantity, "quantity update ignored");
            return Ok(());
        }
        let quantity = quantity.unsigned_abs();

        if let Some(item) = self.items.iter_mut().find(|i| &i.product.id == product_id) {
            item.quantity = quantity;
            tracing::debug!(product = %product_id, quantity, "cart line quantity set");
        }
        self.save()
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) -> Result<(), CommerceError> {
        self.items.clear();
        tracing::debug!(session = %self.session_id, "cart cleared");
        self.save()
    }

    /// Sum of price times quantity over all lines.
    pub fn total(&self) -> Price {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Sum of quantities over all lines.
    pub fn count(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Write the full cart to the session slot.
    pub fn save(&self) -> Result<(), CommerceError> {
        self.cache.set(&self.key, &self.items)?;
        Ok(())
    }

    /// Re-read the slot, picking up writes made through another handle to the
    /// same session storage (another tab).
    pub fn reload(&mut self) {
        self.items = load_items(&self.cache, &self.key);
    }

    /// Line items in the order products were first added.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// The line for `product_id`.
    pub fn get(&self, product_id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| &i.product.id == product_id)
    }

    /// Quantity of `product_id` in the cart, 0 if absent.
    pub fn quantity_of(&self, product_id: &ProductId) -> u64 {
        self.get(product_id).map_or(0, |i| i.quantity)
    }

    /// Check if `product_id` is in the cart.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The session this cart belongs to.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// The storage backend.
    pub fn storage(&self) -> &S {
        self.cache.storage()
    }
}

fn load_items<S: SessionStorage>(cache: &Cache<S>, key: &str) -> Vec<CartLineItem> {
    match cache.get::<Vec<CartLineItem>>(key) {
        Ok(Some(items)) => items,
        Ok(None) => Vec::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding unreadable cart slot");
            Vec::new()
        }
    }
}
