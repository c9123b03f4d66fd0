use bigdecimal::BigDecimal;

use crate::domain::cart::{CartLine, Product};
use crate::domain::errors::CartError;
use crate::domain::order::{OrderConfirmation, OrderRequest};
use crate::domain::ports::{CartStore, OrderGateway, SessionProvider};

/// The cart manager. Exclusively owns the line-item list; every mutation is
/// mirrored to the store as a full snapshot. `checkout` takes `&mut self`,
/// so no other mutation can interleave with an in-flight submission through
/// the same handle.
pub struct CartService<S, G, A> {
    store: S,
    gateway: G,
    session: A,
    lines: Vec<CartLine>,
}

impl<S: CartStore, G: OrderGateway, A: SessionProvider> CartService<S, G, A> {
    /// Create the service, adopting a persisted snapshot when one exists.
    /// A snapshot that cannot be read starts the cart empty instead of
    /// failing construction.
    pub fn restore(store: S, gateway: G, session: A) -> Self {
        let lines = match store.load() {
            Ok(Some(lines)) => lines,
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Could not restore cart snapshot, starting empty: {}", e);
                Vec::new()
            }
        };
        Self {
            store,
            gateway,
            session,
            lines,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal(&self) -> BigDecimal {
        self.lines
            .iter()
            .map(CartLine::line_total)
            .fold(BigDecimal::from(0), |acc, t| acc + t)
    }

    /// Add `quantity` units of `product`. If the product is already in the
    /// cart its quantity is increased and the original snapshot fields are
    /// kept; otherwise a new line is appended. Adding zero units is a no-op,
    /// matching the removal semantics of `set_quantity`.
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product.id)
        {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine::new(product, quantity)),
        }
        self.persist();
    }

    /// Remove the line with the given product id. No-op if absent.
    pub fn remove_item(&mut self, product_id: &str) {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        if self.lines.len() != before {
            self.persist();
        }
    }

    /// Replace the quantity of an existing line. Zero behaves exactly like
    /// `remove_item`. No-op if the id is absent.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_item(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
            self.persist();
        }
    }

    /// Reduce the quantity of an existing line by one, dropping the line
    /// when it reaches zero. No-op if the id is absent.
    pub fn decrement_quantity(&mut self, product_id: &str) {
        let Some(idx) = self.lines.iter().position(|l| l.product_id == product_id) else {
            return;
        };
        if self.lines[idx].quantity <= 1 {
            self.lines.remove(idx);
        } else {
            self.lines[idx].quantity -= 1;
        }
        self.persist();
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    /// Validate the session and delivery profile, submit the current lines
    /// to the order endpoint, and clear the cart on success. On any failure
    /// the cart is left untouched so the caller may retry manually.
    pub async fn checkout(&mut self) -> Result<OrderConfirmation, CartError> {
        let customer = self
            .session
            .current_customer()
            .ok_or(CartError::AuthenticationRequired)?;

        let missing = customer.missing_address_fields();
        if !missing.is_empty() {
            return Err(CartError::IncompleteProfile { fields: missing });
        }

        if self.lines.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let request = OrderRequest::from_lines(&self.lines);
        log::info!(
            "Submitting order with {} line(s) for customer {}",
            request.lines.len(),
            customer.id
        );
        let confirmation = self.gateway.submit(&request).await?;

        self.lines.clear();
        self.persist();

        log::info!(
            "Order confirmed{}",
            confirmation
                .order_id
                .as_deref()
                .map(|id| format!(" id={}", id))
                .unwrap_or_default()
        );
        Ok(confirmation)
    }

    fn persist(&self) {
        // Best effort: the in-memory mutation stands even if the write fails.
        if let Err(e) = self.store.save(&self.lines) {
            log::warn!("Could not persist cart snapshot: {}", e);
        }
    }
}
