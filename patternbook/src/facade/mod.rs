//! The Facade pattern walkthrough: order processing behind one entry point.
//!
//! Three subsystems (inventory, payment, shipping) each do one narrow job;
//! [`OrderFacade::place_order`] sequences them so callers never touch the
//! subsystems directly.

use crate::errors::OrderError;
use crate::narration::NarrationSink;

/// How many units of any sample product are on hand.
const UNITS_IN_STOCK: u32 = 10;

/// Inventory subsystem: answers stock questions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inventory;

impl Inventory {
    /// Returns true if `quantity` units of `product` are available.
    #[must_use]
    pub fn check_stock(&self, sink: &dyn NarrationSink, product: &str, quantity: u32) -> bool {
        sink.emit(&format!(
            "Checking stock for {quantity} unit(s) of '{product}'..."
        ));
        quantity <= UNITS_IN_STOCK
    }
}

/// Payment subsystem: charges the customer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentGateway;

impl PaymentGateway {
    /// Returns true if the payment went through.
    #[must_use]
    pub fn process(&self, sink: &dyn NarrationSink, amount: f64) -> bool {
        sink.emit(&format!("Processing payment of ${amount}..."));
        amount > 0.0
    }
}

/// Shipping subsystem: dispatches the parcel.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shipping;

impl Shipping {
    /// Arranges shipping for the order.
    pub fn arrange(&self, sink: &dyn NarrationSink, product: &str, quantity: u32) {
        sink.emit(&format!(
            "Arranging shipping for {quantity} unit(s) of '{product}'..."
        ));
    }
}

/// The facade: one call that runs the whole order pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderFacade {
    inventory: Inventory,
    payment: PaymentGateway,
    shipping: Shipping,
}

impl OrderFacade {
    /// Creates a facade over fresh subsystems.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places an order, narrating each step through `sink`.
    ///
    /// Stops at the first subsystem that declines; later subsystems are not
    /// consulted and emit no narration.
    pub fn place_order(
        &self,
        sink: &dyn NarrationSink,
        product: &str,
        quantity: u32,
        amount: f64,
    ) -> Result<(), OrderError> {
        sink.emit("Starting order process...");
        tracing::debug!(product, quantity, amount, "placing order");

        if !self.inventory.check_stock(sink, product, quantity) {
            return Err(OrderError::insufficient_stock(product, quantity));
        }

        if !self.payment.process(sink, amount) {
            return Err(OrderError::payment_failed(amount));
        }

        self.shipping.arrange(sink, product, quantity);
        sink.emit("Order placed successfully!");
        Ok(())
    }
}
