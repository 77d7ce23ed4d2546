/// Custom actions for products beyond plain CRUD.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reserves stock for an order being placed.
    ///
    /// Fails when the requested amount exceeds available stock.
    ReserveStock(u32),
}

/// Results from [`ProductAction`] - variants match 1:1 with the actions.
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    /// Stock was decremented for the reservation.
    Reserved,
}
