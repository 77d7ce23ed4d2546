use crate::domain::OrderStatus;

/// Custom actions for orders.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Admin status change. No transition table: whatever the admin panel
    /// sends is stored.
    SetStatus(OrderStatus),
    /// Customer-initiated return. Only allowed from `Completed`.
    InitiateReturn,
}

#[derive(Debug, Clone)]
pub enum OrderActionResult {
    StatusSet(OrderStatus),
}
