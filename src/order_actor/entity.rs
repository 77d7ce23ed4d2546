use super::actions::{OrderAction, OrderActionResult};
use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderStatus};
use chrono::Utc;

#[derive(Debug, Clone)]
pub enum OrderFilter {
    All,
    ByUser(String),
}

impl Entity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type Patch = ();
    type Filter = OrderFilter;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;

    /// New orders always start out `Pending`.
    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, String> {
        if params.items.is_empty() {
            return Err("Order must contain at least one item".to_string());
        }
        Ok(Self {
            id,
            user_id: params.user_id,
            items: params.items,
            total_cents: params.total_cents,
            status: OrderStatus::Pending,
            payment_intent_id: params.payment_intent_id,
            shipping_address: params.shipping_address,
            parcel_shop_id: params.parcel_shop_id,
            created_at: Utc::now(),
        })
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        match filter {
            OrderFilter::All => true,
            OrderFilter::ByUser(user_id) => &self.user_id == user_id,
        }
    }

    /// Orders are immutable after creation; only actions touch them.
    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, String> {
        match action {
            OrderAction::SetStatus(status) => {
                self.status = status;
                Ok(OrderActionResult::StatusSet(status))
            }
            OrderAction::InitiateReturn => {
                if self.status != OrderStatus::Completed {
                    return Err(format!(
                        "Cannot initiate a return from status: {}",
                        self.status
                    ));
                }
                self.status = OrderStatus::ReturnInitiated;
                Ok(OrderActionResult::StatusSet(self.status))
            }
        }
    }
}
