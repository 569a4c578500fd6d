use serde::Serialize;
use utoipa::ToSchema;

use crate::models::User;

#[derive(Debug, Serialize, ToSchema)]
pub struct PanelStats {
    /// Always 0; there is no checkout.
    pub orders: usize,
    pub cart_items: usize,
    pub messages_sent: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Profile {
    pub user: User,
    pub stats: PanelStats,
}
