use std::sync::Arc;

use crate::{cqrs::{AddItemToCartCommandHandler, GetOrderStatusQueryHandler}, gateway::HttpOrderGateway};

#[derive(Clone)]
pub struct AppState {
    pub add_item_to_cart_command_handler: Arc<AddItemToCartCommandHandler<HttpOrderGateway>>,
    pub get_order_status_query_handler: Arc<GetOrderStatusQueryHandler<HttpOrderGateway>>,
}
