use std::{env, sync::Arc, time::Duration};

use dotenv::dotenv;
use tracing::{event, Level};

use eshop_storefront::cqrs::{AddItemToCartCommand, AddItemToCartCommandHandler, GetOrderStatusQueryHandler};
use eshop_storefront::domain::CartSelection;
use eshop_storefront::frontend::{submit_cart_form, ConsoleNotifier, ConsoleStatusDisplay};
use eshop_storefront::gateway::{HttpGatewayInitializationInfo, HttpOrderGateway};
use eshop_storefront::poller::{OrderStatusPoller, StatusPollerConfig, DEFAULT_POLL_INTERVAL_MS};
use eshop_storefront::state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let gateway_info = HttpGatewayInitializationInfo {
        base_url: String::from(env::var("STOREFRONT_BASE_URL").unwrap())
    };

    let gateway = Arc::new(HttpOrderGateway::new(&gateway_info));

    let state = AppState {
        add_item_to_cart_command_handler: Arc::new(AddItemToCartCommandHandler::new(gateway.clone())),
        get_order_status_query_handler: Arc::new(GetOrderStatusQueryHandler::new(gateway.clone())),
    };

    tracing_subscriber::
    fmt()
    .with_max_level(tracing::Level::DEBUG)
    .with_target(false)
    .with_ansi(false)
    .json()
    .with_file(true)
    .with_line_number(true)
    .with_current_span(true)
    .with_writer(std::io::stderr)
    .init();

    if let (Ok(action), Ok(menu_item_id)) = (env::var("CART_ACTION"), env::var("CART_MENU_ITEM_ID")) {
        let selection = CartSelection {
            menu_item_id: menu_item_id,
            quantity: env::var("CART_QUANTITY").ok().and_then(|quantity| quantity.parse().ok()).unwrap_or(1)
        };

        let command = AddItemToCartCommand::from_selection(action, &selection);
        let outcome = submit_cart_form(state.add_item_to_cart_command_handler.as_ref(), &ConsoleNotifier, command).await;

        event!(Level::INFO, "Cart submission finished: {:?}", outcome);
    }

    let config = StatusPollerConfig {
        order_id: env::var("ORDER_ID").ok(),
        poll_interval: Duration::from_millis(env::var("POLL_MS").ok().and_then(|interval| interval.parse().ok()).unwrap_or(DEFAULT_POLL_INTERVAL_MS))
    };

    let poller = OrderStatusPoller::new(state.get_order_status_query_handler.clone(), Arc::new(ConsoleStatusDisplay), config);

    poller.run().await;
}
