// Create order command handler orchestrates checkout.
//
// Responsibilities
// - Load the basket with its items and reject missing or empty baskets.
// - Resolve every referenced catalog item in one batch.
// - Snapshot catalog data into order lines, keeping the basket's prices and quantities.
// - Persist the order, then notify external functions about it.
//
// Boundaries
// - Persistence is the point of no return. A notification failure after it is reported
//   with the id of the stored order and nothing is rolled back.

use crate::modules::ordering::adapters::outbound::repositories::{
    BasketRepository, CatalogRepository, OrderRepository, RepositoryError,
};
use crate::modules::ordering::core::order::{CatalogItemOrdered, Order, OrderItem};
use crate::modules::ordering::core::uri_composer::UriComposer;
use crate::modules::ordering::use_cases::create_order::command::CreateOrder;
use crate::modules::ordering::use_cases::create_order::errors::ApplicationError;
use crate::modules::ordering::use_cases::create_order::notifier::OrderNotifier;
use crate::shared::infrastructure::notification::NotificationClient;
use std::sync::Arc;

pub struct CreateOrderHandler<TBaskets, TCatalog, TOrders>
where
    TBaskets: BasketRepository + Send + Sync + 'static,
    TCatalog: CatalogRepository + Send + Sync + 'static,
    TOrders: OrderRepository + Send + Sync + 'static,
{
    baskets: Arc<TBaskets>,
    catalog: Arc<TCatalog>,
    orders: Arc<TOrders>,
    uri_composer: Arc<dyn UriComposer>,
    notifier: OrderNotifier<dyn NotificationClient>,
}

impl<TBaskets, TCatalog, TOrders> CreateOrderHandler<TBaskets, TCatalog, TOrders>
where
    TBaskets: BasketRepository + Send + Sync + 'static,
    TCatalog: CatalogRepository + Send + Sync + 'static,
    TOrders: OrderRepository + Send + Sync + 'static,
{
    pub fn new(
        baskets: Arc<TBaskets>,
        catalog: Arc<TCatalog>,
        orders: Arc<TOrders>,
        uri_composer: Arc<dyn UriComposer>,
        notifier: OrderNotifier<dyn NotificationClient>,
    ) -> Self {
        Self {
            baskets,
            catalog,
            orders,
            uri_composer,
            notifier,
        }
    }

    #[tracing::instrument(skip_all, fields(basket_id = command.basket_id))]
    pub async fn handle(&self, command: CreateOrder) -> Result<Order, ApplicationError> {
        let basket = self
            .baskets
            .find_with_items(command.basket_id)
            .await?
            .ok_or(ApplicationError::BasketNotFound(command.basket_id))?;

        if basket.is_empty() {
            return Err(ApplicationError::EmptyBasket);
        }

        let catalog_items = self
            .catalog
            .list_by_ids(&basket.distinct_catalog_item_ids())
            .await?;

        let order_items = basket
            .items
            .iter()
            .map(|line| -> Result<OrderItem, ApplicationError> {
                let catalog_item = catalog_items
                    .iter()
                    .find(|item| item.id == line.catalog_item_id)
                    .ok_or(ApplicationError::CatalogItemNotFound(line.catalog_item_id))?;
                let item_ordered = CatalogItemOrdered::new(
                    catalog_item.id,
                    catalog_item.name.clone(),
                    self.uri_composer
                        .compose_picture_uri(&catalog_item.picture_uri),
                )?;
                Ok(OrderItem::new(item_ordered, line.unit_price, line.quantity)?)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let order = Order::new(basket.buyer_id, command.shipping_address, order_items)?;
        let order = self.orders.add(order).await?;
        let order_id = order.id().ok_or_else(|| {
            RepositoryError::Backend("order repository did not assign an id".into())
        })?;

        tracing::info!(
            %order_id,
            basket_id = command.basket_id,
            buyer_id = order.buyer_id(),
            lines = order.order_items().len(),
            total = %order.total(),
            "order placed"
        );

        if let Err(source) = self.notifier.notify(order_id, &order).await {
            tracing::error!(%order_id, error = %source, "order placed but notification failed");
            return Err(ApplicationError::NotificationFailed { order_id, source });
        }

        Ok(order)
    }
}
