// Tells external functions about a placed order.
//
// Responsibilities
// - Build the archive payload and the warehouse reservation payload.
// - Send each one, once, when its URL is configured. Archive goes first.
//
// Boundaries
// - An unset or blank URL skips that notification without touching the network.
// - The first failure stops the remaining notifications and is returned as is.

use crate::modules::ordering::core::order::{Order, OrderItem};
use crate::shared::core::primitives::OrderId;
use crate::shared::infrastructure::notification::{NotificationClient, NotificationError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSettings {
    pub order_archive_url: Option<String>,
    pub warehouse_reservation_url: Option<String>,
}

impl NotificationSettings {
    pub fn disabled() -> Self {
        Self::default()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderArchiveRequest<'a> {
    pub shipping_address: String,
    pub items: &'a [OrderItem],
    pub order_date: DateTime<Utc>,
    pub order_id: OrderId,
}

impl<'a> OrderArchiveRequest<'a> {
    pub fn new(order_id: OrderId, order: &'a Order) -> Self {
        Self {
            shipping_address: order.ship_to_address().archive_line(),
            items: order.order_items(),
            order_date: order.order_date(),
            order_id,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WarehouseReservationRequest {
    pub item_id: String,
    pub quantity: u64,
}

impl WarehouseReservationRequest {
    pub fn new(order_id: OrderId, order: &Order) -> Self {
        Self {
            item_id: order_id.to_string(),
            quantity: order.total_units(),
        }
    }
}

pub struct OrderNotifier<TClient>
where
    TClient: NotificationClient + ?Sized,
{
    client: Arc<TClient>,
    settings: NotificationSettings,
}

impl<TClient> OrderNotifier<TClient>
where
    TClient: NotificationClient + ?Sized,
{
    pub fn new(client: Arc<TClient>, settings: NotificationSettings) -> Self {
        Self { client, settings }
    }

    pub async fn notify(&self, order_id: OrderId, order: &Order) -> Result<(), NotificationError> {
        if let Some(url) = configured(&self.settings.order_archive_url) {
            self.send(url, &OrderArchiveRequest::new(order_id, order)).await?;
        } else {
            tracing::debug!(%order_id, "order archive url not configured, skipping");
        }

        if let Some(url) = configured(&self.settings.warehouse_reservation_url) {
            self.send(url, &WarehouseReservationRequest::new(order_id, order))
                .await?;
        } else {
            tracing::debug!(%order_id, "warehouse reservation url not configured, skipping");
        }

        Ok(())
    }

    async fn send(&self, url: &str, payload: &impl Serialize) -> Result<(), NotificationError> {
        let payload =
            serde_json::to_value(payload).map_err(|err| NotificationError::Encoding(err.to_string()))?;
        self.client.post_json(url, &payload).await
    }
}

fn configured(url: &Option<String>) -> Option<&str> {
    url.as_deref().map(str::trim).filter(|url| !url.is_empty())
}
