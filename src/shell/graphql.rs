use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, routing::get};

pub use crate::modules::ordering::use_cases::create_order::inbound::graphql::MutationRoot;
pub use crate::modules::ordering::use_cases::list_orders_by_buyer::inbound::graphql::QueryRoot;
pub use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub const GRAPHQL_PATH: &str = "/gql";

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

pub fn router(schema: AppSchema) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

#[cfg(test)]
mod graphql_schema_tests {
    use super::*;
    use crate::modules::ordering::use_cases::create_order::notifier::NotificationSettings;
    use crate::shared::infrastructure::notification::in_memory::RecordingNotificationClient;
    use crate::shell::dependencies::{InMemoryStores, wire_in_memory};
    use crate::tests::fixtures::baskets::BasketBuilder;
    use crate::tests::fixtures::catalog::{CDN_BASE_URL, make_widget};
    use rstest::{fixture, rstest};
    use std::sync::Arc;

    const CREATE_ORDER: &str = r#"mutation {
        createOrder(basketId: 1, street: "123 Main St.", city: "Kent", state: "OH", zipCode: "44240")
    }"#;

    struct Setup {
        stores: InMemoryStores,
        schema: AppSchema,
    }

    #[fixture]
    async fn before_each() -> Setup {
        let stores = InMemoryStores::new();
        stores.baskets.insert(BasketBuilder::new().build()).await;
        stores.catalog.insert(make_widget()).await;
        let state = wire_in_memory(
            &stores,
            CDN_BASE_URL,
            Arc::new(RecordingNotificationClient::new()),
            NotificationSettings::disabled(),
        );
        Setup {
            schema: build_schema(state),
            stores,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_create_an_order_and_list_it_for_the_buyer(
        #[future] before_each: Setup,
    ) {
        let Setup { stores, schema } = before_each.await;

        let created = schema.execute(CREATE_ORDER).await;
        assert!(created.errors.is_empty(), "{:?}", created.errors);
        let created = created.data.into_json().unwrap();
        let order_id = created["createOrder"].as_str().unwrap().to_string();
        assert_eq!(stores.orders.count().await, 1);

        let listed = schema
            .execute(r#"{ ordersByBuyer(buyerId: "B1") { orderId total shipTo items { productName pictureUri unitPrice units } } }"#)
            .await;
        assert!(listed.errors.is_empty(), "{:?}", listed.errors);
        let listed = listed.data.into_json().unwrap();
        let order = &listed["ordersByBuyer"][0];
        assert_eq!(order["orderId"], order_id);
        assert_eq!(order["total"], "19.98");
        assert_eq!(order["shipTo"], "123 Main St., Kent, OH 44240");
        assert_eq!(order["items"][0]["productName"], "Widget");
        assert_eq!(order["items"][0]["pictureUri"], "https://cdn.example/widget.png");
        assert_eq!(order["items"][0]["unitPrice"], "9.99");
        assert_eq!(order["items"][0]["units"], 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_an_unknown_basket_as_not_found(#[future] before_each: Setup) {
        let Setup { stores, schema } = before_each.await;

        let response = schema
            .execute(r#"mutation { createOrder(basketId: 99, street: "s", city: "c", state: "st", zipCode: "z") }"#)
            .await;

        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].message, "basket 99 not found");
        let extensions = response.errors[0].extensions.as_ref().unwrap();
        assert_eq!(
            extensions.get("kind"),
            Some(&async_graphql::Value::String("NotFound".to_string()))
        );
        assert_eq!(stores.orders.count().await, 0);
    }
}
