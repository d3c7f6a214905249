pub mod shared {
    pub mod core {
        pub mod primitives;
        pub mod secret_string;
    }
    pub mod infrastructure {
        pub mod notification;
        pub mod secrets;
    }
}

pub mod modules {
    pub mod ordering {
        pub mod core {
            pub mod address;
            pub mod basket;
            pub mod catalog;
            pub mod order;
            pub mod uri_composer;
        }
        pub mod use_cases {
            pub mod create_order {
                pub mod command;
                pub mod errors;
                pub mod handler;
                pub mod notifier;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_orders_by_buyer {
                pub mod order_view;
                pub mod queries_port;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod repositories;
                pub mod repositories_in_memory;
            }
        }
    }
}

pub mod shell;
