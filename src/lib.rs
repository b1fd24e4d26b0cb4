pub mod modules {
    pub mod activities {
        pub mod core {
            pub mod activity;
            pub mod decide;
            pub mod decision;
            pub mod evolve;
            pub mod ports;
            pub mod seed;
        }
        pub mod application {
            pub mod confirmation;
            pub mod errors;
        }
        pub mod use_cases {
            pub mod list_activities {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod queries_port;
            }
            pub mod sign_up_for_activity {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod unregister_from_activity {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod activity_store_in_memory;
            }
        }
    }
}

pub mod shell;
