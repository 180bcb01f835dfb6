pub use graph_out::graph_out;
pub use map_events::map_events;
pub use store_accounts::store_accounts;
pub use store_pool_count::store_pool_count;
pub use store_pools::store_pools;

#[path = "1_map_events.rs"]
mod map_events;
#[path = "2_store_pool_count.rs"]
mod store_pool_count;
#[path = "3_store_pools.rs"]
mod store_pools;
#[path = "4_store_accounts.rs"]
mod store_accounts;
#[path = "5_graph_out.rs"]
mod graph_out;
