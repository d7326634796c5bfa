pub mod hashmap_option_store;
pub mod hashmap_user_store;
pub mod postgres_user_store;
pub mod redis_option_store;

pub use hashmap_option_store::HashMapOptionStore;
pub use hashmap_user_store::HashMapUserStore;
pub use postgres_user_store::{MIGRATOR, PostgresUserStore};
pub use redis_option_store::RedisOptionStore;
