pub mod health;
pub mod lookup;

pub use health::health_check;
pub use lookup::dns_query_get;
