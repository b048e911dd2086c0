pub mod lookup;

pub use lookup::LookupParams;
