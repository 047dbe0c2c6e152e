pub mod eviction_ring;

pub use eviction_ring::EvictionRing;
