//! Cache module for Redis-backed storage
//!
//! This module provides the Redis client with connection retry logic and the
//! pending verification store built on it.

pub mod pending_store;
pub mod redis_client;

pub use pending_store::RedisPendingStore;
pub use redis_client::RedisClient;
