pub mod analysis;
pub mod catalog;
pub mod health;
pub mod market_share;
pub mod mutation;
pub mod naming;
pub mod segments;
