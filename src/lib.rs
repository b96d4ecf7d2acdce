// Public library interface for market-share-dashboard
pub mod action_router;
pub mod aggregators;
pub mod analysis;
pub mod api;
pub mod catalog;
pub mod cli_helper;
pub mod cli_utils;
pub mod naming;
pub mod segments;
pub mod transactions;
pub mod utils;
