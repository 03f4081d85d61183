// Modular tools
pub mod batch;
pub mod extract;
pub mod fetch;
pub mod filter;
pub mod report;
