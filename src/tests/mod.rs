mod entry_tests;
mod filter_tests;
mod router_tests;
mod utils;
