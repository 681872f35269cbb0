mod dashboard_tests;
mod entry_route_tests;
mod export_tests;
