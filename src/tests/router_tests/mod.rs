mod dashboard_tests;
mod export_tests;
