mod auth_flow_tests;
mod listings_tests;
mod property_tests;
