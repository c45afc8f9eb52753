mod api_tests;
mod modal_tests;
mod pages_tests;
mod static_tests;
mod tracking_tests;
