mod admin_tests;
mod order_tests;
mod page_tests;
mod tracker_tests;
