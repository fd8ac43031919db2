#[path = "../test_utils.rs"]
mod test_utils;

mod config_test;
mod disponibility_test;
mod middleware_test;
mod user_test;
