pub mod utils;

mod db_tests;
mod fetch_tests;
mod pipeline_tests;
