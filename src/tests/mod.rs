mod common;

mod api_test;
mod locale_test;
mod pages_test;
