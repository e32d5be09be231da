mod builder_test;
mod pipeline_test;
mod store_test;
mod web_test;
