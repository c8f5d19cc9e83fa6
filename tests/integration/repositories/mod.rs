mod order_repository_test;
mod user_repository_test;
