mod order_test;
