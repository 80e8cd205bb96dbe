mod argument_decoding_tests;
mod concurrency_tests;
