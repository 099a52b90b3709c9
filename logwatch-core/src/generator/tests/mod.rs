mod rate_tests;
mod sample_tests;
