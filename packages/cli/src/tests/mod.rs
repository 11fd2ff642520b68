mod changes_tests;
mod quote_input_tests;
