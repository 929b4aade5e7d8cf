mod unsupported_error_tests;
