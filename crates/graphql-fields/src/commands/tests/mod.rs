mod flatten_cmd_tests;
