mod diagnostic_tests;
