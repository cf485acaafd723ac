mod graph_registry_tests;
