mod category_registry_tests;
