mod index_tests;
