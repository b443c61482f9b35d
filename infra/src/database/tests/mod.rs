mod memory_user_repository_tests;
