mod fragment_table_tests;
mod property_tests;
mod type_condition_tests;
