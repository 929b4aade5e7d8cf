mod annotation_tests;
mod schema_changes_tests;
mod two_way_tests;
