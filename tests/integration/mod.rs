// Integration tests module
// Tests that exercise generation and the filesystem together

mod load_fixture_test;
