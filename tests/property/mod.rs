// Property-based tests module
// Structural properties of generated documents over many identifiers and page counts

mod document_shape_test;
