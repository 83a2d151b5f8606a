//! Property-based tests for authbox

mod username_proptest;
