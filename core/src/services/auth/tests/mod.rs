//! Tests for the authentication service

mod validation_tests;
