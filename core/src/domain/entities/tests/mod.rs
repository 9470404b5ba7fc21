//! Tests for domain entities

#[cfg(test)]
mod token_tests;
