//! Tests for the token service

#[cfg(test)]
mod keys;
