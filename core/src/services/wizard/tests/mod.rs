//! Tests for application wizard

#[cfg(test)]
mod navigation_tests;
#[cfg(test)]
mod prefill_tests;
