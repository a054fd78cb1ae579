//! Integration tests for managers, derived classes and result decoding.

mod support;

mod edges;
mod nodes;
mod results;
