//! Universe Scenario Suite
//!
//! End-to-end checks through the `costar` facade: build a graph from a
//! relation, center it, and query it the way the interactive loop does.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test universe_scenarios
//! ```

mod test_utils;

mod building;
mod centering;
mod from_files;
