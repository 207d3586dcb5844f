// Aggregator test: include tests from tests/rust/* as distinct modules.
// This keeps sources organized while providing a single integration test
// file that Cargo will compile and run.

mod rust_tests {
    pub mod cli_convert {
        include!("rust/cli_convert.rs");
    }
    pub mod cli_errors {
        include!("rust/cli_errors.rs");
    }
    pub mod cli_help {
        include!("rust/cli_help.rs");
    }
}

// Re-export tests so the test runner finds them at crate root.
pub use rust_tests::*;
