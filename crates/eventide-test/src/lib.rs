//! Eventide - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `eventide_test::` paths.

pub mod component {
    pub use eventide_core::{config, types};

    // Errors from every layer
    pub mod error {
        pub use eventide_core::error::*;
        pub use eventide_store::error::*;
    }

    pub mod calendar {
        pub use eventide_calendar::*;
    }

    pub mod store {
        pub use eventide_store::*;
    }
}

pub use eventide_app as app;
