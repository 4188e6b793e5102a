//! Shared test utilities for folio-db unit tests.
