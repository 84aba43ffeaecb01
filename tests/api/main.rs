//! Fleet API integration tests.

mod support;
mod dispatch;
