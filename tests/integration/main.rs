//! Integration tests exercising the HTTP surface end-to-end over the
//! in-memory stores.

mod helpers;

mod auth_test;
mod bookmark_test;
mod user_test;
