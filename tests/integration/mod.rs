//! Integration tests, one module per API area

mod auth_test;
mod chat_test;
mod communities_test;
mod companion_test;
mod profile_test;
