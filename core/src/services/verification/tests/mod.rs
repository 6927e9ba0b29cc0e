//! Unit tests for the sign-in service

mod mocks;
