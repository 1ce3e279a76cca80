//! IO module tests.

mod guard_tests;
