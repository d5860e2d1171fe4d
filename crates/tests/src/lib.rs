//! Integration tests for the session, guard, navigation, and directory
//! layers. UI rendering is covered manually; everything here exercises the
//! plain-Rust core that the components delegate to.

#[cfg(test)]
mod common;

#[cfg(test)]
mod directory_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod guard_tests;

#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod access_flow_tests;
