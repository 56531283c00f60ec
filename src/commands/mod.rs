//! # CLI Command Implementations
//!
//! `flutter-release` has a single command. Its arguments live in an `Args`
//! struct derived with `clap` and its `execute` function wires the parsed
//! arguments into the `flutter_release` library.

pub mod release;
