//! # cgmock-render
//!
//! Renders the four correlated test-double artifacts for a library:
//! an abstract interface, a gmock mock deriving from it, `extern "C"`
//! trampolines forwarding into the mock, and a test fixture that installs the
//! mock. The header holds the interface, mock, fixture and C forward
//! declarations; the definitions document holds the mock-pointer global and
//! the trampolines.
//!
//! Rendering is pure: the same [`Mocker`] always renders byte-identical text.

mod definitions;
mod header;
pub mod mocker;
pub mod options;

pub use mocker::Mocker;
pub use options::RenderOptions;
