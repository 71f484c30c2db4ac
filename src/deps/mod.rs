//! Dependency resolution and installation.
//!
//! - [`entry`] - per-module report records
//! - [`installer`] - installer abstraction and `pip` implementation
//! - [`resolver`] - lookup plus the interactive install loop

pub mod entry;
pub mod installer;
pub mod resolver;

pub use entry::{DependencyEntry, InstallAction};
pub use installer::{InstallSpec, Installer, PipInstaller};
pub use resolver::{install_question, Answer, Resolver};
