pub mod dependency_walker;

pub use dependency_walker::DependencyWalker;
