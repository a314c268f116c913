pub mod projects;

pub use projects::{NewProject, Project};
