pub mod demo;
pub mod render;

pub use demo::DemoRunner;
pub use render::{render_json, render_text};
