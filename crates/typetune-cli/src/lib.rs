//! Library side of the `typetune` command: logging, settings, scene loading
//! and write-back.

pub mod apply;
pub mod logging;
pub mod scene;
pub mod settings;
