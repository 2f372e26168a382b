//! Interactive terminal boundary

mod console;

pub use console::{Console, ScriptedConsole, StdConsole};
