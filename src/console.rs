/// Menu choices and their parsing.
///
/// Declares the commands a user can pick at the interactive menu and a small
/// parser from an input line to a command. Unknown input becomes a command of
/// its own so the menu can answer it without ending the loop.
pub mod command;
/// The capability interface to the terminal, and the menu loop itself.
///
/// Input and output go through the `Console` trait so the same loop runs over
/// a real terminal or a scripted harness. The loop feeds routes to the core
/// and reports either the measured distance or the rejection reason, then
/// prompts again.
pub mod menu;

pub use command::MenuCommand;
pub use menu::{Console, StdConsole};
