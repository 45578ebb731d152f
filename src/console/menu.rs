use std::io::{self, BufRead, Write};

use crate::{
    console::command::{MenuCommand, parse_menu_input},
    measure,
};

/// The environment the menu talks to.
///
/// Implementations supply line input and text output so the same loop can run
/// over a real terminal, a test script, or any other front-end, with the core
/// seeing only plain data in and plain data or errors out.
pub trait Console {
    /// Reads one line of input, without its trailing line terminator.
    ///
    /// # Errors
    /// Returns an error when the input source is closed or unreadable.
    fn read_line(&mut self) -> io::Result<String>;

    /// Displays one block of text.
    fn show(&mut self, text: &str);
}

/// `Console` over the process's stdin and stdout.
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self) -> io::Result<String> {
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        while line.ends_with(['\n', '\r']) {
            line.pop();
        }
        Ok(line)
    }

    fn show(&mut self, text: &str) {
        println!("{text}");
    }
}

const MENU: &str = "\
What would you like to do?
  1) Measure a route
  2) Instructions
  3) Quit";

const INSTRUCTIONS: &str = "\
A route is written as steps with no separators, for example 3F4R.
Each step is a count followed by a single direction letter:
  F  forward      B  back
  L  left         R  right
Direction letters may be upper or lower case.
The result is the straight-line distance from where you started,
not the length of the path you walked: 3F4R measures 5.";

/// Runs the interactive menu until the user quits.
///
/// Rejected routes are reported through `console` and the menu is shown
/// again; no rejection ends the loop or the process.
///
/// # Errors
/// Propagates I/O errors from `console`, including a closed input source.
pub fn run<C: Console>(console: &mut C) -> io::Result<()> {
    loop {
        console.show(MENU);

        match parse_menu_input(&console.read_line()?) {
            MenuCommand::Measure => {
                console.show("Enter the route:");
                let route = console.read_line()?;
                match measure(&route) {
                    Ok(distance) => {
                        console.show(&format!("Straight-line distance from start: {distance}"));
                    },
                    Err(e) => console.show(&format!("{e}")),
                }
            },

            MenuCommand::Instructions => console.show(INSTRUCTIONS),

            MenuCommand::Quit => return Ok(()),

            MenuCommand::Unknown(choice) => {
                console.show(&format!("'{choice}' is not an option here."));
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    /// Console fed from a fixed script, recording everything shown.
    struct ScriptedConsole {
        inputs: VecDeque<String>,
        shown:  Vec<String>,
    }

    impl ScriptedConsole {
        fn new(inputs: &[&str]) -> Self {
            Self { inputs: inputs.iter().map(ToString::to_string).collect(),
                   shown:  Vec::new(), }
        }
    }

    impl Console for ScriptedConsole {
        fn read_line(&mut self) -> io::Result<String> {
            self.inputs
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        }

        fn show(&mut self, text: &str) {
            self.shown.push(text.to_string());
        }
    }

    #[test]
    fn measures_a_route_and_quits() {
        let mut console = ScriptedConsole::new(&["1", "3F4R", "3"]);
        run(&mut console).unwrap();
        assert!(console.shown
                       .iter()
                       .any(|s| s.contains("distance from start: 5")));
    }

    #[test]
    fn reports_rejections_and_prompts_again() {
        let mut console = ScriptedConsole::new(&["measure", "5F3", "q"]);
        run(&mut console).unwrap();
        assert!(console.shown.iter().any(|s| s.contains("no direction")));
    }

    #[test]
    fn shows_instructions_on_request() {
        let mut console = ScriptedConsole::new(&["2", "quit"]);
        run(&mut console).unwrap();
        assert!(console.shown.iter().any(|s| s.contains("route is written")));
    }

    #[test]
    fn unknown_choices_do_not_end_the_loop() {
        let mut console = ScriptedConsole::new(&["0", "q"]);
        run(&mut console).unwrap();
        assert!(console.shown.iter().any(|s| s.contains("not an option")));
    }

    #[test]
    fn closed_input_ends_the_loop_with_an_error() {
        let mut console = ScriptedConsole::new(&[]);
        assert!(run(&mut console).is_err());
    }
}
