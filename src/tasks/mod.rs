//! Demo command tree: a task list with nested `template` subcommands.
//!
//! Dispatch is entirely clap's; each leaf prints one line.

pub mod args;

use args::{Cli, Commands, TemplateCommands};
use log::debug;
use std::io::{self, Write};

pub const PROMPT: &str = "No command given, run 'tasks --help' to see the available commands.";

pub fn run(cli: &Cli, out: &mut dyn Write) -> io::Result<()> {
    debug!("dispatching {:?}", cli.command);

    let line = match &cli.command {
        None => PROMPT.to_string(),
        Some(Commands::Add { args }) => format!("added task: {}", args.join(" ")),
        Some(Commands::Complete { args }) => format!("completed task: {}", args.join(" ")),
        Some(Commands::Template(TemplateCommands::Add { args })) => {
            format!("new task template: {}", args.join(" "))
        }
        Some(Commands::Template(TemplateCommands::Remove { args })) => {
            format!("removed task template: {}", args.join(" "))
        }
    };

    writeln!(out, "{line}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn dispatch(argv: &[&str]) -> String {
        let cli = Cli::try_parse_from(argv).expect("command line parses");
        let mut out = Vec::new();
        run(&cli, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_prints_its_arguments() {
        assert_eq!(dispatch(&["tasks", "add", "buy", "milk"]), "added task: buy milk\n");
    }

    #[test]
    fn aliases_resolve_to_the_same_handlers() {
        assert_eq!(dispatch(&["tasks", "a", "x"]), "added task: x\n");
        assert_eq!(dispatch(&["tasks", "c", "x"]), "completed task: x\n");
        assert_eq!(dispatch(&["tasks", "t", "add", "x"]), "new task template: x\n");
        assert_eq!(dispatch(&["tasks", "t", "remove", "x"]), "removed task template: x\n");
    }

    #[test]
    fn missing_arguments_print_an_empty_value() {
        assert_eq!(dispatch(&["tasks", "complete"]), "completed task: \n");
    }

    #[test]
    fn no_command_prints_the_prompt() {
        assert_eq!(dispatch(&["tasks"]), format!("{PROMPT}\n"));
    }

    #[test]
    fn unknown_commands_fail_to_parse() {
        assert!(Cli::try_parse_from(["tasks", "frobnicate"]).is_err());
        assert!(Cli::try_parse_from(["tasks", "template", "rename", "x"]).is_err());
    }

    #[test]
    fn template_requires_a_subcommand() {
        assert!(Cli::try_parse_from(["tasks", "template"]).is_err());
    }
}
