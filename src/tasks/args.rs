use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tasks", version, about = "A task list that shows off nested commands")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// add a task to the list
    #[command(visible_alias = "a")]
    Add {
        #[arg(value_name = "TASK")]
        args: Vec<String>,
    },

    /// complete a task on the list
    #[command(visible_alias = "c")]
    Complete {
        #[arg(value_name = "TASK")]
        args: Vec<String>,
    },

    /// options for task templates
    #[command(visible_alias = "t", subcommand)]
    Template(TemplateCommands),
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum TemplateCommands {
    /// add a new template
    Add {
        #[arg(value_name = "TEMPLATE")]
        args: Vec<String>,
    },

    /// remove an existing template
    Remove {
        #[arg(value_name = "TEMPLATE")]
        args: Vec<String>,
    },
}
