use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lobz", bin_name = "lobz", version)]
#[command(about = "Compose and arrange learning objectives", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog JSON file (levels, verbs, ABET outcomes)
    #[arg(long, global = true, help_heading = "Options")]
    pub catalog: Option<PathBuf>,

    /// Records JSON file to read and update
    #[arg(long, global = true, help_heading = "Options")]
    pub records: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List learning levels and their verbs
    Levels,

    /// List the ABET outcomes objectives can be tagged with
    Outcomes,

    /// Show objectives as sentences
    #[command(alias = "ls")]
    List {
        /// Edit view: indexes only, no outcome summary
        #[arg(short, long)]
        edit: bool,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add an objective
    #[command(alias = "n")]
    Add {
        /// Learning level id
        #[arg(short, long)]
        level: String,

        /// Verb id within the level
        #[arg(short = 'b', long)]
        verb: String,

        /// What the student acts on
        #[arg(short, long)]
        task: String,

        /// Circumstance the objective applies under
        #[arg(short, long, default_value = "")]
        condition: String,

        /// How well the task must be done
        #[arg(short, long, default_value = "")]
        degree: String,

        /// ABET outcome id (repeatable)
        #[arg(short, long = "outcome")]
        outcomes: Vec<String>,
    },

    /// Remove the objective at an index
    #[command(alias = "rm")]
    Remove { index: String },

    /// Reorder objectives: give the old index for each new position
    #[command(alias = "mv")]
    Move {
        #[arg(required = true)]
        order: Vec<String>,
    },

    /// Append objectives from a JSON file
    Import { file: PathBuf },

    /// Print objectives as JSON
    Export,

    /// Show resolved configuration
    Config {
        /// Print a commented lobz.toml template instead
        #[arg(long)]
        template: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_repeated_outcomes() {
        let cli = Cli::try_parse_from([
            "lobz", "add", "-l", "1", "-b", "0", "-t", "the terms", "-o", "2", "-o", "0",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add {
                level,
                verb,
                task,
                condition,
                outcomes,
                ..
            }) => {
                assert_eq!(level, "1");
                assert_eq!(verb, "0");
                assert_eq!(task, "the terms");
                assert_eq!(condition, "");
                assert_eq!(outcomes, vec!["2", "0"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_move_order() {
        let cli = Cli::try_parse_from(["lobz", "mv", "2", "0", "1"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Move { ref order }) if order == &["2", "0", "1"]
        ));
    }

    #[test]
    fn move_requires_an_order() {
        assert!(Cli::try_parse_from(["lobz", "move"]).is_err());
    }

    #[test]
    fn global_paths_after_subcommand() {
        let cli = Cli::try_parse_from(["lobz", "list", "--catalog", "c.json", "--edit"]).unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("c.json")));
        assert!(matches!(cli.command, Some(Commands::List { edit: true, .. })));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
