use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use kata::calculator::{self, expr};
use kata::demo;
use kata::name;

#[derive(Parser, Debug)]
#[command(name = "kata", about = "Calculator and name-analysis exercises")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate an expression like "2 + 3"
    Calc {
        expression: String,

        /// Output format
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Split a full name into first/middle/last parts
    Name {
        full_name: String,

        /// Output format
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Print the primitive vs. non-primitive data-types walkthrough
    Demo,
}

fn run_calc(line: &str, format: &str) -> Result<()> {
    let (a, op, b) = expr::parse_expr(line).map_err(|e| anyhow::anyhow!("{e}"))?;
    let result = op.apply(a, b).map_err(|e| anyhow::anyhow!("{e}"))?;
    match format {
        "json" => println!("{}", serde_json::json!({ "result": result })),
        _ => println!("{}", calculator::format_number(result)),
    }
    Ok(())
}

fn run_name(full_name: &str, format: &str) -> Result<()> {
    let parts = name::analyze_name(full_name);
    match format {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&parts).context("serialize name parts to JSON")?
        ),
        _ => println!("{parts}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Calc { expression, format }) => run_calc(&expression, &format),
        Some(Command::Name { full_name, format }) => run_name(&full_name, &format),
        Some(Command::Demo) => demo::print(&mut std::io::stdout()).context("write demo output"),
        None => {
            kata::repl::run_repl();
            Ok(())
        }
    }
}
