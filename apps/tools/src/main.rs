use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use roster::{RosterView, RosterViewController};
use shared::{
    domain::{PersonId, PersonRecord, Role},
    roster_file::{load_roster_file, write_roster_json},
};

#[derive(Parser, Debug)]
#[command(name = "roster-tools", about = "Headless helpers for admin roster files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one page of the roster as the users screen would show it.
    View {
        #[arg(long)]
        roster: PathBuf,
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Check that a roster file parses and has unique ids.
    Validate {
        #[arg(long)]
        roster: PathBuf,
    },
    /// Write a synthetic roster to stdout.
    Generate {
        #[arg(long, default_value_t = 25)]
        count: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::View {
            roster,
            query,
            page,
            format,
        } => {
            let people = load_roster_file(&roster)
                .with_context(|| format!("cannot view roster '{}'", roster.display()))?;
            let mut controller = RosterViewController::new();
            controller.set_search_query(query);
            controller.go_to_page(&people, page);
            let view = controller.view(&people);
            match format {
                OutputFormat::Table => print!("{}", render_table(&view)),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&view_json(&view))?)
                }
            }
        }
        Command::Validate { roster } => {
            let people = load_roster_file(&roster)
                .with_context(|| format!("roster '{}' is invalid", roster.display()))?;
            let unassigned = people.iter().filter(|p| p.role.is_none()).count();
            println!(
                "ok: {} people, {} without a recognized role",
                people.len(),
                unassigned
            );
        }
        Command::Generate { count } => {
            println!("{}", write_roster_json(&generate_roster(count))?);
        }
    }

    Ok(())
}

fn render_table(view: &RosterView<'_>) -> String {
    let mut out = format!("Total Number: {}\n", view.filtered_count());
    if view.is_empty() {
        out.push_str("No users found with this search criteria.\n");
        return out;
    }
    out.push_str(&format!(
        "{:<6} {:<24} {:<16} {:<32} {:<12} {}\n",
        "ID", "NAME", "PHONE", "EMAIL", "COUNTRY", "ROLE"
    ));
    for person in view.paginated() {
        out.push_str(&format!(
            "{:<6} {:<24} {:<16} {:<32} {:<12} {}\n",
            person.id,
            person.name,
            person.phone,
            person.email,
            person.country,
            person.role.map_or("-", Role::as_str)
        ));
    }
    if view.shows_pagination() {
        out.push_str(&view.page_label());
        out.push('\n');
    }
    out
}

fn view_json(view: &RosterView<'_>) -> serde_json::Value {
    serde_json::json!({
        "search_query": view.search_query,
        "current_page": view.current_page,
        "total_pages": view.total_pages,
        "filtered_count": view.filtered_count(),
        "people": view.paginated(),
    })
}

const FIRST_NAMES: [&str; 8] = [
    "Alice", "Bob", "Carol", "Dmitri", "Eve", "Farah", "Goran", "Hana",
];
const COUNTRIES: [&str; 5] = ["Canada", "Germany", "Japan", "Kenya", "Brazil"];

fn generate_roster(count: usize) -> Vec<PersonRecord> {
    (0..count)
        .map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let n = i + 1;
            PersonRecord {
                id: PersonId(i64::try_from(n).unwrap_or(i64::MAX)),
                name: format!("{first} {n}"),
                email: format!("{}{n}@example.com", first.to_lowercase()),
                phone: format!("+1-555-{:04}", n % 10_000),
                country: COUNTRIES[i % COUNTRIES.len()].to_string(),
                role: Some(Role::ALL[i % Role::ALL.len()]),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::roster_file::parse_roster;

    #[test]
    fn generated_roster_has_unique_ids_and_parses_back() {
        let people = generate_roster(25);
        let json = write_roster_json(&people).expect("json");
        assert_eq!(parse_roster(&json).expect("parse"), people);
    }

    #[test]
    fn table_shows_last_partial_page() {
        let people = generate_roster(25);
        let mut controller = RosterViewController::new();
        controller.go_to_page(&people, 3);
        let table = render_table(&controller.view(&people));
        assert!(table.starts_with("Total Number: 25\n"));
        assert!(table.contains("Alice 25"));
        assert!(!table.contains("Hana 8 "));
        assert!(table.trim_end().ends_with("Page 3 of 3"));
    }

    #[test]
    fn table_reports_empty_search() {
        let people = generate_roster(5);
        let mut controller = RosterViewController::new();
        controller.set_search_query("zzz");
        let table = render_table(&controller.view(&people));
        assert!(table.contains("No users found"));
    }

    #[test]
    fn json_view_carries_page_metadata() {
        let people = generate_roster(12);
        let mut controller = RosterViewController::new();
        controller.go_to_page(&people, 2);
        let value = view_json(&controller.view(&people));
        assert_eq!(value["current_page"], 2);
        assert_eq!(value["total_pages"], 2);
        assert_eq!(value["people"].as_array().map(Vec::len), Some(2));
    }
}
