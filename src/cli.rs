use crate::cards::Suitedness;
use crate::notation::*;
use clap::Parser;
use clap::Subcommand;
use colored::Colorize;
use std::io::Write;

#[derive(Parser)]
#[command(name = "handnote", version, about = "Read, normalize, and label poker hand notation")]
pub struct Args {
    #[command(subcommand)]
    pub query: Option<Query>,
}

#[derive(Subcommand)]
pub enum Query {
    #[command(about = "Parse free-text hands, one result per line", alias = "p")]
    Parse {
        #[arg(required = true)]
        text: Vec<String>,
        #[arg(long, help = "Print each result as JSON")]
        json: bool,
    },
    #[command(about = "Label a canonical hand, e.g. AKs", alias = "d")]
    Display {
        #[arg(required = true)]
        hand: String,
    },
    #[command(about = "Print the 13x13 starting-hand chart", alias = "g")]
    Grid,
}

pub struct CLI;

impl CLI {
    /// Interactive prompt when no query is given.
    pub fn run(args: Args) -> anyhow::Result<()> {
        match args.query {
            None => Self::prompt(),
            Some(Query::Parse { text, json }) => text.iter().try_for_each(|t| Self::parse(t, json)),
            Some(Query::Display { hand }) => Ok(println!(
                "{}",
                Notation::try_from(hand.as_str())
                    .map_err(|e| anyhow::anyhow!("invalid hand: {}", e))?
                    .label()
            )),
            Some(Query::Grid) => Ok(print!("{}", Grid)),
        }
    }

    fn parse(text: &str, json: bool) -> anyhow::Result<()> {
        let parse = parse(text);
        match json {
            true => println!("{}", serde_json::to_string(&parse)?),
            false => println!("{}", Self::paint(&parse)),
        }
        Ok(())
    }

    fn prompt() -> anyhow::Result<()> {
        log::info!("launching hand prompt");
        loop {
            print!("> ");
            std::io::stdout().flush()?;
            let ref mut input = String::new();
            if std::io::stdin().read_line(input)? == 0 {
                break;
            }
            match input.trim() {
                "quit" => break,
                "exit" => break,
                _ => match Self::handle(input) {
                    Err(e) => eprintln!("handle error: {}", e),
                    Ok(_) => continue,
                },
            }
        }
        Ok(())
    }

    /// Parses one line, asking for suitedness when the ranks alone
    /// do not settle the hand.
    fn handle(input: &str) -> anyhow::Result<()> {
        let parse = parse(input);
        match parse {
            Parse::Empty => Ok(()),
            Parse::NeedsSuitedness { pending, ref message } => {
                let choice = dialoguer::Select::new()
                    .with_prompt(format!("{} {}", pending, message))
                    .items(&Suitedness::all().map(|s| pending.with(s).label()))
                    .default(0)
                    .interact()?;
                let resolved = parse.resolve(Suitedness::all()[choice]);
                log::info!("{:<32}{:<32}", "resolved suitedness", resolved.kind());
                Ok(println!("{}", Self::paint(&resolved)))
            }
            _ => Ok(println!("{}", Self::paint(&parse))),
        }
    }

    fn paint(parse: &Parse) -> String {
        match parse {
            Parse::Empty => "empty".dimmed().to_string(),
            Parse::Valid { notation } => format!(
                "{} {}",
                format!("{:<5}", notation.to_string()).green().bold(),
                notation.label()
            ),
            Parse::NeedsSuitedness { pending, message } => format!(
                "{} {}",
                format!("{:<5}", pending.to_string()).yellow(),
                message
            ),
            Parse::Invalid { message, suggestions } => match suggestions.is_empty() {
                true => format!("{} {}", "invalid".red(), message),
                false => format!(
                    "{} {} (did you mean {}?)",
                    "invalid".red(),
                    message,
                    suggestions
                        .iter()
                        .map(|n| n.to_string().cyan().to_string())
                        .collect::<Vec<String>>()
                        .join(", ")
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subcommands() {
        let args = Args::try_parse_from(["handnote", "parse", "aks", "ka", "--json"]).unwrap();
        match args.query {
            Some(Query::Parse { text, json }) => assert!(text == ["aks", "ka"] && json),
            _ => panic!("expected parse query"),
        }
        assert!(Args::try_parse_from(["handnote"]).unwrap().query.is_none());
        assert!(Args::try_parse_from(["handnote", "parse"]).is_err());
    }

    #[test]
    fn display_rejects_loose_text() {
        let args = Args::try_parse_from(["handnote", "display", "ka"]).unwrap();
        assert!(CLI::run(args).is_err());
    }

    #[test]
    fn paints_every_outcome() {
        colored::control::set_override(false);
        assert!(CLI::paint(&parse("aks")) == "AKs   Ace-King suited");
        assert!(CLI::paint(&parse("")) == "empty");
        assert!(CLI::paint(&parse("xyz")).starts_with("invalid 'X'"));
        assert!(CLI::paint(&parse("AKQ")).ends_with("(did you mean AKs, AKo, AQs?)"));
    }

    #[test]
    fn json_is_tagged() {
        let json = serde_json::to_value(parse("ka")).unwrap();
        assert!(json["kind"] == "needs_suitedness");
        assert!(json["pending"] == "AK");
        let json = serde_json::to_value(parse("1Ks")).unwrap();
        assert!(json["kind"] == "invalid");
        assert!(json["suggestions"][0] == "KTs");
        let json = serde_json::to_value(parse("QQ")).unwrap();
        assert!(json["notation"] == "QQ");
    }
}
