//! shipcalc CLI - Command-line interface
//!
//! Commands:
//!   (none)   - Interactive prompt session
//!   quote    - Price a shipment from flags
//!   rates    - Print the rate tables
//!   schema   - Print JSON schema for a public type
//!   version  - Print version

use shipcalc::*;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let result = if args.len() < 2 {
        interactive()
    } else {
        match args[1].as_str() {
            "quote" => cmd_quote(&args[2..]),
            "rates" => cmd_rates(&args[2..]),
            "schema" => cmd_schema(&args[2..]),
            "version" | "--version" | "-v" => {
                println!("shipcalc {}", VERSION);
                Ok(())
            }
            "help" | "--help" | "-h" => {
                print_usage();
                Ok(())
            }
            cmd => {
                eprintln!("Unknown command: {}", cmd);
                print_usage();
                Err("Unknown command".into())
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"
shipcalc - Shipping cost estimator

USAGE:
    shipcalc                          Interactive prompt session
    shipcalc <COMMAND> [OPTIONS]

COMMANDS:
    quote --weight <kg> --dims <LxWxH> --zone <1-4> --method <name>
                                      Price a shipment without prompts
    rates                             Print the rate tables
    schema [name]                     Print JSON schema for a public type
    version                           Print version
    help                              Show this help

OPTIONS:
    --json                            JSON output format (quote, rates)
"#
    );
}

/// The default prompt/response session.
fn interactive() -> Result<()> {
    println!("Welcome to the Shipping Cost Calculator!");
    println!("---------------------------------------");

    let weight_kg = parse_number(&prompt("Enter package weight (kg): ")?)?;

    let dimensions = prompt("Enter package dimensions (LxWxH in cm, e.g. 30x20x15): ")?
        .parse::<Dimensions>()?;

    println!();
    println!("Shipping Zones:");
    for zone in Zone::ALL {
        println!("{} - {}", zone.number(), zone);
    }
    let zone = parse_zone_number(&prompt("Select destination zone (1-4): ")?)?;

    println!();
    println!("Shipping Methods:");
    println!("1 - Economy");
    println!("2 - Standard");
    println!("3 - Express");
    let selection = prompt("Select shipping method (1-3): ")?
        .parse::<usize>()
        .map_err(|_| Error::MalformedInput("selection must be a number".to_string()))?;
    let method = Method::ALL
        .get(selection.wrapping_sub(1))
        .ok_or_else(|| Error::InvalidMethod(format!("selection must be 1-3 (got {})", selection)))?;

    let request = ShipmentRequest {
        weight_kg,
        dimensions,
        zone,
        method: method.to_string(),
    };
    let quote = calculate(&request)?;

    println!();
    println!("{}", quote.console_line());
    Ok(())
}

const QUOTE_USAGE: &str =
    "Usage: shipcalc quote --weight <kg> --dims <LxWxH> --zone <1-4> --method <name> [--json]";

fn cmd_quote(args: &[String]) -> Result<()> {
    if args.is_empty() {
        return Err(QUOTE_USAGE.into());
    }

    let json_output = args.contains(&"--json".to_string());

    let weight = flag_value(args, "--weight", "-w").ok_or_else(|| Error::from(QUOTE_USAGE))?;
    let dims = flag_value(args, "--dims", "-d").ok_or_else(|| Error::from(QUOTE_USAGE))?;
    let zone = flag_value(args, "--zone", "-z").ok_or_else(|| Error::from(QUOTE_USAGE))?;
    let method = flag_value(args, "--method", "-m").ok_or_else(|| Error::from(QUOTE_USAGE))?;

    let request = ShipmentRequest {
        weight_kg: parse_number(&weight)?,
        dimensions: dims.parse()?,
        zone: parse_zone_number(&zone)?,
        method,
    };

    let quote = calculate(&request)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        print!("{}", quote.to_report());
    }

    Ok(())
}

fn cmd_rates(args: &[String]) -> Result<()> {
    let json_output = args.contains(&"--json".to_string());

    let card = RateCard::current();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&card)?);
    } else {
        print!("{}", card.to_report());
    }

    Ok(())
}

fn cmd_schema(args: &[String]) -> Result<()> {
    let schema_name = args.first().map(|s| s.as_str()).unwrap_or("list");

    match schema_name {
        "list" => {
            println!("Available schemas: request, quote, rates");
            Ok(())
        }
        "request" => print_schema::<ShipmentRequest>(),
        "quote" => print_schema::<Quote>(),
        "rates" => print_schema::<RateCard>(),
        _ => Err(format!("Unknown schema: {}", schema_name).into()),
    }
}

fn print_schema<T: schemars::JsonSchema>() -> Result<()> {
    let schema = schemars::schema_for!(T);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

/// Print a prompt and read one trimmed line from stdin.
fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush().map_err(Error::Io)?;

    let mut line = String::new();
    io::stdin().read_line(&mut line).map_err(Error::Io)?;
    Ok(line.trim().to_string())
}

fn parse_number(s: &str) -> Result<f64> {
    s.parse::<f64>()
        .map_err(|_| Error::MalformedInput(format!("'{}' is not a number", s)))
}

/// Parse a zone identifier. Out-of-range integers (including negatives) are
/// invalid zones, not malformed input; only non-numeric text is malformed.
fn parse_zone_number(s: &str) -> Result<u8> {
    let value = s
        .parse::<i64>()
        .map_err(|_| Error::MalformedInput(format!("'{}' is not a number", s)))?;
    u8::try_from(value).map_err(|_| Error::InvalidZone(format!("must be 1-4 (got {})", value)))
}

fn flag_value(args: &[String], long: &str, short: &str) -> Option<String> {
    for (i, arg) in args.iter().enumerate() {
        if arg == long || arg == short {
            if let Some(value) = args.get(i + 1) {
                return Some(value.clone());
            }
        }
    }
    None
}
