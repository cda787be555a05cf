use clap::Parser;
use iban_check::reference::iban_length;
use iban_check::validator::{check_iban, normalize};

#[derive(Parser)]
#[command(name = "iban-check")]
#[command(about = "Validate an International Bank Account Number", long_about = None)]
struct Cli {
    /// IBAN to check; several words are joined, so grouped IBANs need no quotes.
    #[arg(required = true, num_args = 1..)]
    iban: Vec<String>,
    /// Print the normalized form and the reason for a rejection.
    #[arg(long, default_value_t = false, conflicts_with = "quiet")]
    explain: bool,
    /// Print nothing; the exit status carries the verdict.
    #[arg(long, short, default_value_t = false)]
    quiet: bool,
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    }
}

fn run() -> Result<bool, String> {
    iban_check::logging::init_logging("iban-check")?;
    let cli = Cli::parse();
    let candidate = cli.iban.join(" ");

    let verdict = check_iban(&candidate);
    log::info!(
        "checked candidate of {} characters: {}",
        candidate.chars().count(),
        if verdict.is_ok() { "valid" } else { "invalid" }
    );

    if cli.quiet {
        return Ok(verdict.is_ok());
    }
    if cli.explain {
        explain(&candidate, &verdict);
    } else {
        println!("{}", if verdict.is_ok() { "valid" } else { "invalid" });
    }
    Ok(verdict.is_ok())
}

fn explain(candidate: &str, verdict: &Result<iban_check::Iban, iban_check::Rejection>) {
    let normalized = normalize(candidate);
    println!("normalized: {normalized}");
    if let Some(country) = normalized.get(0..2) {
        match iban_length(country) {
            Some(expected) => println!("country: {country} (length {expected})"),
            None => println!("country: {country} (not in table)"),
        }
    }
    match verdict {
        Ok(iban) => {
            println!("check digits: {}", iban.check_digits());
            println!("bban: {}", iban.bban());
            println!("valid");
        }
        Err(rejection) => println!("invalid: {rejection}"),
    }
}
