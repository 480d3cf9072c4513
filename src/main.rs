use clap::{Arg, ArgMatches, Command};
use serde_json::json;
use std::process;
use tracing::debug;

use dnssec_rdata::config::{InspectConfig, OutputFormat};
use dnssec_rdata::dns::RecordType;
use dnssec_rdata::dnssec::{DnsSecAlgorithm, Result};
use dnssec_rdata::{DnsKeyRecord, decode_dnskey, decode_ds, digest_algorithm_name, keytag};

fn cli() -> Command {
    let rdata_arg = Arg::new("rdata")
        .value_name("HEX")
        .help("RDATA as hex, whitespace allowed")
        .required(true)
        .num_args(1..);

    Command::new("dnssec-rdata")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Decode DNSKEY and DS RDATA and compute key tags")
        .subcommand_required(true)
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FORMAT")
                .help("Output format: text or json (overrides DNSSEC_RDATA_OUTPUT)")
                .global(true),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .value_name("FILTER")
                .help("Log filter directive (overrides DNSSEC_RDATA_LOG)")
                .global(true),
        )
        .subcommand(
            Command::new("dnskey")
                .about("Decode DNSKEY RDATA")
                .arg(rdata_arg.clone()),
        )
        .subcommand(
            Command::new("ds")
                .about("Decode DS RDATA")
                .arg(rdata_arg.clone()),
        )
        .subcommand(
            Command::new("keytag")
                .about("Compute the key tag of DNSKEY RDATA")
                .arg(rdata_arg),
        )
        .subcommand(
            Command::new("digest-type")
                .about("Name the digest algorithm of a DS digest type code")
                .arg(
                    Arg::new("code")
                        .value_name("CODE")
                        .required(true)
                        .value_parser(clap::value_parser!(u8)),
                ),
        )
}

/// Join hex arguments, ignoring whitespace, and decode them
fn parse_hex_rdata(parts: &[&str]) -> Result<Vec<u8>> {
    let hex: String = parts
        .iter()
        .flat_map(|part| part.chars())
        .filter(|c| !c.is_whitespace())
        .collect();
    Ok(hex::decode(hex)?)
}

fn rdata_from(matches: &ArgMatches) -> Result<Vec<u8>> {
    let parts: Vec<&str> = matches
        .get_many::<String>("rdata")
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect();
    parse_hex_rdata(&parts)
}

fn algorithm_label(code: u8) -> String {
    DnsSecAlgorithm::try_from(code)
        .map(|alg| alg.mnemonic().to_string())
        .unwrap_or_else(|_| "UNASSIGNED".to_string())
}

fn key_role(record: &DnsKeyRecord) -> &'static str {
    if !record.is_zone_key() {
        "NON-ZONE"
    } else if record.is_secure_entry_point() {
        "KSK"
    } else {
        "ZSK"
    }
}

fn run(matches: &ArgMatches, output: OutputFormat) -> Result<String> {
    let rendered = match matches.subcommand() {
        Some(("dnskey", sub)) => {
            let rdata = rdata_from(sub)?;
            let record = decode_dnskey(&rdata)?;
            let key_tag = keytag(&rdata);
            match output {
                OutputFormat::Text => format!(
                    "{} {} ; {} {} key tag {}",
                    RecordType::DNSKEY,
                    record,
                    algorithm_label(record.algorithm),
                    key_role(&record),
                    key_tag
                ),
                OutputFormat::Json => json!({
                    "type": RecordType::DNSKEY.to_string(),
                    "record": record,
                    "key_tag": key_tag,
                })
                .to_string(),
            }
        }
        Some(("ds", sub)) => {
            let record = decode_ds(&rdata_from(sub)?)?;
            // the fields are printed even when the digest type is unknown
            let digest = digest_algorithm_name(record.digest_type);
            match output {
                OutputFormat::Text => {
                    let annotation = match &digest {
                        Ok(digest) => format!("{} digest", digest),
                        Err(e) => e.to_string(),
                    };
                    format!("{} {} ; {}", RecordType::DS, record, annotation)
                }
                OutputFormat::Json => json!({
                    "type": RecordType::DS.to_string(),
                    "record": record,
                    "digest_algorithm": digest.as_ref().ok().map(|d| d.name()),
                    "digest_error": digest.as_ref().err().map(|e| e.to_string()),
                })
                .to_string(),
            }
        }
        Some(("keytag", sub)) => {
            let key_tag = keytag(&rdata_from(sub)?);
            match output {
                OutputFormat::Text => key_tag.to_string(),
                OutputFormat::Json => json!({ "key_tag": key_tag }).to_string(),
            }
        }
        Some(("digest-type", sub)) => {
            let code = *sub.get_one::<u8>("code").expect("code is required");
            let digest = digest_algorithm_name(code)?;
            match output {
                OutputFormat::Text => digest.name().to_string(),
                OutputFormat::Json => {
                    json!({ "digest_type": code, "name": digest.name() }).to_string()
                }
            }
        }
        _ => unreachable!("subcommand_required is set"),
    };
    Ok(rendered)
}

fn main() {
    let matches = cli().get_matches();

    let mut config = match InspectConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };
    if let Some(log_filter) = matches.get_one::<String>("log") {
        config.log_filter = log_filter.clone();
    }
    if let Some(output) = matches.get_one::<String>("output") {
        config.output = match output.parse() {
            Ok(output) => output,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                process::exit(1);
            }
        };
    }

    let filter = match config.env_filter() {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    debug!("Starting with {:?}", config);

    match run(&matches, config.output) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
