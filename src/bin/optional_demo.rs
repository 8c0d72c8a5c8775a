use anyhow::{Context, Result};
use colored::*;
use optional::Optional;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Record {
    #[serde(rename = "A")]
    a: Optional<String>,
    #[serde(rename = "B")]
    b: Optional<i64>,
    #[serde(rename = "C")]
    c: Optional<f64>,
}

fn main() -> Result<()> {
    let record = Record {
        a: Optional::new("hello".to_string()),
        b: Optional::new(123),
        c: Optional::empty(),
    };

    println!("{}", "=== Presence ===".bold());

    // Printed
    if record.a.is_present() {
        let (value, ok) = record.a.get();
        println!("{} {}", value, ok);
    }

    // Printed
    if record.b.is_present() {
        let (value, ok) = record.b.get();
        println!("{} {}", value, ok);
    }

    // Not printed
    if record.c.is_present() {
        let (value, ok) = record.c.get();
        println!("{} {}", value, ok);
    } else {
        println!("{}", "C is absent, skipping".dimmed());
    }

    println!("{}", record.c.or_else(123.456));

    println!("\n{}", "=== JSON ===".bold());
    let encoded = serde_json::to_string(&record).context("Failed to encode record")?;
    println!("{}", encoded);

    let decoded: Record = serde_json::from_str(&encoded).context("Failed to decode record")?;
    if decoded.c.is_present() {
        println!("{}", "C came back present".red());
    } else {
        println!("{} {}", "C is still absent:".green(), decoded.c.or_else(123.456));
    }

    Ok(())
}
