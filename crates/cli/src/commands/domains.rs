//! psyche domains command

use crate::output::Output;
use anyhow::anyhow;
use clap::{Args, Subcommand};
use console::style;
use psyche_usecase::psyche_domain::{Category, DataPoint, Domain, DomainRegistry};

#[derive(Debug, Args)]
pub struct DomainsCommand {
    #[command(subcommand)]
    pub command: DomainsSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum DomainsSubcommand {
    /// List catalog domains, grouped by category
    List {
        /// Only this category (e.g. big_five, moral_foundations)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one domain in full
    Show {
        /// Domain id
        id: String,
    },
}

impl DomainsCommand {
    pub fn run(&self, out: &Output) -> anyhow::Result<()> {
        let registry = DomainRegistry::standard();
        match &self.command {
            DomainsSubcommand::List { category } => {
                let domains = select(&registry, category.as_deref())?;
                if out.is_json() {
                    return out.json(&domains);
                }
                print_list(&domains);
            }
            DomainsSubcommand::Show { id } => {
                let domain = registry
                    .get(id)
                    .ok_or_else(|| anyhow!("Unknown domain '{}'", id))?;
                if out.is_json() {
                    return out.json(domain);
                }
                print_domain(domain);
            }
        }
        Ok(())
    }
}

fn select(registry: &DomainRegistry, category: Option<&str>) -> anyhow::Result<Vec<&'static Domain>> {
    match category {
        Some(key) => {
            let category = Category::parse(key).ok_or_else(|| {
                let known: Vec<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
                anyhow!("Unknown category '{}' (known: {})", key, known.join(", "))
            })?;
            Ok(registry.in_category(category))
        }
        None => Ok(registry.list().iter().collect()),
    }
}

fn print_list(domains: &[&Domain]) {
    let mut current = None;
    for domain in domains {
        if current != Some(domain.category) {
            current = Some(domain.category);
            println!("{}", style(domain.category.label()).bold().cyan());
        }
        println!("  {:<36} {}", domain.id, style(domain.name).dim());
    }
}

fn print_domain(domain: &Domain) {
    println!("{} ({})", style(domain.name).bold(), domain.id);
    println!("  Category: {}", domain.category.label());
    println!("  Source:   {}", domain.psychometric_source);
    println!();
    println!("  {}", domain.description);
    println!();
    println!("  {}", style("Markers").underlined());
    for marker in domain.markers {
        println!("    - {}", marker);
    }
    println!("  {}", style("Data points").underlined());
    for point in domain.data_points {
        match point {
            DataPoint::Indicator { text } => println!("    - {}", text),
            DataPoint::Contrast { high, low } => println!("    - high: {} / low: {}", high, low),
            DataPoint::Mindset { growth, fixed } => {
                println!("    - growth: {} / fixed: {}", growth, fixed)
            }
            DataPoint::Orientation {
                conservative,
                liberal,
            } => println!("    - conservative: {} / liberal: {}", conservative, liberal),
        }
    }
    if !domain.voice_indicators.is_empty() {
        println!("  {}", style("Voice").underlined());
        for voice in domain.voice_indicators {
            println!(
                "    - {} ({:+.2}): high {}, low {}",
                voice.feature, voice.weight, voice.high, voice.low
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_and_by_category() {
        let registry = DomainRegistry::standard();
        assert_eq!(select(&registry, None).unwrap().len(), 39);

        let big_five = select(&registry, Some("big_five")).unwrap();
        assert_eq!(big_five.len(), 5);
        assert!(big_five.iter().all(|d| d.category == Category::BigFive));
    }

    #[test]
    fn test_select_unknown_category() {
        let registry = DomainRegistry::standard();
        let err = select(&registry, Some("astrology")).unwrap_err();
        assert!(err.to_string().contains("known: big_five"));
    }
}
