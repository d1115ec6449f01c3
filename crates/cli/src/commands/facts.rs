//! psyche facts / topics commands

use crate::app::App;
use crate::output::{ok, Output};
use anyhow::{anyhow, bail};
use clap::Args;
use console::style;
use psyche_usecase::psyche_domain::{EntityRef, Fact};
use std::collections::BTreeMap;

#[derive(Debug, Args)]
pub struct FactsCommand {
    /// Domain id
    pub domain: String,

    /// User the facts are about
    #[arg(short, long, default_value = "1", value_parser = parse_user_id)]
    pub user: String,

    /// Append the facts to the fact log
    #[arg(long)]
    pub publish: bool,
}

impl FactsCommand {
    pub fn run(&self, app: &App, out: &Output) -> anyhow::Result<()> {
        let context = app.profile.context();
        if !context.registry.contains(&self.domain) {
            bail!("Unknown domain '{}'", self.domain);
        }

        let snapshot = context
            .snapshots
            .latest(&self.domain, context.clock.now())?
            .ok_or_else(|| anyhow!("No snapshot for '{}' yet", self.domain))?;

        let facts = if self.publish {
            app.publisher.publish_snapshot(&self.user, &snapshot)?
        } else {
            app.publisher.projector().project_facts(&self.user, &snapshot)?
        };

        if out.is_json() {
            return out.json(&facts);
        }
        print_facts(&facts);
        if self.publish {
            ok(format!(
                "{} fact(s) appended to {}",
                facts.len(),
                app.triples.path().display()
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct TopicsCommand {
    /// Mention counts as name=count (a bare name counts once)
    #[arg(required = true)]
    pub mentions: Vec<String>,

    /// User the facts are about
    #[arg(short, long, default_value = "1", value_parser = parse_user_id)]
    pub user: String,
}

impl TopicsCommand {
    pub fn run(&self, app: &App, out: &Output) -> anyhow::Result<()> {
        let mentions = parse_mentions(&self.mentions)?;
        let facts = app.publisher.projector().project_topics(&self.user, &mentions)?;
        let published = app.publisher.publish_topics(&self.user, &mentions)?;

        if out.is_json() {
            return out.json(&facts);
        }
        print_facts(&facts);
        ok(format!("{} fact(s) published", published));
        Ok(())
    }
}

/// Accept only user ids that form a readable `user:<id>` reference
pub(crate) fn parse_user_id(raw: &str) -> Result<String, String> {
    EntityRef::try_user(raw)
        .map(|user| user.id().to_string())
        .map_err(|e| e.to_string())
}

/// Parse `name=count` pairs, summing repeated names
fn parse_mentions(raw: &[String]) -> anyhow::Result<BTreeMap<String, u32>> {
    let mut mentions = BTreeMap::new();
    for item in raw {
        let (name, count) = match item.rsplit_once('=') {
            Some((name, count)) => {
                let count: u32 = count
                    .trim()
                    .parse()
                    .map_err(|_| anyhow!("Invalid mention count in '{}'", item))?;
                (name.trim(), count)
            }
            None => (item.trim(), 1),
        };
        if name.is_empty() {
            bail!("Empty topic name in '{}'", item);
        }
        *mentions.entry(name.to_string()).or_insert(0) += count;
    }
    Ok(mentions)
}

fn print_facts(facts: &[Fact]) {
    for fact in facts {
        println!(
            "{} {} {}",
            fact.subject,
            style(fact.predicate).cyan(),
            fact.object
        );
    }
}
