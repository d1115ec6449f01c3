//! psyche signals command

use crate::app::App;
use crate::output::Output;
use clap::Args;
use console::style;
use psyche_usecase::psyche_domain::SignalEvidence;

#[derive(Debug, Args)]
pub struct SignalsCommand {
    /// Domain id
    pub domain: String,
}

impl SignalsCommand {
    pub fn run(&self, app: &App, out: &Output) -> anyhow::Result<()> {
        let signals = app.profile.hybrid_signals_for_domain(&self.domain)?;
        if out.is_json() {
            return out.json(&signals);
        }
        if signals.is_empty() {
            println!("No signals for {}", self.domain);
            return Ok(());
        }

        for signal in &signals {
            println!(
                "{:<12} score {:.3}  confidence {:.2}  weight {:.2}  at {}",
                style(signal.signal_type()).bold(),
                signal.score(),
                signal.confidence(),
                signal.weight_used(),
                signal.produced_at().to_rfc3339()
            );
            match signal.evidence() {
                SignalEvidence::Dictionary { matched_words } if !matched_words.is_empty() => {
                    println!("  matched: {}", matched_words.join(", "));
                }
                SignalEvidence::Embedding {
                    prototype_similarity: Some(similarity),
                } => println!("  prototype similarity: {:.3}", similarity),
                SignalEvidence::Qualitative {
                    evidence_text: Some(text),
                } => println!("  evidence: {}", text),
                _ => {}
            }
        }
        Ok(())
    }
}
