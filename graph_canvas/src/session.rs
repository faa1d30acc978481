use std::path::Path;

use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};

use crate::event::CanvasEvent;
use crate::interaction::Interaction;
use crate::pointer::{PointerInput, PointerRouter};

/// Recorded pointer input to replay against an [`Interaction`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub inputs: Vec<PointerInput>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSummary {
    pub inputs: usize,
    pub nodes: usize,
    pub edges: usize,
    pub events: Vec<CanvasEvent>,
}

impl Session {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let session: Session = common::serde::deserialize_from_file(path)?;
        session.validate()?;

        Ok(session)
    }

    pub fn validate(&self) -> Result<()> {
        let mut last_time = f64::NEG_INFINITY;
        for (idx, input) in self.inputs.iter().enumerate() {
            if !input.pos().is_finite() || !input.time().is_finite() {
                anyhow::bail!("input {idx} has a non-finite position or time");
            }
            if input.time() < last_time {
                anyhow::bail!("input {idx} goes back in time");
            }
            last_time = input.time();
        }

        Ok(())
    }

    /// Feeds every input through `router` in order and collects the notifications.
    pub fn replay(&self, router: &mut PointerRouter, interaction: &mut Interaction) -> SessionSummary {
        let mut events = Vec::new();
        for input in self.inputs.iter() {
            router.dispatch(*input, interaction);
            for event in interaction.drain_events() {
                info!("{} {:?}", event.name(), event);
                events.push(event);
            }
        }

        let summary = SessionSummary {
            inputs: self.inputs.len(),
            nodes: interaction.graph().node_count(),
            edges: interaction.graph().edge_count(),
            events,
        };
        info!(
            "Replayed {} inputs: {} nodes, {} edges",
            summary.inputs, summary.nodes, summary.edges
        );

        summary
    }
}
