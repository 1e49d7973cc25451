//! Target → step → outcome graph of recorded scenarios

use redteam_core::domain::Scenario;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Target,
    Step,
    Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    /// Step or outcome result, absent on target nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

/// Directed graph of every executed attack path.
///
/// Targets attacked more than once share a node; steps and outcomes belong
/// to their scenario.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct AttackGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl AttackGraph {
    pub fn from_history(scenarios: &[Scenario]) -> Self {
        let mut graph = Self::default();
        let mut seen_targets = HashSet::new();

        for scenario in scenarios {
            let target_id = format!(
                "target:{}:{}",
                scenario.target.kind(),
                scenario.target.identifier()
            );
            if seen_targets.insert(target_id.clone()) {
                graph.nodes.push(GraphNode {
                    id: target_id.clone(),
                    label: scenario.target.display_name().to_string(),
                    kind: NodeKind::Target,
                    success: None,
                });
            }

            let mut previous = target_id;
            for result in &scenario.simulation_results {
                let id = format!("{}:step:{}", scenario.id, result.step);
                graph.nodes.push(GraphNode {
                    id: id.clone(),
                    label: result.description.clone(),
                    kind: NodeKind::Step,
                    success: Some(result.success),
                });
                graph.link(previous, id.clone());
                previous = id;
            }

            let outcome_id = format!("{}:outcome", scenario.id);
            let label = if scenario.overall_success {
                "Attack succeeded"
            } else {
                "Attack contained"
            };
            graph.nodes.push(GraphNode {
                id: outcome_id.clone(),
                label: label.to_string(),
                kind: NodeKind::Outcome,
                success: Some(scenario.overall_success),
            });
            graph.link(previous, outcome_id);
        }

        graph
    }

    pub fn nodes_of(&self, kind: NodeKind) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(move |node| node.kind == kind)
    }

    fn link(&mut self, source: String, target: String) {
        self.edges.push(GraphEdge { source, target });
    }
}
