use super::*;
use crate::Label;
use crate::Node;
use crate::Seed;
use crate::View;
use colored::Colorize;
use dialoguer::Select;

/// Interactive player choosing targets on the terminal.
#[derive(Debug, Default)]
pub struct Human {
    label: Option<Label>,
}

impl Strategy for Human {
    fn name(&self) -> &str {
        "human"
    }
    fn initialize(&mut self, view: View<'_>, player: usize, label: Label, _: Seed) {
        self.label = Some(label);
        println!(
            "P{} plays {} on {}",
            player,
            label.to_string().bold(),
            view.graph()
        );
    }
    fn decide(&mut self, view: View<'_>, focal: Node) -> Option<Node> {
        let label = self.label.unwrap_or_else(|| view.label(focal));
        let neighbors = view.neighbors(focal);
        let choice = Self::selection(&view, label, focal, &neighbors);
        match choice {
            Some(0) | None => Some(focal),
            Some(i) => neighbors.get(i - 1).copied(),
        }
    }
}

impl Human {
    fn selection(view: &View<'_>, label: Label, focal: Node, neighbors: &[Node]) -> Option<usize> {
        let items = std::iter::once(String::from("pass"))
            .chain(neighbors.iter().map(|&n| {
                let tag = format!("{}:{}", view.label(n), n);
                if view.label(n) == label {
                    tag.dimmed().to_string()
                } else {
                    tag.bold().to_string()
                }
            }))
            .collect::<Vec<String>>();
        Select::new()
            .with_prompt(format!("{}:{} converts", label, focal))
            .report(false)
            .items(&items)
            .default(0)
            .interact()
            .map_err(|e| log::warn!("[human] selection failed: {}", e))
            .ok()
    }
}
