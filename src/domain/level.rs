//! Tree node of the survey hierarchy.
//!
//! Every level owns its children and a fully resolved [`Dataset`]. Interior
//! levels without explicit data aggregate the records of their whole subtree,
//! so a level's value is the record-weighted mean of every answer below it.

use serde::Serialize;
use termtree::Tree;
use tracing::debug;

use crate::domain::dataset::Dataset;
use crate::domain::layout::RingLayout;
use crate::domain::stats;

/// Where a level's dataset comes from, resolved once at construction.
#[derive(Debug, Clone)]
pub enum LevelSource {
    /// Raw records supplied for this level; children are not merged in.
    Explicit(Dataset),
    /// Concatenation of the children's datasets, in child order.
    Derived,
}

/// One level (tree node) of the survey hierarchy. Immutable once built.
#[derive(Debug, Clone)]
pub struct PieLevel {
    name: String,
    color: String,
    layout: RingLayout,
    children: Vec<PieLevel>,
    dataset: Dataset,
    value: f64,
}

/// Child projection: display name and value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelValue {
    pub name: String,
    pub value: f64,
}

/// Recursive `{name, value, children}` projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunburstNode {
    pub name: String,
    pub value: f64,
    pub children: Vec<SunburstNode>,
}

impl PieLevel {
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        layout: RingLayout,
        children: Vec<PieLevel>,
        source: LevelSource,
    ) -> Self {
        let dataset = match source {
            LevelSource::Explicit(dataset) => dataset,
            LevelSource::Derived => Dataset::concat(children.iter().map(|c| &c.dataset)),
        };
        let value = if dataset.is_empty() {
            0.0
        } else {
            stats::compute_average(&dataset.answers(None, None))
        };
        let name = name.into();
        debug!(name = %name, records = dataset.len(), value, "level built");

        Self {
            name,
            color: color.into(),
            layout,
            children,
            dataset,
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn layout(&self) -> &RingLayout {
        &self.layout
    }

    pub fn children(&self) -> &[PieLevel] {
        &self.children
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Grand mean over every answer in the subtree; `0` without data.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Mean restricted to one group, or the overall mean.
    pub fn average(&self, group: Option<&str>) -> f64 {
        stats::compute_average(&self.dataset.answers(None, group))
    }

    /// Children as `{name, value}` pairs.
    pub fn child_values(&self) -> Vec<LevelValue> {
        self.children
            .iter()
            .map(|c| LevelValue {
                name: c.name.clone(),
                value: c.value,
            })
            .collect()
    }

    /// Children as `{name, value}` pairs with every value replaced by `constant`.
    pub fn child_values_constant(&self, constant: f64) -> Vec<LevelValue> {
        self.children
            .iter()
            .map(|c| LevelValue {
                name: c.name.clone(),
                value: constant,
            })
            .collect()
    }

    pub fn child_colors(&self) -> Vec<String> {
        self.children.iter().map(|c| c.color.clone()).collect()
    }

    pub fn child_names(&self) -> Vec<String> {
        self.children.iter().map(|c| c.name.clone()).collect()
    }

    /// Projects the children, descending `depth` further levels.
    ///
    /// With `depth == 0` every child has an empty child list. Depths beyond
    /// the tree's height simply stop at the leaves.
    pub fn sunburst(&self, depth: usize) -> Vec<SunburstNode> {
        self.children
            .iter()
            .map(|child| SunburstNode {
                name: child.name.clone(),
                value: child.value,
                children: if depth == 0 {
                    Vec::new()
                } else {
                    child.sunburst(depth - 1)
                },
            })
            .collect()
    }

    /// Descends by child names; an empty path yields `self`.
    pub fn find(&self, path: &[&str]) -> Option<&PieLevel> {
        match path.split_first() {
            None => Some(self),
            Some((head, rest)) => self
                .children
                .iter()
                .find(|c| c.name == *head)
                .and_then(|c| c.find(rest)),
        }
    }

    /// Number of levels including this one.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(PieLevel::depth)
            .max()
            .unwrap_or(0)
    }

    /// Pre-order traversal.
    pub fn iter(&self) -> LevelIterator<'_> {
        LevelIterator { stack: vec![self] }
    }

    pub fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self.children.iter().map(|c| c.to_tree_string()).collect();
        Tree::new(format!("{} ({:.2})", self.name, self.value)).with_leaves(leaves)
    }
}

pub struct LevelIterator<'a> {
    stack: Vec<&'a PieLevel>,
}

impl<'a> Iterator for LevelIterator<'a> {
    type Item = &'a PieLevel;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // reverse so children come out left-to-right
        self.stack.extend(current.children.iter().rev());
        Some(current)
    }
}
