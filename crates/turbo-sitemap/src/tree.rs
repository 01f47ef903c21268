//! Route tree reconstruction from a flat parent-id table.
//!
//! Nodes are collected into an arena first and linked by id in a second
//! pass, so the table may list children before their parents.

use std::collections::HashMap;

use crate::error::StructuralError;
use crate::route::{LeafPolicy, RouteDescriptor};

/// Index of a node inside a [`RouteTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A route with its own decomposed path and its children.
#[derive(Debug)]
pub struct RouteNode<'a> {
    descriptor: &'a RouteDescriptor,
    segments: Vec<&'a str>,
    children: Vec<NodeId>,
}

impl<'a> RouteNode<'a> {
    /// Route id.
    pub fn id(&self) -> &'a str {
        &self.descriptor.id
    }

    /// Own path segments, empty segments removed.
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Children in table iteration order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// True if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The descriptor's leaf policy.
    pub fn leaf_policy(&self) -> LeafPolicy<'a> {
        self.descriptor.leaf_policy()
    }
}

/// A rooted route tree borrowing from its route table.
#[derive(Debug)]
pub struct RouteTree<'a> {
    nodes: Vec<RouteNode<'a>>,
    root: NodeId,
}

impl<'a> RouteTree<'a> {
    /// Build a tree from `(id, descriptor)` pairs.
    ///
    /// `None` descriptors are skipped. Fails if there is no root, more than
    /// one root, or a parent id that does not resolve.
    pub fn build<I>(routes: I) -> Result<Self, StructuralError>
    where
        I: IntoIterator<Item = (&'a String, &'a Option<RouteDescriptor>)>,
    {
        let mut nodes = Vec::new();
        let mut index = HashMap::new();

        for (key, descriptor) in routes {
            let Some(descriptor) = descriptor else {
                continue;
            };
            index.insert(key.as_str(), NodeId(nodes.len()));
            nodes.push(RouteNode {
                descriptor,
                segments: split_path(descriptor.raw_path()),
                children: Vec::new(),
            });
        }

        let mut root: Option<NodeId> = None;
        for i in 0..nodes.len() {
            let descriptor = nodes[i].descriptor;
            match &descriptor.parent_id {
                Some(parent_id) => {
                    let parent = *index.get(parent_id.as_str()).ok_or_else(|| {
                        StructuralError::MissingParent {
                            route: descriptor.id.clone(),
                            parent: parent_id.clone(),
                        }
                    })?;
                    nodes[parent.0].children.push(NodeId(i));
                }
                None => {
                    if let Some(existing) = root {
                        return Err(StructuralError::MultipleRoots {
                            first: nodes[existing.0].descriptor.id.clone(),
                            second: descriptor.id.clone(),
                        });
                    }
                    root = Some(NodeId(i));
                }
            }
        }

        let root = root.ok_or(StructuralError::MissingRoot)?;
        tracing::debug!(nodes = nodes.len(), root = %nodes[root.0].id(), "route tree built");

        Ok(Self { nodes, root })
    }

    /// The root node id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> &RouteNode<'a> {
        &self.nodes[id.0]
    }

    /// Children of a node.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &RouteNode<'a>> {
        self.nodes[id.0].children.iter().map(|child| &self.nodes[child.0])
    }

    /// Number of nodes (non-null table entries).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a successfully built tree.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Split a raw route path on `/`, dropping empty segments.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
