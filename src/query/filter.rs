use std::collections::BTreeSet;

use serde_json::Value;

/// One node of a query's boolean filter tree
#[derive(Debug, Clone)]
pub enum FilterNode<'a> {
    /// Comparison on a single member: `{"member": "a.x", "operator": ..., "values": [...]}`
    Member {
        member: &'a str,
        values: Option<&'a Value>,
    },
    And(Vec<FilterNode<'a>>),
    Or(Vec<FilterNode<'a>>),
    /// A node carrying `member` together with `and` and/or `or`; every part contributes
    Mixed(Vec<FilterNode<'a>>),
    /// A node with none of the recognised keys
    Empty,
}

impl<'a> FilterNode<'a> {
    /// Call `f` for every member comparison in the tree, depth first
    pub fn visit_members<F>(&self, f: &mut F)
    where
        F: FnMut(&'a str, Option<&'a Value>),
    {
        match self {
            FilterNode::Member { member, values } => f(*member, *values),
            FilterNode::And(children) | FilterNode::Or(children) | FilterNode::Mixed(children) => {
                for child in children {
                    child.visit_members(f);
                }
            }
            FilterNode::Empty => {}
        }
    }

    /// Add every member referenced by the tree to `members`
    pub fn collect_members(&self, members: &mut BTreeSet<String>) {
        self.visit_members(&mut |member, _| {
            members.insert(member.to_string());
        });
    }
}
