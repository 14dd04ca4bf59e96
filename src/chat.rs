//! Data-driven chat widget script.
//!
//! The "conversation" is a fixed directed script: each node carries the
//! bot's text, the options offered to the visitor, and an optional page
//! section to scroll to. The next message is revealed only by selecting
//! an option on the current one; there are no timer-driven transitions.

/// One selectable reply, pointing at the node it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatOption {
    pub label: &'static str,
    pub next: &'static str,
}

/// One bot message in the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatNode {
    pub id: &'static str,
    pub text: &'static str,
    pub options: &'static [ChatOption],
    /// Section id the client should scroll to when this node is shown.
    pub scroll_target: Option<&'static str>,
}

/// A complete script: a node table plus designated start and fallback nodes.
#[derive(Debug, Clone, Copy)]
pub struct ChatScript {
    nodes: &'static [ChatNode],
    start: &'static str,
    fallback: &'static str,
}

impl ChatScript {
    /// A script must have at least one node; `start()` and `fallback()`
    /// rely on it. For const scripts the assertion fires at compile time.
    ///
    /// # Panics
    ///
    /// Panics when `nodes` is empty.
    pub const fn new(
        nodes: &'static [ChatNode],
        start: &'static str,
        fallback: &'static str,
    ) -> Self {
        assert!(!nodes.is_empty(), "chat script must have at least one node");
        Self {
            nodes,
            start,
            fallback,
        }
    }

    pub fn node(&self, id: &str) -> Option<&'static ChatNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn start(&self) -> &'static ChatNode {
        self.node(self.start).unwrap_or(&self.nodes[0])
    }

    pub fn fallback(&self) -> &'static ChatNode {
        self.node(self.fallback).unwrap_or(&self.nodes[0])
    }

    /// Follow the option the visitor selected on `current`.
    ///
    /// An unknown node or out-of-range option lands on the fallback node,
    /// mirroring the generic "feel free to explore" reply.
    pub fn advance(&self, current: &str, option: usize) -> &'static ChatNode {
        let Some(node) = self.node(current) else {
            return self.fallback();
        };
        let Some(option) = node.options.get(option) else {
            return self.fallback();
        };
        self.node(option.next).unwrap_or_else(|| self.fallback())
    }

    /// Verify every option transition, the start node, and the fallback
    /// node resolve to nodes in the table.
    pub fn check(&self) -> Result<(), String> {
        if self.node(self.start).is_none() {
            return Err(format!("start node '{}' does not exist", self.start));
        }
        if self.node(self.fallback).is_none() {
            return Err(format!("fallback node '{}' does not exist", self.fallback));
        }
        for node in self.nodes {
            for option in node.options {
                if self.node(option.next).is_none() {
                    return Err(format!(
                        "node '{}' option '{}' points at missing node '{}'",
                        node.id, option.label, option.next
                    ));
                }
            }
        }
        Ok(())
    }
}
