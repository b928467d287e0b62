/// Stable handle to a node inside an [Arena].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub value: T,
    pub next: Option<NodeId>,
}

/// Node storage with slot reuse. Handles stay valid until released.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<NodeId>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }
}

impl<T> Arena<T> {
    pub fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    pub fn release(&mut self, id: NodeId) -> Node<T> {
        let node = self.slots[id.0]
            .take()
            .unwrap_or_else(|| panic!("Node {} was released twice", id.0));
        self.free.push(id);
        node
    }

    pub fn get(&self, id: NodeId) -> &Node<T> {
        self.slots[id.0]
            .as_ref()
            .unwrap_or_else(|| panic!("Dangling node handle {}", id.0))
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.slots[id.0]
            .as_mut()
            .unwrap_or_else(|| panic!("Dangling node handle {}", id.0))
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    /// Number of slots ever allocated, including released ones.
    #[cfg(test)]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}
