/*!
# Partitioning of Nodes

A [`Partition`] assigns nodes to disjoint **classes**. We use it to label
connected components and broadcast per-class counts (the component size
table) back to member nodes in O(1) per lookup.
*/

use super::*;

/// Internally, we store PartitionClasses as Options whereas we expose NumNodes as PartitionClasses to the user
pub type PartitionClass = NumNodes;

/// Represents a **partition** of the node set into disjoint classes.
///
/// Each node can belong to at most one class, or remain **unassigned**.
/// Classes are internally identified by integer IDs and stored along with
/// their sizes.
pub struct Partition {
    classes: Vec<Option<OptionalNode>>,
    class_sizes: Vec<NumNodes>,
    unassigned: NumNodes,
}

impl Partition {
    /// Creates a new partition over `nodes` nodes, all initially unassigned.
    pub fn new(nodes: NumNodes) -> Self {
        Self {
            classes: vec![None; nodes as usize],
            class_sizes: vec![],
            unassigned: nodes,
        }
    }

    /// Creates a new class and assigns the given nodes to it.
    /// Returns the new class identifier.
    ///
    /// # Panics
    /// If any provided node was already assigned to another class.
    pub fn add_class<I>(&mut self, nodes: I) -> PartitionClass
    where
        I: IntoIterator<Item = Node>,
    {
        let raw_class_id = self.class_sizes.len();
        let class_id = OptionalNode::new(raw_class_id as Node);
        self.class_sizes.push(0);

        let size = &mut self.class_sizes[raw_class_id];
        for u in nodes {
            assert_eq!(self.classes[u as usize], None); // check that node is unassigned
            self.classes[u as usize] = class_id;
            *size += 1;
        }

        self.unassigned -= *size;

        raw_class_id as PartitionClass
    }

    /// Returns the class identifier of a node, or `None` if the node is unassigned.
    pub fn class_of_node(&self, node: Node) -> Option<PartitionClass> {
        self.classes[node as usize].map(|class| class.get() as PartitionClass)
    }

    /// Returns the number of currently unassigned nodes.
    pub fn number_of_unassigned(&self) -> NumNodes {
        self.unassigned
    }

    /// Returns the number of nodes in the specified class.
    pub fn number_in_class(&self, class_id: PartitionClass) -> NumNodes {
        self.class_sizes[class_id as usize]
    }

    /// Returns the number of partition classes (0 if all nodes are unassigned)
    pub fn number_of_classes(&self) -> NumNodes {
        self.class_sizes.len() as NumNodes
    }
}

/// Convenience trait for converting a collection of classes into a [`Partition`].
///
/// Each inner collection is interpreted as one partition class.
pub trait IntoPartition {
    /// Consumes the collection and builds a [`Partition`] with `n` total nodes.
    fn into_partition(self, n: NumNodes) -> Partition;
}

impl<N, I> IntoPartition for I
where
    N: IntoIterator<Item = Node>,
    I: IntoIterator<Item = N>,
{
    fn into_partition(self, n: NumNodes) -> Partition {
        let mut partition = Partition::new(n);
        for class in self {
            partition.add_class(class);
        }
        partition
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn class_bookkeeping() {
        let mut part = Partition::new(5);
        assert_eq!(part.number_of_classes(), 0);
        assert_eq!(part.number_of_unassigned(), 5);

        let c0 = part.add_class([0, 1, 4]);
        let c1 = part.add_class([2]);

        assert_eq!(part.number_of_classes(), 2);
        assert_eq!(part.number_of_unassigned(), 1);
        assert_eq!(part.number_in_class(c0), 3);
        assert_eq!(part.number_in_class(c1), 1);

        assert_eq!(part.class_of_node(0), Some(c0));
        assert_eq!(part.class_of_node(4), Some(c0));
        assert_eq!(part.class_of_node(2), Some(c1));
        assert_eq!(part.class_of_node(3), None);
    }

    #[test]
    #[should_panic]
    fn double_assignment_is_rejected() {
        let mut part = Partition::new(3);
        part.add_class([0, 1]);
        part.add_class([1, 2]);
    }

    #[test]
    fn into_partition() {
        let part = vec![vec![0, 1], vec![2, 3]].into_partition(4);
        assert_eq!(part.number_of_classes(), 2);
        assert_eq!(part.class_of_node(0), part.class_of_node(1));
        assert_ne!(part.class_of_node(1), part.class_of_node(2));
    }
}
