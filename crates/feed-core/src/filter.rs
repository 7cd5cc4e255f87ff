//! Boolean/comparison filter trees for subscription criteria.
//!
//! A filter is a recursive expression tree. Logical nodes combine child
//! filters; comparison nodes pair a field reference with a literal; leaf
//! nodes carry the actual strings or integers. Each variant owns exactly
//! the payload its kind requires, so a node that is both a leaf and a
//! branch (or neither) cannot be constructed.
//!
//! Trees are built once, owned by the subscription frame that holds them,
//! and encoded on demand by `feed-protocol`.

/// One node of a subscription filter tree.
///
/// Depth and fan-out are unbounded in memory; the wire format caps any
/// single node at 255 literals / 255 children (enforced at encode time).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterNode {
    /// Logical negation of a single child.
    Not(Box<FilterNode>),

    /// All children must hold.
    And(Vec<FilterNode>),

    /// At least one child must hold.
    Or(Vec<FilterNode>),

    /// An odd number of children must hold.
    Xor(Vec<FilterNode>),

    /// Equality: field reference on the left, literal on the right.
    ///
    /// When the right side is a multi-value leaf, the server treats the
    /// values as alternatives (an implicit OR). This only applies to `Eq`.
    Eq(Box<FilterNode>, Box<FilterNode>),

    /// Strict less-than: field reference on the left, literal on the right.
    Less(Box<FilterNode>, Box<FilterNode>),

    /// Strict greater-than: field reference on the left, literal on the right.
    More(Box<FilterNode>, Box<FilterNode>),

    /// Reference to an auction field by name (e.g. `"item_id"`).
    Field(String),

    /// One or more ASCII string literals.
    Strings(Vec<String>),

    /// One or more 32-bit integer literals.
    ///
    /// Carried as typed integers here; rendered to decimal ASCII only
    /// when encoded.
    I32(Vec<i32>),
}

// -----------------------------------------------------------------------------
// Convenience constructors (keeps caller-side trees readable)
// -----------------------------------------------------------------------------

impl FilterNode {
    /// Reference an auction field by name.
    pub fn field(name: impl Into<String>) -> Self {
        FilterNode::Field(name.into())
    }

    /// String literal leaf with a single value.
    pub fn string(value: impl Into<String>) -> Self {
        FilterNode::Strings(vec![value.into()])
    }

    /// String literal leaf with a value set.
    pub fn strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterNode::Strings(values.into_iter().map(Into::into).collect())
    }

    /// Integer literal leaf with a single value.
    pub fn i32(value: i32) -> Self {
        FilterNode::I32(vec![value])
    }

    /// Integer literal leaf with a value set.
    pub fn i32s(values: impl IntoIterator<Item = i32>) -> Self {
        FilterNode::I32(values.into_iter().collect())
    }

    pub fn not(child: FilterNode) -> Self {
        FilterNode::Not(Box::new(child))
    }

    pub fn and(children: Vec<FilterNode>) -> Self {
        FilterNode::And(children)
    }

    pub fn or(children: Vec<FilterNode>) -> Self {
        FilterNode::Or(children)
    }

    pub fn xor(children: Vec<FilterNode>) -> Self {
        FilterNode::Xor(children)
    }

    pub fn eq(field: FilterNode, value: FilterNode) -> Self {
        FilterNode::Eq(Box::new(field), Box::new(value))
    }

    pub fn less(field: FilterNode, value: FilterNode) -> Self {
        FilterNode::Less(Box::new(field), Box::new(value))
    }

    pub fn more(field: FilterNode, value: FilterNode) -> Self {
        FilterNode::More(Box::new(field), Box::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_build_expected_shapes() {
        let node = FilterNode::eq(
            FilterNode::field("item_id"),
            FilterNode::strings(["147", "148"]),
        );

        match node {
            FilterNode::Eq(lhs, rhs) => {
                assert_eq!(*lhs, FilterNode::Field("item_id".to_string()));
                assert_eq!(
                    *rhs,
                    FilterNode::Strings(vec!["147".to_string(), "148".to_string()])
                );
            }
            other => panic!("unexpected node: {:?}", other),
        }
    }
}
