//! How the layout drivers read a caller's nodes.
//!
//! The drivers never own or mutate nodes; they only ask an accessor for a
//! node's value, its children (or next/previous link) and optional label.
//! Accessors may fail, and any error is handed straight back to the caller.

use std::fmt::Display;

use anyhow::Result;

/// Read access to a tree of `N`.
pub trait TreeAccess<N: ?Sized> {
    /// Text shown inside the node's box.
    fn value(&self, node: &N) -> Result<String>;

    /// Ordered children; an empty list marks a leaf.
    fn children<'n>(&self, node: &'n N) -> Result<Vec<&'n N>>;

    /// Text drawn on the edge leading into `node`.
    fn label(&self, _node: &N) -> Result<Option<String>> {
        Ok(None)
    }

    /// A line printed above the whole diagram.
    fn start_message(&self, _root: &N) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Read access to a linked chain of `N`.
pub trait ChainAccess<N: ?Sized> {
    fn value(&self, node: &N) -> Result<String>;

    fn next<'n>(&self, node: &'n N) -> Result<Option<&'n N>>;

    /// Back link, when the chain has one. Without it no link is drawn as
    /// pointing backwards.
    fn prev<'n>(&self, _node: &'n N) -> Result<Option<&'n N>> {
        Ok(None)
    }

    fn start_message(&self, _head: &N) -> Result<Option<String>> {
        Ok(None)
    }
}

type ValueFn<'a, N> = Box<dyn Fn(&N) -> String + 'a>;
type LinkFn<'a, N> = Box<dyn for<'n> Fn(&'n N) -> Option<&'n N> + 'a>;

/// A [`TreeAccess`] built from plain closures.
///
/// ```
/// use boxtree::Accessors;
///
/// struct Node {
///     value: u32,
///     children: Vec<Node>,
/// }
///
/// let access = Accessors::new(
///     |n: &Node| n.children.iter().collect(),
///     |n: &Node| n.value,
/// );
/// # let _ = access;
/// ```
pub struct Accessors<'a, N: ?Sized> {
    children: Box<dyn for<'n> Fn(&'n N) -> Vec<&'n N> + 'a>,
    value: ValueFn<'a, N>,
    label: Option<Box<dyn Fn(&N) -> Option<String> + 'a>>,
    start_message: Option<ValueFn<'a, N>>,
}

impl<'a, N: ?Sized> Accessors<'a, N> {
    pub fn new<C, V, D>(children: C, value: V) -> Self
    where
        C: for<'n> Fn(&'n N) -> Vec<&'n N> + 'a,
        V: Fn(&N) -> D + 'a,
        D: Display,
    {
        Self {
            children: Box::new(children),
            value: Box::new(move |node: &N| value(node).to_string()),
            label: None,
            start_message: None,
        }
    }

    pub fn with_label<L, T>(mut self, label: L) -> Self
    where
        L: Fn(&N) -> Option<T> + 'a,
        T: Display,
    {
        self.label = Some(Box::new(move |node: &N| label(node).map(|l| l.to_string())));
        self
    }

    /// A line above the diagram, worked out from the root.
    pub fn with_start_message<S, T>(mut self, message: S) -> Self
    where
        S: Fn(&N) -> T + 'a,
        T: Display,
    {
        self.start_message = Some(Box::new(move |node: &N| message(node).to_string()));
        self
    }
}

impl<N: ?Sized> TreeAccess<N> for Accessors<'_, N> {
    fn value(&self, node: &N) -> Result<String> {
        Ok((self.value)(node))
    }

    fn children<'n>(&self, node: &'n N) -> Result<Vec<&'n N>> {
        Ok((self.children)(node))
    }

    fn label(&self, node: &N) -> Result<Option<String>> {
        Ok(self.label.as_ref().and_then(|label| label(node)))
    }

    fn start_message(&self, root: &N) -> Result<Option<String>> {
        Ok(self.start_message.as_ref().map(|message| message(root)))
    }
}

/// A [`ChainAccess`] built from plain closures.
pub struct ChainAccessors<'a, N: ?Sized> {
    value: ValueFn<'a, N>,
    next: LinkFn<'a, N>,
    prev: Option<LinkFn<'a, N>>,
    start_message: Option<ValueFn<'a, N>>,
}

impl<'a, N: ?Sized> ChainAccessors<'a, N> {
    pub fn new<V, D, X>(value: V, next: X) -> Self
    where
        V: Fn(&N) -> D + 'a,
        D: Display,
        X: for<'n> Fn(&'n N) -> Option<&'n N> + 'a,
    {
        Self {
            value: Box::new(move |node: &N| value(node).to_string()),
            next: Box::new(next),
            prev: None,
            start_message: None,
        }
    }

    pub fn with_prev<P>(mut self, prev: P) -> Self
    where
        P: for<'n> Fn(&'n N) -> Option<&'n N> + 'a,
    {
        self.prev = Some(Box::new(prev));
        self
    }

    /// A line above the diagram, worked out from the head.
    pub fn with_start_message<S, T>(mut self, message: S) -> Self
    where
        S: Fn(&N) -> T + 'a,
        T: Display,
    {
        self.start_message = Some(Box::new(move |node: &N| message(node).to_string()));
        self
    }
}

impl<N: ?Sized> ChainAccess<N> for ChainAccessors<'_, N> {
    fn value(&self, node: &N) -> Result<String> {
        Ok((self.value)(node))
    }

    fn next<'n>(&self, node: &'n N) -> Result<Option<&'n N>> {
        Ok((self.next)(node))
    }

    fn prev<'n>(&self, node: &'n N) -> Result<Option<&'n N>> {
        Ok(self.prev.as_ref().and_then(|prev| prev(node)))
    }

    fn start_message(&self, head: &N) -> Result<Option<String>> {
        Ok(self.start_message.as_ref().map(|message| message(head)))
    }
}
