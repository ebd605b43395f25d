//! Draw trees and linked lists in the terminal with box-drawing glyphs.
//!
//! Every node becomes a small block of text and parents are joined to their
//! children by connector lines, either top-down or left-right:
//!
//! ```
//! use boxtree::{Accessors, RenderConfig, format_tree};
//!
//! struct Node {
//!     value: &'static str,
//!     children: Vec<Node>,
//! }
//!
//! let tree = Node {
//!     value: "head",
//!     children: vec![
//!         Node { value: "a", children: vec![] },
//!         Node { value: "b", children: vec![] },
//!     ],
//! };
//! let access = Accessors::new(|n: &Node| n.children.iter().collect(), |n: &Node| n.value);
//! let text = format_tree(&tree, &access, &RenderConfig::default())?;
//! assert_eq!(text, " [head]\n ┌─┴─┐\n[a] [b]");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Nodes are only ever read through [`TreeAccess`] or [`ChainAccess`], so any
//! structure can be drawn. The input must be finite: cycles are not detected,
//! so a cyclic structure needs [`RenderConfig::max_depth`] to stop.

pub mod access;
pub mod adapter;
pub mod chain;
pub mod color;
pub mod config;
pub mod layout;
pub mod output;
pub mod style;
pub mod text;
pub mod tree;

pub use access::{Accessors, ChainAccess, ChainAccessors, TreeAccess};
pub use adapter::DataNode;
pub use chain::layout_chain;
pub use config::{Orientation, RenderConfig};
pub use layout::TextBox;
pub use output::{format_chain, format_tree, print_chain, print_tree};
pub use style::Style;
pub use tree::layout_tree;
