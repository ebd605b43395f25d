use std::cell::Cell;

use anyhow::Result;
use boxtree::{
    Accessors, ChainAccess, DataNode, Orientation, RenderConfig, Style,
    format_chain, format_tree, layout_tree,
};
use serde_json::json;

struct Tree {
    value: String,
    label: Option<String>,
    children: Vec<Tree>,
}

impl Tree {
    fn new(value: impl ToString) -> Self {
        Self {
            value: value.to_string(),
            label: None,
            children: Vec::new(),
        }
    }

    fn with(mut self, child: Tree) -> Self {
        self.children.push(child);
        self
    }

    fn labelled(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }
}

fn access<'a>() -> Accessors<'a, Tree> {
    Accessors::new(
        |t: &Tree| t.children.iter().collect(),
        |t: &Tree| t.value.clone(),
    )
    .with_label(|t: &Tree| t.label.clone())
}

fn example_a() -> Tree {
    Tree::new("head")
        .with(Tree::new(1).with(Tree::new("A")))
        .with(Tree::new(2).with(Tree::new("B")))
}

fn render(tree: &Tree, config: &RenderConfig) -> String {
    format_tree(tree, &access(), config).unwrap()
}

#[test]
fn leaf_renders_bracketed() {
    assert_eq!(render(&Tree::new("X"), &RenderConfig::default()), "[X]");
}

#[test]
fn two_level_tree_vertical() {
    let expected = "
 [head]
 ┌─┴─┐
[1] [2]
 │   │
[A] [B]";
    assert_eq!(render(&example_a(), &RenderConfig::default()), &expected[1..]);
}

#[test]
fn two_level_tree_horizontal() {
    let config = RenderConfig::default().with_orientation(Orientation::Horizontal);
    let expected = "
      ┌[1]─[A]
[head]┤
      └[2]─[B]";
    assert_eq!(render(&example_a(), &config), &expected[1..]);
}

#[test]
fn three_children_meet_on_a_cross() {
    let tree = Tree::new("r")
        .with(Tree::new("a"))
        .with(Tree::new("b"))
        .with(Tree::new("c"));
    let expected = "
    [r]
 ┌───┼───┐
[a] [b] [c]";
    assert_eq!(render(&tree, &RenderConfig::default()), &expected[1..]);
}

#[test]
fn multi_line_value_has_sides() {
    assert_eq!(
        render(&Tree::new("a\nbb"), &RenderConfig::default()),
        "│a │\n│bb│"
    );
}

#[test]
fn trimmed_value() {
    let config = RenderConfig::default().with_trim(5, "...");
    assert_eq!(render(&Tree::new("abcdefgh"), &config), "[abcde...]");
}

#[test]
fn trimming_never_splits_wide_glyphs() {
    let config = RenderConfig::default().with_trim(5, "...");
    assert_eq!(render(&Tree::new("abcd你xyz"), &config), "[abcd你...]");
}

#[test]
fn bordered_tree() {
    let tree = Tree::new("r").with(Tree::new("a")).with(Tree::new("b"));
    let config = RenderConfig::default().with_border(true);
    let expected = "
  ┌─┐
  │r│
  └─┘
 ┌─┴─┐
┌─┐ ┌─┐
│a│ │b│
└─┘ └─┘";
    assert_eq!(render(&tree, &config), &expected[1..]);
}

#[test]
fn max_depth_one_is_only_the_root() {
    let config = RenderConfig::default().with_max_depth(1);
    for width in 0..4 {
        let mut tree = Tree::new("root");
        for i in 0..width {
            tree = tree.with(Tree::new(i));
        }
        assert_eq!(render(&tree, &config), "[root]");
    }
}

#[test]
fn labels_sit_on_edges() {
    let tree = Tree::new("r")
        .with(Tree::new("a").labelled("x"))
        .with(Tree::new("b"));
    let expected = "
  [r]
 ┌─┴─┐
 x  [b]
 |
[a]";
    assert_eq!(render(&tree, &RenderConfig::default()), &expected[1..]);
}

#[test]
fn label_style_pads_the_label() {
    let tree = Tree::new("r").with(Tree::new("a").labelled("x"));
    let config = RenderConfig::default()
        .with_label_style(Style::new("\x1b[44m", "\x1b[0m"))
        .with_orientation(Orientation::Horizontal);
    assert_eq!(render(&tree, &config), "[r]─\x1b[44m x \x1b[0m─[a]");
}

#[test]
fn background_wraps_every_node() {
    let tree = Tree::new("r").with(Tree::new("a"));
    let config = RenderConfig::default().with_background(Style::new("\x1b[100m", "\x1b[0m"));
    let expected = "
\x1b[100m [r] \x1b[0m
  │
\x1b[100m [a] \x1b[0m";
    assert_eq!(render(&tree, &config), &expected[1..]);
}

#[test]
fn content_style_leaves_connectors_plain() {
    let tree = Tree::new("r").with(Tree::new("a")).with(Tree::new("b"));
    let config = RenderConfig::default().with_content_style(Style::new("<", ">"));
    let expected = "
  <[r]>
 ┌─┴─┐
<[a] [b]>";
    assert_eq!(render(&tree, &config), &expected[1..]);
}

#[test]
fn content_style_keeps_background_padding() {
    let tree = Tree::new("r").with(Tree::new("a"));
    let config = RenderConfig::default()
        .with_background(Style::new("\x1b[100m", "\x1b[0m"))
        .with_content_style(Style::new("\x1b[31m", "\x1b[0m"));
    let expected = "
\x1b[100m \x1b[31m[r]\x1b[0m\x1b[100m \x1b[0m
  │
\x1b[100m \x1b[31m[a]\x1b[0m\x1b[100m \x1b[0m";
    assert_eq!(render(&tree, &config), &expected[1..]);
}

#[test]
fn wide_glyph_sibling_keeps_connectors_aligned() {
    let tree = Tree::new("r")
        .with(Tree::new("你好"))
        .with(Tree::new("a"))
        .with(Tree::new("b"));
    let expected = "
      [r]
  ┌────┴┬───┐
[你好] [a] [b]";
    assert_eq!(render(&tree, &RenderConfig::default()), &expected[1..]);
}

#[test]
fn even_height_node_anchors_on_upper_middle_row() {
    let tree = Tree::new("r").with(Tree::new("a\nb")).with(Tree::new("c"));
    let config = RenderConfig::default().with_orientation(Orientation::Horizontal);
    let expected = "
   ┌│a│
[r]┤│b│
   │
   └[c]";
    assert_eq!(render(&tree, &config), &expected[1..]);
}

#[test]
fn malformed_escapes_do_not_shift_siblings() {
    let tree = Tree::new("r")
        .with(Tree::new("a\x1b b"))
        .with(Tree::new("\x1b[3é"));
    let text = render(&tree, &RenderConfig::default());
    let expected = "
  [r]
 ┌─┴──┐
[a\x1b b] [\x1b[3é]";
    assert_eq!(text, &expected[1..]);
    let widths: Vec<usize> = text.lines().map(boxtree::text::display_width).collect();
    assert_eq!(widths, [5, 7, 8]);
}

#[test]
fn start_message_comes_first() {
    let access = Accessors::new(
        |t: &Tree| t.children.iter().collect(),
        |t: &Tree| t.value.clone(),
    )
    .with_start_message(|root: &Tree| format!("tree at {}:", root.value));
    let text = format_tree(&Tree::new("X"), &access, &RenderConfig::default()).unwrap();
    assert_eq!(text, "tree at X:\n[X]");
}

#[test]
fn rendering_is_deterministic() {
    let tree = example_a();
    let config = RenderConfig::default().with_border(true);
    assert_eq!(render(&tree, &config), render(&tree, &config));
}

#[test]
fn joined_width_is_sum_plus_gaps() {
    let tree = Tree::new("r")
        .with(Tree::new("a"))
        .with(Tree::new("bbbb"))
        .with(Tree::new("cc"));
    let text_box = layout_tree(&tree, &access(), &RenderConfig::default()).unwrap();
    assert_eq!(text_box.width(), 3 + 6 + 4 + 2);
}

#[test]
fn json_adapter_keeps_key_order() {
    let data: serde_json::Value = serde_json::from_str(r#"{"zeta": 1, "alpha": 2}"#).unwrap();
    let tree = DataNode::from_json("JSON", &data);
    let text = format_tree(&tree, &DataNode::accessors(), &RenderConfig::default()).unwrap();
    let expected = "
    [JSON]
  ┌───┴───┐
[zeta] [alpha]
  │       │
 [1]     [2]";
    assert_eq!(text, &expected[1..]);
}

#[test]
fn json_adapter_renders_keys_and_values() {
    let tree = DataNode::from_json("JSON", &json!({"a": 1}));
    let text = format_tree(&tree, &DataNode::accessors(), &RenderConfig::default()).unwrap();
    let expected = "
[JSON]
  │
 [a]
  │
 [1]";
    assert_eq!(text, &expected[1..]);
}

struct Link<'a> {
    value: &'static str,
    next: Cell<Option<&'a Link<'a>>>,
    prev: Cell<Option<&'a Link<'a>>>,
}

impl Link<'_> {
    fn new(value: &'static str) -> Self {
        Self {
            value,
            next: Cell::new(None),
            prev: Cell::new(None),
        }
    }
}

struct Doubly;

impl<'a> ChainAccess<Link<'a>> for Doubly {
    fn value(&self, node: &Link<'a>) -> Result<String> {
        Ok(node.value.to_string())
    }

    fn next<'n>(&self, node: &'n Link<'a>) -> Result<Option<&'n Link<'a>>> {
        Ok(node.next.get())
    }

    fn prev<'n>(&self, node: &'n Link<'a>) -> Result<Option<&'n Link<'a>>> {
        Ok(node.prev.get())
    }
}

/// Follows `next` only; back links are never consulted.
struct Forward;

impl<'a> ChainAccess<Link<'a>> for Forward {
    fn value(&self, node: &Link<'a>) -> Result<String> {
        Ok(node.value.to_string())
    }

    fn next<'n>(&self, node: &'n Link<'a>) -> Result<Option<&'n Link<'a>>> {
        Ok(node.next.get())
    }
}

#[test]
fn forward_chain_uses_single_arrows() {
    let (a, b, c) = (Link::new("A"), Link::new("B"), Link::new("C"));
    a.next.set(Some(&b));
    b.next.set(Some(&c));
    let access = Forward;

    let config = RenderConfig::default().with_orientation(Orientation::Horizontal);
    assert_eq!(format_chain(&a, &access, &config).unwrap(), "[A]→[B]→[C]");

    let text = format_chain(&a, &access, &RenderConfig::default()).unwrap();
    assert_eq!(text, "[A]\n ↓\n[B]\n ↓\n[C]");
    assert!(!text.contains('↕'));
}

#[test]
fn doubly_linked_chain_uses_double_arrows() {
    let (a, b, c) = (Link::new("A"), Link::new("B"), Link::new("C"));
    a.next.set(Some(&b));
    b.next.set(Some(&c));
    b.prev.set(Some(&a));
    c.prev.set(Some(&b));
    let config = RenderConfig::default().with_orientation(Orientation::Horizontal);
    assert_eq!(format_chain(&a, &Doubly, &config).unwrap(), "[A]↔[B]↔[C]");
}

#[test]
fn broken_back_link_is_single_arrow() {
    let (a, b, c) = (Link::new("A"), Link::new("B"), Link::new("C"));
    a.next.set(Some(&b));
    b.next.set(Some(&c));
    b.prev.set(Some(&a));
    c.prev.set(Some(&a));
    let config = RenderConfig::default().with_orientation(Orientation::Horizontal);
    assert_eq!(format_chain(&a, &Doubly, &config).unwrap(), "[A]↔[B]→[C]");
}
