//! Arena syntax tree and read-only tree queries.
//!
//! Nodes are stored in a flat `Vec` and refer to each other by [`NodeId`]. Each node keeps a
//! non-owning `parent` index for upward walks and an ordered child list for downward walks.
//! The root is always [`NodeId::ROOT`], a `Program` node spanning the whole document.
//!
//! Every query here is total: a root-only tree (empty document) yields the root or an empty
//! result, never a panic.

use crate::Span;

/// Node kinds produced by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    Program,
    Sexpr,
    Variants,
    TypedExpr,
    Variable,
    Integer,
    String,
    Builtin,
    Nullary,
    Opalias,
    TypeName,
    TypeSexpr,
    TypeRange,
    LineComment,
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    Colon,
    Slash,
    Semicolon,
    Error,
}

impl SyntaxKind {
    /// Stable external name, shared with styling tables.
    pub fn name(self) -> &'static str {
        use SyntaxKind::*;
        match self {
            Program => "Program",
            Sexpr => "Sexpr",
            Variants => "Variants",
            TypedExpr => "Typed_expr",
            Variable => "Variable",
            Integer => "Integer",
            String => "String",
            Builtin => "Builtin",
            Nullary => "Nullary",
            Opalias => "Opalias",
            TypeName => "Type_name",
            TypeSexpr => "Type_sexpr",
            TypeRange => "Type_range",
            LineComment => "LineComment",
            OpenParen => "(",
            CloseParen => ")",
            OpenBrace => "{",
            CloseBrace => "}",
            Colon => ":",
            Slash => "/",
            Semicolon => ";",
            Error => "⚠",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    pub kind: SyntaxKind,
    pub span: Span,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// Which node wins when `offset` sits exactly on a node boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bias {
    /// Enter nodes with `start < offset <= end` (a node ending at `offset` is preferred).
    Before,
    /// Enter only nodes with `start < offset < end`.
    Strict,
    /// Enter nodes with `start <= offset < end` (a node starting at `offset` is preferred).
    After,
}

impl Bias {
    fn enters(self, span: Span, offset: u32) -> bool {
        match self {
            Bias::Before => span.start < offset && offset <= span.end,
            Bias::Strict => span.start < offset && offset < span.end,
            Bias::After => span.start <= offset && offset < span.end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
}

impl SyntaxTree {
    /// A tree holding only the root `Program` node.
    pub fn empty(len: u32) -> Self {
        TreeBuilder::new(len).finish()
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }

    pub fn kind(&self, id: NodeId) -> SyntaxKind {
        self.node(id).kind
    }

    pub fn span(&self, id: NodeId) -> Span {
        self.node(id).span
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Source text covered by `id`. Empty if the span does not fit `source`.
    pub fn text<'s>(&self, source: &'s str, id: NodeId) -> &'s str {
        source.get(self.span(id).as_range()).unwrap_or("")
    }

    /// `id` followed by its ancestors up to the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |&cur| self.parent(cur))
    }

    /// All nodes in document (pre-)order, root first.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![NodeId::ROOT],
        }
    }

    /// Innermost node containing `offset`, using `bias` at node boundaries.
    ///
    /// Returns the root when no child qualifies.
    pub fn resolve_innermost(&self, offset: u32, bias: Bias) -> NodeId {
        let mut cur = NodeId::ROOT;
        'descend: loop {
            for &child in self.children(cur) {
                let span = self.span(child);
                if span.start > offset {
                    break;
                }
                if bias.enters(span, offset) {
                    cur = child;
                    continue 'descend;
                }
            }
            return cur;
        }
    }

    /// Texts of every `kind` node in document order, skipping the node starting at
    /// `exclude_start`. Duplicates are kept.
    pub fn collect_by_kind<'s>(
        &self,
        source: &'s str,
        kind: SyntaxKind,
        exclude_start: Option<u32>,
    ) -> Vec<&'s str> {
        self.preorder()
            .filter(|&id| self.kind(id) == kind)
            .filter(|&id| Some(self.span(id).start) != exclude_start)
            .map(|id| self.text(source, id))
            .collect()
    }

    /// Whether `id` or any of its ancestors has `kind`.
    pub fn is_ancestor_of_kind(&self, id: NodeId, kind: SyntaxKind) -> bool {
        let mut cur = Some(id);
        while let Some(node) = cur {
            if self.kind(node) == kind {
                return true;
            }
            cur = self.parent(node);
        }
        false
    }

    /// Indented `Kind@start..end` dump, leaves followed by their text.
    pub fn dump(&self, source: &str) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        let mut stack = vec![(NodeId::ROOT, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = self.node(id);
            let _ = write!(
                &mut out,
                "{:indent$}{}@{}..{}",
                "",
                node.kind.name(),
                node.span.start,
                node.span.end,
                indent = depth * 2
            );
            if node.children.is_empty() {
                let _ = write!(&mut out, " {:?}", self.text(source, id));
            }
            out.push('\n');
            for &child in node.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        out
    }
}

pub struct Preorder<'a> {
    tree: &'a SyntaxTree,
    stack: Vec<NodeId>,
}

impl Iterator for Preorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}

/// Builds a [`SyntaxTree`] top-down.
///
/// Nodes must be started and finished in document order; `wrap_last_child` is the only way
/// to re-parent an already built node.
pub struct TreeBuilder {
    nodes: Vec<NodeData>,
    open: Vec<NodeId>,
}

impl TreeBuilder {
    pub fn new(len: u32) -> Self {
        Self {
            nodes: vec![NodeData {
                kind: SyntaxKind::Program,
                span: Span::new(0, len),
                parent: None,
                children: Vec::new(),
            }],
            open: vec![NodeId::ROOT],
        }
    }

    fn current(&self) -> NodeId {
        self.open.last().copied().unwrap_or(NodeId::ROOT)
    }

    fn push(&mut self, kind: SyntaxKind, span: Span) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let parent = self.current();
        self.nodes.push(NodeData {
            kind,
            span,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    pub fn leaf(&mut self, kind: SyntaxKind, span: Span) -> NodeId {
        self.push(kind, span)
    }

    pub fn start_node(&mut self, kind: SyntaxKind, start: u32) -> NodeId {
        let id = self.push(kind, Span::empty(start));
        self.open.push(id);
        id
    }

    /// Closes the innermost open node at `end`, widened to cover its children.
    /// The root is never closed here.
    pub fn finish_node(&mut self, end: u32) {
        if self.open.len() <= 1 {
            return;
        }
        let Some(id) = self.open.pop() else {
            return;
        };
        let children_end = self.nodes[id.index()]
            .children
            .iter()
            .map(|child| self.nodes[child.index()].span.end)
            .max()
            .unwrap_or(0);
        let span = &mut self.nodes[id.index()].span;
        span.end = end.max(children_end).max(span.start);
    }

    /// Opens a `kind` node that adopts the last child of the current node.
    ///
    /// Returns `None` (and opens nothing) if the current node has no children.
    pub fn wrap_last_child(&mut self, kind: SyntaxKind) -> Option<NodeId> {
        let parent = self.current();
        let last = *self.nodes[parent.index()].children.last()?;
        let start = self.nodes[last.index()].span.start;

        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            kind,
            span: Span::empty(start),
            parent: Some(parent),
            children: vec![last],
        });
        self.nodes[last.index()].parent = Some(id);
        if let Some(slot) = self.nodes[parent.index()].children.last_mut() {
            *slot = id;
        }
        self.open.push(id);
        Some(id)
    }

    pub fn finish(mut self) -> SyntaxTree {
        while self.open.len() > 1 {
            let end = self.nodes[NodeId::ROOT.index()].span.end;
            self.finish_node(end);
        }
        SyntaxTree { nodes: self.nodes }
    }
}
