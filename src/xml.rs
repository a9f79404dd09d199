//! Arena-backed XML tree.
//!
//! The whole document lives in one [`XmlTree`]: a flat node arena where every
//! cross-node reference is a [`NodeId`] index, so entity views over the tree
//! are plain handles instead of borrowed pointers. Elements keep their raw
//! start-tag content (qualified name plus attributes, byte for byte) and text
//! nodes keep their still-escaped character data; serializing an unmodified
//! tree therefore reproduces the input exactly.

use anyhow::{Context, Result};
use quick_xml::escape::{escape, unescape};
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

/// Index of a node in the arena.
pub type NodeId = usize;

/// A single node of the document.
#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    /// Character data, still escaped as it appeared in the source.
    Text(String),
    /// CDATA content, without the `<![CDATA[` / `]]>` markers.
    CData(String),
    /// Comment content, without the `<!--` / `-->` markers.
    Comment(String),
    /// XML declaration content between `<?` and `?>`.
    Decl(String),
    /// Processing-instruction content between `<?` and `?>`.
    ProcessingInstruction(String),
    /// DOCTYPE content, without the `<!DOCTYPE` / `>` markers.
    DocType(String),
}

/// An element node.
#[derive(Debug, Clone)]
pub struct Element {
    /// Raw start-tag content: qualified name followed by attributes, verbatim.
    raw: String,
    name_len: usize,
    self_closing: bool,
    children: Vec<NodeId>,
}

impl Element {
    /// Qualified tag name, e.g. `gnc:book`.
    pub fn name(&self) -> &str {
        &self.raw[..self.name_len]
    }
}

#[derive(Debug, Default)]
pub struct XmlTree {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl XmlTree {
    /// Parse a complete XML document.
    pub fn parse(input: &str) -> Result<XmlTree> {
        let mut reader = Reader::from_str(input);
        let mut tree = XmlTree::default();
        let mut stack: Vec<NodeId> = Vec::new();

        loop {
            match reader.read_event().context("malformed XML document")? {
                Event::Start(ref e) => {
                    let id = tree.push(Node::Element(element_from(e, false)?), &stack);
                    stack.push(id);
                }
                Event::Empty(ref e) => {
                    tree.push(Node::Element(element_from(e, true)?), &stack);
                }
                Event::End(_) => {
                    stack.pop();
                }
                Event::Text(ref t) => {
                    tree.push(Node::Text(raw_str(t)?), &stack);
                }
                Event::CData(ref t) => {
                    tree.push(Node::CData(raw_str(t)?), &stack);
                }
                Event::Comment(ref t) => {
                    tree.push(Node::Comment(raw_str(t)?), &stack);
                }
                Event::Decl(ref d) => {
                    tree.push(Node::Decl(raw_str(d)?), &stack);
                }
                Event::PI(ref p) => {
                    tree.push(Node::ProcessingInstruction(raw_str(p)?), &stack);
                }
                Event::DocType(ref t) => {
                    tree.push(Node::DocType(raw_str(t)?), &stack);
                }
                Event::Eof => break,
            }
        }

        Ok(tree)
    }

    /// Append a node to the arena, wiring it under the current parent (top of
    /// `stack`) or as a root when the stack is empty. Returns its [`NodeId`].
    fn push(&mut self, node: Node, stack: &[NodeId]) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        match stack.last() {
            Some(&parent) => {
                if let Node::Element(el) = &mut self.nodes[parent] {
                    el.children.push(id);
                }
            }
            None => self.roots.push(id),
        }
        id
    }

    /// Serialize the document back to bytes, raw content verbatim.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::new(Vec::new());
        for &id in &self.roots {
            self.write_node(&mut writer, id)?;
        }
        Ok(writer.into_inner())
    }

    fn write_node(&self, writer: &mut Writer<Vec<u8>>, id: NodeId) -> Result<()> {
        match &self.nodes[id] {
            Node::Element(el) => {
                let start = BytesStart::from_content(el.raw.as_str(), el.name_len);
                if el.self_closing {
                    writer.write_event(Event::Empty(start))?;
                } else {
                    writer.write_event(Event::Start(start))?;
                    for &child in &el.children {
                        self.write_node(writer, child)?;
                    }
                    writer.write_event(Event::End(BytesEnd::new(el.name())))?;
                }
            }
            Node::Text(raw) => {
                writer.write_event(Event::Text(BytesText::from_escaped(raw.as_str())))?;
            }
            Node::CData(raw) => {
                writer.write_event(Event::CData(BytesCData::new(raw.as_str())))?;
            }
            Node::Comment(raw) => {
                writer.write_event(Event::Comment(BytesText::from_escaped(raw.as_str())))?;
            }
            Node::Decl(raw) => {
                let start = BytesStart::from_content(raw.as_str(), 3);
                writer.write_event(Event::Decl(BytesDecl::from_start(start)))?;
            }
            Node::ProcessingInstruction(raw) => {
                writer.write_event(Event::PI(BytesPI::new(raw.as_str())))?;
            }
            Node::DocType(raw) => {
                writer.write_event(Event::DocType(BytesText::from_escaped(raw.as_str())))?;
            }
        }
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes[id] {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// The document root element.
    pub fn root_element(&self) -> Option<NodeId> {
        self.roots
            .iter()
            .copied()
            .find(|&id| matches!(self.nodes[id], Node::Element(_)))
    }

    fn child_ids(&self, id: NodeId) -> &[NodeId] {
        match &self.nodes[id] {
            Node::Element(el) => &el.children,
            _ => &[],
        }
    }

    /// First direct child element with the given qualified tag name.
    pub fn find_child(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        self.child_ids(id)
            .iter()
            .copied()
            .find(|&child| self.element(child).map_or(false, |el| el.name() == tag))
    }

    /// All direct child elements with the given qualified tag name, in
    /// document order.
    pub fn find_children(&self, id: NodeId, tag: &str) -> Vec<NodeId> {
        self.child_ids(id)
            .iter()
            .copied()
            .filter(|&child| self.element(child).map_or(false, |el| el.name() == tag))
            .collect()
    }

    /// Walk a chain of direct child tags, e.g. `["sx:end", "gdate"]`.
    pub fn find_path(&self, id: NodeId, path: &[&str]) -> Option<NodeId> {
        path.iter().try_fold(id, |cur, &tag| self.find_child(cur, tag))
    }

    /// Unescaped character data directly under an element: text and CDATA
    /// children concatenated.
    pub fn text(&self, id: NodeId) -> String {
        let mut out = String::new();
        for &child in self.child_ids(id) {
            match &self.nodes[child] {
                Node::Text(raw) => match unescape(raw) {
                    Ok(text) => out.push_str(&text),
                    Err(_) => out.push_str(raw),
                },
                Node::CData(raw) => out.push_str(raw),
                _ => {}
            }
        }
        out
    }

    /// Replace the character data under an element, escaping as needed.
    ///
    /// Detached child nodes stay in the arena; node ids are never reused.
    pub fn set_text(&mut self, id: NodeId, value: &str) {
        let text_id = self.nodes.len();
        self.nodes.push(Node::Text(escape(value).into_owned()));
        if let Node::Element(el) = &mut self.nodes[id] {
            el.children.clear();
            el.children.push(text_id);
            el.self_closing = false;
        }
    }
}

fn element_from(e: &BytesStart<'_>, self_closing: bool) -> Result<Element> {
    let raw = raw_str(e)?;
    let name_len = e.name().as_ref().len();
    Ok(Element {
        raw,
        name_len,
        self_closing,
        children: Vec::new(),
    })
}

fn raw_str(bytes: &[u8]) -> Result<String> {
    let s = std::str::from_utf8(bytes).context("document content is not valid UTF-8")?;
    Ok(s.to_string())
}
