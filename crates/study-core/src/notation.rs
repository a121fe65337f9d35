//! Move-text serialization: tree to notation text and back.
//!
//! The emitted format is conventional annotated move text: numbered SAN
//! tokens, `{comments}`, NAG suffixes, and parenthesized variations placed
//! right after the node they branch from, before its mainline continuation.

use regex::Regex;

use crate::error::NotationError;
use crate::node::{MoveData, MoveNode, Nag, NodeId};
use crate::tree::GameTree;

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

/// Render the whole tree as move text. Empty tree yields an empty string.
pub fn write_notation(tree: &GameTree) -> String {
    let mut out = String::new();
    if let Some(root) = tree.root() {
        write_line(tree, root, &mut out);
    }
    out
}

fn write_line(tree: &GameTree, start: NodeId, out: &mut String) {
    let mut current = Some(start);
    while let Some(id) = current {
        let Some(node) = tree.node(id) else { break };
        if !out.is_empty() && !out.ends_with('(') {
            out.push(' ');
        }
        out.push_str(&tree.format_token(id));
        for &variation in &node.variations {
            out.push_str(" (");
            write_line(tree, variation, out);
            out.push(')');
        }
        current = node.mainline_child;
    }
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Open,
    Close,
    Comment(&'a str),
    Number { number: u32, white: bool },
    San { san: &'a str, nag: Option<Nag> },
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    // Comments, parens, game results, move numbers, SAN with optional
    // check/NAG suffix. Anything else (stray punctuation) is skipped.
    let token_re = Regex::new(
        r"\{[^}]*\}|\(|\)|1-0|0-1|1/2-1/2|\*|\d+\.(?:\.\.)?|(?:O-O-O|O-O|[KQRBN]?[a-h]?[1-8]?x?[a-h][1-8](?:=[QRBN])?)[+#]?[!?]*",
    )
    .unwrap();

    let mut tokens = Vec::new();
    for m in token_re.find_iter(text) {
        let tok = m.as_str();
        match tok {
            "(" => tokens.push(Token::Open),
            ")" => tokens.push(Token::Close),
            "1-0" | "0-1" | "1/2-1/2" | "*" => {}
            _ if tok.starts_with('{') => {
                tokens.push(Token::Comment(tok[1..tok.len() - 1].trim()));
            }
            _ if tok.ends_with('.') => {
                if let Ok(number) = tok.trim_end_matches('.').parse() {
                    tokens.push(Token::Number {
                        number,
                        white: !tok.ends_with("..."),
                    });
                }
            }
            _ => {
                let split = tok
                    .find(|c: char| c == '!' || c == '?')
                    .unwrap_or(tok.len());
                tokens.push(Token::San {
                    san: &tok[..split],
                    nag: Nag::from_symbol(&tok[split..]),
                });
            }
        }
    }
    tokens
}

/// Where a line attaches: the tree root, or a variation of some node.
#[derive(Debug, Clone, Copy)]
enum LineStart {
    Root,
    Variation(NodeId),
}

struct Parser<'a> {
    tokens: std::iter::Peekable<std::vec::IntoIter<Token<'a>>>,
}

/// Parse move text into a tree. Round-trips [`write_notation`] output;
/// an empty (or moves-free) input yields an empty tree.
pub fn parse_notation(text: &str) -> Result<GameTree, NotationError> {
    if text.matches('{').count() != text.matches('}').count() {
        return Err(NotationError::UnbalancedComment);
    }

    let mut tree = GameTree::new();
    let mut parser = Parser {
        tokens: tokenize(text).into_iter().peekable(),
    };
    parser.parse_line(&mut tree, LineStart::Root)?;
    if parser.tokens.next().is_some() {
        // Only a stray ')' can stop the root line early.
        return Err(NotationError::UnbalancedParenthesis);
    }
    Ok(tree)
}

impl<'a> Parser<'a> {
    fn parse_line(&mut self, tree: &mut GameTree, start: LineStart) -> Result<(), NotationError> {
        // Numbering is derived from the attach point; written numbers are
        // trusted only to seed the root (caller-supplied root numbering).
        let (mut number, mut white) = match start {
            LineStart::Root => (1, true),
            LineStart::Variation(anchor) => match tree.node(anchor) {
                Some(n) if n.is_white => (n.move_number, false),
                Some(n) => (n.move_number + 1, true),
                None => (1, true),
            },
        };
        let in_variation = matches!(start, LineStart::Variation(_));
        let mut prev: Option<NodeId> = None;

        loop {
            let Some(token) = self.tokens.peek().cloned() else {
                if in_variation {
                    return Err(NotationError::UnbalancedParenthesis);
                }
                return Ok(());
            };
            match token {
                Token::Close => {
                    if !in_variation {
                        return Ok(());
                    }
                    self.tokens.next();
                    if prev.is_none() {
                        return Err(NotationError::EmptyVariation);
                    }
                    return Ok(());
                }
                Token::Open => {
                    self.tokens.next();
                    let Some(anchor) = prev else {
                        return Err(NotationError::VariationWithoutAnchor);
                    };
                    self.parse_line(tree, LineStart::Variation(anchor))?;
                }
                Token::Comment(text) => {
                    self.tokens.next();
                    if let Some(id) = prev {
                        if let Some(node) = tree.node_mut(id) {
                            node.comment = Some(text.to_string());
                        }
                    }
                }
                Token::Number {
                    number: n,
                    white: w,
                } => {
                    self.tokens.next();
                    if prev.is_none() && !in_variation {
                        number = n;
                        white = w;
                    }
                }
                Token::San { san, nag } => {
                    self.tokens.next();
                    let mut data = MoveData::new(san);
                    data.nag = nag;
                    let id = tree.alloc(MoveNode::from_data(data, number, white));
                    match prev {
                        Some(p) => {
                            tree.link_mainline(p, id);
                        }
                        None => match start {
                            LineStart::Root => tree.set_root(id),
                            LineStart::Variation(anchor) => tree.link_variation(anchor, id),
                        },
                    }
                    prev = Some(id);
                    if !white {
                        number += 1;
                    }
                    white = !white;
                }
            }
        }
    }
}
