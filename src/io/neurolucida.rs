use thiserror::Error;
use tracing::debug;

use super::MorphologyReader;
use crate::core::data::{ROOT_PARENT, RawData, Sample};
use crate::types::{FileFormat, PointType};

/// Errors encountered when reading Neurolucida ASC files
#[derive(Debug, Error)]
pub enum AscError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: unexpected `)`")]
    UnexpectedClose { line: usize },
    #[error("unclosed `(` opened on line {line}")]
    Unclosed { line: usize },
    #[error("line {line}: unterminated string")]
    UnterminatedString { line: usize },
    #[error("unclosed spine `<` opened on line {line}")]
    UnclosedSpine { line: usize },
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Open(usize),
    Close(usize),
    Bar,
    Atom(String),
    Str(String),
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    List(Vec<Node>),
    Atom(String),
    Str(String),
    Bar,
}

/// What a parenthesized list holds.
enum ListKind {
    Point { x: f64, y: f64, z: f64, d: f64 },
    Keyword,
    Group,
    Empty,
}

fn tokenize(text: &str) -> Result<Vec<Token>, AscError> {
    let mut tokens = Vec::new();
    let mut chars = text.chars();
    let mut line = 1;
    let mut atom = String::new();
    // spines are bracketed with `<` `>` and carry no samples we keep
    let mut spine_depth = 0usize;
    let mut spine_line = 0usize;

    let flush = |atom: &mut String, tokens: &mut Vec<Token>| {
        if !atom.is_empty() {
            tokens.push(Token::Atom(std::mem::take(atom)));
        }
    };

    while let Some(c) = chars.next() {
        if spine_depth > 0 {
            match c {
                '<' => spine_depth += 1,
                '>' => spine_depth -= 1,
                '\n' => line += 1,
                _ => {}
            }
            continue;
        }
        match c {
            ';' => {
                flush(&mut atom, &mut tokens);
                for next in chars.by_ref() {
                    if next == '\n' {
                        line += 1;
                        break;
                    }
                }
            }
            '(' => {
                flush(&mut atom, &mut tokens);
                tokens.push(Token::Open(line));
            }
            ')' => {
                flush(&mut atom, &mut tokens);
                tokens.push(Token::Close(line));
            }
            '|' => {
                flush(&mut atom, &mut tokens);
                tokens.push(Token::Bar);
            }
            '<' => {
                flush(&mut atom, &mut tokens);
                spine_depth = 1;
                spine_line = line;
            }
            '"' => {
                flush(&mut atom, &mut tokens);
                let start = line;
                let mut s = String::new();
                let mut closed = false;
                for next in chars.by_ref() {
                    match next {
                        '"' => {
                            closed = true;
                            break;
                        }
                        '\n' => {
                            line += 1;
                            s.push(next);
                        }
                        _ => s.push(next),
                    }
                }
                if !closed {
                    return Err(AscError::UnterminatedString { line: start });
                }
                tokens.push(Token::Str(s));
            }
            c if c.is_whitespace() || c == ',' => {
                flush(&mut atom, &mut tokens);
                if c == '\n' {
                    line += 1;
                }
            }
            _ => atom.push(c),
        }
    }
    if spine_depth > 0 {
        return Err(AscError::UnclosedSpine { line: spine_line });
    }
    flush(&mut atom, &mut tokens);
    Ok(tokens)
}

fn parse_tree(tokens: Vec<Token>) -> Result<Vec<Node>, AscError> {
    let mut stack: Vec<(usize, Vec<Node>)> = Vec::new();
    let mut top = Vec::new();

    for token in tokens {
        let node = match token {
            Token::Open(line) => {
                stack.push((line, Vec::new()));
                continue;
            }
            Token::Close(line) => match stack.pop() {
                Some((_, items)) => Node::List(items),
                None => return Err(AscError::UnexpectedClose { line }),
            },
            Token::Bar => Node::Bar,
            Token::Atom(a) => Node::Atom(a),
            Token::Str(s) => Node::Str(s),
        };
        match stack.last_mut() {
            Some((_, items)) => items.push(node),
            None => top.push(node),
        }
    }

    match stack.first() {
        Some((line, _)) => Err(AscError::Unclosed { line: *line }),
        None => Ok(top),
    }
}

fn number(node: &Node) -> Option<f64> {
    match node {
        Node::Atom(a) => a.parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

fn classify(items: &[Node]) -> ListKind {
    match items.first() {
        None => ListKind::Empty,
        Some(Node::List(_)) | Some(Node::Bar) => ListKind::Group,
        Some(Node::Str(_)) => ListKind::Keyword,
        Some(Node::Atom(_)) => {
            let coords: Vec<f64> = items.iter().take(4).map_while(number).collect();
            match coords.as_slice() {
                &[x, y, z, d] => ListKind::Point { x, y, z, d },
                _ => ListKind::Keyword,
            }
        }
    }
}

/// Type of a top-level block, from its `(CellBody)`, `(Axon)`,
/// `(Dendrite)` or `(Apical)` marker.
fn block_type(items: &[Node]) -> Option<PointType> {
    items.iter().find_map(|item| match item {
        Node::List(inner) => match inner.as_slice() {
            [Node::Atom(word)] => match word.to_ascii_lowercase().as_str() {
                "cellbody" => Some(PointType::Soma),
                "axon" => Some(PointType::Axon),
                "dendrite" => Some(PointType::BasalDendrite),
                "apical" => Some(PointType::ApicalDendrite),
                _ => None,
            },
            _ => None,
        },
        _ => None,
    })
}

#[derive(Default)]
struct Flattener {
    samples: Vec<Sample>,
}

impl Flattener {
    /// Emit the points of `items` in order, chaining each to the previous
    /// one; fork groups split on `|` and every branch hangs off the last
    /// point seen before the group.
    fn flatten(&mut self, items: &[Node], point_type: PointType, mut parent: i64) {
        for item in items {
            let Node::List(children) = item else {
                continue;
            };
            match classify(children) {
                ListKind::Point { x, y, z, d } => {
                    let id = self.samples.len() as i64;
                    self.samples.push(Sample {
                        id,
                        point_type: point_type.code(),
                        x,
                        y,
                        z,
                        radius: d / 2.0,
                        parent,
                    });
                    parent = id;
                }
                ListKind::Group => {
                    for branch in children.split(|n| matches!(n, Node::Bar)) {
                        self.flatten(branch, point_type, parent);
                    }
                }
                ListKind::Keyword | ListKind::Empty => {}
            }
        }
    }
}

/// Reader for Neurolucida ASC files.
///
/// Keeps soma contours and neurite trees; markers, spines, image and
/// section metadata are dropped. Identifiers are assigned from 0 in the
/// order samples appear.
pub struct NeurolucidaReader;

impl MorphologyReader for NeurolucidaReader {
    type Error = AscError;

    const FORMAT: FileFormat = FileFormat::Neurolucida;

    fn parse(text: &str) -> Result<RawData, AscError> {
        let blocks = parse_tree(tokenize(text)?)?;
        let mut flattener = Flattener::default();
        let mut skipped = 0usize;

        for block in &blocks {
            let Node::List(items) = block else {
                continue;
            };
            match block_type(items) {
                Some(point_type) => {
                    debug!("Reading {} block", point_type);
                    flattener.flatten(items, point_type, ROOT_PARENT);
                }
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!("Skipped {} non-morphology blocks", skipped);
        }
        Ok(RawData::from_samples(&flattener.samples, FileFormat::Neurolucida))
    }
}
