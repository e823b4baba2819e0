use std::fmt::Write;

use super::text::truncate_to_width;
use crate::core::{CommitGraph, GraphNode};

/// Glyph sets for the lane columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    #[default]
    Utf8,
    Ascii,
}

struct Glyphs {
    commit: char,
    merge: char,
    vertical: char,
    risk: char,
}

impl Charset {
    fn glyphs(self) -> Glyphs {
        match self {
            Charset::Utf8 => Glyphs {
                commit: '●',
                merge: '◆',
                vertical: '│',
                risk: '⚠',
            },
            Charset::Ascii => Glyphs {
                commit: '*',
                merge: 'M',
                vertical: '|',
                risk: '!',
            },
        }
    }
}

/// Plain-text commit graph, newest commit on top
#[derive(Debug, Clone)]
pub struct TextRenderer {
    /// Total line width in columns
    width: usize,
    charset: Charset,
    /// Emit 24-bit ANSI colors taken from the lane colors
    ansi: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(100)
    }
}

impl TextRenderer {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            charset: Charset::Utf8,
            ansi: false,
        }
    }

    pub fn charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    pub fn ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Render every node, optionally limited to the newest `limit`
    pub fn render(&self, graph: &CommitGraph, limit: Option<usize>) -> String {
        let live = live_lanes(graph);
        let lane_count = graph.branches.len();
        let text_width = self.width.saturating_sub(lane_count * 2);
        let mut out = String::new();

        let rows = graph.nodes.iter().rev().take(limit.unwrap_or(usize::MAX));
        for node in rows {
            let graph_cols = self.lane_cells(node, &live[node.rank], graph);
            let text = self.describe(node);
            let _ = writeln!(out, "{}{}", graph_cols, truncate_to_width(&text, text_width));
        }
        out
    }

    fn lane_cells(&self, node: &GraphNode, live: &[bool], graph: &CommitGraph) -> String {
        let glyphs = self.charset.glyphs();
        let mut cells = String::new();
        for (lane, &is_live) in live.iter().enumerate() {
            let ch = if lane == node.lane {
                if node.is_merge {
                    glyphs.merge
                } else {
                    glyphs.commit
                }
            } else if is_live {
                glyphs.vertical
            } else {
                ' '
            };

            match self.lane_color(graph, lane).filter(|_| ch != ' ') {
                Some((r, g, b)) => {
                    let _ = write!(cells, "\x1b[38;2;{r};{g};{b}m{ch}\x1b[0m ");
                }
                None => {
                    cells.push(ch);
                    cells.push(' ');
                }
            }
        }
        cells
    }

    fn describe(&self, node: &GraphNode) -> String {
        let mut text = String::new();
        if node.is_conflict_risk {
            text.push(self.charset.glyphs().risk);
            text.push(' ');
        }
        text.push_str(node.short_sha());
        for tag in &node.tags {
            let _ = write!(text, " [{tag}]");
        }
        text.push(' ');
        text.push_str(node.summary());
        text
    }

    fn lane_color(&self, graph: &CommitGraph, lane: usize) -> Option<(u8, u8, u8)> {
        if !self.ansi {
            return None;
        }
        let branch = graph.branches.iter().find(|b| b.lane == lane)?;
        parse_hex(&branch.color)
    }
}

/// For each rank, the lanes an edge passes through without a node.
/// An edge travels in its parent's lane until it reaches the child.
fn live_lanes(graph: &CommitGraph) -> Vec<Vec<bool>> {
    let lane_count = graph.branches.len();
    let mut live = vec![vec![false; lane_count]; graph.nodes.len()];
    for edge in graph.edges() {
        let (Some(child), Some(parent)) = (graph.node(&edge.from), graph.node(&edge.to)) else {
            continue;
        };
        for row in live.iter_mut().take(child.rank).skip(parent.rank + 1) {
            row[edge.to_lane] = true;
        }
    }
    live
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
