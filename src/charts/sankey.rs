//! Server-side Sankey diagram of how apartments moved between search stages.

use crate::charts::palette::viridis;
use crate::domain::apartment::{format_number, ApartmentRecord};
use maud::{html, Markup};
use std::collections::HashMap;

pub const NODE_PAD: f64 = 15.0;
pub const NODE_THICKNESS: f64 = 20.0;
const MARGIN: f64 = 10.0;
const LABEL_GAP: f64 = 6.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SankeyLink {
    pub source: usize,
    pub target: usize,
    pub value: f64,
    /// Shown on hover.
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sankey {
    pub nodes: Vec<String>,
    pub links: Vec<SankeyLink>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeBox {
    pub column: usize,
    pub x: f64,
    pub y: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkBand {
    pub path: String,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SankeyLayout {
    pub nodes: Vec<NodeBox>,
    /// Parallel to `Sankey::links`; `None` for self-loops, which aren't drawn.
    pub links: Vec<Option<LinkBand>>,
    pub columns: usize,
}

fn intern(nodes: &mut Vec<String>, index: &mut HashMap<String, usize>, label: &str) -> usize {
    if let Some(&i) = index.get(label) {
        return i;
    }
    nodes.push(label.to_string());
    index.insert(label.to_string(), nodes.len() - 1);
    nodes.len() - 1
}

impl Sankey {
    /// Nodes are every Source and Target label in first-seen order. Each record
    /// with both labels and a positive value becomes one link.
    pub fn from_records(records: &[ApartmentRecord]) -> Self {
        let mut nodes = Vec::new();
        let mut index = HashMap::new();
        let mut links = Vec::new();

        for record in records {
            let label = |s: &Option<String>| {
                s.as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            };

            let source = label(&record.source).map(|s| intern(&mut nodes, &mut index, &s));
            let target = label(&record.target).map(|t| intern(&mut nodes, &mut index, &t));

            if let (Some(source), Some(target), Some(value)) = (source, target, record.value) {
                if value.is_finite() && value > 0.0 {
                    links.push(SankeyLink {
                        source,
                        target,
                        value,
                        address: record.address.clone(),
                    });
                }
            }
        }

        Self { nodes, links }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node colors spread over viridis by node index.
    pub fn node_colors(&self) -> Vec<String> {
        let n = self.nodes.len() as f64;
        (0..self.nodes.len())
            .map(|i| viridis(i as f64 / n))
            .collect()
    }

    /// Flow through each node: the larger of its inflow and outflow.
    pub fn node_values(&self) -> Vec<f64> {
        let mut inflow = vec![0.0; self.nodes.len()];
        let mut outflow = vec![0.0; self.nodes.len()];
        for link in self.links.iter().filter(|l| l.source != l.target) {
            outflow[link.source] += link.value;
            inflow[link.target] += link.value;
        }
        inflow
            .into_iter()
            .zip(outflow)
            .map(|(i, o)| f64::max(i, o))
            .collect()
    }

    /// Column of each node: the longest chain of links leading into it.
    /// Cycles are cut off at `nodes.len() - 1` steps. Empty columns are
    /// squeezed out.
    pub fn columns(&self) -> Vec<usize> {
        let n = self.nodes.len();
        let mut depth = vec![0usize; n];
        if n == 0 {
            return depth;
        }

        for _ in 0..n {
            let mut changed = false;
            for link in self.links.iter().filter(|l| l.source != l.target) {
                let candidate = (depth[link.source] + 1).min(n - 1);
                if candidate > depth[link.target] {
                    depth[link.target] = candidate;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        let mut distinct = depth.clone();
        distinct.sort_unstable();
        distinct.dedup();
        depth
            .iter()
            .map(|d| distinct.binary_search(d).unwrap_or_else(|i| i))
            .collect()
    }

    pub fn layout(&self, width: f64, height: f64) -> SankeyLayout {
        let n = self.nodes.len();
        let columns = self.columns();
        let values = self.node_values();
        let column_count = columns.iter().max().map_or(0, |m| m + 1);
        let usable_height = (height - 2.0 * MARGIN).max(0.0);

        // One vertical scale for the whole diagram, set by the fullest column.
        let mut ky = f64::INFINITY;
        for c in 0..column_count {
            let members = columns.iter().filter(|&&col| col == c).count();
            let total: f64 = (0..n).filter(|&i| columns[i] == c).map(|i| values[i]).sum();
            let free = usable_height - NODE_PAD * members.saturating_sub(1) as f64;
            if total > 0.0 {
                ky = ky.min(free.max(0.0) / total);
            }
        }
        if !ky.is_finite() {
            ky = 0.0;
        }

        let x_step = if column_count > 1 {
            (width - 2.0 * MARGIN - NODE_THICKNESS) / (column_count - 1) as f64
        } else {
            0.0
        };

        let heights: Vec<f64> = values.iter().map(|v| (v * ky).max(1.0)).collect();

        // Center each column vertically.
        let mut next_y: Vec<f64> = (0..column_count)
            .map(|c| {
                let members: Vec<usize> = (0..n).filter(|&i| columns[i] == c).collect();
                let stacked: f64 = members.iter().map(|&i| heights[i]).sum::<f64>()
                    + NODE_PAD * members.len().saturating_sub(1) as f64;
                MARGIN + ((usable_height - stacked) / 2.0).max(0.0)
            })
            .collect();

        let nodes: Vec<NodeBox> = (0..n)
            .map(|i| {
                let column = columns[i];
                let node = NodeBox {
                    column,
                    x: MARGIN + column as f64 * x_step,
                    y: next_y[column],
                    height: heights[i],
                };
                next_y[column] += heights[i] + NODE_PAD;
                node
            })
            .collect();

        let mut out_offset = vec![0.0; n];
        let mut in_offset = vec![0.0; n];
        let links = self
            .links
            .iter()
            .map(|link| {
                if link.source == link.target {
                    return None;
                }
                let width = link.value * ky;
                let s = &nodes[link.source];
                let t = &nodes[link.target];

                let x0 = s.x + NODE_THICKNESS;
                let x1 = t.x;
                let y0 = s.y + out_offset[link.source] + width / 2.0;
                let y1 = t.y + in_offset[link.target] + width / 2.0;
                out_offset[link.source] += width;
                in_offset[link.target] += width;

                let xm = (x0 + x1) / 2.0;
                Some(LinkBand {
                    path: format!(
                        "M{x0:.2},{y0:.2} C{xm:.2},{y0:.2} {xm:.2},{y1:.2} {x1:.2},{y1:.2}"
                    ),
                    width,
                })
            })
            .collect();

        SankeyLayout {
            nodes,
            links,
            columns: column_count,
        }
    }

    pub fn render(&self, width: f64, height: f64) -> Markup {
        if self.is_empty() {
            return html! {
                p class="empty" { "No stage transitions recorded yet." }
            };
        }

        let layout = self.layout(width, height);
        let colors = self.node_colors();
        let values = self.node_values();
        let last_column = layout.columns.saturating_sub(1);

        html! {
            svg
                class="chart sankey"
                xmlns="http://www.w3.org/2000/svg"
                viewBox=(format!("0 0 {width} {height}"))
                preserveAspectRatio="xMidYMid meet"
                font-size="10"
            {
                g class="links" fill="none" stroke-opacity="0.5" {
                    @for (link, band) in self.links.iter().zip(&layout.links) {
                        @if let Some(band) = band {
                            path
                                d=(band.path)
                                stroke=(colors[link.source])
                                stroke-width=(format!("{:.2}", band.width.max(1.0)))
                            {
                                title { "Address: " (link.address) }
                            }
                        }
                    }
                }
                g class="nodes" {
                    @for (i, node) in layout.nodes.iter().enumerate() {
                        rect
                            x=(format!("{:.2}", node.x))
                            y=(format!("{:.2}", node.y))
                            width=(NODE_THICKNESS)
                            height=(format!("{:.2}", node.height))
                            fill=(colors[i])
                            stroke="black"
                            stroke-width="0.5"
                        {
                            title { (self.nodes[i]) ": " (format_number(values[i])) }
                        }
                        @if node.column == last_column && last_column > 0 {
                            text
                                x=(format!("{:.2}", node.x - LABEL_GAP))
                                y=(format!("{:.2}", node.y + node.height / 2.0))
                                text-anchor="end"
                                dominant-baseline="middle"
                            { (self.nodes[i]) }
                        } @else {
                            text
                                x=(format!("{:.2}", node.x + NODE_THICKNESS + LABEL_GAP))
                                y=(format!("{:.2}", node.y + node.height / 2.0))
                                dominant-baseline="middle"
                            { (self.nodes[i]) }
                        }
                    }
                }
            }
        }
    }
}
