//! Line-oriented script driver for graph conformance tests.
//!
//! Each input line is one command; its canonical output is written to the
//! output stream. Blank lines and lines starting with `#` are echoed.
//!
//! | Command | Output |
//! |---------|--------|
//! | `CreateGraph g` | `created graph g` |
//! | `AddNode g n` | `added node n to g` |
//! | `AddEdge g a b w` | `added edge w from a to b in g` |
//! | `ListNodes g` | `g contains: a b c` (sorted) |
//! | `ListChildren g a` | `the children of a in g are: b(1.000) c(2.000)` (by weight, then name) |
//! | `FindPath g a b` | `path from a to b:`, one line per edge, `total cost: w` |
//!
//! Weights print with three decimals. A command that fails prints
//! `Exception while running command: ...` and the error, and changes nothing.

use log::debug;
use pathgraph::{path_cost, GraphError};
use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use thiserror::Error;

type ScriptGraph = pathgraph::Graph<String, f64>;

/// Why a single script command failed.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// Wrong number of arguments for the command
    #[error("Bad arguments to {command}: {arguments:?}")]
    BadArguments {
        /// Command name
        command: String,
        /// Arguments as given
        arguments: Vec<String>,
    },

    /// The command names a graph that was never created
    #[error("Unknown graph: {0}")]
    UnknownGraph(String),

    /// An edge weight is not a non-negative finite number
    #[error("Invalid edge weight: {0}")]
    InvalidWeight(String),

    /// The graph rejected the operation
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Format a weight the way every script output line does.
pub fn format_weight(weight: f64) -> String {
    format!("{weight:.3}")
}

/// Runs graph commands read from `input` and writes results to `output`.
pub struct ScriptDriver<R, W> {
    input: R,
    output: W,
    graphs: HashMap<String, ScriptGraph>,
}

impl<R: BufRead, W: Write> ScriptDriver<R, W> {
    /// Create a driver with no graphs.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            graphs: HashMap::new(),
        }
    }

    /// Execute every line of the input.
    ///
    /// Command failures are reported in the output and do not stop the run.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(&mut self) -> io::Result<()> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let text = line.trim_end_matches(['\n', '\r']);

            if text.trim().is_empty() || text.starts_with('#') {
                writeln!(self.output, "{text}")?;
                continue;
            }

            let mut tokens = text.split_whitespace();
            let Some(command) = tokens.next() else {
                continue;
            };
            let arguments: Vec<&str> = tokens.collect();
            debug!("Script command {command} {arguments:?}");

            match self.execute(command, &arguments) {
                Ok(lines) => {
                    for out in lines {
                        writeln!(self.output, "{out}")?;
                    }
                }
                Err(err) => {
                    let mut formatted = command.to_string();
                    for argument in &arguments {
                        formatted.push(' ');
                        formatted.push_str(argument);
                    }
                    writeln!(self.output, "Exception while running command: {formatted}")?;
                    writeln!(self.output, "{err}")?;
                }
            }
            self.output.flush()?;
        }
        Ok(())
    }

    /// Consume the driver and hand back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn execute(&mut self, command: &str, arguments: &[&str]) -> Result<Vec<String>, ScriptError> {
        match command {
            "CreateGraph" => {
                let [name] = expect_args::<1>(command, arguments)?;
                self.graphs.insert(name.to_string(), ScriptGraph::new());
                Ok(vec![format!("created graph {name}")])
            }
            "AddNode" => {
                let [graph_name, node] = expect_args::<2>(command, arguments)?;
                self.graph_mut(graph_name)?.add_node(node.to_string());
                Ok(vec![format!("added node {node} to {graph_name}")])
            }
            "AddEdge" => {
                let [graph_name, parent, child, weight] = expect_args::<4>(command, arguments)?;
                let mut weight = parse_weight(weight)?;
                // Self-edges always carry zero weight.
                if parent == child {
                    weight = 0.0;
                }
                self.graph_mut(graph_name)?
                    .add_edge(parent.to_string(), child.to_string(), weight)?;
                Ok(vec![format!(
                    "added edge {} from {parent} to {child} in {graph_name}",
                    format_weight(weight)
                )])
            }
            "ListNodes" => {
                let [graph_name] = expect_args::<1>(command, arguments)?;
                let mut nodes: Vec<&String> = self.graph(graph_name)?.nodes().collect();
                nodes.sort();

                let mut out = format!("{graph_name} contains:");
                for node in nodes {
                    out.push(' ');
                    out.push_str(node);
                }
                Ok(vec![out])
            }
            "ListChildren" => {
                let [graph_name, parent] = expect_args::<2>(command, arguments)?;
                let graph = self.graph(graph_name)?;
                let mut children: Vec<_> = graph
                    .outgoing_edges_from(&parent.to_string())?
                    .iter()
                    .collect();
                children.sort_by(|a, b| a.label.total_cmp(&b.label).then_with(|| a.to.cmp(&b.to)));

                let mut out = format!("the children of {parent} in {graph_name} are:");
                for edge in children {
                    out.push_str(&format!(" {}({})", edge.to, format_weight(edge.label)));
                }
                Ok(vec![out])
            }
            "FindPath" => {
                let [graph_name, source, dest] = expect_args::<3>(command, arguments)?;
                self.find_path(graph_name, source, dest)
            }
            _ => Ok(vec![format!("Unrecognized command: {command}")]),
        }
    }

    fn find_path(&self, graph_name: &str, source: &str, dest: &str) -> Result<Vec<String>, ScriptError> {
        let graph = self.graph(graph_name)?;
        let (source, dest) = (source.to_string(), dest.to_string());

        let mut out = Vec::new();
        for node in [&source, &dest] {
            if !graph.contains_node(node) {
                out.push(format!("unknown: {node}"));
            }
        }
        if !out.is_empty() {
            return Ok(out);
        }

        out.push(format!("path from {source} to {dest}:"));
        match graph.shortest_weighted_path(&source, &dest) {
            None => out.push("no path found".to_string()),
            Some(edges) => {
                for edge in &edges {
                    out.push(format!(
                        "{} to {} with weight {}",
                        edge.from,
                        edge.to,
                        format_weight(edge.label)
                    ));
                }
                out.push(format!("total cost: {}", format_weight(path_cost(&edges))));
            }
        }
        Ok(out)
    }

    fn graph(&self, name: &str) -> Result<&ScriptGraph, ScriptError> {
        self.graphs
            .get(name)
            .ok_or_else(|| ScriptError::UnknownGraph(name.to_string()))
    }

    fn graph_mut(&mut self, name: &str) -> Result<&mut ScriptGraph, ScriptError> {
        self.graphs
            .get_mut(name)
            .ok_or_else(|| ScriptError::UnknownGraph(name.to_string()))
    }
}

/// Run a whole script held in memory and return everything it printed.
///
/// # Errors
///
/// Returns an error if the driver fails to read or write a line.
pub fn run_script(script: &str) -> io::Result<String> {
    let mut driver = ScriptDriver::new(script.as_bytes(), Vec::new());
    driver.run()?;
    Ok(String::from_utf8_lossy(&driver.into_output()).into_owned())
}

fn expect_args<'a, const COUNT: usize>(
    command: &str,
    arguments: &[&'a str],
) -> Result<[&'a str; COUNT], ScriptError> {
    <[&str; COUNT]>::try_from(arguments).map_err(|_| ScriptError::BadArguments {
        command: command.to_string(),
        arguments: arguments.iter().map(|a| a.to_string()).collect(),
    })
}

fn parse_weight(text: &str) -> Result<f64, ScriptError> {
    match text.parse::<f64>() {
        Ok(weight) if weight.is_finite() && weight >= 0.0 => Ok(weight),
        _ => Err(ScriptError::InvalidWeight(text.to_string())),
    }
}
