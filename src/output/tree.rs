//! Tree formatter for the size report
//!
//! This module provides `TreeFormatter`, which renders a `SizeReport` as an
//! indented, percentage-gated list either into a string or to stdout with
//! colors.

use std::collections::HashSet;
use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::tree::{PeerSet, SizeNode, SizeReport, percentage, to_megabytes};

use super::config::OutputConfig;

/// One rendered line of the report.
struct ReportLine<'a> {
    indent: String,
    percentage: f64,
    name: &'a str,
    size: u64,
    is_dev: bool,
    peers: Option<&'a PeerSet>,
}

/// Formatter for the size tree.
pub struct TreeFormatter {
    config: OutputConfig,
    dev_dependencies: HashSet<String>,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig, dev_dependencies: HashSet<String>) -> Self {
        Self {
            config,
            dev_dependencies,
        }
    }

    /// Render the summary and tree as plain text.
    pub fn format(&self, report: &SizeReport) -> String {
        let mut out = NoColor::new(Vec::new());
        // Writing into a Vec cannot fail.
        let _ = self.write_report(report, &mut out);
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }

    /// Print the summary and tree to stdout.
    pub fn print(&self, report: &SizeReport) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_report(report, &mut stdout)?;
        stdout.flush()
    }

    /// Write the summary line followed by the tree.
    pub fn write_report<W: WriteColor>(&self, report: &SizeReport, out: &mut W) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(
            out,
            "Total size of {}: {:.2} MB",
            report.root.name,
            to_megabytes(report.total_size)
        )?;
        out.reset()?;
        writeln!(out)?;
        writeln!(out)?;
        self.write_tree(report, out)
    }

    /// Write only the tree lines.
    pub fn write_tree<W: WriteColor>(&self, report: &SizeReport, out: &mut W) -> io::Result<()> {
        for line in self.collect_lines(report) {
            self.write_line(out, &line)?;
        }
        Ok(())
    }

    fn collect_lines<'a>(&self, report: &'a SizeReport) -> Vec<ReportLine<'a>> {
        let mut lines = Vec::new();
        self.collect_node(&report.root, report.total_size, "", 0, true, &mut lines);
        lines
    }

    fn collect_node<'a>(
        &self,
        node: &'a SizeNode,
        total: u64,
        prefix: &str,
        depth: usize,
        is_root: bool,
        lines: &mut Vec<ReportLine<'a>>,
    ) {
        if self.config.max_depth.is_some_and(|max| depth > max) {
            return;
        }
        let Some(pct) = percentage(node.size, total) else {
            return;
        };
        // Pruning here drops the whole subtree, however large its children are.
        if pct < self.config.min_percentage {
            return;
        }

        let peers =
            (!is_root && !node.peer_dependencies.is_empty()).then_some(&node.peer_dependencies);
        lines.push(ReportLine {
            indent: prefix.to_string(),
            percentage: pct,
            name: &node.name,
            size: node.size,
            is_dev: self.dev_dependencies.contains(&node.name),
            peers,
        });

        let child_prefix = format!("{}  ", prefix);
        for child in &node.children {
            self.collect_node(child, total, &child_prefix, depth + 1, false, lines);
        }
    }

    fn write_line<W: WriteColor>(&self, out: &mut W, line: &ReportLine<'_>) -> io::Result<()> {
        write!(out, "{}- ", line.indent)?;

        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(out, "[{:.1}%]", line.percentage)?;
        out.reset()?;
        write!(out, " ")?;

        let mut name_spec = ColorSpec::new();
        if line.is_dev {
            name_spec.set_dimmed(true);
        } else {
            name_spec.set_bold(true);
        }
        out.set_color(&name_spec)?;
        write!(out, "{}", line.name)?;
        out.reset()?;
        write!(out, " ")?;

        out.set_color(ColorSpec::new().set_dimmed(true))?;
        write!(out, "({:.1} MB)", to_megabytes(line.size))?;
        out.reset()?;

        if let Some(peers) = line.peers {
            write!(out, " ")?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            write!(out, "(peer deps: {})", peers)?;
            out.reset()?;
        }

        writeln!(out)
    }
}
