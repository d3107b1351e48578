//! Anagram class graph
//!
//! Words sharing a signature form a class. Class A has an edge labelled `c`
//! to class B when adding `c` to A's signature gives B's signature. Catalog
//! paths are walks through this graph.

use crate::core::{Path, PathError, Round, signature};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;
use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

/// Index of a class in the graph
pub type Label = usize;

/// All words sharing one signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub signature: String,
    pub members: BTreeSet<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edge {
    to: Label,
    symbol: char,
}

/// Error type for graph construction
#[derive(Debug)]
pub enum GraphError {
    Io(io::Error),
    InvalidSymbol { word: String, symbol: char },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read word list: {err}"),
            Self::InvalidSymbol { word, symbol } => {
                write!(f, "symbol '{symbol}' in '{word}' not in alphabet a-z")
            }
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidSymbol { .. } => None,
        }
    }
}

impl From<io::Error> for GraphError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Anagram classes over the alphabet `a..=z` and the single-letter edges between them
#[derive(Debug, Default)]
pub struct Graph {
    to_label: FxHashMap<String, Label>,
    classes: Vec<Class>,
    adjacent: Vec<Vec<Edge>>,
}

impl Graph {
    /// Build a graph from a word list with one word per line
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    ///
    /// # Errors
    /// Returns `GraphError` if reading fails or a word has a symbol outside `a..=z`.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, GraphError> {
        let mut graph = Self::default();

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                graph.add_word(word)?;
            }
        }

        graph.compute_edges();
        Ok(graph)
    }

    /// Build a graph from words already in memory
    ///
    /// # Errors
    /// Returns `GraphError::InvalidSymbol` for a word outside `a..=z`.
    ///
    /// # Examples
    /// ```
    /// use holdgram::generator::Graph;
    ///
    /// let graph = Graph::from_words(["lap", "pal", "leap", "plea"]).unwrap();
    /// assert_eq!(graph.class_count(), 2);
    /// assert_eq!(graph.edges(0).collect::<Vec<_>>(), [(1, 'e')]);
    /// ```
    pub fn from_words<I, S>(words: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = Self::default();
        for word in words {
            graph.add_word(word.as_ref())?;
        }
        graph.compute_edges();
        Ok(graph)
    }

    fn add_word(&mut self, word: &str) -> Result<(), GraphError> {
        if let Some(symbol) = word.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(GraphError::InvalidSymbol {
                word: word.to_string(),
                symbol,
            });
        }

        let sig = signature(word);
        if let Some(&label) = self.to_label.get(&sig) {
            self.classes[label].members.insert(word.to_string());
        } else {
            let label = self.classes.len();
            self.classes.push(Class {
                signature: sig.clone(),
                members: BTreeSet::from([word.to_string()]),
            });
            self.to_label.insert(sig, label);
        }

        Ok(())
    }

    fn compute_edges(&mut self) {
        self.adjacent = (0..self.classes.len())
            .into_par_iter()
            .map(|label| self.adjacencies(label))
            .collect();
    }

    fn adjacencies(&self, label: Label) -> Vec<Edge> {
        let sig = &self.classes[label].signature;

        ('a'..='z')
            .filter_map(|symbol| {
                let extended = signature(&format!("{sig}{symbol}"));
                self.to_label
                    .get(&extended)
                    .map(|&to| Edge { to, symbol })
            })
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    #[inline]
    #[must_use]
    pub fn class(&self, label: Label) -> Option<&Class> {
        self.classes.get(label)
    }

    /// Label of the class containing `word`, if it is in the graph
    #[must_use]
    pub fn label_of(&self, word: &str) -> Option<Label> {
        self.to_label
            .get(&signature(word))
            .copied()
            .filter(|&label| self.classes[label].members.contains(word))
    }

    /// Outgoing edges of `label` as `(target, symbol)` in alphabet order
    pub fn edges(&self, label: Label) -> impl Iterator<Item = (Label, char)> + '_ {
        self.adjacent
            .get(label)
            .into_iter()
            .flatten()
            .map(|edge| (edge.to, edge.symbol))
    }

    #[must_use]
    pub fn average_degree(&self) -> f64 {
        if self.classes.is_empty() {
            return 0.0;
        }
        let degree: usize = self.adjacent.iter().map(Vec::len).sum();
        degree as f64 / self.classes.len() as f64
    }

    #[must_use]
    pub fn average_class_size(&self) -> f64 {
        if self.classes.is_empty() {
            return 0.0;
        }
        let size: usize = self.classes.iter().map(|class| class.members.len()).sum();
        size as f64 / self.classes.len() as f64
    }

    /// Class labels grouped by word length, ascending
    #[must_use]
    pub fn classes_by_length(&self) -> BTreeMap<usize, Vec<Label>> {
        let mut found: BTreeMap<usize, Vec<Label>> = BTreeMap::new();
        for (label, class) in self.classes.iter().enumerate() {
            found.entry(class.signature.len()).or_default().push(label);
        }
        found
    }

    /// Classes of words with `length` letters
    #[must_use]
    pub fn sources(&self, length: usize) -> Vec<Label> {
        self.classes_by_length()
            .remove(&length)
            .unwrap_or_default()
    }

    /// For each word length, the number of classes reachable from each class
    /// of `length`, summed over those sources
    ///
    /// A class reachable from two sources counts twice, so dividing by the
    /// source count gives the average reach per source.
    #[must_use]
    pub fn reachability(&self, length: usize) -> BTreeMap<usize, usize> {
        let mut reachable = BTreeMap::new();

        for source in self.sources(length) {
            let mut seen = BTreeSet::from([source]);
            let mut queue = VecDeque::from([source]);

            while let Some(label) = queue.pop_front() {
                *reachable
                    .entry(self.classes[label].signature.len())
                    .or_insert(0) += 1;

                for (to, _) in self.edges(label) {
                    if seen.insert(to) {
                        queue.push_back(to);
                    }
                }
            }
        }

        reachable
    }

    /// Every maximal path starting at `source` with a round count inside `rounds`
    ///
    /// A path is maximal when its last class has no outgoing edge.
    ///
    /// # Errors
    /// Returns `PathError` only if a class cannot form a round, which a
    /// graph built over `a..=z` never produces.
    pub fn paths_from(
        &self,
        source: Label,
        rounds: &RangeInclusive<usize>,
    ) -> Result<Vec<Path>, PathError> {
        let mut found = Vec::new();
        let mut walk = Vec::new();
        self.walk(source, rounds, &mut walk, &mut found)?;
        Ok(found)
    }

    fn walk(
        &self,
        label: Label,
        rounds: &RangeInclusive<usize>,
        walk: &mut Vec<(Label, char)>,
        found: &mut Vec<Path>,
    ) -> Result<(), PathError> {
        let length = walk.len() + 1;
        if length > *rounds.end() {
            return Ok(());
        }

        if self.adjacent[label].is_empty() {
            if rounds.contains(&length) {
                found.push(self.to_path(walk, label)?);
            }
            return Ok(());
        }

        for edge in &self.adjacent[label] {
            walk.push((label, edge.symbol));
            self.walk(edge.to, rounds, walk, found)?;
            walk.pop();
        }

        Ok(())
    }

    fn to_path(&self, walk: &[(Label, char)], last: Label) -> Result<Path, PathError> {
        let steps = walk
            .iter()
            .map(|&(label, symbol)| (label, Some(symbol)))
            .chain(std::iter::once((last, None)));

        let source = walk.first().map_or(last, |&(label, _)| label);
        let length = self.classes[source].signature.len();

        let rounds = steps
            .enumerate()
            .map(|(index, (label, next))| {
                let words = self.classes[label].members.iter().cloned().collect();
                Round::new(words, next).map_err(|source| PathError::Round { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Path::starting_at(rounds, length)
    }

    /// Write the graph in Graphviz DOT format
    ///
    /// # Errors
    /// Returns an I/O error if writing fails.
    pub fn write_dot<W: Write>(&self, writer: W) -> io::Result<()> {
        let mut writer = io::BufWriter::new(writer);

        writeln!(writer, "strict digraph {{")?;

        for (label, class) in self.classes.iter().enumerate() {
            writeln!(writer, "  {label} [label=\"{}\"];", class.signature)?;
        }

        for (label, edges) in self.adjacent.iter().enumerate() {
            for edge in edges {
                writeln!(
                    writer,
                    "  {label} -> {} [label=\"{}\"];",
                    edge.to, edge.symbol
                )?;
            }
        }

        writeln!(writer, "}}")?;
        writer.flush()
    }
}

/// Source word length used by the overview's reachability section
const OVERVIEW_SOURCE_LENGTH: usize = 3;

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "👉 overview")?;
        writeln!(f, "  - number of classes: {}", self.class_count())?;
        writeln!(f, "  - average class size: {:.2}", self.average_class_size())?;
        writeln!(f, "  - average degree: {:.2}", self.average_degree())?;
        writeln!(f)?;

        let by_length = self.classes_by_length();

        writeln!(f, "👉 anagram classes")?;
        for (length, labels) in &by_length {
            let sample = &self.classes[labels[0]].signature;
            writeln!(f, "{:6} of length {length:2} (e.g. {sample})", labels.len())?;
        }
        writeln!(f)?;

        let source_count = by_length
            .get(&OVERVIEW_SOURCE_LENGTH)
            .map_or(0, Vec::len);

        writeln!(f, "👉 reachability from class length {OVERVIEW_SOURCE_LENGTH}")?;
        if source_count == 0 {
            writeln!(f, "  no classes of length {OVERVIEW_SOURCE_LENGTH}")?;
        } else {
            for (length, count) in self.reachability(OVERVIEW_SOURCE_LENGTH) {
                let average = count as f64 / source_count as f64;
                writeln!(f, "{count:6} of length {length:2} (avg. {average:.2})")?;
            }
        }

        writeln!(f)?;
        write!(f, "(end)")
    }
}
