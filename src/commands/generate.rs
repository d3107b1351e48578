//! Generate command
//!
//! Builds the anagram graph from a word list and writes a shuffled catalog.

use crate::core::{FLOP_LENGTH, shuffle};
use crate::generator::Graph;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::Rng;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Options for catalog generation
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Word list, one word per line
    pub wordlist: PathBuf,
    /// Catalog destination; stdout when `None`
    pub output: Option<PathBuf>,
    /// Word length of the first round
    pub length: usize,
    /// Allowed number of rounds per path
    pub rounds: RangeInclusive<usize>,
    /// Also write the graph in DOT format here
    pub dot: Option<PathBuf>,
    /// Print graph statistics
    pub overview: bool,
}

impl GenerateConfig {
    #[must_use]
    pub fn new(wordlist: PathBuf) -> Self {
        Self {
            wordlist,
            output: None,
            length: FLOP_LENGTH,
            rounds: 3..=7,
            dot: None,
            overview: false,
        }
    }
}

/// Result of a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    pub classes: usize,
    pub sources: usize,
    pub lines: Vec<String>,
}

/// Enumerate and shuffle catalog lines for `graph`
///
/// # Errors
///
/// Returns an error if a path cannot be built from the graph.
pub fn generate_lines<R: Rng + ?Sized>(
    graph: &Graph,
    length: usize,
    rounds: &RangeInclusive<usize>,
    progress: &ProgressBar,
    rng: &mut R,
) -> Result<Vec<String>> {
    let sources = graph.sources(length);
    progress.set_length(sources.len() as u64);

    let per_source = sources
        .par_iter()
        .map(|&source| {
            let paths = graph.paths_from(source, rounds);
            progress.inc(1);
            paths
        })
        .collect::<Result<Vec<_>, _>>()?;

    progress.finish_and_clear();

    let mut lines: Vec<String> = per_source
        .into_iter()
        .flatten()
        .map(|path| path.to_string())
        .collect();
    shuffle(&mut lines, rng);

    Ok(lines)
}

/// Run the generate command
///
/// # Errors
///
/// Returns an error if the word list cannot be read or contains invalid
/// words, or if an output file cannot be written.
pub fn run_generate<R: Rng + ?Sized>(
    config: &GenerateConfig,
    rng: &mut R,
) -> Result<GenerateResult> {
    let file = File::open(&config.wordlist)
        .with_context(|| format!("cannot open {}", config.wordlist.display()))?;
    let graph = Graph::from_reader(BufReader::new(file))?;
    info!("built graph with {} classes", graph.class_count());

    if let Some(dot) = &config.dot {
        let file =
            File::create(dot).with_context(|| format!("cannot create {}", dot.display()))?;
        graph.write_dot(file)?;
        info!("wrote graph to {}", dot.display());
    }

    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} classes | {msg}")?
            .progress_chars("█▓▒░"),
    );
    progress.set_message("walking paths");

    let lines = generate_lines(&graph, config.length, &config.rounds, &progress, rng)?;

    match &config.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
            write_lines(file, &lines)?;
        }
        None => write_lines(io::stdout().lock(), &lines)?,
    }

    if config.overview {
        eprintln!("{graph}");
    }

    Ok(GenerateResult {
        classes: graph.class_count(),
        sources: graph.sources(config.length).len(),
        lines,
    })
}

fn write_lines<W: Write>(writer: W, lines: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::core::Path;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: &[&str] = &[
        "art", "rat", "tar", "rate", "tear", "aster", "stare", "tears", "dog", "god", "dogs",
        "gods", "air",
    ];

    #[test]
    fn generated_lines_form_a_catalog() {
        let graph = Graph::from_words(WORDS).unwrap();
        let lines = generate_lines(
            &graph,
            3,
            &(1..=7),
            &ProgressBar::hidden(),
            &mut StdRng::seed_from_u64(4),
        )
        .unwrap();

        assert_eq!(lines.len(), 3);
        let catalog = Catalog::from_text(&lines.join("\n"));
        assert!(catalog.malformed().is_empty());
        for line in catalog.lines() {
            assert!(Path::parse(line).unwrap().is_connected());
        }
        assert!(lines.contains(&"{air}".to_string()));
    }

    #[test]
    fn round_bounds_filter_lines() {
        let graph = Graph::from_words(WORDS).unwrap();
        let lines = generate_lines(
            &graph,
            3,
            &(3..=7),
            &ProgressBar::hidden(),
            &mut StdRng::seed_from_u64(4),
        )
        .unwrap();

        assert_eq!(
            lines,
            ["{art, rat, tar} + e -> {rate, tear} + s -> {aster, stare, tears}"]
        );
    }

    #[test]
    fn run_generate_writes_file() {
        let dir = std::env::temp_dir();
        let id = std::process::id();
        let wordlist = dir.join(format!("holdgram-words-{id}.txt"));
        let output = dir.join(format!("holdgram-paths-{id}.txt"));
        std::fs::write(&wordlist, WORDS.join("\n")).unwrap();

        let config = GenerateConfig {
            output: Some(output.clone()),
            rounds: 1..=7,
            ..GenerateConfig::new(wordlist.clone())
        };
        let result = run_generate(&config, &mut StdRng::seed_from_u64(9)).unwrap();
        let written = std::fs::read_to_string(&output).unwrap();

        std::fs::remove_file(&wordlist).unwrap();
        std::fs::remove_file(&output).unwrap();

        assert_eq!(result.sources, 3);
        assert_eq!(Catalog::from_text(&written).len(), result.lines.len());
    }

    #[test]
    fn run_generate_missing_wordlist() {
        let config = GenerateConfig::new(PathBuf::from("/no/such/words.txt"));
        assert!(run_generate(&config, &mut StdRng::seed_from_u64(1)).is_err());
    }
}
