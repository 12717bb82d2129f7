//! @acp:module "BM25"
//! @acp:summary "Okapi BM25 ranking over an in-memory document set"
//! @acp:domain search
//! @acp:layer logic

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

fn punctuation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s]").expect("static regex"))
}

/// Lowercase, strip punctuation, split on whitespace, drop tokens of 2 chars or fewer
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    punctuation()
        .replace_all(&lowered, " ")
        .split_whitespace()
        .filter(|t| t.chars().count() > 2)
        .map(str::to_string)
        .collect()
}

/// BM25 index built by [`Bm25::fit`]
#[derive(Debug, Clone)]
pub struct Bm25 {
    k1: f64,
    b: f64,
    corpus: Vec<Vec<String>>,
    doc_lengths: Vec<usize>,
    avgdl: f64,
    idf: HashMap<String, f64>,
}

impl Default for Bm25 {
    fn default() -> Self {
        Self::with_params(1.5, 0.75)
    }
}

impl Bm25 {
    pub fn with_params(k1: f64, b: f64) -> Self {
        Self {
            k1,
            b,
            corpus: Vec::new(),
            doc_lengths: Vec::new(),
            avgdl: 0.0,
            idf: HashMap::new(),
        }
    }

    /// Index `documents`, replacing any previous corpus
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) {
        self.corpus = documents.iter().map(|d| tokenize(d.as_ref())).collect();
        self.doc_lengths = self.corpus.iter().map(Vec::len).collect();

        let n = self.corpus.len();
        self.avgdl = if n == 0 {
            0.0
        } else {
            self.doc_lengths.iter().sum::<usize>() as f64 / n as f64
        };

        let mut doc_freqs: HashMap<&str, usize> = HashMap::new();
        for doc in &self.corpus {
            let mut seen: Vec<&str> = doc.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *doc_freqs.entry(term).or_insert(0) += 1;
            }
        }

        let n = n as f64;
        self.idf = doc_freqs
            .into_iter()
            .map(|(term, df)| {
                let df = df as f64;
                (term.to_string(), ((n - df + 0.5) / (df + 0.5) + 1.0).ln())
            })
            .collect();
    }

    /// Score every document against `query`.
    ///
    /// Returns `(document index, score)` sorted by descending score; equal
    /// scores keep document order.
    pub fn score(&self, query: &str) -> Vec<(usize, f64)> {
        let query_tokens = tokenize(query);
        let mut scores: Vec<(usize, f64)> = self
            .corpus
            .iter()
            .enumerate()
            .map(|(idx, doc)| (idx, self.score_document(&query_tokens, doc, self.doc_lengths[idx])))
            .collect();

        scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scores
    }

    fn score_document(&self, query_tokens: &[String], doc: &[String], doc_len: usize) -> f64 {
        if self.avgdl == 0.0 {
            return 0.0;
        }
        let mut term_freqs: HashMap<&str, usize> = HashMap::new();
        for term in doc {
            *term_freqs.entry(term.as_str()).or_insert(0) += 1;
        }

        let length_norm = 1.0 - self.b + self.b * doc_len as f64 / self.avgdl;
        query_tokens
            .iter()
            .filter_map(|token| {
                let idf = self.idf.get(token)?;
                let tf = *term_freqs.get(token.as_str())? as f64;
                Some(idf * (tf * (self.k1 + 1.0)) / (tf + self.k1 * length_norm))
            })
            .sum()
    }
}
