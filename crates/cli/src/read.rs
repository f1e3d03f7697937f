use base::scalar::F64;
use log::warn;
use std::io::BufRead;
use std::num::ParseFloatError;
use topk::{BoundedMinHeap, Node};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub records: usize,
    pub malformed: usize,
}

/// Parses `value [label]`. Blank lines yield `None`.
pub fn parse_record(line: &str) -> Option<Result<Node<String>, ParseFloatError>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (value, label) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    Some(
        value
            .parse::<F64>()
            .map(|value| Node::new(value, label.trim().to_string())),
    )
}

pub fn feed<R: BufRead>(
    reader: R,
    heap: &mut BoundedMinHeap<String>,
) -> std::io::Result<Stats> {
    let mut stats = Stats::default();
    for (i, line) in reader.lines().enumerate() {
        match parse_record(&line?) {
            None => {}
            Some(Ok(node)) => {
                stats.records += 1;
                heap.extend(Some(node));
            }
            Some(Err(err)) => {
                warn!("skipped malformed line {}: {err}", i + 1);
                stats.malformed += 1;
            }
        }
    }
    Ok(stats)
}
