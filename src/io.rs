//! Loading weighted graphs from edge-list files.
//!
//! Each non-empty line holds one edge `u v` or `u v w`, separated by whitespace. Missing
//! weights default to [DEFAULT_WEIGHT]; lines starting with `#` are skipped. The number
//! of vertices is one more than the largest vertex id that appears.
//!
//! For example, assume the file `edges.txt` contains the following:
//! ```text
//! # vertices 0..3
//! 0 1 1.0
//! 1 2 2
//! 0 2 4
//! 2 3
//! ```
//! We can then load the file as follows:
//!
//! ```rust,no_run
//! use weightgraph::adjlist::AdjacencyList;
//! use weightgraph::algorithms::ShortestPaths;
//! use weightgraph::io::LoadFromFile;
//!
//! let graph = AdjacencyList::from_txt("edges.txt").expect("Could not open edges.txt");
//! let tree = graph.dijkstra(0).expect("vertex 0 exists");
//! println!("Distances: {:?}", tree.distance);
//! ```
use std::ffi::OsStr;
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::debug;

use crate::adjlist::AdjacencyList;
use crate::graph::*;

pub trait LoadFromFile {
    fn from_txt(filename:&str) -> io::Result<Self> where Self: Sized {
        let buf = open_reader_txt(filename)?;
        Self::from_buf(buf)
    }

    fn from_gzipped(filename:&str) -> io::Result<Self> where Self: Sized {
        let buf = open_reader_gzip(filename)?;
        Self::from_buf(buf)
    }

    /// Picks plain text or gzip by the file extension (`.txt` or `.gz`).
    fn from_file(filename:&str) -> io::Result<Self> where Self: Sized {
        let buf = open_reader(filename)?;
        Self::from_buf(buf)
    }

    fn from_buf(buf:Box<dyn BufRead>) -> io::Result<Self> where Self: Sized;
}

/// Undirected graphs. Use [read_edges] together with [AdjacencyList::with_edges]
/// to load a directed graph.
impl LoadFromFile for AdjacencyList {
    fn from_buf(buf:Box<dyn BufRead>) -> io::Result<Self> where Self: Sized {
        let edges = read_edges(buf)?;
        let n = edges.iter()
            .map(|&(u, v, _)| u.max(v) as usize + 1)
            .max()
            .unwrap_or(0);

        AdjacencyList::with_edges(n, false, edges)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

/// Parses all edges of an edge list in the format described in [crate::io].
pub fn read_edges<R: BufRead>(reader:R) -> io::Result<Vec<WeightedEdge>> {
    let mut edges = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let l = line?;
        let l = l.trim();
        if l.is_empty() || l.starts_with('#') {
            continue;
        }

        let tokens:Vec<&str> = l.split_whitespace().collect();
        if tokens.len() != 2 && tokens.len() != 3 {
            let err = io::Error::new(io::ErrorKind::InvalidData,
                    format!("Line {} does not contain two or three tokens", lineno));
            return Err(err)
        }
        let u = parse_vertex(tokens[0], lineno)?;
        let v = parse_vertex(tokens[1], lineno)?;
        let w = match tokens.get(2) {
            Some(s) => parse_weight(s, lineno)?,
            None => DEFAULT_WEIGHT,
        };
        edges.push((u, v, w));
    }

    debug!(m = edges.len(), "read edge list");
    Ok(edges)
}

fn open_reader(filename:&str) -> io::Result<Box<dyn BufRead>> {
    let path = Path::new(&filename);
    let extension = path.extension().and_then(OsStr::to_str);
    let reader:Box<dyn BufRead> = match extension {
        Some("txt") => {
            let file = File::open(path)?;
            Box::new(BufReader::new(file))
        }
        Some("gz") => {
            let file = File::open(path)?;
            let gz = GzDecoder::new(file);
            Box::new(BufReader::new(gz))
        }
        _ => {
            let error = io::Error::new(io::ErrorKind::InvalidInput,
                format!("Invalid file `{filename:?}`. The supported formats are `.txt.gz` and `.txt`."));
            return Err(error);
        }
    };
    Ok(reader)
}

fn open_reader_txt(filename:&str) -> io::Result<Box<dyn BufRead>> {
    let path = Path::new(&filename);
    let file = File::open(path)?;
    Ok(Box::new(BufReader::new(file)))
}

fn open_reader_gzip(filename:&str) -> io::Result<Box<dyn BufRead>> {
    let path = Path::new(&filename);
    let file = File::open(path)?;
    let gz = GzDecoder::new(file);
    Ok(Box::new(BufReader::new(gz)))
}

fn parse_vertex(s: &str, lineno:usize) -> io::Result<Vertex> {
    match s.parse::<Vertex>() {
        Ok(x) => Ok(x),
        Err(_) => Err(io::Error::new(io::ErrorKind::InvalidData,
                format!("Cannot parse vertex id {} at input line {}", s, lineno)))
    }
}

fn parse_weight(s: &str, lineno:usize) -> io::Result<Weight> {
    match s.parse::<Weight>() {
        Ok(x) if x.is_finite() => Ok(x),
        _ => Err(io::Error::new(io::ErrorKind::InvalidData,
                format!("Cannot parse edge weight {} at input line {}", s, lineno)))
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
