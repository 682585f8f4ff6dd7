// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static range minimum queries.
//!
//! Input on stdin: `n q`, then `n` values, then `q` pairs `a b` (1-based, inclusive).
//! Output: the minimum of each range, one per line.
//!
//! Run:
//! - `echo "8 4 3 2 4 5 1 1 5 3 2 4 5 6 1 8 3 3" | cargo run -p arbor_demos --example range_minimum`

use std::error::Error;
use std::io::{self, BufWriter, Read, Write};

use arbor_segtree::{Kind, SegmentTree};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let mut tokens = input.split_ascii_whitespace().map(str::parse::<i64>);
    let mut next = move || -> Result<i64, Box<dyn Error>> {
        Ok(tokens.next().ok_or("unexpected end of input")??)
    };

    let n = usize::try_from(next()?)?;
    let q = usize::try_from(next()?)?;
    let values = (0..n).map(|_| next()).collect::<Result<Vec<_>, _>>()?;
    let mut tree = SegmentTree::new(Kind::Min, &values)?;

    let mut out = BufWriter::new(io::stdout().lock());
    for _ in 0..q {
        let a = usize::try_from(next()?)?;
        let b = usize::try_from(next()?)?;
        // Translating to 0-based; a zero bound is reported by the tree as out of range.
        let min = tree.query(a.wrapping_sub(1), b.wrapping_sub(1))?;
        writeln!(out, "{min}")?;
    }
    Ok(())
}
