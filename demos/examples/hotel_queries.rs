// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hotel queries: assign each group to the first hotel with enough free rooms.
//!
//! Input on stdin: `n m`, then `n` free-room counts, then `m` group sizes.
//! Output: for each group, the 1-based hotel index it was assigned to, or `0`.
//!
//! Run:
//! - `echo "8 5 3 2 4 1 5 5 2 6 4 4 7 1 1" | cargo run -p arbor_demos --example hotel_queries`
//!
//! Set `RUST_LOG=arbor_segtree=trace` to watch the tree being updated.

use std::error::Error;
use std::io::{self, Read, Write};

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
    let m = usize::try_from(next()?)?;
    let rooms = (0..n).map(|_| next()).collect::<Result<Vec<_>, _>>()?;

    let mut hotels = SegmentTree::new(Kind::Max, &rooms)?;
    let mut answers = Vec::with_capacity(m);
    for _ in 0..m {
        let group = next()?;
        match hotels.find_first(group)? {
            Some(i) => {
                hotels.update_point(i, -group)?;
                answers.push((i + 1).to_string());
            }
            None => answers.push("0".to_owned()),
        }
    }
    log::info!("assigned {} groups across {} hotels", m, n);

    writeln!(io::stdout().lock(), "{}", answers.join(" "))?;
    Ok(())
}
