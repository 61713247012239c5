use clap::{Args, Parser, Subcommand};
use sorting::INTERSECTION_LIMIT;

#[derive(Parser, Debug)]
#[command(name = "lessons")]
#[command(about = "Solutions to short algorithmic lessons")]
#[command(version)]
pub struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Integers separated by spaces and/or commas.
#[derive(Args, Debug, Default)]
pub struct Values {
    /// Input values; read from stdin when omitted
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Index of the first occurrence of the strict-majority value
    Dominator(Values),
    /// Minimum number of blocks that build a wall of the given heights
    StoneWall {
        /// Also list the blocks, one per line
        #[arg(long)]
        blocks: bool,
        #[command(flatten)]
        values: Values,
    },
    /// Number of intersecting pairs of discs with the given radii
    Discs {
        /// Counts above this print -1
        #[arg(long, default_value_t = INTERSECTION_LIMIT)]
        limit: usize,
        #[command(flatten)]
        values: Values,
    },
    /// Longest run of zeros enclosed by ones in binary
    BinaryGap { n: u64 },
    /// Rotate values right by K
    CyclicRotation {
        #[arg(short)]
        k: usize,
        #[command(flatten)]
        values: Values,
    },
    /// The value without a pair
    OddOccurrences(Values),
    /// Jumps of length D from X to at least Y
    FrogJmp { x: u64, y: u64, d: u64 },
    /// The missing element of 1..=N+1
    PermMissingElem(Values),
    /// Minimal difference between the two parts of a split
    TapeEquilibrium(Values),
    /// Earliest time at which positions 1..=X are all covered
    FrogRiverOne {
        #[arg(short)]
        x: usize,
        #[command(flatten)]
        values: Values,
    },
    /// N counters driven by the given operations
    MaxCounters {
        #[arg(short)]
        n: usize,
        #[command(flatten)]
        values: Values,
    },
    /// Smallest positive integer that does not occur
    MissingInteger(Values),
    /// Whether the values are a permutation of 1..=N
    PermCheck(Values),
    /// Multiples of K in A..=B
    CountDiv { a: u64, b: u64, k: u64 },
    /// Pairs of passing cars; 0 travels east, 1 travels west
    PassingCars(Values),
    /// Minimal nucleotide impact for each query
    GenomicRangeQuery {
        dna: String,
        /// Inclusive range as P:Q; may be repeated
        #[arg(short, long = "query", value_parser = parse_query)]
        queries: Vec<(usize, usize)>,
    },
    /// Start of the slice with the minimal average
    MinAvgTwoSlice(Values),
    /// Maximal product of any triplet
    MaxProductOfThree(Values),
    /// Whether some triplet forms a triangle
    Triangle(Values),
    /// Whether (), [] and {} are properly nested
    Brackets { text: Option<String> },
    /// Whether parentheses are properly nested
    Nesting { text: Option<String> },
    /// Surviving fish given their sizes
    Fish {
        /// 0 swims upstream, 1 downstream, one per fish
        #[arg(long, value_delimiter = ',', required = true)]
        directions: Vec<u8>,
        #[command(flatten)]
        values: Values,
    },
    /// Write text through a looking glass
    Mirror {
        /// Divide the text length by this inside the glass
        #[arg(long, allow_negative_numbers = true)]
        divisor: Option<i64>,
        text: Vec<String>,
    },
    /// Define two types through the builder hook and call their methods
    Hook,
}

fn parse_query(s: &str) -> Result<(usize, usize), String> {
    let (p, q) = s
        .split_once(':')
        .ok_or_else(|| format!("expected P:Q, found `{s}`"))?;
    let p = p.trim().parse().map_err(|e| format!("`{p}`: {e}"))?;
    let q = q.trim().parse().map_err(|e| format!("`{q}`: {e}"))?;
    Ok((p, q))
}
