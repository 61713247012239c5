use std::io::Read;

use anyhow::{bail, ensure, Context};
use arrays::{CyclicRotation, OddOccurrences};
use counting::{max_counters, FrogRiverOne, MissingInteger, PermCheck};
use fmt::SpaceSep;
use inner::SentinelExt;
use io::{parse_list, Readable};
use iterations::BinaryGap;
use leader::MajorityVote;
use prefix_sums::{count_div, Genome, MinAvgTwoSlice, PassingCars};
use scoped::{
    checked_div, with_looking_glass, Builder, Console, GlassError, Registry,
};
use sorting::{DiscIntersection, MaxProductOfThree, Triangle};
use stack::{nested_parens, properly_nested, Direction, Fish, StoneWall};
use time_complexity::{frog_jmp, PermMissingElem, TapeEquilibrium};
use tracing::debug;

use crate::cli::{Command, Values};

fn read_input(input: &mut dyn Read) -> anyhow::Result<String> {
    let mut text = String::new();
    input.read_to_string(&mut text).context("failed to read stdin")?;
    Ok(text)
}

fn values<T: Readable>(
    values: &Values,
    input: &mut dyn Read,
) -> anyhow::Result<Vec<T::Output>> {
    let text = if values.values.is_empty() {
        read_input(input)?
    } else {
        values.values.join(" ")
    };
    let res = parse_list::<T>(&text).context("invalid input values")?;
    debug!(len = res.len(), "parsed values");
    Ok(res)
}

fn text(text: Option<String>, input: &mut dyn Read) -> anyhow::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => read_input(input),
    }
}

fn flag(b: bool) -> String { u8::from(b).to_string() }

#[derive(Debug)]
struct Klass;
impl Builder for Klass {}

#[derive(Debug)]
struct Shouty(&'static str);
impl Builder for Shouty {
    fn init_subclass(registry: &mut Registry) {
        registry.attach::<Self>("method_a", |this| {
            format!("{this:?}").to_uppercase()
        });
    }
}

/// Runs `command`, reading list input from `input` when none was given on
/// the command line, and returns what should be printed.
pub fn run(command: Command, input: &mut dyn Read) -> anyhow::Result<String> {
    debug!(?command, "running");
    let out = match command {
        Command::Dominator(v) => {
            values::<i64>(&v, input)?.dominator().or_sentinel().to_string()
        }
        Command::StoneWall { blocks, values: v } => {
            let h = values::<u64>(&v, input)?;
            let mut lines = vec![h.stone_wall().to_string()];
            if blocks {
                lines.extend(h.wall_blocks().into_iter().map(|b| {
                    format!("{} {}..{}", b.height, b.columns.start, b.columns.end)
                }));
            }
            lines.join("\n")
        }
        Command::Discs { limit, values: v } => values::<u64>(&v, input)?
            .disc_intersections_within(limit)
            .or_sentinel()
            .to_string(),
        Command::BinaryGap { n } => n.binary_gap().to_string(),
        Command::CyclicRotation { k, values: v } => {
            let a = values::<i64>(&v, input)?;
            SpaceSep(&a.rotated_right(k)).to_string()
        }
        Command::OddOccurrences(v) => values::<i64>(&v, input)?
            .unpaired()
            .copied()
            .or_sentinel()
            .to_string(),
        Command::FrogJmp { x, y, d } => {
            ensure!(d > 0, "jump length must be positive");
            frog_jmp(x, y, d).to_string()
        }
        Command::PermMissingElem(v) => {
            values::<usize>(&v, input)?.perm_missing_elem().to_string()
        }
        Command::TapeEquilibrium(v) => values::<i64>(&v, input)?
            .tape_equilibrium()
            .or_sentinel()
            .to_string(),
        Command::FrogRiverOne { x, values: v } => values::<i64>(&v, input)?
            .frog_river_one(x)
            .or_sentinel()
            .to_string(),
        Command::MaxCounters { n, values: v } => {
            let ops = values::<usize>(&v, input)?;
            SpaceSep(&max_counters(n, &ops)).to_string()
        }
        Command::MissingInteger(v) => {
            values::<i64>(&v, input)?.missing_integer().to_string()
        }
        Command::PermCheck(v) => flag(values::<i64>(&v, input)?.is_permutation()),
        Command::CountDiv { a, b, k } => {
            ensure!(k > 0, "divisor must be positive");
            ensure!(a <= b, "empty range {a}..={b}");
            count_div(a, b, k).to_string()
        }
        Command::PassingCars(v) => {
            let cars = values::<u8>(&v, input)?
                .into_iter()
                .map(|c| match c {
                    0 => Ok(false),
                    1 => Ok(true),
                    _ => bail!("car direction must be 0 or 1, found {c}"),
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            cars.passing_cars().or_sentinel().to_string()
        }
        Command::GenomicRangeQuery { dna, queries } => {
            let genome: Genome = dna.parse()?;
            let impacts = queries
                .into_iter()
                .map(|(p, q)| {
                    ensure!(
                        p <= q && q < genome.len(),
                        "query {p}:{q} out of range for length {}",
                        genome.len()
                    );
                    Ok(genome.min_impact(p..=q))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            SpaceSep(&impacts).to_string()
        }
        Command::MinAvgTwoSlice(v) => values::<i64>(&v, input)?
            .min_avg_two_slice()
            .or_sentinel()
            .to_string(),
        Command::MaxProductOfThree(v) => values::<i32>(&v, input)?
            .max_product_of_three()
            .or_sentinel()
            .to_string(),
        Command::Triangle(v) => flag(values::<i64>(&v, input)?.has_triangle()),
        Command::Brackets { text: t } => flag(properly_nested(&text(t, input)?)),
        Command::Nesting { text: t } => flag(nested_parens(&text(t, input)?)),
        Command::Fish { directions, values: v } => {
            let sizes = values::<u64>(&v, input)?;
            ensure!(
                sizes.len() == directions.len(),
                "{} sizes but {} directions",
                sizes.len(),
                directions.len()
            );
            let fish = sizes
                .into_iter()
                .zip(directions)
                .map(|(size, dir)| match dir {
                    0 => Ok((size, Direction::Upstream)),
                    1 => Ok((size, Direction::Downstream)),
                    _ => bail!("fish direction must be 0 or 1, found {dir}"),
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            fish.surviving_fish().to_string()
        }
        Command::Mirror { divisor, text: words } => {
            let line = text((!words.is_empty()).then(|| words.join(" ")), input)?;
            let mut console = Console::new(vec![]);
            let res = with_looking_glass(&mut console, |console, what| {
                console.write_line(what)?;
                for l in line.lines() {
                    console.write_line(l)?;
                }
                if let Some(d) = divisor {
                    let len = i64::try_from(line.chars().count())
                        .map_err(|e| GlassError::Other(e.to_string()))?;
                    console.write_line(&checked_div(len, d)?.to_string())?;
                }
                Ok(())
            });
            res.context("looking glass failed")?;
            String::from_utf8(console.into_inner())?.trim_end().to_owned()
        }
        Command::Hook => {
            let mut registry = Registry::new();
            registry.define::<Klass>().define::<Shouty>().decorate::<Klass>();
            let klass = Klass;
            let shouty = Shouty("hey");
            let calls = [
                registry.call(&klass, "method_a"),
                registry.call(&klass, "method_b"),
                registry.call(&shouty, "method_a"),
                registry.call(&shouty, "method_b"),
            ];
            calls
                .into_iter()
                .map(|c| c.unwrap_or_else(|| "-".to_owned()))
                .collect::<Vec<_>>()
                .join("\n")
        }
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    fn lessons(args: &[&str], stdin: &str) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(
            std::iter::once("lessons").chain(args.iter().copied()),
        )?;
        run(cli.command, &mut stdin.as_bytes())
    }

    fn ok(args: &[&str]) -> String { lessons(args, "").unwrap() }

    #[test]
    fn core() {
        assert_eq!(ok(&["dominator", "1", "2", "1", "1", "3"]), "0");
        assert_eq!(ok(&["dominator", "1,2,3"]), "-1");
        assert_eq!(ok(&["stone-wall", "8,8,5,7,9,8,7,4,8"]), "7");
        assert_eq!(ok(&["stone-wall", "--blocks", "1", "2", "1"]), "2\n2 1..2\n1 0..3");
        assert_eq!(ok(&["discs", "1", "5", "2", "1", "4", "0"]), "11");
        assert_eq!(ok(&["discs", "--limit", "10", "1,5,2,1,4,0"]), "-1");
    }

    #[test]
    fn stdin() {
        assert_eq!(lessons(&["dominator"], "3 4 3\n2 3 -1 3 3\n").unwrap(), "0");
        assert_eq!(lessons(&["discs"], "").unwrap(), "0");
        assert_eq!(lessons(&["brackets"], "{[()()]}").unwrap(), "1");
        assert_eq!(lessons(&["nesting"], "())").unwrap(), "0");
    }

    #[test]
    fn lessons_output() {
        assert_eq!(ok(&["binary-gap", "1041"]), "5");
        assert_eq!(ok(&["cyclic-rotation", "-k", "3", "3,8,9,7,6"]), "9 7 6 3 8");
        assert_eq!(ok(&["odd-occurrences", "9", "3", "9", "3", "9", "7", "9"]), "7");
        assert_eq!(ok(&["frog-jmp", "10", "85", "30"]), "3");
        assert_eq!(ok(&["perm-missing-elem", "2", "3", "1", "5"]), "4");
        assert_eq!(ok(&["tape-equilibrium", "3", "1", "2", "4", "3"]), "1");
        assert_eq!(ok(&["frog-river-one", "-x", "5", "1,3,1,4,2,3,5,4"]), "6");
        assert_eq!(ok(&["max-counters", "-n", "5", "3,4,4,6,1,4,4"]), "3 2 2 4 2");
        assert_eq!(ok(&["missing-integer", "1", "3", "6", "4", "1", "2"]), "5");
        assert_eq!(ok(&["perm-check", "4", "1", "3"]), "0");
        assert_eq!(ok(&["count-div", "6", "11", "2"]), "3");
        assert_eq!(ok(&["passing-cars", "0", "1", "0", "1", "1"]), "5");
        assert_eq!(
            ok(&["genomic-range-query", "CAGCCTA", "-q", "2:4", "-q", "5:5", "-q", "0:6"]),
            "2 4 1"
        );
        assert_eq!(ok(&["min-avg-two-slice", "4,2,2,5,1,5,8"]), "1");
        assert_eq!(ok(&["max-product-of-three", "-3", "1", "2", "-2", "5", "6"]), "60");
        assert_eq!(ok(&["triangle", "10,2,5,1,8,20"]), "1");
        assert_eq!(ok(&["brackets", "([)()]"]), "0");
        assert_eq!(ok(&["nesting", "(()(())())"]), "1");
        assert_eq!(ok(&["fish", "--directions", "0,1,0,0,0", "4,3,2,1,5"]), "2");
    }

    #[test]
    fn scoped() {
        assert_eq!(ok(&["mirror", "abc", "def"]), "YKCOWREBBAJ\nfed cba");
        assert_eq!(ok(&["mirror", "--divisor", "2", "abcd"]), "YKCOWREBBAJ\ndcba\n2");
        assert_eq!(
            ok(&["mirror", "--divisor", "0", "abcd"]),
            "YKCOWREBBAJ\ndcba\nPlease DO NOT divide by zero!"
        );
        assert_eq!(
            ok(&["hook"]),
            "Builder.init_subclass:method_a(Klass)\n\
             deco:method_b(Klass)\n\
             SHOUTY(\"HEY\")\n\
             -"
        );
    }

    #[test]
    fn errors() {
        assert!(lessons(&["discs", "1", "-2"], "").is_err());
        assert!(lessons(&["dominator", "x"], "").is_err());
        assert!(lessons(&["frog-jmp", "1", "2", "0"], "").is_err());
        assert!(lessons(&["count-div", "5", "2", "1"], "").is_err());
        assert!(lessons(&["passing-cars", "0", "2"], "").is_err());
        assert!(lessons(&["genomic-range-query", "ACGU"], "").is_err());
        assert!(lessons(&["genomic-range-query", "AC", "-q", "1:2"], "").is_err());
        assert!(lessons(&["fish", "--directions", "0,1", "4"], "").is_err());
        assert!(lessons(&["fish", "--directions", "2", "4"], "").is_err());

        let err = lessons(&["dominator", "1", "two"], "").unwrap_err();
        assert_eq!(err.to_string(), "invalid input values");
        assert!(format!("{err:#}").contains("cannot read `two` as `i64`"));
    }
}
